/// Fixed navigation targets reached after a successful flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Register,
    Dashboard,
    Checkout,
    PackDetail,
}

impl Page {
    /// Relative file name of the page, as the site markup links it.
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Register => "registro.html",
            Page::Dashboard => "versionb.html",
            Page::Checkout => "checkout.html",
            Page::PackDetail => "pack.html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_maps_to_its_file() {
        assert_eq!(Page::Home.file_name(), "index.html");
        assert_eq!(Page::Register.file_name(), "registro.html");
        assert_eq!(Page::Dashboard.file_name(), "versionb.html");
        assert_eq!(Page::Checkout.file_name(), "checkout.html");
        assert_eq!(Page::PackDetail.file_name(), "pack.html");
    }
}
