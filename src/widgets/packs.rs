/// A fixed travel package sold on the packs page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pack {
    pub code: &'static str,
    pub title: &'static str,
    pub destination: &'static str,
    pub nights: u32,
    pub price_eur: u32,
    pub description: &'static str,
}

/// Everything the packs page sells. The first entry doubles as the
/// fallback when a detail URL names no known pack.
pub static CATALOG: [Pack; 4] = [
    Pack {
        code: "caribe",
        title: "Caribbean All-Inclusive",
        destination: "Cancún, Mexico",
        nights: 7,
        price_eur: 1199,
        description: "A week of white-sand beaches with meals, drinks and two reef excursions included.",
    },
    Pack {
        code: "andes",
        title: "Andean Trails",
        destination: "Cusco, Peru",
        nights: 10,
        price_eur: 1590,
        description: "Guided trek through the Sacred Valley ending at Machu Picchu at sunrise.",
    },
    Pack {
        code: "fiordos",
        title: "Norwegian Fjords Cruise",
        destination: "Bergen, Norway",
        nights: 8,
        price_eur: 1740,
        description: "Small-ship cruise along Geirangerfjord with onboard naturalist talks.",
    },
    Pack {
        code: "camino",
        title: "Camino de Santiago",
        destination: "Sarria to Santiago, Spain",
        nights: 5,
        price_eur: 640,
        description: "The final hundred kilometres on foot, luggage transfers and pilgrim dinners arranged.",
    },
];

/// Query parameter that selects the pack to render.
pub const PACK_PARAM: &str = "pack";

/// Picks the pack a detail-page URL query selects, falling back to the
/// first catalog entry when the parameter is missing or names nothing.
pub fn from_query(query: &str) -> &'static Pack {
    select(param_value(query, PACK_PARAM).as_deref())
}

/// Looks up a pack by code; `None` or an unknown code yields the fallback.
pub fn select(code: Option<&str>) -> &'static Pack {
    code.and_then(|c| CATALOG.iter().find(|p| p.code == c))
        .unwrap_or(&CATALOG[0])
}

fn param_value(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_default();
            return Some(decoded);
        }
    }
    None
}
