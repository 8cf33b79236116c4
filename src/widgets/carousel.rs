/// Cyclic rotation state for the home-page image carousel.
///
/// The carousel only tracks position and pausing. The auto-rotation
/// timer lives with the caller, which restarts it after every manual
/// advance so a click does not get an immediate automatic follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    item_count: usize,
    index: usize,
    paused: bool,
}

impl Carousel {
    /// Rotation needs at least 3 items.
    pub fn new(item_count: usize) -> Option<Self> {
        if item_count < 3 {
            return None;
        }
        Some(Carousel {
            item_count,
            index: 0,
            paused: false,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Manual advance to the next item, wrapping at the end.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.item_count;
        self.index
    }

    /// Manual step back to the previous item, wrapping at the front.
    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.item_count - 1) % self.item_count;
        self.index
    }

    /// Timer-driven advance. Does nothing while the pointer hovers over
    /// the carousel; reports whether the position moved.
    pub fn auto_advance(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.next();
        true
    }

    /// The pointer entered the carousel.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// The pointer left the carousel.
    pub fn resume(&mut self) {
        self.paused = false;
    }
}
