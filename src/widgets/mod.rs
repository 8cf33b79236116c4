pub mod carousel;
pub mod dashboard;
pub mod modal;
pub mod packs;
