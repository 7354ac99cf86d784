pub mod cyrillic;
pub mod motion;
pub mod nav_icon;
pub mod random;
pub mod settings;

pub use cyrillic::transliterate;
