pub mod components;
pub mod locale;

pub use locale::Locale;
