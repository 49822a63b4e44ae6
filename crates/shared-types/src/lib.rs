pub mod config;
pub mod endpoints;
pub mod error;

pub use config::*;
pub use endpoints::*;
pub use error::*;
