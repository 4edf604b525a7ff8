pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod gematria;
pub mod io;
pub mod paths;
pub mod types;

pub use error::{LuachError, Result};
