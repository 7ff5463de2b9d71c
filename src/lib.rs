pub mod config;
pub mod error;
pub mod scm;
pub mod stamp;
pub mod template;
pub mod ui;
pub mod version;

pub use error::{Result, StampError};
