//! Schema module - Configuration and result types for optimization runs.

mod config;
mod result;
mod run;

pub use config::*;
pub use result::*;
pub use run::*;
