//! Compute module - Numerical core of the moth-flame optimizer.

mod error;
mod flames;
mod objective;
mod optimizer;
mod population;
mod rng;
mod schedule;
mod space;
mod spiral;

pub use error::*;
pub use flames::*;
pub use objective::*;
pub use optimizer::*;
pub use population::*;
pub use rng::*;
pub use schedule::*;
pub use space::*;
pub use spiral::*;
