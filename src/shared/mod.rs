pub mod clock;
pub mod geo;
pub mod jitter;
pub mod time;

pub use clock::*;
pub use geo::*;
pub use jitter::*;
pub use time::*;
