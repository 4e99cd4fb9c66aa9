pub mod fleet;
pub mod repository;
pub mod shared;

pub mod prelude {
    pub use crate::fleet::{self, Fleet};
    pub use crate::repository::{Bus, LocationReport, Registry, RouteSummary, Status, Stop};
    pub use crate::shared::{
        Clock, Coordinate, FixedClock, FixedJitter, Jitter, RandomJitter, SeededJitter,
        SystemClock, Time,
    };
}
