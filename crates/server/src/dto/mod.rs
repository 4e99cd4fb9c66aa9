mod location;
mod route;
mod stop;

pub use location::*;
pub use route::*;
pub use stop::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
