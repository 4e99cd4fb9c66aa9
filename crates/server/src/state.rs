use busline::prelude::*;

pub struct AppState {
    pub registry: Registry,
    pub jitter: Box<dyn Jitter>,
    pub clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(registry: Registry, jitter: Box<dyn Jitter>, clock: Box<dyn Clock>) -> Self {
        Self {
            registry,
            jitter,
            clock,
        }
    }
}
