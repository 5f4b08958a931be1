// Domain layer: parking models and ports (interfaces) implemented by adapters and config.

pub mod model;
pub mod ports;
