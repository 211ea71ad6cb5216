// Domain layer: entities, identifiers and ports. No knowledge of config or output backends.

pub mod model;
pub mod ports;
