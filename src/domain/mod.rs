// Domain layer: core models and ports (interfaces). No dependencies on the
// engine or presentation layers.

pub mod model;
pub mod ports;
