// Domain layer: catalog models and ports (interfaces). No dependencies on
// the adapters or the engine.

pub mod model;
pub mod ports;
