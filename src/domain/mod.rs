// Domain layer: models and ports. Concrete collaborators live in `adapters`.

pub mod model;
pub mod ports;
