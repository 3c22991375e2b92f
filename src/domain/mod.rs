// Domain layer: the record model and the ports the engine is generic over.

pub mod model;
pub mod ports;
