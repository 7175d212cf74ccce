// Domain layer: cart model, user notices and the ports the store talks through.

pub mod model;
pub mod notice;
pub mod ports;
