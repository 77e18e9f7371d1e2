// Domain layer: seating models and the ports (I/O seams) the app is driven through.

pub mod model;
pub mod ports;
