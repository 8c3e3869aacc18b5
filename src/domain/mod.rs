// Domain layer: identifier model and the checksum port. No I/O in here.

pub mod model;
pub mod ports;
