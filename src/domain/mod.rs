// Domain layer: numeral and roster types plus the roster source port.

pub mod model;
pub mod ports;
