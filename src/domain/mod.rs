// Domain layer: the student value, the faculty aggregate and the observer port.

pub mod faculty;
pub mod model;
pub mod ports;
