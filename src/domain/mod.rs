// Domain layer: employee records and the parameters the report depends on.

pub mod model;
pub mod ports;
