// Domain layer: record models, ports and the two pure transforms.

pub mod model;
pub mod ports;

pub mod services;
