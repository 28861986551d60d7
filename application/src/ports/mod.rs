//! Port definitions — interfaces implemented by the infrastructure layer.

pub mod completion_gateway;
