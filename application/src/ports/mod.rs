//! Ports - interfaces implemented by the infrastructure layer

pub mod history_store;
pub mod provider_gateway;
