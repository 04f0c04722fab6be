//! Submit images to the remote Face API and decode what it sends back

/// Detection responses are deserialised into a set of structs defined here
pub mod detection;

/// HTTP client that submits one image per request
pub mod client;
