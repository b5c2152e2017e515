//! Router construction for the ozweather HTTP proxy, exposed as a library so
//! route-level tests can drive it without binding a socket.

pub mod api;
