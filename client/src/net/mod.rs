//! Networking bindings for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts `gloo-net` to the core's `Transport` seam; every REST
//! call goes through `evonto::ApiClient` on top of it.

pub mod transport;
