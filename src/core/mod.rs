//! Service surfaces wrapped around the engine.

pub mod http;

pub use http::*;
