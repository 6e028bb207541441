//! Helpers for the HTTP boundary: path parameter decoding and per-request
//! store/language resolution.

pub mod context;
pub mod paths;
