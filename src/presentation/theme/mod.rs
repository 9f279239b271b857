//! Light and dark palettes.

pub mod adapter;
mod service;

pub use service::{Theme, parse_color};
