//! Presentational components for the hospital portal.

pub mod components;

pub use components::*;
