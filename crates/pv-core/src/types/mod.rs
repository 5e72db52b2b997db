//! Common types used across pv-* crates

pub mod dimensions;
pub mod params;

pub use dimensions::{Access, Agent, Granularity};
pub use params::PageviewParams;
