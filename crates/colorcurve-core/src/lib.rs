pub mod error;
pub mod consts;
pub mod params;
pub mod config;
pub mod curve;
pub mod remap;
pub mod jitter;
