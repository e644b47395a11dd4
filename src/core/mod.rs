// src/core/mod.rs

pub mod location;
pub mod net;

pub use location::{Fetch, Location, SourceFetcher};
