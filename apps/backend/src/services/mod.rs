//! Application services for the Marquee backend.

pub mod catalog;

pub use catalog::{MemoryCatalog, MovieLookup};
