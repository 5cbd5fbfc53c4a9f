//! API endpoint handlers for the Marquee backend.

pub mod movies;
