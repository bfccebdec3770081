//! Track records and their format-specific metadata.
//!
//! A `Track` carries the attributes every entry has (title, artist,
//! duration) plus a `TrackFormat` payload that holds the bitrate for MP3s,
//! the sample rate for WAVs, or just the raw tag for anything else.

mod display;
mod model;

pub use display::format_duration;
pub use model::*;

#[cfg(test)]
mod tests;
