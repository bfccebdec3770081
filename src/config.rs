//! Configuration loader and schema types.
//!
//! Settings decide where playlists are stored, how playback is paced and
//! how verbose logging is.

mod load;
mod schema;

pub use schema::*;
