//! Playlist manager: MP3/WAV track records, ordered playlists and a flat
//! pipe-delimited file format for saving them.
//!
//! The binary in `main.rs` is a demo driver over this library.

pub mod config;
pub mod error;
pub mod playlist;
pub mod track;
