//! Playlists and their flat-file persistence.
//!
//! `Playlist` is the in-memory ordered collection. `Storage` owns the folder
//! of `<name>.txt` files and the save/list/load operations, and `codec`
//! translates between a playlist and its pipe-delimited line format.

mod codec;
mod model;
mod storage;

pub use codec::{LineError, LoadReport};
pub use model::Playlist;
pub use storage::Storage;
