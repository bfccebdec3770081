use std::fs::{self, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::PlaybackSettings;
use crate::error::{Error, Result};

use super::codec::{self, LoadReport};
use super::model::Playlist;

const EXTENSION: &str = "txt";

/// A folder of persisted playlists, one `<name>.txt` file each.
///
/// Every operation first makes sure the folder exists, so a `Storage` can
/// be built for a path that is not there yet.
#[derive(Debug, Clone)]
pub struct Storage {
    folder: PathBuf,
}

impl Storage {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Path of the file a playlist called `name` is stored in.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.folder.join(format!("{name}.{EXTENSION}"))
    }

    /// Create the folder if it is missing.
    ///
    /// A non-directory sitting at the path is not removed; the creation
    /// attempt fails and that failure is returned.
    pub fn ensure_dir(&self) -> Result<()> {
        match fs::metadata(&self.folder) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => self.create_dir(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.create_dir(),
            Err(source) => Err(Error::DirectoryAccess {
                path: self.folder.clone(),
                source,
            }),
        }
    }

    fn create_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.folder).map_err(|source| Error::DirectoryCreate {
            path: self.folder.clone(),
            source,
        })?;
        tracing::info!(folder = %self.folder.display(), "created playlist directory");
        Ok(())
    }

    /// Write `playlist` to `<filename_hint>.txt`, or `<playlist name>.txt`
    /// when the hint is empty. Never overwrites an existing file.
    pub fn save(&self, playlist: &Playlist, filename_hint: &str) -> Result<PathBuf> {
        self.ensure_dir()?;

        let stem = if filename_hint.is_empty() {
            playlist.name()
        } else {
            filename_hint
        };
        let path = self.path_for(stem);

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| {
                if source.kind() == io::ErrorKind::AlreadyExists {
                    Error::AlreadyExists(path.clone())
                } else {
                    Error::FileCreate {
                        path: path.clone(),
                        source,
                    }
                }
            })?;

        let mut out = BufWriter::new(file);
        let written = out
            .write_all(codec::encode(playlist).as_bytes())
            .and_then(|()| out.flush());
        drop(out);
        discard_on_error(&path, written).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            playlist = %playlist.name(),
            tracks = playlist.len(),
            path = %path.display(),
            "playlist saved"
        );
        Ok(path)
    }

    /// Names of all saved playlists (file stems), sorted.
    pub fn saved_playlists(&self) -> Result<Vec<String>> {
        self.ensure_dir()?;

        let access_err = |source| Error::DirectoryAccess {
            path: self.folder.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.folder).map_err(access_err)? {
            let path = entry.map_err(access_err)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn load(&self, name: &str) -> Result<Playlist> {
        self.load_with_report(name).map(|(playlist, _)| playlist)
    }

    /// Like [`Storage::load`], also reporting how many track lines were skipped.
    pub fn load_with_report(&self, name: &str) -> Result<(Playlist, LoadReport)> {
        self.ensure_dir()?;

        let path = self.path_for(name);
        let file = fs::File::open(&path).map_err(|source| Error::FileOpen {
            path: path.clone(),
            source,
        })?;

        let (playlist, report) = codec::decode(BufReader::new(file), &path)?;
        tracing::debug!(
            playlist = %playlist.name(),
            tracks = playlist.len(),
            skipped = report.skipped,
            "playlist loaded"
        );
        Ok((playlist, report))
    }

    /// Load a saved playlist and play it. Load failures are logged, not
    /// returned; the result says whether anything was played.
    pub fn play_saved(&self, name: &str, pacing: &PlaybackSettings) -> bool {
        match self.load(name) {
            Ok(playlist) => {
                playlist.play_all(pacing);
                true
            }
            Err(e) => {
                tracing::error!(playlist = %name, error = %e, "could not play saved playlist");
                false
            }
        }
    }
}

/// Remove a half-written file so the name can be saved again later.
pub(super) fn discard_on_error<T>(path: &Path, result: io::Result<T>) -> io::Result<T> {
    if result.is_err() {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "could not remove partial playlist file"
            );
        }
    }
    result
}
