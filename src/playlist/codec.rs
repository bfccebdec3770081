//! Line format for persisted playlists.
//!
//! ```text
//! <playlist name>
//! title|artist|durationMillis|format|extra
//! ...
//! ```
//!
//! `extra` is the bitrate for mp3, the sample rate for wav and `0` for any
//! other tag. Fields are not escaped, so a `|` inside a title or artist
//! produces a line with the wrong field count, which the decoder skips.

use std::fmt::Write as _;
use std::io::{self, BufRead};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::track::Track;

use super::model::Playlist;

const FIELD_SEPARATOR: char = '|';
const FIELD_COUNT: usize = 5;

/// Why a single track line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("duration is not a non-negative integer: {0:?}")]
    Duration(String),

    #[error("extra metadata is not an integer: {0:?}")]
    Extra(String),
}

/// Outcome of decoding a playlist file beyond the playlist itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Track lines that were malformed and left out.
    pub skipped: usize,
}

pub(crate) fn encode_track(track: &Track) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        track.title(),
        track.artist(),
        track.duration().as_millis(),
        track.format_tag(),
        track.extra()
    )
}

pub(crate) fn encode(playlist: &Playlist) -> String {
    let mut out = String::new();
    out.push_str(playlist.name());
    out.push('\n');
    for track in playlist.tracks() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", encode_track(track));
    }
    out
}

pub(crate) fn parse_track_line(line: &str) -> std::result::Result<Track, LineError> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(parts.len()));
    }

    let millis: u64 = parts[2]
        .parse()
        .map_err(|_| LineError::Duration(parts[2].to_string()))?;
    let extra: i64 = parts[4]
        .parse()
        .map_err(|_| LineError::Extra(parts[4].to_string()))?;

    Ok(Track::from_tag(
        parts[0],
        parts[1],
        Duration::from_millis(millis),
        parts[3],
        extra,
    ))
}

/// Read one `\n`-terminated line, replacing invalid UTF-8 instead of failing.
/// Returns `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Decode a whole playlist file. `path` is only used for error context.
pub(crate) fn decode<R: BufRead>(mut reader: R, path: &Path) -> Result<(Playlist, LoadReport)> {
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = Vec::new();
    let Some(name) = read_line(&mut reader, &mut buf).map_err(read_err)? else {
        return Err(Error::EmptyFile(path.to_path_buf()));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::BlankName(path.to_path_buf()));
    }

    let mut playlist = Playlist::new(name);
    let mut report = LoadReport::default();

    // Line 1 is the name, so track lines start at 2.
    let mut line_no = 1;
    while let Some(line) = read_line(&mut reader, &mut buf).map_err(read_err)? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_track_line(line) {
            Ok(track) => playlist.add_track(track),
            Err(e) => {
                report.skipped += 1;
                tracing::warn!(
                    file = %path.display(),
                    line = line_no,
                    error = %e,
                    "skipping malformed track line"
                );
            }
        }
    }

    Ok((playlist, report))
}
