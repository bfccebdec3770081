use std::thread;
use std::time::Duration;

use rand::seq::SliceRandom;

use crate::config::PlaybackSettings;
use crate::track::{Track, format_duration};

/// A named, ordered list of tracks. Order is playback order and duplicates
/// are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Remove the track at `index`. Out-of-range indices are ignored.
    pub fn remove_track(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.tracks.remove(index);
        }
    }

    /// Uniformly permute the tracks in place.
    pub fn shuffle_tracks(&mut self) {
        self.tracks.shuffle(&mut rand::rng());
    }

    pub fn total_duration(&self) -> Duration {
        if self.tracks.is_empty() {
            tracing::warn!(playlist = %self.name, "no tracks in this playlist");
            return Duration::ZERO;
        }
        self.tracks.iter().map(Track::duration).sum()
    }

    /// Play every track in order.
    ///
    /// With `pacing.realtime` set this blocks for each track's duration and
    /// then for `pacing.pause_between_ms` before moving on.
    pub fn play_all(&self, pacing: &PlaybackSettings) {
        if self.tracks.is_empty() {
            println!("No tracks in playlist: {}", self.name);
            return;
        }

        println!(
            "Playing playlist: {} ({})",
            self.name,
            format_duration(self.total_duration())
        );
        for track in &self.tracks {
            println!(
                "Now playing: {} by {} [{}]",
                track.title(),
                track.artist(),
                format_duration(track.duration())
            );
            track.play();
            if pacing.realtime {
                thread::sleep(track.duration());
            }
            println!("Finished: {}\n", track.title());
            if pacing.realtime {
                thread::sleep(pacing.pause_between());
            }
        }
        tracing::debug!(playlist = %self.name, tracks = self.tracks.len(), "playlist finished");
    }
}
