use std::time::Duration;

use super::display::format_duration;

pub const MP3_TAG: &str = "mp3";
pub const WAV_TAG: &str = "wav";

/// Format tag plus the metadata that only makes sense for that format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackFormat {
    Mp3 { bitrate_kbps: i64 },
    Wav { sample_rate_hz: i64 },
    /// Any other tag. Carries no extra metadata.
    Other(String),
}

impl TrackFormat {
    pub fn tag(&self) -> &str {
        match self {
            TrackFormat::Mp3 { .. } => MP3_TAG,
            TrackFormat::Wav { .. } => WAV_TAG,
            TrackFormat::Other(tag) => tag,
        }
    }

    /// The value persisted in the `extra` column: bitrate, sample rate, or 0.
    ///
    /// Stored as read; negative or oversized values are kept, not validated.
    pub fn extra(&self) -> i64 {
        match self {
            TrackFormat::Mp3 { bitrate_kbps } => *bitrate_kbps,
            TrackFormat::Wav { sample_rate_hz } => *sample_rate_hz,
            TrackFormat::Other(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
    artist: String,
    duration: Duration,
    format: TrackFormat,
}

impl Track {
    pub fn mp3(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: Duration,
        bitrate_kbps: i64,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
            format: TrackFormat::Mp3 { bitrate_kbps },
        }
    }

    pub fn wav(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: Duration,
        sample_rate_hz: i64,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
            format: TrackFormat::Wav { sample_rate_hz },
        }
    }

    /// A bare record with an arbitrary format tag and no extra metadata.
    pub fn base(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: Duration,
        format: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
            format: TrackFormat::Other(format.into()),
        }
    }

    /// Rebuild a track from its tag and `extra` value.
    ///
    /// `mp3` and `wav` map to their variants; every other tag becomes a base
    /// record and `extra` is dropped.
    pub fn from_tag(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: Duration,
        tag: &str,
        extra: i64,
    ) -> Self {
        match tag {
            MP3_TAG => Self::mp3(title, artist, duration, extra),
            WAV_TAG => Self::wav(title, artist, duration, extra),
            other => Self::base(title, artist, duration, other),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn format(&self) -> &TrackFormat {
        &self.format
    }

    pub fn format_tag(&self) -> &str {
        self.format.tag()
    }

    pub fn extra(&self) -> i64 {
        self.format.extra()
    }

    pub fn bitrate_kbps(&self) -> Option<i64> {
        match self.format {
            TrackFormat::Mp3 { bitrate_kbps } => Some(bitrate_kbps),
            _ => None,
        }
    }

    pub fn sample_rate_hz(&self) -> Option<i64> {
        match self.format {
            TrackFormat::Wav { sample_rate_hz } => Some(sample_rate_hz),
            _ => None,
        }
    }

    /// The line `play` prints for this track.
    pub fn play_message(&self) -> String {
        let duration = format_duration(self.duration);
        match &self.format {
            TrackFormat::Mp3 { bitrate_kbps } => format!(
                "Playing MP3: {} by {} [{}, {} kbps]",
                self.title, self.artist, duration, bitrate_kbps
            ),
            TrackFormat::Wav { sample_rate_hz } => format!(
                "Playing WAV: {} by {} [{}, {} Hz]",
                self.title, self.artist, duration, sample_rate_hz
            ),
            TrackFormat::Other(_) => {
                format!("Playing: {} by {} [{}]", self.title, self.artist, duration)
            }
        }
    }

    pub fn play(&self) {
        println!("{}", self.play_message());
    }
}
