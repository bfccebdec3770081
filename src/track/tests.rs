use super::*;
use std::time::Duration;

#[test]
fn format_duration_pads_minutes_and_seconds() {
    assert_eq!(format_duration(Duration::ZERO), "00:00");
    assert_eq!(format_duration(Duration::from_secs(3)), "00:03");
    assert_eq!(format_duration(Duration::from_secs(185)), "03:05");
    assert_eq!(format_duration(Duration::from_millis(59_999)), "00:59");
    assert_eq!(format_duration(Duration::from_secs(3 * 3600 + 7)), "3:00:07");
}

#[test]
fn mp3_track_exposes_bitrate_and_tag() {
    let t = Track::mp3("Song", "Band", Duration::from_millis(3000), 128);
    assert_eq!(t.title(), "Song");
    assert_eq!(t.artist(), "Band");
    assert_eq!(t.duration(), Duration::from_secs(3));
    assert_eq!(t.format_tag(), "mp3");
    assert_eq!(t.extra(), 128);
    assert_eq!(t.bitrate_kbps(), Some(128));
    assert_eq!(t.sample_rate_hz(), None);
}

#[test]
fn wav_track_exposes_sample_rate_and_tag() {
    let t = Track::wav("Imagine", "John Lennon", Duration::from_secs(1), 44_100);
    assert_eq!(t.format_tag(), "wav");
    assert_eq!(t.extra(), 44_100);
    assert_eq!(t.sample_rate_hz(), Some(44_100));
    assert_eq!(t.bitrate_kbps(), None);
}

#[test]
fn base_track_keeps_its_tag_and_has_no_extra() {
    let t = Track::base("Song", "Band", Duration::from_secs(2), "flac");
    assert_eq!(t.format_tag(), "flac");
    assert_eq!(t.extra(), 0);
    assert_eq!(t.format(), &TrackFormat::Other("flac".into()));
}

#[test]
fn from_tag_dispatches_on_known_formats() {
    let d = Duration::from_secs(1);
    let mp3 = Track::from_tag("a", "b", d, "mp3", 320);
    assert_eq!(mp3, Track::mp3("a", "b", d, 320));
    let wav = Track::from_tag("a", "b", d, "wav", 48_000);
    assert_eq!(wav, Track::wav("a", "b", d, 48_000));
    let other = Track::from_tag("a", "b", d, "ogg", 99);
    assert_eq!(other, Track::base("a", "b", d, "ogg"));
}

#[test]
fn play_message_differs_per_variant() {
    let d = Duration::from_secs(3);
    assert_eq!(
        Track::mp3("Bohemian Rhapsody", "Queen", d, 320).play_message(),
        "Playing MP3: Bohemian Rhapsody by Queen [00:03, 320 kbps]"
    );
    assert_eq!(
        Track::wav("Imagine", "John Lennon", d, 44_100).play_message(),
        "Playing WAV: Imagine by John Lennon [00:03, 44100 Hz]"
    );
    assert_eq!(
        Track::base("Song", "Band", d, "ogg").play_message(),
        "Playing: Song by Band [00:03]"
    );
}
