use std::time::Duration;

use playlist_manager::playlist::Playlist;
use playlist_manager::track::Track;

pub const CLASSIC_ROCK: &str = "Classic Rock Hits";
pub const HIGH_FIDELITY: &str = "High-Quality WAV Collection";
pub const MIXED: &str = "Mixed Favorites";

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

/// Three playlists built from six sample tracks; the mixed one is shuffled.
pub fn sample_playlists() -> Vec<Playlist> {
    let bohemian = Track::mp3("Bohemian Rhapsody", "Queen", secs(3), 320);
    let sweet_child = Track::mp3("Sweet Child O' Mine", "Guns N' Roses", secs(1), 256);
    let imagine = Track::wav("Imagine", "John Lennon", secs(1), 44_100);
    let billie_jean = Track::wav("Billie Jean", "Michael Jackson", secs(2), 48_000);
    let stairway = Track::mp3("Stairway to Heaven", "Led Zeppelin", secs(4), 192);
    let teen_spirit = Track::wav("Smells Like Teen Spirit", "Nirvana", secs(1), 44_100);

    let mut classic_rock = Playlist::new(CLASSIC_ROCK);
    classic_rock.add_track(bohemian.clone());
    classic_rock.add_track(sweet_child.clone());
    classic_rock.add_track(stairway);

    let mut high_fidelity = Playlist::new(HIGH_FIDELITY);
    high_fidelity.add_track(imagine.clone());
    high_fidelity.add_track(billie_jean);
    high_fidelity.add_track(teen_spirit);

    let mut mixed = Playlist::new(MIXED);
    mixed.add_track(bohemian);
    mixed.add_track(imagine);
    mixed.add_track(sweet_child);
    mixed.shuffle_tracks();

    vec![classic_rock, high_fidelity, mixed]
}
