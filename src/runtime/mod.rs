use std::env;

use anyhow::{Context, Result, bail};
use rand::seq::IndexedRandom;

use playlist_manager::error::Error;
use playlist_manager::playlist::Storage;
use playlist_manager::track::format_duration;

mod demo;
mod logging;
mod settings;

pub fn run() -> Result<()> {
    let settings = settings::load_settings();
    logging::init(&settings.logging)?;
    if let Ok(rendered) = settings.to_toml() {
        tracing::debug!("effective settings:\n{rendered}");
    }

    let cwd = env::current_dir().context("could not determine the current directory")?;
    let storage = Storage::new(settings.storage.resolve(&cwd));
    let pacing = &settings.playback;

    println!("=== Loading saved playlist: {} ===", demo::MIXED);
    match storage.load(demo::MIXED) {
        Ok(playlist) => playlist.play_all(pacing),
        Err(e) => tracing::warn!(error = %e, "no previous playlist to resume"),
    }

    let playlists = demo::sample_playlists();
    for playlist in &playlists {
        println!(
            "{}: {} tracks, {} total",
            playlist.name(),
            playlist.len(),
            format_duration(playlist.total_duration())
        );
    }

    println!("\n=== Saving playlists ===");
    for playlist in &playlists {
        match storage.save(playlist, "") {
            Ok(_) => {}
            Err(Error::AlreadyExists(path)) => {
                tracing::warn!(path = %path.display(), "playlist already saved, skipping");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("saving playlist {:?}", playlist.name()));
            }
        }
    }

    println!("\n=== Discovering saved playlists ===");
    let names = storage
        .saved_playlists()
        .with_context(|| format!("listing playlists in {}", storage.folder().display()))?;
    for name in &names {
        println!("Found playlist: {name}");
    }

    let Some(selected) = names.choose(&mut rand::rng()) else {
        bail!("no playlists found in {}", storage.folder().display());
    };

    println!("\n=== Randomly selected playlist: {selected} ===");
    storage.play_saved(selected, pacing);
    Ok(())
}
