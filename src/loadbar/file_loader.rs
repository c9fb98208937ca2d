use crate::event::Event;
use crate::event::Event::LoadProgress;
use crate::loadbar::progress::LoadEvent;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

const CHUNK_SIZE: usize = 64 * 1024;
const REPORT_INTERVAL: Duration = Duration::from_millis(50);

/// The name a file reports its progress with.
pub(crate) fn resource_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

pub(crate) fn spawn(path: PathBuf, sender: Sender<Event>) {
    thread::spawn(move || match load_file(&path, &sender) {
        Ok(size) => info!("Loaded {path:?} ({size} bytes)"),
        Err(e) => warn!("{e:?}"),
    });
}

/// Reads the whole file, reporting the bytes read so far.
pub(crate) fn load_file(path: &Path, sender: &Sender<Event>) -> Result<u64> {
    let name = resource_name(path);
    let file = File::open(path).with_context(|| format!("Unable to open {path:?}"))?;
    let file_size = file.metadata()?.len();
    send(sender, LoadEvent::progress(name.as_str(), 0, file_size))?;

    let mut reader = BufReader::new(file);
    let mut chunk = vec![0u8; CHUNK_SIZE];
    let mut loaded = 0u64;
    let mut start = Instant::now();
    loop {
        let read = reader
            .read(&mut chunk)
            .with_context(|| format!("Unable to read {path:?}"))?;
        if read == 0 {
            break;
        }
        loaded += read as u64;
        if start.elapsed() > REPORT_INTERVAL {
            send(
                sender,
                LoadEvent::new(name.as_str(), false).with_loaded_size(loaded),
            )?;
            start = Instant::now();
        }
    }
    send(sender, LoadEvent::complete(name).with_loaded_size(loaded))?;
    Ok(loaded)
}

fn send(sender: &Sender<Event>, event: LoadEvent) -> Result<()> {
    sender
        .send(LoadProgress(event))
        .context("Loader is not listening anymore")
}
