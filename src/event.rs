use crate::loadbar::progress::LoadEvent;
use std::path::PathBuf;

#[derive(Debug)]
pub(crate) enum Event {
    /// A resource reports its loading progress
    LoadProgress(LoadEvent),
    /// A file was picked and must be loaded
    OpenFile(PathBuf),
}
