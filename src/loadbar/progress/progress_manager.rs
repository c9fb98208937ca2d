use crate::loadbar::progress::aggregate::AggregateState;
use crate::loadbar::progress::load_event::LoadEvent;
use std::collections::BTreeMap;
use std::collections::btree_map::Values;

const DEFAULT_TARGET_SIZE: u64 = 1;

/// Tracks every resource that reported progress, keyed by lower-cased name.
/// Entries are never removed.
#[derive(Default, Debug)]
pub(crate) struct ProgressManager {
    progress: BTreeMap<String, ResourceProgress>,
}

impl ProgressManager {
    pub(crate) fn apply(&mut self, event: LoadEvent) -> &ResourceProgress {
        let progress = self
            .progress
            .entry(event.key())
            .or_insert_with(|| ResourceProgress::new(&event.resource_name));
        progress.apply(event);
        progress
    }

    #[cfg(test)]
    pub(crate) fn get(&self, resource_name: &str) -> Option<&ResourceProgress> {
        self.progress.get(&resource_name.to_lowercase())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }

    pub(crate) fn iter(&self) -> Values<'_, String, ResourceProgress> {
        self.progress.values()
    }

    pub(crate) fn aggregate(&self) -> AggregateState {
        self.iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResourceProgress {
    /// the spelling used by the last report
    pub(crate) resource_name: String,
    pub(crate) target_size: u64,
    pub(crate) loaded_size: u64,
    pub(crate) is_complete: bool,
}

impl ResourceProgress {
    fn new(resource_name: &str) -> Self {
        Self {
            resource_name: resource_name.to_owned(),
            target_size: DEFAULT_TARGET_SIZE,
            loaded_size: 0,
            is_complete: false,
        }
    }

    fn apply(&mut self, event: LoadEvent) {
        self.resource_name = event.resource_name;
        if let Some(target_size) = event.target_size {
            self.target_size = target_size;
        }
        if let Some(loaded_size) = event.loaded_size {
            self.loaded_size = loaded_size;
        }
        self.is_complete = event.is_complete;
        if self.is_complete {
            // a complete resource is never below or above 100%
            let final_size = self.target_size.max(self.loaded_size);
            self.target_size = final_size;
            self.loaded_size = final_size;
        }
    }

    pub(crate) fn percent(&self) -> f32 {
        if self.target_size == 0 {
            return 0.0;
        }
        self.loaded_size as f32 / self.target_size as f32
    }
}
