use std::fmt::Display;

/// A progress report for one resource.
///
/// Only the sizes that are present overwrite what was previously stored for
/// the resource, the completion flag always does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadEvent {
    pub(crate) resource_name: String,
    pub(crate) target_size: Option<u64>,
    pub(crate) loaded_size: Option<u64>,
    pub(crate) is_complete: bool,
}

impl LoadEvent {
    pub(crate) fn new<T: Into<String>>(resource_name: T, is_complete: bool) -> LoadEvent {
        Self {
            resource_name: resource_name.into(),
            target_size: None,
            loaded_size: None,
            is_complete,
        }
    }

    /// An intermediate report with both sizes known.
    pub(crate) fn progress<T: Into<String>>(resource_name: T, loaded: u64, target: u64) -> Self {
        Self::new(resource_name, false)
            .with_loaded_size(loaded)
            .with_target_size(target)
    }

    pub(crate) fn complete<T: Into<String>>(resource_name: T) -> Self {
        Self::new(resource_name, true)
    }

    pub(crate) fn with_target_size(self, target_size: u64) -> Self {
        Self {
            target_size: Some(target_size),
            ..self
        }
    }

    pub(crate) fn with_loaded_size(self, loaded_size: u64) -> Self {
        Self {
            loaded_size: Some(loaded_size),
            ..self
        }
    }

    /// Resources are tracked case-insensitively.
    pub(crate) fn key(&self) -> String {
        self.resource_name.to_lowercase()
    }
}

impl Display for LoadEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resource_name)?;
        match (self.loaded_size, self.target_size) {
            (Some(loaded), Some(target)) => write!(f, " {loaded}/{target}")?,
            (Some(loaded), None) => write!(f, " {loaded}/?")?,
            (None, Some(target)) => write!(f, " ?/{target}")?,
            (None, None) => {}
        }
        if self.is_complete {
            write!(f, " (complete)")?;
        }
        Ok(())
    }
}
