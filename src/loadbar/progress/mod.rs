//! Progress aggregation of the resources being loaded.

pub(crate) mod aggregate;
pub(crate) mod aggregator;
pub(crate) mod hide_timer;
pub(crate) mod load_event;
pub(crate) mod progress_manager;

pub(crate) use aggregator::LoaderSlot;
pub(crate) use load_event::LoadEvent;
