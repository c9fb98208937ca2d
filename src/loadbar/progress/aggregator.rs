use crate::loadbar::progress::aggregate::AggregateState;
use crate::loadbar::progress::hide_timer::HideTimer;
use crate::loadbar::progress::load_event::LoadEvent;
use crate::loadbar::progress::progress_manager::{ProgressManager, ResourceProgress};
use crate::loadbar::view::{
    ElementHandle, LOADER_ID, LOADER_PROGRESS_ID, LOADER_STATUS_ID, LoaderView, Page, ViewSink,
};
use log::{debug, error, info};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoaderState {
    /// nothing reported yet
    Idle,
    Loading,
    Complete,
}

/// Merges the progress of every resource and drives the loader view.
#[derive(Debug)]
pub(crate) struct ProgressAggregator<V: ViewSink = LoaderView> {
    view: V,
    progress: ProgressManager,
    hide_timer: HideTimer,
    state: LoaderState,
}

impl<V: ViewSink> ProgressAggregator<V> {
    pub(crate) fn new(view: V, hide_timer: HideTimer) -> Self {
        info!("Loader created");
        Self {
            view,
            progress: ProgressManager::default(),
            hide_timer,
            state: LoaderState::Idle,
        }
    }

    pub(crate) fn show_loader(&mut self) {
        self.view.set_visible(true);
    }

    pub(crate) fn hide_loader(&mut self) {
        self.view.set_visible(false);
    }

    pub(crate) fn report_progress(&mut self, event: LoadEvent) {
        self.report_progress_at(event, Instant::now());
    }

    pub(crate) fn report_progress_at(&mut self, event: LoadEvent, now: Instant) {
        debug!("Progress {event}");
        self.progress.apply(event);
        let aggregate = self.progress.aggregate();
        self.update_view(&aggregate, now);
    }

    fn update_view(&mut self, aggregate: &AggregateState, now: Instant) {
        if aggregate.is_complete() {
            if self.state != LoaderState::Complete {
                info!("Loading done, removing loader");
                self.hide_timer.schedule(now);
                self.state = LoaderState::Complete;
            }
            self.view.set_width_percent(100);
        } else {
            if self.hide_timer.cancel() {
                info!("Loading continues...");
            }
            self.state = LoaderState::Loading;
            self.show_loader();
            self.view.set_width_percent(aggregate.percent());
        }
        self.view.set_status_text(&aggregate.status_text());
    }

    /// Advance the debounced hide, must be called regularly by the ui loop.
    pub(crate) fn tick(&mut self, now: Instant) {
        if self.hide_timer.poll(now) {
            self.hide_loader();
        }
    }

    #[cfg(test)]
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.hide_timer.next_deadline()
    }

    pub(crate) fn is_hide_pending(&self) -> bool {
        self.hide_timer.is_pending()
    }

    pub(crate) fn set_delays(&mut self, hide_delay: Duration, linger_delay: Duration) {
        self.hide_timer.set_delays(hide_delay, linger_delay);
    }

    pub(crate) fn state(&self) -> LoaderState {
        self.state
    }

    pub(crate) fn aggregate(&self) -> AggregateState {
        self.progress.aggregate()
    }

    #[cfg(test)]
    pub(crate) fn resource(&self, resource_name: &str) -> Option<&ResourceProgress> {
        self.progress.get(resource_name)
    }

    pub(crate) fn resources(&self) -> impl Iterator<Item = &ResourceProgress> {
        self.progress.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }
}

/// Owner of the one loader of the application.
///
/// The loader can only be created once its view exists, afterwards the same
/// instance is always returned.
#[derive(Debug)]
pub(crate) struct LoaderSlot<V: ViewSink = LoaderView> {
    instance: Option<ProgressAggregator<V>>,
}

impl<V: ViewSink> Default for LoaderSlot<V> {
    fn default() -> Self {
        Self { instance: None }
    }
}

impl<V: ViewSink> LoaderSlot<V> {
    pub(crate) fn get(&mut self) -> Option<&mut ProgressAggregator<V>> {
        self.instance.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.instance.is_some()
    }

    /// `view` is only called when no loader exists yet.
    pub(crate) fn get_or_init_with<F>(
        &mut self,
        view: F,
        hide_timer: HideTimer,
    ) -> Option<&mut ProgressAggregator<V>>
    where
        F: FnOnce() -> Option<V>,
    {
        if self.instance.is_none() {
            let Some(view) = view() else {
                error!("Document not initialized, please wait");
                return None;
            };
            self.instance = Some(ProgressAggregator::new(view, hide_timer));
        }
        self.instance.as_mut()
    }
}

impl LoaderSlot<LoaderView> {
    pub(crate) fn get_or_init(
        &mut self,
        container: Option<ElementHandle>,
        bar: Option<ElementHandle>,
        status: Option<ElementHandle>,
        hide_timer: HideTimer,
    ) -> Option<&mut ProgressAggregator> {
        self.get_or_init_with(
            || Some(LoaderView::new(container?, bar?, status?)),
            hide_timer,
        )
    }

    pub(crate) fn get_or_init_from_page(
        &mut self,
        page: &Page,
        hide_timer: HideTimer,
    ) -> Option<&mut ProgressAggregator> {
        self.get_or_init(
            page.get_element_by_id(LOADER_ID),
            page.get_element_by_id(LOADER_PROGRESS_ID),
            page.get_element_by_id(LOADER_STATUS_ID),
            hide_timer,
        )
    }
}
