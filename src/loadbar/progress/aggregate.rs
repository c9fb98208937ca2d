use crate::loadbar::progress::progress_manager::ResourceProgress;

/// Totals over every tracked resource, recomputed after each report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AggregateState {
    pub(crate) expected: u64,
    pub(crate) loaded: u64,
    pub(crate) expected_count: usize,
    pub(crate) loaded_count: usize,
}

impl AggregateState {
    pub(crate) fn add(&mut self, progress: &ResourceProgress) {
        self.expected = self.expected.saturating_add(progress.target_size);
        self.loaded = self.loaded.saturating_add(progress.loaded_size);
        self.expected_count += 1;
        if progress.is_complete {
            self.loaded_count += 1;
        }
    }

    /// True when every tracked resource is complete, including when none is tracked.
    pub(crate) fn is_complete(&self) -> bool {
        self.loaded_count >= self.expected_count
    }

    /// floor(loaded * 100 / expected), 0 when nothing is expected.
    /// Saturates at `u64::MAX` when loaded is far above expected.
    pub(crate) fn percent(&self) -> u64 {
        if self.expected == 0 {
            return 0;
        }
        u64::try_from(self.loaded as u128 * 100 / self.expected as u128).unwrap_or(u64::MAX)
    }

    pub(crate) fn status_text(&self) -> String {
        let percent = if self.is_complete() {
            100
        } else {
            self.percent()
        };
        format!(
            "Loading... {} / {} - {percent:>3} %",
            self.loaded_count, self.expected_count
        )
    }
}

impl<'a> FromIterator<&'a ResourceProgress> for AggregateState {
    fn from_iter<I: IntoIterator<Item = &'a ResourceProgress>>(iter: I) -> Self {
        let mut state = AggregateState::default();
        iter.into_iter().for_each(|progress| state.add(progress));
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadbar::progress::load_event::LoadEvent;
    use crate::loadbar::progress::progress_manager::ProgressManager;
    use rstest::rstest;

    fn state(expected: u64, loaded: u64, expected_count: usize, loaded_count: usize) -> AggregateState {
        AggregateState {
            expected,
            loaded,
            expected_count,
            loaded_count,
        }
    }

    #[rstest]
    #[case(state(100, 50, 1, 0), 50)]
    #[case(state(150, 75, 2, 1), 50)]
    #[case(state(3, 1, 1, 0), 33)]
    #[case(state(3, 2, 1, 0), 66)]
    #[case(state(0, 0, 0, 0), 0)]
    #[case(state(0, 10, 1, 0), 0)]
    #[case(state(1, 3, 1, 0), 300)]
    #[case(state(1, u64::MAX, 1, 0), u64::MAX)]
    fn test_percent(#[case] state: AggregateState, #[case] expected: u64) {
        assert_eq!(expected, state.percent());
    }

    #[rstest]
    #[case(state(100, 50, 1, 0), "Loading... 0 / 1 -  50 %")]
    #[case(state(100, 5, 3, 1), "Loading... 1 / 3 -   5 %")]
    #[case(state(100, 100, 1, 1), "Loading... 1 / 1 - 100 %")]
    #[case(state(150, 75, 2, 2), "Loading... 2 / 2 - 100 %")]
    fn test_status_text(#[case] state: AggregateState, #[case] expected: &str) {
        assert_eq!(expected, state.status_text());
    }

    #[test]
    fn test_empty_is_complete() {
        assert!(AggregateState::default().is_complete());
    }

    #[test]
    fn test_totals_saturate() {
        let mut manager = ProgressManager::default();
        manager.apply(LoadEvent::progress("a", u64::MAX / 2 + 1, u64::MAX / 2 + 1));
        manager.apply(LoadEvent::progress("b", u64::MAX / 2 + 1, u64::MAX / 2 + 1));
        let state = manager.aggregate();
        assert_eq!(u64::MAX, state.expected);
        assert_eq!(u64::MAX, state.loaded);
        assert_eq!(100, state.percent());
    }

    #[test]
    fn test_large_sizes_do_not_overflow() {
        let state = state(u64::MAX, u64::MAX / 2, 1, 0);
        assert_eq!(49, state.percent());
    }
}
