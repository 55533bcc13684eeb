//! Change detection for rebuild passes
//!
//! A [`DirtyState`] remembers the last value a pass committed. Resetting it
//! leaves no baseline, so the next comparison always reports a change.

/// Last committed value of a rebuild input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyState<T> {
    committed: Option<T>,
}

impl<T> Default for DirtyState<T> {
    fn default() -> Self {
        Self { committed: None }
    }
}

impl<T: PartialEq + Copy> DirtyState<T> {
    /// Create a state with no baseline
    pub fn new() -> Self {
        Self { committed: None }
    }

    /// Forget the baseline so the next check reports a change
    pub fn reset(&mut self) {
        self.committed = None;
    }

    /// Whether `current` differs from the committed baseline
    pub fn is_changed(&self, current: &T) -> bool {
        self.committed.as_ref() != Some(current)
    }

    /// Record `current` as the committed baseline
    pub fn commit(&mut self, current: T) {
        self.committed = Some(current);
    }

    /// Compare and commit in one step; returns whether `current` was new
    pub fn update(&mut self, current: T) -> bool {
        if !self.is_changed(&current) {
            return false;
        }
        self.commit(current);
        true
    }

    /// The committed baseline, if any
    pub fn committed(&self) -> Option<&T> {
        self.committed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_reports_change() {
        let state = DirtyState::<f32>::new();
        assert!(state.is_changed(&0.0));
        assert!(state.committed().is_none());
    }

    #[test]
    fn test_update_only_reports_new_values() {
        let mut state = DirtyState::new();
        assert!(state.update((10.0_f32, 5.0_f32)));
        assert!(!state.update((10.0, 5.0)));
        assert!(state.update((10.0, 6.0)));
        assert_eq!(state.committed(), Some(&(10.0, 6.0)));
    }

    #[test]
    fn test_reset_forces_change_for_same_value() {
        let mut state = DirtyState::new();
        state.commit(3_u32);
        assert!(!state.is_changed(&3));

        state.reset();
        assert!(state.is_changed(&3));
    }
}
