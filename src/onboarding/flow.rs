//! Onboarding flow controller
//!
//! Tracks the current carousel page and implements the double-back-to-exit
//! gate. All state changes happen synchronously in response to a UI event;
//! the gate is a pure function of (last timestamp, now), not a timer task.

use std::time::{Duration, Instant};

use crate::onboarding::types::{Advance, BackPress, OnboardingPage, PageSequence};

/// Two back presses within this window confirm the exit.
pub const EXIT_CONFIRM_WINDOW: Duration = Duration::from_millis(1500);

/// Double-back-to-exit debounce gate.
///
/// Shared by the Onboarding screen (via [`OnboardingFlow`]) and the Login
/// screen, which is the back-stack root and exits the same way.
#[derive(Debug, Default)]
pub struct ExitGate {
    last_press: Option<Instant>,
}

impl ExitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, now: Instant) -> BackPress {
        match self.last_press {
            Some(prev) if now.duration_since(prev) < EXIT_CONFIRM_WINDOW => {
                self.last_press = None;
                BackPress::ExitRequested
            }
            _ => {
                self.last_press = Some(now);
                BackPress::ExitConfirmationPending
            }
        }
    }
}

/// Paged onboarding state machine. Created when the Onboarding screen is
/// entered and dropped when it is exited.
#[derive(Debug)]
pub struct OnboardingFlow {
    pages: PageSequence,
    index: usize,
    exit_gate: ExitGate,
}

impl OnboardingFlow {
    pub fn new(pages: PageSequence) -> Self {
        Self {
            pages,
            index: 0,
            exit_gate: ExitGate::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_page(&self) -> &OnboardingPage {
        // The index is clamped by every mutation, so this cannot fail.
        self.pages
            .page_at(self.index)
            .expect("current page index within bounds")
    }

    pub fn is_last_page(&self) -> bool {
        self.index == self.pages.last_index()
    }

    /// Advance one page, or signal Finished from the last page. The caller
    /// reacts to `Finished` by leaving the Onboarding screen.
    pub fn go_next(&mut self) -> Advance {
        if self.is_last_page() {
            return Advance::Finished;
        }
        self.index = (self.index + 1).min(self.pages.last_index());
        Advance::Page(self.index)
    }

    /// Step back one page. Returns the new index, or None for the silent
    /// no-op at page 0.
    pub fn go_previous(&mut self) -> Option<usize> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.index)
    }

    /// Jump straight to a page (indicator tap or settled swipe). Out of
    /// range indices clamp to the nearest bound.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.index = index.min(self.pages.last_index());
        self.index
    }

    /// Finish the flow from any page. The UI hides the skip action on the
    /// last page, but the controller does not rely on that.
    pub fn skip(&mut self) -> Advance {
        Advance::Finished
    }

    pub fn handle_back_press(&mut self, now: Instant) -> BackPress {
        self.exit_gate.press(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::catalog::onboarding_pages;
    use crate::onboarding::types::{OnboardingError, OnboardingPage};

    const TWO_PAGES: [OnboardingPage; 2] = [
        OnboardingPage {
            title: "a",
            description: "b",
            image_ref: "c",
        },
        OnboardingPage {
            title: "d",
            description: "e",
            image_ref: "f",
        },
    ];

    fn flow() -> OnboardingFlow {
        OnboardingFlow::new(onboarding_pages())
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert_eq!(
            PageSequence::new(&[]).unwrap_err(),
            OnboardingError::EmptyPageSequence
        );
    }

    #[test]
    fn test_page_at_out_of_range() {
        let pages = onboarding_pages();
        assert_eq!(
            pages.page_at(pages.page_count()).unwrap_err(),
            OnboardingError::IndexOutOfRange {
                index: 4,
                count: 4
            }
        );
    }

    #[test]
    fn test_go_next_walks_to_last_then_finishes() {
        let mut flow = flow();
        let last = flow.page_count() - 1;
        for expected in 1..=last {
            assert_eq!(flow.go_next(), Advance::Page(expected));
        }
        assert!(flow.is_last_page());
        // Further calls signal Finished without moving the index.
        assert_eq!(flow.go_next(), Advance::Finished);
        assert_eq!(flow.go_next(), Advance::Finished);
        assert_eq!(flow.current_index(), last);
    }

    #[test]
    fn test_go_previous_is_noop_at_first_page() {
        let mut flow = flow();
        assert_eq!(flow.go_previous(), None);
        assert_eq!(flow.current_index(), 0);

        flow.jump_to(2);
        assert_eq!(flow.go_previous(), Some(1));
    }

    #[test]
    fn test_jump_to_clamps() {
        let mut flow = flow();
        assert_eq!(flow.jump_to(99), flow.page_count() - 1);
        assert_eq!(flow.jump_to(1), 1);
        assert_eq!(flow.jump_to(0), 0);
    }

    #[test]
    fn test_is_last_page_only_on_final_index() {
        let mut flow = OnboardingFlow::new(PageSequence::new(&TWO_PAGES).unwrap());
        assert!(!flow.is_last_page());
        flow.go_next();
        assert!(flow.is_last_page());
    }

    #[test]
    fn test_skip_finishes_from_any_page() {
        let mut flow = flow();
        assert_eq!(flow.skip(), Advance::Finished);
        flow.jump_to(flow.page_count() - 1);
        assert_eq!(flow.skip(), Advance::Finished);
    }

    #[test]
    fn test_double_back_within_window_exits() {
        let mut gate = ExitGate::new();
        let t0 = Instant::now();
        assert_eq!(gate.press(t0), BackPress::ExitConfirmationPending);
        assert_eq!(
            gate.press(t0 + Duration::from_millis(400)),
            BackPress::ExitRequested
        );
        // The gate resets after an exit request.
        assert_eq!(
            gate.press(t0 + Duration::from_millis(500)),
            BackPress::ExitConfirmationPending
        );
    }

    #[test]
    fn test_slow_back_presses_keep_pending() {
        let mut gate = ExitGate::new();
        let t0 = Instant::now();
        assert_eq!(gate.press(t0), BackPress::ExitConfirmationPending);
        // Exactly at the window boundary the press does not confirm.
        assert_eq!(
            gate.press(t0 + EXIT_CONFIRM_WINDOW),
            BackPress::ExitConfirmationPending
        );
        assert_eq!(
            gate.press(t0 + EXIT_CONFIRM_WINDOW + Duration::from_secs(2)),
            BackPress::ExitConfirmationPending
        );
    }

    #[test]
    fn test_flow_back_press_uses_gate() {
        let mut flow = flow();
        let t0 = Instant::now();
        assert_eq!(
            flow.handle_back_press(t0),
            BackPress::ExitConfirmationPending
        );
        assert_eq!(
            flow.handle_back_press(t0 + Duration::from_millis(100)),
            BackPress::ExitRequested
        );
    }
}
