//! Top-level navigation graph
//!
//! Owns the current screen and an explicit back-stack so that push,
//! inclusive-replace, and pop-to-named semantics are testable without any
//! rendering framework. Screens call the named transition helpers; the
//! generic `navigate` underneath validates each request against the fixed
//! edge table.

use crate::nav::types::{AppScreen, NavError, NavMode};

pub struct NavGraph {
    current: AppScreen,
    back_stack: Vec<AppScreen>,
}

impl Default for NavGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl NavGraph {
    pub fn new() -> Self {
        Self {
            current: AppScreen::Splash,
            back_stack: Vec::new(),
        }
    }

    pub fn current(&self) -> AppScreen {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Apply a transition. Requests outside the edge table fail with
    /// `UnknownDestination`; in particular Splash and Onboarding are never
    /// valid targets once exited.
    pub fn navigate(&mut self, target: AppScreen, mode: NavMode) -> Result<(), NavError> {
        if !edge_allowed(self.current, target, mode) {
            return Err(NavError::UnknownDestination {
                from: self.current,
                to: target,
            });
        }
        match mode {
            NavMode::Push => {
                self.back_stack.push(self.current);
                self.current = target;
            }
            NavMode::ReplaceInclusive => {
                // The outgoing screen is not recorded: it becomes
                // unreachable via pop.
                self.current = target;
            }
            NavMode::PopToNamed { inclusive } => {
                self.pop_to(target, inclusive);
            }
        }
        Ok(())
    }

    /// Standard back pop. Silent no-op when the stack is empty, which is
    /// the terminal condition at the stack root.
    pub fn pop_back_stack(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Pop everything above `target`; with `inclusive`, pop `target` too.
    /// No-op when the target is nowhere in history.
    fn pop_to(&mut self, target: AppScreen, inclusive: bool) -> bool {
        if self.current != target && !self.back_stack.contains(&target) {
            return false;
        }
        while self.current != target {
            if !self.pop_back_stack() {
                return false;
            }
        }
        if inclusive {
            return self.pop_back_stack();
        }
        true
    }

    // ------------------------------------------------------------------
    // The edge table, one helper per trigger. These are the only
    // transitions screens get to invoke.
    // ------------------------------------------------------------------

    /// Splash: boot delay elapsed.
    pub fn splash_finished(&mut self) {
        self.apply(AppScreen::Onboarding, NavMode::ReplaceInclusive);
    }

    /// Onboarding: finish or skip.
    pub fn onboarding_finished(&mut self) {
        self.apply(AppScreen::Login, NavMode::ReplaceInclusive);
    }

    /// Login: "Sign up" link.
    pub fn open_signup(&mut self) {
        self.apply(AppScreen::Signup, NavMode::Push);
    }

    /// Login: "Forgot Password?" link.
    pub fn open_forgot_password(&mut self) {
        self.apply(AppScreen::ForgotPassword, NavMode::Push);
    }

    /// Signup/ForgotPassword: "Sign in" link. Collapses any intermediate
    /// screens rather than just popping the top.
    pub fn return_to_login(&mut self) {
        self.apply(AppScreen::Login, NavMode::PopToNamed { inclusive: false });
    }

    fn apply(&mut self, target: AppScreen, mode: NavMode) {
        let from = self.current;
        match self.navigate(target, mode) {
            Ok(()) => {
                println!(
                    "[moodtrack] nav: {} -> {} (stack depth {})",
                    from.label(),
                    self.current.label(),
                    self.depth()
                );
            }
            Err(e) => {
                debug_assert!(false, "illegal navigation: {e}");
                eprintln!("[moodtrack] nav: rejected transition: {e}");
            }
        }
    }
}

/// The fixed transition table. Everything not listed here is a wiring bug.
fn edge_allowed(from: AppScreen, to: AppScreen, mode: NavMode) -> bool {
    use AppScreen::*;
    match (from, to, mode) {
        (Splash, Onboarding, NavMode::ReplaceInclusive) => true,
        (Onboarding, Login, NavMode::ReplaceInclusive) => true,
        (Login, Signup, NavMode::Push) => true,
        (Login, ForgotPassword, NavMode::Push) => true,
        (Signup, Login, NavMode::PopToNamed { inclusive: false }) => true,
        (ForgotPassword, Login, NavMode::PopToNamed { inclusive: false }) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_at_login() -> NavGraph {
        let mut nav = NavGraph::new();
        nav.splash_finished();
        nav.onboarding_finished();
        nav
    }

    #[test]
    fn test_starts_at_splash_with_empty_stack() {
        let nav = NavGraph::new();
        assert_eq!(nav.current(), AppScreen::Splash);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_boot_replaces_splash() {
        let mut nav = NavGraph::new();
        nav.splash_finished();
        assert_eq!(nav.current(), AppScreen::Onboarding);
        // Splash is gone from history: popping is a no-op.
        assert_eq!(nav.depth(), 0);
        assert!(!nav.pop_back_stack());
        assert_eq!(nav.current(), AppScreen::Onboarding);
    }

    #[test]
    fn test_onboarding_finish_replaces_onboarding() {
        let nav = graph_at_login();
        assert_eq!(nav.current(), AppScreen::Login);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_login_pushes_signup_and_pop_returns() {
        let mut nav = graph_at_login();
        nav.open_signup();
        assert_eq!(nav.current(), AppScreen::Signup);
        assert_eq!(nav.depth(), 1);

        assert!(nav.pop_back_stack());
        assert_eq!(nav.current(), AppScreen::Login);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_signin_link_collapses_to_login() {
        let mut nav = graph_at_login();
        let depth_before = nav.depth();

        nav.open_signup();
        nav.return_to_login();

        // Signup is removed entirely, not merely navigated past.
        assert_eq!(nav.current(), AppScreen::Login);
        assert_eq!(nav.depth(), depth_before);
    }

    #[test]
    fn test_forgot_password_round_trip() {
        let mut nav = graph_at_login();
        nav.open_forgot_password();
        assert_eq!(nav.current(), AppScreen::ForgotPassword);
        nav.return_to_login();
        assert_eq!(nav.current(), AppScreen::Login);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_pop_on_empty_stack_is_silent_noop() {
        let mut nav = graph_at_login();
        assert!(!nav.pop_back_stack());
        assert_eq!(nav.current(), AppScreen::Login);
    }

    #[test]
    fn test_exited_screens_are_not_reachable_targets() {
        let mut nav = graph_at_login();
        assert_eq!(
            nav.navigate(AppScreen::Splash, NavMode::Push),
            Err(NavError::UnknownDestination {
                from: AppScreen::Login,
                to: AppScreen::Splash,
            })
        );
        assert_eq!(
            nav.navigate(AppScreen::Onboarding, NavMode::ReplaceInclusive),
            Err(NavError::UnknownDestination {
                from: AppScreen::Login,
                to: AppScreen::Onboarding,
            })
        );
        assert_eq!(nav.current(), AppScreen::Login);
    }

    #[test]
    fn test_off_table_mode_is_rejected() {
        let mut nav = graph_at_login();
        // Signup is only reachable via Push.
        assert!(
            nav.navigate(AppScreen::Signup, NavMode::ReplaceInclusive)
                .is_err()
        );
    }
}
