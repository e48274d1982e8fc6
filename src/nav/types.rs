//! Navigation graph types

use std::error::Error;
use std::fmt;

/// Top-level screens of the app. Exactly one is current at any time.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum AppScreen {
    Splash,
    Onboarding,
    Login,
    Signup,
    ForgotPassword,
    // Home, Calendar, Reminders, etc. will come later
}

impl AppScreen {
    pub fn label(self) -> &'static str {
        match self {
            Self::Splash => "Splash",
            Self::Onboarding => "Onboarding",
            Self::Login => "Login",
            Self::Signup => "Signup",
            Self::ForgotPassword => "ForgotPassword",
        }
    }
}

/// Back-stack effect of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Push the current screen onto the back-stack and show the target.
    Push,
    /// Show the target and drop the current screen from history entirely.
    /// Used for the single-shot Splash and Onboarding screens.
    ReplaceInclusive,
    /// Pop back to a screen already in history, collapsing everything
    /// above it. With `inclusive` the named screen itself is popped too.
    PopToNamed { inclusive: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    /// The requested transition is not an edge of the navigation graph.
    /// This is a programming error in the screen wiring, not a user state.
    UnknownDestination { from: AppScreen, to: AppScreen },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownDestination { from, to } => {
                write!(
                    f,
                    "no transition from {} to {}",
                    from.label(),
                    to.label()
                )
            }
        }
    }
}

impl Error for NavError {}
