pub mod catalog;
pub mod flow;
pub mod types;

// Re-exports
pub use catalog::onboarding_pages;
pub use flow::{ExitGate, OnboardingFlow, EXIT_CONFIRM_WINDOW};
pub use types::{Advance, BackPress, OnboardingError, OnboardingPage, PageSequence};
