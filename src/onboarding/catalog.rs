//! The fixed onboarding page catalog

use crate::onboarding::types::{OnboardingPage, PageSequence};

pub const ONBOARDING_PAGES: [OnboardingPage; 4] = [
    OnboardingPage {
        title: "Understand your cycle with clarity",
        description: "Log periods, symptoms, and moods. Get gentle insights \
                      into your rhythm and fertile window.",
        image_ref: "onboarding_cycle",
    },
    OnboardingPage {
        title: "Follow pregnancy week by week",
        description: "Track baby's growth, kicks, contractions, and \
                      appointments with one simple dashboard.",
        image_ref: "onboarding_pregnancy",
    },
    OnboardingPage {
        title: "Never miss a medicine dose again",
        description: "Smart reminders, refill alerts, and history so you \
                      always stay on top of your care.",
        image_ref: "onboarding_medicine",
    },
    OnboardingPage {
        title: "All your health in one private place",
        description: "Secure, offline-first, and designed just for women's \
                      health. You're always in control.",
        image_ref: "onboarding_private",
    },
];

/// The page sequence shipped with the app. Infallible because the catalog
/// above is non-empty by construction; the constructor still validates it
/// so a bad edit fails at startup instead of at first lookup.
pub fn onboarding_pages() -> PageSequence {
    PageSequence::new(&ONBOARDING_PAGES).expect("onboarding catalog must not be empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_wellformed() {
        let pages = onboarding_pages();
        assert_eq!(pages.page_count(), 4);
        for i in 0..pages.page_count() {
            let page = pages.page_at(i).unwrap();
            assert!(!page.title.is_empty());
            assert!(!page.description.is_empty());
            assert!(!page.image_ref.is_empty());
        }
    }
}
