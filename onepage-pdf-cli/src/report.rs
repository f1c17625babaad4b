//! The built-in one-page app summary.

use onepage_pdf::{Color, PageFlow, PageSize, Result, SinglePageDocument};

pub const DEFAULT_OUTPUT: &str = "output/pdf/desk-yoga-app-summary.pdf";

const REPORT_WIDTH: usize = 92;

/// Lays out the app summary and serializes it.
pub fn build_summary(page_size: PageSize) -> Result<Vec<u8>> {
    let mut flow = PageFlow::new(page_size);

    // an explicit white page keeps rasterized previews from turning transparent
    flow.fill_background(Color::white());

    flow.title("Desk Yoga - App Summary")?;

    flow.heading("What it is")?.paragraph(
        "Desk Yoga is a React Native (Expo) app that guides short, desk-friendly yoga sessions \
         with illustrated poses and timed transitions. Users can start a custom flow or pick a preset; \
         premium unlocks full access via in-app purchases.",
    )?;

    flow.heading("Who it's for")?.paragraph(
        "People who sit at a desk for long stretches and want quick stretch breaks during the workday \
         (including discreet sessions during meetings).",
    )?;

    flow.heading("What it does")?.bullets_with_width(
        [
            "Create a session by choosing posture (sitting/standing/any) and duration (1-120 minutes).",
            "Pick curated presets from the home screen; presets route to a paywall when not paid.",
            "Show each pose with an image, name, and step-by-step instructions (supports left/right variants).",
            "Auto-advance poses on a per-pose timer; pause, skip, or go back at any time.",
            "Session settings: time per pose, focus area, camera visibility filter, and transition sound toggle.",
            "In-app purchases: weekly/monthly/yearly/lifetime, restore purchase, and promo code redemption.",
        ],
        REPORT_WIDTH,
    )?;

    flow.heading("How it works (repo-based)")?.bullets_with_width(
        [
            "Navigation/UI: Expo Router screens in app/*, styled with NativeWind + Gluestack UI; splash + custom fonts.",
            "Content: static pose catalog in src/data/poses and preset definitions in src/types/presets.",
            "Session engine: src/utils/poseEngine selects the next pose from the catalog using session config \
             (posture/focus/camera) plus sessionHistory; unpaid users get a curated free-tier sequence.",
            "Timing/animation: usePoseTimer triggers transitions; useSessionDuration ends the session; \
             Reanimated glow overlay drives the pose swap.",
            "State/services: MMKV (src/utils/storage) persists userName, hasPaid, and sound setting; expo-av plays the chime.",
            "Backend/API: Not found in repo.",
        ],
        REPORT_WIDTH,
    )?;

    flow.heading("How to run (minimal)")?.bullets_with_width(
        [
            "npm install",
            "npm run start (Expo dev server)",
            "Run on iOS: npm run ios",
            "Run on Android: npm run android",
        ],
        REPORT_WIDTH,
    )?;

    SinglePageDocument::new(page_size, flow.finish()?).to_bytes()
}
