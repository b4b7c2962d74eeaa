use crate::easing::Easing;

// Motion tuning shared by the core and the web binding. Durations are in ms.

// Pointer tilt
pub const TILT_DURATION_MS: f64 = 350.0;
pub const TILT_EASE: Easing = Easing::POWER2_OUT;
pub const TILT_RESET_DURATION_MS: f64 = 550.0;
pub const TILT_RESET_EASE: Easing = Easing::elastic_out(1.0, 0.6);

// Defaults when attaching without explicit values
pub const TILT_DEFAULT_MAX_X: f32 = 8.0;
pub const TILT_DEFAULT_MAX_Y: f32 = 12.0;
pub const TILT_DEFAULT_PERSPECTIVE: f32 = 900.0;

// Page tilt groups: (selector, max rotation x, max rotation y, perspective)
pub const TILT_GROUPS: [(&str, f32, f32, f32); 2] = [
    (".card-3d", 10.0, 18.0, 900.0),
    (".artifact-card", 8.0, 10.0, 700.0),
];

// Hero entrance, one entry per element
pub const HERO_SELECTORS: [&str; 3] = [
    ".hero-left .huge",
    ".hero-left .lead",
    ".hero-right .card-3d",
];
pub const HERO_FROM_Y: [f32; 3] = [36.0, 18.0, 0.0];
pub const HERO_FROM_X: [f32; 3] = [0.0, 0.0, 48.0];
pub const HERO_FROM_ROTATION_Y: [f32; 3] = [0.0, 0.0, 16.0];
pub const HERO_DELAY_MS: [f64; 3] = [120.0, 280.0, 360.0];
pub const HERO_DURATION_MS: f64 = 1000.0;
pub const HERO_EASE: Easing = Easing::POWER3_OUT;

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".artifact-card";
pub const REVEAL_START: &str = "top 85%";
pub const REVEAL_FROM_Y: f32 = 24.0;
pub const REVEAL_FROM_SCALE: f32 = 0.985;
pub const REVEAL_DURATION_MS: f64 = 850.0;
pub const REVEAL_EASE: Easing = Easing::POWER3_OUT;
pub const REVEAL_EASE_NAME: &str = "power3.out";

// Floating globe
pub const GLOBE_SELECTOR: &str = ".globe";
pub const GLOBE_FLOAT_Y: f32 = -18.0;
pub const GLOBE_FLOAT_DURATION_MS: f64 = 4500.0;
pub const GLOBE_FLOAT_EASE: Easing = Easing::SINE_IN_OUT;

// Image hover
pub const HOVER_CARD_SELECTOR: &str = ".artifact-card";
pub const HOVER_IMAGE_SCALE: f32 = 1.18;
pub const HOVER_IMAGE_ROTATION_Z: f32 = 1.0;
pub const HOVER_IMAGE_BRIGHTNESS: f32 = 1.15;
pub const HOVER_IMAGE_CONTRAST: f32 = 1.1;
pub const HOVER_CARD_SCALE: f32 = 1.03;
pub const HOVER_DURATION_MS: f64 = 450.0;
pub const HOVER_ENTER_EASE: Easing = Easing::POWER3_OUT;
pub const HOVER_LEAVE_EASE: Easing = Easing::POWER3_IN_OUT;

// Smooth navigation
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";
pub const FOCUS_DELAY_MS: u32 = 600;

// Keyboard press pulse on artifacts
pub const ARTIFACT_SELECTOR: &str = ".artifact";
pub const ARTIFACT_CARD_SELECTOR: &str = ".artifact-card";
pub const PRESS_FROM_SCALE: f32 = 0.985;
pub const PRESS_TO_SCALE: f32 = 1.02;
pub const PRESS_DURATION_MS: f64 = 180.0;
pub const PRESS_EASE: Easing = Easing::POWER1_IN_OUT;

// Tour button
pub const TOUR_BUTTON_ID: &str = "tourBtn";
pub const TOUR_FROM_SCALE: f32 = 0.98;
pub const TOUR_TO_SCALE: f32 = 1.04;
pub const TOUR_DURATION_MS: f64 = 120.0;
pub const TOUR_MESSAGE: &str = "Thanks! This tour is simulated in this demo.";

// Page
pub const YEAR_ELEMENT_ID: &str = "year";
pub const CONFIG_ELEMENT_ID: &str = "motion-config";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";
