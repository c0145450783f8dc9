//! Tuning constants shared across the page. Timing values mirror the
//! production CSS transitions, so keep them in sync when restyling.

/// Scroll offset past which the navbar gets its `scrolled` treatment.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Height reserved for the fixed navbar when scrolling to an anchor.
pub const NAV_ANCHOR_OFFSET_PX: f64 = 80.0;

/// Probe depth below the viewport top used to decide the active section.
pub const NAV_HIGHLIGHT_PROBE_PX: f64 = 200.0;

/// Viewport width at or below which the burger menu takes over.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Debounce window for the scroll-driven nav highlighting.
pub const SCROLL_DEBOUNCE_MS: u32 = 20;

/// How long the fake download request takes before it "succeeds".
pub const SEND_DELAY_MS: u32 = 2_000;

/// Notification slide-in kickoff delay, display hold, and slide-out duration.
pub const NOTIFICATION_ENTER_MS: u32 = 10;
pub const NOTIFICATION_HOLD_MS: u32 = 4_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Stats counter tick cadence and total run time.
pub const COUNTER_TICK_MS: u32 = 16;
pub const COUNTER_DURATION_MS: u32 = 2_000;

/// Hero stat targets: readers, rating, pages. The rating slot renders as a
/// literal "4.9/5" instead of counting up.
pub const STAT_TARGETS: [f64; 3] = [15_000.0, 4.9, 250.0];
pub const STAT_STAGGER_MS: u32 = 200;

/// Scroll-reveal observer tuning.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// The stats block starts counting once half of it is on screen.
pub const STATS_THRESHOLD: f64 = 0.5;

pub const ERROR_BORDER_COLOR: &str = "#ef4444";
pub const SUCCESS_ACCENT_COLOR: &str = "#10b981";
