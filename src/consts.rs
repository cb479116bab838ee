//! DOM contract and default tuning values shared across controllers.

// ── Element ids ─────────────────────────────────────────────────

pub const MAIN_NAV_ID: &str = "mainNav";
pub const POST_LIST_ID: &str = "post-list";
pub const LOAD_MORE_ID: &str = "load-more";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const THEME_TOGGLE_ID: &str = "wfThemeToggle";
pub const CONFIG_SCRIPT_ID: &str = "wf-config";

/// Category filter buttons; each carries its id in `data-category`.
pub const CATEGORY_BUTTON_SELECTOR: &str = "#category-buttons button[data-category]";

/// Post items eligible for the reveal animation.
pub const REVEAL_TARGET_SELECTOR: &str = "article, .wf-empty";

// ── Classes and attributes ──────────────────────────────────────

pub const CLASS_FIXED: &str = "is-fixed";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_REVEAL_PENDING: &str = "reveal-pending";
pub const CLASS_REVEALED: &str = "is-revealed";

pub const ATTR_THEME: &str = "data-theme";
/// Bootstrap 5 colour-mode attribute, only present while dark.
pub const ATTR_DARK_COMPAT: &str = "data-bs-theme";
pub const ATTR_REVEAL_ID: &str = "data-reveal-id";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Defaults ────────────────────────────────────────────────────

/// Posts per page requested from the filter endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Scroll offset in pixels below which the back-to-top button stays hidden.
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 600.0;

/// Per-item reveal delay within a batch, in milliseconds.
pub const DEFAULT_STAGGER_MS: u32 = 60;

pub const DEFAULT_ENDPOINT: &str = "/filter-posts";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "wf-theme";
