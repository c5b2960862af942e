//! Application-wide constants

/// Minimum terminal width required to run the application
pub const MIN_TERMINAL_WIDTH: u16 = 60;

/// Minimum terminal height required to run the application
pub const MIN_TERMINAL_HEIGHT: u16 = 20;

/// Number of slides in the home page carousel
pub const TOTAL_SLIDES: usize = 2;

/// Inactivity timeout before the navbar hides itself (milliseconds)
pub const NAV_HIDE_DELAY_MS: u64 = 3000;

/// Minimum allowed value for the hide delay CLI parameter
pub const MIN_HIDE_DELAY_MS: u64 = 500;

/// Maximum allowed value for the hide delay CLI parameter
pub const MAX_HIDE_DELAY_MS: u64 = 60_000;

/// Gap kept between the navbar's bottom edge and a scrolled-to page (rows)
pub const SCROLL_GUTTER_ROWS: u16 = 1;

/// Maximum gutter accepted from config before clamping (rows)
pub const MAX_SCROLL_GUTTER_ROWS: u16 = 5;

/// Maximum length for a contact form field value (characters)
pub const MAX_FIELD_INPUT_LENGTH: usize = 100;

/// Rows a collapsed (inactive) page occupies in the document
pub const COLLAPSED_PAGE_ROWS: u16 = 1;

/// Horizontal padding applied to page content when wrapping (columns)
pub const CONTENT_PADDING: u16 = 2;

/// Frame duration in milliseconds for the UI render loop (targeting 60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;
