// UI constants: layout sizes, animation timings and text limits in one place.

/// Initial window size in logical pixels (phone-like column)
pub const WINDOW_SIZE: [f32; 2] = [420.0, 760.0];

/// Smallest window the list still lays out sensibly in
pub const WINDOW_MIN_SIZE: [f32; 2] = [280.0, 320.0];

/// Number of characters kept in the collapsed description summary
pub const SUMMARY_LIMIT: usize = 60;

/// Marker appended to a truncated summary
pub const ELLIPSIS: &str = "...";

/// Padding around the whole list
pub const LIST_PADDING: f32 = 8.0;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;
}

/// Card-specific layout and animation constants
pub mod card {
    /// Space between the card and its neighbours (symmetric)
    pub const OUTER_MARGIN: f32 = 8.0;

    /// Inner margin of card frame (symmetric)
    pub const INNER_MARGIN: f32 = 16.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 16.0;

    /// Background tint transition length
    pub const TINT_ANIM_SECS: f32 = 0.4;

    /// Indicator rotation transition length
    pub const ARROW_ANIM_SECS: f32 = 0.3;

    /// Side of the square the expand indicator is painted into
    pub const INDICATOR_SIZE: f32 = 24.0;

    /// Alpha multiplier applied to the summary line
    pub const SUMMARY_ALPHA: f32 = 0.8;
}
