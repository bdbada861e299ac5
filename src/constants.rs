//! Shared crate-wide constants.

/// Diagonal stagger between successive cascaded windows.
pub const DEFAULT_LAYOUT_OFFSET: u16 = 10;

/// Smallest width a drag-resize may leave a window with. An edge drag that
/// would go below it is rejected outright rather than clamped.
pub const DEFAULT_MIN_WIDTH: u16 = 20;

/// Smallest height a drag-resize may leave a window with.
pub const DEFAULT_MIN_HEIGHT: u16 = 20;

/// Fixed footprint of a minimized window icon.
pub const ICON_WIDTH: u16 = 160;
pub const ICON_HEIGHT: u16 = 29;

/// Cascaded windows take this share of the client width...
pub const CASCADE_WIDTH_PERCENT: u16 = 58;

/// ...and this share of the height left over after icon rows are reserved.
pub const CASCADE_HEIGHT_PERCENT: u16 = 67;

/// A `Normal` window occupies `1 / NORMAL_SIZE_DIVISOR` of the client area
/// along each axis.
pub const NORMAL_SIZE_DIVISOR: u16 = 3;

/// Height of the container-level close/restore/maximize button strip.
pub const BUTTON_PANEL_HEIGHT: u16 = 26;

/// Height of one row of tabs in the tabbed container.
pub const TAB_ROW_HEIGHT: u16 = 24;

/// Tabs are assumed to render at their maximum width when computing how
/// many rows the tab strip needs.
pub const MAX_TAB_WIDTH: u16 = 130;
