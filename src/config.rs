//! Tunable policy for a container: stagger distance, resize minimums, icon
//! footprint and chrome heights.

use crate::constants::*;
use crate::error::{MdiError, Result};
use crate::geometry::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MdiConfig {
    pub layout_offset: u16,
    pub min_size: Size,
    pub icon_size: Size,
    pub cascade_width_percent: u16,
    pub cascade_height_percent: u16,
    pub button_panel_height: u16,
    pub tab_row_height: u16,
    pub max_tab_width: u16,
}

impl Default for MdiConfig {
    fn default() -> Self {
        Self {
            layout_offset: DEFAULT_LAYOUT_OFFSET,
            min_size: Size::new(DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT),
            icon_size: Size::new(ICON_WIDTH, ICON_HEIGHT),
            cascade_width_percent: CASCADE_WIDTH_PERCENT,
            cascade_height_percent: CASCADE_HEIGHT_PERCENT,
            button_panel_height: BUTTON_PANEL_HEIGHT,
            tab_row_height: TAB_ROW_HEIGHT,
            max_tab_width: MAX_TAB_WIDTH,
        }
    }
}

impl MdiConfig {
    /// Character-cell metrics for hosts that draw into a terminal, where the
    /// logical-unit defaults would dwarf the screen.
    pub fn terminal() -> Self {
        Self {
            layout_offset: 2,
            min_size: Size::new(12, 4),
            icon_size: Size::new(18, 3),
            button_panel_height: 1,
            tab_row_height: 1,
            max_tab_width: 18,
            ..Self::default()
        }
    }

    pub fn with_layout_offset(mut self, offset: u16) -> Self {
        self.layout_offset = offset;
        self
    }

    pub fn with_min_size(mut self, width: u16, height: u16) -> Self {
        self.min_size = Size::new(width, height);
        self
    }

    pub fn with_icon_size(mut self, width: u16, height: u16) -> Self {
        self.icon_size = Size::new(width, height);
        self
    }

    pub fn with_cascade_percent(mut self, width: u16, height: u16) -> Self {
        self.cascade_width_percent = width;
        self.cascade_height_percent = height;
        self
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<()> {
            Err(MdiError::InvalidConfig { field, reason })
        }
        if self.min_size.is_empty() {
            return invalid("min_size", "must be non-zero on both axes");
        }
        if self.icon_size.is_empty() {
            return invalid("icon_size", "must be non-zero on both axes");
        }
        for (field, pct) in [
            ("cascade_width_percent", self.cascade_width_percent),
            ("cascade_height_percent", self.cascade_height_percent),
        ] {
            if !(1..=100).contains(&pct) {
                return invalid(field, "must be within 1..=100");
            }
        }
        if self.tab_row_height == 0 {
            return invalid("tab_row_height", "must be non-zero");
        }
        if self.max_tab_width == 0 {
            return invalid("max_tab_width", "must be non-zero");
        }
        Ok(())
    }
}
