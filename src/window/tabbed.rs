use ratatui::prelude::Rect;

use super::WindowId;
use super::flavor::{ContainerFlavor, LayoutRegions, split_top};
use crate::config::MdiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEntry {
    pub child_id: WindowId,
}

/// Tab list mirroring a container's children.
///
/// Entries follow the container's add/remove notifications, so tab order is
/// child insertion order. Going the other way, a selected tab resolves to its
/// child id and the container activates that child.
#[derive(Debug, Clone, Default)]
pub struct TabStrip {
    tabs: Vec<TabEntry>,
    selected: Option<usize>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[TabEntry] {
        &self.tabs
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn child_at(&self, index: usize) -> Option<WindowId> {
        self.tabs.get(index).map(|tab| tab.child_id)
    }

    pub fn position_of(&self, id: WindowId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.child_id == id)
    }

    /// Rows needed to show every tab at `max_tab_width` across `width`. Only
    /// whole tabs fit on a row, so the slack at the end of each row counts
    /// against it. Always at least one, so the strip keeps its place when
    /// empty.
    pub fn row_count(&self, width: u16, max_tab_width: u16) -> u16 {
        let per_row = Self::tabs_per_row(width, max_tab_width);
        self.tabs
            .len()
            .div_ceil(per_row)
            .clamp(1, usize::from(u16::MAX)) as u16
    }

    /// Tabs that fit on one row of the strip.
    pub fn tabs_per_row(width: u16, max_tab_width: u16) -> usize {
        if max_tab_width == 0 {
            return 1;
        }
        usize::from((width / max_tab_width).max(1))
    }
}

impl ContainerFlavor for TabStrip {
    fn build_layout_regions(&mut self, outer: Rect, config: &MdiConfig) -> LayoutRegions {
        let rows = self.row_count(outer.width, config.max_tab_width);
        let strip_height = rows.saturating_mul(config.tab_row_height);
        let (tab_strip, rest) = split_top(outer, strip_height);
        let (button_panel, client_area) = split_top(rest, config.button_panel_height);
        LayoutRegions {
            tab_strip: Some(tab_strip),
            button_panel,
            client_area,
        }
    }

    fn on_child_added(&mut self, id: WindowId) {
        self.tabs.push(TabEntry { child_id: id });
    }

    fn on_child_removed(&mut self, id: WindowId) {
        let Some(index) = self.position_of(id) else {
            return;
        };
        self.tabs.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
    }

    fn on_child_activated(&mut self, id: WindowId) {
        if let Some(index) = self.position_of(id) {
            self.selected = Some(index);
        }
    }

    fn tab_strip(&self) -> Option<&TabStrip> {
        Some(self)
    }
}
