use ratatui::prelude::Rect;

use super::WindowId;
use super::tabbed::TabStrip;
use crate::config::MdiConfig;

/// Where a container's chrome and client area sit inside the host rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRegions {
    pub tab_strip: Option<Rect>,
    pub button_panel: Rect,
    pub client_area: Rect,
}

/// Per-variant behaviour of a container. The container calls into its flavor
/// after each lifecycle change; a flavor never reaches back into the
/// container.
pub trait ContainerFlavor: std::fmt::Debug {
    fn build_layout_regions(&mut self, outer: Rect, config: &MdiConfig) -> LayoutRegions;

    fn on_child_added(&mut self, _id: WindowId) {}

    fn on_child_removed(&mut self, _id: WindowId) {}

    fn on_child_activated(&mut self, _id: WindowId) {}

    fn tab_strip(&self) -> Option<&TabStrip> {
        None
    }
}

/// Free-form canvas: a button panel on top, the client area below it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFlavor;

impl ContainerFlavor for StandardFlavor {
    fn build_layout_regions(&mut self, outer: Rect, config: &MdiConfig) -> LayoutRegions {
        let (button_panel, client_area) = split_top(outer, config.button_panel_height);
        LayoutRegions {
            tab_strip: None,
            button_panel,
            client_area,
        }
    }
}

/// Carve a band of `height` off the top of `area`.
pub(crate) fn split_top(area: Rect, height: u16) -> (Rect, Rect) {
    let top_h = height.min(area.height);
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_h,
    };
    let rest = Rect {
        x: area.x,
        y: area.y.saturating_add(top_h),
        width: area.width,
        height: area.height.saturating_sub(top_h),
    };
    (top, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_regions_stack_panel_over_client() {
        let outer = Rect {
            x: 0,
            y: 0,
            width: 800,
            height: 600,
        };
        let regions = StandardFlavor.build_layout_regions(outer, &MdiConfig::default());
        assert_eq!(regions.tab_strip, None);
        assert_eq!(regions.button_panel.height, 26);
        assert_eq!(
            regions.client_area,
            Rect {
                x: 0,
                y: 26,
                width: 800,
                height: 574
            }
        );
    }

    #[test]
    fn split_top_handles_short_areas() {
        let (top, rest) = split_top(
            Rect {
                x: 1,
                y: 1,
                width: 10,
                height: 3,
            },
            5,
        );
        assert_eq!(top.height, 3);
        assert_eq!(rest.height, 0);
    }
}
