//! Pure geometry for arranging child windows inside a client area.
//!
//! Nothing here touches a container; callers hand in [`LayoutSlot`]
//! snapshots and get back the bounds each window should take.

pub mod cascade;
pub mod floating;
pub mod icons;
pub mod tile;

use ratatui::prelude::{Direction, Rect};
use std::collections::BTreeMap;

use crate::config::MdiConfig;
use crate::geometry::{FloatRect, Size, rect_contains};

pub use cascade::cascade;
pub use icons::{IconArrangement, arrange_icons};
pub use tile::{group_sizes, tile};

/// Arrangement requested of a container. `ArrangeIcons` doubles as the idle
/// value the container's layout property rests at between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutCommand {
    Cascade,
    TileHorizontal,
    TileVertical,
    #[default]
    ArrangeIcons,
}

/// What the layout engine needs to know about one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSlot<Id: Copy + Eq + Ord> {
    pub id: Id,
    pub bounds: FloatRect,
    pub resizable: bool,
    pub z_order: u32,
    pub minimized: bool,
}

impl<Id: Copy + Eq + Ord> LayoutSlot<Id> {
    /// Resizable windows take the computed cell; fixed-size windows only take
    /// its origin.
    pub(crate) fn fit(&self, cell: FloatRect) -> FloatRect {
        if self.resizable {
            cell
        } else {
            FloatRect {
                x: cell.x,
                y: cell.y,
                ..self.bounds
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan<Id: Copy + Eq + Ord> {
    pub placements: Vec<(Id, FloatRect)>,
    /// Height at the bottom of the area claimed by minimized icon rows.
    pub reserved_height: u16,
}

impl<Id: Copy + Eq + Ord> Default for LayoutPlan<Id> {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
            reserved_height: 0,
        }
    }
}

/// Compute bounds for `command`. Minimized slots are always packed as icons
/// first; the remaining height is what cascade and tile get to use. An empty
/// area or an empty slot list yields an empty plan.
pub fn plan_layout<Id: Copy + Eq + Ord>(
    command: LayoutCommand,
    slots: &[LayoutSlot<Id>],
    area: Size,
    config: &MdiConfig,
) -> LayoutPlan<Id> {
    if area.is_empty() || slots.is_empty() {
        return LayoutPlan::default();
    }
    let (icons, windows): (Vec<_>, Vec<_>) = slots.iter().copied().partition(|s| s.minimized);
    let arrangement = arrange_icons(&icons, area, config.icon_size);
    let available_height = area.height.saturating_sub(arrangement.reserved_height);
    let mut placements = arrangement.placements;
    match command {
        LayoutCommand::Cascade => {
            placements.extend(cascade(&windows, area, available_height, config));
        }
        LayoutCommand::TileHorizontal => {
            placements.extend(tile(
                &windows,
                area,
                available_height,
                Direction::Horizontal,
            ));
        }
        LayoutCommand::TileVertical => {
            placements.extend(tile(&windows, area, available_height, Direction::Vertical));
        }
        LayoutCommand::ArrangeIcons => {}
    }
    LayoutPlan {
        placements,
        reserved_height: arrangement.reserved_height,
    }
}

#[derive(Debug, Clone)]
pub struct RegionMap<T: Copy + Eq + Ord> {
    regions: BTreeMap<T, Rect>,
}

impl<T: Copy + Eq + Ord> Default for RegionMap<T> {
    fn default() -> Self {
        Self {
            regions: BTreeMap::new(),
        }
    }
}

impl<T: Copy + Eq + Ord> RegionMap<T> {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn set(&mut self, id: T, rect: Rect) {
        self.regions.insert(id, rect);
    }

    pub fn get(&self, id: T) -> Option<Rect> {
        self.regions.get(&id).copied()
    }

    /// First id in `ids` whose region contains the cell; pass ids topmost
    /// first to respect stacking.
    pub fn hit_test(&self, column: u16, row: u16, ids: &[T]) -> Option<T> {
        for id in ids {
            if let Some(rect) = self.regions.get(id)
                && rect_contains(*rect, column, row)
            {
                return Some(*id);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: u8, z: u32, minimized: bool) -> LayoutSlot<u8> {
        LayoutSlot {
            id,
            bounds: FloatRect::new(0, 0, 50, 50),
            resizable: true,
            z_order: z,
            minimized,
        }
    }

    #[test]
    fn empty_area_is_a_no_op() {
        let slots = [slot(1, 0, false)];
        let plan = plan_layout(
            LayoutCommand::Cascade,
            &slots,
            Size::new(0, 600),
            &MdiConfig::default(),
        );
        assert!(plan.placements.is_empty());
    }

    #[test]
    fn icons_reserve_height_for_tiles() {
        let slots = [slot(1, 0, false), slot(2, 1, true)];
        let plan = plan_layout(
            LayoutCommand::TileHorizontal,
            &slots,
            Size::new(1000, 600),
            &MdiConfig::default(),
        );
        assert_eq!(plan.reserved_height, 29);
        let tiled = plan
            .placements
            .iter()
            .find(|(id, _)| *id == 1)
            .map(|(_, r)| *r)
            .unwrap();
        assert_eq!(tiled, FloatRect::new(0, 0, 1000, 571));
        let icon = plan
            .placements
            .iter()
            .find(|(id, _)| *id == 2)
            .map(|(_, r)| *r)
            .unwrap();
        assert_eq!(icon, FloatRect::new(0, 571, 160, 29));
    }

    #[test]
    fn arrange_icons_leaves_windows_alone() {
        let slots = [slot(1, 0, false), slot(2, 1, true)];
        let plan = plan_layout(
            LayoutCommand::ArrangeIcons,
            &slots,
            Size::new(500, 300),
            &MdiConfig::default(),
        );
        assert_eq!(plan.placements.len(), 1);
        assert_eq!(plan.placements[0].0, 2);
    }

    #[test]
    fn region_map_set_get_hit_test() {
        let mut map = RegionMap::default();
        let a = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 5,
        };
        let b = Rect {
            x: 3,
            y: 0,
            width: 5,
            height: 5,
        };
        map.set(1u8, a);
        map.set(2u8, b);
        assert_eq!(map.get(1u8), Some(a));
        // overlap resolves to whichever id is listed first
        assert_eq!(map.hit_test(4, 2, &[2u8, 1u8]), Some(2u8));
        assert_eq!(map.hit_test(4, 2, &[1u8, 2u8]), Some(1u8));
        assert_eq!(map.hit_test(100, 100, &[1u8, 2u8]), None);
    }
}
