use super::LayoutSlot;
use crate::geometry::{FloatRect, Size};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconArrangement<Id: Copy + Eq + Ord> {
    pub placements: Vec<(Id, FloatRect)>,
    pub reserved_height: u16,
}

/// Pack minimized windows into rows of fixed-size icons along the bottom of
/// `area`, topmost window first. Rows fill left to right and stack upward.
pub fn arrange_icons<Id: Copy + Eq + Ord>(
    icons: &[LayoutSlot<Id>],
    area: Size,
    icon: Size,
) -> IconArrangement<Id> {
    if icons.is_empty() || icon.is_empty() {
        return IconArrangement {
            placements: Vec::new(),
            reserved_height: 0,
        };
    }
    let mut ordered: Vec<&LayoutSlot<Id>> = icons.iter().collect();
    ordered.sort_by(|a, b| b.z_order.cmp(&a.z_order));

    let per_row = usize::from((area.width / icon.width).max(1));
    let rows = ordered.len().div_ceil(per_row);

    let placements = ordered
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            let row = (index / per_row) as i32;
            let column = (index % per_row) as i32;
            let x = column * icon.width as i32;
            let y = (area.height as i32 - icon.height as i32 * (row + 1)).max(0);
            (slot.id, FloatRect::new(x, y, icon.width, icon.height))
        })
        .collect();

    let reserved = (rows as u32 * icon.height as u32).min(area.height as u32) as u16;
    IconArrangement {
        placements,
        reserved_height: reserved,
    }
}
