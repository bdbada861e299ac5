use ratatui::prelude::Direction;

use super::LayoutSlot;
use crate::geometry::{FloatRect, Size};

/// Split `count` windows into `floor(sqrt(count))` groups whose sizes differ
/// by at most one; the larger groups come first.
pub fn group_sizes(count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let groups = count.isqrt().max(1);
    let base = count / groups;
    let extra = count % groups;
    (0..groups).map(|g| base + usize::from(g < extra)).collect()
}

/// Non-overlapping grid. `Direction::Horizontal` lays the groups out as
/// side-by-side columns with windows stacked inside each; `Vertical` lays
/// them out as rows with windows side by side.
pub fn tile<Id: Copy + Eq + Ord>(
    windows: &[LayoutSlot<Id>],
    area: Size,
    available_height: u16,
    direction: Direction,
) -> Vec<(Id, FloatRect)> {
    let sizes = group_sizes(windows.len());
    if sizes.is_empty() || area.width == 0 || available_height == 0 {
        return Vec::new();
    }
    let groups = sizes.len() as u32;
    let width = area.width as u32;
    let height = available_height as u32;

    let mut placements = Vec::with_capacity(windows.len());
    let mut remaining = windows.iter();
    for (group, &size) in sizes.iter().enumerate() {
        let group = group as u32;
        let band = match direction {
            Direction::Horizontal => {
                let band_width = width / groups;
                FloatRect::new((group * band_width) as i32, 0, band_width as u16, height as u16)
            }
            Direction::Vertical => {
                let band_height = height / groups;
                FloatRect::new(0, (group * band_height) as i32, width as u16, band_height as u16)
            }
        };
        let size = size as u32;
        for (index, slot) in remaining.by_ref().take(size as usize).enumerate() {
            let index = index as u32;
            let cell = match direction {
                Direction::Horizontal => {
                    let cell_height = band.height as u32 / size;
                    FloatRect::new(
                        band.x,
                        band.y + (index * cell_height) as i32,
                        band.width,
                        cell_height as u16,
                    )
                }
                Direction::Vertical => {
                    let cell_width = band.width as u32 / size;
                    FloatRect::new(
                        band.x + (index * cell_width) as i32,
                        band.y,
                        cell_width as u16,
                        band.height,
                    )
                }
            };
            placements.push((slot.id, slot.fit(cell)));
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(count: u8) -> Vec<LayoutSlot<u8>> {
        (0..count)
            .map(|id| LayoutSlot {
                id,
                bounds: FloatRect::new(5, 5, 50, 40),
                resizable: true,
                z_order: id as u32,
                minimized: false,
            })
            .collect()
    }

    #[test]
    fn group_sizes_differ_by_at_most_one() {
        assert_eq!(group_sizes(0), Vec::<usize>::new());
        assert_eq!(group_sizes(1), vec![1]);
        assert_eq!(group_sizes(3), vec![3]);
        assert_eq!(group_sizes(4), vec![2, 2]);
        assert_eq!(group_sizes(5), vec![3, 2]);
        assert_eq!(group_sizes(10), vec![4, 3, 3]);
    }

    #[test]
    fn four_windows_tile_horizontally_as_two_by_two() {
        let placed = tile(&slots(4), Size::new(1000, 600), 600, Direction::Horizontal);
        let rects: Vec<FloatRect> = placed.iter().map(|(_, r)| *r).collect();
        assert_eq!(
            rects,
            vec![
                FloatRect::new(0, 0, 500, 300),
                FloatRect::new(0, 300, 500, 300),
                FloatRect::new(500, 0, 500, 300),
                FloatRect::new(500, 300, 500, 300),
            ]
        );
    }

    #[test]
    fn vertical_tiling_computes_rows_first() {
        let placed = tile(&slots(5), Size::new(900, 600), 600, Direction::Vertical);
        let rects: Vec<FloatRect> = placed.iter().map(|(_, r)| *r).collect();
        // first row gets the extra window
        assert_eq!(rects[0], FloatRect::new(0, 0, 300, 300));
        assert_eq!(rects[2], FloatRect::new(600, 0, 300, 300));
        assert_eq!(rects[3], FloatRect::new(0, 300, 450, 300));
        assert_eq!(rects[4], FloatRect::new(450, 300, 450, 300));
    }

    #[test]
    fn fixed_size_windows_move_to_slot_origin() {
        let mut windows = slots(2);
        windows[1].resizable = false;
        let placed = tile(&windows, Size::new(800, 600), 600, Direction::Horizontal);
        assert_eq!(placed[1].1, FloatRect::new(0, 300, 50, 40));
    }
}
