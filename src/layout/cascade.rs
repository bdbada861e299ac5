use super::LayoutSlot;
use crate::config::MdiConfig;
use crate::geometry::{FloatRect, Size, percent_of};

/// Stagger windows diagonally from the top-left corner, back to front.
///
/// Each step advances by `config.layout_offset`; when the next window would
/// cross the right edge or the bottom of `available_height`, the diagonal
/// restarts at the origin.
pub fn cascade<Id: Copy + Eq + Ord>(
    windows: &[LayoutSlot<Id>],
    area: Size,
    available_height: u16,
    config: &MdiConfig,
) -> Vec<(Id, FloatRect)> {
    let mut ordered: Vec<&LayoutSlot<Id>> = windows.iter().collect();
    ordered.sort_by_key(|slot| slot.z_order);

    let width = percent_of(area.width, config.cascade_width_percent);
    let height = percent_of(available_height, config.cascade_height_percent);
    let step = config.layout_offset as i32;

    let mut offset = 0i32;
    ordered
        .into_iter()
        .map(|slot| {
            let cell = slot.fit(FloatRect::new(offset, offset, width, height));
            if offset + cell.width as i32 > area.width as i32
                || offset + cell.height as i32 > available_height as i32
            {
                offset = 0;
            }
            let placed = cell.with_origin(offset, offset);
            offset += step;
            (slot.id, placed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: u8, z: u32) -> LayoutSlot<u8> {
        LayoutSlot {
            id,
            bounds: FloatRect::new(0, 0, 100, 100),
            resizable: true,
            z_order: z,
            minimized: false,
        }
    }

    #[test]
    fn five_windows_in_1000_by_600() {
        let windows: Vec<_> = (0..5).map(|i| slot(i, i as u32)).collect();
        let placed = cascade(
            &windows,
            Size::new(1000, 600),
            600,
            &MdiConfig::default(),
        );
        assert_eq!(placed.len(), 5);
        for (i, (_, rect)) in placed.iter().enumerate() {
            assert_eq!(rect.width, 580);
            assert_eq!(rect.height, 402);
            assert_eq!(rect.x, i as i32 * 10);
            assert_eq!(rect.y, i as i32 * 10);
        }
    }

    #[test]
    fn diagonal_restarts_on_overflow() {
        // 58% of 100 = 58; the 5th step at offset 40 would hit 98 <= 100, the
        // 6th at 50 would hit 108 and restarts.
        let windows: Vec<_> = (0..6).map(|i| slot(i, i as u32)).collect();
        let placed = cascade(&windows, Size::new(100, 1000), 1000, &MdiConfig::default());
        let offsets: Vec<i32> = placed.iter().map(|(_, r)| r.x).collect();
        assert_eq!(offsets, vec![0, 10, 20, 30, 40, 0]);
    }

    #[test]
    fn back_to_front_order_and_fixed_size_windows() {
        let mut fixed = slot(7, 0);
        fixed.resizable = false;
        fixed.bounds = FloatRect::new(300, 300, 120, 80);
        let windows = [slot(1, 5), fixed];
        let placed = cascade(&windows, Size::new(1000, 600), 600, &MdiConfig::default());
        // lowest z first
        assert_eq!(placed[0], (7, FloatRect::new(0, 0, 120, 80)));
        assert_eq!(placed[1], (1, FloatRect::new(10, 10, 580, 402)));
    }
}
