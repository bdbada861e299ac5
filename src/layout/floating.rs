use ratatui::prelude::Rect;

use crate::geometry::{FloatRect, Size, clamp_dim};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy)]
pub struct ResizeHandle<R: Copy + Eq + Ord> {
    pub id: R,
    pub rect: Rect,
    pub edge: ResizeEdge,
}

/// Border cells of an on-screen window that start a resize drag: one cell
/// per corner and the remaining runs of each edge.
pub fn resize_handles_for_region<R: Copy + Eq + Ord>(id: R, rect: Rect) -> Vec<ResizeHandle<R>> {
    let mut handles = Vec::new();
    if rect.width == 0 || rect.height == 0 {
        return handles;
    }
    let right = rect.x.saturating_add(rect.width.saturating_sub(1));
    let bottom = rect.y.saturating_add(rect.height.saturating_sub(1));
    let cell = |x: u16, y: u16| Rect {
        x,
        y,
        width: 1,
        height: 1,
    };
    handles.push(ResizeHandle {
        id,
        rect: cell(rect.x, rect.y),
        edge: ResizeEdge::TopLeft,
    });
    handles.push(ResizeHandle {
        id,
        rect: cell(right, rect.y),
        edge: ResizeEdge::TopRight,
    });
    handles.push(ResizeHandle {
        id,
        rect: cell(rect.x, bottom),
        edge: ResizeEdge::BottomLeft,
    });
    handles.push(ResizeHandle {
        id,
        rect: cell(right, bottom),
        edge: ResizeEdge::BottomRight,
    });
    if rect.width > 2 {
        handles.push(ResizeHandle {
            id,
            rect: Rect {
                x: rect.x.saturating_add(1),
                y: bottom,
                width: rect.width.saturating_sub(2),
                height: 1,
            },
            edge: ResizeEdge::Bottom,
        });
    }
    if rect.height > 2 {
        handles.push(ResizeHandle {
            id,
            rect: Rect {
                x: rect.x,
                y: rect.y.saturating_add(1),
                width: 1,
                height: rect.height.saturating_sub(2),
            },
            edge: ResizeEdge::Left,
        });
        handles.push(ResizeHandle {
            id,
            rect: Rect {
                x: right,
                y: rect.y.saturating_add(1),
                width: 1,
                height: rect.height.saturating_sub(2),
            },
            edge: ResizeEdge::Right,
        });
    }
    handles
}

/// Move `rect` by a pointer delta, keeping it fully inside `area`.
pub fn apply_move(rect: FloatRect, dx: i32, dy: i32, area: Size) -> FloatRect {
    rect.with_origin(rect.x.saturating_add(dx), rect.y.saturating_add(dy))
        .clamp_within(area)
}

/// Apply a resize drag on `edge`. Corners apply their vertical edge, then
/// their horizontal edge; each edge is accepted or rejected on its own.
pub fn apply_resize(rect: FloatRect, edge: ResizeEdge, dx: i32, dy: i32, min: Size) -> FloatRect {
    let mut out = rect;
    match edge {
        ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight => {
            resize_top(&mut out, dy, min.height)
        }
        ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight => {
            resize_bottom(&mut out, dy, min.height)
        }
        _ => {}
    }
    match edge {
        ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft => {
            resize_left(&mut out, dx, min.width)
        }
        ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight => {
            resize_right(&mut out, dx, min.width)
        }
        _ => {}
    }
    out
}

fn resize_left(rect: &mut FloatRect, dx: i32, min_width: u16) {
    let width = rect.width as i32;
    if width - dx < min_width as i32 {
        return;
    }
    // The origin never crosses zero; the width follows the clamped shift so
    // the right edge stays put.
    let shift = if rect.x + dx < 0 { -rect.x } else { dx };
    rect.width = clamp_dim(width - shift);
    rect.x += shift;
}

fn resize_top(rect: &mut FloatRect, dy: i32, min_height: u16) {
    let height = rect.height as i32;
    if height - dy < min_height as i32 {
        return;
    }
    let shift = if rect.y + dy < 0 { -rect.y } else { dy };
    rect.height = clamp_dim(height - shift);
    rect.y += shift;
}

fn resize_right(rect: &mut FloatRect, dx: i32, min_width: u16) {
    let width = rect.width as i32 + dx;
    if width < min_width as i32 {
        return;
    }
    rect.width = clamp_dim(width);
}

fn resize_bottom(rect: &mut FloatRect, dy: i32, min_height: u16) {
    let height = rect.height as i32 + dy;
    if height < min_height as i32 {
        return;
    }
    rect.height = clamp_dim(height);
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(20, 20);

    #[test]
    fn test_resize_top_drag_down() {
        let start = FloatRect::new(0, 50, 40, 40);
        let res = apply_resize(start, ResizeEdge::Top, 0, 5, MIN);
        assert_eq!(res, FloatRect::new(0, 55, 40, 35));
    }

    #[test]
    fn test_resize_top_drag_up() {
        let start = FloatRect::new(0, 50, 40, 40);
        let res = apply_resize(start, ResizeEdge::Top, 0, -5, MIN);
        assert_eq!(res, FloatRect::new(0, 45, 40, 45));
    }

    #[test]
    fn left_drag_below_minimum_is_rejected_not_clamped() {
        let start = FloatRect::new(30, 10, 25, 40);
        let res = apply_resize(start, ResizeEdge::Left, 10, 0, MIN);
        assert_eq!(res, start);
    }

    #[test]
    fn left_drag_past_origin_clamps_shift() {
        let start = FloatRect::new(4, 10, 30, 30);
        let res = apply_resize(start, ResizeEdge::Left, -10, 0, MIN);
        // only 4 units of travel are available before x would go negative
        assert_eq!(res, FloatRect::new(0, 10, 34, 30));
        assert_eq!(res.right(), start.right());
    }

    #[test]
    fn corner_applies_edges_independently() {
        let start = FloatRect::new(10, 10, 40, 22);
        // height would drop to 17 (rejected) while width grows to 45
        let res = apply_resize(start, ResizeEdge::BottomRight, 5, -5, MIN);
        assert_eq!(res, FloatRect::new(10, 10, 45, 22));
    }

    #[test]
    fn move_clamps_into_area() {
        let area = Size::new(100, 60);
        let r = FloatRect::new(10, 10, 30, 20);
        assert_eq!(apply_move(r, -50, 5, area), FloatRect::new(0, 15, 30, 20));
        assert_eq!(apply_move(r, 500, 500, area), FloatRect::new(70, 40, 30, 20));
    }

    #[test]
    fn handles_cover_corners_and_edges() {
        let rect = Rect {
            x: 2,
            y: 2,
            width: 6,
            height: 4,
        };
        let handles = resize_handles_for_region(1u8, rect);
        let edge_at = |x: u16, y: u16| {
            handles
                .iter()
                .find(|h| crate::geometry::rect_contains(h.rect, x, y))
                .map(|h| h.edge)
        };
        assert_eq!(edge_at(2, 2), Some(ResizeEdge::TopLeft));
        assert_eq!(edge_at(7, 5), Some(ResizeEdge::BottomRight));
        assert_eq!(edge_at(4, 5), Some(ResizeEdge::Bottom));
        assert_eq!(edge_at(2, 3), Some(ResizeEdge::Left));
        // the top run is the title bar, which moves rather than resizes
        assert_eq!(edge_at(4, 2), None);
    }
}
