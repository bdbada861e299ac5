use ratatui::prelude::Rect;

/// Signed rectangle origin with unsigned size.
///
/// Child bounds are kept relative to the client area origin. The origin may
/// dip below zero while a drag is being computed, but committed bounds are
/// always clamped back to non-negative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl FloatRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn with_origin(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    pub fn with_size(self, size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self
        }
    }

    /// Keep the rectangle inside `area` by moving it, never by shrinking it.
    /// A rectangle larger than the area is pinned to the origin.
    pub fn clamp_within(self, area: Size) -> Self {
        let max_x = (area.width as i32 - self.width as i32).max(0);
        let max_y = (area.height as i32 - self.height as i32).max(0);
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
            ..self
        }
    }

    /// Translate into host coordinates under `origin` and clip to it.
    pub fn to_screen(self, origin: Rect) -> Rect {
        let bounds_x0 = origin.x as i32;
        let bounds_y0 = origin.y as i32;
        let bounds_x1 = bounds_x0 + origin.width as i32;
        let bounds_y1 = bounds_y0 + origin.height as i32;
        let x0 = (bounds_x0 + self.x).max(bounds_x0);
        let y0 = (bounds_y0 + self.y).max(bounds_y0);
        let x1 = (bounds_x0 + self.right()).min(bounds_x1);
        let y1 = (bounds_y0 + self.bottom()).min(bounds_y1);
        if x1 <= x0 || y1 <= y0 {
            return Rect::default();
        }
        Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn of(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    /// True when either axis is zero; layout treats such an area as absent.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// `pct` percent of `base`, rounded down.
pub fn percent_of(base: u16, pct: u16) -> u16 {
    (base as u32 * pct as u32 / 100) as u16
}

/// Saturating conversion of a signed extent back into a dimension.
pub(crate) fn clamp_dim(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}
