//! Terminal rendering for a container, and the hit map that turns mouse
//! cells back into container input.
//!
//! `UiFrame` wraps a `ratatui` buffer and clips every draw call to the
//! visible area, so window rectangles that hang off the edge of a small
//! terminal never write out of bounds.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::geometry::rect_contains;
use crate::layout::RegionMap;
use crate::layout::floating::{ResizeEdge, ResizeHandle, resize_handles_for_region};
use crate::window::{
    ChildWindow, Container, ContainerButton, ContainerFlavor, TitlebarButton, WindowId,
    WindowState,
};

const TITLEBAR_BUTTON_WIDTH: u16 = 3;
const CONTAINER_BUTTONS: [(ContainerButton, &str); 3] = [
    (ContainerButton::Close, " Close "),
    (ContainerButton::Restore, " Restore "),
    (ContainerButton::Maximize, " Maximize "),
];

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    pub(crate) fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        safe_set_string(self.buffer, self.area, x, y, text, style);
    }
}

/// What sits under a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Tab(usize),
    Button(ContainerButton),
    TitlebarButton(WindowId, TitlebarButton),
    Titlebar(WindowId),
    Border(WindowId, ResizeEdge),
    Body(WindowId),
}

/// Screen regions recorded while drawing, queried when a click arrives.
#[derive(Debug, Default)]
pub struct HitMap {
    windows: RegionMap<WindowId>,
    /// Topmost first.
    order: Vec<WindowId>,
    handles: Vec<ResizeHandle<WindowId>>,
    tabs: Vec<Rect>,
    buttons: Vec<(ContainerButton, Rect)>,
}

impl HitMap {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        if let Some(index) = self
            .tabs
            .iter()
            .position(|rect| rect_contains(*rect, column, row))
        {
            return Some(HitTarget::Tab(index));
        }
        if let Some((button, _)) = self
            .buttons
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
        {
            return Some(HitTarget::Button(*button));
        }

        let id = self.windows.hit_test(column, row, &self.order)?;
        let rect = self.windows.get(id)?;
        if row == rect.y
            && let Some((button, _)) = titlebar_buttons(rect)
                .into_iter()
                .find(|(_, r)| rect_contains(*r, column, row))
        {
            return Some(HitTarget::TitlebarButton(id, button));
        }
        if let Some(handle) = self
            .handles
            .iter()
            .find(|h| h.id == id && rect_contains(h.rect, column, row))
        {
            return Some(HitTarget::Border(id, handle.edge));
        }
        if row == rect.y {
            return Some(HitTarget::Titlebar(id));
        }
        Some(HitTarget::Body(id))
    }
}

/// Draw the container's chrome and windows back to front. `describe`
/// supplies the body text of each window.
pub fn render_container<C, F, D>(
    frame: &mut UiFrame<'_>,
    container: &Container<C, F>,
    describe: D,
) -> HitMap
where
    F: ContainerFlavor,
    D: Fn(&ChildWindow<C>) -> String,
{
    let mut hits = HitMap::default();
    let regions = container.regions();

    if let Some(strip) = regions.tab_strip {
        render_tab_strip(frame, container, strip, &mut hits);
    }
    render_button_panel(frame, container.buttons_enabled(), regions.button_panel, &mut hits);

    for id in container.stacking_order() {
        let (Some(child), Some(rect)) = (container.child(id), container.screen_bounds(id)) else {
            continue;
        };
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        render_window(frame, child, rect, &describe);
        hits.windows.set(id, rect);
        hits.order.push(id);
        if child.state() == WindowState::Normal && child.resizable() {
            hits.handles.extend(resize_handles_for_region(id, rect));
        }
    }
    hits.order.reverse();
    hits
}

fn render_window<C, D>(frame: &mut UiFrame<'_>, child: &ChildWindow<C>, rect: Rect, describe: &D)
where
    D: Fn(&ChildWindow<C>) -> String,
{
    let (border_style, title_style) = if child.focused() {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    };
    let title = match child.icon() {
        Some(icon) if child.show_icon() => format!(" {icon} {} ", child.title()),
        _ => format!(" {} ", child.title()),
    };
    let block = Block::bordered()
        .border_style(border_style)
        .title(title)
        .title_style(title_style);
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);
    if child.state() != WindowState::Minimized && inner.width > 0 && inner.height > 0 {
        frame.render_widget(Paragraph::new(describe(child)), inner);
    }
    for (button, area) in titlebar_buttons(rect) {
        let label = match (button, child.state()) {
            (TitlebarButton::Minimize, WindowState::Minimized) => "[^]",
            (TitlebarButton::Minimize, _) => "[_]",
            (TitlebarButton::Maximize, WindowState::Maximized) => "[=]",
            (TitlebarButton::Maximize, _) => "[+]",
            (TitlebarButton::Close, _) => "[x]",
        };
        frame.set_string(area.x, area.y, label, border_style);
    }
}

fn render_tab_strip<C, F: ContainerFlavor>(
    frame: &mut UiFrame<'_>,
    container: &Container<C, F>,
    strip: Rect,
    hits: &mut HitMap,
) {
    let config = container.config();
    let rects = tab_rects(
        strip,
        container.tabs().len(),
        config.max_tab_width,
        config.tab_row_height,
    );
    let selected = container.selected_tab();
    for (index, (tab, rect)) in container.tabs().iter().zip(rects).enumerate() {
        let title = container
            .child(tab.child_id)
            .map(ChildWindow::title)
            .unwrap_or_default();
        let style = if selected == Some(index) {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = truncate_to_width(&format!(" {title} "), rect.width as usize);
        frame.set_string(rect.x, rect.y, &label, style);
        hits.tabs.push(rect);
    }
}

fn render_button_panel(frame: &mut UiFrame<'_>, enabled: bool, panel: Rect, hits: &mut HitMap) {
    if panel.width == 0 || panel.height == 0 {
        return;
    }
    let style = if enabled {
        Style::default().fg(Color::Black).bg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut x = panel.right();
    for (button, label) in CONTAINER_BUTTONS.iter().rev() {
        let width = label.chars().count() as u16;
        if x < panel.x.saturating_add(width) {
            break;
        }
        x -= width;
        frame.set_string(x, panel.y, label, style);
        hits.buttons.push((
            *button,
            Rect {
                x,
                y: panel.y,
                width,
                height: 1,
            },
        ));
        x = x.saturating_sub(1);
    }
}

/// Cell rectangles of each tab: fixed-width tabs filling rows left to
/// right, one `row_height` band per row.
pub fn tab_rects(strip: Rect, count: usize, max_tab_width: u16, row_height: u16) -> Vec<Rect> {
    let per_row = crate::window::TabStrip::tabs_per_row(strip.width, max_tab_width);
    let width = max_tab_width.min(strip.width);
    (0..count)
        .map(|index| {
            let row = (index / per_row) as u16;
            let column = (index % per_row) as u16;
            Rect {
                x: strip.x.saturating_add(column.saturating_mul(width)),
                y: strip.y.saturating_add(row.saturating_mul(row_height)),
                width,
                height: row_height,
            }
        })
        .filter(|rect| rect.y < strip.bottom())
        .collect()
}

/// Button cells at the right end of a window's top border, leaving the
/// corner cell to the resize handle. Narrow windows get none.
fn titlebar_buttons(rect: Rect) -> Vec<(TitlebarButton, Rect)> {
    let needed = TITLEBAR_BUTTON_WIDTH * 3 + 2;
    if rect.width < needed + 2 || rect.height == 0 {
        return Vec::new();
    }
    let start = rect.right() - 1 - TITLEBAR_BUTTON_WIDTH * 3;
    [
        TitlebarButton::Minimize,
        TitlebarButton::Maximize,
        TitlebarButton::Close,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, button)| {
        (
            button,
            Rect {
                x: start + TITLEBAR_BUTTON_WIDTH * i as u16,
                y: rect.y,
                width: TITLEBAR_BUTTON_WIDTH,
                height: 1,
            },
        )
    })
    .collect()
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}
