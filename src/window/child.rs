use super::WindowId;
use crate::config::MdiConfig;
use crate::constants::NORMAL_SIZE_DIVISOR;
use crate::geometry::{FloatRect, Size};
use crate::layout::LayoutSlot;
use crate::layout::floating::{ResizeEdge, apply_move, apply_resize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    Normal,
    Minimized,
    #[default]
    Maximized,
}

/// Everything needed to open a child window. Titles and content are both
/// optional; new windows open maximized unless told otherwise.
#[derive(Debug, Clone)]
pub struct ChildSpec<C> {
    title: String,
    content: Option<C>,
    icon: Option<String>,
    state: WindowState,
    resizable: bool,
}

impl<C> Default for ChildSpec<C> {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: None,
            icon: None,
            state: WindowState::default(),
            resizable: true,
        }
    }
}

impl<C> ChildSpec<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    pub fn with_content(content: C) -> Self {
        Self::new().content(content)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn state(mut self, state: WindowState) -> Self {
        self.state = state;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// A pane owned by a [`Container`](super::Container).
///
/// Geometry is read-only from the outside: bounds follow from the window
/// state, the container's client area, layout commands and drag input, all
/// of which go through the container.
#[derive(Debug)]
pub struct ChildWindow<C> {
    id: WindowId,
    title: String,
    icon: Option<String>,
    show_icon: bool,
    content: Option<C>,
    state: WindowState,
    bounds: FloatRect,
    resizable: bool,
    z_order: u32,
    focused: bool,
    /// Origin a `Normal` window returns to once the user or a layout
    /// command has placed it.
    normal_origin: Option<(i32, i32)>,
}

impl<C> ChildWindow<C> {
    pub(crate) fn from_spec(id: WindowId, spec: ChildSpec<C>, z_order: u32) -> Self {
        Self {
            id,
            title: spec.title,
            show_icon: true,
            icon: spec.icon,
            content: spec.content,
            state: spec.state,
            bounds: FloatRect::default(),
            resizable: spec.resizable,
            z_order,
            focused: false,
            normal_origin: None,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn show_icon(&self) -> bool {
        self.show_icon
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Bounds relative to the container's client area origin.
    pub fn bounds(&self) -> FloatRect {
        self.bounds
    }

    pub fn resizable(&self) -> bool {
        self.resizable
    }

    pub fn z_order(&self) -> u32 {
        self.z_order
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn is_positioned(&self) -> bool {
        self.normal_origin.is_some()
    }

    pub(crate) fn set_title(&mut self, title: String) -> bool {
        if self.title == title {
            return false;
        }
        self.title = title;
        true
    }

    pub(crate) fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub(crate) fn set_show_icon(&mut self, show: bool) {
        self.show_icon = show;
    }

    pub(crate) fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub(crate) fn set_z_order(&mut self, z_order: u32) {
        self.z_order = z_order;
    }

    /// Change state and re-derive bounds. Returns false when the state was
    /// already `state`.
    pub(crate) fn set_state(&mut self, state: WindowState, area: Size, config: &MdiConfig) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.apply_state(area, config);
        true
    }

    /// Recompute bounds from the current state and the client area size.
    /// Minimized windows only get their icon size here; the container's icon
    /// packing assigns their position.
    pub fn apply_state(&mut self, area: Size, config: &MdiConfig) {
        self.bounds = match self.state {
            WindowState::Normal => {
                let size = Size::new(
                    area.width / NORMAL_SIZE_DIVISOR,
                    area.height / NORMAL_SIZE_DIVISOR,
                );
                let (x, y) = self.normal_origin.unwrap_or((0, 0));
                FloatRect::new(x, y, size.width, size.height).clamp_within(area)
            }
            WindowState::Maximized => FloatRect::new(0, 0, area.width, area.height),
            WindowState::Minimized => self.bounds.with_size(config.icon_size),
        };
    }

    /// Commit bounds computed by a layout pass.
    pub(crate) fn place(&mut self, rect: FloatRect) {
        self.bounds = rect;
        if self.state == WindowState::Normal {
            self.normal_origin = Some((rect.x, rect.y));
        }
    }

    pub(crate) fn move_by(&mut self, dx: i32, dy: i32, area: Size) -> bool {
        if self.state == WindowState::Maximized {
            return false;
        }
        let moved = apply_move(self.bounds, dx, dy, area);
        if moved == self.bounds {
            return false;
        }
        self.place(moved);
        true
    }

    pub(crate) fn resize_edge(&mut self, edge: ResizeEdge, dx: i32, dy: i32, min: Size) -> bool {
        if self.state != WindowState::Normal || !self.resizable {
            return false;
        }
        let resized = apply_resize(self.bounds, edge, dx, dy, min);
        if resized == self.bounds {
            return false;
        }
        self.place(resized);
        true
    }

    pub(crate) fn layout_slot(&self) -> LayoutSlot<WindowId> {
        LayoutSlot {
            id: self.id,
            bounds: self.bounds,
            resizable: self.resizable,
            z_order: self.z_order,
            minimized: self.state == WindowState::Minimized,
        }
    }
}
