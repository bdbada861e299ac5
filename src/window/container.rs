use std::fmt;

use ratatui::prelude::Rect;

use super::child::{ChildSpec, ChildWindow, WindowState};
use super::events::{CloseDecision, ContainerButton, ContainerEvent, TitlebarButton};
use super::flavor::{ContainerFlavor, LayoutRegions, StandardFlavor};
use super::tabbed::{TabEntry, TabStrip};
use super::WindowId;
use crate::config::MdiConfig;
use crate::error::Result;
use crate::geometry::{FloatRect, Size};
use crate::layout::floating::ResizeEdge;
use crate::layout::{LayoutCommand, arrange_icons, plan_layout};

pub type StandardContainer<C> = Container<C, StandardFlavor>;
pub type TabbedContainer<C> = Container<C, TabStrip>;

type ClosingGuard<C> = Box<dyn FnMut(&ChildWindow<C>) -> CloseDecision>;

/// Owns a set of child windows and everything about how they relate: which
/// one is active, how they stack, and where they sit inside the client area.
///
/// All mutation is synchronous. Each public call finishes its follow-up work
/// (reselecting the active window, re-packing icons, queueing events) before
/// it returns. Unknown window ids are ignored.
pub struct Container<C, F: ContainerFlavor = StandardFlavor> {
    children: Vec<ChildWindow<C>>,
    active: Option<WindowId>,
    client_area: Rect,
    host_area: Option<Rect>,
    regions: LayoutRegions,
    config: MdiConfig,
    layout: LayoutCommand,
    flavor: F,
    events: Vec<ContainerEvent>,
    next_id: u64,
    closing_guard: Option<ClosingGuard<C>>,
}

impl<C> Container<C, StandardFlavor> {
    pub fn new(client_area: Rect) -> Self {
        Self::with_flavor(StandardFlavor, client_area)
    }
}

impl<C> Container<C, TabStrip> {
    pub fn new_tabbed(client_area: Rect) -> Self {
        Self::with_flavor(TabStrip::new(), client_area)
    }
}

impl<C, F: ContainerFlavor> Container<C, F> {
    pub fn with_flavor(flavor: F, client_area: Rect) -> Self {
        Self {
            children: Vec::new(),
            active: None,
            client_area,
            host_area: None,
            regions: LayoutRegions {
                client_area,
                ..LayoutRegions::default()
            },
            config: MdiConfig::default(),
            layout: LayoutCommand::default(),
            flavor,
            events: Vec::new(),
            next_id: 1,
            closing_guard: None,
        }
    }

    pub fn with_config(flavor: F, client_area: Rect, config: MdiConfig) -> Result<Self> {
        config.validate()?;
        let mut container = Self::with_flavor(flavor, client_area);
        container.config = config;
        Ok(container)
    }

    pub fn config(&self) -> &MdiConfig {
        &self.config
    }

    pub fn flavor(&self) -> &F {
        &self.flavor
    }

    pub fn client_area(&self) -> Rect {
        self.client_area
    }

    pub fn regions(&self) -> LayoutRegions {
        self.regions
    }

    pub fn layout(&self) -> LayoutCommand {
        self.layout
    }

    pub fn children(&self) -> &[ChildWindow<C>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, id: WindowId) -> Option<&ChildWindow<C>> {
        self.children.iter().find(|child| child.id() == id)
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn active_child(&self) -> Option<&ChildWindow<C>> {
        self.active.and_then(|id| self.child(id))
    }

    /// The child with the highest z-order.
    pub fn topmost(&self) -> Option<WindowId> {
        self.children
            .iter()
            .max_by_key(|child| child.z_order())
            .map(ChildWindow::id)
    }

    /// Ids from back to front.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut order: Vec<&ChildWindow<C>> = self.children.iter().collect();
        order.sort_by_key(|child| child.z_order());
        order.into_iter().map(ChildWindow::id).collect()
    }

    /// Bounds of `id` in host coordinates, clipped to the client area.
    pub fn screen_bounds(&self, id: WindowId) -> Option<Rect> {
        self.child(id)
            .map(|child| child.bounds().to_screen(self.client_area))
    }

    /// Container-level buttons are only live while there is something to
    /// act on.
    pub fn buttons_enabled(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn tabs(&self) -> &[TabEntry] {
        self.flavor.tab_strip().map(TabStrip::tabs).unwrap_or_default()
    }

    pub fn selected_tab(&self) -> Option<usize> {
        self.flavor.tab_strip().and_then(TabStrip::selected)
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<ContainerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Install the veto consulted before a window closes through
    /// [`request_close`](Self::request_close).
    pub fn set_closing_guard<G>(&mut self, guard: G)
    where
        G: FnMut(&ChildWindow<C>) -> CloseDecision + 'static,
    {
        self.closing_guard = Some(Box::new(guard));
    }

    pub fn create_child(&mut self, spec: ChildSpec<C>) -> WindowId {
        let id = WindowId::new(self.next_id);
        self.next_id += 1;
        let mut child = ChildWindow::from_spec(id, spec, self.children.len() as u32);
        child.apply_state(self.area_size(), &self.config);
        let minimized = child.state() == WindowState::Minimized;
        tracing::debug!(window_id = %id, title = child.title(), "opened window");

        self.children.push(child);
        self.events.push(ContainerEvent::ChildAdded(id));
        self.flavor.on_child_added(id);
        self.refresh_regions();

        let previous = self.active_state();
        self.activate(id, previous);
        if minimized {
            self.pack_icons();
        }
        id
    }

    /// Remove `id`. The topmost remaining child becomes active; a removed
    /// maximized active window hands its maximized state on. Returns false
    /// for an unknown id.
    pub fn close_child(&mut self, id: WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(window_id = %id, "close ignored for unknown window");
            return false;
        };
        let removed = self.children.remove(index);
        tracing::debug!(window_id = %id, title = removed.title(), "closing window");
        self.events.push(ContainerEvent::ChildRemoved(id));
        self.flavor.on_child_removed(id);

        if self.children.is_empty() {
            let old = self.active.take();
            self.events
                .push(ContainerEvent::ActiveChildChanged { old, new: None });
        } else {
            let previous = if self.active == Some(id) {
                Some(removed.state())
            } else {
                self.active_state()
            };
            if let Some(top) = self.topmost() {
                self.activate(top, previous);
            }
        }

        if removed.state() == WindowState::Minimized {
            self.pack_icons();
        }
        self.refresh_regions();
        true
    }

    /// Remove every child, settling the active window once at the end.
    pub fn close_all(&mut self) {
        if self.children.is_empty() {
            return;
        }
        tracing::debug!(count = self.children.len(), "closing all windows");
        for child in std::mem::take(&mut self.children) {
            self.events.push(ContainerEvent::ChildRemoved(child.id()));
            self.flavor.on_child_removed(child.id());
        }
        let old = self.active.take();
        self.events
            .push(ContainerEvent::ActiveChildChanged { old, new: None });
        self.refresh_regions();
    }

    /// Run the close protocol: consult the closing guard, remove the window,
    /// then report it closed. Returns true when the window was removed.
    pub fn request_close(&mut self, id: WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if let Some(guard) = self.closing_guard.as_mut()
            && guard(&self.children[index]) == CloseDecision::Cancel
        {
            tracing::debug!(window_id = %id, "close cancelled by guard");
            return false;
        }
        self.close_child(id);
        self.events.push(ContainerEvent::Closed(id));
        true
    }

    pub fn close_active(&mut self) -> bool {
        match self.active {
            Some(id) => self.request_close(id),
            None => false,
        }
    }

    pub fn set_active_window(&mut self, id: WindowId) {
        let previous = self.active_state();
        self.activate(id, previous);
    }

    /// Activate the child shown by tab `index`. Containers without a tab
    /// strip ignore this.
    pub fn select_tab(&mut self, index: usize) -> bool {
        let Some(id) = self
            .flavor
            .tab_strip()
            .and_then(|strip| strip.child_at(index))
        else {
            return false;
        };
        self.set_active_window(id);
        true
    }

    /// Activate the next (or previous) window in insertion order, wrapping.
    pub fn cycle_active(&mut self, forward: bool) {
        let len = self.children.len();
        if len == 0 {
            return;
        }
        let current = self.active.and_then(|id| self.index_of(id)).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let id = self.children[next].id();
        self.set_active_window(id);
    }

    pub fn find_by_title(&self, title: &str) -> Option<WindowId> {
        self.children
            .iter()
            .find(|child| child.title() == title)
            .map(ChildWindow::id)
    }

    pub fn find_all_by_title(&self, title: &str) -> Vec<WindowId> {
        self.children
            .iter()
            .filter(|child| child.title() == title)
            .map(ChildWindow::id)
            .collect()
    }

    pub fn find_by_content<P>(&self, mut predicate: P) -> Option<WindowId>
    where
        P: FnMut(&C) -> bool,
    {
        self.children
            .iter()
            .find(|child| child.content().is_some_and(&mut predicate))
            .map(ChildWindow::id)
    }

    pub fn find_all_by_content<P>(&self, mut predicate: P) -> Vec<WindowId>
    where
        P: FnMut(&C) -> bool,
    {
        self.children
            .iter()
            .filter(|child| child.content().is_some_and(&mut predicate))
            .map(ChildWindow::id)
            .collect()
    }

    pub fn set_title(&mut self, id: WindowId, title: impl Into<String>) {
        let changed = self
            .child_mut(id)
            .is_some_and(|child| child.set_title(title.into()));
        if changed {
            self.events.push(ContainerEvent::TitleChanged(id));
        }
    }

    pub fn set_icon(&mut self, id: WindowId, icon: Option<String>, show: bool) {
        if let Some(child) = self.child_mut(id) {
            child.set_icon(icon);
            child.set_show_icon(show);
        }
    }

    pub fn set_resizable(&mut self, id: WindowId, resizable: bool) {
        if let Some(child) = self.child_mut(id) {
            child.set_resizable(resizable);
        }
    }

    pub fn set_window_state(&mut self, id: WindowId, state: WindowState) -> bool {
        match self.index_of(id) {
            Some(index) => self.set_state_at(index, state),
            None => false,
        }
    }

    pub fn titlebar_button(&mut self, id: WindowId, button: TitlebarButton) {
        match button {
            TitlebarButton::Minimize => self.toggle_state(id, WindowState::Minimized),
            TitlebarButton::Maximize => self.toggle_state(id, WindowState::Maximized),
            TitlebarButton::Close => {
                self.request_close(id);
            }
        }
    }

    /// Double-click on a title bar: restore an icon, maximize a normal
    /// window. Maximized windows stay as they are.
    pub fn titlebar_double_click(&mut self, id: WindowId) {
        let next = match self.child(id).map(ChildWindow::state) {
            Some(WindowState::Minimized) => WindowState::Normal,
            Some(WindowState::Normal) => WindowState::Maximized,
            _ => return,
        };
        self.set_window_state(id, next);
    }

    pub fn press_container_button(&mut self, button: ContainerButton) {
        if !self.buttons_enabled() {
            tracing::debug!(?button, "container button ignored with no windows");
            return;
        }
        match button {
            ContainerButton::Close => {
                self.close_active();
            }
            ContainerButton::Restore => self.set_all_states(WindowState::Normal),
            ContainerButton::Maximize => self.set_all_states(WindowState::Maximized),
        }
    }

    /// Pointer drag on the title bar. Starting a drag activates the window;
    /// maximized windows stay put.
    pub fn drag_move(&mut self, id: WindowId, dx: i32, dy: i32) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.children[index].focused() {
            self.set_active_window(id);
        }
        let area = self.area_size();
        let moved = self.children[index].move_by(dx, dy, area);
        tracing::trace!(window_id = %id, dx, dy, moved, "drag move");
        moved
    }

    /// Pointer drag on a border. Only normal, resizable windows respond, and
    /// an edge that would shrink below the minimum size is ignored.
    pub fn drag_resize(&mut self, id: WindowId, edge: ResizeEdge, dx: i32, dy: i32) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.children[index].focused() {
            self.set_active_window(id);
        }
        let min = self.config.min_size;
        let resized = self.children[index].resize_edge(edge, dx, dy, min);
        tracing::trace!(window_id = %id, ?edge, dx, dy, resized, "drag resize");
        resized
    }

    /// New client area from the host. Every child re-derives its bounds.
    pub fn resize(&mut self, client_area: Rect) {
        self.client_area = client_area;
        self.regions.client_area = client_area;
        let area = self.area_size();
        for child in &mut self.children {
            child.apply_state(area, &self.config);
        }
        self.pack_icons();
    }

    /// New host rectangle. The flavor decides where its chrome goes and the
    /// remainder becomes the client area.
    pub fn resize_host(&mut self, outer: Rect) {
        self.host_area = Some(outer);
        self.regions = self.flavor.build_layout_regions(outer, &self.config);
        self.resize(self.regions.client_area);
    }

    /// Run a layout command. The layout property reads `command` while the
    /// arrangement runs and rests at `ArrangeIcons` afterwards.
    pub fn set_layout(&mut self, command: LayoutCommand) {
        self.layout = command;
        self.run_layout(command);
        self.layout = LayoutCommand::ArrangeIcons;
    }

    fn run_layout(&mut self, command: LayoutCommand) {
        let area = self.area_size();
        if self.children.is_empty() || area.is_empty() {
            tracing::debug!(?command, "layout skipped: nothing to arrange");
            return;
        }
        if command != LayoutCommand::ArrangeIcons {
            for index in 0..self.children.len() {
                if self.children[index].state() == WindowState::Maximized {
                    self.set_state_at(index, WindowState::Normal);
                }
            }
        }
        let slots: Vec<_> = self.children.iter().map(ChildWindow::layout_slot).collect();
        let plan = plan_layout(command, &slots, area, &self.config);
        tracing::debug!(
            ?command,
            placed = plan.placements.len(),
            reserved = plan.reserved_height,
            "applied layout"
        );
        self.apply_placements(&plan.placements);
    }

    /// The activation routine shared by explicit activation, creation and
    /// reselection after a removal. `previous_state` is the state of the
    /// window losing activation.
    fn activate(&mut self, id: WindowId, previous_state: Option<WindowState>) {
        if self.active == Some(id) {
            return;
        }
        let Some(index) = self.index_of(id) else {
            tracing::debug!(window_id = %id, "activation ignored for unknown window");
            return;
        };
        let old = self.active.replace(id);
        tracing::debug!(window_id = %id, previous = ?old, "activating window");

        if previous_state == Some(WindowState::Maximized) {
            self.set_state_at(index, WindowState::Maximized);
        }
        for child in &mut self.children {
            child.set_focused(child.id() == id);
        }
        let top = self
            .children
            .iter()
            .map(ChildWindow::z_order)
            .max()
            .unwrap_or(0);
        self.children[index].set_z_order(top + 1);

        self.events.push(ContainerEvent::ActiveChildChanged {
            old,
            new: Some(id),
        });
        self.events.push(ContainerEvent::ChildActivated(id));
        self.flavor.on_child_activated(id);
    }

    fn set_state_at(&mut self, index: usize, state: WindowState) -> bool {
        let area = self.area_size();
        let child = &mut self.children[index];
        let previous = child.state();
        if !child.set_state(state, area, &self.config) {
            return false;
        }
        let id = child.id();
        tracing::debug!(window_id = %id, ?previous, ?state, "window state changed");
        self.events.push(ContainerEvent::StateChanged { id, state });
        if previous == WindowState::Minimized || state == WindowState::Minimized {
            self.pack_icons();
        }
        true
    }

    fn set_all_states(&mut self, state: WindowState) {
        for index in 0..self.children.len() {
            self.set_state_at(index, state);
        }
    }

    fn toggle_state(&mut self, id: WindowId, target: WindowState) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let next = if self.children[index].state() == target {
            WindowState::Normal
        } else {
            target
        };
        self.set_state_at(index, next);
    }

    fn pack_icons(&mut self) {
        let area = self.area_size();
        if area.is_empty() {
            return;
        }
        let icons: Vec<_> = self
            .children
            .iter()
            .filter(|child| child.state() == WindowState::Minimized)
            .map(ChildWindow::layout_slot)
            .collect();
        let arrangement = arrange_icons(&icons, area, self.config.icon_size);
        self.apply_placements(&arrangement.placements);
    }

    fn apply_placements(&mut self, placements: &[(WindowId, FloatRect)]) {
        for &(id, rect) in placements {
            if let Some(child) = self.child_mut(id) {
                child.place(rect);
            }
        }
    }

    /// Tab rows depend on the tab count, so the host layout is rebuilt after
    /// children come and go.
    fn refresh_regions(&mut self) {
        let Some(outer) = self.host_area else {
            return;
        };
        let regions = self.flavor.build_layout_regions(outer, &self.config);
        if regions == self.regions {
            return;
        }
        self.regions = regions;
        if regions.client_area != self.client_area {
            self.resize(regions.client_area);
        }
    }

    fn active_state(&self) -> Option<WindowState> {
        self.active_child().map(ChildWindow::state)
    }

    fn area_size(&self) -> Size {
        Size::of(self.client_area)
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.children.iter().position(|child| child.id() == id)
    }

    fn child_mut(&mut self, id: WindowId) -> Option<&mut ChildWindow<C>> {
        self.children.iter_mut().find(|child| child.id() == id)
    }
}

impl<C: fmt::Debug, F: ContainerFlavor> fmt::Debug for Container<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("children", &self.children)
            .field("active", &self.active)
            .field("client_area", &self.client_area)
            .field("layout", &self.layout)
            .field("flavor", &self.flavor)
            .finish_non_exhaustive()
    }
}
