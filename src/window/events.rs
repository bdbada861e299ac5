use super::{WindowId, WindowState};

/// Notifications queued by a container for its host, in emission order.
/// Drain them with [`Container::take_events`](super::Container::take_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerEvent {
    ChildAdded(WindowId),
    ChildRemoved(WindowId),
    /// `new` is `None` once the last child is gone.
    ActiveChildChanged {
        old: Option<WindowId>,
        new: Option<WindowId>,
    },
    /// The host should give the window input focus and scroll it into view.
    ChildActivated(WindowId),
    StateChanged {
        id: WindowId,
        state: WindowState,
    },
    TitleChanged(WindowId),
    Closed(WindowId),
}

/// Answer of a closing guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Allow,
    Cancel,
}

/// Buttons drawn in a child's title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlebarButton {
    Minimize,
    Maximize,
    Close,
}

/// Buttons in the container's own panel. They act on the active window
/// (`Close`) or on every child at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerButton {
    Close,
    Restore,
    Maximize,
}
