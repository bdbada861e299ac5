mod child;
mod container;
mod events;
mod flavor;
mod tabbed;

use std::fmt;

pub use child::{ChildSpec, ChildWindow, WindowState};
pub use container::{Container, StandardContainer, TabbedContainer};
pub use events::{CloseDecision, ContainerButton, ContainerEvent, TitlebarButton};
pub use flavor::{ContainerFlavor, LayoutRegions, StandardFlavor};
pub use tabbed::{TabEntry, TabStrip};

/// Opaque handle to a child window. Handles are never reused by the
/// container that issued them, so a stale handle simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
