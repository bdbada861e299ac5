//! Multiple-document-interface window management.
//!
//! A [`Container`](window::Container) owns child windows and keeps their
//! activation, stacking and geometry consistent; the [`layout`] module holds
//! the pure arrangement algorithms it delegates to. The remaining modules
//! make up the terminal host shipped as the `term-mdi` binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod keybindings;
pub mod layout;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use config::MdiConfig;
pub use error::{MdiError, Result};
pub use geometry::{FloatRect, Size};
pub use layout::LayoutCommand;
