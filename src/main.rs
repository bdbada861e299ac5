use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Style};

use term_mdi::event_loop::{ConsoleInput, ControlFlow, EventLoop};
use term_mdi::keybindings::{Action, KeyBindings};
use term_mdi::layout::floating::ResizeEdge;
use term_mdi::ui::{HitMap, HitTarget, UiFrame, render_container};
use term_mdi::window::{
    ChildSpec, ChildWindow, CloseDecision, Container, ContainerButton, ContainerEvent,
    ContainerFlavor, StandardFlavor, TabStrip, TitlebarButton, WindowId,
};
use term_mdi::{LayoutCommand, MdiConfig, Result, tracing_sub};

const DOUBLE_CLICK: Duration = Duration::from_millis(400);
const PINNED_MARKER: &str = "[pinned]";

const WELCOME: &str = indoc! {"
    Welcome to term-mdi. This window is [pinned]: closing it is refused.

    n new window      w / Ctrl+F4 close    Shift+W close all
    c cascade         h tile horizontal    v tile vertical
    a arrange icons   m minimize           x maximize
    Tab / Shift+Tab cycle windows          Enter restore / maximize
    arrows move       Shift+arrows resize  r restore all
    Ctrl+Q quit

    Drag title bars to move and borders to resize.
"};

#[derive(Parser, Debug)]
#[command(
    name = "term-mdi",
    version = env!("CARGO_PKG_VERSION"),
    about = "Multiple document interface window manager for the terminal"
)]
struct Cli {
    /// Show a tab strip mirroring the open windows.
    #[arg(long)]
    tabbed: bool,

    /// Number of windows to open at start-up.
    #[arg(short = 'n', long = "windows", value_name = "N", default_value_t = 3)]
    windows: usize,

    /// Diagonal stagger between cascaded windows, in cells.
    #[arg(long, value_name = "CELLS")]
    layout_offset: Option<u16>,

    /// Smallest width a resize may leave a window with.
    #[arg(long, value_name = "CELLS")]
    min_width: Option<u16>,

    /// Smallest height a resize may leave a window with.
    #[arg(long, value_name = "CELLS")]
    min_height: Option<u16>,

    /// Append debug logs to this file. Logging is discarded otherwise.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Result<MdiConfig> {
        let mut config = MdiConfig::terminal();
        if let Some(offset) = self.layout_offset {
            config = config.with_layout_offset(offset);
        }
        let width = self.min_width.unwrap_or(config.min_size.width);
        let height = self.min_height.unwrap_or(config.min_size.height);
        config = config.with_min_size(width, height);
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;
    tracing_sub::init(cli.log_file.as_deref())?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = if cli.tabbed {
        Container::with_config(TabStrip::new(), Rect::default(), config)
            .and_then(|container| run(&mut terminal, App::new(container, cli.windows)))
    } else {
        Container::with_config(StandardFlavor, Rect::default(), config)
            .and_then(|container| run(&mut terminal, App::new(container, cli.windows)))
    };

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run<F: ContainerFlavor>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<F>,
) -> Result<()> {
    let (width, height) = terminal::size()?;
    app.resize(width, height);
    app.container.set_layout(LayoutCommand::Cascade);

    EventLoop::new(ConsoleInput, Duration::from_millis(16)).run(|event| {
        match event {
            None => {
                app.drain_events();
                terminal.draw(|frame| {
                    let area = frame.area();
                    let mut ui = UiFrame::new(frame);
                    app.hits = render_container(&mut ui, &app.container, describe);
                    let status_row = area.bottom().saturating_sub(1);
                    ui.set_string(
                        area.x,
                        status_row,
                        &app.status,
                        Style::default().fg(Color::Yellow),
                    );
                })?;
            }
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) {
                    return Ok(ControlFlow::Quit);
                }
            }
            Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(Event::Resize(width, height)) => app.resize(width, height),
            Some(_) => {}
        }
        Ok(ControlFlow::Continue)
    })?;
    Ok(())
}

fn describe(child: &ChildWindow<String>) -> String {
    let body = child.content().map(String::as_str).unwrap_or_default();
    format!(
        "{body}\n\n{:?}  z={}  {}",
        child.state(),
        child.z_order(),
        child.id()
    )
}

#[derive(Debug, Clone, Copy)]
enum Drag {
    Move {
        id: WindowId,
        column: u16,
        row: u16,
    },
    Resize {
        id: WindowId,
        edge: ResizeEdge,
        column: u16,
        row: u16,
    },
}

struct App<F: ContainerFlavor> {
    container: Container<String, F>,
    bindings: KeyBindings,
    hits: HitMap,
    drag: Option<Drag>,
    last_click: Option<(WindowId, Instant)>,
    status: String,
    opened: usize,
}

impl<F: ContainerFlavor> App<F> {
    fn new(mut container: Container<String, F>, windows: usize) -> Self {
        container.set_closing_guard(|window: &ChildWindow<String>| {
            if window
                .content()
                .is_some_and(|text| text.contains(PINNED_MARKER))
            {
                CloseDecision::Cancel
            } else {
                CloseDecision::Allow
            }
        });
        let mut app = Self {
            container,
            bindings: KeyBindings::default(),
            hits: HitMap::default(),
            drag: None,
            last_click: None,
            status: String::new(),
            opened: 0,
        };
        app.container
            .create_child(ChildSpec::titled("Welcome").content(WELCOME.to_string()));
        for _ in 0..windows {
            app.open_window();
        }
        app
    }

    fn resize(&mut self, width: u16, height: u16) {
        // bottom row is the status line
        let host = Rect {
            x: 0,
            y: 0,
            width,
            height: height.saturating_sub(1),
        };
        self.container.resize_host(host);
    }

    fn open_window(&mut self) {
        self.opened += 1;
        let title = format!("Document {}", self.opened);
        let body = format!("Scratch document number {}.", self.opened);
        self.container.create_child(ChildSpec::titled(title).content(body));
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.bindings.action_for_key(&key) else {
            return false;
        };
        tracing::trace!(%action, "key action");
        let active = self.container.active();
        match action {
            Action::Quit => return true,
            Action::NewWindow => self.open_window(),
            Action::CloseActive => {
                if let Some(id) = active
                    && !self.container.request_close(id)
                {
                    self.status = "close refused: window is pinned".to_string();
                }
            }
            Action::CloseAll => self.container.close_all(),
            Action::CycleNextWindow => self.container.cycle_active(true),
            Action::CyclePrevWindow => self.container.cycle_active(false),
            Action::Cascade => self.container.set_layout(LayoutCommand::Cascade),
            Action::TileHorizontal => self.container.set_layout(LayoutCommand::TileHorizontal),
            Action::TileVertical => self.container.set_layout(LayoutCommand::TileVertical),
            Action::ArrangeIcons => self.container.set_layout(LayoutCommand::ArrangeIcons),
            Action::Minimize => {
                self.on_active(|c, id| c.titlebar_button(id, TitlebarButton::Minimize))
            }
            Action::Maximize => {
                self.on_active(|c, id| c.titlebar_button(id, TitlebarButton::Maximize))
            }
            Action::ToggleState => self.on_active(|c, id| c.titlebar_double_click(id)),
            Action::RestoreAll => self.container.press_container_button(ContainerButton::Restore),
            Action::MaximizeAll => self.container.press_container_button(ContainerButton::Maximize),
            Action::MoveLeft => self.on_active(|c, id| {
                c.drag_move(id, -1, 0);
            }),
            Action::MoveRight => self.on_active(|c, id| {
                c.drag_move(id, 1, 0);
            }),
            Action::MoveUp => self.on_active(|c, id| {
                c.drag_move(id, 0, -1);
            }),
            Action::MoveDown => self.on_active(|c, id| {
                c.drag_move(id, 0, 1);
            }),
            Action::GrowWidth => self.on_active(|c, id| {
                c.drag_resize(id, ResizeEdge::Right, 1, 0);
            }),
            Action::ShrinkWidth => self.on_active(|c, id| {
                c.drag_resize(id, ResizeEdge::Right, -1, 0);
            }),
            Action::GrowHeight => self.on_active(|c, id| {
                c.drag_resize(id, ResizeEdge::Bottom, 0, 1);
            }),
            Action::ShrinkHeight => self.on_active(|c, id| {
                c.drag_resize(id, ResizeEdge::Bottom, 0, -1);
            }),
        }
        false
    }

    fn on_active(&mut self, f: impl FnOnce(&mut Container<String, F>, WindowId)) {
        if let Some(id) = self.container.active() {
            f(&mut self.container, id);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(column, row),
            MouseEventKind::Drag(MouseButton::Left) => self.drag_to(column, row),
            MouseEventKind::Up(MouseButton::Left) => self.drag = None,
            _ => {}
        }
    }

    fn press(&mut self, column: u16, row: u16) {
        let Some(target) = self.hits.hit_test(column, row) else {
            return;
        };
        match target {
            HitTarget::Tab(index) => {
                self.container.select_tab(index);
            }
            HitTarget::Button(button) => self.container.press_container_button(button),
            HitTarget::TitlebarButton(id, button) => self.container.titlebar_button(id, button),
            HitTarget::Titlebar(id) => {
                let now = Instant::now();
                let double = self
                    .last_click
                    .is_some_and(|(last, at)| last == id && now.duration_since(at) <= DOUBLE_CLICK);
                if double {
                    self.last_click = None;
                    self.container.titlebar_double_click(id);
                } else {
                    self.last_click = Some((id, now));
                    self.container.set_active_window(id);
                    self.drag = Some(Drag::Move { id, column, row });
                }
            }
            HitTarget::Border(id, edge) => {
                self.container.set_active_window(id);
                self.drag = Some(Drag::Resize {
                    id,
                    edge,
                    column,
                    row,
                });
            }
            HitTarget::Body(id) => self.container.set_active_window(id),
        }
    }

    fn drag_to(&mut self, column: u16, row: u16) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        match drag {
            Drag::Move {
                id,
                column: last_column,
                row: last_row,
            } => {
                let (dx, dy) = delta(*last_column, *last_row, column, row);
                self.container.drag_move(*id, dx, dy);
                *last_column = column;
                *last_row = row;
            }
            Drag::Resize {
                id,
                edge,
                column: last_column,
                row: last_row,
            } => {
                let (dx, dy) = delta(*last_column, *last_row, column, row);
                // Keep the anchor on a rejected edge so the pointer has to
                // travel back before the window responds again.
                if self.container.drag_resize(*id, *edge, dx, dy) {
                    *last_column = column;
                    *last_row = row;
                }
            }
        }
    }

    fn drain_events(&mut self) {
        for event in self.container.take_events() {
            tracing::debug!(?event, "container event");
            self.status = match event {
                ContainerEvent::ActiveChildChanged { new: Some(id), .. } => self
                    .container
                    .child(id)
                    .map(|w| format!("active: {}", w.title()))
                    .unwrap_or_default(),
                ContainerEvent::ActiveChildChanged { new: None, .. } => {
                    "no windows open, press n".to_string()
                }
                ContainerEvent::StateChanged { id, state } => format!("{id} is now {state:?}"),
                ContainerEvent::Closed(id) => format!("closed {id}"),
                _ => continue,
            };
        }
    }
}

fn delta(from_column: u16, from_row: u16, to_column: u16, to_row: u16) -> (i32, i32) {
    (
        to_column as i32 - from_column as i32,
        to_row as i32 - from_row as i32,
    )
}
