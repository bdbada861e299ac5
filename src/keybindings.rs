use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NewWindow,
    CloseActive,
    CloseAll,
    CycleNextWindow,
    CyclePrevWindow,
    // Layout commands
    Cascade,
    TileHorizontal,
    TileVertical,
    ArrangeIcons,
    // Active window state
    Minimize,
    Maximize,
    ToggleState,
    // Container buttons
    RestoreAll,
    MaximizeAll,
    // Keyboard move/resize of the active window
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    GrowWidth,
    ShrinkWidth,
    GrowHeight,
    ShrinkHeight,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::NewWindow => "New window",
            Action::CloseActive => "Close active window",
            Action::CloseAll => "Close all windows",
            Action::CycleNextWindow => "Cycle next window",
            Action::CyclePrevWindow => "Cycle previous window",
            Action::Cascade => "Cascade",
            Action::TileHorizontal => "Tile horizontally",
            Action::TileVertical => "Tile vertically",
            Action::ArrangeIcons => "Arrange icons",
            Action::Minimize => "Minimize / restore",
            Action::Maximize => "Maximize / restore",
            Action::ToggleState => "Restore icon / maximize",
            Action::RestoreAll => "Restore all",
            Action::MaximizeAll => "Maximize all",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::GrowWidth => "Grow width",
            Action::ShrinkWidth => "Shrink width",
            Action::GrowHeight => "Grow height",
            Action::ShrinkHeight => "Shrink height",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        kb.add(
            NewWindow,
            KeyCombo::new(KeyCode::Char('n'), KeyModifiers::NONE),
        );
        kb.add(
            CloseActive,
            KeyCombo::new(KeyCode::F(4), KeyModifiers::CONTROL),
        );
        kb.add(
            CloseActive,
            KeyCombo::new(KeyCode::Char('w'), KeyModifiers::NONE),
        );
        kb.add(
            CloseAll,
            KeyCombo::new(KeyCode::Char('W'), KeyModifiers::SHIFT),
        );
        kb.add(
            CycleNextWindow,
            KeyCombo::new(KeyCode::Tab, KeyModifiers::NONE),
        );
        kb.add(
            CyclePrevWindow,
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        );
        kb.add(
            Cascade,
            KeyCombo::new(KeyCode::Char('c'), KeyModifiers::NONE),
        );
        kb.add(
            TileHorizontal,
            KeyCombo::new(KeyCode::Char('h'), KeyModifiers::NONE),
        );
        kb.add(
            TileVertical,
            KeyCombo::new(KeyCode::Char('v'), KeyModifiers::NONE),
        );
        kb.add(
            ArrangeIcons,
            KeyCombo::new(KeyCode::Char('a'), KeyModifiers::NONE),
        );
        kb.add(
            Minimize,
            KeyCombo::new(KeyCode::Char('m'), KeyModifiers::NONE),
        );
        kb.add(
            Maximize,
            KeyCombo::new(KeyCode::Char('x'), KeyModifiers::NONE),
        );
        kb.add(
            ToggleState,
            KeyCombo::new(KeyCode::Enter, KeyModifiers::NONE),
        );
        kb.add(
            RestoreAll,
            KeyCombo::new(KeyCode::Char('r'), KeyModifiers::NONE),
        );
        kb.add(
            MaximizeAll,
            KeyCombo::new(KeyCode::Char('X'), KeyModifiers::SHIFT),
        );
        kb.add(MoveLeft, KeyCombo::new(KeyCode::Left, KeyModifiers::NONE));
        kb.add(MoveRight, KeyCombo::new(KeyCode::Right, KeyModifiers::NONE));
        kb.add(MoveUp, KeyCombo::new(KeyCode::Up, KeyModifiers::NONE));
        kb.add(MoveDown, KeyCombo::new(KeyCode::Down, KeyModifiers::NONE));
        kb.add(
            GrowWidth,
            KeyCombo::new(KeyCode::Right, KeyModifiers::SHIFT),
        );
        kb.add(
            ShrinkWidth,
            KeyCombo::new(KeyCode::Left, KeyModifiers::SHIFT),
        );
        kb.add(
            GrowHeight,
            KeyCombo::new(KeyCode::Down, KeyModifiers::SHIFT),
        );
        kb.add(
            ShrinkHeight,
            KeyCombo::new(KeyCode::Up, KeyModifiers::SHIFT),
        );
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        if let Some(list) = self.map.get(&action) {
            list.iter().any(|c| c.matches(key))
        } else {
            false
        }
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (act, list) in &self.map {
            if list.iter().any(|c| c.matches(key)) {
                return Some(*act);
            }
        }
        None
    }

    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}
