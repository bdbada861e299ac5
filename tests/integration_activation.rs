use ratatui::prelude::Rect;
use term_mdi::window::{
    ChildSpec, Container, ContainerButton, ContainerEvent, StandardContainer, WindowState,
};

fn normal(title: &str) -> ChildSpec<()> {
    ChildSpec::titled(title).state(WindowState::Normal)
}

fn assert_consistent(c: &StandardContainer<()>) {
    if c.is_empty() {
        assert_eq!(c.active(), None);
        assert!(!c.buttons_enabled());
    } else {
        let active = c.active().expect("non-empty container has an active child");
        assert!(c.child(active).is_some(), "active child must be live");
        assert_eq!(c.topmost(), Some(active));
    }

    let mut zs: Vec<u32> = c.children().iter().map(|w| w.z_order()).collect();
    zs.sort_unstable();
    zs.dedup();
    assert_eq!(zs.len(), c.len(), "z-orders must be distinct");

    let focused: Vec<_> = c
        .children()
        .iter()
        .filter(|w| w.focused())
        .map(|w| w.id())
        .collect();
    assert_eq!(focused, c.active().into_iter().collect::<Vec<_>>());
}

#[test]
fn active_child_tracks_every_create_close_sequence() {
    let mut c: StandardContainer<()> = Container::new(Rect::new(0, 0, 800, 600));
    let mut live = Vec::new();
    // xorshift, so the sequence is fixed but not hand-picked
    let mut seed = 0x2545_f491_u32;
    for step in 0..200 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        match seed % 5 {
            0 | 1 => live.push(c.create_child(normal(&format!("w{step}")))),
            2 if !live.is_empty() => {
                let id = live.remove(seed as usize % live.len());
                assert!(c.close_child(id));
            }
            3 if !live.is_empty() => {
                let id = live[seed as usize % live.len()];
                c.set_active_window(id);
            }
            4 if step % 37 == 0 => {
                c.close_all();
                live.clear();
            }
            _ => {}
        }
        assert_consistent(&c);
    }
}

#[test]
fn activating_twice_emits_one_change() {
    let mut c: StandardContainer<()> = Container::new(Rect::new(0, 0, 800, 600));
    let a = c.create_child(normal("a"));
    c.create_child(normal("b"));
    c.take_events();

    c.set_active_window(a);
    c.set_active_window(a);
    let changes = c
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, ContainerEvent::ActiveChildChanged { .. }))
        .count();
    assert_eq!(changes, 1);
}

#[test]
fn closing_active_selects_highest_surviving_z() {
    let mut c: StandardContainer<()> = Container::new(Rect::new(0, 0, 800, 600));
    let a = c.create_child(normal("A"));
    let b = c.create_child(normal("B"));
    let cc = c.create_child(normal("C"));
    c.set_active_window(b);
    // stacking is now A < C < B
    assert_eq!(c.stacking_order(), vec![a, cc, b]);

    c.take_events();
    c.close_child(b);
    assert_eq!(c.active(), Some(cc));
    assert_eq!(
        c.take_events(),
        vec![
            ContainerEvent::ChildRemoved(b),
            ContainerEvent::ActiveChildChanged {
                old: Some(b),
                new: Some(cc)
            },
            ContainerEvent::ChildActivated(cc),
        ]
    );
}

#[test]
fn maximized_state_follows_activation() {
    let mut c: StandardContainer<()> = Container::new(Rect::new(0, 0, 800, 600));
    let a = c.create_child(normal("A"));
    let b = c.create_child(normal("B"));
    c.set_window_state(a, WindowState::Maximized);
    c.set_active_window(a);
    assert_eq!(c.child(b).map(|w| w.state()), Some(WindowState::Normal));

    c.set_active_window(b);
    assert_eq!(c.child(b).map(|w| w.state()), Some(WindowState::Maximized));
    assert_eq!(
        c.screen_bounds(b),
        Some(Rect::new(0, 0, 800, 600))
    );
}

#[test]
fn new_windows_inherit_maximize_from_active() {
    let mut c: StandardContainer<()> = Container::new(Rect::new(0, 0, 800, 600));
    c.create_child(ChildSpec::titled("first"));
    let second = c.create_child(normal("second"));
    assert_eq!(
        c.child(second).map(|w| w.state()),
        Some(WindowState::Maximized)
    );
}

#[test]
fn left_drag_below_minimum_changes_nothing() {
    let mut c: StandardContainer<()> = Container::new(Rect::new(0, 0, 900, 600));
    let a = c.create_child(normal("a"));
    c.drag_move(a, 50, 50);
    let before = c.child(a).map(|w| w.bounds());

    // 300 wide, min 20: a 290 shift would leave 10
    assert!(!c.drag_resize(a, term_mdi::layout::floating::ResizeEdge::Left, 290, 0));
    assert_eq!(c.child(a).map(|w| w.bounds()), before);
}

#[test]
fn container_buttons_disabled_when_empty() {
    let mut c: StandardContainer<()> = Container::new(Rect::new(0, 0, 800, 600));
    assert!(!c.buttons_enabled());
    c.press_container_button(ContainerButton::Maximize);
    assert!(c.take_events().is_empty());

    let a = c.create_child(ChildSpec::titled("a"));
    assert!(c.buttons_enabled());
    c.press_container_button(ContainerButton::Close);
    assert!(c.child(a).is_none());
    assert!(!c.buttons_enabled());
}

#[test]
fn stale_handles_stop_resolving() {
    let mut c: StandardContainer<()> = Container::new(Rect::new(0, 0, 800, 600));
    let a = c.create_child(ChildSpec::titled("a"));
    c.close_child(a);
    let b = c.create_child(ChildSpec::titled("a"));
    assert_ne!(a, b);
    assert_eq!(c.find_by_title("a"), Some(b));
    assert!(c.child(a).is_none());
}
