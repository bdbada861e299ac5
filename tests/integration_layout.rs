use ratatui::prelude::Rect;
use term_mdi::window::{ChildSpec, Container, StandardContainer, WindowState};
use term_mdi::{FloatRect, LayoutCommand, MdiConfig};

fn container(width: u16, height: u16) -> StandardContainer<()> {
    Container::new(Rect::new(0, 0, width, height))
}

fn open(
    c: &mut StandardContainer<()>,
    count: usize,
    state: WindowState,
) -> Vec<term_mdi::window::WindowId> {
    (0..count)
        .map(|i| c.create_child(ChildSpec::titled(format!("w{i}")).state(state)))
        .collect()
}

#[test]
fn cascade_staggers_five_windows() {
    let mut c = container(1000, 600);
    let ids = open(&mut c, 5, WindowState::Normal);
    c.set_layout(LayoutCommand::Cascade);

    for (step, id) in ids.iter().enumerate() {
        let offset = step as i32 * 10;
        assert_eq!(
            c.child(*id).map(|w| w.bounds()),
            Some(FloatRect::new(offset, offset, 580, 402))
        );
    }
    assert_eq!(c.layout(), LayoutCommand::ArrangeIcons);
}

#[test]
fn cascade_demotes_maximized_windows() {
    let mut c = container(1000, 600);
    let ids = open(&mut c, 3, WindowState::Maximized);
    c.set_layout(LayoutCommand::Cascade);
    assert!(
        ids.iter()
            .all(|id| c.child(*id).map(|w| w.state()) == Some(WindowState::Normal))
    );
}

#[test]
fn tile_horizontal_four_windows_is_two_by_two() {
    let mut c = container(1000, 600);
    let ids = open(&mut c, 4, WindowState::Normal);
    c.set_layout(LayoutCommand::TileHorizontal);

    let bounds: Vec<FloatRect> = ids
        .iter()
        .filter_map(|id| c.child(*id).map(|w| w.bounds()))
        .collect();
    assert_eq!(
        bounds,
        vec![
            FloatRect::new(0, 0, 500, 300),
            FloatRect::new(0, 300, 500, 300),
            FloatRect::new(500, 0, 500, 300),
            FloatRect::new(500, 300, 500, 300),
        ]
    );
}

#[test]
fn tile_vertical_uses_rows() {
    let mut c = container(900, 600);
    let ids = open(&mut c, 2, WindowState::Normal);
    c.set_layout(LayoutCommand::TileVertical);
    // one group of two: a single row split side by side
    assert_eq!(
        c.child(ids[0]).map(|w| w.bounds()),
        Some(FloatRect::new(0, 0, 450, 600))
    );
    assert_eq!(
        c.child(ids[1]).map(|w| w.bounds()),
        Some(FloatRect::new(450, 0, 450, 600))
    );
}

#[test]
fn three_icons_share_the_bottom_row() {
    let mut c = container(500, 300);
    let ids = open(&mut c, 3, WindowState::Minimized);
    c.set_layout(LayoutCommand::ArrangeIcons);

    let mut xs: Vec<i32> = ids
        .iter()
        .filter_map(|id| c.child(*id).map(|w| w.bounds()))
        .map(|b| {
            assert_eq!((b.y, b.width, b.height), (271, 160, 29));
            b.x
        })
        .collect();
    xs.sort_unstable();
    assert_eq!(xs, vec![0, 160, 320]);
}

#[test]
fn tiles_leave_room_for_icons() {
    let mut c = container(1000, 600);
    let windows = open(&mut c, 2, WindowState::Normal);
    let icon = c.create_child(ChildSpec::titled("icon").state(WindowState::Minimized));
    c.set_layout(LayoutCommand::TileHorizontal);

    assert_eq!(
        c.child(icon).map(|w| w.bounds()),
        Some(FloatRect::new(0, 571, 160, 29))
    );
    for id in windows {
        let bounds = c.child(id).map(|w| w.bounds()).unwrap_or_default();
        assert!(bounds.bottom() <= 571);
    }
}

#[test]
fn fixed_size_windows_keep_their_size() {
    let mut c = container(1000, 600);
    let fixed = c.create_child(
        ChildSpec::titled("fixed")
            .state(WindowState::Normal)
            .resizable(false),
    );
    c.create_child(ChildSpec::titled("free").state(WindowState::Normal));
    c.set_layout(LayoutCommand::TileVertical);
    assert_eq!(
        c.child(fixed).map(|w| w.bounds().size()),
        Some(term_mdi::Size::new(333, 200))
    );
}

#[test]
fn layout_on_empty_or_zero_area_is_a_no_op() {
    let mut empty = container(800, 600);
    empty.set_layout(LayoutCommand::TileHorizontal);
    assert!(empty.take_events().is_empty());

    let mut flat = container(800, 0);
    let id = flat.create_child(ChildSpec::titled("flat"));
    flat.take_events();
    flat.set_layout(LayoutCommand::Cascade);
    assert!(flat.take_events().is_empty());
    assert_eq!(flat.child(id).map(|w| w.state()), Some(WindowState::Maximized));
}

#[test]
fn custom_offset_changes_cascade_step() {
    let config = MdiConfig::default().with_layout_offset(25);
    let mut c = Container::with_config(
        term_mdi::window::StandardFlavor,
        Rect::new(0, 0, 1000, 600),
        config,
    )
    .unwrap();
    let ids: Vec<_> = (0..3)
        .map(|_| c.create_child(ChildSpec::<()>::new().state(WindowState::Normal)))
        .collect();
    c.set_layout(LayoutCommand::Cascade);
    assert_eq!(c.child(ids[2]).map(|w| (w.bounds().x, w.bounds().y)), Some((50, 50)));
}

#[test]
fn invalid_config_is_rejected() {
    let config = MdiConfig::default().with_cascade_percent(0, 67);
    let result: term_mdi::Result<StandardContainer<()>> = Container::with_config(
        term_mdi::window::StandardFlavor,
        Rect::new(0, 0, 10, 10),
        config,
    );
    assert!(matches!(
        result,
        Err(term_mdi::MdiError::InvalidConfig {
            field: "cascade_width_percent",
            ..
        })
    ));
}
