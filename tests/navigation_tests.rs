use pageZoom::app::{Action, App};
use pageZoom::input::{KeyCode, KeyEvent, KeyModifiers};
use pageZoom::pagination::{Control, PaginatorConfig};
use pageZoom::runner::handlers::handle_key;

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn app(n: usize, max_visible_pages: usize) -> App {
    App::new(
        (1..=n).map(|i| format!("row {i}")).collect(),
        PaginatorConfig { page_size: 10, max_visible_pages },
    )
    .unwrap()
}

#[test]
fn default_keys_walk_the_pages() {
    let mut app = app(95, 5);
    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.pager.current_page(), 3);
    press(&mut app, KeyCode::End);
    assert_eq!(app.pager.current_page(), 10);
    assert_eq!(app.pager.current_page_items().len(), 5);
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.pager.current_page(), 9);
    press(&mut app, KeyCode::Home);
    assert_eq!(app.pager.current_page(), 1);
}

#[test]
fn focus_and_activate_with_arrows() {
    let mut app = app(95, 5);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.focused_control(), Some(&Control::Page { number: 3, active: false }));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.pager.current_page(), 3);
    // « ‹ 1 2 [3] 4 … 10 › »
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    assert!(matches!(app.focused_control(), Some(Control::Nav { .. })));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.pager.current_page(), 2, "focused ‹ goes back one page");
}

#[test]
fn backspace_edits_typed_page() {
    let mut app = app(95, 5);
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.jump, "1");
    press(&mut app, KeyCode::Char('0'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.pager.current_page(), 10);
}

#[test]
fn overridden_keymap_is_used() {
    let mut keys = std::collections::BTreeMap::new();
    keys.insert("quit".to_string(), vec!["x".to_string()]);
    let keymap = pageZoom::app::settings::Keymap::with_overrides(&keys).unwrap();
    let mut app = app(20, 5).with_keymap(keymap);
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert!(press(&mut app, KeyCode::Char('x')));
}

#[test]
fn single_page_ignores_navigation() {
    let mut app = app(3, 5);
    for action in [Action::Next, Action::Last, Action::Prev, Action::First] {
        app.perform(action);
        assert_eq!(app.pager.current_page(), 1);
    }
    assert!(app.controls().iter().filter(|c| matches!(c, Control::Nav { .. })).all(Control::is_disabled));
}
