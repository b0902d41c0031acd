//! Draws whole screens into a test backend and inspects the text.

mod common;

use common::sample_profiles;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use swipedeck::config::Config;
use swipedeck::ui::app::App;
use swipedeck::ui::render::draw;

const COLS: u16 = 80;
const ROWS: u16 = 24;

/// Rounded corners are only used by card borders.
const CARD_CORNER: &str = "╭";

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(COLS, ROWS)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..ROWS {
        for x in 0..COLS {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app() -> App {
    let mut app = App::new(Config::default());
    app.on_resize(COLS, ROWS);
    app
}

#[test]
fn empty_batch_shows_exhausted_screen() {
    let mut app = app();
    app.on_profiles_loaded(Vec::new());

    let text = screen(&app);
    assert!(text.contains("No more profiles!"));
    assert!(text.contains("Load More"));
    assert!(!text.contains(CARD_CORNER));
    assert!(app.cards().is_empty());
}

#[test]
fn loading_screen_has_no_cards() {
    let app = app();

    let text = screen(&app);
    assert!(text.contains("Loading profiles..."));
    assert!(!text.contains(CARD_CORNER));
    assert!(!text.contains("No more profiles!"));
}

#[test]
fn loaded_batch_draws_the_active_card() {
    let mut app = app();
    app.on_profiles_loaded(sample_profiles(3));

    let text = screen(&app);
    assert!(text.contains(CARD_CORNER));
    assert!(text.contains("Person 0"));
    assert!(text.contains("3 left"));
    assert!(!text.contains("No more profiles!"));
}

#[test]
fn last_swipe_switches_to_exhausted_screen() {
    let mut app = app();
    app.on_profiles_loaded(sample_profiles(1));
    app.swipe(swipedeck::deck::SwipeDirection::Reject);

    let text = screen(&app);
    assert!(text.contains("No more profiles!"));
}
