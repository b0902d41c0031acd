use crate::deck::SwipeDirection;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.swipe(SwipeDirection::Reject),
        KeyCode::Right | KeyCode::Char('l') => app.swipe(SwipeDirection::Accept),
        KeyCode::Char('r') => app.load_more(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile::Profile;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_swipe_the_active_card() {
        let mut app = App::new(Config::default());
        app.on_profiles_loaded(vec![
            Profile::new("A", "", "", "", ""),
            Profile::new("B", "", "", "", ""),
        ]);
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.deck().tallies(), (1, 1));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(Config::default());
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
