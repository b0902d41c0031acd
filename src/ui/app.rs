use crate::config::Config;
use crate::deck::{GestureInput, StackedCard, SwipeDirection, SwipeSession};
use crate::profile::Profile;
use crate::ui::deck::{DeckIntent, DeckReducer, DeckState};
use crate::ui::layout::{body_rect, contains, Surface};
use crate::ui::mvi::Reducer;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchBatch { count: usize },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Pointer held down on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PointerGrab {
    index: usize,
    column: u16,
    row: u16,
}

pub struct App {
    should_quit: bool,
    config: Config,
    /// Card queue, cursor and tallies (MVI pattern).
    deck: DeckState,
    /// Drag and animation state of the visible cards.
    session: SwipeSession,
    surface: Surface,
    grab: Option<PointerGrab>,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let surface = Surface::new(Rect::default(), &config.ui, config.gesture.card_inset);
        let session = SwipeSession::new(surface.width_units(), config.gesture);
        Self {
            should_quit: false,
            config,
            deck: DeckState::default(),
            session,
            surface,
            grab: None,
            commands: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    pub fn session(&self) -> &SwipeSession {
        &self.session
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    /// Starts a fresh batch; cursor and tallies reset when it arrives.
    pub fn request_batch(&mut self) {
        let count = self.config.deck.batch_size;
        dispatch_mvi!(self, deck, DeckReducer, DeckIntent::BeginLoad);
        self.grab = None;
        self.session.abandon_departing();
        self.session.sync(&self.deck.window());
        match &self.commands {
            Some(sender) => {
                if let Err(err) = sender.try_send(UiCommand::FetchBatch { count }) {
                    warn!(error = %err, "Failed to queue profile fetch");
                }
            }
            None => debug!("No command channel attached; fetch skipped"),
        }
    }

    pub fn on_profiles_loaded(&mut self, profiles: Vec<Profile>) {
        info!(count = profiles.len(), "Profiles loaded");
        dispatch_mvi!(self, deck, DeckReducer, DeckIntent::Loaded { profiles });
        self.session.sync(&self.deck.window());
    }

    /// `cols`/`rows` is the full terminal size.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let body = body_rect(Rect::new(0, 0, cols, rows));
        self.surface = Surface::new(body, &self.config.ui, self.config.gesture.card_inset);
        self.session.resize(self.surface.width_units());
    }

    /// Steps animations by the wall-clock time since the last frame.
    pub fn on_frame(&mut self, elapsed: Duration) {
        let cap = Duration::from_millis(self.config.ui.max_frame_step_ms);
        self.session.frame(elapsed.min(cap).as_secs_f64());
    }

    /// Keyboard stand-in for the like/nope buttons.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        let resolved = {
            let window = self.deck.window();
            self.session.commit(&window, direction)
        };
        if let Some(direction) = resolved {
            self.grab = None;
            self.resolve(direction);
        }
    }

    /// "Load more" is only offered once the deck runs dry.
    pub fn load_more(&mut self) {
        if self.deck.is_exhausted() {
            self.request_batch();
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A second press without a release keeps the first grab.
                if self.grab.is_some() {
                    return;
                }
                let Some(index) = self.hit_test(mouse.column, mouse.row) else {
                    return;
                };
                self.grab = Some(PointerGrab {
                    index,
                    column: mouse.column,
                    row: mouse.row,
                });
                self.send_pointer(index, GestureInput::Press);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(grab) = self.grab else {
                    return;
                };
                let dx = (f64::from(mouse.column) - f64::from(grab.column)) * self.surface.column_units;
                let dy = (f64::from(mouse.row) - f64::from(grab.row)) * self.surface.row_units;
                self.send_pointer(grab.index, GestureInput::Drag { dx, dy });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(grab) = self.grab.take() {
                    self.send_pointer(grab.index, GestureInput::Release);
                }
            }
            _ => {}
        }
    }

    /// Visible cards back to front, with their on-screen areas.
    pub fn cards(&self) -> Vec<(StackedCard<'_>, Option<Rect>)> {
        self.session
            .compose(&self.deck.window())
            .into_iter()
            .map(|card| {
                let area = self.surface.card_rect(&card.transform);
                (card, area)
            })
            .collect()
    }

    /// Index of the topmost card under the pointer.
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.cards()
            .into_iter()
            .rev()
            .find(|(_, area)| area.is_some_and(|area| contains(area, column, row)))
            .map(|(card, _)| card.index)
    }

    fn send_pointer(&mut self, index: usize, input: GestureInput) {
        let resolved = {
            let window = self.deck.window();
            self.session.input(&window, index, input)
        };
        if let Some(direction) = resolved {
            self.resolve(direction);
        }
    }

    /// Applies a resolution before anything else reads the deck.
    fn resolve(&mut self, direction: SwipeDirection) {
        if let Some(profile) = self.deck.current() {
            info!(
                name = %profile.name,
                direction = direction.label(),
                "Card swiped"
            );
        }
        dispatch_mvi!(self, deck, DeckReducer, DeckIntent::Resolve { direction });
        self.session.sync(&self.deck.window());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    fn profiles(count: usize) -> Vec<Profile> {
        (0..count)
            .map(|i| Profile::new(format!("P{i}"), "", "Solo", "Coding", ""))
            .collect()
    }

    #[test]
    fn keyboard_swipe_advances_and_tallies() {
        let mut app = App::new(Config::default());
        app.on_resize(100, 40);
        app.on_profiles_loaded(profiles(2));

        app.swipe(SwipeDirection::Accept);
        app.swipe(SwipeDirection::Reject);

        assert_eq!(app.deck().tallies(), (1, 1));
        assert!(app.deck().is_exhausted());
        // Nothing left: further swipes are ignored.
        app.swipe(SwipeDirection::Accept);
        assert_eq!(app.deck().tallies(), (1, 1));
    }

    #[test]
    fn swipe_while_loading_is_ignored() {
        let mut app = App::new(Config::default());
        app.swipe(SwipeDirection::Accept);
        assert!(app.deck().is_loading());
        assert!(app.session().departing().is_none());
    }

    #[test]
    fn request_batch_queues_command() {
        let mut app = App::new(Config::default());
        let (tx, mut rx) = mpsc::channel(4);
        app.attach_commands(tx);
        app.request_batch();
        assert!(app.deck().is_loading());
        assert_eq!(rx.try_recv().ok(), Some(UiCommand::FetchBatch { count: 10 }));
    }

    #[test]
    fn load_more_only_when_exhausted() {
        let mut app = App::new(Config::default());
        let (tx, mut rx) = mpsc::channel(4);
        app.attach_commands(tx);
        app.on_profiles_loaded(profiles(1));

        app.load_more();
        assert!(rx.try_recv().is_err());

        app.swipe(SwipeDirection::Reject);
        assert!(app.session().departing().is_some());
        app.load_more();
        assert!(app.deck().is_loading());
        assert!(app.session().departing().is_none());
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn far_exit_target_does_not_break_layout() {
        let mut config = Config::default();
        config.gesture.exit_multiplier = 1e10;
        let mut app = App::new(config);
        app.on_resize(100, 40);
        app.on_profiles_loaded(profiles(2));
        app.swipe(SwipeDirection::Accept);

        for _ in 0..20 {
            app.on_frame(Duration::from_millis(16));
        }
        let departing = app.session().departing().map(|d| d.transform());
        if let Some(transform) = departing {
            assert_eq!(app.surface().card_rect(&transform), None);
        }
        assert_eq!(app.cards().len(), 1);
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 19));
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 50, 19));
    }

    #[test]
    fn second_press_keeps_the_first_grab() {
        let mut app = App::new(Config::default());
        app.on_resize(100, 40);
        app.on_profiles_loaded(profiles(2));

        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 19));
        app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 60, 19));
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 70, 19));
        app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 75, 19));

        // 25 columns from the first press, not 5 from the second.
        let offset = app.session().active_gesture().map(|g| g.offset().x);
        assert_eq!(offset, Some(100.0));
    }

    #[test]
    fn frame_step_is_capped() {
        let mut app = App::new(Config::default());
        app.on_resize(100, 40);
        app.on_profiles_loaded(profiles(1));
        app.swipe(SwipeDirection::Accept);
        let before = app.session().departing().map(|d| d.gesture.offset().x);

        // A long stall advances by at most one capped step.
        app.on_frame(Duration::from_secs(5));
        let after = app.session().departing().map(|d| d.gesture.offset().x);
        assert!(after > before);
        assert!(app.session().departing().is_some());
    }
}
