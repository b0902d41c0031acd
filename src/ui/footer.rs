use crate::ui::deck::DeckState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SWIPE_HINTS: &str = " Drag: Swipe │ ←/h: Nope │ →/l: Like │ q: Quit";
const EXHAUSTED_HINTS: &str = " r: Load more │ q: Quit";
const LOADING_HINTS: &str = " q: Quit";

/// Key hints for the current deck state, version on the right.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(deck: &DeckState) -> &'static str {
        if deck.is_loading() {
            LOADING_HINTS
        } else if deck.is_exhausted() {
            EXHAUSTED_HINTS
        } else {
            SWIPE_HINTS
        }
    }

    pub fn widget(&self, deck: &DeckState, area: Rect) -> Paragraph<'static> {
        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let hints = Span::styled(Self::hints(deck), style);
        let version = Span::styled(format!("v{VERSION} "), style);

        let inner_width = usize::from(area.width.saturating_sub(2));
        let gap = inner_width.saturating_sub(hints.width() + version.width());

        Paragraph::new(Line::from(vec![
            hints,
            Span::styled(" ".repeat(gap), style),
            version,
        ]))
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_deck_state() {
        assert_eq!(Footer::hints(&DeckState::Loading), LOADING_HINTS);

        let exhausted = DeckState::Ready {
            profiles: Vec::new(),
            cursor: 0,
            accepted: 0,
            rejected: 0,
        };
        assert_eq!(Footer::hints(&exhausted), EXHAUSTED_HINTS);
    }
}
