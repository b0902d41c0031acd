use crate::ui::deck::DeckState;
use crate::ui::theme::{ACCEPT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, REJECT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, deck: &DeckState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (accepted, rejected) = deck.tallies();

        let status = if deck.is_loading() {
            "loading".to_string()
        } else {
            format!("{} left", deck.remaining())
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("✗ ", Style::default().fg(REJECT)),
            Span::styled(
                rejected.to_string(),
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("♥ ", Style::default().fg(ACCEPT)),
            Span::styled(
                accepted.to_string(),
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
