//! Profile card widget.
//!
//! A terminal cell can't rotate, so the tilt is printed in the card border;
//! scale and translation are already baked into the area it gets.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};

use crate::deck::{BadgeOpacity, CardTransform};
use crate::profile::Profile;
use crate::ui::theme::{blend, ACCEPT, CARD_BACKGROUND, CARD_BORDER, CARD_MUTED, HEADER_TEXT, REJECT};

const INFO_ROWS: u16 = 4;

pub struct CardView<'a> {
    profile: &'a Profile,
    transform: CardTransform,
    badges: BadgeOpacity,
    is_active: bool,
}

impl<'a> CardView<'a> {
    pub fn new(
        profile: &'a Profile,
        transform: CardTransform,
        badges: BadgeOpacity,
        is_active: bool,
    ) -> Self {
        Self {
            profile,
            transform,
            badges,
            is_active,
        }
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let border_color = if self.is_active { CARD_BORDER } else { CARD_MUTED };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(CARD_BACKGROUND));
        let tilt = self.transform.rotation_deg;
        if tilt.abs() >= 0.5 {
            block = block.title_bottom(
                Line::from(format!(" {:+.0}° ", tilt)).alignment(Alignment::Right),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let muted = Style::default().fg(CARD_MUTED);
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(format!(" ▣ {}", self.profile.photo_url), muted)),
        ])
        .render(inner, buf);

        render_badge(
            "LIKE",
            ACCEPT,
            self.badges.accept,
            Alignment::Left,
            inner,
            buf,
        );
        render_badge(
            "NOPE",
            REJECT,
            self.badges.reject,
            Alignment::Right,
            inner,
            buf,
        );

        let info_height = INFO_ROWS.min(inner.height);
        let info = Rect {
            y: inner.y + inner.height - info_height,
            height: info_height,
            ..inner
        };
        let text = Style::default().fg(HEADER_TEXT);
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", self.profile.name),
                text.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!(" ⌖ {}", self.profile.city), text)),
            Line::from(Span::styled(format!(" ♥ {}", self.profile.hobby), text)),
            Line::from(Span::styled(
                format!(" {}", self.profile.credit),
                muted.add_modifier(Modifier::ITALIC),
            )),
        ])
        .render(info, buf);
    }
}

fn render_badge(
    label: &str,
    color: ratatui::style::Color,
    opacity: f64,
    alignment: Alignment,
    inner: Rect,
    buf: &mut Buffer,
) {
    if opacity <= 0.0 || inner.height < 3 {
        return;
    }
    let tint = blend(color, CARD_BACKGROUND, opacity);
    let row = Rect {
        y: inner.y + 2,
        height: 1,
        ..inner
    };
    Paragraph::new(Line::from(Span::styled(
        format!(" [ {} ] ", label),
        Style::default().fg(tint).add_modifier(Modifier::BOLD),
    )))
    .alignment(alignment)
    .render(row, buf);
}
