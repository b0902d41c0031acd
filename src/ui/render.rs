use crate::ui::app::App;
use crate::ui::card::CardView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, ACCEPT, CARD_MUTED, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.deck()), header);
    frame.render_widget(Clear, body);

    if app.deck().is_loading() {
        draw_message(
            frame,
            body,
            vec![Line::from(Span::styled(
                "Loading profiles...",
                Style::default().fg(ACCENT),
            ))],
        );
    } else if app.deck().is_exhausted() {
        draw_exhausted(frame, body);
    } else {
        draw_stack(frame, app);
    }

    frame.render_widget(Footer::new().widget(app.deck(), footer), footer);
}

fn draw_stack(frame: &mut Frame<'_>, app: &App) {
    for (card, area) in app.cards() {
        let Some(area) = area else {
            continue;
        };
        frame.render_widget(
            CardView::new(card.profile, card.transform, card.badges, card.is_active),
            area,
        );
    }

    // The card on its way out is drawn above the stack.
    if let Some(departing) = app.session().departing() {
        let transform = departing.transform();
        if let Some(area) = app.surface().card_rect(&transform) {
            frame.render_widget(
                CardView::new(&departing.profile, transform, departing.badges(), false),
                area,
            );
        }
    }
}

fn draw_exhausted(frame: &mut Frame<'_>, body: Rect) {
    let lines = vec![
        Line::from(Span::styled("✔", Style::default().fg(ACCEPT))),
        Line::from(""),
        Line::from(Span::styled(
            "No more profiles!",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "You've seen all available profiles",
            Style::default().fg(CARD_MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ r ] Load More",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];
    draw_message(frame, body, lines);
}

fn draw_message(frame: &mut Frame<'_>, body: Rect, lines: Vec<Line<'static>>) {
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let area = centered_rect_by_size(body, width, height);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
