use ratatui::{prelude::*, widgets::Paragraph};

use crate::models::format_total;
use crate::playback::TitleKind;
use crate::screen::Screen;

use super::Palette;

const DATE_FORMAT: &str = "%-d %B %Y";

pub fn render(frame: &mut Frame, area: Rect, screen: &Screen, kind: TitleKind, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let heading = match kind {
        TitleKind::Questions => "Questions",
        TitleKind::Answers => "Answers",
        TitleKind::End => "The End",
    };

    let mut content = vec![
        Line::from(Span::styled(
            heading,
            Style::default().fg(palette.foreground).bold(),
        )),
        Line::from(""),
    ];
    if let Some(date) = screen.quiz_date {
        content.push(Line::from(Span::styled(
            date.format(DATE_FORMAT).to_string(),
            Style::default().fg(palette.highlight),
        )));
    }
    if let (TitleKind::End, Some(total)) = (kind, screen.total_score) {
        content.push(Line::from(Span::styled(
            format!("Score: {}", format_total(total)),
            Style::default().fg(palette.highlight).bold(),
        )));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);

    let hint = match kind {
        TitleKind::End => "→ exit  ·  ← back",
        _ => "→ next  ·  ← back  ·  ↑↓ theme  ·  q quit",
    };
    let controls = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(palette.very_dimmed);
    frame.render_widget(controls, chunks[3]);
}
