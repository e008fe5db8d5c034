//! Quiz client rendering.

mod question;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{Phase, QuizApp};

/// Render the whole client screen.
pub fn render(frame: &mut Frame, app: &QuizApp) {
    let chunks = Layout::vertical([
        Constraint::Length(6), // Header + session stats
        Constraint::Min(12),   // Body
    ])
    .split(frame.area());

    render_header(frame, chunks[0], app);

    match &app.phase {
        Phase::Loading => render_loading(frame, chunks[1]),
        Phase::Failed { message } => render_failed(frame, chunks[1], message),
        Phase::Answering { .. } | Phase::Submitted { .. } => {
            question::render(frame, chunks[1], app)
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let mut lines = vec![
        Line::from(Span::styled(
            "AZ-204 Practice Quiz",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "Azure Developer Associate Certification Practice",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    // Stats appear once the first answer has been graded
    if app.stats.total > 0 {
        lines.push(Line::from(vec![
            Span::styled("Correct: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.stats.correct.to_string(),
                Style::default().fg(Color::Green).bold(),
            ),
            Span::raw("   "),
            Span::styled("Total: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.stats.total.to_string(),
                Style::default().fg(Color::White).bold(),
            ),
            Span::raw("   "),
            Span::styled("Accuracy: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}%", app.stats.accuracy_percent()),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(widget, area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("Loading question...")
        .alignment(Alignment::Center)
        .fg(Color::Yellow);
    frame.render_widget(widget, area);
}

fn render_failed(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(Color::Red).bold())),
        Line::raw(""),
        Line::from(Span::styled(
            "r retry  ·  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
