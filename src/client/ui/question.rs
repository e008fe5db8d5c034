//! Question card rendering.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::client::state::{OptionMarker, Phase, QuizApp, correct_answer_line, option_marker};
use crate::models::question::Question;

/// Render the question card for the `Answering` and `Submitted` phases.
pub fn render(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let (question, cursor, submitted) = match &app.phase {
        Phase::Answering {
            question, cursor, ..
        } => (question, Some(*cursor), false),
        Phase::Submitted { question, .. } => (question, None, true),
        _ => return,
    };

    let chunks = if submitted {
        Layout::vertical([
            Constraint::Length(2), // Topic / skill area
            Constraint::Length(6), // Question text
            Constraint::Length(8), // Options
            Constraint::Min(7),    // Result block
            Constraint::Length(2), // Controls
        ])
        .margin(1)
        .split(area)
    } else {
        Layout::vertical([
            Constraint::Length(2), // Topic / skill area
            Constraint::Length(6), // Question text
            Constraint::Min(8),    // Options
            Constraint::Length(2), // Controls
        ])
        .margin(1)
        .split(area)
    };

    render_topic_line(frame, chunks[0], question);
    render_question_text(frame, chunks[1], &question.question);
    render_options(frame, chunks[2], app, question, cursor);

    if submitted {
        render_result(frame, chunks[3], app, question);
        render_controls(frame, chunks[4], true);
    } else {
        render_controls(frame, chunks[3], false);
    }
}

fn render_topic_line(frame: &mut Frame, area: Rect, question: &Question) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", question.topic),
            Style::default().fg(Color::Black).bg(Color::Blue).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            question.skill_area.clone(),
            Style::default().fg(Color::DarkGray).italic(),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    app: &QuizApp,
    question: &Question,
    cursor: Option<usize>,
) {
    let lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let marker = option_marker(&app.phase, i);
            let at_cursor = cursor == Some(i);
            let prefix = if at_cursor { "> " } else { "  " };

            let (tag, style) = match marker {
                OptionMarker::Plain => {
                    let style = if at_cursor {
                        Style::default().fg(Color::Yellow).bold()
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ("( ) ", style)
                }
                OptionMarker::Chosen => ("(*) ", Style::default().fg(Color::Cyan).bold()),
                OptionMarker::Correct => (" +  ", Style::default().fg(Color::Green).bold()),
                OptionMarker::Incorrect => (" x  ", Style::default().fg(Color::Red).bold()),
                OptionMarker::Inert => ("    ", Style::default().fg(Color::DarkGray)),
            };

            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(tag, style),
                Span::styled(opt.clone(), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_result(frame: &mut Frame, area: Rect, app: &QuizApp, question: &Question) {
    let Phase::Submitted { correct, .. } = &app.phase else {
        return;
    };

    let (verdict, color) = if *correct {
        ("Correct!", Color::Green)
    } else {
        ("Incorrect", Color::Red)
    };

    let mut lines = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Explanation: ", Style::default().fg(Color::White).bold()),
            Span::styled(
                question.explanation.clone(),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    if !*correct {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            correct_answer_line(question),
            Style::default().fg(Color::Green).bold(),
        )));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, submitted: bool) {
    let text = if submitted {
        "Enter/n next question  ·  q quit"
    } else {
        "j/k or arrows to move  ·  Space to select  ·  Enter to submit  ·  n new question  ·  q quit"
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);

    frame.render_widget(widget, area);
}
