use crate::form::{FieldKind, FieldSpec, FieldState};
use crate::ui::app::{App, Focus};
use crate::ui::reveal::Reveal;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);

    // The result card only exists when a result was supplied at launch.
    if let Some(reveal) = &app.reveal {
        let body_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(main_chunks[1]);

        render_form(frame, app, body_chunks[0]);
        render_result(frame, app, reveal, now, body_chunks[1]);
    } else {
        render_form(frame, app, main_chunks[1]);
    }

    render_footer(frame, app, main_chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let header_text = vec![Line::from(vec![Span::styled(
        "  📊 SCORECARD - Prediction Score Entry  ",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )])];

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(header, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    for (i, (spec, state)) in app.spec.fields.iter().zip(app.fields.iter()).enumerate() {
        let focused = app.focus == Focus::Field(i) && !app.loading;
        lines.push(field_label_line(app, spec, focused));
        lines.push(field_value_line(app, spec, state, focused));
        lines.push(match &state.error {
            Some(msg) => Line::from(Span::styled(
                format!("    ⚠ {msg}"),
                Style::default().fg(theme.error),
            )),
            None => Line::from(""),
        });
    }

    lines.push(Line::from(""));
    lines.push(submit_line(app));

    let (border_color, title) = if app.loading {
        (theme.fg_dim, format!("{} (submitting)", app.spec.title))
    } else {
        (theme.accent, app.spec.title.clone())
    };

    // Loading dims the whole panel, the analog of the page fading the form
    // container while the submission is in flight.
    let mut panel_style = Style::default().fg(theme.fg);
    if app.loading {
        panel_style = panel_style.add_modifier(Modifier::DIM);
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        )
        .style(panel_style)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn field_label_line<'a>(app: &'a App, spec: &'a FieldSpec, focused: bool) -> Line<'a> {
    let theme = &app.theme;
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg)
    };

    let mut spans = vec![Span::styled(format!("{marker}{}", spec.label), label_style)];
    if spec.required {
        spans.push(Span::styled(" *", Style::default().fg(theme.error)));
    }
    Line::from(spans)
}

fn field_value_line<'a>(
    app: &'a App,
    spec: &'a FieldSpec,
    state: &'a FieldState,
    focused: bool,
) -> Line<'a> {
    let theme = &app.theme;

    let shown = match spec.kind {
        FieldKind::Number => {
            if focused {
                format!("{}▏", state.value)
            } else {
                state.value.clone()
            }
        }
        FieldKind::Select => {
            if state.is_empty() {
                "Select an option".to_string()
            } else {
                state.value.clone()
            }
        }
    };

    // Error outranks the focus glow, matching the red border of the page.
    let value_style = if state.error.is_some() {
        Style::default().fg(theme.error)
    } else if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg)
    };

    let mut spans = vec![Span::styled(format!("  [ {shown:<24} ]"), value_style)];
    if let Some(band) = state.band {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            band.label(),
            Style::default()
                .fg(theme.band_color(band))
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn submit_line(app: &App) -> Line<'_> {
    let theme = &app.theme;
    if app.loading {
        Line::from(Span::styled(
            "  [ Submitting... ]",
            Style::default()
                .fg(theme.fg_dim)
                .add_modifier(Modifier::DIM),
        ))
    } else if app.focus == Focus::Submit {
        Line::from(Span::styled(
            "  [ Predict Score ]",
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "  [ Predict Score ]",
            Style::default().fg(theme.secondary),
        ))
    }
}

fn render_result(frame: &mut Frame, app: &App, reveal: &Reveal, now: Instant, area: Rect) {
    let theme = &app.theme;
    let opacity = reveal.entrance_opacity(now);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("🎯 Prediction Result")
        .border_style(Style::default().fg(if opacity < 1.0 {
            theme.fg_dim
        } else {
            theme.accent
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Entrance delay: the card frame is on screen but its content is not
    // drawn until the fade begins.
    if opacity <= 0.0 {
        return;
    }

    // Terminal cells have no real opacity; a dimmed mid-fade stage stands
    // in for the transition.
    let fading = opacity < 1.0;
    let text_color = if fading { theme.fg_dim } else { theme.fg };
    let score_color = if fading { theme.fg_dim } else { theme.accent };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // label + counter
            Constraint::Length(1), // spacer
            Constraint::Length(1), // progress bar
            Constraint::Min(0),
        ])
        .split(inner);

    let mut score_style = Style::default()
        .fg(score_color)
        .add_modifier(Modifier::BOLD);
    if fading {
        score_style = score_style.add_modifier(Modifier::DIM);
    }

    let text = vec![
        Line::from(Span::styled(
            "Predicted Score",
            Style::default().fg(text_color),
        )),
        Line::from(vec![
            Span::styled(reveal.counter_value(now).to_string(), score_style),
            Span::styled(" / 100", Style::default().fg(theme.fg_dim)),
        ]),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[0]);

    let percent = reveal.progress_percent(now);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.success).bg(theme.bg))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));
    frame.render_widget(gauge, chunks[2]);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.loading {
        "Submitting..."
    } else {
        match app.focus {
            Focus::Field(i) if app.spec.fields[i].kind == FieldKind::Select => {
                "[←→/Space] Choose  [Tab/↓] Next  [Shift+Tab/↑] Prev  [Esc] Quit"
            }
            Focus::Field(_) => {
                "[0-9] Edit  [Backspace] Delete  [Tab/↓] Next  [Shift+Tab/↑] Prev  [Esc] Quit"
            }
            Focus::Submit => "[Enter] Submit  [Tab] First Field  [Q/Esc] Quit",
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}
