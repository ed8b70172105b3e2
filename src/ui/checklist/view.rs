use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::task::Task;

use super::app::{AddEditor, AppState, ConfirmKind, GateField, GateForm, StatusKind};
use super::model::Row;

const COLOR_TEXT: Color = Color::Rgb(234, 236, 239);
const COLOR_MUTED: Color = Color::Rgb(160, 165, 172);
const COLOR_MUTED_DARK: Color = Color::Rgb(118, 124, 130);
const COLOR_BG_MUTED: Color = Color::Rgb(52, 56, 60);
const COLOR_INFO: Color = Color::Rgb(116, 198, 219);
const COLOR_WARNING: Color = Color::Rgb(244, 200, 98);
const COLOR_ERROR: Color = Color::Rgb(255, 107, 107);
const COLOR_SUCCESS: Color = Color::Rgb(126, 210, 146);
const COLOR_ACCENT: Color = Color::Rgb(122, 170, 255);
const COLOR_BORDER: Color = Color::Rgb(92, 126, 166);

pub fn render(frame: &mut Frame, app: &mut AppState) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    render_title(frame, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);

    if let Some(editor) = app.add_editor.as_ref() {
        render_add_modal(frame, area, editor);
    }
    if let Some(confirm) = app.confirm.as_ref() {
        render_confirm_modal(frame, area, confirm);
    }
    if let Some(form) = app.gate.as_ref() {
        render_gate_modal(frame, area, form);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Mental Clutter Reduction",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Clear your mind, one task at a time",
            Style::default().fg(COLOR_MUTED),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, app: &AppState, area: Rect) {
    let label = format!("{} ({}%)", app.progress_summary(), app.progress_percent());
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(COLOR_SUCCESS).bg(COLOR_BG_MUTED))
        .ratio(app.progress_ratio())
        .label(Span::styled(label, Style::default().fg(COLOR_TEXT)));
    frame.render_widget(widget, area);
}

fn render_list(frame: &mut Frame, app: &AppState, area: Rect) {
    let selected_index = app.selected_index();
    let tasks = app.store.tasks();

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_row = 0usize;
    for row in &app.rows {
        match row {
            Row::Header(group) => {
                let label = if group.is_custom_bucket() {
                    "Custom".to_string()
                } else {
                    group.to_string()
                };
                lines.push(Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            Row::Task(idx) => {
                let selected = selected_index == Some(*idx);
                if selected {
                    selected_row = lines.len();
                }
                lines.push(render_task_row(&tasks[*idx], selected));
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No tasks. Press a to add one, or r to restore the defaults.",
            Style::default().fg(COLOR_MUTED),
        )));
    }

    // Keep the selected row visible
    let height = area.height as usize;
    let offset = if height > 0 && selected_row >= height {
        selected_row + 1 - height
    } else {
        0
    };
    let visible: Vec<Line<'static>> = lines.into_iter().skip(offset).collect();

    let widget = Paragraph::new(visible);
    frame.render_widget(widget, area);
}

fn render_task_row(task: &Task, selected: bool) -> Line<'static> {
    let mark = if task.completed { "[x]" } else { "[ ]" };
    let mark_style = if task.completed {
        Style::default().fg(COLOR_SUCCESS)
    } else {
        Style::default().fg(COLOR_MUTED)
    };
    let mut text_style = if task.completed {
        Style::default()
            .fg(COLOR_MUTED_DARK)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(COLOR_TEXT)
    };
    if selected {
        text_style = text_style.add_modifier(Modifier::REVERSED);
    }

    Line::from(vec![
        Span::raw("  "),
        Span::styled(mark.to_string(), mark_style),
        Span::raw(" "),
        Span::styled(task.text.clone(), text_style),
    ])
}

fn render_footer(frame: &mut Frame, app: &AppState, area: Rect) {
    let hint = app.footer_hint();
    let hint_span = Span::styled(hint, Style::default().fg(COLOR_INFO));
    let line = if let Some((status, kind)) = app.status_line() {
        let status_style = match kind {
            StatusKind::Error => Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
            StatusKind::Info => Style::default().fg(COLOR_WARNING),
        };
        Line::from(vec![
            hint_span,
            Span::raw("  |  "),
            Span::styled(status, status_style),
        ])
    } else {
        Line::from(hint_span)
    };

    let widget = Paragraph::new(vec![line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(widget, area);
}

fn render_add_modal(frame: &mut Frame, area: Rect, editor: &AddEditor) {
    let content_width = area.width.saturating_sub(8).min(64);
    let modal = centered_rect(content_width, 9, area);
    frame.render_widget(Clear, modal);

    let text = if editor.text.is_empty() {
        "_".to_string()
    } else {
        editor.text.clone()
    };
    let group_label = if editor.group().is_custom_bucket() {
        "Custom".to_string()
    } else {
        editor.group().to_string()
    };

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Text:  ", Style::default().fg(COLOR_MUTED_DARK)),
        Span::styled(text, Style::default().fg(COLOR_TEXT)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Group: ", Style::default().fg(COLOR_MUTED_DARK)),
        Span::styled(group_label, Style::default().fg(COLOR_ACCENT)),
    ]));
    if let Some(error) = editor.error.as_ref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "enter add  tab group  esc cancel",
        Style::default().fg(COLOR_MUTED_DARK),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Add Task"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn render_confirm_modal(frame: &mut Frame, area: Rect, confirm: &ConfirmKind) {
    let content_width = area.width.saturating_sub(8).min(64);
    let modal = centered_rect(content_width, 9, area);
    frame.render_widget(Clear, modal);

    let mut lines: Vec<Line<'static>> = Vec::new();
    match confirm {
        ConfirmKind::Delete { id, text } => {
            lines.push(Line::from(Span::styled(
                "Delete task?",
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("ID: ", Style::default().fg(COLOR_MUTED_DARK)),
                Span::styled(id.clone(), Style::default().fg(COLOR_INFO)),
            ]));
            lines.push(Line::from(Span::styled(
                truncate_text(text, content_width.saturating_sub(4) as usize),
                Style::default().fg(COLOR_TEXT),
            )));
        }
        ConfirmKind::Reset => {
            lines.push(Line::from(Span::styled(
                "Reset to default tasks?",
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "This will remove all custom tasks and restore original tasks.",
                Style::default().fg(COLOR_WARNING),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "y/enter confirm  esc cancel",
        Style::default().fg(COLOR_MUTED_DARK),
    )));

    let title = match confirm {
        ConfirmKind::Delete { .. } => "Delete Task",
        ConfirmKind::Reset => "Reset Checklist",
    };
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn render_gate_modal(frame: &mut Frame, area: Rect, form: &GateForm) {
    let content_width = area.width.saturating_sub(8).min(56);
    let modal = centered_rect(content_width, 12, area);
    frame.render_widget(Clear, modal);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Sign in to access the Mental Clutter Reduction tool",
        Style::default().fg(COLOR_MUTED),
    )));
    lines.push(Line::from(""));
    lines.push(gate_field_line("Name:  ", &form.name, form.field == GateField::Name));
    lines.push(gate_field_line(
        "Email: ",
        &form.email,
        form.field == GateField::Email,
    ));
    lines.push(Line::from(""));

    if form.submitting {
        lines.push(Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(COLOR_INFO),
        )));
    } else if let Some(error) = form.error.as_ref() {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "tab switch field  enter sign in",
        Style::default().fg(COLOR_MUTED_DARK),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Welcome!"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn gate_field_line(label: &'static str, value: &str, active: bool) -> Line<'static> {
    let shown = if value.is_empty() && active {
        "_".to_string()
    } else {
        value.to_string()
    };
    let value_style = if active {
        Style::default()
            .fg(COLOR_TEXT)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(COLOR_TEXT)
    };
    Line::from(vec![
        Span::styled(label, Style::default().fg(COLOR_MUTED_DARK)),
        Span::styled(shown, value_style),
    ])
}

fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
