use chrono::{DateTime, Local};
use compound_core::{format_amount, format_compact, Field, ProjectionResult};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Focus, InputMode, StatusMessage};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    bar: Color,
    line: Color,
    error: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    bar: Color::Blue,
    line: Color::Rgb(255, 127, 14),
    error: Color::Red,
};

const MARKER_WIDTH: u16 = 3;
const LABEL_WIDTH: u16 = 28;

fn panel(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { THEME.primary } else { THEME.muted }))
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("COMPOUND INTEREST CALCULATOR")
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Field::ALL.len() as u16 + 2), // Form
            Constraint::Length(4),                           // Headline
            Constraint::Min(3),                              // History
        ])
        .split(content_chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content_chunks[1]);

    draw_form(f, app, left[0]);
    draw_headline(f, app, left[1]);
    draw_history(f, app, left[2]);
    draw_chart(f, app, right[0]);
    draw_ledger(f, app, right[1]);
    draw_status(f, app, main_chunks[2]);

    let help = match app.input_mode {
        InputMode::Normal => "j/k: Move | +/-: Step | e: Edit | c: Calculate | Tab: Form/Table | PgUp/PgDn: Year | q: Quit",
        InputMode::Editing => "Enter: Apply | Esc: Cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let editing = matches!(app.input_mode, InputMode::Editing);

    let lines: Vec<Line> = Field::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = i == app.selected_field && app.focus == Focus::Form;
            let marker = if selected { ">> " } else { "   " };
            let value = if selected && editing {
                app.input.clone()
            } else {
                app.field_text(*field)
            };
            let value_style = if selected {
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(THEME.text)
            };

            Line::from(vec![
                Span::styled(marker, Style::default().fg(THEME.primary)),
                Span::styled(
                    format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
                    Style::default().fg(THEME.muted),
                ),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(panel(" Parameters ", app.focus == Focus::Form));
    f.render_widget(form, area);

    if editing {
        let before_cursor: String = app.input.chars().take(app.cursor_position).collect();
        f.set_cursor_position((
            area.x + 1 + MARKER_WIDTH + LABEL_WIDTH + before_cursor.width() as u16,
            area.y + 1 + app.selected_field as u16,
        ));
    }
}

fn draw_headline(f: &mut Frame, app: &App, area: Rect) {
    let text = match &app.last {
        Some((_, result)) => vec![
            Line::from(Span::styled(
                format!("Final Amount: {}", format_amount(result.final_balance())),
                Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Invested ", Style::default().fg(THEME.muted)),
                Span::raw(format_amount(result.total_contributions())),
                Span::styled("  Interest ", Style::default().fg(THEME.muted)),
                Span::raw(format_amount(result.total_interest())),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "Press c to calculate",
            Style::default().fg(THEME.muted),
        ))],
    };

    let headline = Paragraph::new(text).block(panel(" Result ", false));
    f.render_widget(headline, area);
}

fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .history
        .iter()
        .map(|entry| {
            let local: DateTime<Local> = DateTime::from(entry.created_at);
            Line::from(vec![
                Span::styled(format!("{} ", local.format("%H:%M:%S")), Style::default().fg(THEME.muted)),
                Span::raw(entry.summary.as_str()),
            ])
        })
        .collect();

    let history = Paragraph::new(lines)
        .block(panel(" Calculation History ", false))
        .wrap(Wrap { trim: true });
    f.render_widget(history, area);
}

fn chart_points(result: &ProjectionResult) -> Vec<(f64, f64)> {
    result
        .year_summaries()
        .into_iter()
        .map(|(year, balance)| (year as f64, balance))
        .collect()
}

fn draw_chart(f: &mut Frame, app: &App, area: Rect) {
    let block = panel(" Investment Growth ", false);

    let Some((_, result)) = &app.last else {
        f.render_widget(
            Paragraph::new("No data available").alignment(Alignment::Center).block(block),
            area,
        );
        return;
    };

    let points = chart_points(result);
    let max = points.iter().map(|(_, b)| *b).fold(0.0_f64, f64::max);
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };
    let x_max = points.len() as f64 + 1.0;

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(THEME.bar))
            .data(&points),
        Dataset::default()
            .name("Amount")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(THEME.line))
            .data(&points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(THEME.line).add_modifier(Modifier::BOLD))
            .data(&points),
    ];

    let x_labels = vec!["0".to_string(), format!("{}", points.len())];
    let y_labels = vec!["0".to_string(), format_compact(y_max / 2.0), format_compact(y_max)];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Amount")
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn amount_cell(value: f64) -> Cell<'static> {
    Cell::from(Line::from(format_amount(value)).alignment(Alignment::Right))
}

fn draw_ledger(f: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Ledger;

    let Some((_, result)) = &app.last else {
        f.render_widget(panel(" Monthly Ledger ", focused), area);
        return;
    };

    let rows: Vec<Row> = result
        .ledger
        .iter()
        .map(|record| {
            let style = if record.is_year_end() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(Line::from(record.month.to_string()).alignment(Alignment::Right)),
                amount_cell(record.interest_this_month),
                amount_cell(record.cumulative_contributions),
                amount_cell(record.cumulative_interest),
                amount_cell(record.total_balance),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),  // Month
            Constraint::Min(10),    // Interest
            Constraint::Min(14),    // Total Invested
            Constraint::Min(14),    // Total Interest
            Constraint::Min(14),    // Total Balance
        ],
    )
    .header(
        Row::new(vec!["Month", "Interest", "Total Invested", "Total Interest", "Total Balance"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(panel(" Monthly Ledger ", focused))
    .row_highlight_style(Style::default().bg(THEME.muted).add_modifier(Modifier::BOLD))
    .highlight_symbol(if focused { ">> " } else { "   " });

    f.render_stateful_widget(table, area, &mut app.ledger_state);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(StatusMessage::Info(msg)) => Line::from(Span::styled(msg.as_str(), Style::default().fg(THEME.primary))),
        Some(StatusMessage::Error(msg)) => Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(THEME.error).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
