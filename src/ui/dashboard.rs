//! Dashboard screen: the filterable candidate table.
//!
//! Rendering registers the frame's interactive geometry as it goes: hit
//! areas for everything clickable, and tagged regions for the month
//! dropdown surface and its toggle button so the outside observer can
//! resolve them at event time.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, Focus, MONTH_DROPDOWN, MONTH_TOGGLE};
use crate::models::{ApplicationStatus, MonthRef};
use crate::ui::components::{render_search_field, render_status_tabs};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DROPDOWN_BG, COLOR_SELECTION_BG,
};

/// Row data snapshot used while the hit registry is borrowed mutably.
struct TableRow {
    application_id: i64,
    candidate: String,
    role: String,
    rating: f32,
    date: String,
    attachments: i32,
    status: ApplicationStatus,
    stage: String,
}

/// Render the dashboard screen.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let [header_area, search_area, tabs_area, month_area, table_area, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

    render_header(frame, header_area, app);
    render_search_field(
        frame,
        search_area,
        &app.search,
        app.focus == Focus::Search,
        &mut app.hit_registry,
    );
    render_status_tabs(frame, tabs_area, app.status_filter, &mut app.hit_registry);
    render_month_toggle(frame, month_area, app);
    render_table(frame, table_area, app, &ctx);
    render_footer(frame, footer_area, app);

    // Overlays last so their hit areas sit on top of the table's.
    if app.month_dropdown_open() {
        render_month_dropdown(frame, month_area, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " HIRETRACK ",
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    if app.loading {
        spans.push(Span::styled("loading…", Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Label on the dropdown toggle button.
fn month_label(filter: Option<MonthRef>) -> String {
    match filter {
        Some(month) => format!("Month: {} ▾", month.label()),
        None => "Month: All ▾".to_string(),
    }
}

fn render_month_toggle(frame: &mut Frame, area: Rect, app: &mut App) {
    let label = month_label(app.month_filter);
    let width = (label.chars().count() as u16 + 2).min(area.width);
    let button = Rect::new(area.x + 1, area.y, width, 1);

    // The toggle is both clickable and the dropdown's exclusion region.
    app.hit_registry
        .register(button, ClickAction::ToggleMonthDropdown);
    app.regions.register(MONTH_TOGGLE, button);

    let style = if app.month_dropdown_open() {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style))),
        button,
    );
}

fn render_month_dropdown(frame: &mut Frame, month_area: Rect, app: &mut App) {
    let screen = frame.area();
    let entry_count = app.months.len() as u16 + 1; // plus "All months"
    let height = (entry_count + 2).min(screen.height.saturating_sub(month_area.y + 1));
    if height < 3 {
        return;
    }
    let width = 24u16.min(screen.width.saturating_sub(month_area.x + 1));
    let overlay = Rect::new(month_area.x + 1, month_area.y + 1, width, height);

    // The overlay is the outside observer's surface.
    app.regions.register(MONTH_DROPDOWN, overlay);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DROPDOWN_BG));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = Vec::new();
    let all_selected = app.month_filter.is_none();
    lines.push(entry_line("All months", all_selected));
    if inner.height >= 1 {
        app.hit_registry.register(
            Rect::new(inner.x, inner.y, inner.width, 1),
            ClickAction::ClearMonthFilter,
        );
    }

    for (idx, month) in app.months.iter().enumerate() {
        let y = inner.y + 1 + idx as u16;
        if y >= inner.y + inner.height {
            break;
        }
        lines.push(entry_line(&month.label(), app.month_filter == Some(*month)));
        app.hit_registry.register(
            Rect::new(inner.x, y, inner.width, 1),
            ClickAction::SelectMonth(*month),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn entry_line(label: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let marker = if selected { "▶ " } else { "  " };
    Line::from(vec![
        Span::styled(marker.to_string(), style),
        Span::styled(label.to_string(), style),
    ])
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let rows: Vec<TableRow> = app
        .visible_candidates()
        .into_iter()
        .map(|c| TableRow {
            application_id: c.application_id,
            candidate: c.candidate_name.clone(),
            role: c.role_name.clone(),
            rating: c.rating,
            date: c.application_date.format("%Y-%m-%d").to_string(),
            attachments: c.attachments,
            status: c.status,
            stage: c
                .stage
                .as_ref()
                .map(|s| s.stage_name.clone())
                .unwrap_or_else(|| "—".to_string()),
        })
        .collect();
    let selected = app.selected_row;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);

    // Rows start one line below the inner top (the header row).
    for (idx, row) in rows.iter().enumerate() {
        let y = inner.y + 1 + idx as u16;
        if y >= inner.y + inner.height {
            break;
        }
        app.hit_registry.register(
            Rect::new(inner.x, y, inner.width, 1),
            ClickAction::SelectCandidate(row.application_id),
        );
    }

    let header_style = Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD);
    let (header, widths) = if ctx.is_compact() {
        (
            Row::new(vec!["Candidate", "Role", "Stage", "Status"]).style(header_style),
            vec![
                Constraint::Percentage(35),
                Constraint::Percentage(30),
                Constraint::Percentage(20),
                Constraint::Percentage(15),
            ],
        )
    } else {
        (
            Row::new(vec![
                "Candidate", "Role", "Rating", "Applied", "Docs", "Stage", "Status",
            ])
            .style(header_style),
            vec![
                Constraint::Percentage(24),
                Constraint::Percentage(22),
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Length(4),
                Constraint::Percentage(18),
                Constraint::Length(8),
            ],
        )
    };

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let base = if idx == selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .bg(COLOR_SELECTION_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let status_cell =
                Cell::from(row.status.as_str()).style(base.fg(status_color(row.status)));
            let cells = if ctx.is_compact() {
                vec![
                    Cell::from(row.candidate.clone()),
                    Cell::from(row.role.clone()),
                    Cell::from(row.stage.clone()),
                    status_cell,
                ]
            } else {
                vec![
                    Cell::from(row.candidate.clone()),
                    Cell::from(row.role.clone()),
                    Cell::from(format!("{:.1}", row.rating)),
                    Cell::from(row.date.clone()),
                    Cell::from(row.attachments.to_string()),
                    Cell::from(row.stage.clone()),
                    status_cell,
                ]
            };
            Row::new(cells).style(base)
        })
        .collect();

    let table = Table::new(table_rows, widths).header(header).block(block);
    frame.render_widget(table, area);

    if rows.is_empty() && !app.loading {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No applications match the current filters",
            Style::default().fg(COLOR_DIM),
        )));
        let msg_area = Rect::new(
            inner.x + 2,
            inner.y + 2.min(inner.height.saturating_sub(1)),
            inner.width.saturating_sub(2),
            1,
        );
        frame.render_widget(empty, msg_area);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status_line {
        Some(status) => status.clone(),
        None => "↑/↓ select · Enter details · m month · Tab status · / search · q quit"
            .to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}
