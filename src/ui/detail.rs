//! Detail screen: one application's full record.
//!
//! Shows the candidate and role, the role's stage ladder with the current
//! stage marked, the experience history, and the advance/reject actions.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{ApplicationDetails, ApplicationStatus, StageAction};
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{
    status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_STAGE_CURRENT, COLOR_STAGE_DONE,
};

/// Render the detail screen.
pub fn render_detail(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let [header_area, body_area, actions_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let Some(details) = app.detail.clone() else {
        let msg = if app.loading {
            "Loading application…"
        } else {
            "No application loaded"
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", msg),
                Style::default().fg(COLOR_DIM),
            ))),
            header_area,
        );
        render_footer(frame, footer_area, app);
        return;
    };

    render_header(frame, header_area, &details);

    let [stages_area, experiences_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(body_area);
    render_stage_ladder(frame, stages_area, &details);
    render_experiences(frame, experiences_area, &details);

    render_actions(frame, actions_area, app, &details);
    render_footer(frame, footer_area, app);
}

fn render_header(frame: &mut Frame, area: Rect, details: &ApplicationDetails) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(
            details.candidate_name.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ·  {}", details.role_name),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(
            format!("  ·  applied {}", details.application_date.format("%Y-%m-%d")),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw("  ·  "),
        Span::styled(
            details.status.as_str(),
            Style::default()
                .fg(status_color(details.status))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_stage_ladder(frame: &mut Frame, area: Rect, details: &ApplicationDetails) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Stages ", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for stage in &details.role_stages {
        let (marker, style) = if stage.stage_sequence < details.current_stage_sequence {
            ("✓", Style::default().fg(COLOR_STAGE_DONE))
        } else if stage.stage_sequence == details.current_stage_sequence {
            (
                "▶",
                Style::default()
                    .fg(COLOR_STAGE_CURRENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("·", Style::default().fg(COLOR_DIM))
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, stage.stage_name),
            style,
        )));
        if lines.len() as u16 >= inner.height {
            break;
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_experiences(frame: &mut Frame, area: Rect, details: &ApplicationDetails) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Experience ", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for exp in &details.experiences {
        let period = match exp.end_date {
            Some(end) => format!(
                "{} – {}",
                exp.start_date.format("%Y-%m"),
                end.format("%Y-%m")
            ),
            None => format!("{} – present", exp.start_date.format("%Y-%m")),
        };
        lines.push(Line::from(vec![
            Span::styled(
                exp.position.clone(),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(
                format!("  @ {}  ({})", exp.company_name, period),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        if !exp.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", exp.description),
                Style::default().fg(COLOR_DIM),
            )));
        }
        lines.push(Line::default());
        if lines.len() as u16 >= inner.height {
            break;
        }
    }
    if details.experiences.is_empty() {
        lines.push(Line::from(Span::styled(
            "No recorded experience",
            Style::default().fg(COLOR_DIM),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_actions(frame: &mut Frame, area: Rect, app: &mut App, details: &ApplicationDetails) {
    // Closed applications offer no further stage actions.
    let actionable = details.status == ApplicationStatus::Pending;

    let mut x = area.x + 1;
    let mut spans = Vec::new();

    if actionable {
        for (label, action) in [
            ("[ Advance ▸ ]", StageAction::Advance),
            ("[ Reject ✕ ]", StageAction::Reject),
        ] {
            let width = label.chars().count() as u16;
            app.hit_registry.register(
                Rect::new(x, area.y, width, 1),
                ClickAction::UpdateStage {
                    application_id: details.application_id,
                    action,
                },
            );
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("  "));
            x += width + 2;
        }
    }

    let back = "[ ← Back ]";
    app.hit_registry.register(
        Rect::new(x, area.y, back.chars().count() as u16, 1),
        ClickAction::BackToDashboard,
    );
    spans.push(Span::styled(
        back.to_string(),
        Style::default().fg(COLOR_DIM),
    ));

    let padded = Rect::new(area.x + 1, area.y, area.width.saturating_sub(1), 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), padded);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status_line {
        Some(status) => status.clone(),
        None => "a advance · r reject · Esc back · q quit".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}
