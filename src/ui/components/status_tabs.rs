//! Status filter tab row.
//!
//! A horizontal tab selector over the four status filters. Uses a `▶`
//! marker for the active filter and registers one hit area per tab.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::StatusFilter;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

const TAB_GAP: u16 = 3;

/// Render the status tabs into `area`, registering a hit area per tab.
pub fn render_status_tabs(
    frame: &mut Frame,
    area: Rect,
    active: StatusFilter,
    hit_registry: &mut HitAreaRegistry,
) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut cursor = area.x;

    for (idx, filter) in StatusFilter::ALL.iter().enumerate() {
        let selected = *filter == active;
        let label = filter.as_str();
        // "▶ " marker for the active tab, two-space slot otherwise, so tab
        // positions stay stable when the selection moves.
        let cell_text = if selected {
            format!("▶ {}", label)
        } else {
            format!("  {}", label)
        };
        let cell_width = cell_text.chars().count() as u16;

        let style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(cell_text, style));

        if cursor < area.x + area.width {
            let width = cell_width.min(area.x + area.width - cursor);
            hit_registry.register(
                Rect::new(cursor, area.y, width, 1),
                ClickAction::SetStatusFilter(*filter),
            );
        }
        cursor += cell_width;

        if idx < StatusFilter::ALL.len() - 1 {
            spans.push(Span::raw(" ".repeat(TAB_GAP as usize)));
            cursor += TAB_GAP;
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_registers_one_hit_area_per_tab() {
        let backend = TestBackend::new(80, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut registry = HitAreaRegistry::new();

        terminal
            .draw(|frame| {
                render_status_tabs(
                    frame,
                    Rect::new(0, 0, 80, 1),
                    StatusFilter::All,
                    &mut registry,
                );
            })
            .unwrap();

        assert_eq!(registry.len(), StatusFilter::ALL.len());
    }

    #[test]
    fn test_clicking_tab_positions_yields_each_filter() {
        let backend = TestBackend::new(80, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut registry = HitAreaRegistry::new();

        terminal
            .draw(|frame| {
                render_status_tabs(
                    frame,
                    Rect::new(0, 0, 80, 1),
                    StatusFilter::Pending,
                    &mut registry,
                );
            })
            .unwrap();

        // First cell starts at x=0: "  All" (marker slot + label).
        assert_eq!(
            registry.hit_test(2, 0),
            Some(ClickAction::SetStatusFilter(StatusFilter::All))
        );

        // Every filter must be reachable somewhere on the row.
        let mut found = Vec::new();
        for x in 0..80 {
            if let Some(ClickAction::SetStatusFilter(f)) = registry.hit_test(x, 0) {
                if !found.contains(&f) {
                    found.push(f);
                }
            }
        }
        assert_eq!(found.len(), StatusFilter::ALL.len());
    }
}
