//! Search input field.
//!
//! Single-line search box with a clear affordance. The query itself lives
//! in `SearchState` on the App; this component only renders it and
//! registers the hit areas for focusing and clearing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::search::SearchState;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

const PROMPT: &str = "Search: ";
const CLEAR_LABEL: &str = "[x]";

/// Render the search field into `area`.
///
/// When focused, a block cursor is drawn after the query text.
pub fn render_search_field(
    frame: &mut Frame,
    area: Rect,
    search: &SearchState,
    focused: bool,
    hit_registry: &mut HitAreaRegistry,
) {
    let prompt_style = if focused {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let mut spans = vec![
        Span::styled(PROMPT, prompt_style),
        Span::styled(search.query().to_string(), Style::default().fg(COLOR_ACCENT)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(COLOR_ACCENT)));
    }
    if !search.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(CLEAR_LABEL, Style::default().fg(COLOR_DIM)));
    }

    // The whole field focuses; the clear label (when shown) sits on top.
    hit_registry.register(area, ClickAction::FocusSearch);
    if !search.is_empty() {
        let clear_x = area.x
            + PROMPT.width() as u16
            + search.query().width() as u16
            + if focused { 2 } else { 1 };
        if clear_x + CLEAR_LABEL.len() as u16 <= area.x + area.width {
            hit_registry.register(
                Rect::new(clear_x, area.y, CLEAR_LABEL.len() as u16, 1),
                ClickAction::ClearSearch,
            );
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
