//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::ui::theme;
use crate::ui::views::GraphView;

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the status bar for graph view
///
/// The prefix shows the selected commit and its position in the history.
pub fn render_graph_status_bar(frame: &mut Frame, graph_view: &GraphView) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let selected = graph_view.selected_commit();
    let prefix = match selected {
        Some(commit) => vec![
            Span::styled(
                format!(" {} ", commit.short_sha()),
                Style::default().fg(Color::Black).bg(theme::graph_view::SHA_LABEL),
            ),
            Span::styled(
                format!(" {}/{} ", graph_view.cursor() + 1, graph_view.len()),
                Style::default().fg(theme::graph_view::MUTED),
            ),
        ],
        None => Vec::new(),
    };

    let has_session = selected.is_some_and(|c| c.context.is_some());
    let status = build_status_bar_with_prefix(prefix, &keys::graph_view_hints(has_session));
    frame.render_widget(Paragraph::new(status), status_area);
}
