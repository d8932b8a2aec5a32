//! Rendering for GraphView
//!
//! Layout space grows downward while the canvas grows upward, so every
//! y coordinate is negated on the way in. Only a window around the
//! selected commit is drawn; its size follows the terminal size at a fixed
//! number of cells per lane and per depth.
//!
//! On tall terminals a conversation pane below the graph shows the
//! transcript of the selected commit's session.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph, Wrap,
        canvas::{Canvas, Context, Line as CanvasLine},
    },
};

use crate::model::{
    ConnectionKind, Message, MessageRole, NodeKind, NodeRef, PathCommand, PathSpec, Point,
    short_sha,
};
use crate::ui::{components, symbols, theme};

use super::GraphView;

/// Terminal columns per lane
const COLS_PER_LANE: f64 = 10.0;
/// Terminal rows per depth level
const ROWS_PER_DEPTH: f64 = 4.0;
/// Line segments per cubic curve
const CURVE_STEPS: usize = 16;
/// Detail panel width
const DETAIL_WIDTH: u16 = 42;
/// Minimum total width for showing the detail panel
const DETAIL_MIN_TOTAL_WIDTH: u16 = 80;
/// Share of the height given to the conversation pane
const TRANSCRIPT_HEIGHT_PERCENT: u16 = 40;
/// Minimum total height for showing the conversation pane
const TRANSCRIPT_MIN_TOTAL_HEIGHT: u16 = 32;
/// Indent of message bodies under their header
const MESSAGE_INDENT: &str = "  ";

impl GraphView {
    /// Render the view
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (area, transcript_area) =
            if self.show_transcript && area.height >= TRANSCRIPT_MIN_TOTAL_HEIGHT {
                let chunks = Layout::vertical([
                    Constraint::Min(1),
                    Constraint::Percentage(TRANSCRIPT_HEIGHT_PERCENT),
                ])
                .split(area);
                (chunks[0], Some(chunks[1]))
            } else {
                (area, None)
            };

        let (graph_area, detail_area) =
            if self.show_detail && area.width >= DETAIL_MIN_TOTAL_WIDTH {
                let chunks =
                    Layout::horizontal([Constraint::Min(1), Constraint::Length(DETAIL_WIDTH)])
                        .split(area);
                (chunks[0], Some(chunks[1]))
            } else {
                (area, None)
            };

        self.render_graph(frame, graph_area);

        if let Some(detail_area) = detail_area {
            self.render_detail(frame, detail_area);
        }

        if let Some(transcript_area) = transcript_area {
            self.render_transcript(frame, transcript_area);
        }
    }

    fn build_title(&self) -> Line<'static> {
        let layout = self.layout();
        Line::from(format!(
            " ctxgraph [{} commits, {} contexts] ",
            layout.commit_nodes.len(),
            layout.context_nodes.len()
        ))
        .bold()
        .centered()
    }

    fn render_graph(&self, frame: &mut Frame, area: Rect) {
        let block = components::bordered_block(self.build_title());

        if self.is_empty() {
            frame.render_widget(components::no_commits_state().block(block), area);
            return;
        }

        let inner = block.inner(area);
        if inner.width == 0 || inner.height == 0 {
            frame.render_widget(block, area);
            return;
        }

        let config = self.config();
        let units_per_col = config.lane_spacing / COLS_PER_LANE;
        let units_per_row = config.depth_spacing / ROWS_PER_DEPTH;
        let window_w = f64::from(inner.width) * units_per_col;
        let window_h = f64::from(inner.height) * units_per_row;

        let bounds = self.layout().bounds;
        let focus = self
            .selected_node()
            .map(|n| n.position())
            .unwrap_or(Point::new(bounds.min_x, bounds.min_y));
        let left = scroll_start(focus.x, window_w, bounds.min_x, bounds.max_x);
        let top = scroll_start(focus.y, window_h, bounds.min_y, bounds.max_y);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([left, left + window_w])
            .y_bounds([-(top + window_h), -top])
            .paint(|ctx| {
                self.paint_connections(ctx);
                ctx.layer();
                self.paint_nodes(ctx, units_per_col);
            });

        frame.render_widget(canvas, area);
    }

    fn paint_connections(&self, ctx: &mut Context) {
        for connection in &self.layout().connections {
            let color = connection_color(connection.kind);
            for (from, to) in flatten_path(&connection.path, CURVE_STEPS) {
                ctx.draw(&CanvasLine::new(from.x, -from.y, to.x, -to.y, color));
            }
        }
    }

    fn paint_nodes(&self, ctx: &mut Context, units_per_col: f64) {
        let selected = self.selected_node().map(|n| n.sha.as_str());
        let label_offset = units_per_col * 2.0;

        for node in &self.layout().context_nodes {
            let messages = self
                .commit(&node.sha)
                .and_then(|c| c.context.as_ref())
                .map_or(0, |context| context.total_messages);
            ctx.print(
                node.x,
                -node.y,
                Line::styled(
                    symbols::markers::CONTEXT.to_string(),
                    Style::default().fg(theme::graph_view::CONTEXT),
                ),
            );
            ctx.print(
                node.x + label_offset,
                -node.y,
                Line::styled(
                    format!("{messages} msg"),
                    Style::default().fg(theme::graph_view::MUTED),
                ),
            );
        }

        for node in &self.layout().commit_nodes {
            let commit = self.commit(&node.sha);
            let is_selected = selected == Some(node.sha.as_str());
            let is_root = commit.is_some_and(|c| c.parent_sha.is_none());

            let (marker, color) = if is_root {
                (symbols::markers::ROOT, theme::graph_view::ROOT)
            } else {
                (symbols::markers::COMMIT, theme::graph_view::COMMIT)
            };
            let marker_style = if is_selected {
                Style::default()
                    .fg(theme::graph_view::SELECTED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            ctx.print(node.x, -node.y, Line::styled(marker.to_string(), marker_style));

            // Short SHA only: a longer label would run into the next lane
            let mut label = Line::styled(
                short_sha(&node.sha).to_string(),
                Style::default().fg(theme::graph_view::SHA_LABEL),
            );
            if is_selected {
                label = label.add_modifier(Modifier::REVERSED);
            }
            ctx.print(node.x + label_offset, -node.y, label);
        }
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let block = components::side_panel_block(Line::from(" Detail ").bold());

        let Some(commit) = self.selected_commit() else {
            let empty = components::empty_state("Nothing selected", None).block(block);
            frame.render_widget(empty, area);
            return;
        };
        let node = self.selected_node();

        let label =
            |text: &'static str| Span::styled(format!("{text:<8}"), Style::default().dark_gray());

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", symbols::markers::COMMIT),
                    Style::default().fg(theme::graph_view::COMMIT),
                ),
                Span::styled(
                    commit.short_sha().to_string(),
                    Style::default().fg(theme::graph_view::SHA_LABEL).bold(),
                ),
            ]),
            Line::from(commit.display_message().to_string()),
            Line::from(""),
            Line::from(vec![
                label("Branch"),
                match commit.primary_branch() {
                    Some(branch) => Span::styled(
                        branch.to_string(),
                        Style::default().fg(theme::graph_view::BRANCH),
                    ),
                    None => Span::styled(
                        symbols::empty::NO_BRANCH,
                        Style::default().fg(theme::graph_view::MUTED),
                    ),
                },
            ]),
            Line::from(vec![label("Author"), Span::raw(commit.author_email.clone())]),
            Line::from(vec![label("Date"), Span::raw(commit.timestamp.clone())]),
            Line::from(vec![
                label("Parent"),
                Span::raw(commit.parent_sha.as_deref().map_or("(root)", short_sha).to_string()),
            ]),
        ];
        if let Some(node) = node {
            lines.push(Line::from(vec![
                label("Slot"),
                Span::raw(format!("lane {}, depth {}", node.lane, node.depth)),
            ]));
        }

        lines.push(Line::from(""));
        match &commit.context {
            Some(context) => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} ", symbols::markers::CONTEXT),
                        Style::default().fg(theme::graph_view::CONTEXT),
                    ),
                    Span::styled(context.context_id.clone(), Style::default().bold()),
                ]));
                lines.push(Line::from(vec![
                    label("Msgs"),
                    Span::raw(context.total_messages.to_string()),
                ]));
                lines.push(Line::from(vec![
                    label("Session"),
                    Span::raw(if context.is_new_session { "new" } else { "continued" }),
                ]));
                lines.extend(self.session_links(&commit.sha));
            }
            None => lines.push(Line::from(symbols::empty::NO_SESSION).dark_gray()),
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_transcript(&self, frame: &mut Frame, area: Rect) {
        let context = self.selected_commit().and_then(|c| c.context.as_ref());
        let Some(context) = context else {
            let block = components::bordered_block(Line::from(" Conversation ").bold());
            frame.render_widget(components::no_session_state().block(block), area);
            return;
        };

        let messages = self
            .conversation(&context.context_id)
            .map_or(&[][..], |c| c.messages.as_slice());
        let block = components::bordered_block(
            Line::from(format!(
                " Conversation {} [{} messages] ",
                context.context_id,
                messages.len()
            ))
            .bold(),
        );
        if messages.is_empty() {
            frame.render_widget(components::no_messages_state().block(block), area);
            return;
        }

        let inner = block.inner(area);
        let lines = transcript_lines(messages, usize::from(inner.width));
        let max_scroll = lines.len().saturating_sub(usize::from(inner.height));
        let scroll = self.transcript_scroll.get().min(max_scroll);
        self.transcript_scroll.set(scroll);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
        frame.render_widget(paragraph, area);
    }

    /// Describe the session edges touching a commit's context node
    fn session_links(&self, sha: &str) -> Vec<Line<'static>> {
        let context = NodeRef::context(sha);
        self.layout()
            .connections
            .iter()
            .filter(|c| c.kind != ConnectionKind::Lineage)
            .filter_map(|c| {
                let text = if c.to == context {
                    let verb = match c.kind {
                        ConnectionKind::Continuation => "continues from",
                        _ => "branches from",
                    };
                    format!("{verb} {}", describe(&c.from))
                } else if c.from == context {
                    let verb = match c.kind {
                        ConnectionKind::MergeBack => "merges into",
                        _ => "continues in",
                    };
                    format!("{verb} {}", describe(&c.to))
                } else {
                    return None;
                };
                Some(Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(connection_color(c.kind)),
                )))
            })
            .collect()
    }
}

fn describe(node: &NodeRef) -> String {
    match node.kind {
        NodeKind::Commit => short_sha(&node.sha).to_string(),
        NodeKind::Context => format!("{} {}", symbols::markers::CONTEXT, short_sha(&node.sha)),
    }
}

fn role_color(role: MessageRole) -> Color {
    match role {
        MessageRole::User => theme::transcript::USER,
        MessageRole::Assistant => theme::transcript::ASSISTANT,
        MessageRole::System => theme::transcript::SYSTEM,
    }
}

/// Transcript rows before wrapping: a header, the body lines and a spacer
/// per message
pub(super) fn transcript_row_count(messages: &[Message]) -> usize {
    messages
        .iter()
        .map(|m| m.content.split('\n').count() + 2)
        .sum()
}

/// Transcript rows wrapped to `width` columns
fn transcript_lines(messages: &[Message], width: usize) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(MESSAGE_INDENT.len());
    let mut lines = Vec::new();

    for message in messages {
        let color = role_color(message.role);
        lines.push(Line::from(vec![
            Span::styled(
                message.role.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.time()),
                Style::default().fg(theme::transcript::TIME),
            ),
        ]));

        let body_style = if message.role == MessageRole::System {
            Style::default().fg(theme::transcript::SYSTEM)
        } else {
            Style::default()
        };
        lines.extend(
            wrap_text(&message.content, body_width)
                .into_iter()
                .map(|row| Line::styled(format!("{MESSAGE_INDENT}{row}"), body_style)),
        );
        lines.push(Line::from(""));
    }

    lines
}

/// Greedy word wrap; words longer than `width` are split
///
/// Widths are counted in chars. Every input line yields at least one row.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for source in text.split('\n') {
        let mut row = String::new();
        let mut row_len = 0;
        for word in source.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            if row_len > 0 && row_len + 1 + word.len() <= width {
                row.push(' ');
                row.extend(&word);
                row_len += 1 + word.len();
                continue;
            }
            if row_len > 0 {
                rows.push(std::mem::take(&mut row));
            }
            while word.len() > width {
                rows.push(word.drain(..width).collect());
            }
            row_len = word.len();
            row = word.into_iter().collect();
        }
        rows.push(row);
    }

    rows
}

fn connection_color(kind: ConnectionKind) -> Color {
    match kind {
        ConnectionKind::Lineage => theme::graph_view::LINEAGE,
        ConnectionKind::BranchOut => theme::graph_view::BRANCH_OUT,
        ConnectionKind::Continuation => theme::graph_view::CONTINUATION,
        ConnectionKind::MergeBack => theme::graph_view::MERGE_BACK,
    }
}

/// Start of a window of size `window` over `[min, max]` centered on `focus`
///
/// The window never leaves the range unless the range is smaller than it.
fn scroll_start(focus: f64, window: f64, min: f64, max: f64) -> f64 {
    if window >= max - min {
        return min;
    }
    (focus - window / 2.0).clamp(min, max - window)
}

/// Flatten a path into straight segments
///
/// Each cubic is sampled at `steps` evenly spaced parameter values.
pub fn flatten_path(path: &PathSpec, steps: usize) -> Vec<(Point, Point)> {
    let steps = steps.max(1);
    let mut segments = Vec::new();
    let mut current: Option<Point> = None;

    for command in &path.commands {
        match *command {
            PathCommand::MoveTo(p) => current = Some(p),
            PathCommand::LineTo(p) => {
                if let Some(from) = current {
                    segments.push((from, p));
                }
                current = Some(p);
            }
            PathCommand::CubicTo { ctrl1, ctrl2, end } => {
                if let Some(start) = current {
                    let mut prev = start;
                    for i in 1..=steps {
                        let t = i as f64 / steps as f64;
                        let next = cubic_point(start, ctrl1, ctrl2, end, t);
                        segments.push((prev, next));
                        prev = next;
                    }
                }
                current = Some(end);
            }
        }
    }

    segments
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}
