//! Render tests for Graph View
//!
//! Uses ratatui TestBackend and checks the rendered buffer text.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use ctxgraph::app::App;
use ctxgraph::compute_layout;
use ctxgraph::context::ConversationMap;
use ctxgraph::demo::{sample_commits, sample_conversations};
use ctxgraph::layout::LayoutEngine;
use ctxgraph::model::{Commit, Conversation};
use ctxgraph::source::CommitSource;
use ctxgraph::ui::views::GraphView;

/// Helper: flatten the buffer into one string per row
fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

fn render_view(view: &GraphView, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    buffer_lines(terminal.backend().buffer())
}

fn demo_view() -> GraphView {
    let commits = sample_commits();
    let layout = compute_layout(&commits);
    let mut view = GraphView::default();
    view.set_graph(commits, layout);
    view.set_conversations(sample_conversations());
    view
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn test_graph_view_empty() {
    let view = GraphView::default();
    let lines = render_view(&view, 80, 12);

    assert!(contains(&lines, "ctxgraph [0 commits, 0 contexts]"));
    assert!(contains(&lines, "No commits to display."));
}

#[test]
fn test_graph_view_title_counts() {
    let lines = render_view(&demo_view(), 100, 30);
    assert!(contains(&lines, "ctxgraph [8 commits, 6 contexts]"));
}

#[test]
fn test_graph_view_labels_selected_commit() {
    let lines = render_view(&demo_view(), 100, 30);

    // Root commit is selected and visible with its short SHA
    assert!(contains(&lines, "3f9a1c0"));
    // Its context shows the message count
    assert!(contains(&lines, "10 msg"));
}

#[test]
fn test_graph_view_scrolls_to_selection() {
    let mut view = demo_view();
    view.move_to_bottom();
    let lines = render_view(&view, 100, 16);

    assert!(contains(&lines, "a7c2e9f"), "side branch should be visible");
    assert!(contains(&lines, "f2a6d8b"), "main tip shares the row");
    assert!(contains(&lines, "feature/push"), "detail panel shows the branch");
    assert!(!contains(&lines, "3f9a1c0"), "root should be scrolled away");
}

#[test]
fn test_detail_panel_shows_session() {
    let lines = render_view(&demo_view(), 120, 30);

    assert!(contains(&lines, "Detail"));
    assert!(contains(&lines, "Add user authentication system"));
    assert!(contains(&lines, "ctx-550e8400"));
    assert!(contains(&lines, "new"));
    assert!(contains(&lines, "(root)"));
}

#[test]
fn test_detail_panel_without_session() {
    let mut view = demo_view();
    view.select("f2a6d8b0c3e5197a4d6f8b1c3e5a7d9f0b2c4e68");
    let lines = render_view(&view, 120, 30);

    assert!(contains(&lines, "(no session)"));
    assert!(contains(&lines, "main"));
}

#[test]
fn test_detail_panel_lists_merge_back() {
    let mut view = demo_view();
    // Last commit of the first session merges back into the next commit
    view.select("c41d7a9e2b6f8035d1e4c7a9b2f6e0d3a8c5b714");
    let lines = render_view(&view, 120, 30);

    assert!(contains(&lines, "merges into 5e0b3f8"));
    assert!(contains(&lines, "continues from"));
}

#[test]
fn test_detail_panel_hidden_when_narrow() {
    let lines = render_view(&demo_view(), 60, 20);
    assert!(!contains(&lines, "Detail"));
}

#[test]
fn test_detail_panel_toggle() {
    let mut view = demo_view();
    view.toggle_detail();
    let lines = render_view(&view, 120, 30);
    assert!(!contains(&lines, "Detail"));
}

#[test]
fn test_app_renders_status_bar_and_error() {
    let mut app = App::new(CommitSource::Demo, LayoutEngine::default());
    app.error_message = Some("Not a git repository".to_string());

    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let lines = buffer_lines(terminal.backend().buffer());

    let status = lines.last().unwrap();
    assert!(status.contains("3f9a1c0"), "status bar: {status:?}");
    assert!(status.contains("1/8"));
    assert!(status.contains("[n/N] Session"));
    assert!(status.contains("[q] Quit"));
    assert!(contains(&lines, "Error:"));
    assert!(contains(&lines, "Not a git repository"));
}

#[test]
fn test_untitled_commit_detail() {
    let commits = vec![Commit::new("abcdef1234567", None)];
    let layout = compute_layout(&commits);
    let mut view = GraphView::default();
    view.set_graph(commits, layout);

    let lines = render_view(&view, 120, 20);
    assert!(contains(&lines, "(no message)"));
    assert!(contains(&lines, "(detached)"));
}

#[test]
fn test_conversation_pane_shows_transcript() {
    let lines = render_view(&demo_view(), 120, 44);

    assert!(contains(&lines, "Conversation ctx-550e8400 [10 messages]"));
    assert!(contains(&lines, "You  10:00:00"));
    assert!(contains(&lines, "I need to implement a user authentication system"));
    assert!(contains(&lines, "Claude  10:00:05"));
}

#[test]
fn test_conversation_pane_scrolls() {
    let mut view = demo_view();
    for _ in 0..3 {
        view.scroll_transcript_down();
    }
    let lines = render_view(&view, 120, 44);

    assert!(!contains(&lines, "I need to implement"), "first message scrolled away");
    assert!(contains(&lines, "Claude  10:00:05"));
}

#[test]
fn test_conversation_pane_clamps_scroll_to_content() {
    let mut view = demo_view();
    for _ in 0..500 {
        view.scroll_transcript_down();
    }
    let lines = render_view(&view, 120, 44);

    // The last message stays on screen
    assert!(contains(&lines, "4. Confirmation and redirect to login"));
    let clamped = view.transcript_scroll();
    view.scroll_transcript_up();
    assert_eq!(view.transcript_scroll(), clamped - 1);
}

#[test]
fn test_conversation_pane_without_messages() {
    let mut view = demo_view();
    let mut conversations = ConversationMap::new();
    conversations.insert(
        "ctx-550e8400".to_string(),
        Conversation::new("ctx-550e8400", Vec::new()),
    );
    view.set_conversations(conversations);
    let lines = render_view(&view, 120, 44);

    assert!(contains(&lines, "Conversation ctx-550e8400 [0 messages]"));
    assert!(contains(&lines, "No messages in this conversation"));
}

#[test]
fn test_conversation_pane_missing_transcript() {
    let mut view = demo_view();
    view.set_conversations(ConversationMap::new());
    let lines = render_view(&view, 120, 44);

    assert!(contains(&lines, "No messages in this conversation"));
}

#[test]
fn test_conversation_pane_without_session() {
    let mut view = demo_view();
    view.select("f2a6d8b0c3e5197a4d6f8b1c3e5a7d9f0b2c4e68");
    let lines = render_view(&view, 120, 44);

    assert!(contains(&lines, "No Claude session for this commit."));
}

#[test]
fn test_conversation_pane_hidden_when_short_or_toggled() {
    let lines = render_view(&demo_view(), 120, 30);
    assert!(!contains(&lines, "Conversation"));

    let mut view = demo_view();
    view.toggle_transcript();
    let lines = render_view(&view, 120, 44);
    assert!(!contains(&lines, "Conversation"));
}

#[test]
fn test_demo_app_renders_conversation() {
    let app = App::new(CommitSource::Demo, LayoutEngine::default());

    let mut terminal = Terminal::new(TestBackend::new(120, 44)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let lines = buffer_lines(terminal.backend().buffer());

    assert!(contains(&lines, "Conversation ctx-550e8400"));
    assert!(lines.last().unwrap().contains("[t] Chat"));
}
