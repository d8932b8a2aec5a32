//! Layout output model
//!
//! Positioned nodes and drawable connections produced by the layout engine.
//! Everything here is recomputed from scratch on each layout call.

use std::fmt;

use serde::Serialize;

/// A point in layout space (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What a layout node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A git commit on the lineage graph
    Commit,
    /// A conversation context beside its commit
    Context,
}

/// Identifies a node by kind and the SHA of the owning commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeRef {
    pub kind: NodeKind,
    pub sha: String,
}

impl NodeRef {
    pub fn commit(sha: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Commit,
            sha: sha.into(),
        }
    }

    pub fn context(sha: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Context,
            sha: sha.into(),
        }
    }
}

/// A commit or context positioned in 2-D space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub kind: NodeKind,
    /// SHA of the commit this node belongs to
    pub sha: String,
    pub x: f64,
    pub y: f64,
    /// Horizontal slot
    pub lane: usize,
    /// Vertical slot (distance from a root)
    pub depth: usize,
}

impl LayoutNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn node_ref(&self) -> NodeRef {
        NodeRef {
            kind: self.kind,
            sha: self.sha.clone(),
        }
    }
}

/// Edge semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    /// Parent commit to child commit
    Lineage,
    /// Git node into a context that starts a session
    BranchOut,
    /// Context to the next context of the same session
    Continuation,
    /// Context back to a git node where its session ends
    MergeBack,
}

/// How the renderer should draw an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Same-lane lineage and continuations
    Straight,
    /// Cross-lane lineage and session edges
    Curved,
}

/// One drawing command of a path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
}

impl PathCommand {
    /// The point the pen ends on after this command
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::CubicTo { end, .. } => end,
        }
    }
}

/// A drawable path between two endpoints
///
/// `Display` renders SVG path data, e.g. `M 200 100 L 200 260`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PathSpec {
    pub commands: Vec<PathCommand>,
}

impl PathSpec {
    pub fn start(&self) -> Option<Point> {
        self.commands.first().map(PathCommand::end_point)
    }

    pub fn end(&self) -> Option<Point> {
        self.commands.last().map(PathCommand::end_point)
    }

    /// True if the path contains curve control points
    pub fn is_curved(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, PathCommand::CubicTo { .. }))
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathCommand::CubicTo { ctrl1, ctrl2, end } => write!(
                    f,
                    "C {} {}, {} {}, {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, end.x, end.y
                )?,
            }
        }
        Ok(())
    }
}

/// A drawable edge between two layout nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionPath {
    pub kind: ConnectionKind,
    pub style: LineStyle,
    pub from: NodeRef,
    pub to: NodeRef,
    pub path: PathSpec,
}

/// Bounding rectangle for fit-to-view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ViewportBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// Complete result of one layout computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLayout {
    pub commit_nodes: Vec<LayoutNode>,
    pub context_nodes: Vec<LayoutNode>,
    pub connections: Vec<ConnectionPath>,
    pub bounds: ViewportBounds,
}

impl GraphLayout {
    pub fn commit_node(&self, sha: &str) -> Option<&LayoutNode> {
        self.commit_nodes.iter().find(|n| n.sha == sha)
    }

    pub fn context_node(&self, sha: &str) -> Option<&LayoutNode> {
        self.context_nodes.iter().find(|n| n.sha == sha)
    }

    /// Resolve a node reference to its node
    pub fn node(&self, node_ref: &NodeRef) -> Option<&LayoutNode> {
        match node_ref.kind {
            NodeKind::Commit => self.commit_node(&node_ref.sha),
            NodeKind::Context => self.context_node(&node_ref.sha),
        }
    }

    /// Connections of the given kind
    pub fn connections_of(&self, kind: ConnectionKind) -> impl Iterator<Item = &ConnectionPath> {
        self.connections.iter().filter(move |c| c.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.commit_nodes.is_empty()
    }
}
