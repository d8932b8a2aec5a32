//! Path geometry for connections

use crate::model::{ConnectionKind, LineStyle, PathCommand, PathSpec, Point};

/// Build the drawing path for an edge
///
/// Straight lineage and continuations are single line segments. Curved
/// lineage is a symmetric S-curve through the vertical midpoint. Branch-outs
/// leave horizontally and arrive vertically; merge-backs do the mirror.
pub fn build_path(kind: ConnectionKind, style: LineStyle, from: Point, to: Point) -> PathSpec {
    let commands = match (kind, style) {
        (ConnectionKind::Continuation, _) | (ConnectionKind::Lineage, LineStyle::Straight) => {
            vec![PathCommand::MoveTo(from), PathCommand::LineTo(to)]
        }
        (ConnectionKind::Lineage, LineStyle::Curved) => {
            let mid_y = (from.y + to.y) / 2.0;
            cubic(from, Point::new(from.x, mid_y), Point::new(to.x, mid_y), to)
        }
        (ConnectionKind::BranchOut, _) => {
            let mid_x = (from.x + to.x) / 2.0;
            let mid_y = (from.y + to.y) / 2.0;
            cubic(from, Point::new(mid_x, from.y), Point::new(to.x, mid_y), to)
        }
        (ConnectionKind::MergeBack, _) => {
            let mid_x = (from.x + to.x) / 2.0;
            let mid_y = (from.y + to.y) / 2.0;
            cubic(from, Point::new(from.x, mid_y), Point::new(mid_x, to.y), to)
        }
    };
    PathSpec { commands }
}

fn cubic(from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo(from),
        PathCommand::CubicTo {
            ctrl1,
            ctrl2,
            end: to,
        },
    ]
}
