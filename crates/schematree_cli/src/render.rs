//! Plain-text rendering of shell snapshots.

use schematree_core::{CommentListView, ShellSnapshot};
use std::fmt::Write;

pub fn render_snapshot(snapshot: &ShellSnapshot) -> String {
    let mut out = String::new();
    let controls = &snapshot.controls;
    let _ = writeln!(
        out,
        "== mode: {} | theme: {} | [{}] [{}]",
        snapshot.mode, snapshot.theme, controls.primary.label, controls.secondary.label
    );

    for title in &snapshot.titles {
        let marker = match (title.editing, title.editable) {
            (true, _) => " (editing)",
            (false, true) => " (editable)",
            (false, false) => "",
        };
        let _ = writeln!(out, "{:<11} {}{marker}", format!("{}:", title.field), title.text);
    }

    if let Some(panels) = controls.tool_panels {
        let names = |tools: &[schematree_core::ToolAction]| {
            tools
                .iter()
                .map(|tool| tool.name())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let _ = writeln!(out, "tree tools:  {}", names(panels.tree));
        let _ = writeln!(out, "notes tools: {}", names(panels.notes));
    }

    match &snapshot.comments {
        CommentListView::Empty => {
            let _ = writeln!(out, "comments: (none yet)");
        }
        CommentListView::Populated(rows) => {
            let _ = writeln!(out, "comments:");
            for row in rows {
                let _ = writeln!(
                    out,
                    "  [{}] {} ({})",
                    row.index, row.display_text, row.timestamp_display
                );
            }
        }
    }
    if !snapshot.comment_draft.is_empty() {
        let _ = writeln!(out, "draft: {}", snapshot.comment_draft);
    }

    for notification in &snapshot.notifications {
        let _ = writeln!(
            out,
            "! #{} {}: {}",
            notification.id,
            notification.level.as_str(),
            notification.message
        );
    }
    out
}
