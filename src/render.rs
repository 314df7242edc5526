use std::fmt::Write;

use crate::bookmark::Bookmark;
use crate::filter::ViewState;

pub const NO_RESULTS: &str = "No quick links found matching your search.";

/// Render a view as plain text, notices first
pub fn render_view(view: &ViewState, notices: &[String]) -> String {
    let mut out = String::new();

    for notice in notices {
        let _ = writeln!(out, "! {}", notice);
    }
    if !notices.is_empty() {
        out.push('\n');
    }

    if view.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
        return out;
    }

    if !view.pinned.is_empty() {
        render_section(&mut out, "Pinned", &view.pinned, true);
    }
    if !view.unpinned.is_empty() {
        if !view.pinned.is_empty() {
            out.push('\n');
        }
        render_section(&mut out, "All Links", &view.unpinned, false);
    }

    out
}

fn render_section(out: &mut String, heading: &str, bookmarks: &[Bookmark], pinned: bool) {
    let _ = writeln!(out, "{} ({})", heading, bookmarks.len());
    for bookmark in bookmarks {
        render_card(out, bookmark, pinned);
    }
}

fn render_card(out: &mut String, bookmark: &Bookmark, pinned: bool) {
    let marker = if pinned { '*' } else { ' ' };
    let origin = if bookmark.is_user_added { " (mine)" } else { "" };
    let _ = writeln!(out, "  [{}] {}{}", marker, bookmark.title, origin);
    let _ = writeln!(out, "      {}", bookmark.url);

    if !bookmark.description.is_empty() {
        let _ = writeln!(out, "      {}", bookmark.description);
    }
    if !bookmark.tags.is_empty() {
        let tags = bookmark
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "      {}", tags);
    }
}
