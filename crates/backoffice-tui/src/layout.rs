//! Screen layout definitions for the TUI
//!
//! Header on top, status bar at the bottom, and a sidebar next to the
//! content area. The sidebar is dropped on narrow terminals or when the
//! user collapses it.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 22;

/// Below this width the sidebar is hidden
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub status: Rect,
}

pub fn create(area: Rect, sidebar_collapsed: bool) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    let show_sidebar = !sidebar_collapsed && area.width >= MIN_WIDTH_FOR_SIDEBAR;
    let (sidebar, content) = if show_sidebar {
        let cols =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
                .split(rows[1]);
        (Some(cols[0]), cols[1])
    } else {
        (None, rows[1])
    };

    ScreenAreas {
        header: rows[0],
        sidebar,
        content,
        status: rows[2],
    }
}

/// Split the content area into the lead stats strip and the table
pub fn split_stats(content: Rect) -> (Rect, Rect) {
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(content);
    (rows[0], rows[1])
}
