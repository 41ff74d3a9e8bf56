//! Shared modal overlay helpers: centering, background dimming and shadow

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Rect sized as a percentage of `area` (0-100), centered
pub fn centered_rect_percent(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let w = (u32::from(area.width) * u32::from(width_percent.min(100)) / 100) as u16;
    let h = (u32::from(area.height) * u32::from(height_percent.min(100)) / 100) as u16;
    centered_rect(w, h, area)
}

/// Dim every cell in `area` so the modal stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// 1-cell shadow along the right and bottom edges of `modal`
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = modal.x.saturating_add(modal.width);
    let bottom_y = modal.y.saturating_add(modal.height);

    let right_edge = (modal.y.saturating_add(1)..=bottom_y).map(|y| (right_x, y));
    let bottom_edge = (modal.x.saturating_add(1)..=right_x).map(|x| (x, bottom_y));
    for pos in right_edge.chain(bottom_edge) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Dim `screen`, then clear and shadow a centered `width` x `height` rect.
/// Returns the rect the modal should draw into.
pub fn prepare_modal(buf: &mut Buffer, screen: Rect, width: u16, height: u16) -> Rect {
    dim_background(buf, screen);
    let modal = centered_rect(width, height, screen);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
    modal
}
