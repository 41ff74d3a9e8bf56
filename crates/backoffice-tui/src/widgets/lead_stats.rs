//! Lead counts by status, shown above the leads table

use backoffice_core::{LeadStats, LeadStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub struct LeadStatsBar {
    stats: LeadStats,
    filter: Option<LeadStatus>,
}

impl LeadStatsBar {
    pub fn new(stats: LeadStats, filter: Option<LeadStatus>) -> Self {
        Self { stats, filter }
    }

    fn card(label: &str, count: u64, style: Style, active: bool, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(active).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }
        let line = Line::from(vec![
            Span::styled(format!("{} ", label), styles::text_secondary()),
            Span::styled(count.to_string(), style),
        ]);
        buf.set_line(inner.x + 1, inner.y, &line, inner.width.saturating_sub(1));
    }
}

impl Widget for LeadStatsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards = Layout::horizontal([Constraint::Fill(1); 5]).split(area);

        Self::card(
            "All",
            self.stats.total,
            styles::accent_bold(),
            self.filter.is_none(),
            cards[0],
            buf,
        );
        for (status, area) in LeadStatus::ALL.into_iter().zip(cards.iter().skip(1)) {
            Self::card(
                status.label(),
                self.stats.count(status),
                styles::lead_status(status),
                self.filter == Some(status),
                *area,
                buf,
            );
        }
    }
}
