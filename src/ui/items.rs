use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::pagination::page_caption;
use crate::ui::colors::Colors;
use crate::ui::TerminalSurface;

/// Format one item row, prefixed with its 1-based position in the dataset.
pub fn format_item_line(position: usize, width: usize, item: &str) -> String {
    format!("{position:>width$}  {item}")
}

/// Draw the current page's items as a bordered list.
pub fn draw_items(f: &mut Frame, area: Rect, surface: &TerminalSurface, colors: &Colors) {
    let width = (surface.first_item + surface.items.len()).max(1).to_string().len();
    let rows: Vec<ListItem> = surface
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let line = format_item_line(surface.first_item + i + 1, width, item);
            ListItem::new(Line::from(Span::styled(line, colors.item_style)))
        })
        .collect();

    let title = format!(" {} ", page_caption(surface.current_page, surface.total_pages));
    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(colors.block_style),
    );
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_lines_are_right_aligned_by_position() {
        assert_eq!(format_item_line(7, 3, "seven"), "  7  seven");
        assert_eq!(format_item_line(95, 2, "last"), "95  last");
    }
}
