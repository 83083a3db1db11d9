use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Widget};
use serde::Deserialize;

use crate::pagination::Control;
use crate::ui::colors::Colors;

/// Size variant of the control strip: how much padding each label gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ControlSize {
    /// Spaces added on each side of a label.
    pub fn padding(self) -> usize {
        match self {
            ControlSize::Small => 0,
            ControlSize::Medium => 1,
            ControlSize::Large => 2,
        }
    }
}

/// Columns between two adjacent controls.
const GAP: u16 = 1;

/// Horizontal extent of one control inside the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRegion {
    /// Index into the control slice.
    pub index: usize,
    pub x: u16,
    pub width: u16,
}

impl ControlRegion {
    pub fn contains(&self, column: u16) -> bool {
        column >= self.x && column < self.x.saturating_add(self.width)
    }
}

pub fn padded_label(control: &Control, size: ControlSize) -> String {
    let pad = " ".repeat(size.padding());
    format!("{pad}{}{pad}", control.label())
}

/// Place every control on one row of `area`, centred horizontally.
///
/// Used both for drawing and for mapping mouse clicks back to controls, so
/// the two can never disagree.
pub fn strip_layout(controls: &[Control], size: ControlSize, area: Rect) -> Vec<ControlRegion> {
    let widths: Vec<u16> = controls
        .iter()
        .map(|c| clamp_u16(Span::raw(padded_label(c, size)).width()))
        .collect();
    // Wide unwindowed strips saturate at u16::MAX and simply start at the
    // left edge; drawing clips at the area's right border.
    let gaps = GAP.saturating_mul(clamp_u16(widths.len().saturating_sub(1)));
    let total = widths
        .iter()
        .fold(gaps, |acc, w| acc.saturating_add(*w));

    let mut x = area.x.saturating_add(area.width.saturating_sub(total) / 2);
    let mut regions = Vec::with_capacity(controls.len());
    for (index, width) in widths.into_iter().enumerate() {
        regions.push(ControlRegion { index, x, width });
        x = x.saturating_add(width).saturating_add(GAP);
    }
    regions
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Index of the control under (`column`, `row`), if any. Ellipses and
/// disabled controls are reported too; callers decide whether to act.
pub fn hit_test(
    controls: &[Control],
    size: ControlSize,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    if row < area.y || row >= area.bottom() || column >= area.right() {
        return None;
    }
    strip_layout(controls, size, area)
        .into_iter()
        .find(|r| r.contains(column))
        .map(|r| r.index)
}

/// Stateless widget drawing the control strip on the first row of its area.
pub struct PageControls<'a> {
    controls: &'a [Control],
    colors: &'a Colors,
    size: ControlSize,
    focused: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a> PageControls<'a> {
    pub fn new(controls: &'a [Control], colors: &'a Colors) -> Self {
        PageControls {
            controls,
            colors,
            size: ControlSize::default(),
            focused: None,
            block: None,
        }
    }

    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    pub fn focused(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn style_for(&self, index: usize, control: &Control) -> Style {
        if matches!(control, Control::Ellipsis) {
            self.colors.ellipsis_style
        } else if control.is_disabled() {
            self.colors.control_disabled_style
        } else if self.focused == Some(index) {
            self.colors.control_hover_style
        } else if control.is_active() {
            self.colors.control_active_style
        } else {
            self.colors.control_style
        }
    }
}

impl Widget for PageControls<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block.take() {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.is_empty() {
            return;
        }

        for region in strip_layout(self.controls, self.size, inner) {
            if region.x >= inner.right() {
                break;
            }
            let control = &self.controls[region.index];
            let style = self.style_for(region.index, control);
            let room = (inner.right() - region.x) as usize;
            buf.set_stringn(region.x, inner.y, padded_label(control, self.size), room, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{compute_view_model, PageState};

    fn strip(current_page: usize) -> Vec<Control> {
        let data: Vec<u32> = (0..95).collect();
        compute_view_model(
            &data,
            PageState {
                current_page,
                page_size: 10,
                max_visible_pages: 5,
            },
        )
        .controls
    }

    #[test]
    fn size_sets_padding() {
        let c = Control::Page { number: 7, active: false };
        assert_eq!(padded_label(&c, ControlSize::Small), "7");
        assert_eq!(padded_label(&c, ControlSize::Medium), " 7 ");
        assert_eq!(padded_label(&c, ControlSize::Large), "  7  ");
    }

    #[test]
    fn layout_is_centred_and_gapped() {
        // « ‹ 1 2 3 4 … 10 › » with small padding: widths 1,1,1,1,1,1,1,2,1,1 plus 9 gaps = 20.
        let controls = strip(1);
        let area = Rect::new(0, 0, 40, 1);
        let regions = strip_layout(&controls, ControlSize::Small, area);
        assert_eq!(regions.len(), controls.len());
        assert_eq!(regions[0].x, 10);
        assert_eq!(regions[1].x, 12);
        let last = regions.last().unwrap();
        assert_eq!(last.x + last.width, 30);
    }

    fn unwindowed_strip(pages: usize) -> Vec<Control> {
        let data: Vec<u32> = (0..pages as u32).collect();
        compute_view_model(
            &data,
            PageState {
                current_page: 1,
                page_size: 1,
                max_visible_pages: pages,
            },
        )
        .controls
    }

    #[test]
    fn strip_wider_than_u16_saturates() {
        let controls = unwindowed_strip(20_000);
        assert_eq!(controls.len(), 20_004);
        let area = Rect::new(0, 0, 80, 1);
        let regions = strip_layout(&controls, ControlSize::Medium, area);
        assert_eq!(regions.len(), controls.len());
        // Too wide to centre: starts at the left edge.
        assert_eq!(regions[0].x, 0);
        assert_eq!(regions.last().map(|r| r.x), Some(u16::MAX));
        // « ‹ 1 with medium padding: widths 3, 3, 3 and single gaps.
        assert_eq!(hit_test(&controls, ControlSize::Medium, area, 9, 0), Some(2));
        assert_eq!(controls[2].target(), Some(1));
    }

    #[test]
    fn wide_strip_renders_clipped() {
        let controls = unwindowed_strip(20_000);
        let colors = Colors::default();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        PageControls::new(&controls, &colors)
            .size(ControlSize::Small)
            .render(area, &mut buf);
        let row: String = (0..20u16)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert_eq!(row, "« ‹ 1 2 3 4 5 6 7 8 ");
    }

    #[test]
    fn hit_test_finds_page_buttons() {
        let controls = strip(1);
        let area = Rect::new(0, 5, 40, 1);
        // Control 3 is page 2 at x = 10 + 3 * 2.
        assert_eq!(hit_test(&controls, ControlSize::Small, area, 16, 5), Some(3));
        assert_eq!(controls[3].target(), Some(2));
        // Gap between controls.
        assert_eq!(hit_test(&controls, ControlSize::Small, area, 17, 5), None);
        // Outside the strip row.
        assert_eq!(hit_test(&controls, ControlSize::Small, area, 16, 6), None);
    }

    #[test]
    fn render_writes_labels_with_state_styles() {
        let controls = strip(1);
        let colors = Colors::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        PageControls::new(&controls, &colors)
            .size(ControlSize::Small)
            .focused(Some(3))
            .render(area, &mut buf);

        let row: String = (0..40u16)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert_eq!(row.trim(), "« ‹ 1 2 3 4 … 10 › »");

        let cell = |x: u16| buf.cell((x, 0)).cloned().unwrap_or_default();
        // First is disabled on page 1, page 1 is active, page 2 is focused.
        assert_eq!(cell(10).fg, colors.control_disabled_style.fg.unwrap());
        assert_eq!(cell(14).bg, colors.control_active_style.bg.unwrap());
        assert_eq!(cell(16).bg, colors.control_hover_style.bg.unwrap());
    }
}
