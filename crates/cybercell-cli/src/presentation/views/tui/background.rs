//! Background View
//!
//! The fixed layers behind the page: the cyber grid and the hero gradient
//! wash along the top of the viewport.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use cybercell_runtime::BackgroundLayer;

use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::hue_rgb;
use crate::presentation::views::page::Paint;

use super::paint_to_style;

pub struct BackgroundView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> BackgroundView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for BackgroundView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = paint_to_style(Paint::Grid);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let Some(glyph) = BackgroundLayer::grid_glyph(x, y) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(glyph).set_style(grid);
                }
            }
        }

        // Gradient wash behind the hero while it is on screen
        let hero = self.model.page.hero.rect;
        let hero_bottom = (hero.bottom() as i32 - self.model.scroll as i32).max(0) as u16;
        let rows = hero_bottom.min(area.height);
        let (r1, g1, b1) = hue_rgb(self.model.page.hero.gradient.from);
        let (r2, g2, b2) = hue_rgb(self.model.page.hero.gradient.to);
        for x in area.left()..area.right() {
            let t = f32::from(x - area.left()) / f32::from(area.width.max(1));
            let mix = |a: u8, b: u8| ((f32::from(a) * (1.0 - t) + f32::from(b) * t) * 0.12) as u8;
            let color = ratatui::style::Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2));
            for y in area.top()..area.top() + rows {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(Style::default().bg(color));
                }
            }
        }
    }
}
