//! Page Canvas View
//!
//! Draws the scrolled page into the viewport through the shared page
//! drawing code, plus a scrollbar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::page::{Paint, Surface, draw_page};

use super::paint_to_style;

/// Surface over a ratatui buffer, clipped to one area.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }
}

impl Surface for BufferSurface<'_> {
    fn put(&mut self, x: i32, y: i32, text: &str, paint: Paint) {
        let top = self.area.y as i32;
        if y < top || y >= top + self.area.height as i32 {
            return;
        }
        let style = paint_to_style(paint);
        let (left, right) = (self.area.x as i32, self.area.x as i32 + self.area.width as i32);
        for (i, ch) in text.chars().enumerate() {
            let cx = x + i as i32;
            if cx < left {
                continue;
            }
            if cx >= right {
                break;
            }
            if let Some(cell) = self.buf.cell_mut((cx as u16, y as u16)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}

pub struct PageCanvasView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> PageCanvasView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PageCanvasView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dy = area.y as i32 - self.model.scroll as i32;
        draw_page(&self.model.page, &mut BufferSurface::new(buf, area), dy);

        if self.model.max_scroll > 0 {
            let mut state = ScrollbarState::new(self.model.max_scroll as usize)
                .position(self.model.scroll as usize);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .render(area, buf, &mut state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_surface_clips_to_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 4));
        let area = Rect::new(2, 1, 4, 2);
        let mut surface = BufferSurface::new(&mut buf, area);
        surface.put(0, 1, "abcdefgh", Paint::Plain);
        surface.put(2, 0, "zz", Paint::Plain);
        surface.put(2, 3, "zz", Paint::Plain);

        assert_eq!(buf[(2, 1)].symbol(), "c");
        assert_eq!(buf[(5, 1)].symbol(), "f");
        assert_eq!(buf[(6, 1)].symbol(), " ");
        assert_eq!(buf[(1, 1)].symbol(), " ");
        assert_eq!(buf[(2, 0)].symbol(), " ");
        assert_eq!(buf[(2, 3)].symbol(), " ");
    }
}
