//! Overlay Views
//!
//! Drawn last, over everything else: toasts, the tooltip and the cursor
//! markers.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use cybercell_types::Hue;

use crate::presentation::view_models::{CursorViewModel, ToastViewModel, TooltipViewModel};
use crate::presentation::views::page::Paint;

use super::{paint_to_style, put_str, status_level_to_color};

const TOAST_HEIGHT: u16 = 3;

pub struct ToastView<'a> {
    toasts: &'a [ToastViewModel],
}

impl<'a> ToastView<'a> {
    pub fn new(toasts: &'a [ToastViewModel]) -> Self {
        Self { toasts }
    }
}

impl<'a> Widget for ToastView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Stacked top-right, newest at the bottom
        let mut y = area.y;
        for toast in self.toasts {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let width = (toast.message.chars().count() as u16 + 4).min(area.width);
            let rect = Rect::new(area.right() - width, y, width, TOAST_HEIGHT);
            let color = status_level_to_color(toast.level);
            Clear.render(rect, buf);
            Paragraph::new(toast.message.as_str())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .render(rect, buf);
            y += TOAST_HEIGHT;
        }
    }
}

pub struct TooltipView<'a> {
    model: &'a TooltipViewModel,
}

impl<'a> TooltipView<'a> {
    pub fn new(model: &'a TooltipViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TooltipView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = format!(" {} ", self.model.label);
        let width = text.chars().count() as u16;
        let x = self
            .model
            .x
            .min(area.right().saturating_sub(width))
            .max(area.left());
        put_str(
            buf,
            area,
            x,
            self.model.y,
            &text,
            Style::default().add_modifier(Modifier::REVERSED),
        );
    }
}

pub struct CursorView<'a> {
    model: &'a CursorViewModel,
}

impl<'a> CursorView<'a> {
    pub fn new(model: &'a CursorViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for CursorView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (tx, ty) = self.model.trail;
        put_str(buf, area, tx, ty, "•", Style::default().fg(Color::Magenta));

        let (gx, gy) = self.model.glow;
        let (glyph, style) = if self.model.hovering {
            ("◎", paint_to_style(Paint::Hue(Hue::CyberPink)).add_modifier(Modifier::BOLD))
        } else {
            ("◉", paint_to_style(Paint::Hue(Hue::CyberBlue)))
        };
        put_str(buf, area, gx, gy, glyph, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn test_toasts_stack_top_right() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let toasts = vec![
            ToastViewModel {
                message: "first".to_string(),
                level: StatusLevel::Info,
            },
            ToastViewModel {
                message: "second".to_string(),
                level: StatusLevel::Warning,
            },
        ];
        ToastView::new(&toasts).render(area, &mut buf);
        assert_eq!(buf[(39, 0)].symbol(), "┐");
        assert_eq!(buf[(31, 4)].symbol(), "s");
    }

    #[test]
    fn test_cursor_markers_clip() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        let cursor = CursorViewModel {
            glow: (3, 2),
            trail: (30, 30),
            hovering: false,
        };
        CursorView::new(&cursor).render(area, &mut buf);
        assert_eq!(buf[(3, 2)].symbol(), "◉");
    }
}
