//! TUI View Components
//!
//! Ratatui widgets for the interactive browser. Each one wraps a part of
//! the [`ScreenViewModel`](crate::presentation::view_models::ScreenViewModel)
//! and only maps it to cells; geometry comes from the app.

pub mod background;
pub mod canvas;
pub mod chrome;
pub mod overlay;
pub mod status_bar;

pub use background::BackgroundView;
pub use canvas::PageCanvasView;
pub use chrome::{FooterView, MenuView, NavBarView};
pub use overlay::{CursorView, ToastView, TooltipView};
pub use status_bar::StatusBarView;

use ratatui::style::{Color, Modifier, Style};

use super::page::Paint;
use super::{hue_rgb, tone_rgb};
use crate::presentation::view_models::StatusLevel;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
    }
}

pub(crate) fn to_area(rect: cybercell_engine::layout::Rect) -> ratatui::layout::Rect {
    ratatui::layout::Rect::new(rect.x, rect.y, rect.width, rect.height)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

pub(crate) fn paint_to_style(paint: Paint) -> Style {
    let style = Style::default();
    match paint {
        Paint::Plain => style,
        Paint::Muted | Paint::Meta => style.fg(Color::DarkGray),
        Paint::Grid => style.fg(Color::DarkGray).add_modifier(Modifier::DIM),
        Paint::Border => style.fg(Color::Blue),
        Paint::Hue(hue) => style.fg(rgb(hue_rgb(hue))),
        Paint::Focus => style.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Paint::Hover => style.fg(Color::LightCyan),
        Paint::Heading => style.fg(Color::White).add_modifier(Modifier::BOLD),
        Paint::Title => style.add_modifier(Modifier::BOLD),
        Paint::Link => style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        Paint::Stars => style.fg(Color::Yellow),
        Paint::Badge(tone) => style.fg(rgb(tone_rgb(tone))).add_modifier(Modifier::BOLD),
        Paint::Button { primary: true } => style
            .fg(rgb(hue_rgb(cybercell_types::Hue::CyberBlue)))
            .add_modifier(Modifier::BOLD),
        Paint::Button { primary: false } => style.fg(Color::White),
        Paint::Active => style.fg(Color::Cyan).add_modifier(Modifier::BOLD),
    }
}

/// Write a string at absolute cells, clipped to `area`.
pub(crate) fn put_str(
    buf: &mut ratatui::buffer::Buffer,
    area: ratatui::layout::Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if y < area.top() || y >= area.bottom() || x >= area.right() || x < area.left() {
        return;
    }
    buf.set_stringn(x, y, text, (area.right() - x) as usize, style);
}
