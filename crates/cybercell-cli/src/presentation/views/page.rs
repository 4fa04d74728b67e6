//! Page drawing shared by the console and the terminal browser.
//!
//! Pages are drawn cell by cell onto a [`Surface`] with semantic [`Paint`]s;
//! each frontend decides what a paint looks like.

use std::fmt;

use owo_colors::{OwoColorize, Style};

use cybercell_engine::card::{BORDER_COLS, TextRole};
use cybercell_engine::layout::Rect;
use cybercell_runtime::ShellAction;
use cybercell_runtime::shell::{NAV_HEIGHT, ShellGeometry, footer_columns};
use cybercell_types::{BadgeTone, Hue};

use super::{hue_rgb, icon_glyph, tone_rgb};
use crate::presentation::view_models::{
    HeroViewModel, PageViewModel, SectionViewModel, TileKindViewModel, TileViewModel, ViewMode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Muted,
    Border,
    Hue(Hue),
    Focus,
    Hover,
    Heading,
    Title,
    Meta,
    Link,
    Stars,
    Badge(BadgeTone),
    Button { primary: bool },
    /// Current nav link
    Active,
    Grid,
}

pub trait Surface {
    /// Write `text` from a cell onwards. Cells off the surface are dropped.
    fn put(&mut self, x: i32, y: i32, text: &str, paint: Paint);
}

/// Draw a page with its row 0 at surface row `dy`.
pub fn draw_page(page: &PageViewModel, surface: &mut dyn Surface, dy: i32) {
    draw_hero(&page.hero, surface, dy);
    for section in &page.sections {
        draw_section_header(section, surface, dy);
    }
    for tile in &page.tiles {
        draw_tile(tile, surface, dy);
    }
}

/// Rows an element still has to slide up, or `None` while hidden.
fn lift(reveal: f32) -> Option<i32> {
    (reveal > 0.0).then(|| ((1.0 - reveal.min(1.0)) * 2.0).round() as i32)
}

fn fade(reveal: f32, paint: Paint) -> Paint {
    if reveal < 0.5 { Paint::Muted } else { paint }
}

fn width_of(text: &str) -> i32 {
    text.chars().count() as i32
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn center_x(rect: Rect, len: i32) -> i32 {
    rect.x as i32 + (rect.width as i32 - len).max(0) / 2
}

fn put_centered(surface: &mut dyn Surface, rect: Rect, y: i32, text: &str, paint: Paint) {
    let text = truncate(text, rect.width as usize);
    surface.put(center_x(rect, width_of(&text)), y, &text, paint);
}

fn draw_hero(hero: &HeroViewModel, surface: &mut dyn Surface, dy: i32) {
    let Some(lift) = lift(hero.reveal) else {
        return;
    };
    let rect = hero.text_rect;
    let paint = |p| fade(hero.reveal, p);
    let mut y = rect.y as i32 + dy + lift;

    if let Some(badge) = hero.badge {
        let badge = format!("[ {badge} ]");
        put_centered(surface, rect, y, &badge, paint(Paint::Hue(hero.gradient.from)));
        y += 2;
    }

    let parts: Vec<(&str, Paint)> = [
        (hero.headline_before, Paint::Heading),
        (hero.headline_accent, Paint::Hue(hero.gradient.to)),
        (hero.headline_after, Paint::Heading),
    ]
    .into_iter()
    .filter(|(text, _)| !text.is_empty())
    .collect();
    let total = parts.iter().map(|(t, _)| width_of(t)).sum::<i32>()
        + parts.len().saturating_sub(1) as i32;
    if total > rect.width as i32 {
        let joined: Vec<&str> = parts.iter().map(|(t, _)| *t).collect();
        put_centered(surface, rect, y, &joined.join(" "), paint(Paint::Heading));
    } else {
        let mut x = center_x(rect, total);
        for (text, part_paint) in parts {
            surface.put(x, y, text, paint(part_paint));
            x += width_of(text) + 1;
        }
    }
    y += 2;

    for line in &hero.tagline {
        put_centered(surface, rect, y, line, paint(Paint::Plain));
        y += 1;
    }
}

fn draw_section_header(section: &SectionViewModel, surface: &mut dyn Surface, dy: i32) {
    let Some(lift) = lift(section.reveal) else {
        return;
    };
    let rect = section.header_rect;
    let mut y = rect.y as i32 + dy + lift;
    if let Some(heading) = section.heading {
        put_centered(surface, rect, y, heading, fade(section.reveal, Paint::Heading));
        y += 2;
    }
    for line in &section.blurb {
        put_centered(surface, rect, y, line, Paint::Muted);
        y += 1;
    }
}

fn draw_box(surface: &mut dyn Surface, x: i32, y: i32, width: u16, height: u16, paint: Paint) {
    if width < 2 || height < 2 {
        return;
    }
    let span = "─".repeat(width as usize - 2);
    let blank = " ".repeat(width as usize - 2);
    surface.put(x, y, &format!("╭{span}╮"), paint);
    for row in 1..height as i32 - 1 {
        surface.put(x, y + row, "│", paint);
        surface.put(x + 1, y + row, &blank, Paint::Plain);
        surface.put(x + width as i32 - 1, y + row, "│", paint);
    }
    surface.put(x, y + height as i32 - 1, &format!("╰{span}╯"), paint);
}

fn draw_tile(tile: &TileViewModel, surface: &mut dyn Surface, dy: i32) {
    let Some(lift) = lift(tile.reveal) else {
        return;
    };
    let paint = |p| fade(tile.reveal, p);
    let rect = tile.rect;
    let (x, y) = (rect.x as i32, rect.y as i32 + dy + lift);
    let from = tile.gradient.map_or(Hue::CyberBlue, |g| g.from);
    let to = tile.gradient.map_or(Hue::CyberPurple, |g| g.to);

    let border = if tile.focused {
        Paint::Focus
    } else if tile.hovered {
        Paint::Hover
    } else {
        match (tile.kind, tile.gradient) {
            (TileKindViewModel::Button { primary }, _) => Paint::Button { primary },
            (_, Some(gradient)) => Paint::Hue(gradient.from),
            _ => Paint::Border,
        }
    };
    draw_box(surface, x, y, rect.width, rect.height, paint(border));

    if let TileKindViewModel::Button { primary } = tile.kind {
        let inner = Rect::new(rect.x + 1, rect.y, rect.width.saturating_sub(2), 1);
        put_centered(surface, inner, y + 1, tile.label, paint(Paint::Button { primary }));
        return;
    }

    let inner_x = x + 2;
    let inner_width = rect.width.saturating_sub(BORDER_COLS) as usize;
    let bottom = y + rect.height as i32 - 1;
    let mut row = y + 1;

    if tile.icon.is_some() || tile.badge.is_some() {
        if let Some(icon) = tile.icon {
            surface.put(inner_x, row, &icon_glyph(icon).to_string(), paint(Paint::Hue(from)));
        }
        if let Some(badge) = tile.badge {
            let label = truncate(badge.label, inner_width.saturating_sub(2));
            let bx = inner_x + inner_width as i32 - width_of(&label);
            surface.put(bx, row, &label, paint(Paint::Badge(badge.tone)));
        }
        row += 1;
    }

    for line in &tile.lines {
        if row >= bottom {
            break;
        }
        let role_paint = match line.role {
            TextRole::Headline => Paint::Hue(to),
            TextRole::Title => Paint::Title,
            TextRole::Body | TextRole::Bullet => Paint::Plain,
            TextRole::Meta => Paint::Meta,
            TextRole::Accent => Paint::Hue(from),
            TextRole::Link => Paint::Link,
            TextRole::Stars => Paint::Stars,
        };
        if line.role == TextRole::Bullet {
            surface.put(inner_x, row, "•", paint(Paint::Hue(from)));
            surface.put(inner_x + 2, row, &line.text, paint(role_paint));
        } else {
            surface.put(inner_x, row, &line.text, paint(role_paint));
        }
        row += 1;
    }
}

// ==========================================
// Text canvas
// ==========================================

/// In-memory surface printed as lines of text.
pub struct TextCanvas {
    width: u16,
    rows: Vec<Vec<(char, Paint)>>,
}

impl TextCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            rows: vec![vec![(' ', Paint::Plain); width as usize]; height as usize],
        }
    }

    pub fn render(&self, mode: ViewMode) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let used = row
                .iter()
                .rposition(|(ch, _)| *ch != ' ')
                .map_or(0, |last| last + 1);
            let mut cells = row[..used].iter().peekable();
            while let Some((ch, paint)) = cells.next() {
                let mut run = ch.to_string();
                while let Some((next, _)) = cells.next_if(|(_, p)| p == paint) {
                    run.push(*next);
                }
                if mode.is_color() {
                    out.push_str(&run.style(paint_style(*paint)).to_string());
                } else {
                    out.push_str(&run);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Surface for TextCanvas {
    fn put(&mut self, x: i32, y: i32, text: &str, paint: Paint) {
        let Some(row) = usize::try_from(y).ok().and_then(|y| self.rows.get_mut(y)) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let cx = x + i as i32;
            if cx < 0 {
                continue;
            }
            if cx >= self.width as i32 {
                break;
            }
            row[cx as usize] = (ch, paint);
        }
    }
}

fn paint_style(paint: Paint) -> Style {
    let rgb = |(r, g, b): (u8, u8, u8)| Style::new().truecolor(r, g, b);
    match paint {
        Paint::Plain => Style::new(),
        Paint::Muted | Paint::Meta | Paint::Grid => Style::new().bright_black(),
        Paint::Border => Style::new().blue(),
        Paint::Hue(hue) => rgb(hue_rgb(hue)),
        Paint::Focus => Style::new().yellow().bold(),
        Paint::Hover => Style::new().bright_cyan(),
        Paint::Heading => Style::new().white().bold(),
        Paint::Title => Style::new().bold(),
        Paint::Link => Style::new().cyan().underline(),
        Paint::Stars => Style::new().yellow(),
        Paint::Badge(tone) => rgb(tone_rgb(tone)).bold(),
        Paint::Button { primary: true } => rgb(hue_rgb(Hue::CyberBlue)).bold(),
        Paint::Button { primary: false } => Style::new().white(),
        Paint::Active => Style::new().cyan().bold(),
    }
}

// ==========================================
// Console page view
// ==========================================

const FOOTER_ROWS: u16 = 2;

/// Whole page as text: nav bar, page body and footer.
pub struct PageTextView<'a> {
    data: &'a PageViewModel,
    mode: ViewMode,
}

impl<'a> PageTextView<'a> {
    pub fn new(data: &'a PageViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn draw_nav(&self, canvas: &mut TextCanvas) {
        let geometry = ShellGeometry::compute(self.data.width, NAV_HEIGHT + FOOTER_ROWS, false);
        for spot in geometry.hotspots() {
            match spot.action {
                ShellAction::Logo => {
                    canvas.put(spot.rect.x as i32, 1, &spot.label, Paint::Hue(Hue::CyberBlue));
                }
                ShellAction::NavLink(index) => {
                    let active = self.data.nav.get(index).is_some_and(|link| link.active);
                    let (text, paint) = if active {
                        (format!("[{}]", spot.label), Paint::Active)
                    } else {
                        (format!(" {} ", spot.label), Paint::Plain)
                    };
                    canvas.put(spot.rect.x as i32, 1, &text, paint);
                }
                ShellAction::MenuButton => {
                    canvas.put(spot.rect.x as i32 + 1, 1, &spot.label, Paint::Plain);
                }
                _ => {}
            }
        }
        canvas.put(0, NAV_HEIGHT as i32 - 1, &"─".repeat(self.data.width as usize), Paint::Border);
    }

    fn draw_footer(&self, canvas: &mut TextCanvas, y: i32) {
        let footer = &self.data.footer;
        canvas.put(0, y, &"─".repeat(self.data.width as usize), Paint::Border);
        let (team_x, text) = footer_columns(self.data.width);
        let start = team_x as i32 - width_of(footer.credit) - 1;
        canvas.put(start, y + 1, &text, Paint::Muted);
        canvas.put(team_x as i32, y + 1, footer.team, Paint::Link);
    }
}

impl<'a> fmt::Display for PageTextView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.data;
        let mut canvas = TextCanvas::new(page.width, NAV_HEIGHT + page.height + FOOTER_ROWS);
        self.draw_nav(&mut canvas);
        draw_page(page, &mut canvas, NAV_HEIGHT as i32);
        self.draw_footer(&mut canvas, (NAV_HEIGHT + page.height) as i32);
        write!(f, "{}", canvas.render(self.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_address;
    use cybercell_types::AddressingMode;

    fn plain(input: &str, width: u16) -> String {
        let vm = present_address(input, AddressingMode::Path, width);
        PageTextView::new(&vm, ViewMode::Plain).to_string()
    }

    #[test]
    fn test_canvas_clips_and_trims() {
        let mut canvas = TextCanvas::new(6, 2);
        canvas.put(-2, 0, "abcdefgh", Paint::Plain);
        canvas.put(4, 1, "xy", Paint::Title);
        canvas.put(0, 5, "gone", Paint::Plain);
        assert_eq!(canvas.render(ViewMode::Plain), "cdefgh\n    xy\n");
    }

    #[test]
    fn test_color_mode_emits_escapes() {
        let mut canvas = TextCanvas::new(10, 1);
        canvas.put(0, 0, "alert", Paint::Badge(BadgeTone::Red));
        let colored = canvas.render(ViewMode::Color);
        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains("alert"));
    }

    #[test]
    fn test_page_text_contains_content() {
        let text = plain("/mitigation", 120);
        assert!(text.contains("◆ Cyber Cell"));
        assert!(text.contains("[Mitigation]"));
        assert!(text.contains("Core Mitigation Strategies"));
        assert!(text.contains("MITRE ATT&CK"));
        assert!(text.contains("Developed by Pynevera"));
        for line in text.lines() {
            assert!(line.chars().count() <= 120);
        }
    }

    #[test]
    fn test_narrow_page_shows_menu_button() {
        let text = plain("/", 60);
        let nav = text.lines().nth(1).unwrap();
        assert!(nav.contains('☰'));
        assert!(!nav.contains("[Home]"));
    }

    #[test]
    fn test_not_found_page() {
        let text = plain("/threats", 100);
        assert!(text.contains("Return to Home"));
        assert!(!text.contains("[Home]"));
    }
}
