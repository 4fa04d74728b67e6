//! Shell Chrome Views
//!
//! Navigation bar, collapsed menu and footer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use cybercell_runtime::shell::footer_columns;
use cybercell_types::Hue;

use crate::presentation::view_models::{
    FooterViewModel, MenuViewModel, NavBarViewModel, NavSlotViewModel,
};
use crate::presentation::views::page::Paint;

use super::{paint_to_style, put_str};

fn slot_style(slot: &NavSlotViewModel) -> Style {
    let style = if slot.active {
        paint_to_style(Paint::Active)
    } else {
        Style::default()
    };
    if slot.hovered {
        style.fg(Color::LightCyan).add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

pub struct NavBarView<'a> {
    model: &'a NavBarViewModel,
}

impl<'a> NavBarView<'a> {
    pub fn new(model: &'a NavBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NavBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(paint_to_style(Paint::Border))
            .render(area, buf);

        let logo = &self.model.logo;
        let mut logo_style = paint_to_style(Paint::Hue(Hue::CyberBlue)).add_modifier(Modifier::BOLD);
        if logo.hovered {
            logo_style = logo_style.add_modifier(Modifier::UNDERLINED);
        }
        put_str(buf, area, logo.rect.x, logo.rect.y, &logo.label, logo_style);

        for link in &self.model.links {
            let text = if link.active {
                format!("[{}]", link.label)
            } else {
                format!(" {} ", link.label)
            };
            put_str(buf, area, link.rect.x, link.rect.y, &text, slot_style(link));
        }

        if let Some(button) = &self.model.menu_button {
            let style = if button.active {
                paint_to_style(Paint::Focus)
            } else {
                slot_style(button)
            };
            put_str(buf, area, button.rect.x, button.rect.y, &format!(" {} ", button.label), style);
        }
    }
}

pub struct MenuView<'a> {
    model: &'a MenuViewModel,
}

impl<'a> MenuView<'a> {
    pub fn new(model: &'a MenuViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for MenuView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_style(paint_to_style(Paint::Border))
            .render(area, buf);

        for link in &self.model.links {
            let marker = if link.active { "› " } else { "  " };
            put_str(
                buf,
                area,
                link.rect.x,
                link.rect.y,
                &format!("{marker}{}", link.label),
                slot_style(link),
            );
        }
    }
}

pub struct FooterView<'a> {
    model: &'a FooterViewModel,
}

impl<'a> FooterView<'a> {
    pub fn new(model: &'a FooterViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for FooterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let (team_x, text) = footer_columns(area.width);
        let start = team_x.saturating_sub(self.model.credit.chars().count() as u16 + 1);
        put_str(buf, area, area.x + start, area.y, &text, paint_to_style(Paint::Muted));
        put_str(
            buf,
            area,
            area.x + team_x,
            area.y,
            self.model.team,
            paint_to_style(Paint::Link),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_screen;
    use cybercell_runtime::{App, Config};
    use cybercell_types::Location;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_nav_bar_marks_active_link() {
        let app = App::new(&Config::default(), Location::new("/references"), 140, 40);
        let screen = present_screen(&app, None, None);
        let area = Rect::new(0, 0, 140, 3);
        let mut buf = Buffer::empty(area);
        NavBarView::new(&screen.nav).render(area, &mut buf);

        let row = row_text(&buf, 1);
        assert!(row.contains("◆ Cyber Cell"));
        assert!(row.contains("[References]"));
        assert!(row.contains(" Mitigation "));
    }

    #[test]
    fn test_footer_credit() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        let footer = FooterViewModel {
            credit: "Developed by",
            team: "Pynevera",
            href: "/contact".to_string(),
        };
        FooterView::new(&footer).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("Developed by Pynevera"));
    }
}
