//! Page geometry in terminal cells.
//!
//! A page is laid out once per width: the hero on top, then each section as
//! a header followed by a grid of cards and a row of buttons. Coordinates
//! are absolute page rows; the view subtracts its scroll offset.

use cybercell_content::{Page, SectionBody};
use cybercell_types::Target;
use serde::Serialize;

use crate::card::{self, CardContent, button_width, card_content, card_target, wrap_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const TABLET_MIN_WIDTH: u16 = 80;
    pub const DESKTOP_MIN_WIDTH: u16 = 120;

    pub fn for_width(width: u16) -> Self {
        if width < Self::TABLET_MIN_WIDTH {
            Breakpoint::Mobile
        } else if width < Self::DESKTOP_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Nav links collapse into the menu button below tablet width.
    pub fn collapses_nav(self) -> bool {
        self == Breakpoint::Mobile
    }

    fn margin(self) -> u16 {
        match self {
            Breakpoint::Mobile => 1,
            Breakpoint::Tablet => 2,
            Breakpoint::Desktop => 4,
        }
    }

    fn column_gap(self) -> u16 {
        match self {
            Breakpoint::Mobile => 1,
            _ => 2,
        }
    }
}

/// Column counts per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Columns {
    pub mobile: u16,
    pub tablet: u16,
    pub desktop: u16,
}

impl Columns {
    pub const fn new(mobile: u16, tablet: u16, desktop: u16) -> Self {
        Self {
            mobile,
            tablet,
            desktop,
        }
    }

    pub fn at(&self, breakpoint: Breakpoint) -> u16 {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
        .max(1)
    }
}

/// Grid columns a section body uses.
pub fn body_columns(body: &SectionBody) -> Columns {
    match body {
        SectionBody::Stats(_) => Columns::new(2, 4, 4),
        SectionBody::Trending(_) => Columns::new(1, 3, 3),
        SectionBody::Articles(_) => Columns::new(1, 2, 4),
        SectionBody::Principles(_) => Columns::new(1, 3, 3),
        SectionBody::Topics(_) => Columns::new(1, 2, 2),
        SectionBody::Threats(_) => Columns::new(1, 2, 3),
        SectionBody::Timeline(_) => Columns::new(1, 1, 1),
        SectionBody::Strategies(_) => Columns::new(1, 2, 3),
        SectionBody::Frameworks(_) => Columns::new(1, 3, 3),
        SectionBody::Library(_) => Columns::new(1, 2, 3),
        SectionBody::Books(_) => Columns::new(1, 2, 4),
        SectionBody::InfoCards(_) => Columns::new(1, 2, 2),
        SectionBody::Callout(_) => Columns::new(1, 1, 1),
    }
}

/// Quick access tiles under the home hero.
pub const QUICK_ACCESS_COLUMNS: Columns = Columns::new(1, 2, 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridItem {
    pub col_span: u16,
    pub row_span: u16,
}

impl GridItem {
    pub const SINGLE: GridItem = GridItem {
        col_span: 1,
        row_span: 1,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub column: u16,
    pub row: u16,
    pub col_span: u16,
    pub row_span: u16,
}

/// Sparse row-major auto-placement, as CSS grid does it.
///
/// The cursor only moves forward, so a hole left by a large item is not
/// back-filled by later items. Spans wider than the grid are clamped.
pub fn place(items: &[GridItem], columns: u16) -> Vec<Placement> {
    let columns = columns.max(1);
    let mut occupied: Vec<Vec<bool>> = Vec::new();
    let (mut row, mut col) = (0u16, 0u16);
    let mut placements = Vec::with_capacity(items.len());

    for item in items {
        let col_span = item.col_span.clamp(1, columns);
        let row_span = item.row_span.max(1);
        loop {
            if col + col_span > columns {
                row += 1;
                col = 0;
                continue;
            }
            if is_free(&occupied, row, col, col_span, row_span) {
                mark(&mut occupied, columns, row, col, col_span, row_span);
                placements.push(Placement {
                    column: col,
                    row,
                    col_span,
                    row_span,
                });
                col += col_span;
                break;
            }
            col += 1;
        }
    }
    placements
}

/// Rows spanned by a set of placements.
pub fn row_count(placements: &[Placement]) -> u16 {
    placements
        .iter()
        .map(|p| p.row + p.row_span)
        .max()
        .unwrap_or(0)
}

fn is_free(occupied: &[Vec<bool>], row: u16, col: u16, col_span: u16, row_span: u16) -> bool {
    (row..row + row_span).all(|r| {
        occupied.get(r as usize).is_none_or(|cells| {
            (col..col + col_span).all(|c| !cells.get(c as usize).copied().unwrap_or(false))
        })
    })
}

fn mark(
    occupied: &mut Vec<Vec<bool>>,
    columns: u16,
    row: u16,
    col: u16,
    col_span: u16,
    row_span: u16,
) {
    let needed = (row + row_span) as usize;
    if occupied.len() < needed {
        occupied.resize_with(needed, || vec![false; columns as usize]);
    }
    for r in row..row + row_span {
        for c in col..col + col_span {
            occupied[r as usize][c as usize] = true;
        }
    }
}

// ==========================================
// Page layout
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TileKind {
    /// Content card inside a section grid
    Card { section: usize, item: usize },
    /// Shortcut tile under the hero
    QuickAccess { item: usize },
    /// Button under the hero (`section` is `None`) or under a section
    Action {
        section: Option<usize>,
        item: usize,
        primary: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
    pub label: &'static str,
    pub target: Target,
    pub featured: bool,
}

impl Tile {
    pub fn is_button(&self) -> bool {
        matches!(self.kind, TileKind::Action { .. })
    }

    /// Tiles that do something when activated.
    pub fn is_clickable(&self) -> bool {
        self.target.is_actionable()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroLayout {
    pub rect: Rect,
    /// Area for badge, headline and tagline
    pub text: Rect,
    pub tagline: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionLayout {
    pub index: usize,
    pub anchor: Option<&'static str>,
    pub rect: Rect,
    /// Heading and blurb rows, empty when the section has neither
    pub header: Rect,
    pub blurb: Vec<String>,
    pub body: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub width: u16,
    pub breakpoint: Breakpoint,
    pub hero: HeroLayout,
    pub sections: Vec<SectionLayout>,
    /// Every tile in reading order, hero tiles first
    pub tiles: Vec<Tile>,
    pub height: u16,
}

const MAX_CONTENT_WIDTH: u16 = 160;
const ROW_GAP: u16 = 1;
const SECTION_GAP: u16 = 2;
const BUTTON_HEIGHT: u16 = 3;

impl PageLayout {
    pub fn compute(page: &Page, width: u16) -> Self {
        let breakpoint = Breakpoint::for_width(width);
        let margin = breakpoint.margin();
        let content_width = width
            .saturating_sub(margin * 2)
            .clamp(1, MAX_CONTENT_WIDTH);
        let left = width.saturating_sub(content_width) / 2;
        let mut builder = Builder {
            breakpoint,
            left,
            content_width,
            tiles: Vec::new(),
        };

        let hero = builder.hero(page);
        let mut y = hero.rect.bottom();
        let mut sections = Vec::with_capacity(page.sections.len());
        for (index, section) in page.sections.iter().enumerate() {
            y += SECTION_GAP;
            let top = y;

            let mut header_rows = 0;
            if section.heading.is_some() {
                header_rows += 2;
            }
            let blurb = section
                .blurb
                .map(|b| wrap_text(b, content_width as usize))
                .unwrap_or_default();
            if !blurb.is_empty() {
                header_rows += blurb.len() as u16 + 1;
            }
            let header = Rect::new(left, y, content_width, header_rows);
            y += header_rows;

            let body_height = builder.grid(&section.body, index, y);
            let body = Rect::new(left, y, content_width, body_height);
            y += body_height;

            if !section.actions.is_empty() {
                y += ROW_GAP;
                y += builder.actions(section.actions, Some(index), y);
            }

            sections.push(SectionLayout {
                index,
                anchor: section.anchor,
                rect: Rect::new(left, top, content_width, y - top),
                header,
                blurb,
                body,
            });
        }

        PageLayout {
            width,
            breakpoint,
            hero,
            sections,
            tiles: builder.tiles,
            height: y + SECTION_GAP,
        }
    }

    /// First row of the section carrying `anchor`.
    pub fn anchor_offset(&self, anchor: &str) -> Option<u16> {
        self.sections
            .iter()
            .find(|s| s.anchor == Some(anchor))
            .map(|s| s.rect.y)
    }

    /// Tile under an absolute page position.
    pub fn hit(&self, x: u16, y: u16) -> Option<(usize, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| tile.rect.contains(x, y))
    }

    pub fn card_tiles(&self, section: usize) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(move |t| matches!(t.kind, TileKind::Card { section: s, .. } if s == section))
    }
}

struct Builder {
    breakpoint: Breakpoint,
    left: u16,
    content_width: u16,
    tiles: Vec<Tile>,
}

impl Builder {
    fn hero(&mut self, page: &Page) -> HeroLayout {
        let hero = &page.hero;
        let text_width = self.content_width.min(100);
        let text_left = self.left + (self.content_width - text_width) / 2;
        let tagline = wrap_text(hero.tagline, text_width as usize);

        let mut y = 1;
        let text_top = y;
        if hero.badge.is_some() {
            y += 2;
        }
        // headline, blank line, tagline, blank line
        y += 2 + tagline.len() as u16 + 1;
        let text = Rect::new(text_left, text_top, text_width, y - text_top);

        if !hero.actions.is_empty() {
            y += self.actions(hero.actions, None, y);
            y += ROW_GAP;
        }

        if !hero.quick_access.is_empty() {
            let columns = QUICK_ACCESS_COLUMNS.at(self.breakpoint);
            let contents: Vec<CardContent> = hero
                .quick_access
                .iter()
                .map(card::quick_access_content)
                .collect();
            let items = vec![GridItem::SINGLE; contents.len()];
            let placements = place(&items, columns);
            let rects = self.grid_rects(&placements, &contents, columns, y);
            for (item, (rect, tile)) in rects.into_iter().zip(hero.quick_access).enumerate() {
                self.tiles.push(Tile {
                    rect,
                    kind: TileKind::QuickAccess { item },
                    label: tile.title,
                    target: tile.target,
                    featured: false,
                });
            }
            y = self.tiles.iter().map(|t| t.rect.bottom()).max().unwrap_or(y) + ROW_GAP;
        }

        HeroLayout {
            rect: Rect::new(self.left, 0, self.content_width, y + 1),
            text,
            tagline,
        }
    }

    /// Lay out a section body's cards starting at row `top`. Returns the
    /// height used.
    fn grid(&mut self, body: &SectionBody, section: usize, top: u16) -> u16 {
        let columns = body_columns(body).at(self.breakpoint);
        let contents: Vec<CardContent> = (0..body.card_count())
            .map_while(|i| card_content(body, i))
            .collect();
        let featured: Vec<bool> = match body {
            SectionBody::Articles(articles) => articles.iter().map(|a| a.featured).collect(),
            _ => vec![false; contents.len()],
        };
        let spans_allowed = self.breakpoint != Breakpoint::Mobile;
        let items: Vec<GridItem> = featured
            .iter()
            .map(|f| {
                if *f && spans_allowed {
                    GridItem {
                        col_span: 2,
                        row_span: 2,
                    }
                } else {
                    GridItem::SINGLE
                }
            })
            .collect();

        let placements = place(&items, columns);
        let rects = self.grid_rects(&placements, &contents, columns, top);
        let titles = body.titles();
        let mut bottom = top;
        for (item, rect) in rects.into_iter().enumerate() {
            bottom = bottom.max(rect.bottom());
            self.tiles.push(Tile {
                rect,
                kind: TileKind::Card { section, item },
                label: titles.get(item).copied().unwrap_or_default(),
                target: card_target(body, item),
                featured: featured.get(item).copied().unwrap_or(false),
            });
        }
        bottom - top
    }

    /// Absolute rects for placed cards. Rows share one height, the tallest
    /// single-row card, so grids line up.
    fn grid_rects(
        &self,
        placements: &[Placement],
        contents: &[CardContent],
        columns: u16,
        top: u16,
    ) -> Vec<Rect> {
        let gap = self.breakpoint.column_gap();
        let cell_width = self
            .content_width
            .saturating_sub(gap * (columns - 1))
            / columns;
        let span_width = |span: u16| span * cell_width + (span - 1) * gap;
        let row_height = placements
            .iter()
            .zip(contents)
            .filter(|(p, _)| p.row_span == 1)
            .map(|(p, c)| c.height(span_width(p.col_span)))
            .max()
            .or_else(|| contents.iter().map(|c| c.height(cell_width)).max())
            .unwrap_or(card::BORDER_ROWS);

        placements
            .iter()
            .map(|p| {
                Rect::new(
                    self.left + p.column * (cell_width + gap),
                    top + p.row * (row_height + ROW_GAP),
                    span_width(p.col_span),
                    p.row_span * row_height + (p.row_span - 1) * ROW_GAP,
                )
            })
            .collect()
    }

    /// Flow buttons left to right, wrapping when the row is full. Returns
    /// the height used.
    fn actions(
        &mut self,
        actions: &'static [cybercell_types::CallToAction],
        section: Option<usize>,
        top: u16,
    ) -> u16 {
        let gap = 2;
        let rows = flow_rows(actions, self.content_width, gap);
        let mut y = top;
        let mut item = 0;
        for row in &rows {
            let row_width: u16 = row.iter().map(|a| button_width(a)).sum::<u16>()
                + gap * (row.len() as u16 - 1);
            let mut x = self.left + self.content_width.saturating_sub(row_width) / 2;
            for action in row {
                let width = button_width(action).min(self.content_width);
                self.tiles.push(Tile {
                    rect: Rect::new(x, y, width, BUTTON_HEIGHT),
                    kind: TileKind::Action {
                        section,
                        item,
                        primary: action.primary,
                    },
                    label: action.label,
                    target: action.target,
                    featured: false,
                });
                x += width + gap;
                item += 1;
            }
            y += BUTTON_HEIGHT;
        }
        y - top
    }
}

fn flow_rows(
    actions: &'static [cybercell_types::CallToAction],
    width: u16,
    gap: u16,
) -> Vec<Vec<&'static cybercell_types::CallToAction>> {
    let mut rows: Vec<Vec<&cybercell_types::CallToAction>> = Vec::new();
    let mut used = 0;
    for action in actions {
        let w = button_width(action);
        match rows.last_mut() {
            Some(row) if used + gap + w <= width => {
                row.push(action);
                used += gap + w;
            }
            _ => {
                rows.push(vec![action]);
                used = w;
            }
        }
    }
    rows
}
