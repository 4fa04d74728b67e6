//! Card content, medium independent.
//!
//! Every tile a page shows is described here as an optional icon, badge and
//! gradient plus a list of text blocks. The layout measures tiles from the
//! same blocks a frontend draws, so heights and drawn lines always agree.

use cybercell_content::{Callout, SectionBody};
use cybercell_types::{
    ArticleSummary, BadgeTone, CallToAction, Gradient, Hue, Icon, QuickAccess, Rating, Target,
};
use serde::Serialize;

use crate::dispatch::route_for_category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Large title of a featured card
    Headline,
    Title,
    Body,
    Meta,
    Accent,
    Bullet,
    Link,
    Stars,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub role: TextRole,
    pub text: String,
}

impl TextBlock {
    fn new(role: TextRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardContent {
    pub icon: Option<Icon>,
    pub badge: Option<Badge>,
    pub gradient: Option<Gradient>,
    pub blocks: Vec<TextBlock>,
}

/// Rows a card border takes, top and bottom together.
pub const BORDER_ROWS: u16 = 2;
/// Columns a card border and its padding take, left and right together.
pub const BORDER_COLS: u16 = 4;

impl CardContent {
    fn new() -> Self {
        Self {
            icon: None,
            badge: None,
            gradient: None,
            blocks: Vec::new(),
        }
    }

    fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    fn badge(mut self, label: &'static str, tone: BadgeTone) -> Self {
        self.badge = Some(Badge { label, tone });
        self
    }

    fn gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    fn block(mut self, role: TextRole, text: impl Into<String>) -> Self {
        self.blocks.push(TextBlock::new(role, text));
        self
    }

    fn blocks<'a>(mut self, role: TextRole, texts: impl IntoIterator<Item = &'a str>) -> Self {
        self.blocks
            .extend(texts.into_iter().map(|t| TextBlock::new(role, t)));
        self
    }

    /// Whether the card opens with an icon/badge line.
    pub fn has_header(&self) -> bool {
        self.icon.is_some() || self.badge.is_some()
    }

    /// Wrapped text lines for an inner width, header line excluded.
    pub fn lines(&self, inner_width: u16) -> Vec<(TextRole, String)> {
        self.blocks
            .iter()
            .flat_map(|block| {
                let width = match block.role {
                    TextRole::Bullet => inner_width.saturating_sub(2),
                    _ => inner_width,
                };
                wrap_text(&block.text, width as usize)
                    .into_iter()
                    .map(move |line| (block.role, line))
            })
            .collect()
    }

    /// Outer height of the card, borders included, at the given outer width.
    pub fn height(&self, outer_width: u16) -> u16 {
        let inner = outer_width.saturating_sub(BORDER_COLS);
        let header = u16::from(self.has_header());
        BORDER_ROWS + header + self.lines(inner).len() as u16
    }
}

/// Content of the `index`-th card of a section body. Library bodies are
/// indexed across all their resources.
pub fn card_content(body: &SectionBody, index: usize) -> Option<CardContent> {
    let card = match body {
        SectionBody::Stats(items) => {
            let stat = items.get(index)?;
            CardContent::new()
                .icon(stat.icon)
                .block(TextRole::Accent, stat.number)
                .block(TextRole::Body, stat.label)
        }
        SectionBody::Trending(items) => {
            let topic = items.get(index)?;
            CardContent::new()
                .icon(topic.icon)
                .gradient(topic.gradient)
                .block(TextRole::Title, topic.title)
                .block(TextRole::Body, topic.blurb)
        }
        SectionBody::Articles(items) => article_content(items.get(index)?),
        SectionBody::Principles(items) => {
            let principle = items.get(index)?;
            CardContent::new()
                .icon(principle.icon)
                .block(TextRole::Title, principle.title)
                .block(TextRole::Body, principle.description)
        }
        SectionBody::Topics(items) => {
            let topic = items.get(index)?;
            let source = match topic.link {
                Some(_) => TextRole::Link,
                None => TextRole::Meta,
            };
            CardContent::new()
                .icon(topic.icon)
                .block(TextRole::Title, topic.title)
                .block(TextRole::Body, topic.description)
                .blocks(TextRole::Bullet, topic.points.iter().copied())
                .block(source, format!("Source: {}", topic.source))
        }
        SectionBody::Threats(items) => {
            let threat = items.get(index)?;
            CardContent::new()
                .icon(threat.icon)
                .badge(threat.severity.label(), threat.severity.tone())
                .gradient(threat.gradient)
                .block(TextRole::Title, threat.title)
                .block(TextRole::Body, threat.description)
                .block(TextRole::Meta, format!("Impact: {}", threat.impact))
                .block(TextRole::Accent, threat.trend)
        }
        SectionBody::Timeline(items) => {
            let event = items.get(index)?;
            CardContent::new()
                .badge(event.short_month(), BadgeTone::Gray)
                .block(TextRole::Title, event.event)
                .block(TextRole::Body, event.impact)
                .block(TextRole::Meta, event.month)
        }
        SectionBody::Strategies(items) => {
            let strategy = items.get(index)?;
            CardContent::new()
                .icon(strategy.icon)
                .badge(strategy.complexity.label(), strategy.complexity.tone())
                .block(TextRole::Title, strategy.title)
                .block(
                    TextRole::Accent,
                    format!("{} effective", strategy.effectiveness),
                )
                .block(TextRole::Meta, strategy.category)
                .block(TextRole::Body, strategy.description)
                .blocks(TextRole::Bullet, strategy.techniques.iter().copied())
        }
        SectionBody::Frameworks(items) => {
            let framework = items.get(index)?;
            CardContent::new()
                .block(TextRole::Title, framework.name)
                .block(TextRole::Body, framework.description)
                .block(TextRole::Meta, framework.pillars.join(" · "))
        }
        SectionBody::Library(groups) => {
            let (group, resource) = groups
                .iter()
                .flat_map(|g| g.resources.iter().map(move |r| (g, r)))
                .nth(index)?;
            CardContent::new()
                .icon(group.icon)
                .gradient(group.gradient)
                .block(TextRole::Meta, group.title)
                .block(TextRole::Title, resource.title)
                .block(TextRole::Body, resource.description)
                .block(
                    TextRole::Meta,
                    format!("{} · Updated {}", resource.kind, resource.last_updated),
                )
                .block(TextRole::Stars, stars(resource.rating))
        }
        SectionBody::Books(items) => {
            let book = items.get(index)?;
            CardContent::new()
                .icon(Icon::BookOpen)
                .badge(book.category, BadgeTone::Gray)
                .block(TextRole::Title, book.title)
                .block(TextRole::Meta, format!("by {}", book.author))
                .block(TextRole::Body, book.description)
        }
        SectionBody::InfoCards(items) => {
            let info = items.get(index)?;
            let mut card = CardContent::new().block(TextRole::Title, info.title);
            if let Some(icon) = info.icon {
                card = card.icon(icon);
            }
            for line in info.lines {
                let role = match line.link {
                    Some(_) => TextRole::Link,
                    None => TextRole::Body,
                };
                card = card.block(role, line.text);
            }
            card
        }
        SectionBody::Callout(callout) if index == 0 => callout_content(callout),
        SectionBody::Callout(_) => return None,
    };
    Some(card)
}

/// Where clicking the `index`-th card of a body leads.
pub fn card_target(body: &SectionBody, index: usize) -> Target {
    let target = match body {
        SectionBody::Trending(items) => items.get(index).map(|t| t.target),
        SectionBody::Articles(items) => items
            .get(index)
            .map(|a| Target::route(route_for_category(a.category))),
        SectionBody::Topics(items) => items
            .get(index)
            .and_then(|t| t.link)
            .map(Target::external),
        SectionBody::Library(groups) => groups
            .iter()
            .flat_map(|g| g.resources.iter())
            .nth(index)
            .map(|r| Target::external(r.url)),
        SectionBody::InfoCards(items) => items
            .get(index)
            .and_then(|card| card.lines.iter().find_map(|line| line.link))
            .map(Target::external),
        _ => None,
    };
    target.unwrap_or(Target::None)
}

pub fn article_content(article: &ArticleSummary) -> CardContent {
    let title_role = if article.featured {
        TextRole::Headline
    } else {
        TextRole::Title
    };
    CardContent::new()
        .badge(article.category.label(), BadgeTone::Gray)
        .gradient(article.gradient_or_default())
        .block(title_role, article.title)
        .block(TextRole::Body, article.excerpt)
        .block(TextRole::Meta, format!("{} read", article.read_time))
}

pub fn quick_access_content(tile: &QuickAccess) -> CardContent {
    CardContent::new()
        .icon(tile.icon)
        .block(TextRole::Title, tile.title)
        .block(TextRole::Body, tile.blurb)
}

pub fn callout_content(callout: &Callout) -> CardContent {
    let gradient = if callout.urgent {
        Gradient::new(Hue::Red, Hue::Orange)
    } else {
        Gradient::DEFAULT
    };
    CardContent::new()
        .icon(callout.icon)
        .gradient(gradient)
        .block(TextRole::Title, callout.heading)
        .block(TextRole::Body, callout.text)
}

/// Outer width of a call-to-action button.
pub fn button_width(action: &CallToAction) -> u16 {
    action.label.chars().count() as u16 + BORDER_COLS + 2
}

/// Five stars, filled up to the rating.
pub fn stars(rating: Rating) -> String {
    rating
        .stars()
        .iter()
        .map(|filled| if *filled { '★' } else { '☆' })
        .collect()
}

/// Greedy word wrap. Words longer than `width` are split. Empty text has
/// no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybercell_content::page;
    use cybercell_types::{Category, Route};

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("", 10), Vec::<String>::new());
        assert_eq!(wrap_text("Zero Trust", 20), vec!["Zero Trust"]);
        assert_eq!(
            wrap_text("Never trust, always verify", 12),
            vec!["Never trust,", "always", "verify"]
        );
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_card_height_counts_wrapped_lines() {
        let body = page(Route::Mitigation).sections[1].body;
        let card = card_content(&body, 0).unwrap();
        let wide = card.height(200);
        let narrow = card.height(24);
        assert_eq!(wide, BORDER_ROWS + 3);
        assert!(narrow > wide);
    }

    #[test]
    fn test_article_targets_follow_category() {
        let body = page(Route::Home).section("latest-intelligence").unwrap().body;
        let SectionBody::Articles(articles) = body else {
            panic!("latest intelligence should be articles");
        };
        for (i, article) in articles.iter().enumerate() {
            let expected = match article.category {
                Category::Awareness => Route::CyberAwareness,
                Category::Threats => Route::RecentThreats,
                Category::Mitigation => Route::Mitigation,
                Category::References => Route::References,
            };
            assert_eq!(card_target(&body, i), Target::route(expected));
        }
    }

    #[test]
    fn test_featured_article_uses_headline() {
        let body = page(Route::Home).section("latest-intelligence").unwrap().body;
        let featured = card_content(&body, 0).unwrap();
        assert_eq!(featured.blocks[0].role, TextRole::Headline);
        let regular = card_content(&body, 1).unwrap();
        assert_eq!(regular.blocks[0].role, TextRole::Title);
    }

    #[test]
    fn test_library_cards_are_flattened() {
        let body = page(Route::References).section("resource-library").unwrap().body;
        let last = card_content(&body, 11).unwrap();
        assert_eq!(last.blocks[1].text, "YARA Pattern Matching");
        assert_eq!(last.blocks[4].text, "★★★★☆");
        assert_eq!(
            card_target(&body, 0),
            Target::external("https://nist.gov/cyberframework")
        );
        assert!(card_content(&body, 12).is_none());
    }

    #[test]
    fn test_severity_badges() {
        let body = page(Route::RecentThreats).sections[0].body;
        let card = card_content(&body, 0).unwrap();
        assert_eq!(
            card.badge,
            Some(Badge {
                label: "Critical",
                tone: BadgeTone::Red
            })
        );
    }

    #[test]
    fn test_decorative_cards_have_no_target() {
        let body = page(Route::Mitigation).sections[0].body;
        assert_eq!(card_target(&body, 0), Target::None);
    }
}
