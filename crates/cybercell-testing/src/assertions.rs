//! Assertions over the JSON output of the console commands.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the route a `render` or `resolve` result landed on.
pub fn assert_route(json: &Value, expected: &str) -> Result<()> {
    let route = json["content"]["route"]
        .as_str()
        .context("Expected 'content.route' string in JSON")?;

    if route != expected {
        anyhow::bail!("Expected route {}, got {}", expected, route);
    }
    Ok(())
}

/// Assert how many cards a rendered page shows in one section.
pub fn assert_section_cards(json: &Value, section_id: &str, expected: usize) -> Result<()> {
    let sections = json["content"]["sections"]
        .as_array()
        .context("Expected 'content.sections' array in JSON")?;

    let section = sections
        .iter()
        .find(|s| s["id"].as_str() == Some(section_id))
        .with_context(|| format!("Section {} not found", section_id))?;

    let count = section["card_count"]
        .as_u64()
        .with_context(|| format!("Section {} missing card_count", section_id))?;

    if count as usize != expected {
        anyhow::bail!(
            "Expected {} cards in section {}, got {}",
            expected,
            section_id,
            count
        );
    }
    Ok(())
}

/// Assert that exactly one nav link is active and that it is `name`.
pub fn assert_active_nav(json: &Value, name: Option<&str>) -> Result<()> {
    let nav = json["content"]["nav"]
        .as_array()
        .context("Expected 'content.nav' array in JSON")?;

    let active: Vec<&str> = nav
        .iter()
        .filter(|link| link["active"].as_bool() == Some(true))
        .filter_map(|link| link["name"].as_str())
        .collect();

    match name {
        Some(expected) if active == [expected] => Ok(()),
        None if active.is_empty() => Ok(()),
        _ => anyhow::bail!("Expected active nav {:?}, got {:?}", name, active),
    }
}

/// Assert that every tile lies inside the page width.
pub fn assert_tiles_fit(json: &Value) -> Result<()> {
    let width = json["content"]["width"]
        .as_u64()
        .context("Expected 'content.width' in JSON")?;
    let tiles = json["content"]["tiles"]
        .as_array()
        .context("Expected 'content.tiles' array in JSON")?;

    for (i, tile) in tiles.iter().enumerate() {
        let x = tile["rect"]["x"].as_u64().with_context(|| format!("Tile {} missing x", i))?;
        let w = tile["rect"]["width"]
            .as_u64()
            .with_context(|| format!("Tile {} missing width", i))?;
        if x + w > width {
            anyhow::bail!("Tile {} spans {}..{} past width {}", i, x, x + w, width);
        }
    }
    Ok(())
}
