//! Terminal rendering for CLI commands
//!
//! Every formatter returns a string: a comfy-table for humans or pretty JSON
//! for scripts.

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use museum_tours_core::types::{MuseumObject, Theme, TourSize};
use serde::Serialize;

/// Pretty JSON, or an empty value of the right shape if serialization fails
pub fn to_json<T: Serialize + ?Sized>(value: &T, empty: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| empty.to_string())
}

fn header(table: &mut Table, columns: &[&str], no_color: bool) {
    if no_color {
        table.set_header(columns.to_vec());
    } else {
        table.set_header(
            columns
                .iter()
                .map(|c| Cell::new(c).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
}

/// Theme list as table (human) or JSON
pub fn format_theme_table(themes: &[Theme], json: bool, no_color: bool) -> String {
    if json {
        return to_json(themes, "[]");
    }

    if themes.is_empty() {
        return "No themes found.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    header(&mut table, &["ID", "Name", "Description"], no_color);

    for theme in themes {
        table.add_row(Row::from(vec![
            theme.id.as_str(),
            theme.name.as_str(),
            &truncate(&theme.description, 60),
        ]));
    }

    table.to_string()
}

/// Single theme with the tour sizes to pick from
pub fn format_theme(theme: &Theme, json: bool) -> String {
    if json {
        return to_json(theme, "{}");
    }

    let sizes: Vec<_> = TourSize::ALL.iter().map(|s| s.as_str()).collect();
    let lines = [
        format!("Theme:        {}", theme.name),
        format!("ID:           {}", theme.id),
        format!("Description:  {}", theme.description),
        format!("Image:        {}", theme.image),
        format!("Tour sizes:   {}", sizes.join(", ")),
    ];

    lines.join("\n")
}

/// Tour itinerary: numbered stops in order
pub fn format_tour_table(
    theme: &Theme,
    size: TourSize,
    objects: &[MuseumObject],
    json: bool,
    no_color: bool,
) -> String {
    if json {
        return to_json(objects, "[]");
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    header(&mut table, &["#", "Title", "Location", "Object ID"], no_color);

    for (index, object) in objects.iter().enumerate() {
        table.add_row(Row::from(vec![
            (index + 1).to_string(),
            object.title.clone(),
            object.gallery_location.clone(),
            object.id.clone(),
        ]));
    }

    format!("{} Tour - {} Itinerary\n{}", theme.name, size, table)
}

/// Object detail (human or JSON)
pub fn format_object(object: &MuseumObject, json: bool) -> String {
    if json {
        return to_json(object, "{}");
    }

    let lines = [
        format!("Title:        {}", object.title),
        format!("ID:           {}", object.id),
        format!("Location:     {}", object.gallery_location),
        format!("Summary:      {}", object.short_description),
        format!("Background:   {}", object.contextual_background),
        format!(
            "Map position: top {}, left {}",
            object.map_position.top, object.map_position.left
        ),
    ];

    lines.join("\n")
}

fn truncate(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        // Char-based so multi-byte text never splits
        s.chars().take(max - 1).collect::<String>() + "…"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use museum_tours_core::types::FixtureCatalog;

    #[test]
    fn test_tour_table_lists_stops_in_order() {
        let catalog = FixtureCatalog::builtin();
        let theme = catalog.theme("roman-empire").unwrap();
        let objects = catalog.tour_objects("roman-empire", TourSize::Small);

        let output = format_tour_table(theme, TourSize::Small, &objects, false, true);

        assert!(output.starts_with("The Roman Empire Tour - Small Itinerary"));
        let helmet = output.find("Legionary Helmet").unwrap();
        let bust = output.find("Bust of Augustus").unwrap();
        assert!(helmet < bust);
    }

    #[test]
    fn test_tour_json_is_camel_case_array() {
        let catalog = FixtureCatalog::builtin();
        let theme = catalog.theme("ancient-egypt").unwrap();
        let objects = catalog.tour_objects("ancient-egypt", TourSize::Medium);

        let output = format_tour_table(theme, TourSize::Medium, &objects, true, true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value.as_array().map(|a| a.len()), Some(3));
        assert!(value[0]["galleryLocation"].is_string());
    }

    #[test]
    fn test_empty_theme_list() {
        assert_eq!(format_theme_table(&[], false, true), "No themes found.");
        assert_eq!(format_theme_table(&[], true, true), "[]");
    }

    #[test]
    fn test_theme_detail_lists_sizes() {
        let catalog = FixtureCatalog::builtin();
        let output = format_theme(catalog.theme("renaissance-art").unwrap(), false);
        assert!(output.contains("Tour sizes:   Small, Medium, Large"));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Bust of Augustus", 40), "Bust of Augustus");
        assert_eq!(truncate("Égypte ancienne", 6), "Égypt…");
    }
}
