use eu5data::{DatasetStats, Direction};
use eu5values_core::{Arrangement, DirectionView, ItemView, ValueSummary, ValueView};
use serde::Serialize;
use std::io::Write;

/// Human-readable rendering of one value pair.
pub fn print_view(view: &ValueView, writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "\n=== {} ===", view.name)?;
    if !view.available {
        writeln!(writer, "(not yet available at the selected age)")?;
    }
    if let Some(conditions) = &view.conditions {
        writeln!(writer, "Unlock conditions: {}", conditions)?;
    }

    if !view.active_filters.is_empty() || view.search.is_some() {
        let mut parts: Vec<String> = view
            .active_filters
            .iter()
            .map(|f| format!("{}: {}", f.dimension.label(), f.label))
            .collect();
        if let Some(search) = &view.search {
            parts.push(format!("Search: \"{}\"", search));
        }
        writeln!(writer, "Filters: {}", parts.join(" | "))?;
    }
    writeln!(writer, "Sort: {}", view.sort)?;

    for direction in Direction::BOTH {
        print_direction(view.direction(direction), writer)?;
    }

    Ok(())
}

fn print_direction(direction: &DirectionView, writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "--- Toward {} ({} of {}) ---",
        direction.pole, direction.matching, direction.total
    )?;

    if direction.items.is_empty() {
        writeln!(writer, "  (nothing matches)")?;
        return Ok(());
    }

    match &direction.items {
        Arrangement::Grouped(groups) => {
            for group in groups {
                writeln!(writer, "  [{}] ({})", group.label, group.items.len())?;
                for item in &group.items {
                    print_item(item, "    ", writer)?;
                }
            }
        }
        Arrangement::Flat(items) => {
            for item in items {
                print_item(item, "  ", writer)?;
            }
        }
    }

    Ok(())
}

fn print_item(item: &ItemView, indent: &str, writer: &mut impl Write) -> std::io::Result<()> {
    write!(
        writer,
        "{}{} [{}] {} ({})",
        indent,
        item.name,
        item.type_label,
        item.strength,
        item.tier.label()
    )?;
    if item.one_time {
        write!(writer, " once")?;
    }
    if item.major {
        write!(writer, " major")?;
    }
    if item.unique {
        write!(writer, " unique")?;
    }
    writeln!(writer)?;

    let detail = format!("{}    ", indent);
    if let Some(category) = &item.category {
        writeln!(writer, "{}category: {}", detail, category)?;
    }
    if !item.requirements.is_empty() {
        let tags: Vec<&str> = item.requirements.iter().map(|t| t.label.as_str()).collect();
        writeln!(writer, "{}requires: {}", detail, tags.join(", "))?;
    }
    if !item.prerequisites.is_empty() {
        writeln!(writer, "{}needs: {}", detail, item.prerequisites.join(", "))?;
    }
    if !item.other_effects.shown.is_empty() {
        write!(
            writer,
            "{}also: {}",
            detail,
            item.other_effects.shown.join(", ")
        )?;
        if item.other_effects.more > 0 {
            write!(writer, " +{} more", item.other_effects.more)?;
        }
        writeln!(writer)?;
    }
    if !item.estate_preferences.is_empty() {
        writeln!(
            writer,
            "{}favoured by: {}",
            detail,
            item.estate_preferences.join(", ")
        )?;
    }
    if let Some(source) = &item.source {
        writeln!(writer, "{}source: {}", detail, source)?;
    }

    Ok(())
}

/// The value picker as a table.
pub fn print_overview(rows: &[ValueSummary], writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "\n=== Societal Values ===")?;
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);

    for row in rows {
        writeln!(
            writer,
            "{:<width$}  {:>4} | {:<4} {}",
            row.name,
            row.left_matching,
            row.right_matching,
            if row.available { "" } else { "(locked)" },
            width = width
        )?;
    }

    Ok(())
}

/// One row of a reference table listing.
#[derive(Debug, Serialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Entry {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}

pub fn print_entries(title: &str, entries: &[Entry], writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "\n=== {} ({}) ===", title, entries.len())?;
    let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);

    for entry in entries {
        write!(writer, "{:<width$}  {}", entry.id, entry.name, width = width)?;
        if let Some(detail) = &entry.detail {
            write!(writer, " ({})", detail)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

pub fn print_stats(stats: &DatasetStats, writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "\n=== Dataset Info ===")?;
    writeln!(writer, "Value pairs: {}", stats.values)?;
    writeln!(writer, "Ages: {}", stats.ages)?;
    writeln!(writer, "Governments: {}", stats.governments)?;
    writeln!(writer, "Religions: {}", stats.religions)?;
    writeln!(writer, "Countries: {}", stats.countries)?;
    writeln!(writer, "Estates: {}", stats.estates)?;
    writeln!(writer, "Movers: {}", stats.movers)?;

    if !stats.by_type.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Movers by type:")?;
        for (mover_type, count) in &stats.by_type {
            writeln!(writer, "  {}: {}", mover_type.label(), count)?;
        }
    }

    Ok(())
}

/// Pretty JSON for any report payload.
pub fn json_report<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
