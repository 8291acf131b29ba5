//! Plain-text rendering of display descriptions for the terminal

use std::fmt::Write;

use crate::display::{DashboardPanel, DisplayDescription, Field, ValueKind};

/// Text of a field as shown in a terminal cell
fn cell_text(field: &Field) -> String {
    match &field.kind {
        ValueKind::Status { .. } | ValueKind::Priority { .. } if !field.value.is_empty() => {
            format!("[{}]", field.value)
        }
        ValueKind::Link => format!("{} <{}>", field.display_text(), field.value),
        ValueKind::Mailto => format!("<{}>", field.value),
        _ => field.value.clone(),
    }
}

fn format_row<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn line(field: &Field) -> String {
    format!("{}: {}", field.label, cell_text(field))
}

fn write_panel(out: &mut String, panel: &DashboardPanel) {
    let _ = writeln!(out, "== {} ==", panel.title);
    if panel.items.is_empty() {
        let _ = writeln!(out, "  {}", panel.empty_message);
    }
    for item in &panel.items {
        match &item.badge {
            Some(badge) => {
                let _ = writeln!(out, "  {} {}", item.title, cell_text(badge));
            }
            None => {
                let _ = writeln!(out, "  {}", item.title);
            }
        }
        let _ = writeln!(out, "    {}", item.detail);
    }
    out.push('\n');
}

pub fn render_text(description: &DisplayDescription) -> String {
    let mut out = String::new();

    match description {
        DisplayDescription::Empty { message } => {
            let _ = writeln!(out, "{}", message);
        }

        DisplayDescription::Table { columns, rows } => {
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|row| row.iter().map(cell_text).collect())
                .collect();

            let widths: Vec<usize> = columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    cells
                        .iter()
                        .filter_map(|row| row.get(i))
                        .map(|c| c.chars().count())
                        .chain(std::iter::once(column.chars().count()))
                        .max()
                        .unwrap_or(0)
                })
                .collect();

            let _ = writeln!(out, "{}", format_row(columns.iter().map(String::as_str), &widths));
            let _ = writeln!(
                out,
                "{}",
                widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")
            );
            for row in &cells {
                let _ = writeln!(out, "{}", format_row(row.iter().map(String::as_str), &widths));
            }
        }

        DisplayDescription::Board { group_by, groups } => {
            for group in groups {
                let _ = writeln!(out, "## {}: {} ({})", group_by, group.key, group.cards.len());
                for card in &group.cards {
                    let mut fields = card.fields.iter();
                    if let Some(first) = fields.next() {
                        let _ = writeln!(out, "  - {}", line(first));
                    }
                    for field in fields {
                        let _ = writeln!(out, "    {}", line(field));
                    }
                }
                out.push('\n');
            }
        }

        DisplayDescription::Gallery { group_by, cards } => {
            for card in cards {
                let _ = writeln!(out, "+ {} ({}: {})", card.title, group_by, card.group);
                for field in &card.fields {
                    let _ = writeln!(out, "  {}", line(field));
                }
                out.push('\n');
            }
        }

        DisplayDescription::Calendar { entries, .. } => {
            let width = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
            for entry in entries {
                let _ = writeln!(out, "{:>width$}  {}", entry.date, entry.event, width = width);
            }
        }

        DisplayDescription::Dashboard(summary) => {
            write_panel(&mut out, &summary.recent_announcements);
            write_panel(&mut out, &summary.open_tasks);
            write_panel(&mut out, &summary.upcoming_meetings);

            let stats = &summary.stats;
            let _ = writeln!(out, "== Quick Stats ==");
            let _ = writeln!(out, "  {} Announcements", stats.total_announcements);
            let _ = writeln!(out, "  {} Pending Tasks", stats.pending_tasks);
            let _ = writeln!(out, "  {} Interns", stats.total_interns);
            let _ = writeln!(out, "  {} Upcoming Meetings", stats.upcoming_meetings);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{CalendarEntry, GalleryCard};

    #[test]
    fn table_aligns_columns() {
        let description = DisplayDescription::Table {
            columns: vec!["Task".into(), "Status".into()],
            rows: vec![
                vec![Field::plain("Task", "Read handbook"), Field::status("Status", "Done")],
                vec![Field::plain("Task", "IT"), Field::status("Status", "Not Started")],
            ],
        };

        let text = render_text(&description);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Task          | Status");
        assert_eq!(lines[2], "Read handbook | [Done]");
        assert_eq!(lines[3], "IT            | [Not Started]");
    }

    #[test]
    fn gallery_shows_links_and_mail() {
        let description = DisplayDescription::Gallery {
            group_by: "Area".into(),
            cards: vec![GalleryCard {
                title: "Mike Chen".into(),
                group: "Engineering".into(),
                fields: vec![Field::mailto("Email", "mike@freefuse.com"), Field::link("Link", "https://x")],
            }],
        };

        let text = render_text(&description);
        assert!(text.contains("+ Mike Chen (Area: Engineering)"));
        assert!(text.contains("Email: <mike@freefuse.com>"));
        assert!(text.contains("Link: View <https://x>"));
    }

    #[test]
    fn calendar_lists_entries() {
        let description = DisplayDescription::Calendar {
            date_field: "Date".into(),
            entries: vec![CalendarEntry { date: "9/1/2025".into(), event: "Standup".into() }],
        };
        assert_eq!(render_text(&description), "9/1/2025  Standup\n");
    }

    #[test]
    fn empty_state_prints_message() {
        assert_eq!(render_text(&DisplayDescription::empty()), "No data available\n");
    }
}
