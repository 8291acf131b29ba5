//! Projection of filtered records into display descriptions

use chrono::{Local, NaiveDateTime};

use crate::dashboard;
use crate::data_types::{Dataset, Record, ResourceKind};
use crate::dates::short_date;
use crate::display::{BoardGroup, CalendarEntry, Card, DisplayDescription, Field, GalleryCard, NO_TITLE};
use crate::filter::{filter_records, group_key, group_records};
use crate::selection::{layout, Projection, Section, SelectionState};

/// Field for a table cell or board card line
fn cell(record: &Record, column: &str, links: bool) -> Field {
    let value = record.get(column);
    match column {
        "Status" => Field::status(column, value),
        "Priority" => Field::priority(column, value),
        "Link" if links && !value.is_empty() => Field::link(column, value),
        _ => Field::plain(column, value),
    }
}

pub fn project_table(records: &[&Record], columns: &[&str]) -> DisplayDescription {
    if records.is_empty() {
        return DisplayDescription::empty();
    }

    DisplayDescription::Table {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: records
            .iter()
            .map(|record| columns.iter().map(|column| cell(record, column, true)).collect())
            .collect(),
    }
}

pub fn project_board(records: &[&Record], group_by: &str, columns: &[&str]) -> DisplayDescription {
    if records.is_empty() {
        return DisplayDescription::empty();
    }

    let groups = group_records(records, group_by)
        .into_iter()
        .map(|(key, members)| BoardGroup {
            key,
            cards: members
                .into_iter()
                .map(|record| Card {
                    fields: columns.iter().map(|column| cell(record, column, false)).collect(),
                })
                .collect(),
        })
        .collect();

    DisplayDescription::Board {
        group_by: group_by.to_string(),
        groups,
    }
}

/// One flat card per record in filtered order. The group-by value is carried
/// on each card as a tag rather than used for layout.
pub fn project_gallery(records: &[&Record], group_by: &str, columns: &[&str]) -> DisplayDescription {
    if records.is_empty() {
        return DisplayDescription::empty();
    }

    let cards = records
        .iter()
        .map(|record| {
            let title = columns
                .first()
                .and_then(|column| record.non_empty(column))
                .unwrap_or(NO_TITLE)
                .to_string();

            let fields = columns
                .iter()
                .skip(1)
                .map(|column| {
                    let value = record.get(column);
                    match *column {
                        "Email" if !value.is_empty() => Field::mailto(*column, value),
                        "Link" if !value.is_empty() => Field::link(*column, value),
                        _ => Field::plain(*column, value),
                    }
                })
                .collect();

            GalleryCard {
                title,
                group: group_key(record, group_by).to_string(),
                fields,
            }
        })
        .collect();

    DisplayDescription::Gallery {
        group_by: group_by.to_string(),
        cards,
    }
}

/// Flat list of dated entries in filtered order; not a month grid
pub fn project_calendar(records: &[&Record], date_field: &str, columns: &[&str]) -> DisplayDescription {
    if records.is_empty() {
        return DisplayDescription::empty();
    }

    let entries = records
        .iter()
        .map(|record| CalendarEntry {
            date: short_date(record.get(date_field)),
            event: columns
                .first()
                .and_then(|column| record.non_empty(column))
                .unwrap_or(NO_TITLE)
                .to_string(),
        })
        .collect();

    DisplayDescription::Calendar {
        date_field: date_field.to_string(),
        entries,
    }
}

pub fn project(records: &[&Record], projection: &Projection) -> DisplayDescription {
    match *projection {
        Projection::Table { columns } => project_table(records, columns),
        Projection::Board { group_by, columns } => project_board(records, group_by, columns),
        Projection::Gallery { group_by, columns } => project_gallery(records, group_by, columns),
        Projection::Calendar { date_field, columns } => project_calendar(records, date_field, columns),
    }
}

/// Filter and project one resource according to `selection`
pub fn render_resource(dataset: &Dataset, kind: ResourceKind, selection: &SelectionState) -> DisplayDescription {
    let filters = selection.filters(kind);
    let records = filter_records(dataset.records(kind), &filters);
    let section = layout(kind);

    // selection only ever holds modes the section supports
    match section.projection(selection.view(kind)) {
        Some(projection) => project(&records, projection),
        None => DisplayDescription::empty(),
    }
}

/// Render the selection's current section at the current local time
pub fn render(dataset: &Dataset, selection: &SelectionState) -> DisplayDescription {
    render_at(dataset, selection, Local::now().naive_local())
}

pub fn render_at(dataset: &Dataset, selection: &SelectionState, now: NaiveDateTime) -> DisplayDescription {
    match selection.section() {
        Section::Dashboard => DisplayDescription::Dashboard(dashboard::summarize(dataset, now)),
        Section::Resource(kind) => render_resource(dataset, kind, selection),
    }
}
