//! Home dashboard summary, derived from the full unfiltered dataset

use std::cmp::Reverse;

use chrono::NaiveDateTime;

use crate::data_types::{Dataset, Record, ResourceKind};
use crate::dates::{parse_date, parse_date_time};
use crate::display::{DashboardItem, DashboardPanel, DashboardStats, DashboardSummary, Field};

pub const PANEL_SIZE: usize = 3;

pub const NO_RECENT_ANNOUNCEMENTS: &str = "No recent announcements";
pub const NO_PENDING_TASKS: &str = "No pending tasks";
pub const NO_UPCOMING_MEETINGS: &str = "No upcoming meetings";

/// Published announcements, newest first. Undated ones go last.
pub fn recent_announcements(records: &[Record], limit: usize) -> Vec<&Record> {
    let mut published: Vec<&Record> = records
        .iter()
        .filter(|r| r.get("Status") == "Published")
        .collect();
    published.sort_by_key(|r| {
        let date = parse_date(r.get("Publish Date"));
        (date.is_none(), Reverse(date))
    });
    published.truncate(limit);
    published
}

/// Tasks not yet done, earliest due date first. Tasks without a usable due
/// date go last, keeping their source order.
pub fn open_tasks(records: &[Record], limit: usize) -> Vec<&Record> {
    let mut open: Vec<&Record> = records.iter().filter(|r| is_open_task(r)).collect();
    open.sort_by_key(|r| {
        let date = parse_date(r.get("Due"));
        (date.is_none(), date)
    });
    open.truncate(limit);
    open
}

/// Meetings that haven't started yet, soonest first
pub fn upcoming_meetings(records: &[Record], now: NaiveDateTime, limit: usize) -> Vec<&Record> {
    let mut upcoming: Vec<(NaiveDateTime, &Record)> = records
        .iter()
        .filter_map(|r| meeting_start(r, now).map(|start| (start, r)))
        .collect();
    upcoming.sort_by_key(|(start, _)| *start);
    upcoming.into_iter().take(limit).map(|(_, r)| r).collect()
}

fn is_open_task(record: &Record) -> bool {
    record.get("Status") != "Done"
}

/// Start of the meeting if it is not before `now`. A timed value is compared
/// exactly; a bare date counts as upcoming for the whole day.
fn meeting_start(record: &Record, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let value = record.non_empty("Date")?;
    match parse_date_time(value) {
        Some(start) => (start >= now).then_some(start),
        None => parse_date(value)
            .filter(|date| *date >= now.date())
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
    }
}

pub fn stats(dataset: &Dataset, now: NaiveDateTime) -> DashboardStats {
    DashboardStats {
        total_announcements: dataset.records(ResourceKind::Announcements).len(),
        pending_tasks: dataset
            .records(ResourceKind::Tasks)
            .iter()
            .filter(|r| is_open_task(r))
            .count(),
        total_interns: dataset.records(ResourceKind::Interns).len(),
        upcoming_meetings: dataset
            .records(ResourceKind::Meetings)
            .iter()
            .filter(|r| meeting_start(r, now).is_some())
            .count(),
    }
}

pub fn summarize(dataset: &Dataset, now: NaiveDateTime) -> DashboardSummary {
    let announcements = recent_announcements(dataset.records(ResourceKind::Announcements), PANEL_SIZE)
        .into_iter()
        .map(|r| DashboardItem {
            title: r.get("Title").to_string(),
            detail: r.non_empty("Summary").unwrap_or("No summary available").to_string(),
            badge: Some(Field::priority("Priority", r.get("Priority"))),
        })
        .collect();

    let tasks = open_tasks(dataset.records(ResourceKind::Tasks), PANEL_SIZE)
        .into_iter()
        .map(|r| DashboardItem {
            title: r.get("Task").to_string(),
            detail: format!("Due: {}", r.non_empty("Due").unwrap_or("No due date")),
            badge: Some(Field::status("Status", r.get("Status"))),
        })
        .collect();

    let meetings = upcoming_meetings(dataset.records(ResourceKind::Meetings), now, PANEL_SIZE)
        .into_iter()
        .map(|r| DashboardItem {
            title: r.get("Title").to_string(),
            detail: format!("{} • {}", r.get("Date"), r.get("Attendees")),
            badge: None,
        })
        .collect();

    DashboardSummary {
        recent_announcements: DashboardPanel {
            title: "Recent Announcements".to_string(),
            items: announcements,
            empty_message: NO_RECENT_ANNOUNCEMENTS.to_string(),
        },
        open_tasks: DashboardPanel {
            title: "My Tasks".to_string(),
            items: tasks,
            empty_message: NO_PENDING_TASKS.to_string(),
        },
        upcoming_meetings: DashboardPanel {
            title: "Upcoming Meetings".to_string(),
            items: meetings,
            empty_message: NO_UPCOMING_MEETINGS.to_string(),
        },
        stats: stats(dataset, now),
    }
}
