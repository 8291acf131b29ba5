//! Filtering and grouping over borrowed records

use crate::data_types::Record;
use crate::display::NO_GROUP;
use crate::selection::Filters;

/// Records satisfying every non-empty filter, in their original order.
///
/// A record lacking a filtered field never matches that filter.
pub fn filter_records<'a>(records: &'a [Record], filters: &Filters) -> Vec<&'a Record> {
    let active: Vec<_> = filters.iter().filter(|(_, value)| !value.is_empty()).collect();

    records
        .iter()
        .filter(|record| {
            active.iter().all(|(field, filter)| {
                record
                    .value(field)
                    .map_or(false, |value| filter.matches(value))
            })
        })
        .collect()
}

/// Group key for `record`, with missing or empty values under [`NO_GROUP`]
pub fn group_key<'a>(record: &'a Record, field: &str) -> &'a str {
    record.non_empty(field).unwrap_or(NO_GROUP)
}

/// Partition `records` by `field`. Groups appear in order of first occurrence
/// and keep the record order within each group.
pub fn group_records<'a>(records: &[&'a Record], field: &str) -> Vec<(String, Vec<&'a Record>)> {
    let mut groups: Vec<(String, Vec<&'a Record>)> = Vec::new();

    for &record in records {
        let key = group_key(record, field);
        match groups.iter_mut().find(|(existing, _)| existing.as_str() == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key.to_string(), vec![record])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::FilterValue;
    use pretty_assertions::assert_eq;

    fn tasks() -> Vec<Record> {
        vec![
            Record::from_pairs([("Task", "A"), ("Status", "Done"), ("Assignee", "Xavier")]),
            Record::from_pairs([("Task", "B"), ("Status", "Not Started"), ("Assignee", "Yara")]),
            Record::from_pairs([("Task", "C"), ("Status", "Done"), ("Assignee", "yasmin")]),
            Record::from_pairs([("Task", "D")]),
        ]
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.get("Task").to_string()).collect()
    }

    #[test]
    fn no_filters_is_identity() {
        let records = tasks();
        let filtered = filter_records(&records, &Filters::new());
        assert_eq!(filtered.len(), records.len());
        assert!(filtered.iter().zip(records.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let records = tasks();
        let mut filters = Filters::new();
        filters.insert("Assignee".into(), FilterValue::Contains("YA".into()));
        assert_eq!(names(&filter_records(&records, &filters)), vec!["B", "C"]);
    }

    #[test]
    fn exact_requires_equality() {
        let records = tasks();
        let mut filters = Filters::new();
        filters.insert("Status".into(), FilterValue::Exact("done".into()));
        assert!(filter_records(&records, &filters).is_empty());

        filters.insert("Status".into(), FilterValue::Exact("Done".into()));
        assert_eq!(names(&filter_records(&records, &filters)), vec!["A", "C"]);
    }

    #[test]
    fn missing_field_never_matches() {
        let records = tasks();
        let mut filters = Filters::new();
        filters.insert("Status".into(), FilterValue::Contains("o".into()));
        let filtered = filter_records(&records, &filters);
        assert!(!names(&filtered).contains(&"D".to_string()));
    }

    #[test]
    fn empty_filter_values_are_ignored() {
        let records = tasks();
        let mut filters = Filters::new();
        filters.insert("Status".into(), FilterValue::Exact(String::new()));
        assert_eq!(filter_records(&records, &filters).len(), 4);
    }

    #[test]
    fn filtered_records_are_a_subset() {
        let records = tasks();
        let mut filters = Filters::new();
        filters.insert("Task".into(), FilterValue::Contains("a".into()));
        for record in filter_records(&records, &filters) {
            assert!(records.iter().any(|r| std::ptr::eq(r, record)));
        }
    }

    #[test]
    fn groups_follow_first_occurrence() {
        let records = tasks();
        let all: Vec<&Record> = records.iter().collect();
        let groups = group_records(&all, "Status");

        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Done", "Not Started", "No Group"]);
        assert_eq!(names(&groups[0].1), vec!["A", "C"]);

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn empty_value_groups_under_no_group() {
        let records = vec![Record::from_pairs([("Priority", "")])];
        let all: Vec<&Record> = records.iter().collect();
        assert_eq!(group_records(&all, "Priority")[0].0, "No Group");
    }
}
