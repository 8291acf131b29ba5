//! Built-in rows used when a resource file can't be loaded

use crate::data_types::{Record, ResourceKind};

pub fn sample_records(kind: ResourceKind) -> Vec<Record> {
    match kind {
        ResourceKind::Announcements => vec![
            Record::from_pairs([
                ("Title", "Welcome to FreeFuse!"),
                ("Publish Date", "2025-09-01"),
                ("Expires", "2025-09-21"),
                ("Status", "Published"),
                ("Priority", "High"),
                ("Summary", "Welcome message for new interns"),
                ("Author", "HR"),
                ("Link", "https://example.com/welcome"),
                ("Notes", "Important announcement"),
            ]),
            Record::from_pairs([
                ("Title", "Orientation Schedule"),
                ("Publish Date", "2025-09-02"),
                ("Expires", "2025-09-22"),
                ("Status", "Published"),
                ("Priority", "Medium"),
                ("Summary", "Schedule for orientation week"),
                ("Author", "HR"),
                ("Link", "https://example.com/orientation"),
                ("Notes", "Please review schedule"),
            ]),
            Record::from_pairs([
                ("Title", "IT Setup Instructions"),
                ("Publish Date", "2025-09-03"),
                ("Expires", "2025-09-23"),
                ("Status", "Published"),
                ("Priority", "Medium"),
                ("Summary", "Instructions for setting up your workstation"),
                ("Author", "IT"),
                ("Link", "https://example.com/it-setup"),
                ("Notes", "Follow these steps carefully"),
            ]),
        ],
        ResourceKind::Contacts => vec![
            Record::from_pairs([
                ("Name", "Sarah Johnson"),
                ("Role", "HR Manager"),
                ("Area", "HR"),
                ("Email", "sarah@freefuse.com"),
                ("Handle", "@sarah"),
                ("Notes", "Primary HR contact"),
            ]),
            Record::from_pairs([
                ("Name", "Mike Chen"),
                ("Role", "Engineering Lead"),
                ("Area", "Engineering"),
                ("Email", "mike@freefuse.com"),
                ("Handle", "@mike"),
                ("Notes", "Technical mentor"),
            ]),
            Record::from_pairs([
                ("Name", "Lisa Rodriguez"),
                ("Role", "Intern Coordinator"),
                ("Area", "HR"),
                ("Email", "lisa@freefuse.com"),
                ("Handle", "@lisa"),
                ("Notes", "Intern program coordinator"),
            ]),
        ],
        ResourceKind::Interns => vec![
            Record::from_pairs([
                ("Name", "Alex Thompson"),
                ("Cohort", "Fall"),
                ("Track", "Engineering"),
                ("Manager", "Mike Chen"),
                ("Email", "alex@freefuse.com"),
            ]),
            Record::from_pairs([
                ("Name", "Jordan Kim"),
                ("Cohort", "Fall"),
                ("Track", "Engineering"),
                ("Manager", "Mike Chen"),
                ("Email", "jordan@freefuse.com"),
            ]),
            Record::from_pairs([
                ("Name", "Sam Wilson"),
                ("Cohort", "Fall"),
                ("Track", "Design"),
                ("Manager", "Sarah Johnson"),
                ("Email", "sam@freefuse.com"),
            ]),
        ],
        ResourceKind::Meetings => vec![
            Record::from_pairs([
                ("Title", "Weekly Standup"),
                ("Date", "2025-09-01"),
                ("Attendees", "Alex;Jordan;Mike"),
                ("Decisions", "Continue with current sprint"),
                ("Action Items", "Update documentation"),
                ("Link", ""),
            ]),
            Record::from_pairs([
                ("Title", "Intern Check-in"),
                ("Date", "2025-09-02"),
                ("Attendees", "Alex;Jordan;Lisa"),
                ("Decisions", "Schedule additional training"),
                ("Action Items", "Book training sessions"),
                ("Link", ""),
            ]),
            Record::from_pairs([
                ("Title", "Project Review"),
                ("Date", "2025-09-03"),
                ("Attendees", "Sam;Sarah;Mike"),
                ("Decisions", "Approve design mockups"),
                ("Action Items", "Implement feedback"),
                ("Link", ""),
            ]),
        ],
        ResourceKind::Tasks => vec![
            Record::from_pairs([
                ("Task", "Complete IT Setup"),
                ("Status", "Not Started"),
                ("Assignee", "Alex Thompson"),
                ("Due", "2025-09-01"),
                ("Category/Tags", "HR"),
                ("Notes", "Set up laptop and accounts"),
                ("Intern", "Alex Thompson"),
            ]),
            Record::from_pairs([
                ("Task", "Read Company Handbook"),
                ("Status", "In Progress"),
                ("Assignee", "Jordan Kim"),
                ("Due", "2025-09-02"),
                ("Category/Tags", "HR"),
                ("Notes", "Review all policies"),
                ("Intern", "Jordan Kim"),
            ]),
            Record::from_pairs([
                ("Task", "Meet with Manager"),
                ("Status", "Done"),
                ("Assignee", "Sam Wilson"),
                ("Due", "2025-09-01"),
                ("Category/Tags", "HR"),
                ("Notes", "Initial one-on-one meeting"),
                ("Intern", "Sam Wilson"),
            ]),
        ],
        ResourceKind::Resources => vec![
            Record::from_pairs([
                ("Title", "Employee Handbook"),
                ("Type", "Doc"),
                ("Summary", "Complete company policies and procedures"),
                ("Link", "https://example.com/handbook"),
                ("Owner", "HR"),
            ]),
            Record::from_pairs([
                ("Title", "Development Environment Setup"),
                ("Type", "Tool"),
                ("Summary", "Guide for setting up development tools"),
                ("Link", "https://example.com/dev-setup"),
                ("Owner", "Engineering"),
            ]),
            Record::from_pairs([
                ("Title", "Design System"),
                ("Type", "Template"),
                ("Summary", "UI components and design guidelines"),
                ("Link", "https://example.com/design-system"),
                ("Owner", "Design"),
            ]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_has_three_samples() {
        for kind in ResourceKind::ALL {
            assert_eq!(sample_records(kind).len(), 3, "{}", kind);
        }
    }
}
