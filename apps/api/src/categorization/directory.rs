//! Static mentor and coach tables.
//!
//! Both tables are process-wide constants keyed by category name. Lookups are
//! total: a category missing from a table yields that table's default.

use crate::categorization::resolver::FALLBACK_CATEGORY;

/// Every category the backend is asked to choose from.
pub const CATEGORIES: [&str; 10] = [
    "Software Development",
    "Hardware Issues",
    "Networking & Security",
    "AI & Machine Learning",
    "Business & Management",
    "Education & Tutoring",
    "Healthcare & Medicine",
    "Legal & Compliance",
    "Finance & Accounting",
    FALLBACK_CATEGORY,
];

pub const NO_MENTOR: &str = "No mentor available";
pub const NO_COACH: &str = "No coach available";

const MENTORS: &[(&str, &str)] = &[
    ("Software Development", "Alice - Expert in Python, Java, and Web Dev"),
    ("Hardware Issues", "Bob - PC building and troubleshooting expert"),
    ("Networking & Security", "Charlie - Cybersecurity and network engineer"),
    ("AI & Machine Learning", "Diana - AI researcher and ML engineer"),
    ("Business & Management", "Emma - Business consultant and startup advisor"),
    ("Education & Tutoring", "Frank - Teaching specialist in STEM subjects"),
    ("Healthcare & Medicine", "Grace - Doctor and medical advisor"),
    ("Legal & Compliance", "Henry - Corporate lawyer and compliance expert"),
    ("Finance & Accounting", "Ivy - Chartered accountant and financial planner"),
    (FALLBACK_CATEGORY, NO_MENTOR),
];

const COACHES: &[(&str, &str)] = &[
    ("Software Development", "Jake - Agile coach for software teams"),
    ("Business & Management", "Liam - Leadership and business coach"),
    ("Education & Tutoring", "Sophia - Academic performance coach"),
    ("Healthcare & Medicine", "Olivia - Wellness and mental health coach"),
    ("Finance & Accounting", "Ethan - Financial independence coach"),
    (FALLBACK_CATEGORY, NO_COACH),
];

/// Which assignment table a classification consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directory {
    Mentor,
    Coach,
}

impl Directory {
    /// JSON field name the assignment is reported under.
    pub fn role(self) -> &'static str {
        match self {
            Directory::Mentor => "mentor",
            Directory::Coach => "coach",
        }
    }

    pub fn default_assignee(self) -> &'static str {
        match self {
            Directory::Mentor => NO_MENTOR,
            Directory::Coach => NO_COACH,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Directory::Mentor => MENTORS,
            Directory::Coach => COACHES,
        }
    }

    /// Exact-match lookup, never fails.
    pub fn assign(self, category: &str) -> &'static str {
        self.table()
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, assignee)| *assignee)
            .unwrap_or_else(|| self.default_assignee())
    }
}
