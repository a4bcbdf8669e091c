//! Frontend Models
//!
//! Records built from the CSV assets.

/// One row of career history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerEntry {
    /// Position among retained rows, dense from 0
    pub id: usize,
    pub title: String,
    pub company: String,
    /// Free-form start, e.g. "Jan 2020"
    pub from: String,
    /// Free-form end, e.g. "Present"
    pub to: String,
    pub description: String,
}

impl CareerEntry {
    /// Card heading: "{title} at {company}"
    pub fn heading(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }

    /// Card subtitle: "{from} - {to}"
    pub fn period(&self) -> String {
        format!("{} - {}", self.from, self.to)
    }
}

/// One row of the skills list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub id: usize,
    pub skill: String,
    pub description: String,
}

impl SkillEntry {
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
