//! Record Normalizer
//!
//! Filters parsed rows on required fields and maps the survivors into
//! records with dense ids.

use super::csv::Row;
use crate::models::{CareerEntry, SkillEntry};

/// Keep rows whose required fields are present and not blank, then map
/// them in order. Ids count retained rows only.
pub fn normalize<T, F>(rows: &[Row], required: &[&str], map: F) -> Vec<T>
where
    F: Fn(usize, &Row) -> T,
{
    rows.iter()
        .filter(|row| has_required(row, required))
        .enumerate()
        .map(|(id, row)| map(id, row))
        .collect()
}

fn has_required(row: &Row, required: &[&str]) -> bool {
    required
        .iter()
        .all(|name| row.get(*name).is_some_and(|value| !value.trim().is_empty()))
}

fn field(row: &Row, name: &str) -> String {
    row.get(name).cloned().unwrap_or_default()
}

fn trimmed(row: &Row, name: &str) -> String {
    row.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Career rows; values are kept exactly as written
pub fn career_entries(rows: &[Row]) -> Vec<CareerEntry> {
    normalize(rows, &["Title", "Company"], |id, row| CareerEntry {
        id,
        title: field(row, "Title"),
        company: field(row, "Company"),
        from: field(row, "From"),
        to: field(row, "To"),
        description: field(row, "Description"),
    })
}

/// Skill rows; skill names and descriptions are trimmed
pub fn skill_entries(rows: &[Row]) -> Vec<SkillEntry> {
    normalize(rows, &["Skills"], |id, row| SkillEntry {
        id,
        skill: trimmed(row, "Skills"),
        description: trimmed(row, "Description"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::csv::parse_delimited;

    #[test]
    fn test_career_drops_incomplete_rows() {
        let rows = parse_delimited(
            "Title,Company,From,To,Description\n\
             Engineer,Acme,2019,2021,Built things\n\
             ,Nobody,2018,2019,\n\
             Lead,,2017,2018,\n\
             Architect,Initech,2021,Present\n",
            ',',
        );
        let entries = career_entries(&rows);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 0);
        assert_eq!(entries[0].title, "Engineer");
        assert_eq!(entries[0].description, "Built things");
        assert_eq!(entries[1].id, 1);
        assert_eq!(entries[1].company, "Initech");
        assert_eq!(entries[1].to, "Present");
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn test_career_values_untrimmed() {
        let rows = parse_delimited("Title,Company,From,To\n Engineer , Acme ,2019, now\n", ',');
        let entries = career_entries(&rows);

        assert_eq!(entries[0].title, " Engineer ");
        assert_eq!(entries[0].company, " Acme ");
        assert_eq!(entries[0].to, " now");
        assert_eq!(entries[0].heading(), " Engineer  at  Acme ");
    }

    #[test]
    fn test_blank_required_field_dropped() {
        let rows = parse_delimited("Title,Company\n   ,Acme\nDev,Acme\n", ',');
        let entries = career_entries(&rows);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 0);
        assert_eq!(entries[0].title, "Dev");
    }

    #[test]
    fn test_missing_required_column_drops_everything() {
        let rows = parse_delimited("Title,From\nDev,2020\n", ',');
        assert!(career_entries(&rows).is_empty());
    }

    #[test]
    fn test_skills_trimmed() {
        let rows = parse_delimited(
            "Skills;Description\n  Rust  ;  Systems work \n   ;orphan\nSQL\n",
            ';',
        );
        let entries = skill_entries(&rows);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].skill, "Rust");
        assert_eq!(entries[0].description, "Systems work");
        assert_eq!(entries[1].id, 1);
        assert_eq!(entries[1].skill, "SQL");
        assert!(!entries[1].has_description());
    }

    #[test]
    fn test_ids_dense_over_retained_rows() {
        let rows = parse_delimited("Skills\nA\n \nB\n\nC\n;\nD\n", ';');
        let ids: Vec<usize> = skill_entries(&rows).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
