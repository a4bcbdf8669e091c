//! Asset Loading
//!
//! Fetches a CSV asset and turns it into records. Failures never reach the
//! page: they are logged and the caller gets an empty list.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::csv::{parse_delimited, Row};
use super::normalize::{career_entries, skill_entries};
use crate::models::{CareerEntry, SkillEntry};

/// Location and format of one CSV asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSource {
    pub url: &'static str,
    pub delimiter: char,
}

pub const CAREER_SOURCE: DataSource = DataSource {
    url: "/assets/career.csv",
    delimiter: ',',
};

pub const SKILLS_SOURCE: DataSource = DataSource {
    url: "/assets/skills.csv",
    delimiter: ';',
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no browser window")]
    NoWindow,

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("unreadable body: {0}")]
    Body(String),
}

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// GET `url` and return the body as text
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Request(js_message(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| FetchError::Request("not a Response".to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().map_err(|e| FetchError::Body(js_message(e)))?;
    let text = JsFuture::from(body).await.map_err(|e| FetchError::Body(js_message(e)))?;
    text.as_string().ok_or_else(|| FetchError::Body("body is not text".to_string()))
}

/// Parse a fetched body, or log the failure and yield no rows
fn rows_or_empty(url: &str, res: Result<String, FetchError>, delimiter: char) -> Vec<Row> {
    match res {
        Ok(text) => parse_delimited(&text, delimiter),
        Err(e) => {
            log::error!("error loading {}: {}", url, e);
            Vec::new()
        }
    }
}

async fn load_rows(source: DataSource) -> Vec<Row> {
    rows_or_empty(source.url, fetch_text(source.url).await, source.delimiter)
}

pub async fn load_career() -> Vec<CareerEntry> {
    let entries = career_entries(&load_rows(CAREER_SOURCE).await);
    log::debug!("loaded {} career entries", entries.len());
    entries
}

pub async fn load_skills() -> Vec<SkillEntry> {
    let entries = skill_entries(&load_rows(SKILLS_SOURCE).await);
    log::debug!("loaded {} skills", entries.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_fetch_yields_no_records() {
        let rows = rows_or_empty(CAREER_SOURCE.url, Err(FetchError::Status(404)), CAREER_SOURCE.delimiter);
        assert!(rows.is_empty());
        assert!(career_entries(&rows).is_empty());

        let rows = rows_or_empty(SKILLS_SOURCE.url, Err(FetchError::NoWindow), SKILLS_SOURCE.delimiter);
        assert!(skill_entries(&rows).is_empty());
    }

    #[test]
    fn test_fetched_text_is_parsed_with_source_delimiter() {
        let body = "Skills;Description\nRust;Systems\nSQL;\n".to_string();
        let rows = rows_or_empty(SKILLS_SOURCE.url, Ok(body), SKILLS_SOURCE.delimiter);
        let skills = skill_entries(&rows);

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].skill, "Rust");
        assert_eq!(skills[0].description, "Systems");
        assert_eq!(skills[1].id, 1);
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "unexpected status 404");
        assert_eq!(FetchError::NoWindow.to_string(), "no browser window");
    }
}
