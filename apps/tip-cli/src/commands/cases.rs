//! # Test-Case Listing
//!
//! Groups the manual test-case catalogue by section for documentation.
//!
//! ## Input
//! ```json
//! [
//!   {
//!     "section": "Bill input",
//!     "description": "Rejects letters",
//!     "steps": ["Type abc into the bill field"],
//!     "expected": "The field stays empty"
//!   }
//! ]
//! ```
//!
//! ## Grouping Rules
//! - A new section starts whenever a record's section differs from the
//!   previous record's, so a section name that reappears later opens a
//!   second group
//! - Case numbers run 1, 2, 3, ... across the whole file, not per section
//! - The section anchor is the title lower-cased with each run of
//!   whitespace replaced by `-`

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// One record from the catalogue file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    pub section: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    pub expected: String,
}

/// A run of consecutive cases sharing one section title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSection {
    pub title: String,
    pub anchor: String,
    pub cases: Vec<NumberedCase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberedCase {
    pub number: usize,
    pub description: String,
    pub steps: Vec<String>,
    pub expected: String,
}

/// Reads the catalogue file.
pub fn load_cases(path: &Path) -> Result<Vec<TestCase>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let cases: Vec<TestCase> = serde_json::from_str(&text).map_err(|e| CliError::parse(path, e))?;

    debug!(path = %path.display(), count = cases.len(), "test cases loaded");
    Ok(cases)
}

/// Groups cases into sections, preserving file order.
pub fn group_cases(cases: Vec<TestCase>) -> Vec<CaseSection> {
    let mut sections: Vec<CaseSection> = Vec::new();

    for (index, case) in cases.into_iter().enumerate() {
        let numbered = NumberedCase {
            number: index + 1,
            description: case.description,
            steps: case.steps,
            expected: case.expected,
        };

        if let Some(section) = sections
            .last_mut()
            .filter(|section| section.title == case.section)
        {
            section.cases.push(numbered);
        } else {
            sections.push(CaseSection {
                anchor: section_anchor(&case.section),
                title: case.section,
                cases: vec![numbered],
            });
        }
    }

    sections
}

/// `"Tip  Selection"` → `"tip-selection"`.
pub fn section_anchor(title: &str) -> String {
    let mut anchor = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                anchor.push('-');
            }
            in_whitespace = true;
        } else {
            anchor.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    anchor
}
