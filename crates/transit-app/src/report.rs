//! Report form state.
//!
//! Data model for the "Report Accessibility Issue" form. It lives only while
//! the report view is open and is dropped on submit or navigation.

use serde::Serialize;
use transit_core::prelude::*;
use transit_core::{IssueType, Urgency};

/// Photo picked in the upload field. The file itself is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAttachment {
    pub file_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// A single field edit coming from the form
#[derive(Debug, Clone, PartialEq)]
pub enum ReportField {
    Location(String),
    /// `None` is the "Select an issue type" placeholder
    IssueType(Option<IssueType>),
    Description(String),
    Urgency(Urgency),
    Photo(Option<PhotoAttachment>),
}

/// Fields carrying the `required` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Location,
    IssueType,
    Description,
}

impl RequiredField {
    /// DOM id of the corresponding input
    pub fn input_id(self) -> &'static str {
        match self {
            RequiredField::Location => "location",
            RequiredField::IssueType => "issueType",
            RequiredField::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Location => "Location",
            RequiredField::IssueType => "Issue Type",
            RequiredField::Description => "Description",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFormState {
    pub location: String,
    pub issue_type: Option<IssueType>,
    pub description: String,
    pub photo: Option<PhotoAttachment>,
    pub urgency: Urgency,
}

impl ReportFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, field: ReportField) {
        match field {
            ReportField::Location(value) => self.location = value,
            ReportField::IssueType(value) => self.issue_type = value,
            ReportField::Description(value) => self.description = value,
            ReportField::Urgency(value) => self.urgency = value,
            ReportField::Photo(value) => self.photo = value,
        }
    }

    /// Required fields that are still empty.
    ///
    /// Matches native constraint validation: any non-empty value satisfies
    /// `required`, whitespace included.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.location.is_empty() {
            missing.push(RequiredField::Location);
        }
        if self.issue_type.is_none() {
            missing.push(RequiredField::IssueType);
        }
        if self.description.is_empty() {
            missing.push(RequiredField::Description);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// JSON rendering of the captured state, for the submission log
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
