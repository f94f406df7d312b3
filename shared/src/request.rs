//! Request / response DTOs for the form-list endpoint
//!
//! `GET /api/forms?department=<id>` and `POST /api/forms`.

use serde::{Deserialize, Serialize};

use crate::models::FormDescriptor;

/// Path of the form-list endpoint
pub const FORMS_PATH: &str = "/api/forms";

/// Message returned on a successful write
pub const FORM_SAVED_MESSAGE: &str = "Form order saved successfully";

/// Query string of a form-list read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Body of a form-list write
///
/// Both fields are optional on the wire so a missing one surfaces as a
/// 400 from the handler rather than a generic body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormListUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forms: Option<Vec<FormDescriptor>>,
}

impl FormListUpdate {
    pub fn new(department: impl Into<String>, forms: Vec<FormDescriptor>) -> Self {
        Self {
            department: Some(department.into()),
            forms: Some(forms),
        }
    }
}

/// A department's stored list (response data of both read and write)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormList {
    pub department: String,
    pub forms: Vec<FormDescriptor>,
}

/// Trim a department parameter, treating blank as absent
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
