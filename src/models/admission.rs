use mongodb::bson::{self, DateTime, Document};
use serde_json::{Map, Value};

use super::{missing_fields, ModelError};

const REQUIRED: &[&str] = &[
    "name",
    "subject",
    "email",
    "phone",
    "address",
    "dob",
    "selectedCollege",
];
const REQUIRED_MESSAGE: &str = "Please fill all required fields";

/// A complete admission submission as persisted: the seven form fields as
/// submitted plus the server-set `createdAt`. Any other body field is
/// dropped.
///
/// `selectedCollege` is free text; it is not checked against colleges.
#[derive(Debug, Clone)]
pub struct Admission {
    fields: Map<String, Value>,
    created_at: DateTime,
}

impl Admission {
    /// Validate presence of every form field and stamp the submission time
    pub fn from_payload(mut payload: Map<String, Value>, created_at: DateTime) -> Result<Self, ModelError> {
        let missing = missing_fields(&payload, REQUIRED);
        if !missing.is_empty() {
            return Err(ModelError::MissingFields {
                message: REQUIRED_MESSAGE,
                fields: missing,
            });
        }

        let fields = REQUIRED
            .iter()
            .filter_map(|name| payload.remove(*name).map(|value| (name.to_string(), value)))
            .collect();
        Ok(Self { fields, created_at })
    }

    pub fn selected_college(&self) -> Option<&Value> {
        self.fields.get("selectedCollege")
    }

    pub fn created_at(&self) -> DateTime {
        self.created_at
    }

    pub fn into_document(self) -> Result<Document, ModelError> {
        let mut document =
            bson::to_document(&self.fields).map_err(|e| ModelError::InvalidDocument(e.to_string()))?;
        document.insert("createdAt", self.created_at);
        Ok(document)
    }
}
