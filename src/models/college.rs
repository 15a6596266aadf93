use mongodb::bson::{self, Document};
use serde_json::{Map, Value};

use super::{missing_fields, ModelError};

const REQUIRED: &[&str] = &["name", "location"];
const REQUIRED_MESSAGE: &str = "College name and location are required";

/// A validated college payload. Beyond `name` and `location` the document
/// is schema-free; every supplied field is stored as given.
#[derive(Debug, Clone)]
pub struct College {
    fields: Map<String, Value>,
}

impl College {
    /// Validate a create/update body; both require `name` and `location`
    pub fn from_payload(fields: Map<String, Value>) -> Result<Self, ModelError> {
        let missing = missing_fields(&fields, REQUIRED);
        if !missing.is_empty() {
            return Err(ModelError::MissingFields {
                message: REQUIRED_MESSAGE,
                fields: missing,
            });
        }
        Ok(Self { fields })
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Document for insertion. A client-supplied `_id` is kept.
    pub fn into_document(self) -> Result<Document, ModelError> {
        bson::to_document(&self.fields).map_err(|e| ModelError::InvalidDocument(e.to_string()))
    }

    /// Field set for a partial update. `_id` is immutable in the store, so
    /// it is dropped rather than sent.
    pub fn into_changes(mut self) -> Result<Document, ModelError> {
        self.fields.remove("_id");
        self.into_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn requires_name_and_location() {
        let err = College::from_payload(payload(json!({ "name": "Alpha Tech" }))).unwrap_err();
        match err {
            ModelError::MissingFields { message, fields } => {
                assert_eq!(message, "College name and location are required");
                assert_eq!(fields, vec!["location"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(College::from_payload(payload(json!({ "location": "Dhaka" }))).is_err());
    }

    #[test]
    fn keeps_extra_fields_in_document() {
        let college = College::from_payload(payload(json!({
            "name": "Alpha Tech",
            "location": "Dhaka",
            "rating": 4.5,
            "facilities": ["library", "lab"]
        })))
        .unwrap();
        assert_eq!(college.name(), Some("Alpha Tech"));

        let doc = college.into_document().unwrap();
        assert_eq!(doc.get_str("location").unwrap(), "Dhaka");
        assert_eq!(doc.get_f64("rating").unwrap(), 4.5);
        assert_eq!(doc.get_array("facilities").unwrap().len(), 2);
    }

    #[test]
    fn changes_drop_id() {
        let college = College::from_payload(payload(json!({
            "_id": "65a1f0c2b3d4e5f601234567",
            "name": "Alpha Tech",
            "location": "Dhaka"
        })))
        .unwrap();
        let changes = college.into_changes().unwrap();
        assert!(!changes.contains_key("_id"));
        assert_eq!(changes.len(), 2);
    }
}
