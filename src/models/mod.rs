pub mod admission;
pub mod college;

use serde_json::{Map, Value};

pub use admission::Admission;
pub use college::College;

/// Collection names in the `campusconnect` database
pub const COLLEGES: &str = "colleges";
pub const RESEARCH_PAPERS: &str = "researchPaper";
pub const ADMISSIONS: &str = "admissions";

/// Errors raised while turning request payloads into storable documents
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("{message}: {fields:?}")]
    MissingFields {
        message: &'static str,
        fields: Vec<String>,
    },
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// A required value counts as missing when absent or falsy: `null`,
/// `false`, zero, or the empty string.
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) | Some(Value::Bool(true)) => false,
    }
}

/// Names from `required` that are missing in `fields`, in `required` order
pub fn missing_fields(fields: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| is_missing(fields.get(**name)))
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_are_missing() {
        assert!(is_missing(None));
        assert!(is_missing(Some(&json!(null))));
        assert!(is_missing(Some(&json!(""))));
        assert!(is_missing(Some(&json!(false))));
        assert!(is_missing(Some(&json!(0))));
        assert!(!is_missing(Some(&json!("Dhaka"))));
        assert!(!is_missing(Some(&json!(42))));
        assert!(!is_missing(Some(&json!([]))));
    }

    #[test]
    fn reports_missing_in_required_order() {
        let fields = json!({ "location": "", "extra": 1 });
        let missing = missing_fields(fields.as_object().unwrap(), &["name", "location"]);
        assert_eq!(missing, vec!["name", "location"]);
    }
}
