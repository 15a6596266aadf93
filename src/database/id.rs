use std::fmt;

use mongodb::bson::{oid::ObjectId, Bson};

/// Identifier used to address a single document by `_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentId {
    /// Store-native id (24 hex characters)
    Native(ObjectId),
    /// Any other string stored verbatim as `_id`
    Text(String),
}

impl DocumentId {
    /// Native id when `raw` parses as one, otherwise the raw string.
    ///
    /// Only college lookup by id resolves ids this way; update and delete
    /// go through [`DocumentId::native`].
    pub fn lenient(raw: &str) -> Self {
        match ObjectId::parse_str(raw) {
            Ok(oid) => DocumentId::Native(oid),
            Err(_) => DocumentId::Text(raw.to_string()),
        }
    }

    /// Strict store-native parse; `None` if `raw` is not a native id
    pub fn native(raw: &str) -> Option<Self> {
        ObjectId::parse_str(raw).ok().map(DocumentId::Native)
    }

    pub fn to_bson(&self) -> Bson {
        match self {
            DocumentId::Native(oid) => Bson::ObjectId(*oid),
            DocumentId::Text(s) => Bson::String(s.clone()),
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Native(oid) => write!(f, "{}", oid.to_hex()),
            DocumentId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parses_hex_as_native() {
        let id = DocumentId::lenient("65a1f0c2b3d4e5f601234567");
        assert!(matches!(id, DocumentId::Native(_)));
        assert_eq!(id.to_string(), "65a1f0c2b3d4e5f601234567");
    }

    #[test]
    fn lenient_falls_back_to_text() {
        let id = DocumentId::lenient("harvard");
        assert_eq!(id, DocumentId::Text("harvard".to_string()));
        assert_eq!(id.to_bson(), Bson::String("harvard".to_string()));
    }

    #[test]
    fn native_rejects_non_hex() {
        assert!(DocumentId::native("harvard").is_none());
        assert!(DocumentId::native("65a1f0c2b3d4e5f60123456").is_none());
        assert!(DocumentId::native("65a1f0c2b3d4e5f601234567").is_some());
    }
}
