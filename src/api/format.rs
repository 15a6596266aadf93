use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Convert a stored value into the public wire format.
///
/// Native ids render as their hex string and timestamps as RFC 3339; every
/// other value uses relaxed extended JSON (plain numbers, strings, arrays).
pub fn bson_to_api_value(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            // Out of RFC 3339 range
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => document_to_api_value(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_api_value).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_api_value(document: Document) -> Value {
    let map: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| (key, bson_to_api_value(value)))
        .collect();
    Value::Object(map)
}

pub fn documents_to_api_values(documents: Vec<Document>) -> Vec<Value> {
    documents.into_iter().map(document_to_api_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId, DateTime};
    use serde_json::json;

    #[test]
    fn object_id_renders_as_hex() {
        let oid = ObjectId::parse_str("65a1f0c2b3d4e5f601234567").unwrap();
        assert_eq!(bson_to_api_value(Bson::ObjectId(oid)), json!("65a1f0c2b3d4e5f601234567"));
    }

    #[test]
    fn datetime_renders_as_rfc3339() {
        let dt = DateTime::from_millis(0);
        assert_eq!(bson_to_api_value(Bson::DateTime(dt)), json!("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn nested_documents_use_plain_json() {
        let oid = ObjectId::new();
        let value = document_to_api_value(doc! {
            "_id": oid,
            "name": "Alpha Tech",
            "rank": 3_i64,
            "rating": 4.5,
            "campus": { "city": "Dhaka", "ids": [oid] },
        });
        assert_eq!(
            value,
            json!({
                "_id": oid.to_hex(),
                "name": "Alpha Tech",
                "rank": 3,
                "rating": 4.5,
                "campus": { "city": "Dhaka", "ids": [oid.to_hex()] }
            })
        );
    }
}
