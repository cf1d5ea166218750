use serde::{Deserialize, Serialize};

use super::value::decode_fields;
use crate::error::FolioError;

/// A document as returned by the Firestore REST API
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

impl Document {
    /// Last path segment of the resource name
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// Fields flattened to plain JSON
    pub fn to_json(&self) -> Result<serde_json::Value, FolioError> {
        decode_fields(&self.fields)
    }
}

/// One element of a `documents:runQuery` response stream
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryEntry {
    pub document: Option<Document>,
    pub read_time: Option<String>,
    pub skipped_results: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Certification;

    #[test]
    fn test_document_fields_decode_into_record() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/certifications/abc123",
            "fields": {
                "name": {"stringValue": "Cloud Architect"},
                "year": {"integerValue": "2023"},
                "url": {"nullValue": null},
                "order": {"integerValue": "1"}
            },
            "createTime": "2024-01-01T00:00:00Z",
            "updateTime": "2024-01-02T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(doc.id(), "abc123");
        let cert: Certification = serde_json::from_value(doc.to_json().unwrap()).unwrap();
        assert_eq!(cert.name, "Cloud Architect");
        assert_eq!(cert.year, "2023");
        assert!(cert.url.is_empty());
        assert_eq!(cert.order, 1);
    }

    #[test]
    fn test_run_query_entry_without_document() {
        let entries: Vec<RunQueryEntry> =
            serde_json::from_str(r#"[{"readTime": "2024-01-01T00:00:00Z"}]"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].document.is_none());
    }
}
