use super::{client::FirestoreClient, models::*};
use crate::error::FolioError;
use log::{debug, info};
use serde_json::json;

pub const MAIN_INFO_COLLECTION: &str = "main_info";
pub const MAIN_INFO_DOCUMENT: &str = "details";
pub const ORDER_FIELD: &str = "order";

impl FirestoreClient {
    /// Fetch one document by collection and id; `None` when it does not exist
    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, FolioError> {
        let uri = format!("{}/{}/{}", self.config().documents_url(), collection, id);

        match self.get(&uri).await? {
            Some(response) => Ok(Some(response.json::<Document>().await?)),
            None => {
                info!("Document {}/{} does not exist", collection, id);
                Ok(None)
            }
        }
    }

    /// Every document of a collection, ascending by `order_field`
    pub async fn run_ordered_query(
        &self,
        collection: &str,
        order_field: &str,
    ) -> Result<Vec<Document>, FolioError> {
        let uri = format!("{}:runQuery", self.config().documents_url());
        let body = ordered_query_body(collection, order_field);

        let response = self.post_json(&uri, &body).await?;
        let entries: Vec<RunQueryEntry> = response.json().await?;

        let documents: Vec<Document> = entries
            .into_iter()
            .filter_map(|entry| entry.document)
            .collect();
        debug!(
            "runQuery on '{}' returned {} documents",
            collection,
            documents.len()
        );
        Ok(documents)
    }
}

pub fn ordered_query_body(collection: &str, order_field: &str) -> serde_json::Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "orderBy": [{
                "field": { "fieldPath": order_field },
                "direction": "ASCENDING"
            }]
        }
    })
}
