//! Catalog API endpoint.
//!
//! Lists the static route parameters of every catalog page.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use ndocs_site::StaticParam;
use serde::Serialize;

use crate::state::AppState;

/// Entry of the GET /api/catalog response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogEntry {
    /// Notion page ID.
    notion_page_id: String,
}

impl From<StaticParam> for CatalogEntry {
    fn from(param: StaticParam) -> Self {
        Self {
            notion_page_id: param.notion_page_id,
        }
    }
}

/// Handle GET /api/catalog.
pub(crate) async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<Vec<CatalogEntry>> {
    Json(
        state
            .site
            .static_params()
            .into_iter()
            .map(CatalogEntry::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_serialization() {
        let entry = CatalogEntry::from(StaticParam {
            notion_page_id: "abc".to_owned(),
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"notionPageId": "abc"}));
    }
}
