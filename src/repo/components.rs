//! Bicycle component repository.

use std::sync::Arc;

use crate::api::components::{component_path, components_path, ComponentRequest};
use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::BicycleComponent;

/// Repository for wear-tracked components, scoped to a bicycle.
#[derive(Clone)]
pub struct ComponentRepository {
    api: Arc<ApiClient>,
}

impl ComponentRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, bicycle_id: i64) -> ClientResult<Vec<BicycleComponent>> {
        self.api.get_json(&components_path(bicycle_id)).await
    }

    pub async fn create(
        &self,
        bicycle_id: i64,
        name: &str,
        current_kilometers: f64,
        max_kilometers: f64,
    ) -> ClientResult<BicycleComponent> {
        self.api
            .post_json(
                &components_path(bicycle_id),
                &ComponentRequest {
                    name,
                    current_kilometers,
                    max_kilometers,
                },
            )
            .await
    }

    pub async fn update(
        &self,
        bicycle_id: i64,
        component_id: i64,
        name: &str,
        current_kilometers: f64,
        max_kilometers: f64,
    ) -> ClientResult<BicycleComponent> {
        self.api
            .put_json(
                &component_path(bicycle_id, component_id),
                &ComponentRequest {
                    name,
                    current_kilometers,
                    max_kilometers,
                },
            )
            .await
    }

    pub async fn delete(&self, bicycle_id: i64, component_id: i64) -> ClientResult<()> {
        self.api
            .delete(&component_path(bicycle_id, component_id))
            .await
    }
}
