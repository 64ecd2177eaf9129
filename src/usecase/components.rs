//! Component mutation validation.

use std::sync::Arc;

use super::{
    require_positive_id, COMPONENT_INTERVAL_MSG, COMPONENT_KM_MSG, COMPONENT_NAME_MSG,
};
use crate::error::{ClientError, ClientResult};
use crate::models::BicycleComponent;
use crate::repo::ComponentRepository;

/// Validates component mutations: non-blank name, positive service interval,
/// non-negative mileage, positive ids.
#[derive(Clone)]
pub struct ManageComponents {
    repo: Arc<ComponentRepository>,
}

impl ManageComponents {
    pub fn new(repo: Arc<ComponentRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        bicycle_id: i64,
        name: &str,
        current_kilometers: f64,
        max_kilometers: f64,
    ) -> ClientResult<BicycleComponent> {
        require_positive_id(bicycle_id)?;
        validate_fields(name, current_kilometers, max_kilometers)?;
        self.repo
            .create(bicycle_id, name.trim(), current_kilometers, max_kilometers)
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
        require_positive_id(bicycle_id)?;
        require_positive_id(component_id)?;
        validate_fields(name, current_kilometers, max_kilometers)?;
        self.repo
            .update(
                bicycle_id,
                component_id,
                name.trim(),
                current_kilometers,
                max_kilometers,
            )
            .await
    }

    pub async fn delete(&self, bicycle_id: i64, component_id: i64) -> ClientResult<()> {
        require_positive_id(bicycle_id)?;
        require_positive_id(component_id)?;
        self.repo.delete(bicycle_id, component_id).await
    }
}

fn validate_fields(name: &str, current_kilometers: f64, max_kilometers: f64) -> ClientResult<()> {
    if name.trim().is_empty() {
        return Err(ClientError::Validation(COMPONENT_NAME_MSG.to_string()));
    }
    if max_kilometers.is_nan() || max_kilometers <= 0.0 {
        return Err(ClientError::Validation(COMPONENT_INTERVAL_MSG.to_string()));
    }
    if current_kilometers.is_nan() || current_kilometers < 0.0 {
        return Err(ClientError::Validation(COMPONENT_KM_MSG.to_string()));
    }
    Ok(())
}
