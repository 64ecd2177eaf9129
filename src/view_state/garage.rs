//! Garage screen state: the user's bicycles and, for the selected bicycle,
//! its wear-tracked components.

use std::sync::Arc;

use crate::error::{ClientError, ClientResult};
use crate::models::{Bicycle, BicycleComponent};
use crate::repo::{BicycleRepository, ComponentRepository};
use crate::usecase::ManageComponents;
use crate::view_state::Modal;

/// State of the garage screen.
pub struct GarageState {
    bicycles_repo: Arc<BicycleRepository>,
    components_repo: Arc<ComponentRepository>,
    components_uc: ManageComponents,
    bicycles: Vec<Bicycle>,
    selected: Option<i64>,
    components: Vec<BicycleComponent>,
    pub bicycle_modal: Modal<Bicycle>,
    pub component_modal: Modal<BicycleComponent>,
    error: Option<String>,
}

impl GarageState {
    pub fn new(
        bicycles_repo: Arc<BicycleRepository>,
        components_repo: Arc<ComponentRepository>,
    ) -> Self {
        Self {
            components_uc: ManageComponents::new(Arc::clone(&components_repo)),
            bicycles_repo,
            components_repo,
            bicycles: Vec::new(),
            selected: None,
            components: Vec::new(),
            bicycle_modal: Modal::None,
            component_modal: Modal::None,
            error: None,
        }
    }

    pub fn bicycles(&self) -> &[Bicycle] {
        &self.bicycles
    }

    pub fn selected_bicycle(&self) -> Option<&Bicycle> {
        self.selected
            .and_then(|id| self.bicycles.iter().find(|bike| bike.id == id))
    }

    /// Components of the selected bicycle.
    pub fn components(&self) -> &[BicycleComponent] {
        &self.components
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Reload the bicycle list. Keeps the selection when the bicycle still
    /// exists, otherwise clears it along with the component panel.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.bicycles = self.bicycles_repo.list().await?;
        self.error = None;
        if let Some(id) = self.selected {
            if !self.bicycles.iter().any(|bike| bike.id == id) {
                self.selected = None;
                self.components.clear();
            }
        }
        Ok(())
    }

    /// Select a bicycle and load its components.
    pub async fn select(&mut self, bicycle_id: i64) -> ClientResult<()> {
        self.selected = Some(bicycle_id);
        self.components = self.components_repo.list(bicycle_id).await?;
        Ok(())
    }

    /// Submit the open bicycle modal, then reload the list.
    pub async fn submit_bicycle(&mut self, name: &str, brand: Option<&str>) -> ClientResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::Validation(
                "bicycle name must not be empty".to_string(),
            ));
        }
        match &self.bicycle_modal {
            Modal::Create => {
                self.bicycles_repo.create(name, brand).await?;
            }
            Modal::Edit(bike) => {
                let id = bike.id;
                self.bicycles_repo.update(id, name, brand).await?;
            }
            Modal::None | Modal::Delete(_) => {
                return Err(ClientError::Validation("no bicycle form open".to_string()));
            }
        }
        self.bicycle_modal.close();
        self.load().await
    }

    /// Confirm the open delete-bicycle modal.
    pub async fn confirm_delete_bicycle(&mut self) -> ClientResult<()> {
        let Modal::Delete(bike) = &self.bicycle_modal else {
            return Err(ClientError::Validation(
                "no delete confirmation open".to_string(),
            ));
        };
        let id = bike.id;
        self.bicycles_repo.delete(id).await?;
        self.bicycle_modal.close();
        self.load().await
    }

    /// Submit the open component modal for the selected bicycle.
    pub async fn submit_component(
        &mut self,
        name: &str,
        current_kilometers: f64,
        max_kilometers: f64,
    ) -> ClientResult<()> {
        let bicycle_id = self.require_selection()?;
        match &self.component_modal {
            Modal::Create => {
                self.components_uc
                    .create(bicycle_id, name, current_kilometers, max_kilometers)
                    .await?;
            }
            Modal::Edit(component) => {
                let component_id = component.id;
                self.components_uc
                    .update(
                        bicycle_id,
                        component_id,
                        name,
                        current_kilometers,
                        max_kilometers,
                    )
                    .await?;
            }
            Modal::None | Modal::Delete(_) => {
                return Err(ClientError::Validation(
                    "no component form open".to_string(),
                ));
            }
        }
        self.component_modal.close();
        self.reload_components(bicycle_id).await
    }

    /// Confirm the open delete-component modal.
    pub async fn confirm_delete_component(&mut self) -> ClientResult<()> {
        let bicycle_id = self.require_selection()?;
        let Modal::Delete(component) = &self.component_modal else {
            return Err(ClientError::Validation(
                "no delete confirmation open".to_string(),
            ));
        };
        let component_id = component.id;
        self.components_uc.delete(bicycle_id, component_id).await?;
        self.component_modal.close();
        self.reload_components(bicycle_id).await
    }

    async fn reload_components(&mut self, bicycle_id: i64) -> ClientResult<()> {
        self.components = self.components_repo.list(bicycle_id).await?;
        Ok(())
    }

    fn require_selection(&self) -> ClientResult<i64> {
        self.selected
            .ok_or_else(|| ClientError::Validation("no bicycle selected".to_string()))
    }
}
