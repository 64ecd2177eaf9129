//! Workshop search screen state.

use std::sync::Arc;

use crate::error::{ClientError, ClientResult};
use crate::models::Workshop;
use crate::repo::WorkshopRepository;

/// State of the nearby-workshop search screen. Results are a one-shot set;
/// a search already in flight makes further searches no-ops.
pub struct WorkshopSearchState {
    repo: Arc<WorkshopRepository>,
    results: Vec<Workshop>,
    in_flight: bool,
    error: Option<String>,
}

impl WorkshopSearchState {
    pub fn new(repo: Arc<WorkshopRepository>) -> Self {
        Self {
            repo,
            results: Vec::new(),
            in_flight: false,
            error: None,
        }
    }

    pub fn results(&self) -> &[Workshop] {
        &self.results
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Search workshops around the given position. The radius must be
    /// positive; earlier results are kept when the search fails.
    pub async fn search(
        &mut self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> ClientResult<()> {
        if self.in_flight {
            return Ok(());
        }
        if radius_km.is_nan() || radius_km <= 0.0 {
            return Err(ClientError::Validation(
                "search radius must be positive".to_string(),
            ));
        }
        self.in_flight = true;
        let outcome = self.repo.nearby(latitude, longitude, radius_km).await;
        self.in_flight = false;
        match outcome {
            Ok(workshops) => {
                self.results = workshops;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Full detail for one workshop from the result list.
    pub async fn open(&self, workshop_id: i64) -> ClientResult<Workshop> {
        self.repo.get(workshop_id).await
    }
}
