use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::{error::AppError, store::NutritionStore, users::repo_types::RECENT_SUGGESTIONS_CAP};

/// `log` followed by `names`, keeping only the newest `cap` entries.
pub fn append_bounded(log: &[String], names: &[String], cap: usize) -> Vec<String> {
    let mut out: Vec<String> = log.iter().chain(names).cloned().collect();
    if out.len() > cap {
        let excess = out.len() - cap;
        out.drain(..excess);
    }
    out
}

/// Per-user trailing log of suggested meal names.
///
/// Updates are a plain read-modify-write without locking: two concurrent
/// requests for one user may overwrite each other's additions.
#[derive(Clone)]
pub struct RecencyTracker {
    store: Arc<dyn NutritionStore>,
}

impl RecencyTracker {
    pub fn new(store: Arc<dyn NutritionStore>) -> Self {
        Self { store }
    }

    pub async fn record(&self, user_id: Uuid, names: &[String]) -> Result<Vec<String>, AppError> {
        if names.is_empty() {
            debug!(%user_id, "nothing to record");
            return self.current_exclusions(user_id).await;
        }
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or(AppError::NotFound("User"))?;
        let updated = append_bounded(&user.recent_suggestions, names, RECENT_SUGGESTIONS_CAP);
        self.store.set_recent_suggestions(user_id, &updated).await?;
        info!(%user_id, added = names.len(), kept = updated.len(), "recent suggestions updated");
        Ok(updated)
    }

    pub async fn current_exclusions(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or(AppError::NotFound("User"))?;
        Ok(user.recent_suggestions)
    }
}
