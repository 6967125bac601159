use std::sync::Arc;

use shared::{
    domain::Talk,
    error::ApiException,
    protocol::LOAD_FAILURE_MESSAGE,
};
use storage::TalkStore;
use tracing::error;

#[derive(Clone)]
pub struct ApiContext {
    pub talks: Arc<dyn TalkStore>,
}

/// Full talk list in schedule order. The underlying cause of a failure is
/// logged; callers only see a generic message.
pub async fn list_talks(ctx: &ApiContext) -> Result<Vec<Talk>, ApiException> {
    ctx.talks.load_talks().await.map_err(|err| {
        error!(error = %err, "failed to load talk list");
        ApiException::new(LOAD_FAILURE_MESSAGE)
    })
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
