use tracing::info;

use crate::store::ResultStore;
use crate::Error;

#[tracing::instrument(level = "info", skip(store))]
pub async fn heartbeat(store: &ResultStore) -> Result<(), Error> {
    let registered_results = store.list()?.len();
    info!(registered_results, "Heartbeat");
    Ok(())
}
