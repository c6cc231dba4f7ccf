use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Run `f` inside a transaction: commit on `Ok`, roll back on `Err`.
///
/// The closure borrows the transaction, so it returns a boxed future:
/// `with_txn(&state, |txn| Box::pin(async move { ... })).await`
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'t> FnOnce(
        &'t DatabaseTransaction,
    ) -> Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 't>>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; the handler error wins
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
