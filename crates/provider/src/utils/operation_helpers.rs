//! Timing and logging wrapper shared by every lifecycle entry point.

use std::future::Future;
use std::time::Instant;

use tracing::debug;
use webflow_domain::Result;

use crate::utils::logging::{error_label, log_operation};

/// Run `operation_fn`, then log its duration and outcome.
pub async fn execute_timed<F, Fut, T>(resource: &str, operation: &str, operation_fn: F) -> Result<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let result = operation_fn().await;

    log_operation(resource, operation, start.elapsed(), result.is_ok());
    if let Err(err) = &result {
        debug!(resource, operation, error_type = error_label(err), error = %err, "operation failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use webflow_domain::ProviderError;

    use super::*;

    #[tokio::test]
    async fn passes_results_through() {
        let ok = execute_timed("webflow:index:Site", "read", || async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: Result<()> = execute_timed("webflow:index:Site", "delete", || async {
            Err(ProviderError::Conflict("busy".into()))
        })
        .await;
        assert_eq!(err, Err(ProviderError::Conflict("busy".into())));
    }
}
