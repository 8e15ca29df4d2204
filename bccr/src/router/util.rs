use bccr_core::BccrError;

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// Wraps `futures::future::join_all(tasks)`; results keep the input order.
///
/// # Errors
/// Returns `BccrError::RequestTimeout { capability }` when `deadline` elapses
/// before every task has finished.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
    capability: &str,
) -> Result<Vec<T>, BccrError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    let all = futures::future::join_all(tasks);
    match deadline {
        Some(d) => tokio::time::timeout(d, all)
            .await
            .map_err(|_| BccrError::request_timeout(capability)),
        None => Ok(all.await),
    }
}
