//! Instrumentation Module
//!
//! Wrapper types that observe calls to an operation without changing its
//! result: `Counted` bumps a per-operation counter, `Recorded` appends each
//! call's arguments and result to per-operation lists in the backing store.
//!
//! Storage layout for an operation identified by `id`:
//! - `{id}` holds the invocation counter
//! - `{id}:inputs` holds the `Debug` rendering of each argument tuple
//! - `{id}:outputs` holds the `Display` rendering of each result

mod counted;
mod history;

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;

use crate::backend::SharedBackend;
use crate::error::Result;

pub use counted::Counted;
pub use history::Recorded;

// == Operation Trait ==
/// A callable unit of work that can be wrapped by instrumentation.
#[async_trait]
pub trait Operation: Send + Sync {
    /// Argument tuple passed to each call
    type Args: Send + 'static;
    /// Value returned on success
    type Output: Send + 'static;

    /// Runs the operation.
    async fn call(&self, args: Self::Args) -> Result<Self::Output>;
}

/// Counter and history wrappers stacked in call order: count, log input,
/// call, log output.
pub type Instrumented<Op> = Counted<Recorded<Op>>;

/// Wraps `op` so every call is counted and recorded under `id`.
pub fn instrument<Op>(op: Op, id: impl Into<String>, backend: SharedBackend) -> Instrumented<Op>
where
    Op: Operation,
{
    let id = id.into();
    let recorded = Recorded::new(op, id.clone(), backend.clone());
    Counted::new(recorded, id, backend)
}

// == Storage Keys ==
/// Key holding the invocation counter for `id`.
pub fn counter_key(id: &str) -> String {
    id.to_string()
}

/// Key holding the argument log for `id`.
pub fn inputs_key(id: &str) -> String {
    format!("{}:inputs", id)
}

/// Key holding the result log for `id`.
pub fn outputs_key(id: &str) -> String {
    format!("{}:outputs", id)
}

// == Closure Adapter ==
/// Turns an async closure into an [`Operation`].
pub struct FnOperation<F, A, R> {
    f: F,
    _marker: PhantomData<fn(A) -> R>,
}

impl<F, Fut, A, R> FnOperation<F, A, R>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<F, Fut, A, R> Operation for FnOperation<F, A, R>
where
    F: Fn(A) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R>> + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    type Args = A;
    type Output = R;

    async fn call(&self, args: A) -> Result<R> {
        (self.f)(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{KvBackend, MemoryBackend};
    use crate::error::CacheError;
    use std::sync::Arc;

    fn doubler() -> impl Operation<Args = (i64,), Output = i64> {
        FnOperation::new(|(n,): (i64,)| async move { Ok(n * 2) })
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(counter_key("Cache.store"), "Cache.store");
        assert_eq!(inputs_key("Cache.store"), "Cache.store:inputs");
        assert_eq!(outputs_key("Cache.store"), "Cache.store:outputs");
    }

    #[tokio::test]
    async fn test_fn_operation_forwards() {
        let op = doubler();
        assert_eq!(op.call((21,)).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_instrument_counts_and_records() {
        let backend = MemoryBackend::new();
        let op = instrument(doubler(), "double", Arc::new(backend.clone()));

        assert_eq!(op.call((1,)).await.unwrap(), 2);
        assert_eq!(op.call((5,)).await.unwrap(), 10);

        assert_eq!(backend.get("double").await.unwrap(), Some(b"2".to_vec()));
        assert_eq!(
            backend.lrange("double:inputs", 0, -1).await.unwrap(),
            vec![b"(1,)".to_vec(), b"(5,)".to_vec()]
        );
        assert_eq!(
            backend.lrange("double:outputs", 0, -1).await.unwrap(),
            vec![b"2".to_vec(), b"10".to_vec()]
        );
    }

    #[tokio::test]
    async fn test_failed_call_keeps_partial_record() {
        let backend = MemoryBackend::new();
        let failing = FnOperation::new(|(_,): (String,)| async {
            Err::<String, _>(CacheError::Fetch("boom".to_string()))
        });
        let op = instrument(failing, "flaky", Arc::new(backend.clone()));

        let result = op.call(("x".to_string(),)).await;
        assert!(matches!(result, Err(CacheError::Fetch(_))));

        assert_eq!(backend.get("flaky").await.unwrap(), Some(b"1".to_vec()));
        assert_eq!(backend.lrange("flaky:inputs", 0, -1).await.unwrap().len(), 1);
        assert!(backend.lrange("flaky:outputs", 0, -1).await.unwrap().is_empty());
    }
}
