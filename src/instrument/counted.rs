//! Call Counter Wrapper
//!
//! Increments a per-operation counter before forwarding each call.

use async_trait::async_trait;
use tracing::debug;

use crate::backend::SharedBackend;
use crate::error::Result;
use crate::instrument::{counter_key, Operation};

// == Counted ==
/// Wraps an operation and counts its invocations in the backing store.
///
/// The increment is committed before the inner call runs, so failed calls
/// are still counted.
pub struct Counted<Op> {
    inner: Op,
    id: String,
    backend: SharedBackend,
}

impl<Op> Counted<Op> {
    // == Constructor ==
    /// Wraps `inner`, counting calls under `id`.
    pub fn new(inner: Op, id: impl Into<String>, backend: SharedBackend) -> Self {
        Self {
            inner,
            id: id.into(),
            backend,
        }
    }
}

#[async_trait]
impl<Op: Operation> Operation for Counted<Op> {
    type Args = Op::Args;
    type Output = Op::Output;

    async fn call(&self, args: Self::Args) -> Result<Self::Output> {
        let count = self.backend.incr(&counter_key(&self.id)).await?;
        debug!("{} call #{}", self.id, count);
        self.inner.call(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{KvBackend, MemoryBackend};
    use crate::instrument::FnOperation;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_counts_each_call() {
        let backend = MemoryBackend::new();
        let op = Counted::new(
            FnOperation::new(|(s,): (&'static str,)| async move { Ok(s.len()) }),
            "len",
            Arc::new(backend.clone()),
        );

        for _ in 0..3 {
            assert_eq!(op.call(("abc",)).await.unwrap(), 3);
        }

        assert_eq!(backend.get("len").await.unwrap(), Some(b"3".to_vec()));
        assert!(backend.lrange("len:inputs", 0, -1).await.unwrap().is_empty());
    }
}
