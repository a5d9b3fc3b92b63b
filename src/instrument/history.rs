//! Call History Wrapper
//!
//! Appends the arguments and result of every call to per-operation lists.

use std::fmt::{Debug, Display};

use async_trait::async_trait;
use tracing::debug;

use crate::backend::SharedBackend;
use crate::error::Result;
use crate::instrument::{inputs_key, outputs_key, Operation};

// == Recorded ==
/// Wraps an operation and logs its inputs and outputs in the backing store.
///
/// The input entry is written before the inner call and the output entry
/// after it succeeds. A failing call leaves an input without a matching output.
pub struct Recorded<Op> {
    inner: Op,
    inputs_key: String,
    outputs_key: String,
    backend: SharedBackend,
}

impl<Op> Recorded<Op> {
    // == Constructor ==
    /// Wraps `inner`, recording calls under `id`.
    pub fn new(inner: Op, id: impl Into<String>, backend: SharedBackend) -> Self {
        let id = id.into();
        Self {
            inner,
            inputs_key: inputs_key(&id),
            outputs_key: outputs_key(&id),
            backend,
        }
    }
}

#[async_trait]
impl<Op> Operation for Recorded<Op>
where
    Op: Operation,
    Op::Args: Debug,
    Op::Output: Display,
{
    type Args = Op::Args;
    type Output = Op::Output;

    async fn call(&self, args: Self::Args) -> Result<Self::Output> {
        let input = format!("{:?}", args);
        self.backend
            .rpush(&self.inputs_key, input.into_bytes())
            .await?;

        let output = self.inner.call(args).await?;

        let rendered = output.to_string();
        debug!("{} <- {}", self.outputs_key, rendered);
        self.backend
            .rpush(&self.outputs_key, rendered.into_bytes())
            .await?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{KvBackend, MemoryBackend};
    use crate::instrument::FnOperation;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_records_without_counting() {
        let backend = MemoryBackend::new();
        let op = Recorded::new(
            FnOperation::new(|(a, b): (i64, String)| async move { Ok(format!("{}{}", a, b)) }),
            "join",
            Arc::new(backend.clone()),
        );

        let out = op.call((7, "x".to_string())).await.unwrap();
        assert_eq!(out, "7x");

        assert_eq!(backend.get("join").await.unwrap(), None);
        assert_eq!(
            backend.lrange("join:inputs", 0, -1).await.unwrap(),
            vec![br#"(7, "x")"#.to_vec()]
        );
        assert_eq!(
            backend.lrange("join:outputs", 0, -1).await.unwrap(),
            vec![b"7x".to_vec()]
        );
    }
}
