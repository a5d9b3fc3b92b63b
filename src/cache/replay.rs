//! Replay Module
//!
//! Read-only report of an instrumented operation's call history.

use std::fmt;

use crate::backend::KvBackend;
use crate::cache::decode;
use crate::error::{CacheError, Result};
use crate::instrument::{counter_key, inputs_key, outputs_key};

// == Call Record ==
/// One recorded call: rendered arguments paired with the rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub input: String,
    pub output: String,
}

// == Replay ==
/// Invocation count and recorded calls of one operation, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// Operation identifier
    pub operation: String,
    /// Value of the invocation counter (0 if never called)
    pub calls: u64,
    /// Inputs zipped with outputs. A call that failed after logging its
    /// input has no output, so this may be shorter than `calls`.
    pub history: Vec<CallRecord>,
}

/// Loads the call history recorded under `operation`.
pub async fn replay(backend: &dyn KvBackend, operation: &str) -> Result<Replay> {
    let calls = match backend.get(&counter_key(operation)).await? {
        Some(bytes) => {
            let n = decode::integer(&bytes)?;
            u64::try_from(n).map_err(|_| {
                CacheError::Decode(format!("negative call count for {}: {}", operation, n))
            })?
        }
        None => 0,
    };

    let inputs = backend.lrange(&inputs_key(operation), 0, -1).await?;
    let outputs = backend.lrange(&outputs_key(operation), 0, -1).await?;

    let history = inputs
        .iter()
        .zip(outputs.iter())
        .map(|(input, output)| CallRecord {
            input: String::from_utf8_lossy(input).into_owned(),
            output: String::from_utf8_lossy(output).into_owned(),
        })
        .collect();

    Ok(Replay {
        operation: operation.to_string(),
        calls,
        history,
    })
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was called {} times:", self.operation, self.calls)?;
        for record in &self.history {
            write!(
                f,
                "\n{}(*{}) -> {}",
                self.operation, record.input, record.output
            )?;
        }
        Ok(())
    }
}
