//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check call accounting and storage round-trips over
//! generated payload sequences.

use proptest::prelude::*;
use std::sync::Arc;

use crate::backend::{KvBackend, MemoryBackend};
use crate::cache::{Cache, Payload, STORE_OPERATION};
use crate::instrument::{inputs_key, outputs_key};

// == Strategies ==
/// Generates payloads of every kind
fn payload_strategy() -> impl Strategy<Value = Payload> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,64}".prop_map(Payload::Text),
        any::<i64>().prop_map(Payload::Int),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Payload::Bytes),
    ]
}

/// Generates keys that `store` never produces (UUIDs contain dashes)
fn foreign_key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,32}".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // After N successful stores the counter is N and both logs hold N
    // entries, in call order.
    #[test]
    fn prop_call_accounting(payloads in prop::collection::vec(payload_strategy(), 1..20)) {
        tokio_test::block_on(async {
            let backend = MemoryBackend::new();
            let cache = Cache::new(Arc::new(backend.clone()));

            let mut keys = Vec::new();
            for payload in &payloads {
                keys.push(cache.store(payload.clone()).await.unwrap());
            }

            let report = cache.replay().await.unwrap();
            prop_assert_eq!(report.calls, payloads.len() as u64);

            let inputs = backend.lrange(&inputs_key(STORE_OPERATION), 0, -1).await.unwrap();
            let outputs = backend.lrange(&outputs_key(STORE_OPERATION), 0, -1).await.unwrap();
            prop_assert_eq!(inputs.len(), payloads.len());
            prop_assert_eq!(outputs.len(), payloads.len());

            for (i, payload) in payloads.iter().enumerate() {
                let expected_input = format!("{:?}", (payload,));
                prop_assert_eq!(&report.history[i].input, &expected_input);
                prop_assert_eq!(&report.history[i].output, &keys[i]);
            }
            Ok(())
        })?;
    }

    // A stored payload reads back as the exact bytes it encodes to.
    #[test]
    fn prop_roundtrip_storage(payload in payload_strategy()) {
        tokio_test::block_on(async {
            let cache = Cache::new(Arc::new(MemoryBackend::new()));

            let key = cache.store(payload.clone()).await.unwrap();
            let raw = cache.get_raw(&key).await.unwrap();
            prop_assert_eq!(raw, Some(payload.to_bytes()));

            if let Payload::Int(n) = payload {
                prop_assert_eq!(cache.get_int(&key).await.unwrap(), Some(n));
            }
            Ok(())
        })?;
    }

    // Lookups of keys that were never stored return None, never an error.
    #[test]
    fn prop_missing_keys_are_absent(
        payloads in prop::collection::vec(payload_strategy(), 0..10),
        key in foreign_key_strategy()
    ) {
        tokio_test::block_on(async {
            let cache = Cache::new(Arc::new(MemoryBackend::new()));
            for payload in payloads {
                cache.store(payload).await.unwrap();
            }

            prop_assert_eq!(cache.get_raw(&key).await.unwrap(), None);
            prop_assert_eq!(cache.get_int(&key).await.unwrap(), None);
            Ok(())
        })?;
    }
}
