use tracing::debug;

use intent_types::{Execution, MultiChainCompact};

/// Prepends orchestrator-injected executions to the first segment's witness.
///
/// Injected steps must run before the executions already present, so they go
/// in front and the existing order is kept. Segments past the first settle on
/// other chains and are left alone. A bundle with no segments is returned
/// unchanged.
pub fn apply_injected_executions(bundle: MultiChainCompact, injected: Vec<Execution>) -> MultiChainCompact {
    if injected.is_empty() {
        return bundle;
    }
    let mut bundle = bundle;
    if let Some(segment) = bundle.segments.first_mut() {
        debug!("prepending {} injected executions to first segment", injected.len());
        let existing = std::mem::take(&mut segment.witness.execs);
        segment.witness.execs = injected.into_iter().chain(existing).collect();
    }
    bundle
}

#[cfg(test)]
mod test {
    use alloy_primitives::{Address, Bytes, U256};

    use intent_types::{ChainSegment, SegmentWitness};

    use super::*;

    fn execution(tag: u8) -> Execution {
        Execution::new(Address::repeat_byte(tag), U256::from(tag), &Bytes::from(vec![tag]))
    }

    fn segment(chain_id: u64, execs: Vec<Execution>) -> ChainSegment {
        ChainSegment {
            arbiter: Address::repeat_byte(0x22),
            chain_id,
            ids_and_amounts: vec![[U256::from(1), U256::from(100)]],
            witness: SegmentWitness {
                recipient: Address::repeat_byte(0x33),
                token_out: vec![[U256::from(2), U256::from(99)]],
                deposit_id: U256::from(7),
                target_chain: 42161,
                fill_deadline: 1_750_000_600,
                execs,
            },
        }
    }

    fn bundle(segments: Vec<ChainSegment>) -> MultiChainCompact {
        MultiChainCompact {
            sponsor: Address::repeat_byte(0x11),
            nonce: U256::from(42),
            expires: U256::from(1_750_000_000u64),
            segments,
        }
    }

    #[test]
    fn test_empty_injection_leaves_bundle_unchanged() {
        let original = bundle(vec![segment(1, vec![execution(0xa1)])]);
        let updated = apply_injected_executions(original.clone(), vec![]);
        assert_eq!(updated, original);
    }

    #[test]
    fn test_injected_executions_go_in_front_of_first_segment() {
        let original = bundle(vec![
            segment(1, vec![execution(0xa1), execution(0xa2)]),
            segment(10, vec![execution(0xb1)]),
        ]);
        let injected = vec![execution(0xc1), execution(0xc2), execution(0xc3)];

        let updated = apply_injected_executions(original.clone(), injected.clone());

        let execs = &updated.segments[0].witness.execs;
        assert_eq!(execs.len(), 5);
        assert_eq!(execs[..3], injected[..]);
        assert_eq!(execs[3..], original.segments[0].witness.execs[..]);
        assert_eq!(updated.segments[1], original.segments[1]);
    }

    #[test]
    fn test_segmentless_bundle_is_returned_unchanged() {
        let original = bundle(vec![]);
        let updated = apply_injected_executions(original.clone(), vec![execution(0xc1)]);
        assert_eq!(updated, original);
    }
}
