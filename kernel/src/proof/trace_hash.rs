//! Trace digests: a hash chain over canonical step records.
//!
//! ```text
//! h_0 = H(TRACE_HEADER, canonical({algorithm, step_count}))
//! h_i = H(TRACE_STEP_CHAIN, h_{i-1} || canonical(step_i))
//! ```
//!
//! Two traces have equal digests iff they carry the same algorithm id and
//! byte-identical canonical steps in the same order.

use crate::model::{Element, Snapshot, Trace};

use super::canon::{encode_step, header_bytes};
use super::hash::{content_hash_from_raw, raw_hash, raw_hash2, ContentHash};
use super::hash_domain::HashDomain;

/// Digest of a whole trace.
#[must_use]
pub fn trace_digest<S: Snapshot>(trace: &Trace<S>) -> ContentHash {
    let header = header_bytes(trace.algorithm(), trace.len());
    let mut chain = raw_hash(HashDomain::TraceHeader, &header);
    let mut bytes = Vec::new();
    for step in trace {
        bytes.clear();
        encode_step(step, &mut bytes);
        chain = raw_hash2(HashDomain::TraceStepChain, &chain, &bytes);
    }
    content_hash_from_raw(&chain)
}

impl<S: Snapshot> Trace<S> {
    /// Chained content hash of this trace. See [`trace_digest`].
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        trace_digest(self)
    }
}

/// Fingerprint of an input collection (ids and values, in order).
#[must_use]
pub fn input_fingerprint(elements: &[Element]) -> [u8; 32] {
    let mut bytes = Vec::with_capacity(elements.len() * 12);
    for e in elements {
        bytes.extend_from_slice(&e.id.to_le_bytes());
        bytes.extend_from_slice(&e.value.to_le_bytes());
    }
    raw_hash(HashDomain::InputFingerprint, &bytes)
}

/// A 64-bit seed derived from [`input_fingerprint`].
///
/// Randomized algorithms seed from this so equal inputs give equal traces.
#[must_use]
pub fn input_seed(elements: &[Element]) -> u64 {
    let fp = input_fingerprint(elements);
    let mut head = [0u8; 8];
    head.copy_from_slice(&fp[..8]);
    u64::from_le_bytes(head)
}
