//! Proof module: canonical serialization, trace digests, replay verification.
//!
//! Depends on `model`. Nothing in the kernel depends on `proof`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod replay;
pub mod trace_hash;
