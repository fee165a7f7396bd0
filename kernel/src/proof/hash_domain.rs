//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]; this module is
//! the single authority for the separator bytes. The enum, `as_bytes()`,
//! `ALL` and `Display` are generated from one macro invocation so they
//! cannot drift apart.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used
        /// as a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Trace header commitment (algorithm id + step count); seeds the chain.
    TraceHeader => b"ALGOSCOPE::TRACE_HEADER::V1\0",

    /// Per-step chain link: `h_i = H(domain || h_{i-1} || step_json)`.
    TraceStepChain => b"ALGOSCOPE::TRACE_STEP_CHAIN::V1\0",

    /// Input collection fingerprint (seeds randomized algorithms).
    InputFingerprint => b"ALGOSCOPE::INPUT_FINGERPRINT::V1\0",
}
