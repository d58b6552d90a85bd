//! Newtype IDs for type-safe identifiers.
//!
//! The catalog API numbers its products, so IDs wrap a `u64` rather than a
//! string. Keeping them as newtypes stops a product id from being passed
//! where an order number is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate numeric newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from its number.
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying number.
            pub fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);

/// Upper bound (exclusive) for simulated order numbers.
const ORDER_NUMBER_SPACE: u64 = 1_000_000;

impl OrderId {
    /// Generate a fresh order number below one million.
    pub fn generate() -> Self {
        Self(generate_number() % ORDER_NUMBER_SPACE)
    }
}

/// Generate a number from the clock and a process-wide counter.
fn generate_number() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    // Spread consecutive calls across the whole range
    (timestamp ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15)).wrapping_mul(31)
}
