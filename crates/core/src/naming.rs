//! Human-readable identifier generation.

use rand::Rng;

use crate::types::Timestamp;

/// Characters used in generated suffixes. Ambiguous glyphs (0/O, 1/I/L)
/// are left out so order numbers survive being read over the phone.
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Length of the random suffix in an order number.
const SUFFIX_LEN: usize = 4;

/// Generate a template order number: `TPL-YYYYMMDD-XXXX`.
///
/// The suffix is random, so collisions are possible (roughly one in
/// 900k per day); the caller retries on a unique-constraint violation.
pub fn generate_order_number(now: Timestamp) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("TPL-{}-{}", now.format("%Y%m%d"), suffix)
}
