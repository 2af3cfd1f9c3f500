//! Constant-time signature comparison.

use subtle::ConstantTimeEq;

/// Compare two byte slices without leaking where they differ.
///
/// Length is not secret (it is fixed by the hash choice), so a length
/// mismatch returns early.
pub fn signatures_match(expected: &[u8], provided: &[u8]) -> bool {
    if expected.len() != provided.len() {
        return false;
    }
    expected.ct_eq(provided).into()
}
