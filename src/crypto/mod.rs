//! Cryptographic primitives shared by both token layouts.

pub mod compare;
pub mod encoding;
pub mod expiry;
pub mod mac;
