//! Token layouts. Both share the MAC engine; each owns its wire format.

pub mod generic;
pub mod timed;
