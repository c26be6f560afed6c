//! JSON exchange types for the omnichain client.
//!
//! One flat transaction object covers every payload shape; conversion to
//! and from [`omni_primitives::OmniTxEnvelope`] validates required and
//! forbidden fields per shape before any value is built.

mod transaction;

pub use transaction::{Transaction, TxConversionError};
