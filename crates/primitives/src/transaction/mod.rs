//! Omnichain transaction types.

pub mod arbitrum;
pub mod deposit;
pub mod effective_nonce;
pub mod envelope;
pub mod l1_message;
pub mod mantle;
pub mod signature;
pub mod tx_type;
pub mod typed;
pub mod zeta;
