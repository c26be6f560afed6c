//! Transaction primitives for the omnichain client: the payload types of
//! every supported chain variant, the typed transaction sum type, the
//! transaction envelope and its canonical wire codec.

mod transaction;

pub use transaction::{
    arbitrum::{
        TxArbContract, TxArbDeposit, TxArbInternal, TxArbLegacy, TxArbRetry,
        TxArbSubmitRetryable, TxArbUnsigned, INTERNAL_TX_SENDER,
    },
    deposit::TxDeposit,
    effective_nonce::NoncedDeposit,
    envelope::{zero_signature, OmniTxEnvelope},
    l1_message::TxL1Message,
    mantle::TxMantleDeposit,
    signature::{derive_chain_id, legacy_v, parity_from_legacy_v, sanity_check_signature},
    tx_type::{OmniTxType, ARB_LEGACY_TX_TYPE_ID, DEPOSIT_TX_TYPE_ID},
    typed::OmniTypedTransaction,
    zeta::TxZeta,
};
