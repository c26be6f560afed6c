//! The typed transaction sum type over every payload shape the client
//! speaks.

use alloy_consensus::{
    transaction::RlpEcdsaEncodableTx, SignableTransaction, Transaction, TxEip1559, TxEip2930,
    TxEip4844, TxLegacy, Typed2718,
};
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, ChainId, Signature, TxHash, TxKind, B256, U256};

use super::{
    arbitrum::{
        TxArbContract, TxArbDeposit, TxArbInternal, TxArbLegacy, TxArbRetry,
        TxArbSubmitRetryable, TxArbUnsigned, INTERNAL_TX_SENDER,
    },
    deposit::TxDeposit,
    effective_nonce::NoncedDeposit,
    l1_message::TxL1Message,
    mantle::TxMantleDeposit,
    tx_type::OmniTxType,
    zeta::TxZeta,
};

/// A transaction payload of any supported shape.
///
/// One arm per payload shape; the three deposit-family shapes (and their
/// nonce-decorated forms) share the family wire byte but stay distinct arms
/// so every dispatch is an exhaustive match the compiler checks when a
/// variant is added.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OmniTypedTransaction {
    /// Legacy transaction.
    Legacy(TxLegacy),
    /// EIP-2930 transaction.
    Eip2930(TxEip2930),
    /// EIP-1559 transaction.
    Eip1559(TxEip1559),
    /// EIP-4844 transaction.
    Eip4844(TxEip4844),
    /// Cosmos-bridged EVM call.
    Zeta(TxZeta),
    /// Retryable-family L1 deposit.
    ArbDeposit(TxArbDeposit),
    /// Unsigned L1-originated call.
    ArbUnsigned(TxArbUnsigned),
    /// Contract-triggered L1-originated call.
    ArbContract(TxArbContract),
    /// Retryable ticket redemption.
    ArbRetry(TxArbRetry),
    /// Retryable ticket submission.
    ArbSubmitRetryable(TxArbSubmitRetryable),
    /// Chain-owned internal bookkeeping.
    ArbInternal(TxArbInternal),
    /// Replayed pre-fork legacy transaction.
    ArbLegacy(TxArbLegacy),
    /// Bridge deposit.
    Deposit(TxDeposit),
    /// Bridge deposit decorated with an execution nonce.
    DepositNonced(NoncedDeposit<TxDeposit>),
    /// Extended bridge deposit.
    MantleDeposit(TxMantleDeposit),
    /// Extended bridge deposit decorated with an execution nonce.
    MantleDepositNonced(NoncedDeposit<TxMantleDeposit>),
    /// Cross-layer message relay.
    L1Message(TxL1Message),
}

macro_rules! impl_from_payload {
    ($($payload:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for OmniTypedTransaction {
                fn from(tx: $payload) -> Self {
                    Self::$variant(tx)
                }
            }
        )*
    };
}

impl_from_payload!(
    TxLegacy => Legacy,
    TxEip2930 => Eip2930,
    TxEip1559 => Eip1559,
    TxEip4844 => Eip4844,
    TxZeta => Zeta,
    TxArbDeposit => ArbDeposit,
    TxArbUnsigned => ArbUnsigned,
    TxArbContract => ArbContract,
    TxArbRetry => ArbRetry,
    TxArbSubmitRetryable => ArbSubmitRetryable,
    TxArbInternal => ArbInternal,
    TxArbLegacy => ArbLegacy,
    TxDeposit => Deposit,
    NoncedDeposit<TxDeposit> => DepositNonced,
    TxMantleDeposit => MantleDeposit,
    NoncedDeposit<TxMantleDeposit> => MantleDepositNonced,
    TxL1Message => L1Message,
);

impl OmniTypedTransaction {
    /// Return the [`OmniTxType`] of the inner txn.
    pub const fn tx_type(&self) -> OmniTxType {
        match self {
            Self::Legacy(_) => OmniTxType::Legacy,
            Self::Eip2930(_) => OmniTxType::Eip2930,
            Self::Eip1559(_) => OmniTxType::Eip1559,
            Self::Eip4844(_) => OmniTxType::Eip4844,
            Self::Zeta(_) => OmniTxType::Zeta,
            Self::ArbDeposit(_) => OmniTxType::ArbDeposit,
            Self::ArbUnsigned(_) => OmniTxType::ArbUnsigned,
            Self::ArbContract(_) => OmniTxType::ArbContract,
            Self::ArbRetry(_) => OmniTxType::ArbRetry,
            Self::ArbSubmitRetryable(_) => OmniTxType::ArbSubmitRetryable,
            Self::ArbInternal(_) => OmniTxType::ArbInternal,
            Self::ArbLegacy(_) => OmniTxType::ArbLegacy,
            Self::Deposit(_) | Self::DepositNonced(_) => OmniTxType::Deposit,
            Self::MantleDeposit(_) | Self::MantleDepositNonced(_) => OmniTxType::Deposit,
            Self::L1Message(_) => OmniTxType::Deposit,
        }
    }

    /// Calculates the signing hash, for the variants that are actually
    /// signed over.
    ///
    /// Returns `None` for every synthetic (signature-free) payload.
    pub fn checked_signature_hash(&self) -> Option<B256> {
        match self {
            Self::Legacy(tx) => Some(tx.signature_hash()),
            Self::Eip2930(tx) => Some(tx.signature_hash()),
            Self::Eip1559(tx) => Some(tx.signature_hash()),
            Self::Eip4844(tx) => Some(tx.signature_hash()),
            Self::ArbLegacy(tx) => Some(tx.legacy.signature_hash()),
            _ => None,
        }
    }

    /// The sender embedded in the payload, for the variants whose sender is
    /// forced rather than recovered.
    pub fn forced_sender(&self) -> Option<Address> {
        match self {
            Self::Legacy(_) | Self::Eip2930(_) | Self::Eip1559(_) | Self::Eip4844(_) => None,
            Self::Zeta(tx) => Some(tx.from),
            Self::ArbDeposit(tx) => Some(tx.from),
            Self::ArbUnsigned(tx) => Some(tx.from),
            Self::ArbContract(tx) => Some(tx.from),
            Self::ArbRetry(tx) => Some(tx.from),
            Self::ArbSubmitRetryable(tx) => Some(tx.from),
            Self::ArbInternal(_) => Some(INTERNAL_TX_SENDER),
            Self::ArbLegacy(tx) => tx.sender,
            Self::Deposit(tx) => Some(tx.from),
            Self::DepositNonced(tx) => Some(tx.inner.from),
            Self::MantleDeposit(tx) => Some(tx.from),
            Self::MantleDepositNonced(tx) => Some(tx.inner.from),
            Self::L1Message(tx) => Some(tx.sender),
        }
    }

    /// The execution-nonce override, if this payload carries one.
    pub const fn effective_nonce(&self) -> Option<u64> {
        match self {
            Self::DepositNonced(tx) => Some(tx.effective_nonce),
            Self::MantleDepositNonced(tx) => Some(tx.effective_nonce),
            _ => None,
        }
    }

    /// Returns `true` if the payload belongs to the bridge deposit family.
    pub const fn is_deposit(&self) -> bool {
        matches!(
            self,
            Self::Deposit(_)
                | Self::DepositNonced(_)
                | Self::MantleDeposit(_)
                | Self::MantleDepositNonced(_)
                | Self::L1Message(_)
        )
    }

    /// Return the inner legacy transaction if it exists.
    pub const fn legacy(&self) -> Option<&TxLegacy> {
        match self {
            Self::Legacy(tx) => Some(tx),
            _ => None,
        }
    }

    /// Return the inner EIP-1559 transaction if it exists.
    pub const fn eip1559(&self) -> Option<&TxEip1559> {
        match self {
            Self::Eip1559(tx) => Some(tx),
            _ => None,
        }
    }

    /// Return the inner bridge deposit if it exists, nonce-decorated or not.
    pub const fn deposit(&self) -> Option<&TxDeposit> {
        match self {
            Self::Deposit(tx) => Some(tx),
            Self::DepositNonced(tx) => Some(&tx.inner),
            _ => None,
        }
    }

    /// Return the inner message relay if it exists.
    pub const fn l1_message(&self) -> Option<&TxL1Message> {
        match self {
            Self::L1Message(tx) => Some(tx),
            _ => None,
        }
    }

    /// Calculate the transaction hash for the given signature.
    ///
    /// Synthetic payloads hash their own encoding and ignore the signature;
    /// the replayed legacy shape returns its pinned hash.
    pub fn tx_hash(&self, signature: &Signature) -> TxHash {
        match self {
            Self::Legacy(tx) => tx.tx_hash(signature),
            Self::Eip2930(tx) => tx.tx_hash(signature),
            Self::Eip1559(tx) => tx.tx_hash(signature),
            Self::Eip4844(tx) => tx.tx_hash(signature),
            Self::Zeta(tx) => tx.tx_hash(),
            Self::ArbDeposit(tx) => tx.tx_hash(),
            Self::ArbUnsigned(tx) => tx.tx_hash(),
            Self::ArbContract(tx) => tx.tx_hash(),
            Self::ArbRetry(tx) => tx.tx_hash(),
            Self::ArbSubmitRetryable(tx) => tx.tx_hash(),
            Self::ArbInternal(tx) => tx.tx_hash(),
            Self::ArbLegacy(tx) => tx.tx_hash(),
            Self::Deposit(tx) => tx.tx_hash(),
            Self::DepositNonced(tx) => tx.inner.tx_hash(),
            Self::MantleDeposit(tx) => tx.tx_hash(),
            Self::MantleDepositNonced(tx) => tx.inner.tx_hash(),
            Self::L1Message(tx) => tx.tx_hash(),
        }
    }
}

impl Typed2718 for OmniTypedTransaction {
    fn ty(&self) -> u8 {
        self.tx_type() as u8
    }
}

impl Transaction for OmniTypedTransaction {
    fn chain_id(&self) -> Option<ChainId> {
        match self {
            Self::Legacy(tx) => tx.chain_id(),
            Self::Eip2930(tx) => tx.chain_id(),
            Self::Eip1559(tx) => tx.chain_id(),
            Self::Eip4844(tx) => tx.chain_id(),
            Self::Zeta(tx) => tx.chain_id(),
            Self::ArbDeposit(tx) => tx.chain_id(),
            Self::ArbUnsigned(tx) => tx.chain_id(),
            Self::ArbContract(tx) => tx.chain_id(),
            Self::ArbRetry(tx) => tx.chain_id(),
            Self::ArbSubmitRetryable(tx) => tx.chain_id(),
            Self::ArbInternal(tx) => tx.chain_id(),
            Self::ArbLegacy(tx) => tx.chain_id(),
            Self::Deposit(tx) => tx.chain_id(),
            Self::DepositNonced(tx) => tx.chain_id(),
            Self::MantleDeposit(tx) => tx.chain_id(),
            Self::MantleDepositNonced(tx) => tx.chain_id(),
            Self::L1Message(tx) => tx.chain_id(),
        }
    }

    fn nonce(&self) -> u64 {
        match self {
            Self::Legacy(tx) => tx.nonce(),
            Self::Eip2930(tx) => tx.nonce(),
            Self::Eip1559(tx) => tx.nonce(),
            Self::Eip4844(tx) => tx.nonce(),
            Self::Zeta(tx) => tx.nonce(),
            Self::ArbDeposit(tx) => tx.nonce(),
            Self::ArbUnsigned(tx) => tx.nonce(),
            Self::ArbContract(tx) => tx.nonce(),
            Self::ArbRetry(tx) => tx.nonce(),
            Self::ArbSubmitRetryable(tx) => tx.nonce(),
            Self::ArbInternal(tx) => tx.nonce(),
            Self::ArbLegacy(tx) => tx.nonce(),
            Self::Deposit(tx) => tx.nonce(),
            Self::DepositNonced(tx) => tx.nonce(),
            Self::MantleDeposit(tx) => tx.nonce(),
            Self::MantleDepositNonced(tx) => tx.nonce(),
            Self::L1Message(tx) => tx.nonce(),
        }
    }

    fn gas_limit(&self) -> u64 {
        match self {
            Self::Legacy(tx) => tx.gas_limit(),
            Self::Eip2930(tx) => tx.gas_limit(),
            Self::Eip1559(tx) => tx.gas_limit(),
            Self::Eip4844(tx) => tx.gas_limit(),
            Self::Zeta(tx) => tx.gas_limit(),
            Self::ArbDeposit(tx) => tx.gas_limit(),
            Self::ArbUnsigned(tx) => tx.gas_limit(),
            Self::ArbContract(tx) => tx.gas_limit(),
            Self::ArbRetry(tx) => tx.gas_limit(),
            Self::ArbSubmitRetryable(tx) => tx.gas_limit(),
            Self::ArbInternal(tx) => tx.gas_limit(),
            Self::ArbLegacy(tx) => tx.gas_limit(),
            Self::Deposit(tx) => tx.gas_limit(),
            Self::DepositNonced(tx) => tx.gas_limit(),
            Self::MantleDeposit(tx) => tx.gas_limit(),
            Self::MantleDepositNonced(tx) => tx.gas_limit(),
            Self::L1Message(tx) => tx.gas_limit(),
        }
    }

    fn gas_price(&self) -> Option<u128> {
        match self {
            Self::Legacy(tx) => tx.gas_price(),
            Self::Eip2930(tx) => tx.gas_price(),
            Self::Eip1559(tx) => tx.gas_price(),
            Self::Eip4844(tx) => tx.gas_price(),
            Self::Zeta(tx) => tx.gas_price(),
            Self::ArbDeposit(tx) => tx.gas_price(),
            Self::ArbUnsigned(tx) => tx.gas_price(),
            Self::ArbContract(tx) => tx.gas_price(),
            Self::ArbRetry(tx) => tx.gas_price(),
            Self::ArbSubmitRetryable(tx) => tx.gas_price(),
            Self::ArbInternal(tx) => tx.gas_price(),
            Self::ArbLegacy(tx) => tx.gas_price(),
            Self::Deposit(tx) => tx.gas_price(),
            Self::DepositNonced(tx) => tx.gas_price(),
            Self::MantleDeposit(tx) => tx.gas_price(),
            Self::MantleDepositNonced(tx) => tx.gas_price(),
            Self::L1Message(tx) => tx.gas_price(),
        }
    }

    fn max_fee_per_gas(&self) -> u128 {
        match self {
            Self::Legacy(tx) => tx.max_fee_per_gas(),
            Self::Eip2930(tx) => tx.max_fee_per_gas(),
            Self::Eip1559(tx) => tx.max_fee_per_gas(),
            Self::Eip4844(tx) => tx.max_fee_per_gas(),
            Self::Zeta(tx) => tx.max_fee_per_gas(),
            Self::ArbDeposit(tx) => tx.max_fee_per_gas(),
            Self::ArbUnsigned(tx) => tx.max_fee_per_gas(),
            Self::ArbContract(tx) => tx.max_fee_per_gas(),
            Self::ArbRetry(tx) => tx.max_fee_per_gas(),
            Self::ArbSubmitRetryable(tx) => tx.max_fee_per_gas(),
            Self::ArbInternal(tx) => tx.max_fee_per_gas(),
            Self::ArbLegacy(tx) => tx.max_fee_per_gas(),
            Self::Deposit(tx) => tx.max_fee_per_gas(),
            Self::DepositNonced(tx) => tx.max_fee_per_gas(),
            Self::MantleDeposit(tx) => tx.max_fee_per_gas(),
            Self::MantleDepositNonced(tx) => tx.max_fee_per_gas(),
            Self::L1Message(tx) => tx.max_fee_per_gas(),
        }
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        match self {
            Self::Legacy(tx) => tx.max_priority_fee_per_gas(),
            Self::Eip2930(tx) => tx.max_priority_fee_per_gas(),
            Self::Eip1559(tx) => tx.max_priority_fee_per_gas(),
            Self::Eip4844(tx) => tx.max_priority_fee_per_gas(),
            Self::Zeta(tx) => tx.max_priority_fee_per_gas(),
            Self::ArbDeposit(tx) => tx.max_priority_fee_per_gas(),
            Self::ArbUnsigned(tx) => tx.max_priority_fee_per_gas(),
            Self::ArbContract(tx) => tx.max_priority_fee_per_gas(),
            Self::ArbRetry(tx) => tx.max_priority_fee_per_gas(),
            Self::ArbSubmitRetryable(tx) => tx.max_priority_fee_per_gas(),
            Self::ArbInternal(tx) => tx.max_priority_fee_per_gas(),
            Self::ArbLegacy(tx) => tx.max_priority_fee_per_gas(),
            Self::Deposit(tx) => tx.max_priority_fee_per_gas(),
            Self::DepositNonced(tx) => tx.max_priority_fee_per_gas(),
            Self::MantleDeposit(tx) => tx.max_priority_fee_per_gas(),
            Self::MantleDepositNonced(tx) => tx.max_priority_fee_per_gas(),
            Self::L1Message(tx) => tx.max_priority_fee_per_gas(),
        }
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        match self {
            Self::Legacy(tx) => tx.max_fee_per_blob_gas(),
            Self::Eip2930(tx) => tx.max_fee_per_blob_gas(),
            Self::Eip1559(tx) => tx.max_fee_per_blob_gas(),
            Self::Eip4844(tx) => tx.max_fee_per_blob_gas(),
            Self::Zeta(tx) => tx.max_fee_per_blob_gas(),
            Self::ArbDeposit(tx) => tx.max_fee_per_blob_gas(),
            Self::ArbUnsigned(tx) => tx.max_fee_per_blob_gas(),
            Self::ArbContract(tx) => tx.max_fee_per_blob_gas(),
            Self::ArbRetry(tx) => tx.max_fee_per_blob_gas(),
            Self::ArbSubmitRetryable(tx) => tx.max_fee_per_blob_gas(),
            Self::ArbInternal(tx) => tx.max_fee_per_blob_gas(),
            Self::ArbLegacy(tx) => tx.max_fee_per_blob_gas(),
            Self::Deposit(tx) => tx.max_fee_per_blob_gas(),
            Self::DepositNonced(tx) => tx.max_fee_per_blob_gas(),
            Self::MantleDeposit(tx) => tx.max_fee_per_blob_gas(),
            Self::MantleDepositNonced(tx) => tx.max_fee_per_blob_gas(),
            Self::L1Message(tx) => tx.max_fee_per_blob_gas(),
        }
    }

    fn priority_fee_or_price(&self) -> u128 {
        match self {
            Self::Legacy(tx) => tx.priority_fee_or_price(),
            Self::Eip2930(tx) => tx.priority_fee_or_price(),
            Self::Eip1559(tx) => tx.priority_fee_or_price(),
            Self::Eip4844(tx) => tx.priority_fee_or_price(),
            Self::Zeta(tx) => tx.priority_fee_or_price(),
            Self::ArbDeposit(tx) => tx.priority_fee_or_price(),
            Self::ArbUnsigned(tx) => tx.priority_fee_or_price(),
            Self::ArbContract(tx) => tx.priority_fee_or_price(),
            Self::ArbRetry(tx) => tx.priority_fee_or_price(),
            Self::ArbSubmitRetryable(tx) => tx.priority_fee_or_price(),
            Self::ArbInternal(tx) => tx.priority_fee_or_price(),
            Self::ArbLegacy(tx) => tx.priority_fee_or_price(),
            Self::Deposit(tx) => tx.priority_fee_or_price(),
            Self::DepositNonced(tx) => tx.priority_fee_or_price(),
            Self::MantleDeposit(tx) => tx.priority_fee_or_price(),
            Self::MantleDepositNonced(tx) => tx.priority_fee_or_price(),
            Self::L1Message(tx) => tx.priority_fee_or_price(),
        }
    }

    fn effective_gas_price(&self, base_fee: Option<u64>) -> u128 {
        match self {
            Self::Legacy(tx) => tx.effective_gas_price(base_fee),
            Self::Eip2930(tx) => tx.effective_gas_price(base_fee),
            Self::Eip1559(tx) => tx.effective_gas_price(base_fee),
            Self::Eip4844(tx) => tx.effective_gas_price(base_fee),
            Self::Zeta(tx) => tx.effective_gas_price(base_fee),
            Self::ArbDeposit(tx) => tx.effective_gas_price(base_fee),
            Self::ArbUnsigned(tx) => tx.effective_gas_price(base_fee),
            Self::ArbContract(tx) => tx.effective_gas_price(base_fee),
            Self::ArbRetry(tx) => tx.effective_gas_price(base_fee),
            Self::ArbSubmitRetryable(tx) => tx.effective_gas_price(base_fee),
            Self::ArbInternal(tx) => tx.effective_gas_price(base_fee),
            Self::ArbLegacy(tx) => tx.effective_gas_price(base_fee),
            Self::Deposit(tx) => tx.effective_gas_price(base_fee),
            Self::DepositNonced(tx) => tx.effective_gas_price(base_fee),
            Self::MantleDeposit(tx) => tx.effective_gas_price(base_fee),
            Self::MantleDepositNonced(tx) => tx.effective_gas_price(base_fee),
            Self::L1Message(tx) => tx.effective_gas_price(base_fee),
        }
    }

    fn is_dynamic_fee(&self) -> bool {
        match self {
            Self::Legacy(tx) => tx.is_dynamic_fee(),
            Self::Eip2930(tx) => tx.is_dynamic_fee(),
            Self::Eip1559(tx) => tx.is_dynamic_fee(),
            Self::Eip4844(tx) => tx.is_dynamic_fee(),
            Self::Zeta(tx) => tx.is_dynamic_fee(),
            Self::ArbDeposit(tx) => tx.is_dynamic_fee(),
            Self::ArbUnsigned(tx) => tx.is_dynamic_fee(),
            Self::ArbContract(tx) => tx.is_dynamic_fee(),
            Self::ArbRetry(tx) => tx.is_dynamic_fee(),
            Self::ArbSubmitRetryable(tx) => tx.is_dynamic_fee(),
            Self::ArbInternal(tx) => tx.is_dynamic_fee(),
            Self::ArbLegacy(tx) => tx.is_dynamic_fee(),
            Self::Deposit(tx) => tx.is_dynamic_fee(),
            Self::DepositNonced(tx) => tx.is_dynamic_fee(),
            Self::MantleDeposit(tx) => tx.is_dynamic_fee(),
            Self::MantleDepositNonced(tx) => tx.is_dynamic_fee(),
            Self::L1Message(tx) => tx.is_dynamic_fee(),
        }
    }

    fn kind(&self) -> TxKind {
        match self {
            Self::Legacy(tx) => tx.kind(),
            Self::Eip2930(tx) => tx.kind(),
            Self::Eip1559(tx) => tx.kind(),
            Self::Eip4844(tx) => tx.kind(),
            Self::Zeta(tx) => tx.kind(),
            Self::ArbDeposit(tx) => tx.kind(),
            Self::ArbUnsigned(tx) => tx.kind(),
            Self::ArbContract(tx) => tx.kind(),
            Self::ArbRetry(tx) => tx.kind(),
            Self::ArbSubmitRetryable(tx) => tx.kind(),
            Self::ArbInternal(tx) => tx.kind(),
            Self::ArbLegacy(tx) => tx.kind(),
            Self::Deposit(tx) => tx.kind(),
            Self::DepositNonced(tx) => tx.kind(),
            Self::MantleDeposit(tx) => tx.kind(),
            Self::MantleDepositNonced(tx) => tx.kind(),
            Self::L1Message(tx) => tx.kind(),
        }
    }

    fn is_create(&self) -> bool {
        match self {
            Self::Legacy(tx) => tx.is_create(),
            Self::Eip2930(tx) => tx.is_create(),
            Self::Eip1559(tx) => tx.is_create(),
            Self::Eip4844(tx) => tx.is_create(),
            Self::Zeta(tx) => tx.is_create(),
            Self::ArbDeposit(tx) => tx.is_create(),
            Self::ArbUnsigned(tx) => tx.is_create(),
            Self::ArbContract(tx) => tx.is_create(),
            Self::ArbRetry(tx) => tx.is_create(),
            Self::ArbSubmitRetryable(tx) => tx.is_create(),
            Self::ArbInternal(tx) => tx.is_create(),
            Self::ArbLegacy(tx) => tx.is_create(),
            Self::Deposit(tx) => tx.is_create(),
            Self::DepositNonced(tx) => tx.is_create(),
            Self::MantleDeposit(tx) => tx.is_create(),
            Self::MantleDepositNonced(tx) => tx.is_create(),
            Self::L1Message(tx) => tx.is_create(),
        }
    }

    fn value(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.value(),
            Self::Eip2930(tx) => tx.value(),
            Self::Eip1559(tx) => tx.value(),
            Self::Eip4844(tx) => tx.value(),
            Self::Zeta(tx) => tx.value(),
            Self::ArbDeposit(tx) => tx.value(),
            Self::ArbUnsigned(tx) => tx.value(),
            Self::ArbContract(tx) => tx.value(),
            Self::ArbRetry(tx) => tx.value(),
            Self::ArbSubmitRetryable(tx) => tx.value(),
            Self::ArbInternal(tx) => tx.value(),
            Self::ArbLegacy(tx) => tx.value(),
            Self::Deposit(tx) => tx.value(),
            Self::DepositNonced(tx) => tx.value(),
            Self::MantleDeposit(tx) => tx.value(),
            Self::MantleDepositNonced(tx) => tx.value(),
            Self::L1Message(tx) => tx.value(),
        }
    }

    fn input(&self) -> &Bytes {
        match self {
            Self::Legacy(tx) => tx.input(),
            Self::Eip2930(tx) => tx.input(),
            Self::Eip1559(tx) => tx.input(),
            Self::Eip4844(tx) => tx.input(),
            Self::Zeta(tx) => tx.input(),
            Self::ArbDeposit(tx) => tx.input(),
            Self::ArbUnsigned(tx) => tx.input(),
            Self::ArbContract(tx) => tx.input(),
            Self::ArbRetry(tx) => tx.input(),
            Self::ArbSubmitRetryable(tx) => tx.input(),
            Self::ArbInternal(tx) => tx.input(),
            Self::ArbLegacy(tx) => tx.input(),
            Self::Deposit(tx) => tx.input(),
            Self::DepositNonced(tx) => tx.input(),
            Self::MantleDeposit(tx) => tx.input(),
            Self::MantleDepositNonced(tx) => tx.input(),
            Self::L1Message(tx) => tx.input(),
        }
    }

    fn access_list(&self) -> Option<&AccessList> {
        match self {
            Self::Legacy(tx) => tx.access_list(),
            Self::Eip2930(tx) => tx.access_list(),
            Self::Eip1559(tx) => tx.access_list(),
            Self::Eip4844(tx) => tx.access_list(),
            Self::Zeta(tx) => tx.access_list(),
            Self::ArbDeposit(tx) => tx.access_list(),
            Self::ArbUnsigned(tx) => tx.access_list(),
            Self::ArbContract(tx) => tx.access_list(),
            Self::ArbRetry(tx) => tx.access_list(),
            Self::ArbSubmitRetryable(tx) => tx.access_list(),
            Self::ArbInternal(tx) => tx.access_list(),
            Self::ArbLegacy(tx) => tx.access_list(),
            Self::Deposit(tx) => tx.access_list(),
            Self::DepositNonced(tx) => tx.access_list(),
            Self::MantleDeposit(tx) => tx.access_list(),
            Self::MantleDepositNonced(tx) => tx.access_list(),
            Self::L1Message(tx) => tx.access_list(),
        }
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        match self {
            Self::Legacy(tx) => tx.blob_versioned_hashes(),
            Self::Eip2930(tx) => tx.blob_versioned_hashes(),
            Self::Eip1559(tx) => tx.blob_versioned_hashes(),
            Self::Eip4844(tx) => tx.blob_versioned_hashes(),
            Self::Zeta(tx) => tx.blob_versioned_hashes(),
            Self::ArbDeposit(tx) => tx.blob_versioned_hashes(),
            Self::ArbUnsigned(tx) => tx.blob_versioned_hashes(),
            Self::ArbContract(tx) => tx.blob_versioned_hashes(),
            Self::ArbRetry(tx) => tx.blob_versioned_hashes(),
            Self::ArbSubmitRetryable(tx) => tx.blob_versioned_hashes(),
            Self::ArbInternal(tx) => tx.blob_versioned_hashes(),
            Self::ArbLegacy(tx) => tx.blob_versioned_hashes(),
            Self::Deposit(tx) => tx.blob_versioned_hashes(),
            Self::DepositNonced(tx) => tx.blob_versioned_hashes(),
            Self::MantleDeposit(tx) => tx.blob_versioned_hashes(),
            Self::MantleDepositNonced(tx) => tx.blob_versioned_hashes(),
            Self::L1Message(tx) => tx.blob_versioned_hashes(),
        }
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        match self {
            Self::Legacy(tx) => tx.authorization_list(),
            Self::Eip2930(tx) => tx.authorization_list(),
            Self::Eip1559(tx) => tx.authorization_list(),
            Self::Eip4844(tx) => tx.authorization_list(),
            Self::Zeta(tx) => tx.authorization_list(),
            Self::ArbDeposit(tx) => tx.authorization_list(),
            Self::ArbUnsigned(tx) => tx.authorization_list(),
            Self::ArbContract(tx) => tx.authorization_list(),
            Self::ArbRetry(tx) => tx.authorization_list(),
            Self::ArbSubmitRetryable(tx) => tx.authorization_list(),
            Self::ArbInternal(tx) => tx.authorization_list(),
            Self::ArbLegacy(tx) => tx.authorization_list(),
            Self::Deposit(tx) => tx.authorization_list(),
            Self::DepositNonced(tx) => tx.authorization_list(),
            Self::MantleDeposit(tx) => tx.authorization_list(),
            Self::MantleDepositNonced(tx) => tx.authorization_list(),
            Self::L1Message(tx) => tx.authorization_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_family_shares_the_wire_byte() {
        let deposit = OmniTypedTransaction::Deposit(TxDeposit::default());
        let mantle = OmniTypedTransaction::MantleDeposit(TxMantleDeposit::default());
        let message = OmniTypedTransaction::L1Message(TxL1Message::default());
        assert_eq!(deposit.tx_type(), OmniTxType::Deposit);
        assert_eq!(mantle.tx_type(), OmniTxType::Deposit);
        assert_eq!(message.tx_type(), OmniTxType::Deposit);
    }

    #[test]
    fn nonced_arms_report_the_override() {
        let tx = OmniTypedTransaction::DepositNonced(NoncedDeposit::new(TxDeposit::default(), 5));
        assert_eq!(tx.nonce(), 5);
        assert_eq!(tx.effective_nonce(), Some(5));
        let bare = OmniTypedTransaction::Deposit(TxDeposit::default());
        assert_eq!(bare.effective_nonce(), None);
    }

    #[test]
    fn forced_senders() {
        let msg = TxL1Message {
            sender: Address::left_padding_from(&[0x0c]),
            ..Default::default()
        };
        let tx = OmniTypedTransaction::L1Message(msg);
        assert_eq!(tx.forced_sender(), Some(Address::left_padding_from(&[0x0c])));

        let internal = OmniTypedTransaction::ArbInternal(TxArbInternal::default());
        assert_eq!(internal.forced_sender(), Some(INTERNAL_TX_SENDER));

        let legacy = OmniTypedTransaction::Legacy(TxLegacy::default());
        assert_eq!(legacy.forced_sender(), None);
    }
}
