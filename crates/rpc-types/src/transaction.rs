//! The flat RPC transaction object and its per-variant validation.

use alloy_consensus::{TxEip1559, TxEip2930, TxEip4844, TxLegacy};
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, ChainId, Signature, TxKind, B256, U256};
use omni_primitives::{
    derive_chain_id, parity_from_legacy_v, sanity_check_signature, zero_signature,
    legacy_v, NoncedDeposit, OmniTxEnvelope, OmniTxType, OmniTypedTransaction, TxArbContract,
    TxArbDeposit, TxArbInternal, TxArbLegacy, TxArbRetry, TxArbSubmitRetryable, TxArbUnsigned,
    TxDeposit, TxL1Message, TxMantleDeposit, TxZeta,
};
use serde::{Deserialize, Serialize};

/// Errors produced when a JSON transaction object cannot be resolved into a
/// payload.
///
/// Decoding is all-or-nothing: every check runs before a payload value is
/// built, and nothing is defaulted or retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TxConversionError {
    /// The declared type tag does not name a known payload shape.
    #[error("unsupported transaction type {0}")]
    UnsupportedType(u64),
    /// A field the resolved variant requires is absent.
    #[error("missing required field '{0}' in transaction")]
    MissingField(&'static str),
    /// A field the resolved variant forbids is present.
    #[error("unexpected field '{0}' in transaction")]
    ForbiddenField(&'static str),
    /// A field the resolved variant pins to zero is present and non-zero.
    #[error("field '{0}' must be zero in transaction")]
    NonZeroField(&'static str),
    /// The signature triple is malformed or out of range for the variant's
    /// signing scheme.
    #[error("invalid transaction v, r, s values")]
    SignatureInvalid,
}

/// The JSON representation of a transaction: one flat object whose schema is
/// the union of every variant's fields. All fields except `type` are
/// nullable; encoding populates exactly the subset meaningful to the
/// concrete variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    /// Transaction type tag.
    #[serde(rename = "type", with = "alloy_serde::quantity")]
    pub transaction_type: u64,

    /// Chain id, for the variants that state it explicitly.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub chain_id: Option<ChainId>,
    /// Sender nonce, or the execution-nonce override for deposits.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub nonce: Option<u64>,
    /// Recipient, absent for contract creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Gas limit.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub gas: Option<u64>,
    /// Flat gas price.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub gas_price: Option<u128>,
    /// Tip cap.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub max_priority_fee_per_gas: Option<u128>,
    /// Fee cap.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub max_fee_per_gas: Option<u128>,
    /// Blob fee cap.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub max_fee_per_blob_gas: Option<u128>,
    /// Value transferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// Calldata or init code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Bytes>,
    /// Pre-declared access list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
    /// Versioned blob hashes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_versioned_hashes: Option<Vec<B256>>,
    /// Signature `v`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<U256>,
    /// Signature `r`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<U256>,
    /// Signature `s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<U256>,

    // Bridge deposit fields.
    /// Deposit source hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<B256>,
    /// Forced sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Deposit mint tag.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub mint: Option<u128>,
    /// Secondary native token mint tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_value: Option<U256>,
    /// Secondary native token transfer tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_tx_value: Option<U256>,
    /// System transaction flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system_tx: Option<bool>,

    // Retryable-ticket family fields.
    /// Originating L1 request id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<B256>,
    /// Ticket being redeemed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<B256>,
    /// Upper bound on the redemption gas refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_refund: Option<U256>,
    /// Submission fee refunded on successful redemption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_fee_refund: Option<U256>,
    /// Refund recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_to: Option<Address>,
    /// L1 base fee observed at submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l1_base_fee: Option<U256>,
    /// Value escrowed for the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_value: Option<U256>,
    /// Recipient of the retry call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_to: Option<Address>,
    /// Value passed to the retry call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_value: Option<U256>,
    /// Calldata of the retry call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_data: Option<Bytes>,
    /// Beneficiary if the ticket expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Address>,
    /// Upper bound on the submission fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_submission_fee: Option<U256>,
    /// Gas price actually charged at replay.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub effective_gas_price: Option<u64>,
    /// L1 block of the replayed transaction.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub l1_block_number: Option<u64>,

    /// Identity hash; set on encode, read back only as the replayed-legacy
    /// hash override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<B256>,

    // Message relay fields.
    /// Enqueuing L1 account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Address>,
    /// Message queue index.
    #[serde(skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub queue_index: Option<u64>,
}

impl From<&OmniTxEnvelope> for Transaction {
    fn from(envelope: &OmniTxEnvelope) -> Self {
        let mut enc = Self {
            transaction_type: envelope.tx_type() as u8 as u64,
            hash: Some(*envelope.tx_hash()),
            ..Default::default()
        };
        let signature = envelope.signature();

        match envelope.transaction() {
            OmniTypedTransaction::Legacy(tx) => {
                enc.nonce = Some(tx.nonce);
                enc.to = tx.to.to().copied();
                enc.gas = Some(tx.gas_limit);
                enc.gas_price = Some(tx.gas_price);
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
                set_legacy_signature(&mut enc, signature, tx.chain_id);
            }
            OmniTypedTransaction::Eip2930(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.nonce = Some(tx.nonce);
                enc.to = tx.to.to().copied();
                enc.gas = Some(tx.gas_limit);
                enc.gas_price = Some(tx.gas_price);
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
                enc.access_list = Some(tx.access_list.clone());
                set_typed_signature(&mut enc, signature);
            }
            OmniTypedTransaction::Eip1559(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.nonce = Some(tx.nonce);
                enc.to = tx.to.to().copied();
                enc.gas = Some(tx.gas_limit);
                enc.max_fee_per_gas = Some(tx.max_fee_per_gas);
                enc.max_priority_fee_per_gas = Some(tx.max_priority_fee_per_gas);
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
                enc.access_list = Some(tx.access_list.clone());
                set_typed_signature(&mut enc, signature);
            }
            OmniTypedTransaction::Eip4844(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.nonce = Some(tx.nonce);
                enc.to = Some(tx.to);
                enc.gas = Some(tx.gas_limit);
                enc.max_fee_per_gas = Some(tx.max_fee_per_gas);
                enc.max_priority_fee_per_gas = Some(tx.max_priority_fee_per_gas);
                enc.max_fee_per_blob_gas = Some(tx.max_fee_per_blob_gas);
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
                enc.access_list = Some(tx.access_list.clone());
                enc.blob_versioned_hashes = Some(tx.blob_versioned_hashes.clone());
                set_typed_signature(&mut enc, signature);
            }
            OmniTypedTransaction::Zeta(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.from = Some(tx.from);
                enc.nonce = Some(tx.nonce);
                enc.max_fee_per_gas = Some(tx.gas_fee_cap);
                enc.gas = Some(tx.gas_limit);
                enc.to = tx.to.to().copied();
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
                set_zero_signature(&mut enc);
            }
            OmniTypedTransaction::ArbDeposit(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.request_id = Some(tx.l1_request_id);
                enc.from = Some(tx.from);
                enc.to = Some(tx.to);
                enc.value = Some(tx.value);
            }
            OmniTypedTransaction::ArbUnsigned(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.from = Some(tx.from);
                enc.nonce = Some(tx.nonce);
                enc.max_fee_per_gas = Some(tx.gas_fee_cap);
                enc.gas = Some(tx.gas_limit);
                enc.to = tx.to.to().copied();
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
            }
            OmniTypedTransaction::ArbContract(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.request_id = Some(tx.request_id);
                enc.from = Some(tx.from);
                enc.max_fee_per_gas = Some(tx.gas_fee_cap);
                enc.gas = Some(tx.gas_limit);
                enc.to = tx.to.to().copied();
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
            }
            OmniTypedTransaction::ArbRetry(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.nonce = Some(tx.nonce);
                enc.from = Some(tx.from);
                enc.max_fee_per_gas = Some(tx.gas_fee_cap);
                enc.gas = Some(tx.gas_limit);
                enc.to = tx.to.to().copied();
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
                enc.ticket_id = Some(tx.ticket_id);
                enc.refund_to = Some(tx.refund_to);
                enc.max_refund = Some(tx.max_refund);
                enc.submission_fee_refund = Some(tx.submission_fee_refund);
            }
            OmniTypedTransaction::ArbSubmitRetryable(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.request_id = Some(tx.request_id);
                enc.from = Some(tx.from);
                enc.l1_base_fee = Some(tx.l1_base_fee);
                enc.deposit_value = Some(tx.deposit_value);
                enc.max_fee_per_gas = Some(tx.gas_fee_cap);
                enc.gas = Some(tx.gas_limit);
                enc.retry_to = tx.retry_to.to().copied();
                enc.retry_value = Some(tx.retry_value);
                enc.beneficiary = Some(tx.beneficiary);
                enc.max_submission_fee = Some(tx.max_submission_fee);
                enc.refund_to = Some(tx.fee_refund_addr);
                enc.retry_data = Some(tx.retry_data.clone());
            }
            OmniTypedTransaction::ArbInternal(tx) => {
                enc.chain_id = Some(tx.chain_id);
                enc.input = Some(tx.input.clone());
            }
            OmniTypedTransaction::ArbLegacy(tx) => {
                enc.nonce = Some(tx.legacy.nonce);
                enc.to = tx.legacy.to.to().copied();
                enc.gas = Some(tx.legacy.gas_limit);
                enc.gas_price = Some(tx.legacy.gas_price);
                enc.value = Some(tx.legacy.value);
                enc.input = Some(tx.legacy.input.clone());
                set_legacy_signature(&mut enc, signature, tx.legacy.chain_id);
                enc.effective_gas_price = Some(tx.effective_gas_price);
                enc.l1_block_number = Some(tx.l1_block_number);
                enc.from = tx.sender;
                enc.hash = Some(tx.hash_override);
            }
            OmniTypedTransaction::Deposit(tx) => set_deposit_fields(&mut enc, tx, None),
            OmniTypedTransaction::DepositNonced(tx) => {
                set_deposit_fields(&mut enc, &tx.inner, Some(tx.effective_nonce))
            }
            OmniTypedTransaction::MantleDeposit(tx) => set_mantle_fields(&mut enc, tx, None),
            OmniTypedTransaction::MantleDepositNonced(tx) => {
                set_mantle_fields(&mut enc, &tx.inner, Some(tx.effective_nonce))
            }
            OmniTypedTransaction::L1Message(tx) => {
                enc.queue_index = Some(tx.queue_index);
                enc.gas = Some(tx.gas_limit);
                enc.to = tx.to.to().copied();
                enc.value = Some(tx.value);
                enc.input = Some(tx.input.clone());
                enc.sender = Some(tx.sender);
                enc.from = Some(tx.sender);
                enc.gas_price = Some(0);
                set_zero_signature(&mut enc);
            }
        }

        enc
    }
}

fn set_deposit_fields(enc: &mut Transaction, tx: &TxDeposit, nonce: Option<u64>) {
    enc.source_hash = Some(tx.source_hash);
    enc.from = Some(tx.from);
    enc.to = tx.to.to().copied();
    enc.mint = tx.mint;
    enc.value = Some(tx.value);
    enc.gas = Some(tx.gas_limit);
    enc.is_system_tx = tx.is_system_transaction.then_some(true);
    enc.input = Some(tx.input.clone());
    enc.nonce = nonce;
    enc.gas_price = Some(0);
    set_zero_signature(enc);
}

fn set_mantle_fields(enc: &mut Transaction, tx: &TxMantleDeposit, nonce: Option<u64>) {
    enc.source_hash = Some(tx.source_hash);
    enc.from = Some(tx.from);
    enc.to = tx.to.to().copied();
    enc.mint = tx.mint;
    enc.value = Some(tx.value);
    enc.gas = Some(tx.gas_limit);
    enc.is_system_tx = tx.is_system_transaction.then_some(true);
    // The mint tag discriminates the extended shape on decode, so it is
    // always emitted.
    enc.eth_value = Some(tx.eth_value.unwrap_or(U256::ZERO));
    enc.eth_tx_value = tx.eth_tx_value;
    enc.input = Some(tx.input.clone());
    enc.nonce = nonce;
    enc.gas_price = Some(0);
    set_zero_signature(enc);
}

fn set_zero_signature(enc: &mut Transaction) {
    enc.v = Some(U256::ZERO);
    enc.r = Some(U256::ZERO);
    enc.s = Some(U256::ZERO);
}

fn set_typed_signature(enc: &mut Transaction, signature: &Signature) {
    enc.v = Some(U256::from(signature.v() as u64));
    enc.r = Some(signature.r());
    enc.s = Some(signature.s());
}

fn set_legacy_signature(enc: &mut Transaction, signature: &Signature, chain_id: Option<ChainId>) {
    if signature.r().is_zero() && signature.s().is_zero() {
        set_zero_signature(enc);
        return;
    }
    enc.v = Some(U256::from(legacy_v(signature.v(), chain_id)));
    enc.r = Some(signature.r());
    enc.s = Some(signature.s());
}

impl From<OmniTxEnvelope> for Transaction {
    fn from(envelope: OmniTxEnvelope) -> Self {
        Self::from(&envelope)
    }
}

impl TryFrom<&Transaction> for OmniTxEnvelope {
    type Error = TxConversionError;

    fn try_from(dec: &Transaction) -> Result<Self, Self::Error> {
        use TxConversionError::*;

        let ty = u8::try_from(dec.transaction_type)
            .ok()
            .and_then(|byte| OmniTxType::try_from(byte).ok())
            .ok_or(UnsupportedType(dec.transaction_type))?;

        match ty {
            OmniTxType::Legacy => {
                let nonce = dec.nonce.ok_or(MissingField("nonce"))?;
                let to = dec.to.map_or(TxKind::Create, TxKind::Call);
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let gas_price = dec.gas_price.ok_or(MissingField("gasPrice"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let (signature, chain_id) = decode_legacy_signature(dec)?;
                let tx = TxLegacy {
                    chain_id,
                    nonce,
                    gas_price,
                    gas_limit,
                    to,
                    value,
                    input,
                };
                Ok(Self::new_unhashed(OmniTypedTransaction::Legacy(tx), signature))
            }
            OmniTxType::Eip2930 => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let nonce = dec.nonce.ok_or(MissingField("nonce"))?;
                let to = dec.to.map_or(TxKind::Create, TxKind::Call);
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let gas_price = dec.gas_price.ok_or(MissingField("gasPrice"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let access_list = dec.access_list.clone().unwrap_or_default();
                let signature = decode_typed_signature(dec)?;
                let tx = TxEip2930 {
                    chain_id,
                    nonce,
                    gas_price,
                    gas_limit,
                    to,
                    value,
                    access_list,
                    input,
                };
                Ok(Self::new_unhashed(OmniTypedTransaction::Eip2930(tx), signature))
            }
            OmniTxType::Eip1559 => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let nonce = dec.nonce.ok_or(MissingField("nonce"))?;
                let to = dec.to.map_or(TxKind::Create, TxKind::Call);
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let max_priority_fee_per_gas = dec
                    .max_priority_fee_per_gas
                    .ok_or(MissingField("maxPriorityFeePerGas"))?;
                let max_fee_per_gas = dec.max_fee_per_gas.ok_or(MissingField("maxFeePerGas"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let access_list = dec.access_list.clone().unwrap_or_default();
                let signature = decode_typed_signature(dec)?;
                let tx = TxEip1559 {
                    chain_id,
                    nonce,
                    gas_limit,
                    max_fee_per_gas,
                    max_priority_fee_per_gas,
                    to,
                    value,
                    access_list,
                    input,
                };
                Ok(Self::new_unhashed(OmniTypedTransaction::Eip1559(tx), signature))
            }
            OmniTxType::Eip4844 => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let nonce = dec.nonce.ok_or(MissingField("nonce"))?;
                let to = dec.to.ok_or(MissingField("to"))?;
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let max_priority_fee_per_gas = dec
                    .max_priority_fee_per_gas
                    .ok_or(MissingField("maxPriorityFeePerGas"))?;
                let max_fee_per_gas = dec.max_fee_per_gas.ok_or(MissingField("maxFeePerGas"))?;
                let max_fee_per_blob_gas = dec
                    .max_fee_per_blob_gas
                    .ok_or(MissingField("maxFeePerBlobGas"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let access_list = dec.access_list.clone().unwrap_or_default();
                let blob_versioned_hashes = dec
                    .blob_versioned_hashes
                    .clone()
                    .ok_or(MissingField("blobVersionedHashes"))?;
                let signature = decode_typed_signature(dec)?;
                let tx = TxEip4844 {
                    chain_id,
                    nonce,
                    gas_limit,
                    max_fee_per_gas,
                    max_priority_fee_per_gas,
                    to,
                    value,
                    access_list,
                    blob_versioned_hashes,
                    max_fee_per_blob_gas,
                    input,
                };
                Ok(Self::new_unhashed(OmniTypedTransaction::Eip4844(tx), signature))
            }
            OmniTxType::Zeta => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let from = dec.from.ok_or(MissingField("from"))?;
                let nonce = dec.nonce.ok_or(MissingField("nonce"))?;
                let gas_fee_cap = dec.max_fee_per_gas.ok_or(MissingField("maxFeePerGas"))?;
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let tx = TxZeta {
                    chain_id,
                    from,
                    nonce,
                    gas_fee_cap,
                    gas_limit,
                    to: dec.to.map_or(TxKind::Create, TxKind::Call),
                    value,
                    input,
                };
                Ok(Self::new_unsigned(OmniTypedTransaction::Zeta(tx)))
            }
            OmniTxType::ArbDeposit => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let l1_request_id = dec.request_id.ok_or(MissingField("requestId"))?;
                let to = dec.to.ok_or(MissingField("to"))?;
                let from = dec.from.ok_or(MissingField("from"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let tx = TxArbDeposit {
                    chain_id,
                    l1_request_id,
                    from,
                    to,
                    value,
                };
                Ok(Self::new_unsigned(OmniTypedTransaction::ArbDeposit(tx)))
            }
            OmniTxType::ArbUnsigned => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let from = dec.from.ok_or(MissingField("from"))?;
                let nonce = dec.nonce.ok_or(MissingField("nonce"))?;
                let gas_fee_cap = dec.max_fee_per_gas.ok_or(MissingField("maxFeePerGas"))?;
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let tx = TxArbUnsigned {
                    chain_id,
                    from,
                    nonce,
                    gas_fee_cap,
                    gas_limit,
                    to: dec.to.map_or(TxKind::Create, TxKind::Call),
                    value,
                    input,
                };
                Ok(Self::new_unsigned(OmniTypedTransaction::ArbUnsigned(tx)))
            }
            OmniTxType::ArbContract => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let request_id = dec.request_id.ok_or(MissingField("requestId"))?;
                let from = dec.from.ok_or(MissingField("from"))?;
                let gas_fee_cap = dec.max_fee_per_gas.ok_or(MissingField("maxFeePerGas"))?;
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let tx = TxArbContract {
                    chain_id,
                    request_id,
                    from,
                    gas_fee_cap,
                    gas_limit,
                    to: dec.to.map_or(TxKind::Create, TxKind::Call),
                    value,
                    input,
                };
                Ok(Self::new_unsigned(OmniTypedTransaction::ArbContract(tx)))
            }
            OmniTxType::ArbRetry => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let nonce = dec.nonce.ok_or(MissingField("nonce"))?;
                let from = dec.from.ok_or(MissingField("from"))?;
                let gas_fee_cap = dec.max_fee_per_gas.ok_or(MissingField("maxFeePerGas"))?;
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let ticket_id = dec.ticket_id.ok_or(MissingField("ticketId"))?;
                let refund_to = dec.refund_to.ok_or(MissingField("refundTo"))?;
                let max_refund = dec.max_refund.ok_or(MissingField("maxRefund"))?;
                let submission_fee_refund = dec
                    .submission_fee_refund
                    .ok_or(MissingField("submissionFeeRefund"))?;
                let tx = TxArbRetry {
                    chain_id,
                    nonce,
                    from,
                    gas_fee_cap,
                    gas_limit,
                    to: dec.to.map_or(TxKind::Create, TxKind::Call),
                    value,
                    input,
                    ticket_id,
                    refund_to,
                    max_refund,
                    submission_fee_refund,
                };
                Ok(Self::new_unsigned(OmniTypedTransaction::ArbRetry(tx)))
            }
            OmniTxType::ArbSubmitRetryable => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let request_id = dec.request_id.ok_or(MissingField("requestId"))?;
                let from = dec.from.ok_or(MissingField("from"))?;
                let l1_base_fee = dec.l1_base_fee.ok_or(MissingField("l1BaseFee"))?;
                let deposit_value = dec.deposit_value.ok_or(MissingField("depositValue"))?;
                let gas_fee_cap = dec.max_fee_per_gas.ok_or(MissingField("maxFeePerGas"))?;
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let beneficiary = dec.beneficiary.ok_or(MissingField("beneficiary"))?;
                let max_submission_fee = dec
                    .max_submission_fee
                    .ok_or(MissingField("maxSubmissionFee"))?;
                let fee_refund_addr = dec.refund_to.ok_or(MissingField("refundTo"))?;
                let retry_value = dec.retry_value.ok_or(MissingField("retryValue"))?;
                let retry_data = dec.retry_data.clone().ok_or(MissingField("retryData"))?;
                let tx = TxArbSubmitRetryable {
                    chain_id,
                    request_id,
                    from,
                    l1_base_fee,
                    deposit_value,
                    gas_fee_cap,
                    gas_limit,
                    retry_to: dec.retry_to.map_or(TxKind::Create, TxKind::Call),
                    retry_value,
                    beneficiary,
                    max_submission_fee,
                    fee_refund_addr,
                    retry_data,
                };
                Ok(Self::new_unsigned(OmniTypedTransaction::ArbSubmitRetryable(tx)))
            }
            OmniTxType::ArbInternal => {
                let chain_id = dec.chain_id.ok_or(MissingField("chainId"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let tx = TxArbInternal { chain_id, input };
                Ok(Self::new_unsigned(OmniTypedTransaction::ArbInternal(tx)))
            }
            OmniTxType::ArbLegacy => {
                let nonce = dec.nonce.ok_or(MissingField("nonce"))?;
                let gas_price = dec.gas_price.ok_or(MissingField("gasPrice"))?;
                let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
                let value = dec.value.ok_or(MissingField("value"))?;
                let input = dec.input.clone().ok_or(MissingField("input"))?;
                let (signature, chain_id) = decode_legacy_signature(dec)?;
                let effective_gas_price = dec
                    .effective_gas_price
                    .ok_or(MissingField("effectiveGasPrice"))?;
                let l1_block_number = dec.l1_block_number.ok_or(MissingField("l1BlockNumber"))?;
                let tx = TxArbLegacy {
                    legacy: TxLegacy {
                        chain_id,
                        nonce,
                        gas_price,
                        gas_limit,
                        to: dec.to.map_or(TxKind::Create, TxKind::Call),
                        value,
                        input,
                    },
                    hash_override: dec.hash.unwrap_or_default(),
                    effective_gas_price,
                    l1_block_number,
                    sender: dec.from,
                };
                Ok(Self::new_unhashed(
                    OmniTypedTransaction::ArbLegacy(tx),
                    signature,
                ))
            }
            OmniTxType::Deposit => decode_deposit_family(dec),
        }
    }
}

impl TryFrom<Transaction> for OmniTxEnvelope {
    type Error = TxConversionError;

    fn try_from(value: Transaction) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

/// Resolves a `0x7E` object into one of the three deposit-family shapes.
///
/// Structural fields of other fee models must be absent outright; the
/// signature triple and the flat gas price may be present when exactly
/// zero. A `nonce` field selects the effective-nonce decoration.
fn decode_deposit_family(dec: &Transaction) -> Result<OmniTxEnvelope, TxConversionError> {
    use TxConversionError::*;

    if dec.access_list.is_some() {
        return Err(ForbiddenField("accessList"));
    }
    if dec.max_fee_per_gas.is_some() {
        return Err(ForbiddenField("maxFeePerGas"));
    }
    if dec.max_priority_fee_per_gas.is_some() {
        return Err(ForbiddenField("maxPriorityFeePerGas"));
    }
    if dec.gas_price.is_some_and(|price| price != 0) {
        return Err(NonZeroField("gasPrice"));
    }
    if dec.v.is_some_and(|v| !v.is_zero()) {
        return Err(NonZeroField("v"));
    }
    if dec.r.is_some_and(|r| !r.is_zero()) {
        return Err(NonZeroField("r"));
    }
    if dec.s.is_some_and(|s| !s.is_zero()) {
        return Err(NonZeroField("s"));
    }

    if dec.eth_value.is_some() {
        let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
        let value = dec.value.ok_or(MissingField("value"))?;
        let input = dec.input.clone().ok_or(MissingField("input"))?;
        let from = dec.from.ok_or(MissingField("from"))?;
        let tx = TxMantleDeposit {
            // The source hash may be omitted by older bridges.
            source_hash: dec.source_hash.unwrap_or_default(),
            from,
            to: dec.to.map_or(TxKind::Create, TxKind::Call),
            mint: dec.mint,
            value,
            gas_limit,
            is_system_transaction: dec.is_system_tx.unwrap_or_default(),
            eth_value: dec.eth_value,
            input,
            eth_tx_value: dec.eth_tx_value,
        };
        let tx = match dec.nonce {
            Some(nonce) => OmniTypedTransaction::MantleDepositNonced(NoncedDeposit::new(tx, nonce)),
            None => OmniTypedTransaction::MantleDeposit(tx),
        };
        Ok(OmniTxEnvelope::new_unsigned(tx))
    } else if let Some(sender) = dec.sender {
        let queue_index = dec.queue_index.ok_or(MissingField("queueIndex"))?;
        let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
        let value = dec.value.ok_or(MissingField("value"))?;
        let input = dec.input.clone().ok_or(MissingField("input"))?;
        let tx = TxL1Message {
            queue_index,
            gas_limit,
            to: dec.to.map_or(TxKind::Create, TxKind::Call),
            value,
            input,
            sender,
        };
        Ok(OmniTxEnvelope::new_unsigned(OmniTypedTransaction::L1Message(tx)))
    } else {
        let gas_limit = dec.gas.ok_or(MissingField("gas"))?;
        let value = dec.value.ok_or(MissingField("value"))?;
        let input = dec.input.clone().ok_or(MissingField("input"))?;
        let from = dec.from.ok_or(MissingField("from"))?;
        let source_hash = dec.source_hash.ok_or(MissingField("sourceHash"))?;
        let tx = TxDeposit {
            source_hash,
            from,
            to: dec.to.map_or(TxKind::Create, TxKind::Call),
            mint: dec.mint,
            value,
            gas_limit,
            is_system_transaction: dec.is_system_tx.unwrap_or_default(),
            input,
        };
        let tx = match dec.nonce {
            Some(nonce) => OmniTypedTransaction::DepositNonced(NoncedDeposit::new(tx, nonce)),
            None => OmniTypedTransaction::Deposit(tx),
        };
        Ok(OmniTxEnvelope::new_unsigned(tx))
    }
}

fn required_signature(
    dec: &Transaction,
) -> Result<(U256, U256, U256), TxConversionError> {
    let v = dec.v.ok_or(TxConversionError::MissingField("v"))?;
    let r = dec.r.ok_or(TxConversionError::MissingField("r"))?;
    let s = dec.s.ok_or(TxConversionError::MissingField("s"))?;
    Ok((v, r, s))
}

/// Builds the signature for a legacy-shaped object, deriving the chain id
/// from `v`. An all-zero triple passes through as the zero signature.
fn decode_legacy_signature(
    dec: &Transaction,
) -> Result<(Signature, Option<ChainId>), TxConversionError> {
    let (v, r, s) = required_signature(dec)?;
    if v.is_zero() && r.is_zero() && s.is_zero() {
        return Ok((zero_signature(), None));
    }
    if !sanity_check_signature(&v, &r, &s, true) {
        return Err(TxConversionError::SignatureInvalid);
    }
    let v = v.to::<u64>();
    let parity = parity_from_legacy_v(v).ok_or(TxConversionError::SignatureInvalid)?;
    Ok((Signature::new(r, s, parity), derive_chain_id(v)))
}

/// Builds the signature for a typed object, whose `v` is a raw recovery id.
/// An all-zero triple passes through as the zero signature.
fn decode_typed_signature(dec: &Transaction) -> Result<Signature, TxConversionError> {
    let (v, r, s) = required_signature(dec)?;
    if v.is_zero() && r.is_zero() && s.is_zero() {
        return Ok(zero_signature());
    }
    if !sanity_check_signature(&v, &r, &s, false) {
        return Err(TxConversionError::SignatureInvalid);
    }
    Ok(Signature::new(r, s, v == U256::from(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_consensus::{SignableTransaction, Transaction as _};
    use alloy_eips::eip2718::{Decodable2718, Encodable2718};
    use alloy_primitives::{address, b256, bytes};

    fn roundtrip(envelope: &OmniTxEnvelope) {
        let encoded = serde_json::to_string(&Transaction::from(envelope)).unwrap();
        let decoded: Transaction = serde_json::from_str(&encoded).unwrap();
        let restored = OmniTxEnvelope::try_from(&decoded).unwrap();
        assert_eq!(&restored, envelope);
    }

    fn sample_deposit() -> TxDeposit {
        TxDeposit {
            source_hash: b256!("0x417d134467f4737fcdf2475f0ecdd2a0ed6d87ecffc888ba9f60ee7e3b8ac26a"),
            from: address!("0xdeaddeaddeaddeaddeaddeaddeaddeaddead0001"),
            to: TxKind::Call(address!("0x4200000000000000000000000000000000000015")),
            mint: None,
            value: U256::ZERO,
            gas_limit: 1_000_000,
            is_system_transaction: false,
            input: bytes!("440a5e20"),
        }
    }

    #[test]
    fn decodes_dynamic_fee_object() {
        let raw = r#"{
            "type": "0x2",
            "chainId": "0x1",
            "nonce": "0x5",
            "to": "0x0000000000000000000000000000000000000abc",
            "gas": "0x5208",
            "maxFeePerGas": "0x3b9aca00",
            "maxPriorityFeePerGas": "0x3b9aca00",
            "value": "0x0",
            "input": "0x",
            "accessList": [],
            "v": "0x0",
            "r": "0x1",
            "s": "0x1"
        }"#;
        let dec: Transaction = serde_json::from_str(raw).unwrap();
        let envelope = OmniTxEnvelope::try_from(&dec).unwrap();
        assert_eq!(envelope.nonce(), 5);
        assert_eq!(
            envelope.kind(),
            TxKind::Call(address!("0x0000000000000000000000000000000000000abc"))
        );

        let encoded = envelope.encoded_2718();
        let restored = OmniTxEnvelope::decode_2718(&mut encoded.as_slice()).unwrap();
        assert_eq!(restored, envelope);
    }

    #[test]
    fn json_roundtrip_every_variant() {
        let sig = Signature::test_signature();

        let legacy = TxLegacy {
            chain_id: Some(1),
            nonce: 1,
            gas_price: 2,
            gas_limit: 3,
            to: TxKind::Call(Address::left_padding_from(&[0x11])),
            value: U256::from(4_u64),
            input: bytes!("aabb"),
        };
        roundtrip(&legacy.into_signed(sig).into());

        let eip2930 = TxEip2930 {
            chain_id: 1,
            nonce: 1,
            gas_price: 2,
            gas_limit: 3,
            to: TxKind::Create,
            value: U256::from(4_u64),
            access_list: AccessList::default(),
            input: bytes!("cc"),
        };
        roundtrip(&eip2930.into_signed(sig).into());

        let eip1559 = TxEip1559 {
            chain_id: 1,
            nonce: 1,
            gas_limit: 3,
            max_fee_per_gas: 5,
            max_priority_fee_per_gas: 2,
            to: TxKind::Call(Address::left_padding_from(&[0x12])),
            value: U256::from(4_u64),
            access_list: AccessList::default(),
            input: Bytes::new(),
        };
        roundtrip(&eip1559.into_signed(sig).into());

        let eip4844 = TxEip4844 {
            chain_id: 1,
            nonce: 1,
            gas_limit: 3,
            max_fee_per_gas: 5,
            max_priority_fee_per_gas: 2,
            to: Address::left_padding_from(&[0x13]),
            value: U256::from(4_u64),
            access_list: AccessList::default(),
            blob_versioned_hashes: vec![B256::left_padding_from(&[0x14])],
            max_fee_per_blob_gas: 6,
            input: Bytes::new(),
        };
        roundtrip(&eip4844.into_signed(sig).into());

        roundtrip(&OmniTxEnvelope::new_unsigned(OmniTypedTransaction::Zeta(
            TxZeta {
                chain_id: 7000,
                from: Address::left_padding_from(&[0x15]),
                nonce: 2,
                gas_fee_cap: 3,
                gas_limit: 4,
                to: TxKind::Create,
                value: U256::from(5_u64),
                input: bytes!("dd"),
            },
        )));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::ArbDeposit(TxArbDeposit {
                chain_id: 42161,
                l1_request_id: B256::left_padding_from(&[0x16]),
                from: Address::left_padding_from(&[0x17]),
                to: Address::left_padding_from(&[0x18]),
                value: U256::from(6_u64),
            }),
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::ArbUnsigned(TxArbUnsigned {
                chain_id: 42161,
                from: Address::left_padding_from(&[0x19]),
                nonce: 7,
                gas_fee_cap: 8,
                gas_limit: 9,
                to: TxKind::Call(Address::left_padding_from(&[0x1a])),
                value: U256::from(10_u64),
                input: bytes!("ee"),
            }),
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::ArbContract(TxArbContract {
                chain_id: 42161,
                request_id: B256::left_padding_from(&[0x1b]),
                from: Address::left_padding_from(&[0x1c]),
                gas_fee_cap: 11,
                gas_limit: 12,
                to: TxKind::Create,
                value: U256::from(13_u64),
                input: Bytes::new(),
            }),
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::ArbRetry(TxArbRetry {
                chain_id: 42161,
                nonce: 14,
                from: Address::left_padding_from(&[0x1d]),
                gas_fee_cap: 15,
                gas_limit: 16,
                to: TxKind::Call(Address::left_padding_from(&[0x1e])),
                value: U256::from(17_u64),
                input: bytes!("ff"),
                ticket_id: B256::left_padding_from(&[0x1f]),
                refund_to: Address::left_padding_from(&[0x20]),
                max_refund: U256::from(18_u64),
                submission_fee_refund: U256::from(19_u64),
            }),
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::ArbSubmitRetryable(TxArbSubmitRetryable {
                chain_id: 42161,
                request_id: B256::left_padding_from(&[0x21]),
                from: Address::left_padding_from(&[0x22]),
                l1_base_fee: U256::from(20_u64),
                deposit_value: U256::from(21_u64),
                gas_fee_cap: 22,
                gas_limit: 23,
                retry_to: TxKind::Call(Address::left_padding_from(&[0x23])),
                retry_value: U256::from(24_u64),
                beneficiary: Address::left_padding_from(&[0x24]),
                max_submission_fee: U256::from(25_u64),
                fee_refund_addr: Address::left_padding_from(&[0x25]),
                retry_data: bytes!("0102"),
            }),
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::ArbInternal(TxArbInternal {
                chain_id: 42161,
                input: bytes!("6a"),
            }),
        ));

        roundtrip(&OmniTxEnvelope::new_unhashed(
            OmniTypedTransaction::ArbLegacy(TxArbLegacy {
                legacy: TxLegacy {
                    chain_id: Some(1),
                    nonce: 26,
                    gas_price: 27,
                    gas_limit: 28,
                    to: TxKind::Call(Address::left_padding_from(&[0x26])),
                    value: U256::from(29_u64),
                    input: Bytes::new(),
                },
                hash_override: B256::left_padding_from(&[0x27]),
                effective_gas_price: 30,
                l1_block_number: 31,
                sender: Some(Address::left_padding_from(&[0x28])),
            }),
            sig,
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(OmniTypedTransaction::Deposit(
            sample_deposit(),
        )));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::DepositNonced(NoncedDeposit::new(sample_deposit(), 33)),
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::MantleDeposit(TxMantleDeposit {
                source_hash: B256::left_padding_from(&[0x29]),
                from: Address::left_padding_from(&[0x2a]),
                to: TxKind::Call(Address::left_padding_from(&[0x2b])),
                mint: Some(34),
                value: U256::from(35_u64),
                gas_limit: 36,
                is_system_transaction: true,
                eth_value: Some(U256::from(37_u64)),
                input: bytes!("2c"),
                eth_tx_value: Some(U256::from(38_u64)),
            }),
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::MantleDepositNonced(NoncedDeposit::new(
                TxMantleDeposit {
                    source_hash: B256::left_padding_from(&[0x32]),
                    from: Address::left_padding_from(&[0x33]),
                    to: TxKind::Create,
                    mint: None,
                    value: U256::ZERO,
                    gas_limit: 42,
                    is_system_transaction: false,
                    eth_value: Some(U256::from(43_u64)),
                    input: Bytes::new(),
                    eth_tx_value: None,
                },
                44,
            )),
        ));

        roundtrip(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::L1Message(TxL1Message {
                queue_index: 39,
                gas_limit: 40,
                to: TxKind::Call(Address::left_padding_from(&[0x2d])),
                value: U256::from(41_u64),
                input: bytes!("2e"),
                sender: Address::left_padding_from(&[0x2f]),
            }),
        ));
    }

    #[test]
    fn missing_required_fields_are_named() {
        let sig = Signature::test_signature();
        let cases: Vec<(Transaction, &[&str])> = vec![
            (
                Transaction::from(&OmniTxEnvelope::from(
                    TxLegacy {
                        chain_id: Some(1),
                        nonce: 1,
                        gas_price: 2,
                        gas_limit: 3,
                        to: TxKind::Create,
                        value: U256::ZERO,
                        input: Bytes::new(),
                    }
                    .into_signed(sig),
                )),
                &["nonce", "gas", "gasPrice", "value", "input", "v", "r", "s"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::from(
                    TxEip1559 {
                        chain_id: 1,
                        nonce: 1,
                        gas_limit: 3,
                        max_fee_per_gas: 5,
                        max_priority_fee_per_gas: 2,
                        to: TxKind::Create,
                        value: U256::ZERO,
                        access_list: AccessList::default(),
                        input: Bytes::new(),
                    }
                    .into_signed(sig),
                )),
                &[
                    "chainId",
                    "nonce",
                    "gas",
                    "maxFeePerGas",
                    "maxPriorityFeePerGas",
                    "value",
                    "input",
                    "v",
                    "r",
                    "s",
                ],
            ),
            (
                Transaction::from(&OmniTxEnvelope::from(
                    TxEip2930 {
                        chain_id: 1,
                        nonce: 1,
                        gas_price: 2,
                        gas_limit: 3,
                        to: TxKind::Create,
                        value: U256::ZERO,
                        access_list: AccessList::default(),
                        input: Bytes::new(),
                    }
                    .into_signed(sig),
                )),
                &["chainId", "nonce", "gas", "gasPrice", "value", "input", "v", "r", "s"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::from(
                    TxEip4844 {
                        chain_id: 1,
                        nonce: 1,
                        gas_limit: 3,
                        max_fee_per_gas: 5,
                        max_priority_fee_per_gas: 2,
                        to: Address::left_padding_from(&[0x30]),
                        value: U256::ZERO,
                        access_list: AccessList::default(),
                        blob_versioned_hashes: vec![B256::left_padding_from(&[0x31])],
                        max_fee_per_blob_gas: 6,
                        input: Bytes::new(),
                    }
                    .into_signed(sig),
                )),
                &[
                    "chainId",
                    "nonce",
                    "to",
                    "gas",
                    "maxFeePerGas",
                    "maxPriorityFeePerGas",
                    "maxFeePerBlobGas",
                    "blobVersionedHashes",
                    "value",
                    "input",
                    "v",
                    "r",
                    "s",
                ],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(OmniTypedTransaction::Zeta(
                    TxZeta {
                        chain_id: 7000,
                        from: Address::left_padding_from(&[1]),
                        nonce: 1,
                        gas_fee_cap: 2,
                        gas_limit: 3,
                        to: TxKind::Create,
                        value: U256::ZERO,
                        input: Bytes::new(),
                    },
                ))),
                &["chainId", "from", "nonce", "maxFeePerGas", "gas", "value", "input"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::ArbUnsigned(TxArbUnsigned {
                        chain_id: 42161,
                        from: Address::left_padding_from(&[1]),
                        nonce: 1,
                        gas_fee_cap: 2,
                        gas_limit: 3,
                        to: TxKind::Create,
                        value: U256::ZERO,
                        input: Bytes::new(),
                    }),
                )),
                &["chainId", "from", "nonce", "maxFeePerGas", "gas", "value", "input"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::ArbContract(TxArbContract {
                        chain_id: 42161,
                        request_id: B256::left_padding_from(&[2]),
                        from: Address::left_padding_from(&[1]),
                        gas_fee_cap: 2,
                        gas_limit: 3,
                        to: TxKind::Create,
                        value: U256::ZERO,
                        input: Bytes::new(),
                    }),
                )),
                &["chainId", "requestId", "from", "maxFeePerGas", "gas", "value", "input"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unhashed(
                    OmniTypedTransaction::ArbLegacy(TxArbLegacy {
                        legacy: TxLegacy {
                            chain_id: Some(1),
                            nonce: 1,
                            gas_price: 2,
                            gas_limit: 3,
                            to: TxKind::Create,
                            value: U256::ZERO,
                            input: Bytes::new(),
                        },
                        hash_override: B256::left_padding_from(&[3]),
                        effective_gas_price: 4,
                        l1_block_number: 5,
                        sender: None,
                    }),
                    sig,
                )),
                &[
                    "nonce",
                    "gas",
                    "gasPrice",
                    "value",
                    "input",
                    "v",
                    "r",
                    "s",
                    "effectiveGasPrice",
                    "l1BlockNumber",
                ],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::MantleDeposit(TxMantleDeposit {
                        source_hash: B256::left_padding_from(&[4]),
                        from: Address::left_padding_from(&[5]),
                        to: TxKind::Create,
                        mint: None,
                        value: U256::ZERO,
                        gas_limit: 3,
                        is_system_transaction: false,
                        eth_value: Some(U256::ZERO),
                        input: Bytes::new(),
                        eth_tx_value: None,
                    }),
                )),
                &["gas", "value", "input", "from"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::ArbRetry(TxArbRetry {
                        chain_id: 42161,
                        nonce: 1,
                        from: Address::left_padding_from(&[1]),
                        gas_fee_cap: 2,
                        gas_limit: 3,
                        to: TxKind::Create,
                        value: U256::ZERO,
                        input: Bytes::new(),
                        ticket_id: B256::left_padding_from(&[2]),
                        refund_to: Address::left_padding_from(&[3]),
                        max_refund: U256::ZERO,
                        submission_fee_refund: U256::ZERO,
                    }),
                )),
                &[
                    "chainId",
                    "nonce",
                    "from",
                    "maxFeePerGas",
                    "gas",
                    "value",
                    "input",
                    "ticketId",
                    "refundTo",
                    "maxRefund",
                    "submissionFeeRefund",
                ],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::ArbSubmitRetryable(TxArbSubmitRetryable::default()),
                )),
                &[
                    "chainId",
                    "requestId",
                    "from",
                    "l1BaseFee",
                    "depositValue",
                    "maxFeePerGas",
                    "gas",
                    "beneficiary",
                    "maxSubmissionFee",
                    "refundTo",
                    "retryValue",
                    "retryData",
                ],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::ArbDeposit(TxArbDeposit::default()),
                )),
                &["chainId", "requestId", "to", "from", "value"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::ArbInternal(TxArbInternal::default()),
                )),
                &["chainId", "input"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::Deposit(sample_deposit()),
                )),
                &["gas", "value", "input", "from", "sourceHash"],
            ),
            (
                Transaction::from(&OmniTxEnvelope::new_unsigned(
                    OmniTypedTransaction::L1Message(TxL1Message {
                        sender: Address::left_padding_from(&[4]),
                        ..Default::default()
                    }),
                )),
                &["queueIndex", "gas", "value", "input"],
            ),
        ];

        for (template, required) in cases {
            let object = serde_json::to_value(&template).unwrap();
            for field in required {
                let mut stripped = object.clone();
                stripped.as_object_mut().unwrap().remove(*field);
                let dec: Transaction = serde_json::from_value(stripped).unwrap();
                match OmniTxEnvelope::try_from(&dec) {
                    Err(TxConversionError::MissingField(name)) => assert_eq!(&name, field),
                    other => panic!("removing {field} produced {other:?}"),
                }
            }
        }
    }

    #[test]
    fn deposit_forbidden_fields() {
        let template = Transaction::from(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::Deposit(sample_deposit()),
        ));

        // A zero gas price and a zero signature triple are tolerated.
        assert!(OmniTxEnvelope::try_from(&template).is_ok());

        let mut with_price = template.clone();
        with_price.gas_price = Some(1);
        assert_eq!(
            OmniTxEnvelope::try_from(&with_price),
            Err(TxConversionError::NonZeroField("gasPrice"))
        );

        let mut with_sig = template.clone();
        with_sig.r = Some(U256::from(1));
        assert_eq!(
            OmniTxEnvelope::try_from(&with_sig),
            Err(TxConversionError::NonZeroField("r"))
        );

        let mut with_access_list = template.clone();
        with_access_list.access_list = Some(AccessList::default());
        assert_eq!(
            OmniTxEnvelope::try_from(&with_access_list),
            Err(TxConversionError::ForbiddenField("accessList"))
        );

        let mut with_fee_cap = template.clone();
        with_fee_cap.max_fee_per_gas = Some(0);
        assert_eq!(
            OmniTxEnvelope::try_from(&with_fee_cap),
            Err(TxConversionError::ForbiddenField("maxFeePerGas"))
        );

        // Absent price and signature fields are just as acceptable as zero
        // ones.
        let mut without = template;
        without.gas_price = None;
        without.v = None;
        without.r = None;
        without.s = None;
        assert!(OmniTxEnvelope::try_from(&without).is_ok());
    }

    #[test]
    fn deposit_nonce_selects_the_decoration() {
        let mut object = Transaction::from(&OmniTxEnvelope::new_unsigned(
            OmniTypedTransaction::Deposit(sample_deposit()),
        ));
        object.nonce = Some(42);
        let envelope = OmniTxEnvelope::try_from(&object).unwrap();
        assert_eq!(envelope.effective_nonce(), Some(42));

        let bare = OmniTxEnvelope::new_unsigned(OmniTypedTransaction::Deposit(sample_deposit()));
        assert_eq!(envelope.tx_hash(), bare.tx_hash());

        // Re-encoding keeps the override visible in the exchange form.
        let reencoded = Transaction::from(&envelope);
        assert_eq!(reencoded.nonce, Some(42));
    }

    #[test]
    fn legacy_signature_range() {
        let base = Transaction {
            transaction_type: 0,
            nonce: Some(0),
            gas: Some(21_000),
            gas_price: Some(1),
            value: Some(U256::ZERO),
            input: Some(Bytes::new()),
            r: Some(U256::from(1)),
            s: Some(U256::from(1)),
            ..Default::default()
        };

        let mut bad = base.clone();
        bad.v = Some(U256::from(26));
        assert_eq!(
            OmniTxEnvelope::try_from(&bad),
            Err(TxConversionError::SignatureInvalid)
        );

        let mut good = base.clone();
        good.v = Some(U256::from(27));
        let envelope = OmniTxEnvelope::try_from(&good).unwrap();
        assert_eq!(envelope.chain_id(), None);

        // EIP-155 protected v pins the chain id.
        let mut protected = base;
        protected.v = Some(U256::from(38));
        let envelope = OmniTxEnvelope::try_from(&protected).unwrap();
        assert_eq!(envelope.chain_id(), Some(1));
    }

    #[test]
    fn recovered_sender_is_nonzero() {
        let sig = Signature::test_signature();
        let tx = TxLegacy {
            chain_id: None,
            nonce: 0,
            gas_price: 1,
            gas_limit: 21_000,
            to: TxKind::Create,
            value: U256::ZERO,
            input: Bytes::new(),
        };
        let object = Transaction::from(&OmniTxEnvelope::from(tx.into_signed(sig)));
        assert_eq!(object.v, Some(U256::from(27 + sig.v() as u64)));
        let envelope = OmniTxEnvelope::try_from(&object).unwrap();
        let sender = envelope.recover_signer().unwrap();
        assert_ne!(sender, Address::ZERO);
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let object = Transaction {
            transaction_type: 0xFF,
            ..Default::default()
        };
        assert_eq!(
            OmniTxEnvelope::try_from(&object),
            Err(TxConversionError::UnsupportedType(0xFF))
        );

        let object = Transaction {
            transaction_type: 0x1FF,
            ..Default::default()
        };
        assert_eq!(
            OmniTxEnvelope::try_from(&object),
            Err(TxConversionError::UnsupportedType(0x1FF))
        );
    }

    #[test]
    fn typed_signature_must_use_raw_recovery_id() {
        let mut object = Transaction::from(&OmniTxEnvelope::from(
            TxEip1559 {
                chain_id: 1,
                nonce: 0,
                gas_limit: 21_000,
                max_fee_per_gas: 1,
                max_priority_fee_per_gas: 1,
                to: TxKind::Create,
                value: U256::ZERO,
                access_list: AccessList::default(),
                input: Bytes::new(),
            }
            .into_signed(Signature::test_signature()),
        ));
        object.v = Some(U256::from(27));
        assert_eq!(
            OmniTxEnvelope::try_from(&object),
            Err(TxConversionError::SignatureInvalid)
        );
    }
}
