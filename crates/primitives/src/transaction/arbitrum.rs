//! Retryable-ticket transaction family.
//!
//! Seven payload shapes cover the rollup's L1-originated traffic: plain
//! bridge deposits, unsigned and contract-triggered L1 calls, retryable
//! ticket submission and redemption, chain-owned internal bookkeeping, and
//! replayed pre-fork legacy transactions. All but the replay wrapper are
//! synthetic: the sender is forced and the signature is fixed to zero.

extern crate alloc;

use alloc::vec::Vec;
use alloy_consensus::{Transaction, TxLegacy, Typed2718};
use alloy_eips::{eip2718::Encodable2718, eip2930::AccessList};
use alloy_primitives::{
    address, keccak256, Address, Bytes, ChainId, Signature, TxHash, TxKind, B256, U256,
};
use alloy_rlp::{
    Buf, BufMut, Decodable, Encodable, Error as DecodeError, Header, EMPTY_STRING_CODE,
};
use core::mem;

use super::signature::{derive_chain_id, legacy_v, parity_from_legacy_v};
use crate::OmniTxType;

/// The chain-owned account internal bookkeeping transactions run as.
pub const INTERNAL_TX_SENDER: Address = address!("0x00000000000000000000000000000000000a4b05");

static EMPTY_INPUT: Bytes = Bytes::new();

macro_rules! impl_wire_codec {
    ($tx:ident) => {
        impl $tx {
            /// Decodes the transaction from RLP bytes, enforcing that the
            /// payload is consumed exactly.
            pub fn rlp_decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
                let header = Header::decode(buf)?;
                if !header.list {
                    return Err(alloy_rlp::Error::UnexpectedString);
                }
                if header.payload_length > buf.len() {
                    return Err(alloy_rlp::Error::InputTooShort);
                }
                let mut payload = &buf[..header.payload_length];
                let this = Self::rlp_decode_fields(&mut payload)?;
                if !payload.is_empty() {
                    return Err(alloy_rlp::Error::UnexpectedLength);
                }
                buf.advance(header.payload_length);
                Ok(this)
            }

            fn rlp_header(&self) -> Header {
                Header {
                    list: true,
                    payload_length: self.rlp_encoded_fields_length(),
                }
            }

            /// RLP encodes the transaction.
            pub fn rlp_encode(&self, out: &mut dyn BufMut) {
                self.rlp_header().encode(out);
                self.rlp_encode_fields(out);
            }

            /// Get the length of the transaction when RLP encoded.
            pub fn rlp_encoded_length(&self) -> usize {
                self.rlp_header().length_with_payload()
            }

            /// Get the length of the transaction when EIP-2718 encoded.
            pub fn eip2718_encoded_length(&self) -> usize {
                self.rlp_encoded_length() + 1
            }

            /// Calculate the transaction hash.
            pub fn tx_hash(&self) -> TxHash {
                let mut buf = Vec::with_capacity(self.eip2718_encoded_length());
                self.encode_2718(&mut buf);
                keccak256(&buf)
            }
        }

        impl Encodable2718 for $tx {
            fn type_flag(&self) -> Option<u8> {
                Some(self.ty())
            }

            fn encode_2718_len(&self) -> usize {
                self.eip2718_encoded_length()
            }

            fn encode_2718(&self, out: &mut dyn alloy_rlp::BufMut) {
                out.put_u8(self.ty());
                self.rlp_encode(out);
            }
        }

        impl Encodable for $tx {
            fn encode(&self, out: &mut dyn BufMut) {
                self.rlp_encode(out);
            }

            fn length(&self) -> usize {
                self.rlp_encoded_length()
            }
        }

        impl Decodable for $tx {
            fn decode(data: &mut &[u8]) -> alloy_rlp::Result<Self> {
                Self::rlp_decode(data)
            }
        }
    };
}

/// A value deposit bridged from L1: credits `value` to `to` on this chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxArbDeposit {
    /// The chain id of the target chain.
    pub chain_id: ChainId,
    /// Identifier of the originating L1 request.
    pub l1_request_id: B256,
    /// The L1 account the deposit was taken from.
    pub from: Address,
    /// The account credited on this chain.
    pub to: Address,
    /// The value credited.
    pub value: U256,
}

impl TxArbDeposit {
    /// Decodes the inner fields from RLP bytes, in order: `chain_id`,
    /// `l1_request_id`, `from`, `to`, `value`.
    pub fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            l1_request_id: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
        })
    }

    pub(crate) fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.l1_request_id.length()
            + self.from.length()
            + self.to.length()
            + self.value.length()
    }

    pub(crate) fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.l1_request_id.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        self.value.encode(out);
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<Self>()
    }
}

impl Typed2718 for TxArbDeposit {
    fn ty(&self) -> u8 {
        OmniTxType::ArbDeposit as u8
    }
}

impl_wire_codec!(TxArbDeposit);

impl Transaction for TxArbDeposit {
    fn chain_id(&self) -> Option<ChainId> {
        Some(self.chain_id)
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn gas_limit(&self) -> u64 {
        0
    }

    fn gas_price(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_gas(&self) -> u128 {
        0
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        None
    }

    fn priority_fee_or_price(&self) -> u128 {
        0
    }

    fn effective_gas_price(&self, _: Option<u64>) -> u128 {
        0
    }

    fn is_dynamic_fee(&self) -> bool {
        false
    }

    fn kind(&self) -> TxKind {
        TxKind::Call(self.to)
    }

    fn is_create(&self) -> bool {
        false
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn input(&self) -> &Bytes {
        &EMPTY_INPUT
    }

    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        None
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        None
    }
}

/// An unsigned call submitted through the L1 inbox by an externally owned
/// account. The sender is authenticated by the inbox, not by a signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxArbUnsigned {
    /// The chain id of the target chain.
    pub chain_id: ChainId,
    /// The L1 account that submitted the call.
    pub from: Address,
    /// The sender nonce on this chain.
    pub nonce: u64,
    /// Maximum fee per gas the sender is willing to pay.
    pub gas_fee_cap: u128,
    /// The gas limit for the transaction.
    pub gas_limit: u64,
    /// The address of the recipient account, or create.
    pub to: TxKind,
    /// The value transferred to the recipient account.
    pub value: U256,
    /// Calldata, or init code when `to` is create.
    pub input: Bytes,
}

impl TxArbUnsigned {
    /// Decodes the inner fields from RLP bytes, in order: `chain_id`,
    /// `from`, `nonce`, `gas_fee_cap`, `gas_limit`, `to`, `value`, `input`.
    pub fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            nonce: Decodable::decode(buf)?,
            gas_fee_cap: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
        })
    }

    pub(crate) fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.from.length()
            + self.nonce.length()
            + self.gas_fee_cap.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.0.length()
    }

    pub(crate) fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.from.encode(out);
        self.nonce.encode(out);
        self.gas_fee_cap.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<Self>() + self.input.len()
    }
}

impl Typed2718 for TxArbUnsigned {
    fn ty(&self) -> u8 {
        OmniTxType::ArbUnsigned as u8
    }
}

impl_wire_codec!(TxArbUnsigned);

impl Transaction for TxArbUnsigned {
    fn chain_id(&self) -> Option<ChainId> {
        Some(self.chain_id)
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn gas_price(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_gas(&self) -> u128 {
        self.gas_fee_cap
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        None
    }

    fn priority_fee_or_price(&self) -> u128 {
        self.gas_fee_cap
    }

    fn effective_gas_price(&self, _: Option<u64>) -> u128 {
        self.gas_fee_cap
    }

    fn is_dynamic_fee(&self) -> bool {
        true
    }

    fn kind(&self) -> TxKind {
        self.to
    }

    fn is_create(&self) -> bool {
        self.to.is_create()
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn input(&self) -> &Bytes {
        &self.input
    }

    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        None
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        None
    }
}

/// A call submitted through the L1 inbox by a contract. Identical to
/// [`TxArbUnsigned`] except the submitter is identified by the originating
/// request rather than a nonce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxArbContract {
    /// The chain id of the target chain.
    pub chain_id: ChainId,
    /// Identifier of the originating L1 request.
    pub request_id: B256,
    /// The L1 contract that submitted the call.
    pub from: Address,
    /// Maximum fee per gas the submitter is willing to pay.
    pub gas_fee_cap: u128,
    /// The gas limit for the transaction.
    pub gas_limit: u64,
    /// The address of the recipient account, or create.
    pub to: TxKind,
    /// The value transferred to the recipient account.
    pub value: U256,
    /// Calldata, or init code when `to` is create.
    pub input: Bytes,
}

impl TxArbContract {
    /// Decodes the inner fields from RLP bytes, in order: `chain_id`,
    /// `request_id`, `from`, `gas_fee_cap`, `gas_limit`, `to`, `value`,
    /// `input`.
    pub fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            request_id: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            gas_fee_cap: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
        })
    }

    pub(crate) fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.request_id.length()
            + self.from.length()
            + self.gas_fee_cap.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.0.length()
    }

    pub(crate) fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.request_id.encode(out);
        self.from.encode(out);
        self.gas_fee_cap.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<Self>() + self.input.len()
    }
}

impl Typed2718 for TxArbContract {
    fn ty(&self) -> u8 {
        OmniTxType::ArbContract as u8
    }
}

impl_wire_codec!(TxArbContract);

impl Transaction for TxArbContract {
    fn chain_id(&self) -> Option<ChainId> {
        Some(self.chain_id)
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn gas_price(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_gas(&self) -> u128 {
        self.gas_fee_cap
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        None
    }

    fn priority_fee_or_price(&self) -> u128 {
        self.gas_fee_cap
    }

    fn effective_gas_price(&self, _: Option<u64>) -> u128 {
        self.gas_fee_cap
    }

    fn is_dynamic_fee(&self) -> bool {
        true
    }

    fn kind(&self) -> TxKind {
        self.to
    }

    fn is_create(&self) -> bool {
        self.to.is_create()
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn input(&self) -> &Bytes {
        &self.input
    }

    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        None
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        None
    }
}

/// The redemption of a previously submitted retryable ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxArbRetry {
    /// The chain id of the target chain.
    pub chain_id: ChainId,
    /// The redeemer nonce.
    pub nonce: u64,
    /// The account redeeming the ticket.
    pub from: Address,
    /// Maximum fee per gas for the redemption.
    pub gas_fee_cap: u128,
    /// The gas limit for the redemption.
    pub gas_limit: u64,
    /// The address of the recipient account, or create.
    pub to: TxKind,
    /// The value transferred to the recipient account.
    pub value: U256,
    /// Calldata recorded in the ticket.
    pub input: Bytes,
    /// The ticket being redeemed.
    pub ticket_id: B256,
    /// The account refunded for unused gas.
    pub refund_to: Address,
    /// Upper bound on the gas refund.
    pub max_refund: U256,
    /// Submission fee refunded if the redemption succeeds.
    pub submission_fee_refund: U256,
}

impl TxArbRetry {
    /// Decodes the inner fields from RLP bytes, in order: `chain_id`,
    /// `nonce`, `from`, `gas_fee_cap`, `gas_limit`, `to`, `value`, `input`,
    /// `ticket_id`, `refund_to`, `max_refund`, `submission_fee_refund`.
    pub fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            nonce: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            gas_fee_cap: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
            ticket_id: Decodable::decode(buf)?,
            refund_to: Decodable::decode(buf)?,
            max_refund: Decodable::decode(buf)?,
            submission_fee_refund: Decodable::decode(buf)?,
        })
    }

    pub(crate) fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.nonce.length()
            + self.from.length()
            + self.gas_fee_cap.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.0.length()
            + self.ticket_id.length()
            + self.refund_to.length()
            + self.max_refund.length()
            + self.submission_fee_refund.length()
    }

    pub(crate) fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.nonce.encode(out);
        self.from.encode(out);
        self.gas_fee_cap.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
        self.ticket_id.encode(out);
        self.refund_to.encode(out);
        self.max_refund.encode(out);
        self.submission_fee_refund.encode(out);
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<Self>() + self.input.len()
    }
}

impl Typed2718 for TxArbRetry {
    fn ty(&self) -> u8 {
        OmniTxType::ArbRetry as u8
    }
}

impl_wire_codec!(TxArbRetry);

impl Transaction for TxArbRetry {
    fn chain_id(&self) -> Option<ChainId> {
        Some(self.chain_id)
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn gas_price(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_gas(&self) -> u128 {
        self.gas_fee_cap
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        None
    }

    fn priority_fee_or_price(&self) -> u128 {
        self.gas_fee_cap
    }

    fn effective_gas_price(&self, _: Option<u64>) -> u128 {
        self.gas_fee_cap
    }

    fn is_dynamic_fee(&self) -> bool {
        true
    }

    fn kind(&self) -> TxKind {
        self.to
    }

    fn is_create(&self) -> bool {
        self.to.is_create()
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn input(&self) -> &Bytes {
        &self.input
    }

    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        None
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        None
    }
}

/// The submission of a retryable ticket: escrows a deposit, records the
/// retry payload and names the parties refunded or credited when the ticket
/// is redeemed or expires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxArbSubmitRetryable {
    /// The chain id of the target chain.
    pub chain_id: ChainId,
    /// Identifier of the originating L1 request.
    pub request_id: B256,
    /// The L1 account that submitted the ticket.
    pub from: Address,
    /// The L1 base fee observed at submission.
    pub l1_base_fee: U256,
    /// The value escrowed for the ticket.
    pub deposit_value: U256,
    /// Maximum fee per gas for the eventual redemption.
    pub gas_fee_cap: u128,
    /// The gas limit for the eventual redemption.
    pub gas_limit: u64,
    /// The recipient of the retry call, or create.
    pub retry_to: TxKind,
    /// The value passed to the retry call.
    pub retry_value: U256,
    /// The account credited if the ticket expires unredeemed.
    pub beneficiary: Address,
    /// Upper bound on the submission fee.
    pub max_submission_fee: U256,
    /// The account refunded the unused submission fee.
    pub fee_refund_addr: Address,
    /// Calldata of the retry call.
    pub retry_data: Bytes,
}

impl TxArbSubmitRetryable {
    /// Decodes the inner fields from RLP bytes, in order: `chain_id`,
    /// `request_id`, `from`, `l1_base_fee`, `deposit_value`, `gas_fee_cap`,
    /// `gas_limit`, `retry_to`, `retry_value`, `beneficiary`,
    /// `max_submission_fee`, `fee_refund_addr`, `retry_data`.
    pub fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            request_id: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            l1_base_fee: Decodable::decode(buf)?,
            deposit_value: Decodable::decode(buf)?,
            gas_fee_cap: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            retry_to: Decodable::decode(buf)?,
            retry_value: Decodable::decode(buf)?,
            beneficiary: Decodable::decode(buf)?,
            max_submission_fee: Decodable::decode(buf)?,
            fee_refund_addr: Decodable::decode(buf)?,
            retry_data: Decodable::decode(buf)?,
        })
    }

    pub(crate) fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.request_id.length()
            + self.from.length()
            + self.l1_base_fee.length()
            + self.deposit_value.length()
            + self.gas_fee_cap.length()
            + self.gas_limit.length()
            + self.retry_to.length()
            + self.retry_value.length()
            + self.beneficiary.length()
            + self.max_submission_fee.length()
            + self.fee_refund_addr.length()
            + self.retry_data.0.length()
    }

    pub(crate) fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.request_id.encode(out);
        self.from.encode(out);
        self.l1_base_fee.encode(out);
        self.deposit_value.encode(out);
        self.gas_fee_cap.encode(out);
        self.gas_limit.encode(out);
        self.retry_to.encode(out);
        self.retry_value.encode(out);
        self.beneficiary.encode(out);
        self.max_submission_fee.encode(out);
        self.fee_refund_addr.encode(out);
        self.retry_data.encode(out);
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<Self>() + self.retry_data.len()
    }
}

impl Typed2718 for TxArbSubmitRetryable {
    fn ty(&self) -> u8 {
        OmniTxType::ArbSubmitRetryable as u8
    }
}

impl_wire_codec!(TxArbSubmitRetryable);

impl Transaction for TxArbSubmitRetryable {
    fn chain_id(&self) -> Option<ChainId> {
        Some(self.chain_id)
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn gas_price(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_gas(&self) -> u128 {
        self.gas_fee_cap
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        None
    }

    fn priority_fee_or_price(&self) -> u128 {
        self.gas_fee_cap
    }

    fn effective_gas_price(&self, _: Option<u64>) -> u128 {
        self.gas_fee_cap
    }

    fn is_dynamic_fee(&self) -> bool {
        true
    }

    fn kind(&self) -> TxKind {
        self.retry_to
    }

    fn is_create(&self) -> bool {
        self.retry_to.is_create()
    }

    fn value(&self) -> U256 {
        self.deposit_value
    }

    fn input(&self) -> &Bytes {
        &self.retry_data
    }

    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        None
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        None
    }
}

/// A chain-owned bookkeeping transaction inserted by the chain itself at the
/// start of a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxArbInternal {
    /// The chain id of the target chain.
    pub chain_id: ChainId,
    /// The bookkeeping payload.
    pub input: Bytes,
}

impl TxArbInternal {
    /// Decodes the inner fields from RLP bytes, in order: `chain_id`,
    /// `input`.
    pub fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
        })
    }

    pub(crate) fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length() + self.input.0.length()
    }

    pub(crate) fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.input.encode(out);
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<Self>() + self.input.len()
    }
}

impl Typed2718 for TxArbInternal {
    fn ty(&self) -> u8 {
        OmniTxType::ArbInternal as u8
    }
}

impl_wire_codec!(TxArbInternal);

impl Transaction for TxArbInternal {
    fn chain_id(&self) -> Option<ChainId> {
        Some(self.chain_id)
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn gas_limit(&self) -> u64 {
        0
    }

    fn gas_price(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_gas(&self) -> u128 {
        0
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        None
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        None
    }

    fn priority_fee_or_price(&self) -> u128 {
        0
    }

    fn effective_gas_price(&self, _: Option<u64>) -> u128 {
        0
    }

    fn is_dynamic_fee(&self) -> bool {
        false
    }

    fn kind(&self) -> TxKind {
        TxKind::Call(INTERNAL_TX_SENDER)
    }

    fn is_create(&self) -> bool {
        false
    }

    fn value(&self) -> U256 {
        U256::ZERO
    }

    fn input(&self) -> &Bytes {
        &self.input
    }

    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        None
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        None
    }
}

/// A pre-fork legacy transaction replayed onto the rollup.
///
/// Carries the original signature and pins the original transaction hash,
/// the gas price actually charged and the L1 block it appeared in. The
/// pinned hash is the transaction's identity; the recomputed digest of this
/// encoding is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxArbLegacy {
    /// The replayed legacy transaction body.
    pub legacy: TxLegacy,
    /// The original transaction hash, pinned.
    pub hash_override: B256,
    /// The gas price actually charged at replay.
    pub effective_gas_price: u64,
    /// The L1 block the original transaction appeared in.
    pub l1_block_number: u64,
    /// Forced sender, for replays whose signature is not recoverable.
    pub sender: Option<Address>,
}

impl TxArbLegacy {
    /// Decodes the transaction and its embedded signature from RLP bytes,
    /// enforcing that the payload is consumed exactly.
    ///
    /// Field order: the six legacy fields, the legacy-encoded `v`, `r`, `s`,
    /// then `hash_override`, `effective_gas_price`, `l1_block_number` and
    /// the nilable `sender`.
    pub fn rlp_decode_signed(buf: &mut &[u8]) -> alloy_rlp::Result<(Self, Signature)> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        if header.payload_length > buf.len() {
            return Err(alloy_rlp::Error::InputTooShort);
        }
        let mut payload = &buf[..header.payload_length];

        let mut legacy = TxLegacy {
            nonce: Decodable::decode(&mut payload)?,
            gas_price: Decodable::decode(&mut payload)?,
            gas_limit: Decodable::decode(&mut payload)?,
            to: Decodable::decode(&mut payload)?,
            value: Decodable::decode(&mut payload)?,
            input: Decodable::decode(&mut payload)?,
            chain_id: None,
        };
        let v: u64 = Decodable::decode(&mut payload)?;
        let r: U256 = Decodable::decode(&mut payload)?;
        let s: U256 = Decodable::decode(&mut payload)?;
        let parity =
            parity_from_legacy_v(v).ok_or(DecodeError::Custom("invalid legacy signature v"))?;
        legacy.chain_id = derive_chain_id(v);
        let signature = Signature::new(r, s, parity);

        let this = Self {
            legacy,
            hash_override: Decodable::decode(&mut payload)?,
            effective_gas_price: Decodable::decode(&mut payload)?,
            l1_block_number: Decodable::decode(&mut payload)?,
            sender: if *payload.first().ok_or(DecodeError::InputTooShort)? == EMPTY_STRING_CODE {
                payload.advance(1);
                None
            } else {
                Some(Decodable::decode(&mut payload)?)
            },
        };
        if !payload.is_empty() {
            return Err(alloy_rlp::Error::UnexpectedLength);
        }
        buf.advance(header.payload_length);

        Ok((this, signature))
    }

    pub(crate) fn rlp_encoded_fields_length(&self, signature: &Signature) -> usize {
        let v = legacy_v(signature.v(), self.legacy.chain_id);
        self.legacy.nonce.length()
            + self.legacy.gas_price.length()
            + self.legacy.gas_limit.length()
            + self.legacy.to.length()
            + self.legacy.value.length()
            + self.legacy.input.0.length()
            + v.length()
            + signature.r().length()
            + signature.s().length()
            + self.hash_override.length()
            + self.effective_gas_price.length()
            + self.l1_block_number.length()
            + self.sender.map_or(1, |sender| sender.length())
    }

    pub(crate) fn rlp_encode_fields(&self, signature: &Signature, out: &mut dyn BufMut) {
        let v = legacy_v(signature.v(), self.legacy.chain_id);
        self.legacy.nonce.encode(out);
        self.legacy.gas_price.encode(out);
        self.legacy.gas_limit.encode(out);
        self.legacy.to.encode(out);
        self.legacy.value.encode(out);
        self.legacy.input.encode(out);
        v.encode(out);
        signature.r().encode(out);
        signature.s().encode(out);
        self.hash_override.encode(out);
        self.effective_gas_price.encode(out);
        self.l1_block_number.encode(out);
        if let Some(sender) = self.sender {
            sender.encode(out);
        } else {
            out.put_u8(EMPTY_STRING_CODE);
        }
    }

    fn rlp_header(&self, signature: &Signature) -> Header {
        Header {
            list: true,
            payload_length: self.rlp_encoded_fields_length(signature),
        }
    }

    /// RLP encodes the transaction with its signature.
    pub fn rlp_encode_signed(&self, signature: &Signature, out: &mut dyn BufMut) {
        self.rlp_header(signature).encode(out);
        self.rlp_encode_fields(signature, out);
    }

    /// Get the length of the transaction when RLP encoded with the given
    /// signature.
    pub fn rlp_encoded_length(&self, signature: &Signature) -> usize {
        self.rlp_header(signature).length_with_payload()
    }

    /// Get the length of the transaction when EIP-2718 encoded.
    pub fn eip2718_encoded_length(&self, signature: &Signature) -> usize {
        self.rlp_encoded_length(signature) + 1
    }

    /// The pinned identity hash of the replayed transaction.
    pub const fn tx_hash(&self) -> TxHash {
        self.hash_override
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<Self>() + self.legacy.input.len()
    }
}

impl Typed2718 for TxArbLegacy {
    fn ty(&self) -> u8 {
        OmniTxType::ArbLegacy as u8
    }
}

impl Transaction for TxArbLegacy {
    fn chain_id(&self) -> Option<ChainId> {
        self.legacy.chain_id()
    }

    fn nonce(&self) -> u64 {
        self.legacy.nonce()
    }

    fn gas_limit(&self) -> u64 {
        self.legacy.gas_limit()
    }

    fn gas_price(&self) -> Option<u128> {
        self.legacy.gas_price()
    }

    fn max_fee_per_gas(&self) -> u128 {
        self.legacy.max_fee_per_gas()
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        self.legacy.max_priority_fee_per_gas()
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        self.legacy.max_fee_per_blob_gas()
    }

    fn priority_fee_or_price(&self) -> u128 {
        self.legacy.priority_fee_or_price()
    }

    fn effective_gas_price(&self, _: Option<u64>) -> u128 {
        self.effective_gas_price as u128
    }

    fn is_dynamic_fee(&self) -> bool {
        false
    }

    fn kind(&self) -> TxKind {
        self.legacy.kind()
    }

    fn is_create(&self) -> bool {
        self.legacy.is_create()
    }

    fn value(&self) -> U256 {
        self.legacy.value()
    }

    fn input(&self) -> &Bytes {
        self.legacy.input()
    }

    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        None
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn retry_roundtrip() {
        let tx = TxArbRetry {
            chain_id: 42161,
            nonce: 3,
            from: Address::left_padding_from(&[0x01]),
            gas_fee_cap: 1_000_000_000,
            gas_limit: 500_000,
            to: TxKind::Call(Address::left_padding_from(&[0x02])),
            value: U256::from(10_u64),
            input: Bytes::from(vec![0xaa, 0xbb]),
            ticket_id: B256::left_padding_from(&[0x03]),
            refund_to: Address::left_padding_from(&[0x04]),
            max_refund: U256::from(100_u64),
            submission_fee_refund: U256::from(7_u64),
        };
        let mut encoded = Vec::new();
        tx.rlp_encode(&mut encoded);
        assert_eq!(encoded.len(), tx.rlp_encoded_length());
        let decoded = TxArbRetry::rlp_decode(&mut encoded.as_slice()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn submit_retryable_roundtrip() {
        let tx = TxArbSubmitRetryable {
            chain_id: 42161,
            request_id: B256::left_padding_from(&[0x09]),
            from: Address::left_padding_from(&[0x01]),
            l1_base_fee: U256::from(30_000_000_000_u64),
            deposit_value: U256::from(1_000_u64),
            gas_fee_cap: 2_000_000_000,
            gas_limit: 800_000,
            retry_to: TxKind::Create,
            retry_value: U256::from(5_u64),
            beneficiary: Address::left_padding_from(&[0x05]),
            max_submission_fee: U256::from(50_u64),
            fee_refund_addr: Address::left_padding_from(&[0x06]),
            retry_data: Bytes::from(vec![0x01, 0x02, 0x03]),
        };
        let mut encoded = Vec::new();
        tx.rlp_encode(&mut encoded);
        let decoded = TxArbSubmitRetryable::rlp_decode(&mut encoded.as_slice()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn unsigned_and_contract_roundtrip() {
        let unsigned = TxArbUnsigned {
            chain_id: 42161,
            from: Address::left_padding_from(&[0x0a]),
            nonce: 8,
            gas_fee_cap: 700_000_000,
            gas_limit: 120_000,
            to: TxKind::Call(Address::left_padding_from(&[0x0b])),
            value: U256::from(44_u64),
            input: Bytes::from(vec![0x65]),
        };
        let mut encoded = Vec::new();
        unsigned.rlp_encode(&mut encoded);
        assert_eq!(
            TxArbUnsigned::rlp_decode(&mut encoded.as_slice()).unwrap(),
            unsigned
        );

        let contract = TxArbContract {
            chain_id: 42161,
            request_id: B256::left_padding_from(&[0x0c]),
            from: Address::left_padding_from(&[0x0d]),
            gas_fee_cap: 800_000_000,
            gas_limit: 130_000,
            to: TxKind::Create,
            value: U256::ZERO,
            input: Bytes::from(vec![0x66, 0x66]),
        };
        let mut encoded = Vec::new();
        contract.rlp_encode(&mut encoded);
        assert_eq!(
            TxArbContract::rlp_decode(&mut encoded.as_slice()).unwrap(),
            contract
        );
    }

    #[test]
    fn deposit_and_internal_roundtrip() {
        let deposit = TxArbDeposit {
            chain_id: 42161,
            l1_request_id: B256::left_padding_from(&[0x07]),
            from: Address::left_padding_from(&[0x01]),
            to: Address::left_padding_from(&[0x02]),
            value: U256::from(123_u64),
        };
        let mut encoded = Vec::new();
        deposit.rlp_encode(&mut encoded);
        assert_eq!(
            TxArbDeposit::rlp_decode(&mut encoded.as_slice()).unwrap(),
            deposit
        );

        let internal = TxArbInternal {
            chain_id: 42161,
            input: Bytes::from(vec![0x6a]),
        };
        let mut encoded = Vec::new();
        internal.rlp_encode(&mut encoded);
        assert_eq!(
            TxArbInternal::rlp_decode(&mut encoded.as_slice()).unwrap(),
            internal
        );
    }

    #[test]
    fn legacy_replay_roundtrip_keeps_signature_and_override() {
        let tx = TxArbLegacy {
            legacy: TxLegacy {
                chain_id: Some(1),
                nonce: 9,
                gas_price: 20_000_000_000,
                gas_limit: 21_000,
                to: TxKind::Call(Address::left_padding_from(&[0x08])),
                value: U256::from(1_u64),
                input: Bytes::new(),
            },
            hash_override: B256::left_padding_from(&[0xfe]),
            effective_gas_price: 20_000_000_000,
            l1_block_number: 14_000_000,
            sender: Some(Address::left_padding_from(&[0x0a])),
        };
        let signature = Signature::test_signature();
        let mut encoded = Vec::new();
        tx.rlp_encode_signed(&signature, &mut encoded);
        assert_eq!(encoded.len(), tx.rlp_encoded_length(&signature));
        let (decoded, decoded_sig) = TxArbLegacy::rlp_decode_signed(&mut encoded.as_slice()).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded_sig, signature);
        assert_eq!(decoded.tx_hash(), tx.hash_override);
    }

    #[test]
    fn legacy_replay_without_sender() {
        let tx = TxArbLegacy {
            legacy: TxLegacy::default(),
            hash_override: B256::ZERO,
            effective_gas_price: 0,
            l1_block_number: 0,
            sender: None,
        };
        let signature = Signature::test_signature();
        let mut encoded = Vec::new();
        tx.rlp_encode_signed(&signature, &mut encoded);
        let (decoded, _) = TxArbLegacy::rlp_decode_signed(&mut encoded.as_slice()).unwrap();
        assert!(decoded.sender.is_none());
    }
}
