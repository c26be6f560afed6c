//! Cross-layer message relay transaction type.

extern crate alloc;

use alloc::vec::Vec;
use alloy_consensus::{Transaction, Typed2718};
use alloy_eips::{eip2718::Encodable2718, eip2930::AccessList};
use alloy_primitives::{keccak256, Address, Bytes, ChainId, TxHash, TxKind, B256, U256};
use alloy_rlp::{BufMut, Decodable, Encodable, Header};
use core::mem;

use crate::OmniTxType;

/// A message enqueued on the settlement layer and relayed into this chain.
/// The sender is the enqueuing L1 account; there is no signature, and the
/// queue index orders the message stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxL1Message {
    /// The index of the message in the L1 queue.
    pub queue_index: u64,
    /// The gas limit for the transaction.
    pub gas_limit: u64,
    /// The address of the recipient account, or create.
    pub to: TxKind,
    /// The value transferred to the recipient account.
    pub value: U256,
    /// Calldata, or init code when `to` is create.
    pub input: Bytes,
    /// The address of the L1 account that enqueued the message.
    pub sender: Address,
}

impl TxL1Message {
    /// Decodes the inner [`TxL1Message`] fields from RLP bytes, in order:
    /// `queue_index`, `gas_limit`, `to`, `value`, `input`, `sender`.
    pub fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            queue_index: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
            sender: Decodable::decode(buf)?,
        })
    }

    /// Decodes the transaction from RLP bytes, enforcing that the payload is
    /// consumed exactly.
    pub fn rlp_decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let remaining = buf.len();

        if header.payload_length > remaining {
            return Err(alloy_rlp::Error::InputTooShort);
        }

        let this = Self::rlp_decode_fields(buf)?;

        if buf.len() + header.payload_length != remaining {
            return Err(alloy_rlp::Error::UnexpectedLength);
        }

        Ok(this)
    }

    /// Outputs the length of the transaction's fields, without a RLP header.
    pub(crate) fn rlp_encoded_fields_length(&self) -> usize {
        self.queue_index.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.0.length()
            + self.sender.length()
    }

    /// Encodes only the transaction's fields into the desired buffer, without
    /// a RLP header.
    pub(crate) fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.queue_index.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
        self.sender.encode(out);
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<u64>() + // queue_index
        mem::size_of::<u64>() + // gas_limit
        self.to.size() + // to
        mem::size_of::<U256>() + // value
        self.input.len() + // input
        mem::size_of::<Address>() // sender
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

impl Typed2718 for TxL1Message {
    fn ty(&self) -> u8 {
        OmniTxType::Deposit as u8
    }
}

impl Transaction for TxL1Message {
    fn chain_id(&self) -> Option<ChainId> {
        None
    }

    fn nonce(&self) -> u64 {
        // The queue index orders the relayed message stream the way an
        // account nonce orders ordinary transactions.
        self.queue_index
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
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

impl Encodable2718 for TxL1Message {
    fn type_flag(&self) -> Option<u8> {
        Some(OmniTxType::Deposit as u8)
    }

    fn encode_2718_len(&self) -> usize {
        self.eip2718_encoded_length()
    }

    fn encode_2718(&self, out: &mut dyn alloy_rlp::BufMut) {
        out.put_u8(OmniTxType::Deposit as u8);
        self.rlp_encode(out);
    }
}

impl Encodable for TxL1Message {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxL1Message {
    fn decode(data: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloy_primitives::address;

    #[test]
    fn roundtrip() {
        let tx = TxL1Message {
            queue_index: 0xe7ba0,
            gas_limit: 2_000_000,
            to: TxKind::Call(address!("0x781e90f1c8fc4611c9b7497c3b47f99ef6969cbc")),
            value: U256::ZERO,
            input: Bytes::from(vec![0x8e, 0xf1, 0x33, 0x2e]),
            sender: address!("0x7885bcbd5cecef1336b5300fb5186a12ddd8c478"),
        };
        let mut encoded = Vec::new();
        tx.rlp_encode(&mut encoded);
        assert_eq!(encoded.len(), tx.rlp_encoded_length());
        let decoded = TxL1Message::rlp_decode(&mut encoded.as_slice()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn nonce_is_queue_index() {
        let tx = TxL1Message {
            queue_index: 77,
            ..Default::default()
        };
        assert_eq!(tx.nonce(), 77);
    }
}
