//! Cosmos-bridged EVM call transaction type.

extern crate alloc;

use alloc::vec::Vec;
use alloy_consensus::{Transaction, Typed2718};
use alloy_eips::{eip2718::Encodable2718, eip2930::AccessList};
use alloy_primitives::{keccak256, Address, Bytes, ChainId, TxHash, TxKind, B256, U256};
use alloy_rlp::{Buf, BufMut, Decodable, Encodable, Header};
use core::mem;

use crate::OmniTxType;

/// An EVM call injected by the chain's cosmos-side module. The sender is
/// authenticated by the bridging module, so the payload carries a forced
/// `from` and no signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxZeta {
    /// The chain id of the target chain.
    pub chain_id: ChainId,
    /// The account the bridging module executes the call as.
    pub from: Address,
    /// The sender nonce on this chain.
    pub nonce: u64,
    /// Maximum fee per gas the call pays.
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

impl TxZeta {
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

    /// Decodes the transaction from RLP bytes, enforcing that the payload is
    /// consumed exactly.
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

impl Typed2718 for TxZeta {
    fn ty(&self) -> u8 {
        OmniTxType::Zeta as u8
    }
}

impl Transaction for TxZeta {
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
        Some(self.gas_fee_cap)
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

    fn effective_gas_price(&self, base_fee: Option<u64>) -> u128 {
        base_fee.map_or(self.gas_fee_cap, u128::from)
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

impl Encodable2718 for TxZeta {
    fn type_flag(&self) -> Option<u8> {
        Some(OmniTxType::Zeta as u8)
    }

    fn encode_2718_len(&self) -> usize {
        self.eip2718_encoded_length()
    }

    fn encode_2718(&self, out: &mut dyn alloy_rlp::BufMut) {
        out.put_u8(OmniTxType::Zeta as u8);
        self.rlp_encode(out);
    }
}

impl Encodable for TxZeta {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxZeta {
    fn decode(data: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn roundtrip() {
        let tx = TxZeta {
            chain_id: 7000,
            from: Address::left_padding_from(&[0x77]),
            nonce: 12,
            gas_fee_cap: 100_000_000,
            gas_limit: 90_000,
            to: TxKind::Call(Address::left_padding_from(&[0x88])),
            value: U256::from(55_u64),
            input: Bytes::from(vec![0xde, 0xad]),
        };
        let mut encoded = Vec::new();
        tx.rlp_encode(&mut encoded);
        assert_eq!(encoded.len(), tx.rlp_encoded_length());
        let decoded = TxZeta::rlp_decode(&mut encoded.as_slice()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn contract_creation_has_no_recipient() {
        let tx = TxZeta {
            to: TxKind::Create,
            ..Default::default()
        };
        assert!(tx.is_create());
        let mut encoded = Vec::new();
        tx.rlp_encode(&mut encoded);
        let decoded = TxZeta::rlp_decode(&mut encoded.as_slice()).unwrap();
        assert!(decoded.to.is_create());
    }
}
