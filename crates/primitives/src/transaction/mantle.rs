//! Extended bridge deposit transaction type.
//!
//! Shares the deposit family wire byte with [`TxDeposit`](crate::TxDeposit)
//! but additionally settles the chain's native-token representation: a
//! nilable mint tag for it and a trailing transfer tag for the recipient.
//! The two extra fields give the shape a distinct field count on the wire,
//! which is what the decoder dispatches on.

extern crate alloc;

use alloc::vec::Vec;
use alloy_consensus::{Transaction, Typed2718};
use alloy_eips::{eip2718::Encodable2718, eip2930::AccessList};
use alloy_primitives::{keccak256, Address, Bytes, ChainId, TxHash, TxKind, B256, U256};
use alloy_rlp::{
    Buf, BufMut, Decodable, Encodable, Error as DecodeError, Header, EMPTY_STRING_CODE,
};
use core::mem;

use crate::OmniTxType;

/// A bridge deposit that can additionally mint and transfer the chain's
/// secondary native token. Carries a forced sender and no signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct TxMantleDeposit {
    /// Hash that uniquely identifies the source of the deposit.
    pub source_hash: B256,
    /// The address of the sender account.
    pub from: Address,
    /// The address of the recipient account, or create.
    pub to: TxKind,
    /// The value to mint on this chain. `None` if there is nothing to mint.
    pub mint: Option<u128>,
    /// The value transferred from the sender balance, executed after the
    /// mint (if any).
    pub value: U256,
    /// The gas limit for the transaction.
    pub gas_limit: u64,
    /// Field indicating if this transaction is exempt from the chain gas
    /// limit.
    pub is_system_transaction: bool,
    /// Secondary native token mint tag. `None` if there is nothing to mint.
    pub eth_value: Option<U256>,
    /// Calldata, or init code when `to` is create.
    pub input: Bytes,
    /// Secondary native token transfer tag for the recipient. Omitted from
    /// the encoding entirely when absent.
    pub eth_tx_value: Option<U256>,
}

impl TxMantleDeposit {
    /// Decodes the inner [`TxMantleDeposit`] fields from RLP bytes, in
    /// declaration order. The trailing transfer tag is decoded only if the
    /// list payload has bytes left.
    pub fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let source_hash = Decodable::decode(buf)?;
        let from = Decodable::decode(buf)?;
        let to = Decodable::decode(buf)?;
        let mint = if *buf.first().ok_or(DecodeError::InputTooShort)? == EMPTY_STRING_CODE {
            buf.advance(1);
            None
        } else {
            Some(Decodable::decode(buf)?)
        };
        let value = Decodable::decode(buf)?;
        let gas_limit = Decodable::decode(buf)?;
        let is_system_transaction = Decodable::decode(buf)?;
        let eth_value = if *buf.first().ok_or(DecodeError::InputTooShort)? == EMPTY_STRING_CODE {
            buf.advance(1);
            None
        } else {
            Some(Decodable::decode(buf)?)
        };
        let input = Decodable::decode(buf)?;
        let eth_tx_value = if buf.is_empty() {
            None
        } else {
            Some(Decodable::decode(buf)?)
        };
        Ok(Self {
            source_hash,
            from,
            to,
            mint,
            value,
            gas_limit,
            is_system_transaction,
            eth_value,
            input,
            eth_tx_value,
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

    /// Outputs the length of the transaction's fields, without a RLP header.
    pub(crate) fn rlp_encoded_fields_length(&self) -> usize {
        self.source_hash.length()
            + self.from.length()
            + self.to.length()
            + self.mint.map_or(1, |mint| mint.length())
            + self.value.length()
            + self.gas_limit.length()
            + self.is_system_transaction.length()
            + self.eth_value.as_ref().map_or(1, |v| v.length())
            + self.input.0.length()
            + self.eth_tx_value.as_ref().map_or(0, |v| v.length())
    }

    /// Encodes only the transaction's fields into the desired buffer, without
    /// a RLP header. Absent mint tags are encoded as the empty string; an
    /// absent transfer tag is omitted.
    pub(crate) fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.source_hash.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        if let Some(mint) = self.mint {
            mint.encode(out);
        } else {
            out.put_u8(EMPTY_STRING_CODE);
        }
        self.value.encode(out);
        self.gas_limit.encode(out);
        self.is_system_transaction.encode(out);
        if let Some(eth_value) = &self.eth_value {
            eth_value.encode(out);
        } else {
            out.put_u8(EMPTY_STRING_CODE);
        }
        self.input.encode(out);
        if let Some(eth_tx_value) = &self.eth_tx_value {
            eth_tx_value.encode(out);
        }
    }

    /// Calculates a heuristic for the in-memory size of the transaction.
    #[inline]
    pub fn size(&self) -> usize {
        mem::size_of::<B256>() + // source_hash
        mem::size_of::<Address>() + // from
        self.to.size() + // to
        mem::size_of::<Option<u128>>() + // mint
        mem::size_of::<U256>() + // value
        mem::size_of::<u64>() + // gas_limit
        mem::size_of::<bool>() + // is_system_transaction
        mem::size_of::<Option<U256>>() * 2 + // eth_value + eth_tx_value
        self.input.len() // input
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

impl Typed2718 for TxMantleDeposit {
    fn ty(&self) -> u8 {
        OmniTxType::Deposit as u8
    }
}

impl Transaction for TxMantleDeposit {
    fn chain_id(&self) -> Option<ChainId> {
        None
    }

    fn nonce(&self) -> u64 {
        0u64
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

impl Encodable2718 for TxMantleDeposit {
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

impl Encodable for TxMantleDeposit {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxMantleDeposit {
    fn decode(data: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloy_primitives::address;

    fn sample() -> TxMantleDeposit {
        TxMantleDeposit {
            source_hash: B256::left_padding_from(&[0x11]),
            from: address!("0x2f25deb3848c207fc8e0c34035b3ba7fc157602b"),
            to: TxKind::Call(Address::left_padding_from(&[0x22])),
            mint: Some(1000),
            value: U256::from(7_u64),
            gas_limit: 55_000,
            is_system_transaction: false,
            eth_value: Some(U256::from(42_u64)),
            input: Bytes::from(vec![0xca, 0xfe]),
            eth_tx_value: None,
        }
    }

    #[test]
    fn roundtrip_without_transfer_tag() {
        let tx = sample();
        let mut encoded = Vec::new();
        tx.rlp_encode(&mut encoded);
        assert_eq!(encoded.len(), tx.rlp_encoded_length());
        let decoded = TxMantleDeposit::rlp_decode(&mut encoded.as_slice()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn roundtrip_with_transfer_tag() {
        let tx = TxMantleDeposit {
            eth_tx_value: Some(U256::from(9_u64)),
            ..sample()
        };
        let mut encoded = Vec::new();
        tx.rlp_encode(&mut encoded);
        let decoded = TxMantleDeposit::rlp_decode(&mut encoded.as_slice()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn absent_mint_tags_use_empty_string() {
        let tx = TxMantleDeposit {
            mint: None,
            eth_value: None,
            ..sample()
        };
        let mut encoded = Vec::new();
        tx.rlp_encode(&mut encoded);
        let decoded = TxMantleDeposit::rlp_decode(&mut encoded.as_slice()).unwrap();
        assert!(decoded.mint.is_none());
        assert!(decoded.eth_value.is_none());
    }
}
