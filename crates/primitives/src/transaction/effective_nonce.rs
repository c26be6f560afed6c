//! Execution-nonce decoration for deposit payloads.
//!
//! Deposits have no signer nonce of their own, but the execution engine
//! still needs one to sequence the forced sender's account. The wrapper
//! carries that nonce next to the payload without ever letting it into the
//! canonical encoding: the wrapped value encodes byte-for-byte like the bare
//! payload, so the identity hash is unchanged.

use alloy_consensus::{Transaction, Typed2718};
use alloy_eips::{eip2718::Encodable2718, eip2930::AccessList};
use alloy_primitives::{Bytes, ChainId, TxKind, B256, U256};

/// A deposit-shaped payload decorated with an execution-time nonce.
///
/// Everything forwards to the wrapped payload except [`Transaction::nonce`],
/// which returns the override. The encode path targets the inner payload
/// exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct NoncedDeposit<T> {
    /// The wrapped deposit payload.
    pub inner: T,
    /// The nonce the execution engine sees for the forced sender.
    pub effective_nonce: u64,
}

impl<T> NoncedDeposit<T> {
    /// Wraps the payload with the given execution nonce.
    pub const fn new(inner: T, effective_nonce: u64) -> Self {
        Self {
            inner,
            effective_nonce,
        }
    }

    /// Returns the wrapped payload, dropping the nonce decoration.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Typed2718> Typed2718 for NoncedDeposit<T> {
    fn ty(&self) -> u8 {
        self.inner.ty()
    }
}

impl<T: Transaction> Transaction for NoncedDeposit<T> {
    fn chain_id(&self) -> Option<ChainId> {
        self.inner.chain_id()
    }

    fn nonce(&self) -> u64 {
        self.effective_nonce
    }

    fn gas_limit(&self) -> u64 {
        self.inner.gas_limit()
    }

    fn gas_price(&self) -> Option<u128> {
        self.inner.gas_price()
    }

    fn max_fee_per_gas(&self) -> u128 {
        self.inner.max_fee_per_gas()
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        self.inner.max_priority_fee_per_gas()
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        self.inner.max_fee_per_blob_gas()
    }

    fn priority_fee_or_price(&self) -> u128 {
        self.inner.priority_fee_or_price()
    }

    fn effective_gas_price(&self, base_fee: Option<u64>) -> u128 {
        self.inner.effective_gas_price(base_fee)
    }

    fn is_dynamic_fee(&self) -> bool {
        self.inner.is_dynamic_fee()
    }

    fn kind(&self) -> TxKind {
        self.inner.kind()
    }

    fn is_create(&self) -> bool {
        self.inner.is_create()
    }

    fn value(&self) -> U256 {
        self.inner.value()
    }

    fn input(&self) -> &Bytes {
        self.inner.input()
    }

    fn access_list(&self) -> Option<&AccessList> {
        self.inner.access_list()
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        self.inner.blob_versioned_hashes()
    }

    fn authorization_list(&self) -> Option<&[alloy_eips::eip7702::SignedAuthorization]> {
        self.inner.authorization_list()
    }
}

impl<T: Encodable2718> Encodable2718 for NoncedDeposit<T> {
    fn type_flag(&self) -> Option<u8> {
        self.inner.type_flag()
    }

    fn encode_2718_len(&self) -> usize {
        self.inner.encode_2718_len()
    }

    fn encode_2718(&self, out: &mut dyn alloy_rlp::BufMut) {
        // The nonce is execution-only state. Encoding it would change the
        // transaction hash.
        self.inner.encode_2718(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TxDeposit;
    use alloy_primitives::{Address, U256};

    #[test]
    fn nonce_is_overridden() {
        let deposit = TxDeposit {
            from: Address::left_padding_from(&[0x01]),
            value: U256::from(1_u64),
            ..Default::default()
        };
        assert_eq!(deposit.nonce(), 0);
        let nonced = NoncedDeposit::new(deposit, 7);
        assert_eq!(nonced.nonce(), 7);
    }

    #[test]
    fn encoding_ignores_the_nonce() {
        let deposit = TxDeposit {
            from: Address::left_padding_from(&[0x02]),
            gas_limit: 30_000,
            ..Default::default()
        };
        let bare = deposit.encoded_2718();
        let nonced = NoncedDeposit::new(deposit, 99).encoded_2718();
        assert_eq!(bare, nonced);
    }
}
