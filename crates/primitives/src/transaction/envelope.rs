//! The omnichain transaction envelope.

extern crate alloc;

use alloy_consensus::{
    transaction::{RlpEcdsaDecodableTx, RlpEcdsaEncodableTx},
    SignableTransaction, Signed, Transaction, TxEip1559, TxEip2930, TxEip4844, TxLegacy,
    Typed2718,
};
use alloy_eips::{
    eip2718::{Decodable2718, Eip2718Error, Eip2718Result, Encodable2718},
    eip2930::AccessList,
    eip7702::SignedAuthorization,
};
use alloy_primitives::{Address, Bytes, Signature, SignatureError, TxHash, TxKind, B256, U256};
use alloy_rlp::{Buf, Header};
use core::{
    hash::{Hash, Hasher},
    ops::Deref,
};
use std::sync::OnceLock;

use super::{
    arbitrum::{
        TxArbContract, TxArbDeposit, TxArbInternal, TxArbLegacy, TxArbRetry,
        TxArbSubmitRetryable, TxArbUnsigned,
    },
    deposit::TxDeposit,
    l1_message::TxL1Message,
    mantle::TxMantleDeposit,
    tx_type::OmniTxType,
    typed::OmniTypedTransaction,
    zeta::TxZeta,
};

/// The signature attached to every payload that has none of its own.
pub const fn zero_signature() -> Signature {
    Signature::new(U256::ZERO, U256::ZERO, false)
}

/// A transaction envelope: exactly one payload, the signature triple, and
/// lazily derived state.
///
/// Envelopes are immutable after construction. The identity hash, the
/// recovered sender and the encoded size are memoized on first access;
/// recomputation under concurrent first access is redundant but
/// result-stable, so shared reads need no locking. Producing a variant of
/// an envelope means building a new one.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Eq, derive_more::AsRef, derive_more::Deref)]
pub struct OmniTxEnvelope {
    /// Transaction hash
    #[serde(skip)]
    hash: OnceLock<TxHash>,
    /// Recovered or forced sender
    #[serde(skip)]
    sender: OnceLock<Address>,
    /// EIP-2718 encoded size
    #[serde(skip)]
    size: OnceLock<usize>,
    /// The transaction signature values
    signature: Signature,
    /// Raw transaction info
    #[deref]
    #[as_ref]
    transaction: OmniTypedTransaction,
}

impl OmniTxEnvelope {
    /// Creates a new envelope from the given payload, signature and hash.
    ///
    /// Caution: This assumes the given hash is the correct transaction hash.
    pub fn new(transaction: OmniTypedTransaction, signature: Signature, hash: B256) -> Self {
        Self {
            hash: hash.into(),
            sender: Default::default(),
            size: Default::default(),
            signature,
            transaction,
        }
    }

    /// Creates a new envelope from the given payload and signature without
    /// the hash.
    ///
    /// Note: this only calculates the hash on the first
    /// [`OmniTxEnvelope::tx_hash`] call.
    pub fn new_unhashed(transaction: OmniTypedTransaction, signature: Signature) -> Self {
        Self {
            hash: Default::default(),
            sender: Default::default(),
            size: Default::default(),
            signature,
            transaction,
        }
    }

    /// Creates a new envelope for a payload that carries no signature of its
    /// own.
    pub fn new_unsigned(transaction: OmniTypedTransaction) -> Self {
        Self::new_unhashed(transaction, zero_signature())
    }

    /// Returns the payload.
    #[inline]
    pub const fn transaction(&self) -> &OmniTypedTransaction {
        &self.transaction
    }

    /// Returns the transaction signature.
    #[inline]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Consumes the envelope and returns the payload.
    #[inline]
    pub fn into_transaction(self) -> OmniTypedTransaction {
        self.transaction
    }

    /// Splits the envelope into its payload and signature.
    pub fn split(self) -> (OmniTypedTransaction, Signature) {
        (self.transaction, self.signature)
    }

    /// Splits the envelope into payload, signature and hash, computing the
    /// hash if it was never accessed.
    pub fn into_parts(self) -> (OmniTypedTransaction, Signature, B256) {
        let hash = *self.tx_hash();
        (self.transaction, self.signature, hash)
    }

    /// Returns the identity hash of the transaction, memoized.
    ///
    /// This is the digest of the canonical EIP-2718 encoding for every
    /// payload except the replayed legacy shape, whose identity is its
    /// pinned override hash.
    pub fn tx_hash(&self) -> &TxHash {
        self.hash
            .get_or_init(|| self.transaction.tx_hash(&self.signature))
    }

    /// Reference to transaction hash. Used to identify transaction.
    pub fn hash(&self) -> &TxHash {
        self.tx_hash()
    }

    /// Returns the length of the EIP-2718 encoding, memoized.
    pub fn encoded_size(&self) -> usize {
        *self.size.get_or_init(|| self.encode_2718_len())
    }

    /// Return the [`OmniTxType`] of the inner txn.
    pub const fn tx_type(&self) -> OmniTxType {
        self.transaction.tx_type()
    }

    /// The execution-nonce override, if the payload carries one.
    pub const fn effective_nonce(&self) -> Option<u64> {
        self.transaction.effective_nonce()
    }

    /// Returns `true` if the payload belongs to the bridge deposit family.
    pub const fn is_deposit(&self) -> bool {
        self.transaction.is_deposit()
    }

    /// Returns `true` if the transaction is a system transaction.
    pub const fn is_system_transaction(&self) -> bool {
        match &self.transaction {
            OmniTypedTransaction::Deposit(tx) => tx.is_system_transaction,
            OmniTypedTransaction::DepositNonced(tx) => tx.inner.is_system_transaction,
            OmniTypedTransaction::MantleDeposit(tx) => tx.is_system_transaction,
            OmniTypedTransaction::MantleDepositNonced(tx) => tx.inner.is_system_transaction,
            _ => false,
        }
    }

    /// Recover the sender of the transaction, memoized.
    ///
    /// Payloads with a forced sender return the embedded address; everything
    /// else recovers from the signature triple over the signing hash.
    pub fn recover_signer(&self) -> Result<Address, SignatureError> {
        if let Some(from) = self.transaction.forced_sender() {
            return Ok(from);
        }
        if let Some(sender) = self.sender.get() {
            return Ok(*sender);
        }
        let signature_hash = signature_hash(&self.transaction);
        let recovered = self.signature.recover_address_from_prehash(&signature_hash)?;
        Ok(*self.sender.get_or_init(|| recovered))
    }
}

macro_rules! impl_from_signed {
    ($($tx:ident),*) => {
        $(
            impl From<Signed<$tx>> for OmniTxEnvelope {
                fn from(value: Signed<$tx>) -> Self {
                    let (tx, sig, hash) = value.into_parts();
                    Self::new(tx.into(), sig, hash)
                }
            }
        )*
    };
}

impl_from_signed!(TxLegacy, TxEip2930, TxEip1559, TxEip4844);

impl From<(OmniTypedTransaction, Signature)> for OmniTxEnvelope {
    fn from(value: (OmniTypedTransaction, Signature)) -> Self {
        Self::new_unhashed(value.0, value.1)
    }
}

impl Typed2718 for OmniTxEnvelope {
    fn ty(&self) -> u8 {
        self.deref().ty()
    }
}

impl Transaction for OmniTxEnvelope {
    fn chain_id(&self) -> Option<u64> {
        self.deref().chain_id()
    }

    fn nonce(&self) -> u64 {
        self.deref().nonce()
    }

    fn gas_limit(&self) -> u64 {
        self.deref().gas_limit()
    }

    fn gas_price(&self) -> Option<u128> {
        self.deref().gas_price()
    }

    fn max_fee_per_gas(&self) -> u128 {
        self.deref().max_fee_per_gas()
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        self.deref().max_priority_fee_per_gas()
    }

    fn max_fee_per_blob_gas(&self) -> Option<u128> {
        self.deref().max_fee_per_blob_gas()
    }

    fn priority_fee_or_price(&self) -> u128 {
        self.deref().priority_fee_or_price()
    }

    fn effective_gas_price(&self, base_fee: Option<u64>) -> u128 {
        self.deref().effective_gas_price(base_fee)
    }

    fn is_dynamic_fee(&self) -> bool {
        self.deref().is_dynamic_fee()
    }

    fn kind(&self) -> TxKind {
        self.deref().kind()
    }

    fn is_create(&self) -> bool {
        self.deref().is_create()
    }

    fn value(&self) -> U256 {
        self.deref().value()
    }

    fn input(&self) -> &Bytes {
        self.deref().input()
    }

    fn access_list(&self) -> Option<&AccessList> {
        self.deref().access_list()
    }

    fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        self.deref().blob_versioned_hashes()
    }

    fn authorization_list(&self) -> Option<&[SignedAuthorization]> {
        self.deref().authorization_list()
    }
}

impl PartialEq for OmniTxEnvelope {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
            && self.transaction == other.transaction
            && self.tx_hash() == other.tx_hash()
    }
}

impl Hash for OmniTxEnvelope {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
        self.transaction.hash(state);
    }
}

impl alloy_rlp::Encodable for OmniTxEnvelope {
    fn encode(&self, out: &mut dyn alloy_rlp::bytes::BufMut) {
        self.network_encode(out);
    }

    fn length(&self) -> usize {
        let mut payload_length = self.encode_2718_len();
        if !self.is_legacy() {
            payload_length += Header {
                list: false,
                payload_length,
            }
            .length();
        }

        payload_length
    }
}

impl alloy_rlp::Decodable for OmniTxEnvelope {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::network_decode(buf).map_err(Into::into)
    }
}

impl Encodable2718 for OmniTxEnvelope {
    fn type_flag(&self) -> Option<u8> {
        if Typed2718::is_legacy(self) {
            None
        } else {
            Some(self.ty())
        }
    }

    fn encode_2718_len(&self) -> usize {
        match &self.transaction {
            OmniTypedTransaction::Legacy(tx) => tx.eip2718_encoded_length(&self.signature),
            OmniTypedTransaction::Eip2930(tx) => tx.eip2718_encoded_length(&self.signature),
            OmniTypedTransaction::Eip1559(tx) => tx.eip2718_encoded_length(&self.signature),
            OmniTypedTransaction::Eip4844(tx) => tx.eip2718_encoded_length(&self.signature),
            OmniTypedTransaction::Zeta(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::ArbDeposit(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::ArbUnsigned(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::ArbContract(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::ArbRetry(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::ArbSubmitRetryable(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::ArbInternal(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::ArbLegacy(tx) => tx.eip2718_encoded_length(&self.signature),
            OmniTypedTransaction::Deposit(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::DepositNonced(tx) => tx.inner.eip2718_encoded_length(),
            OmniTypedTransaction::MantleDeposit(tx) => tx.eip2718_encoded_length(),
            OmniTypedTransaction::MantleDepositNonced(tx) => tx.inner.eip2718_encoded_length(),
            OmniTypedTransaction::L1Message(tx) => tx.eip2718_encoded_length(),
        }
    }

    fn encode_2718(&self, out: &mut dyn alloy_rlp::BufMut) {
        let Self {
            transaction,
            signature,
            ..
        } = self;

        match transaction {
            // Legacy transactions have no difference between network and 2718
            OmniTypedTransaction::Legacy(tx) => tx.eip2718_encode(signature, out),
            OmniTypedTransaction::Eip2930(tx) => tx.eip2718_encode(signature, out),
            OmniTypedTransaction::Eip1559(tx) => tx.eip2718_encode(signature, out),
            OmniTypedTransaction::Eip4844(tx) => tx.eip2718_encode(signature, out),
            OmniTypedTransaction::Zeta(tx) => tx.encode_2718(out),
            OmniTypedTransaction::ArbDeposit(tx) => tx.encode_2718(out),
            OmniTypedTransaction::ArbUnsigned(tx) => tx.encode_2718(out),
            OmniTypedTransaction::ArbContract(tx) => tx.encode_2718(out),
            OmniTypedTransaction::ArbRetry(tx) => tx.encode_2718(out),
            OmniTypedTransaction::ArbSubmitRetryable(tx) => tx.encode_2718(out),
            OmniTypedTransaction::ArbInternal(tx) => tx.encode_2718(out),
            OmniTypedTransaction::ArbLegacy(tx) => {
                out.put_u8(OmniTxType::ArbLegacy as u8);
                tx.rlp_encode_signed(signature, out);
            }
            OmniTypedTransaction::Deposit(tx) => tx.encode_2718(out),
            // The nonce decoration never reaches the wire.
            OmniTypedTransaction::DepositNonced(tx) => tx.encode_2718(out),
            OmniTypedTransaction::MantleDeposit(tx) => tx.encode_2718(out),
            OmniTypedTransaction::MantleDepositNonced(tx) => tx.encode_2718(out),
            OmniTypedTransaction::L1Message(tx) => tx.encode_2718(out),
        }
    }

    fn trie_hash(&self) -> B256 {
        *self.tx_hash()
    }
}

impl Decodable2718 for OmniTxEnvelope {
    fn typed_decode(ty: u8, buf: &mut &[u8]) -> Eip2718Result<Self> {
        match ty.try_into().map_err(|_| Eip2718Error::UnexpectedType(ty))? {
            OmniTxType::Legacy => Err(Eip2718Error::UnexpectedType(0)),
            OmniTxType::Eip2930 => {
                let (tx, signature, hash) = TxEip2930::rlp_decode_signed(buf)?.into_parts();
                Ok(Self::new(OmniTypedTransaction::Eip2930(tx), signature, hash))
            }
            OmniTxType::Eip1559 => {
                let (tx, signature, hash) = TxEip1559::rlp_decode_signed(buf)?.into_parts();
                Ok(Self::new(OmniTypedTransaction::Eip1559(tx), signature, hash))
            }
            OmniTxType::Eip4844 => {
                let (tx, signature, hash) = TxEip4844::rlp_decode_signed(buf)?.into_parts();
                Ok(Self::new(OmniTypedTransaction::Eip4844(tx), signature, hash))
            }
            OmniTxType::Zeta => Ok(Self::new_unsigned(OmniTypedTransaction::Zeta(
                TxZeta::rlp_decode(buf)?,
            ))),
            OmniTxType::ArbDeposit => Ok(Self::new_unsigned(OmniTypedTransaction::ArbDeposit(
                TxArbDeposit::rlp_decode(buf)?,
            ))),
            OmniTxType::ArbUnsigned => Ok(Self::new_unsigned(OmniTypedTransaction::ArbUnsigned(
                TxArbUnsigned::rlp_decode(buf)?,
            ))),
            OmniTxType::ArbContract => Ok(Self::new_unsigned(OmniTypedTransaction::ArbContract(
                TxArbContract::rlp_decode(buf)?,
            ))),
            OmniTxType::ArbRetry => Ok(Self::new_unsigned(OmniTypedTransaction::ArbRetry(
                TxArbRetry::rlp_decode(buf)?,
            ))),
            OmniTxType::ArbSubmitRetryable => Ok(Self::new_unsigned(
                OmniTypedTransaction::ArbSubmitRetryable(TxArbSubmitRetryable::rlp_decode(buf)?),
            )),
            OmniTxType::ArbInternal => Ok(Self::new_unsigned(OmniTypedTransaction::ArbInternal(
                TxArbInternal::rlp_decode(buf)?,
            ))),
            OmniTxType::ArbLegacy => {
                let (tx, signature) = TxArbLegacy::rlp_decode_signed(buf)?;
                Ok(Self::new_unhashed(
                    OmniTypedTransaction::ArbLegacy(tx),
                    signature,
                ))
            }
            OmniTxType::Deposit => {
                // Three payload shapes share the byte; the field count of the
                // list tells them apart.
                let tx = match rlp_list_item_count(*buf)? {
                    6 => OmniTypedTransaction::L1Message(TxL1Message::rlp_decode(buf)?),
                    8 => OmniTypedTransaction::Deposit(TxDeposit::rlp_decode(buf)?),
                    9 | 10 => {
                        OmniTypedTransaction::MantleDeposit(TxMantleDeposit::rlp_decode(buf)?)
                    }
                    _ => {
                        return Err(
                            alloy_rlp::Error::Custom("unknown deposit payload shape").into()
                        )
                    }
                };
                Ok(Self::new_unsigned(tx))
            }
        }
    }

    fn fallback_decode(buf: &mut &[u8]) -> Eip2718Result<Self> {
        let (transaction, signature) = TxLegacy::rlp_decode_with_signature(buf)?;
        Ok(Self::new_unhashed(
            OmniTypedTransaction::Legacy(transaction),
            signature,
        ))
    }
}

/// Counts the top-level items of the RLP list at the head of `buf` without
/// consuming it.
fn rlp_list_item_count(buf: &[u8]) -> alloy_rlp::Result<usize> {
    let mut peek = buf;
    let header = Header::decode(&mut peek)?;
    if !header.list {
        return Err(alloy_rlp::Error::UnexpectedString);
    }
    if header.payload_length > peek.len() {
        return Err(alloy_rlp::Error::InputTooShort);
    }
    let mut payload = &peek[..header.payload_length];
    let mut count = 0usize;
    while !payload.is_empty() {
        let item = Header::decode(&mut payload)?;
        if item.payload_length > payload.len() {
            return Err(alloy_rlp::Error::InputTooShort);
        }
        payload.advance(item.payload_length);
        count += 1;
    }
    Ok(count)
}

/// Calculates the signing hash for the transaction.
///
/// Synthetic payloads are never signed over; they hash to zero here and are
/// resolved through their forced sender instead.
fn signature_hash(tx: &OmniTypedTransaction) -> B256 {
    match tx {
        OmniTypedTransaction::Legacy(tx) => tx.signature_hash(),
        OmniTypedTransaction::Eip2930(tx) => tx.signature_hash(),
        OmniTypedTransaction::Eip1559(tx) => tx.signature_hash(),
        OmniTypedTransaction::Eip4844(tx) => tx.signature_hash(),
        OmniTypedTransaction::ArbLegacy(tx) => tx.legacy.signature_hash(),
        _ => B256::ZERO,
    }
}
