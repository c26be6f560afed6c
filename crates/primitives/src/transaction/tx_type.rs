//! Contains the transaction type identifier for the omnichain client.

extern crate alloc;

use alloy_consensus::Typed2718;
use alloy_eips::eip2718::Eip2718Error;
use alloy_primitives::{U8, U64};
use alloy_rlp::{BufMut, Decodable, Encodable};
use derive_more::Display;

/// Identifier for the bridge deposit transaction family.
///
/// Three payload shapes share this byte on the wire (base deposit, extended
/// deposit, L1 message); they are told apart by the decoded field list, never
/// by the type flag.
pub const DEPOSIT_TX_TYPE_ID: u8 = 126; // 0x7E

/// Identifier for replayed pre-fork legacy transactions.
pub const ARB_LEGACY_TX_TYPE_ID: u8 = 120; // 0x78

/// `TransactionType` flags for every chain variant the client speaks: the
/// EIP [2718], [2930], [1559] and [4844] types of the base chain, the
/// cosmos-bridged call type, the retryable-ticket family and the bridge
/// deposit family.
///
/// Every byte is claimed by exactly one variant; registering a second payload
/// under an existing byte is impossible by construction.
///
/// [2718]: https://eips.ethereum.org/EIPS/eip-2718
/// [2930]: https://eips.ethereum.org/EIPS/eip-2930
/// [1559]: https://eips.ethereum.org/EIPS/eip-1559
/// [4844]: https://eips.ethereum.org/EIPS/eip-4844
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, Default, PartialEq, PartialOrd, Ord, Hash, Display)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "U8", try_from = "U64")]
pub enum OmniTxType {
    /// Legacy transaction type.
    #[default]
    #[display("legacy")]
    Legacy = 0,
    /// EIP-2930 transaction type.
    #[display("eip2930")]
    Eip2930 = 1,
    /// EIP-1559 transaction type.
    #[display("eip1559")]
    Eip1559 = 2,
    /// EIP-4844 transaction type.
    #[display("eip4844")]
    Eip4844 = 3,
    /// Cosmos-bridged EVM call transaction type.
    #[display("zeta")]
    Zeta = 0x58,
    /// Retryable-family L1 deposit transaction type.
    #[display("arb_deposit")]
    ArbDeposit = 0x64,
    /// Unsigned L1-originated call transaction type.
    #[display("arb_unsigned")]
    ArbUnsigned = 0x65,
    /// Contract-triggered L1-originated call transaction type.
    #[display("arb_contract")]
    ArbContract = 0x66,
    /// Retryable ticket redemption transaction type.
    #[display("arb_retry")]
    ArbRetry = 0x68,
    /// Retryable ticket submission transaction type.
    #[display("arb_submit_retryable")]
    ArbSubmitRetryable = 0x69,
    /// Chain-owned internal bookkeeping transaction type.
    #[display("arb_internal")]
    ArbInternal = 0x6A,
    /// Replayed pre-fork legacy transaction type.
    #[display("arb_legacy")]
    ArbLegacy = 0x78,
    /// Bridge deposit transaction family type.
    #[display("deposit")]
    Deposit = 0x7E,
}

impl OmniTxType {
    /// List of all variants.
    pub const ALL: [Self; 13] = [
        Self::Legacy,
        Self::Eip2930,
        Self::Eip1559,
        Self::Eip4844,
        Self::Zeta,
        Self::ArbDeposit,
        Self::ArbUnsigned,
        Self::ArbContract,
        Self::ArbRetry,
        Self::ArbSubmitRetryable,
        Self::ArbInternal,
        Self::ArbLegacy,
        Self::Deposit,
    ];

    /// Returns `true` if the type belongs to the bridge deposit family.
    pub const fn is_deposit(&self) -> bool {
        matches!(self, Self::Deposit)
    }

    /// Returns `true` if the type belongs to the retryable-ticket family.
    pub const fn is_retryable_family(&self) -> bool {
        matches!(
            self,
            Self::ArbDeposit
                | Self::ArbUnsigned
                | Self::ArbContract
                | Self::ArbRetry
                | Self::ArbSubmitRetryable
                | Self::ArbInternal
                | Self::ArbLegacy
        )
    }
}

impl From<OmniTxType> for U8 {
    fn from(tx_type: OmniTxType) -> Self {
        Self::from(u8::from(tx_type))
    }
}

impl From<OmniTxType> for u8 {
    fn from(v: OmniTxType) -> Self {
        v as Self
    }
}

impl TryFrom<u8> for OmniTxType {
    type Error = Eip2718Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Legacy,
            1 => Self::Eip2930,
            2 => Self::Eip1559,
            3 => Self::Eip4844,
            0x58 => Self::Zeta,
            0x64 => Self::ArbDeposit,
            0x65 => Self::ArbUnsigned,
            0x66 => Self::ArbContract,
            0x68 => Self::ArbRetry,
            0x69 => Self::ArbSubmitRetryable,
            0x6A => Self::ArbInternal,
            0x78 => Self::ArbLegacy,
            0x7E => Self::Deposit,
            _ => return Err(Eip2718Error::UnexpectedType(value)),
        })
    }
}

impl TryFrom<u64> for OmniTxType {
    type Error = &'static str;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let err = || "invalid tx type";
        let value: u8 = value.try_into().map_err(|_| err())?;
        Self::try_from(value).map_err(|_| err())
    }
}

impl TryFrom<U64> for OmniTxType {
    type Error = &'static str;

    fn try_from(value: U64) -> Result<Self, Self::Error> {
        value.to::<u64>().try_into()
    }
}

impl PartialEq<u8> for OmniTxType {
    fn eq(&self, other: &u8) -> bool {
        (*self as u8) == *other
    }
}

impl PartialEq<OmniTxType> for u8 {
    fn eq(&self, other: &OmniTxType) -> bool {
        *self == *other as Self
    }
}

impl Encodable for OmniTxType {
    fn encode(&self, out: &mut dyn BufMut) {
        (*self as u8).encode(out);
    }

    fn length(&self) -> usize {
        1
    }
}

impl Decodable for OmniTxType {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let ty = u8::decode(buf)?;

        Self::try_from(ty).map_err(|_| alloy_rlp::Error::Custom("invalid transaction type"))
    }
}

impl Typed2718 for OmniTxType {
    fn ty(&self) -> u8 {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{vec, vec::Vec};

    #[test]
    fn test_all_tx_types() {
        assert_eq!(OmniTxType::ALL.len(), 13);
        let all = vec![
            OmniTxType::Legacy,
            OmniTxType::Eip2930,
            OmniTxType::Eip1559,
            OmniTxType::Eip4844,
            OmniTxType::Zeta,
            OmniTxType::ArbDeposit,
            OmniTxType::ArbUnsigned,
            OmniTxType::ArbContract,
            OmniTxType::ArbRetry,
            OmniTxType::ArbSubmitRetryable,
            OmniTxType::ArbInternal,
            OmniTxType::ArbLegacy,
            OmniTxType::Deposit,
        ];
        assert_eq!(OmniTxType::ALL.to_vec(), all);
    }

    #[test]
    fn tx_type_roundtrip() {
        for &tx_type in &OmniTxType::ALL {
            let mut buf = Vec::new();
            tx_type.encode(&mut buf);
            let decoded = OmniTxType::decode(&mut &buf[..]).unwrap();
            assert_eq!(tx_type, decoded);
        }
    }

    #[test]
    fn unknown_byte_is_rejected() {
        assert!(matches!(
            OmniTxType::try_from(0xFFu8),
            Err(Eip2718Error::UnexpectedType(0xFF))
        ));
        assert!(OmniTxType::try_from(0x67u8).is_err());
        assert!(OmniTxType::try_from(0x7Fu8).is_err());
    }

    #[test]
    fn family_predicates() {
        assert!(OmniTxType::Deposit.is_deposit());
        assert!(!OmniTxType::ArbDeposit.is_deposit());
        assert!(OmniTxType::ArbRetry.is_retryable_family());
        assert!(!OmniTxType::Legacy.is_retryable_family());
    }
}
