//! Legacy signature plumbing.
//!
//! Legacy transactions overload `v` to carry both the recovery parity and,
//! post EIP-155, the chain identifier. The helpers here keep that derivation
//! in one place so every call site (wire decode, JSON decode, re-encode)
//! agrees on it.

use alloy_primitives::{ChainId, U256};

/// secp256k1 group order.
const SECP256K1_N: U256 = U256::from_limbs([
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// Derives the chain id from a legacy `v` value.
///
/// Returns `None` for the unprotected pre-EIP-155 values `{27, 28}` and for
/// values that cannot encode a chain id at all.
pub const fn derive_chain_id(v: u64) -> Option<ChainId> {
    if v == 27 || v == 28 {
        return None;
    }
    if v >= 35 {
        return Some((v - 35) / 2);
    }
    None
}

/// Computes the legacy `v` value for the given recovery parity and optional
/// chain id: `35 + 2 * chain_id + parity` when protected, `27 + parity`
/// otherwise.
pub fn legacy_v(y_parity: bool, chain_id: Option<ChainId>) -> u128 {
    let parity = y_parity as u128;
    match chain_id {
        Some(id) => 35 + 2 * id as u128 + parity,
        None => 27 + parity,
    }
}

/// Extracts the recovery parity from a legacy `v` value, if `v` lies in a
/// legal range.
pub const fn parity_from_legacy_v(v: u64) -> Option<bool> {
    match v {
        27 => Some(false),
        28 => Some(true),
        _ if v >= 35 => Some((v - 35) % 2 == 1),
        _ => None,
    }
}

/// Checks that a recovery id and signature scalars form a usable signature:
/// `r` and `s` non-zero and below the curve order, recovery id `0` or `1`.
pub fn valid_signature_values(recovery_id: u8, r: &U256, s: &U256) -> bool {
    if r.is_zero() || s.is_zero() {
        return false;
    }
    recovery_id <= 1 && *r < SECP256K1_N && *s < SECP256K1_N
}

/// Validates a raw `(v, r, s)` triple for plausibility.
///
/// `maybe_protected` is set for variants whose `v` may carry an EIP-155
/// chain id (the legacy wire shape); every other signed variant must use a
/// plain `{0, 1}` recovery id. This rejects out-of-range values up front so
/// recovery never runs on garbage.
pub fn sanity_check_signature(v: &U256, r: &U256, s: &U256, maybe_protected: bool) -> bool {
    // v values beyond 64 bits cannot encode a chain id the client accepts.
    if v.bit_len() > 64 {
        return false;
    }
    let v = v.to::<u64>();

    let protected = !matches!(v, 0 | 1 | 27 | 28);
    if protected && !maybe_protected {
        return false;
    }

    let recovery_id = if protected {
        // Protected values start at 35; anything below cannot be unpacked.
        if v < 35 {
            return false;
        }
        let chain_id = (v - 35) / 2;
        (v - 35 - 2 * chain_id) as u8
    } else if maybe_protected {
        // Unprotected legacy signatures must be a raw 27 or 28.
        match v {
            27 | 28 => (v - 27) as u8,
            _ => return false,
        }
    } else {
        v as u8
    };

    valid_signature_values(recovery_id, r, s)
}
