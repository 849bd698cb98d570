// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot HMAC over the SHA-3 families (FIPS 202).
//!
//! This path differs structurally from the SHA-2 modules: pads are built to
//! a shared maximum block length by the generic pad builder, and the inner
//! hash runs over a heap-allocated `inner pad ‖ message` scratch buffer.
//! Allocation failure is the only error; it returns
//! [`HmacError::ScratchAlloc`] with nothing written and nothing leaked.
//! Argument order is message before key, matching the historical call shape
//! of this variant.

use alloc::vec::Vec;

use sha3::digest::Digest;
use sha3::{Sha3_256, Sha3_512};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::error::HmacError;
use crate::pad::build_pads;

/// SHA3-256 block (rate) length in bytes.
pub const SHA3_256_BLOCK_LEN: usize = 136;

/// SHA3-256 digest length in bytes.
pub const SHA3_256_DIGEST_LEN: usize = 32;

/// SHA3-512 block (rate) length in bytes.
pub const SHA3_512_BLOCK_LEN: usize = 72;

/// SHA3-512 digest length in bytes.
pub const SHA3_512_DIGEST_LEN: usize = 64;

/// Largest block length among the supported SHA-3 variants; shared pad
/// buffers are sized to this, with unused filler past the family's block.
pub const MAX_BLOCK_LEN: usize = SHA3_256_BLOCK_LEN;

const MAX_DIGEST_LEN: usize = SHA3_512_DIGEST_LEN;

/// One-shot HMAC-SHA3-256.
///
/// Keys longer than the 136-byte rate are reduced to their SHA3-256 digest
/// first.
pub fn hmac_sha3_256(msg: &[u8], key: &[u8]) -> Result<[u8; SHA3_256_DIGEST_LEN], HmacError> {
    hmac_sha3::<Sha3_256, SHA3_256_BLOCK_LEN, SHA3_256_DIGEST_LEN>(msg, key)
}

/// One-shot HMAC-SHA3-512.
///
/// Keys longer than the 72-byte rate are reduced to their SHA3-512 digest
/// first.
pub fn hmac_sha3_512(msg: &[u8], key: &[u8]) -> Result<[u8; SHA3_512_DIGEST_LEN], HmacError> {
    hmac_sha3::<Sha3_512, SHA3_512_BLOCK_LEN, SHA3_512_DIGEST_LEN>(msg, key)
}

/// Recompute the MAC for `msg` and compare against `mac` in constant time.
pub fn verify_hmac_sha3_256(
    msg: &[u8],
    key: &[u8],
    mac: &[u8; SHA3_256_DIGEST_LEN],
) -> Result<bool, HmacError> {
    let mut expected = hmac_sha3_256(msg, key)?;
    let ok = bool::from(expected[..].ct_eq(&mac[..]));
    expected.zeroize();
    Ok(ok)
}

/// Recompute the MAC for `msg` and compare against `mac` in constant time.
pub fn verify_hmac_sha3_512(
    msg: &[u8],
    key: &[u8],
    mac: &[u8; SHA3_512_DIGEST_LEN],
) -> Result<bool, HmacError> {
    let mut expected = hmac_sha3_512(msg, key)?;
    let ok = bool::from(expected[..].ct_eq(&mac[..]));
    expected.zeroize();
    Ok(ok)
}

/// Shared core over the digest type and its block/digest lengths.
fn hmac_sha3<D: Digest, const BLOCK_LEN: usize, const DIGEST_LEN: usize>(
    msg: &[u8],
    key: &[u8],
) -> Result<[u8; DIGEST_LEN], HmacError> {
    // Allocate up front so the failure path touches no key material.
    let mut padded_msg = scratch_buffer(msg.len() + MAX_BLOCK_LEN + 1)?;

    let mut final_key = Zeroizing::new([0u8; MAX_BLOCK_LEN]);
    let final_len = if key.len() > BLOCK_LEN {
        final_key[..DIGEST_LEN].copy_from_slice(D::digest(key).as_slice());
        DIGEST_LEN
    } else {
        final_key[..key.len()].copy_from_slice(key);
        key.len()
    };

    let mut inner_pad = Zeroizing::new([0u8; MAX_BLOCK_LEN]);
    let mut outer_pad = Zeroizing::new([0u8; MAX_BLOCK_LEN]);
    build_pads(&final_key[..final_len], &mut inner_pad[..], &mut outer_pad[..]);
    final_key.zeroize();

    // Inner hash over inner_pad ‖ message
    padded_msg[..BLOCK_LEN].copy_from_slice(&inner_pad[..BLOCK_LEN]);
    padded_msg[BLOCK_LEN..BLOCK_LEN + msg.len()].copy_from_slice(msg);
    let mut inner_hash = D::digest(&padded_msg[..BLOCK_LEN + msg.len()]);

    // Outer hash over outer_pad ‖ inner hash
    let mut padded_hash = Zeroizing::new([0u8; MAX_BLOCK_LEN + MAX_DIGEST_LEN + 1]);
    padded_hash[..BLOCK_LEN].copy_from_slice(&outer_pad[..BLOCK_LEN]);
    padded_hash[BLOCK_LEN..BLOCK_LEN + DIGEST_LEN].copy_from_slice(inner_hash.as_slice());
    inner_hash.as_mut_slice().zeroize();

    let mut mac = [0u8; DIGEST_LEN];
    mac.copy_from_slice(D::digest(&padded_hash[..BLOCK_LEN + DIGEST_LEN]).as_slice());
    Ok(mac)
}

/// Zeroed heap scratch with a fallible allocation; zeroized and released
/// exactly once when dropped.
fn scratch_buffer(len: usize) -> Result<Zeroizing<Vec<u8>>, HmacError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| HmacError::ScratchAlloc)?;
    buf.resize(len, 0);
    Ok(Zeroizing::new(buf))
}
