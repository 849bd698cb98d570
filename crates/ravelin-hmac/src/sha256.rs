// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 per RFC 2104: streaming context, one-shot, and the
//! prepared-pad midstate path for repeated-key callers.

use core::slice;

use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256, compress256};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::pad::{IPAD, OPAD};

/// SHA-256 block length in bytes.
pub const SHA256_BLOCK_LEN: usize = 64;

/// SHA-256 digest length in bytes.
pub const SHA256_DIGEST_LEN: usize = 32;

/// Initial hash value H(0) per RFC 6234 Section 6.1.
const SHA256_H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Pad constants widened to block words.
const IPAD_WORD: u32 = 0x3636_3636;
const OPAD_WORD: u32 = 0x5c5c_5c5c;

/// Streaming HMAC-SHA256 context.
///
/// Holds the running inner hash and the derived outer pad; no raw key
/// material survives [`HmacSha256::new`]. [`finalize`](HmacSha256::finalize)
/// consumes the context, so updating or finalizing after finalization is
/// not expressible. The outer pad is zeroized when the context drops.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacSha256 {
    #[zeroize(skip)]
    ctx: Sha256,
    k_opad: [u8; SHA256_BLOCK_LEN],
}

impl HmacSha256 {
    /// Create a context keyed with `key`.
    ///
    /// Keys longer than the block length are reduced to their SHA-256
    /// digest first, per RFC 2104.
    pub fn new(key: &[u8]) -> Self {
        let mut i_key_pad = Zeroizing::new([0u8; SHA256_BLOCK_LEN]);
        if key.len() > SHA256_BLOCK_LEN {
            i_key_pad[..SHA256_DIGEST_LEN].copy_from_slice(Sha256::digest(key).as_slice());
        } else {
            i_key_pad[..key.len()].copy_from_slice(key);
        }

        let mut k_opad = [0u8; SHA256_BLOCK_LEN];
        for i in 0..SHA256_BLOCK_LEN {
            k_opad[i] = i_key_pad[i] ^ OPAD;
            i_key_pad[i] ^= IPAD;
        }

        let mut ctx = Sha256::new();
        ctx.update(&i_key_pad[..]);
        Self { ctx, k_opad }
    }

    /// Feed message bytes; may be called any number of times with any
    /// chunk sizes.
    pub fn update(&mut self, msg: &[u8]) {
        self.ctx.update(msg);
    }

    /// Finalize and return the MAC, consuming the context.
    pub fn finalize(mut self) -> [u8; SHA256_DIGEST_LEN] {
        let mut inner_hash = [0u8; SHA256_DIGEST_LEN];
        inner_hash.copy_from_slice(self.ctx.finalize_reset().as_slice());

        self.ctx.update(&self.k_opad);
        self.ctx.update(&inner_hash);
        inner_hash.zeroize();

        let mut mac = [0u8; SHA256_DIGEST_LEN];
        mac.copy_from_slice(self.ctx.finalize_reset().as_slice());
        mac
    }

    /// Stored outer pad, for erasure assertions only
    #[cfg(test)]
    pub(crate) fn k_opad(&self) -> &[u8; SHA256_BLOCK_LEN] {
        &self.k_opad
    }
}

/// One-shot HMAC-SHA256 over a whole message.
///
/// All working storage is owned by the call; concurrent invocations cannot
/// interfere with each other.
pub fn hmac_sha256(key: &[u8], msg: &[u8]) -> [u8; SHA256_DIGEST_LEN] {
    let mut hctx = HmacSha256::new(key);
    hctx.update(msg);
    hctx.finalize()
}

/// Recompute the MAC for `msg` and compare against `mac` in constant time.
pub fn verify_hmac_sha256(key: &[u8], msg: &[u8], mac: &[u8; SHA256_DIGEST_LEN]) -> bool {
    let mut expected = hmac_sha256(key, msg);
    let ok = bool::from(expected[..].ct_eq(&mac[..]));
    expected.zeroize();
    ok
}

/// Compute the inner/outer pad midstates for repeated-key use.
///
/// Returns `(opad_midstate, ipad_midstate)`: the SHA-256 chaining values
/// after compressing exactly one padded-key block from H(0). A caller that
/// authenticates many messages under one key can resume its own
/// [`compress256`] loop from `ipad_midstate`, then close the outer hash
/// from `opad_midstate`, skipping the key-pad block each time. The
/// midstates are chaining values, not digests; they must never be used as
/// HMAC output.
pub fn hmac_sha256_prepare(key: &[u8]) -> ([u32; 8], [u32; 8]) {
    let mut key_pad = Zeroizing::new([0u8; SHA256_BLOCK_LEN]);
    if key.len() > SHA256_BLOCK_LEN {
        key_pad[..SHA256_DIGEST_LEN].copy_from_slice(Sha256::digest(key).as_slice());
    } else {
        key_pad[..key.len()].copy_from_slice(key);
    }

    // Canonical big-endian word view of the pad: the order in which the
    // compression function consumes block words, on every host.
    let mut words = Zeroizing::new([0u32; SHA256_BLOCK_LEN / 4]);
    for (w, bytes) in words.iter_mut().zip(key_pad.chunks_exact(4)) {
        *w = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    key_pad.zeroize();

    let mut block = Zeroizing::new([0u8; SHA256_BLOCK_LEN]);

    // o_key_pad block and its midstate
    for w in words.iter_mut() {
        *w ^= OPAD_WORD;
    }
    store_block(&words, &mut block);
    let mut opad_midstate = SHA256_H0;
    compress256(
        &mut opad_midstate,
        slice::from_ref(GenericArray::from_slice(&block[..])),
    );

    // Flip to i_key_pad without re-reading the key
    for w in words.iter_mut() {
        *w ^= OPAD_WORD ^ IPAD_WORD;
    }
    store_block(&words, &mut block);
    let mut ipad_midstate = SHA256_H0;
    compress256(
        &mut ipad_midstate,
        slice::from_ref(GenericArray::from_slice(&block[..])),
    );

    (opad_midstate, ipad_midstate)
}

/// Serialize pad words back into a compression block, big-endian.
fn store_block(words: &[u32; SHA256_BLOCK_LEN / 4], block: &mut [u8; SHA256_BLOCK_LEN]) {
    for (bytes, w) in block.chunks_exact_mut(4).zip(words.iter()) {
        bytes.copy_from_slice(&w.to_be_bytes());
    }
}
