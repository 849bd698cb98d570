// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA512: same shape as the SHA-256 module over the 512-bit
//! parameters (128-byte blocks, 64-bit chaining words).

use core::slice;

use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha512, compress512};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::pad::{IPAD, OPAD};

/// SHA-512 block length in bytes.
pub const SHA512_BLOCK_LEN: usize = 128;

/// SHA-512 digest length in bytes.
pub const SHA512_DIGEST_LEN: usize = 64;

/// Initial hash value H(0) per RFC 6234 Section 6.3.
const SHA512_H0: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

const IPAD_WORD: u64 = 0x3636_3636_3636_3636;
const OPAD_WORD: u64 = 0x5c5c_5c5c_5c5c_5c5c;

/// Streaming HMAC-SHA512 context.
///
/// See [`HmacSha256`](crate::HmacSha256) for the state contract; the outer
/// pad is zeroized on drop and finalization consumes the context.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacSha512 {
    #[zeroize(skip)]
    ctx: Sha512,
    k_opad: [u8; SHA512_BLOCK_LEN],
}

impl HmacSha512 {
    /// Create a context keyed with `key`, reducing over-long keys to their
    /// SHA-512 digest.
    pub fn new(key: &[u8]) -> Self {
        let mut i_key_pad = Zeroizing::new([0u8; SHA512_BLOCK_LEN]);
        if key.len() > SHA512_BLOCK_LEN {
            i_key_pad[..SHA512_DIGEST_LEN].copy_from_slice(Sha512::digest(key).as_slice());
        } else {
            i_key_pad[..key.len()].copy_from_slice(key);
        }

        let mut k_opad = [0u8; SHA512_BLOCK_LEN];
        for i in 0..SHA512_BLOCK_LEN {
            k_opad[i] = i_key_pad[i] ^ OPAD;
            i_key_pad[i] ^= IPAD;
        }

        let mut ctx = Sha512::new();
        ctx.update(&i_key_pad[..]);
        Self { ctx, k_opad }
    }

    /// Feed message bytes, any count, any chunk sizes.
    pub fn update(&mut self, msg: &[u8]) {
        self.ctx.update(msg);
    }

    /// Finalize and return the MAC, consuming the context.
    pub fn finalize(mut self) -> [u8; SHA512_DIGEST_LEN] {
        let mut inner_hash = [0u8; SHA512_DIGEST_LEN];
        inner_hash.copy_from_slice(self.ctx.finalize_reset().as_slice());

        self.ctx.update(&self.k_opad);
        self.ctx.update(&inner_hash);
        inner_hash.zeroize();

        let mut mac = [0u8; SHA512_DIGEST_LEN];
        mac.copy_from_slice(self.ctx.finalize_reset().as_slice());
        mac
    }

    /// Stored outer pad, for erasure assertions only
    #[cfg(test)]
    pub(crate) fn k_opad(&self) -> &[u8; SHA512_BLOCK_LEN] {
        &self.k_opad
    }
}

/// One-shot HMAC-SHA512 over a whole message.
pub fn hmac_sha512(key: &[u8], msg: &[u8]) -> [u8; SHA512_DIGEST_LEN] {
    let mut hctx = HmacSha512::new(key);
    hctx.update(msg);
    hctx.finalize()
}

/// Recompute the MAC for `msg` and compare against `mac` in constant time.
pub fn verify_hmac_sha512(key: &[u8], msg: &[u8], mac: &[u8; SHA512_DIGEST_LEN]) -> bool {
    let mut expected = hmac_sha512(key, msg);
    let ok = bool::from(expected[..].ct_eq(&mac[..]));
    expected.zeroize();
    ok
}

/// Compute the inner/outer pad midstates for repeated-key use.
///
/// `(opad_midstate, ipad_midstate)` are the SHA-512 chaining values after
/// one [`compress512`] transform of the padded-key block from H(0); see
/// [`hmac_sha256_prepare`](crate::hmac_sha256_prepare) for the intended
/// caller loop.
pub fn hmac_sha512_prepare(key: &[u8]) -> ([u64; 8], [u64; 8]) {
    let mut key_pad = Zeroizing::new([0u8; SHA512_BLOCK_LEN]);
    if key.len() > SHA512_BLOCK_LEN {
        key_pad[..SHA512_DIGEST_LEN].copy_from_slice(Sha512::digest(key).as_slice());
    } else {
        key_pad[..key.len()].copy_from_slice(key);
    }

    // Canonical big-endian word view, uniform across hosts.
    let mut words = Zeroizing::new([0u64; SHA512_BLOCK_LEN / 8]);
    for (w, b) in words.iter_mut().zip(key_pad.chunks_exact(8)) {
        *w = u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
    }
    key_pad.zeroize();

    let mut block = Zeroizing::new([0u8; SHA512_BLOCK_LEN]);

    for w in words.iter_mut() {
        *w ^= OPAD_WORD;
    }
    store_block(&words, &mut block);
    let mut opad_midstate = SHA512_H0;
    compress512(
        &mut opad_midstate,
        slice::from_ref(GenericArray::from_slice(&block[..])),
    );

    for w in words.iter_mut() {
        *w ^= OPAD_WORD ^ IPAD_WORD;
    }
    store_block(&words, &mut block);
    let mut ipad_midstate = SHA512_H0;
    compress512(
        &mut ipad_midstate,
        slice::from_ref(GenericArray::from_slice(&block[..])),
    );

    (opad_midstate, ipad_midstate)
}

fn store_block(words: &[u64; SHA512_BLOCK_LEN / 8], block: &mut [u8; SHA512_BLOCK_LEN]) {
    for (bytes, w) in block.chunks_exact_mut(8).zip(words.iter()) {
        bytes.copy_from_slice(&w.to_be_bytes());
    }
}
