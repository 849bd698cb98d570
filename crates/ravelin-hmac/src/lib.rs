// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC message authentication with secure memory handling
//!
//! Implementation per RFC 2104 (HMAC) over four hash families: SHA-256 and
//! SHA-512 (RFC 6234), and SHA3-256 and SHA3-512 (FIPS 202). The hash
//! primitives themselves come from the `sha2`/`sha3` crates; this crate owns
//! the HMAC pad protocol, the streaming contexts, and the erasure of every
//! buffer that has held key material.
//!
//! Three call shapes are provided:
//!
//! - one-shot: [`hmac_sha256`], [`hmac_sha512`], [`hmac_sha3_256`],
//!   [`hmac_sha3_512`];
//! - streaming: [`HmacSha256`] / [`HmacSha512`] for messages fed in chunks.
//!   Finalization consumes the context, so a finalized context can neither
//!   be updated nor finalized again;
//! - prepared pads: [`hmac_sha256_prepare`] / [`hmac_sha512_prepare`] return
//!   the inner/outer chaining-value midstates for callers that run their own
//!   compression loop over many messages under one key.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//! - FIPS 202: SHA-3 Standard
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod pad;
mod sha256;
mod sha3;
mod sha512;

pub use error::HmacError;
pub use sha3::{
    MAX_BLOCK_LEN, SHA3_256_BLOCK_LEN, SHA3_256_DIGEST_LEN, SHA3_512_BLOCK_LEN,
    SHA3_512_DIGEST_LEN, hmac_sha3_256, hmac_sha3_512, verify_hmac_sha3_256, verify_hmac_sha3_512,
};
pub use sha256::{
    HmacSha256, SHA256_BLOCK_LEN, SHA256_DIGEST_LEN, hmac_sha256, hmac_sha256_prepare,
    verify_hmac_sha256,
};
pub use sha512::{
    HmacSha512, SHA512_BLOCK_LEN, SHA512_DIGEST_LEN, hmac_sha512, hmac_sha512_prepare,
    verify_hmac_sha512,
};
