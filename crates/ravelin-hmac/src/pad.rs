// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Inner/outer key pad derivation per RFC 2104 Section 2

/// Byte repeated through the inner pad.
pub(crate) const IPAD: u8 = 0x36;

/// Byte repeated through the outer pad.
pub(crate) const OPAD: u8 = 0x5c;

/// Derive inner and outer pads from an already block-reduced key.
///
/// `key` must not exceed the pad length; the caller hashes longer keys down
/// to digest length first. Bytes past the key are the bare pad constants
/// (XOR with an implicit zero byte). Erasing `key` afterwards is the
/// caller's responsibility.
pub(crate) fn build_pads(key: &[u8], inner: &mut [u8], outer: &mut [u8]) {
    debug_assert!(key.len() <= inner.len());
    debug_assert_eq!(inner.len(), outer.len());

    inner.fill(IPAD);
    outer.fill(OPAD);
    for (i, k) in key.iter().enumerate() {
        inner[i] ^= k;
        outer[i] ^= k;
    }
}
