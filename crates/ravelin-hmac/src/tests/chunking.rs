// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Chunking invariance: the streaming engines must produce the one-shot
//! MAC no matter how the message is split across update calls.

use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{HmacSha256, HmacSha512, hmac_sha256, hmac_sha512};

/// Split `msg` at the given positions (clamped and sorted) and feed the
/// pieces one update at a time.
fn feed_chunked_sha256(key: &[u8], msg: &[u8], splits: &[usize]) -> [u8; 32] {
    let mut cuts: Vec<usize> = splits.iter().map(|s| s % (msg.len() + 1)).collect();
    cuts.sort_unstable();

    let mut hctx = HmacSha256::new(key);
    let mut start = 0;
    for cut in cuts {
        hctx.update(&msg[start..cut.max(start)]);
        start = cut.max(start);
    }
    hctx.update(&msg[start..]);
    hctx.finalize()
}

fn feed_chunked_sha512(key: &[u8], msg: &[u8], splits: &[usize]) -> [u8; 64] {
    let mut cuts: Vec<usize> = splits.iter().map(|s| s % (msg.len() + 1)).collect();
    cuts.sort_unstable();

    let mut hctx = HmacSha512::new(key);
    let mut start = 0;
    for cut in cuts {
        hctx.update(&msg[start..cut.max(start)]);
        start = cut.max(start);
    }
    hctx.update(&msg[start..]);
    hctx.finalize()
}

proptest! {
    #[test]
    fn sha256_streaming_is_chunking_invariant(
        key in proptest::collection::vec(any::<u8>(), 0..=200),
        msg in proptest::collection::vec(any::<u8>(), 0..=500),
        splits in proptest::collection::vec(any::<usize>(), 0..8),
    ) {
        let expected = hmac_sha256(&key, &msg);
        prop_assert_eq!(feed_chunked_sha256(&key, &msg, &splits), expected);
    }

    #[test]
    fn sha512_streaming_is_chunking_invariant(
        key in proptest::collection::vec(any::<u8>(), 0..=200),
        msg in proptest::collection::vec(any::<u8>(), 0..=500),
        splits in proptest::collection::vec(any::<usize>(), 0..8),
    ) {
        let expected = hmac_sha512(&key, &msg);
        prop_assert_eq!(feed_chunked_sha512(&key, &msg, &splits), expected);
    }
}

/// Two interleaved contexts must not disturb each other; every call owns
/// its working storage (no shared scratch anywhere).
#[test]
fn interleaved_contexts_stay_independent() {
    let mut a = HmacSha256::new(b"key-a");
    let mut b = HmacSha256::new(b"key-b");

    a.update(b"The quick brown fox ");
    b.update(b"Hi ");
    a.update(b"jumps over the lazy dog");
    b.update(b"There");

    assert_eq!(
        a.finalize(),
        hmac_sha256(b"key-a", b"The quick brown fox jumps over the lazy dog")
    );
    assert_eq!(b.finalize(), hmac_sha256(b"key-b", b"Hi There"));
}
