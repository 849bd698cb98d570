// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// HMAC error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacError {
    /// The SHA-3 one-shot path could not allocate its scratch buffer.
    /// No output has been written and nothing has leaked.
    #[error("scratch buffer allocation failed")]
    ScratchAlloc,
}
