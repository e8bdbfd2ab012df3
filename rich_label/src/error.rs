// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

/// A problem with the sprite of an inline image.
///
/// The affected image slot stays enabled but draws nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteError {
    /// The category of the problem.
    kind: SpriteErrorKind,

    /// The pool slot the sprite was meant for.
    slot: usize,

    /// The sprite name from the markup.
    name: String,
}

impl SpriteError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> SpriteErrorKind {
        self.kind
    }

    /// Index of the image slot, which is also the index of the placeholder.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The sprite name that was looked up.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn missing(slot: usize, name: &str) -> Self {
        let error = Self {
            kind: SpriteErrorKind::MissingSprite,
            slot,
            name: name.to_owned(),
        };
        log::warn!("{error}");
        error
    }
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SpriteErrorKind::MissingSprite => {
                write!(f, "no sprite named {:?} for image {}", self.name, self.slot)
            }
        }
    }
}

impl std::error::Error for SpriteError {}

/// The non-exhaustive category of a [`SpriteError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpriteErrorKind {
    /// The sprite source has nothing under the requested name.
    MissingSprite,
}
