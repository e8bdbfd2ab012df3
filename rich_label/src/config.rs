// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use label_draw::DecorationOptions;
use markup_text::ResolveOptions;

/// Configuration of a [`RichLabel`](crate::RichLabel).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LabelConfig {
    /// How markup is turned into plain text and annotations.
    pub resolve: ResolveOptions,
    /// How decoration geometry is emitted.
    pub decoration: DecorationOptions,
}

impl LabelConfig {
    /// Set the options used when resolving markup.
    pub fn with_resolve_options(mut self, resolve: ResolveOptions) -> Self {
        self.resolve = resolve;
        self
    }

    /// Set the options used when emitting decoration geometry.
    pub fn with_decoration_options(mut self, decoration: DecorationOptions) -> Self {
        self.decoration = decoration;
        self
    }
}
