// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rich_label` and the crates it builds on.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, which makes shared utilities easy to reach.
//! - Put new tests into the module of their topic (resolve, decorations, hyperlinks,
//!   images, label) and start the test name with that topic, e.g. `resolve_crossing_tags`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod decorations;
mod images;
mod util;
