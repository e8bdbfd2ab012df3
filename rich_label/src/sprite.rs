// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

/// Looks up the sprite drawn for an inline image.
pub trait SpriteSource {
    /// The loaded sprite, whatever the host renders images with.
    type Sprite;

    /// Load the sprite called `name`, or `None` if there is no such sprite.
    fn load(&mut self, name: &str) -> Option<Self::Sprite>;
}

impl<F, T> SpriteSource for F
where
    F: FnMut(&str) -> Option<T>,
{
    type Sprite = T;

    fn load(&mut self, name: &str) -> Option<T> {
        self(name)
    }
}

/// Finds sprites as `<root>/<name>.png` files.
///
/// The sprite is the path of the file; names without a file are missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDirectory {
    root: PathBuf,
}

impl ResourceDirectory {
    /// Look up sprites in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory sprites are looked up in.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// The path a sprite called `name` would have.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.png"))
    }
}

impl Default for ResourceDirectory {
    /// Sprites in `resources/` relative to the working directory.
    fn default() -> Self {
        Self::new("resources")
    }
}

impl SpriteSource for ResourceDirectory {
    type Sprite = PathBuf;

    fn load(&mut self, name: &str) -> Option<PathBuf> {
        let path = self.path_of(name);
        path.is_file().then_some(path)
    }
}
