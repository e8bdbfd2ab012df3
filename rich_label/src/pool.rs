// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use label_draw::ImageAnchor;
use markup_text::ImagePlaceholder;

use crate::{SpriteError, SpriteSource};

/// One inline image of a label.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSlot<T> {
    sprite_name: String,
    sprite: Option<T>,
    size: f32,
    enabled: bool,
    anchor: Option<ImageAnchor>,
}

impl<T> ImageSlot<T> {
    /// The sprite name the slot was last synchronized with.
    pub fn sprite_name(&self) -> &str {
        &self.sprite_name
    }

    /// The loaded sprite, `None` if the sprite is missing.
    pub fn sprite(&self) -> Option<&T> {
        self.sprite.as_ref()
    }

    /// Edge length of the image.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Whether the slot belongs to a placeholder of the current text.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Where to draw the image, once the label mesh has been populated.
    pub fn anchor(&self) -> Option<&ImageAnchor> {
        self.anchor.as_ref()
    }
}

/// The image slots of a label, one per placeholder.
///
/// The pool grows to the largest number of placeholders it has seen and never
/// shrinks; slots past the current count are disabled and keep their sprite
/// for later reuse.
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePool<T> {
    slots: Vec<ImageSlot<T>>,
    active: usize,
}

impl<T> Default for ImagePool<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            active: 0,
        }
    }
}

impl<T> ImagePool<T> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// All slots, including disabled ones.
    pub fn slots(&self) -> &[ImageSlot<T>] {
        &self.slots
    }

    /// The enabled slots, in placeholder order.
    pub fn active(&self) -> &[ImageSlot<T>] {
        &self.slots[..self.active]
    }

    /// Match the pool to `images`.
    ///
    /// A slot's sprite is loaded from `source` only when its name changed or no
    /// sprite is loaded. Anchors are cleared; they are set again by
    /// [`place`](Self::place).
    pub fn sync<S>(&mut self, images: &[ImagePlaceholder], source: &mut S) -> Vec<SpriteError>
    where
        S: SpriteSource<Sprite = T>,
    {
        let mut errors = Vec::new();
        for (index, image) in images.iter().enumerate() {
            if index == self.slots.len() {
                self.slots.push(ImageSlot {
                    sprite_name: image.sprite_name.clone(),
                    sprite: None,
                    size: image.size,
                    enabled: true,
                    anchor: None,
                });
            }
            let slot = &mut self.slots[index];
            if slot.sprite_name != image.sprite_name {
                slot.sprite_name.clone_from(&image.sprite_name);
                slot.sprite = None;
            }
            if slot.sprite.is_none() {
                slot.sprite = source.load(&slot.sprite_name);
                if slot.sprite.is_none() {
                    errors.push(SpriteError::missing(index, &slot.sprite_name));
                }
            }
            slot.size = image.size;
            slot.enabled = true;
            slot.anchor = None;
        }
        for slot in &mut self.slots[images.len()..] {
            slot.enabled = false;
            slot.anchor = None;
        }
        self.active = images.len();
        errors
    }

    /// Store the anchors of a geometry pass in their slots.
    pub fn place(&mut self, anchors: &[ImageAnchor]) {
        for slot in &mut self.slots {
            slot.anchor = None;
        }
        for anchor in anchors {
            if let Some(slot) = self.slots.get_mut(anchor.image) {
                slot.anchor = Some(*anchor);
            }
        }
    }
}
