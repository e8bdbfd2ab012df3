// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use label_draw::{hit_test, DecorationEngine, GeometryError, TextMesh};
use markup_text::{MarkupResolver, ResolvedText};
use peniko::kurbo::Point;

use crate::{
    HrefClickEvent, ImagePool, LabelConfig, ResourceDirectory, SpriteError, SpriteSource,
};

/// A label showing resolved markup.
///
/// The host shapes [`text`](Self::text) with the styles from
/// [`resolved`](Self::resolved), hands the glyph quads to
/// [`populate_mesh`](Self::populate_mesh) and forwards clicks to
/// [`click`](Self::click).
pub struct RichLabel<S: SpriteSource> {
    config: LabelConfig,
    markup: String,
    resolver: MarkupResolver,
    engine: DecorationEngine,
    resolved: ResolvedText,
    sprites: S,
    images: ImagePool<S::Sprite>,
    sprite_errors: Vec<SpriteError>,
    geometry_errors: Vec<GeometryError>,
    on_href_click: HrefClickEvent,
}

impl<S: SpriteSource> RichLabel<S> {
    /// Create an empty label that loads sprites from `sprites`.
    pub fn new(config: LabelConfig, sprites: S) -> Self {
        Self {
            config,
            markup: String::new(),
            resolver: MarkupResolver::new(config.resolve),
            engine: DecorationEngine::new(config.decoration),
            resolved: ResolvedText::default(),
            sprites,
            images: ImagePool::new(),
            sprite_errors: Vec::new(),
            geometry_errors: Vec::new(),
            on_href_click: HrefClickEvent::new(),
        }
    }

    /// The sprite source of this label.
    pub fn sprites(&self) -> &S {
        &self.sprites
    }

    /// The current configuration.
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Set the texture coordinate of decoration bars.
    ///
    /// Call this whenever the font atlas changes; it takes effect on the next
    /// [`populate_mesh`](Self::populate_mesh).
    pub fn set_decoration_uv(&mut self, uv: Point) {
        self.config.decoration.uv = uv;
        self.engine.set_uv(uv);
    }

    /// Replace the markup of the label.
    ///
    /// The markup is resolved right away and the image pool is synchronized
    /// with the new placeholders. Hit boxes and image anchors are stale until
    /// the next [`populate_mesh`](Self::populate_mesh).
    pub fn set_text(&mut self, markup: &str) {
        self.markup.clear();
        self.markup.push_str(markup);
        self.resolver.resolve_into(markup, &mut self.resolved);
        log::debug!(
            "resolved {} chars with {} hyperlinks, {} underlines, {} strikethroughs and {} images",
            self.resolved.char_len(),
            self.resolved.hyperlinks.len(),
            self.resolved.underlines.len(),
            self.resolved.strikethroughs.len(),
            self.resolved.images.len(),
        );
        self.sprite_errors = self.images.sync(&self.resolved.images, &mut self.sprites);
        self.geometry_errors.clear();
    }

    /// The markup last passed to [`set_text`](Self::set_text).
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// The plain text to shape.
    pub fn text(&self) -> &str {
        &self.resolved.text
    }

    /// The plain text and its annotations.
    pub fn resolved(&self) -> &ResolvedText {
        &self.resolved
    }

    /// Decorate the shaped `mesh` of [`text`](Self::text).
    ///
    /// Placeholder glyphs are collapsed and their anchors stored in the image
    /// pool, hyperlink hit boxes are rebuilt and decoration bars are appended.
    pub fn populate_mesh(&mut self, mesh: &mut TextMesh) {
        let output = self.engine.apply(mesh, &mut self.resolved);
        self.images.place(&output.image_anchors);
        self.geometry_errors = output.errors;
    }

    /// Handle a click at `point` in label-local space.
    ///
    /// Returns whether a hyperlink was hit, in which case every listener of
    /// [`on_href_click`](Self::on_href_click) has been called with its href.
    pub fn click(&mut self, point: Point) -> bool {
        match hit_test(point, &self.resolved.hyperlinks) {
            Some(link) => {
                log::debug!("clicked hyperlink {:?}", link.href);
                self.on_href_click.invoke(&link.href);
                true
            }
            None => false,
        }
    }

    /// The event raised when a hyperlink is clicked.
    pub fn on_href_click(&mut self) -> &mut HrefClickEvent {
        &mut self.on_href_click
    }

    /// The inline image slots.
    pub fn images(&self) -> &ImagePool<S::Sprite> {
        &self.images
    }

    /// Sprites that could not be loaded by the last [`set_text`](Self::set_text).
    pub fn sprite_errors(&self) -> &[SpriteError] {
        &self.sprite_errors
    }

    /// Annotations the last [`populate_mesh`](Self::populate_mesh) could not fully draw.
    pub fn geometry_errors(&self) -> &[GeometryError] {
        &self.geometry_errors
    }
}

impl RichLabel<ResourceDirectory> {
    /// Create an empty label that loads sprites from the default
    /// [`ResourceDirectory`].
    pub fn with_resources(config: LabelConfig) -> Self {
        Self::new(config, ResourceDirectory::default())
    }
}

impl Default for RichLabel<ResourceDirectory> {
    fn default() -> Self {
        Self::with_resources(LabelConfig::default())
    }
}

impl<S> core::fmt::Debug for RichLabel<S>
where
    S: SpriteSource,
    S::Sprite: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RichLabel")
            .field("markup", &self.markup)
            .field("resolved", &self.resolved)
            .field("images", &self.images)
            .field("on_href_click", &self.on_href_click)
            .finish_non_exhaustive()
    }
}
