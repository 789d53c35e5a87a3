use crate::alert::{AnimationSpec, Color, Drawable, TextAppearance};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

/// Loads strings, colours and other assets by id. Lookups that fail return `None`;
/// the controller treats that as "leave the setting alone".
pub trait ResourceResolver {
    fn string(&self, id: ResourceId) -> Option<String>;

    fn color(&self, id: ResourceId) -> Option<Color>;

    fn drawable(&self, id: ResourceId) -> Option<Drawable>;

    fn text_appearance(&self, id: ResourceId) -> Option<TextAppearance>;

    fn animation(&self, id: ResourceId) -> Option<AnimationSpec>;
}

/// In-memory resolver backed by hash maps.
#[derive(Debug, Default)]
pub struct ResourceTable {
    strings: HashMap<ResourceId, String>,
    colors: HashMap<ResourceId, Color>,
    drawables: HashMap<ResourceId, Drawable>,
    text_appearances: HashMap<ResourceId, TextAppearance>,
    animations: HashMap<ResourceId, AnimationSpec>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_string(mut self, id: ResourceId, value: impl Into<String>) -> Self {
        self.strings.insert(id, value.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, id: ResourceId, color: Color) -> Self {
        self.colors.insert(id, color);
        self
    }

    #[must_use]
    pub fn with_drawable(mut self, id: ResourceId, drawable: Drawable) -> Self {
        self.drawables.insert(id, drawable);
        self
    }

    #[must_use]
    pub fn with_text_appearance(mut self, id: ResourceId, appearance: TextAppearance) -> Self {
        self.text_appearances.insert(id, appearance);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, id: ResourceId, animation: AnimationSpec) -> Self {
        self.animations.insert(id, animation);
        self
    }
}

impl ResourceResolver for ResourceTable {
    fn string(&self, id: ResourceId) -> Option<String> {
        self.strings.get(&id).cloned()
    }

    fn color(&self, id: ResourceId) -> Option<Color> {
        self.colors.get(&id).copied()
    }

    fn drawable(&self, id: ResourceId) -> Option<Drawable> {
        self.drawables.get(&id).cloned()
    }

    fn text_appearance(&self, id: ResourceId) -> Option<TextAppearance> {
        self.text_appearances.get(&id).cloned()
    }

    fn animation(&self, id: ResourceId) -> Option<AnimationSpec> {
        self.animations.get(&id).copied()
    }
}
