use crate::core::{DrawingContext, RenderingSurface, Scene};
use crate::error::Result;

/// Draws child scenes in insertion order; the first child owns the mapping.
pub struct Layered {
    name: String,
    scenes: Vec<Box<dyn Scene>>,
}

impl Layered {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scenes: Vec::new(),
        }
    }

    /// Add a scene on top of the existing ones
    pub fn with_scene(mut self, scene: Box<dyn Scene>) -> Self {
        self.scenes.push(scene);
        self
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Scene for Layered {
    fn configure(&mut self, surface: &mut RenderingSurface) -> Result<()> {
        match self.scenes.first_mut() {
            Some(scene) => scene.configure(surface),
            None => Ok(()),
        }
    }

    fn draw(&self, surface: &RenderingSurface, ctx: &mut dyn DrawingContext) -> Result<()> {
        self.scenes.iter().try_for_each(|scene| scene.draw(surface, ctx))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
