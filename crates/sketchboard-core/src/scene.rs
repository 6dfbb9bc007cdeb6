//! The ordered, id-indexed collection of shapes on the canvas.

use crate::shapes::{Shape, ShapeId};
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;
use thiserror::Error;

/// Scene errors.
///
/// Both variants mean the caller sequenced its edits wrongly; they are never
/// caused by user input alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("shape id {id} out of range for scene of {len} shapes")]
    IndexOutOfRange { id: ShapeId, len: usize },
    #[error("shape id mismatch: expected {expected}, found {found}")]
    IdMismatch { expected: ShapeId, found: ShapeId },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Ordered shapes, where each shape's id is its position.
///
/// Shapes are reference counted so cloning a scene for a history snapshot
/// shares every unchanged shape with the live scene.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Shape>")]
pub struct Scene {
    shapes: Vec<Arc<Shape>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The id the next appended shape must carry.
    pub fn next_id(&self) -> ShapeId {
        self.shapes.len()
    }

    /// Get a shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id).map(Arc::as_ref)
    }

    /// Shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().map(Arc::as_ref)
    }

    /// Add a shape at the end. Its id must equal the current length.
    pub fn append(&mut self, shape: Shape) -> SceneResult<()> {
        let expected = self.next_id();
        if shape.id() != expected {
            return Err(SceneError::IdMismatch {
                expected,
                found: shape.id(),
            });
        }
        self.shapes.push(Arc::new(shape));
        Ok(())
    }

    /// Substitute the whole shape at `id`, returning the previous one.
    ///
    /// Other entries keep their position, so their ids stay valid.
    pub fn replace(&mut self, id: ShapeId, shape: Shape) -> SceneResult<Arc<Shape>> {
        let len = self.shapes.len();
        let slot = self
            .shapes
            .get_mut(id)
            .ok_or(SceneError::IndexOutOfRange { id, len })?;
        if shape.id() != id {
            return Err(SceneError::IdMismatch {
                expected: id,
                found: shape.id(),
            });
        }
        Ok(std::mem::replace(slot, Arc::new(shape)))
    }

    /// Find the first shape, in insertion order, that contains the point.
    ///
    /// Older shapes win when shapes overlap.
    pub fn find_at(&self, x: f64, y: f64) -> Option<&Shape> {
        self.iter().find(|shape| shape.contains_point(x, y))
    }

    /// Serialize the scene to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Scene {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl TryFrom<Vec<Shape>> for Scene {
    type Error = SceneError;

    fn try_from(shapes: Vec<Shape>) -> SceneResult<Self> {
        let mut scene = Scene::new();
        for shape in shapes {
            scene.append(shape)?;
        }
        Ok(scene)
    }
}
