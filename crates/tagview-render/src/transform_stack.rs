//! Model transform stack.

use glam::{DMat4, DVec3};

/// A fixed-function style matrix stack.
///
/// Operations post-multiply the current matrix, so the last transform applied
/// is the first one a vertex sees.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStack {
    current: DMat4,
    saved: Vec<DMat4>,
}

impl TransformStack {
    /// Creates a stack holding the identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: DMat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// The current model matrix.
    #[must_use]
    pub fn current(&self) -> DMat4 {
        self.current
    }

    /// Number of saved matrices.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Saves the current matrix.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the last saved matrix. An unmatched pop keeps the current
    /// matrix.
    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(matrix) => self.current = matrix,
            None => log::warn!("transform stack underflow"),
        }
    }

    /// Post-multiplies by a translation.
    pub fn translate(&mut self, offset: DVec3) {
        self.current *= DMat4::from_translation(offset);
    }

    /// Post-multiplies by `matrix`.
    pub fn multiply(&mut self, matrix: DMat4) {
        self.current *= matrix;
    }

    /// Back to a single identity matrix.
    pub fn reset(&mut self) {
        self.current = DMat4::IDENTITY;
        self.saved.clear();
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
