// src/context.rs
// Everything a stage reads besides the text itself. Built once, never mutated.

use crate::patterns::Patterns;
use std::sync::Arc;

/// Runtime context passed to every normalization stage.
///
/// Holds the compiled [`Patterns`]; cloning only bumps a reference count.
#[derive(Clone)]
pub struct Context {
    patterns: Arc<Patterns>,
}

impl Default for Context {
    #[inline]
    fn default() -> Self {
        Self::new(Patterns::global())
    }
}

impl Context {
    #[inline]
    pub fn new(patterns: Arc<Patterns>) -> Self {
        Self { patterns }
    }

    #[inline(always)]
    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }
}
