//! Scoped theme lookup
//!
//! Components ask the context for the innermost provided theme. Scopes nest
//! like the view tree: a subtree can override the theme and the outer theme
//! comes back when the scope ends.

use std::sync::Arc;

use crate::theme::Theme;

/// Explicit stack of provided themes over a fallback
#[derive(Clone, Debug)]
pub struct ThemeContext {
    fallback: Arc<Theme>,
    stack: Vec<Arc<Theme>>,
}

impl ThemeContext {
    /// Context whose fallback is the default light theme
    pub fn new() -> Self {
        Self::with_fallback(Theme::light())
    }

    pub fn with_fallback(fallback: Arc<Theme>) -> Self {
        Self {
            fallback,
            stack: Vec::new(),
        }
    }

    /// Innermost provided theme, or the fallback when nothing is provided
    pub fn current(&self) -> Arc<Theme> {
        Arc::clone(self.stack.last().unwrap_or(&self.fallback))
    }

    /// Number of provided themes
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn provide(&mut self, theme: Arc<Theme>) {
        self.stack.push(theme);
    }

    /// Remove the innermost provided theme
    pub fn pop(&mut self) -> Option<Arc<Theme>> {
        let popped = self.stack.pop();
        if popped.is_none() {
            tracing::warn!("theme context popped with no provided theme");
        }
        popped
    }

    /// Run `f` with `theme` provided, then restore the previous stack
    pub fn scope<R>(&mut self, theme: Arc<Theme>, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.stack.len();
        self.provide(theme);
        let result = f(self);
        self.stack.truncate(depth);
        result
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}
