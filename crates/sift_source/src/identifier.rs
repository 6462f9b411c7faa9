//! Spans known to cover a name token.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// A span known to cover an identifier (a name token) in source text.
///
/// Interchangeable with [`Span`] for rendering purposes; the distinction
/// exists so that diagnostic evidence records whether a location names
/// something or merely points somewhere.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Identifier(Span);

impl Identifier {
    /// Wraps a span that is known to cover a name token.
    pub fn new(span: Span) -> Self {
        Self(span)
    }

    /// Returns the underlying span.
    pub fn span(self) -> Span {
        self.0
    }
}

impl From<Span> for Identifier {
    fn from(span: Span) -> Self {
        Self(span)
    }
}

impl From<Identifier> for Span {
    fn from(ident: Identifier) -> Self {
        ident.0
    }
}
