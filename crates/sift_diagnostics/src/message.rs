//! Message parts and the evidence values bound into them.

use crate::severity::PartSeverity;
use crate::statement_kind::StatementKind;
use sift_source::{Identifier, Span};

/// One evidence value bound into a message part.
///
/// Spans and identifiers render as the exact source substring they cover;
/// statement kinds render through a formatting directive; characters render
/// as a one-character string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DiagArg {
    /// A byte range in source text.
    Span(Span),
    /// A span covering a name token.
    Identifier(Identifier),
    /// A statement classifier.
    StatementKind(StatementKind),
    /// A single character.
    Char(char),
}

impl DiagArg {
    /// Returns the source location this arg carries, if it carries one.
    pub fn span(&self) -> Option<Span> {
        match self {
            DiagArg::Span(span) => Some(*span),
            DiagArg::Identifier(ident) => Some(ident.span()),
            DiagArg::StatementKind(_) | DiagArg::Char(_) => None,
        }
    }
}

impl From<Span> for DiagArg {
    fn from(span: Span) -> Self {
        DiagArg::Span(span)
    }
}

impl From<Identifier> for DiagArg {
    fn from(ident: Identifier) -> Self {
        DiagArg::Identifier(ident)
    }
}

impl From<StatementKind> for DiagArg {
    fn from(kind: StatementKind) -> Self {
        DiagArg::StatementKind(kind)
    }
}

impl From<char> for DiagArg {
    fn from(c: char) -> Self {
        DiagArg::Char(c)
    }
}

/// One renderable message of a diagnostic: a severity, a template string,
/// and the evidence values bound to the template's placeholders.
///
/// The template is the literal English text; translation happens at render
/// time by looking the literal up in a [`Locale`](crate::Locale). Placeholder
/// `{i}` substitutes the text form of `args[i]`.
#[derive(Clone, PartialEq, Debug)]
pub struct MessagePart {
    /// The severity of this part.
    pub severity: PartSeverity,
    /// The literal template text, with `{0}`-style placeholders.
    pub template: &'static str,
    /// The bound evidence values, in placeholder order.
    pub args: Vec<DiagArg>,
}

impl MessagePart {
    /// Creates a message part from a severity, template, and bound args.
    pub fn new(severity: PartSeverity, template: &'static str, args: Vec<DiagArg>) -> Self {
        Self {
            severity,
            template,
            args,
        }
    }

    /// Returns the source location this part points at.
    ///
    /// # Panics
    ///
    /// Panics if the part's first bound arg carries no location. Catalog
    /// definitions always lead with a span or identifier.
    pub fn span(&self) -> Span {
        self.args
            .first()
            .and_then(DiagArg::span)
            .expect("message part must lead with a location arg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_source::FileId;

    #[test]
    fn arg_span_for_span_and_identifier() {
        let span = Span::new(FileId::from_raw(0), 2, 6);
        assert_eq!(DiagArg::Span(span).span(), Some(span));
        assert_eq!(DiagArg::Identifier(Identifier::new(span)).span(), Some(span));
    }

    #[test]
    fn arg_span_absent_for_non_locations() {
        assert_eq!(DiagArg::Char('(').span(), None);
        assert_eq!(DiagArg::StatementKind(StatementKind::IfStatement).span(), None);
    }

    #[test]
    fn part_span_is_first_arg() {
        let span = Span::new(FileId::from_raw(0), 1, 3);
        let part = MessagePart::new(
            PartSeverity::Error,
            "unexpected '{0}'",
            vec![DiagArg::Span(span), DiagArg::Char(')')],
        );
        assert_eq!(part.span(), span);
    }

    #[test]
    #[should_panic(expected = "location arg")]
    fn part_span_panics_without_location() {
        let part = MessagePart::new(PartSeverity::Error, "oops", vec![DiagArg::Char('x')]);
        let _ = part.span();
    }
}
