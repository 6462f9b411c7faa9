//! Template expansion: turning a diagnostic's message parts into text.
//!
//! Rendering is deterministic and never fails: an unresolved locale entry
//! falls back to the literal template, and span arguments render as the
//! exact source substring they cover. Placeholder validity is a
//! definition-time property of the catalog, checked by tests against
//! [`CATALOG`](crate::CATALOG).

use crate::catalog::Diag;
use crate::message::{DiagArg, MessagePart};
use crate::severity::PartSeverity;
use crate::translation::Locale;
use serde::{Deserialize, Serialize};
use sift_source::{SourceDb, Span};

/// A semantic formatting directive attached to a placeholder, e.g.
/// `{1:headlinese}`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Directive {
    /// A capitalized noun phrase, suitable at sentence start.
    Headlinese,
    /// A lowercase noun phrase with an article, suitable mid-sentence.
    Singular,
}

impl Directive {
    fn parse(name: &str) -> Option<Directive> {
        match name {
            "headlinese" => Some(Directive::Headlinese),
            "singular" => Some(Directive::Singular),
            _ => None,
        }
    }
}

/// One rendered message of a diagnostic: severity, source location, and the
/// final human-readable text.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RenderedPart {
    /// The severity of this part.
    pub severity: PartSeverity,
    /// The source location this part points at.
    pub span: Span,
    /// The expanded message text.
    pub text: String,
}

/// Renders every message part of a diagnostic, in declared order.
pub fn render_diag(diag: &Diag, sources: &SourceDb, locale: &Locale) -> Vec<RenderedPart> {
    diag.parts()
        .iter()
        .map(|part| render_part(part, sources, locale))
        .collect()
}

/// Renders a single message part.
///
/// The template is first resolved through the locale (falling back to the
/// literal text), then placeholders are substituted with the text form of
/// the bound args.
pub fn render_part(part: &MessagePart, sources: &SourceDb, locale: &Locale) -> RenderedPart {
    let template = locale.resolve(part.template);
    RenderedPart {
        severity: part.severity,
        span: part.span(),
        text: expand_template(template, &part.args, sources),
    }
}

/// Substitutes `{i}` placeholders in `template` with the text form of
/// `args[i]`. `{{` produces a literal `{`; a lone `}` is literal.
///
/// Malformed or out-of-range placeholders are kept verbatim; definition-time
/// checks keep the catalog free of them.
fn expand_template(template: &str, args: &[DiagArg], sources: &SourceDb) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        if let Some(stripped) = after.strip_prefix('{') {
            out.push('{');
            rest = stripped;
            continue;
        }
        match parse_placeholder(after) {
            Some((index, directive, consumed)) if index < args.len() => {
                push_arg_text(&mut out, &args[index], directive, sources);
                rest = &after[consumed..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parses one placeholder body starting just after a `{`.
///
/// Returns the arg index, the optional directive, and the number of bytes
/// consumed including the closing `}`.
fn parse_placeholder(s: &str) -> Option<(usize, Option<Directive>, usize)> {
    let close = s.find('}')?;
    let body = &s[..close];
    let (index_str, directive) = match body.split_once(':') {
        Some((index_str, directive_name)) => (index_str, Some(Directive::parse(directive_name)?)),
        None => (body, None),
    };
    if index_str.is_empty() || !index_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index_str.parse().ok()?;
    Some((index, directive, close + 1))
}

fn push_arg_text(out: &mut String, arg: &DiagArg, directive: Option<Directive>, sources: &SourceDb) {
    match arg {
        DiagArg::Span(span) => out.push_str(sources.snippet(*span)),
        DiagArg::Identifier(ident) => out.push_str(sources.snippet(ident.span())),
        DiagArg::StatementKind(kind) => out.push_str(match directive {
            Some(Directive::Headlinese) => kind.headlinese(),
            Some(Directive::Singular) | None => kind.singular(),
        }),
        DiagArg::Char(c) => out.push(*c),
    }
}

/// Lists the arg indices referenced by a template's placeholders.
///
/// Used by the definition-time catalog checks.
#[cfg(test)]
pub(crate) fn placeholder_indices(template: &str) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        if let Some(stripped) = after.strip_prefix('{') {
            rest = stripped;
            continue;
        }
        match parse_placeholder(after) {
            Some((index, _, consumed)) => {
                indices.push(index);
                rest = &after[consumed..];
            }
            None => rest = after,
        }
    }
    indices
}
