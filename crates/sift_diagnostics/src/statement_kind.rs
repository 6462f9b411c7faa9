//! Statement classifiers used as diagnostic evidence.

use serde::{Deserialize, Serialize};

/// The kind of statement implicated by a diagnostic.
///
/// Used by diagnostics about statements that require a body (e.g., a class
/// statement is not a valid body for an `if` statement). Message templates
/// select one of two text forms with a formatting directive: `headlinese`
/// for a capitalized phrase at the start of a sentence, `singular` for a
/// lowercase phrase with an article mid-sentence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum StatementKind {
    /// A `do { ... } while (...)` loop.
    DoWhileLoop,
    /// A `for` loop of any flavor.
    ForLoop,
    /// An `if` statement.
    IfStatement,
    /// A `while` loop.
    WhileLoop,
    /// A `with` statement.
    WithStatement,
}

impl StatementKind {
    /// Returns the capitalized noun phrase for this kind, suitable at the
    /// start of a sentence.
    pub fn headlinese(self) -> &'static str {
        match self {
            StatementKind::DoWhileLoop => "Do-while loop",
            StatementKind::ForLoop => "For loop",
            StatementKind::IfStatement => "If statement",
            StatementKind::WhileLoop => "While loop",
            StatementKind::WithStatement => "With statement",
        }
    }

    /// Returns the lowercase noun phrase for this kind, suitable
    /// mid-sentence.
    pub fn singular(self) -> &'static str {
        match self {
            StatementKind::DoWhileLoop => "a do-while loop",
            StatementKind::ForLoop => "a for loop",
            StatementKind::IfStatement => "an if statement",
            StatementKind::WhileLoop => "a while loop",
            StatementKind::WithStatement => "a with statement",
        }
    }
}
