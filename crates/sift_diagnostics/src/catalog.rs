//! The closed catalog of reportable conditions.
//!
//! Each entry declares a unique, stable short code (`E` + three digits), a
//! fixed severity, the evidence fields a producer must supply, and one or
//! more message parts binding those fields into renderable text. Codes are
//! data: once released they are never renumbered or reused, so they stay
//! usable for suppression lists, documentation links, and machine-readable
//! output across versions.
//!
//! Constructing a catalog value is pure and cannot fail; rendering happens
//! separately in [`render`](crate::render).

use crate::macros::declare_diags;
use crate::severity::{PartSeverity, Severity};
use crate::statement_kind::StatementKind;
use sift_source::{Identifier, Span};

/// Definition-time metadata for one catalog entry.
///
/// Produced by the catalog declaration alongside the evidence structs; the
/// catalog invariant tests run against this table instead of constructed
/// diagnostic values.
pub struct DiagInfo {
    /// The evidence struct's type name.
    pub name: &'static str,
    /// The stable short code.
    pub code: &'static str,
    /// The fixed severity.
    pub severity: Severity,
    /// The declared evidence field names, in declaration order.
    pub fields: &'static [&'static str],
    /// The message parts, in declaration order.
    pub parts: &'static [PartInfo],
}

/// Definition-time metadata for one message part.
pub struct PartInfo {
    /// The part's severity.
    pub severity: PartSeverity,
    /// The literal template text.
    pub template: &'static str,
    /// The field name(s) backing each bound arg, in arg order. Derived
    /// spans reference two fields.
    pub args: &'static [&'static [&'static str]],
}

declare_diags! {
    AssignmentBeforeVariableDeclaration("E001", Error) {
        assignment: Identifier,
        declaration: Identifier,
    } => [
        error("variable assigned before its declaration", assignment),
        note("variable declared here", declaration),
    ],

    AssignmentToConstGlobalVariable("E002", Error) {
        assignment: Identifier,
    } => [error("assignment to const global variable", assignment)],

    AssignmentToConstVariable("E003", Error) {
        declaration: Identifier,
        assignment: Identifier,
    } => [
        error("assignment to const variable", assignment),
        note("const variable declared here", declaration),
    ],

    AssignmentToConstVariableBeforeItsDeclaration("E004", Error) {
        declaration: Identifier,
        assignment: Identifier,
    } => [
        error("assignment to const variable before its declaration", assignment),
        note("const variable declared here", declaration),
    ],

    AssignmentToUndeclaredVariable("E059", Warning) {
        assignment: Identifier,
    } => [warning("assignment to undeclared variable", assignment)],

    AwaitOperatorOutsideAsync("E162", Error) {
        await_operator: Span,
    } => [error("'await' is only allowed in async functions", await_operator)],

    BigIntLiteralContainsDecimalPoint("E005", Error) {
        site: Span,
    } => [error("BigInt literal contains decimal point", site)],

    BigIntLiteralContainsExponent("E006", Error) {
        site: Span,
    } => [error("BigInt literal contains exponent", site)],

    CStyleForLoopIsMissingThirdComponent("E093", Error) {
        expected_last_component: Span,
    } => [error("C-style for loop is missing its third component", expected_last_component)],

    CannotAssignToVariableNamedAsyncInForOfLoop("E082", Error) {
        async_identifier: Identifier,
    } => [error("assigning to 'async' in a for-of loop requires parentheses", async_identifier)],

    CannotDeclareAwaitInAsyncFunction("E069", Error) {
        name: Identifier,
    } => [error("cannot declare 'await' inside async function", name)],

    CannotDeclareClassNamedLet("E007", Error) {
        name: Span,
    } => [error("classes cannot be named 'let'", name)],

    CannotDeclareVariableNamedLetWithLet("E008", Error) {
        name: Span,
    } => [error("let statement cannot declare variables named 'let'", name)],

    CannotDeclareVariableWithKeywordName("E124", Error) {
        keyword: Span,
    } => [error("cannot declare variable named keyword '{0}'", keyword)],

    CannotDeclareYieldInGeneratorFunction("E071", Error) {
        name: Identifier,
    } => [error("cannot declare 'yield' inside generator function", name)],

    CannotExportDefaultVariable("E076", Error) {
        declaring_token: Span,
    } => [error("cannot declare and export variable with 'export default'", declaring_token)],

    CannotExportLet("E009", Error) {
        export_name: Span,
    } => [error("cannot export variable named 'let'", export_name)],

    CannotExportVariableNamedKeyword("E144", Error) {
        export_name: Identifier,
    } => [error("cannot export variable named keyword '{0}'", export_name)],

    CannotImportLet("E010", Error) {
        import_name: Span,
    } => [error("cannot import 'let'", import_name)],

    CannotImportVariableNamedKeyword("E145", Error) {
        import_name: Identifier,
    } => [error("cannot import variable named keyword '{0}'", import_name)],

    CannotReferToPrivateVariableWithoutObject("E155", Error) {
        private_identifier: Identifier,
    } => [error("cannot reference private variables without object; use 'this.'", private_identifier)],

    CannotUpdateVariableDuringDeclaration("E136", Error) {
        declaring_token: Span,
        updating_operator: Span,
    } => [
        error("cannot update variable with '{0}' while declaring it", updating_operator),
        note("remove '{0}' to update an existing variable", declaring_token),
    ],

    CatchWithoutTry("E117", Error) {
        catch_token: Span,
    } => [error("unexpected 'catch' without 'try'", catch_token)],

    ClassStatementNotAllowedInBody("E149", Error) {
        kind_of_statement: StatementKind,
        expected_body: Span,
        class_keyword: Span,
    } => [
        error("missing body for {1:headlinese}", expected_body, kind_of_statement),
        note("a class statement is not allowed as the body of {1:singular}", class_keyword, kind_of_statement),
    ],

    CharacterDisallowedInIdentifiers("E011", Error) {
        character: Span,
    } => [error("character is not allowed in identifiers", character)],

    CommaNotAllowedAfterSpreadParameter("E070", Error) {
        comma: Span,
    } => [error("commas are not allowed after spread parameter", comma)],

    ElseHasNoIf("E065", Error) {
        else_token: Span,
    } => [error("'else' has no corresponding 'if'", else_token)],

    EscapedCharacterDisallowedInIdentifiers("E012", Error) {
        escape_sequence: Span,
    } => [error("escaped character is not allowed in identifiers", escape_sequence)],

    EscapedCodePointInIdentifierOutOfRange("E013", Error) {
        escape_sequence: Span,
    } => [error("code point out of range", escape_sequence)],

    ExtraCommaNotAllowedBetweenArguments("E068", Error) {
        comma: Span,
    } => [error("extra ',' is not allowed between function call arguments", comma)],

    ExpectedAsBeforeImportedNamespaceAlias("E126", Error) {
        alias: Span,
        star_token: Span,
    } => [error("expected 'as' between '{1}' and '{2}'", (star_token .. alias), star_token, alias)],

    ExpectedCommaToSeparateObjectLiteralEntries("E131", Error) {
        unexpected_token: Span,
    } => [error("expected ',' between object literal entries", unexpected_token)],

    ExpectedExpressionBeforeNewline("E014", Error) {
        site: Span,
    } => [error("expected expression before newline", site)],

    ExpectedExpressionForSwitchCase("E140", Error) {
        case_token: Span,
    } => [error("expected expression after 'case'", case_token)],

    ExpectedExpressionBeforeSemicolon("E015", Error) {
        site: Span,
    } => [error("expected expression before semicolon", site)],

    ExpectedFromAndModuleSpecifier("E129", Error) {
        site: Span,
    } => [error("expected 'from \"name_of_module.mjs\"'", site)],

    ExpectedFromBeforeModuleSpecifier("E128", Error) {
        module_specifier: Span,
    } => [error("expected 'from' before module specifier", module_specifier)],

    ExpectedHexDigitsInUnicodeEscape("E016", Error) {
        escape_sequence: Span,
    } => [error("expected hexadecimal digits in Unicode escape sequence", escape_sequence)],

    ExpectedLeftCurly("E107", Error) {
        expected_left_curly: Span,
    } => [error("expected '{{'", expected_left_curly)],

    ExpectedRightParenForFunctionCall("E141", Error) {
        expected_right_paren: Span,
        left_paren: Span,
    } => [
        error("expected ')' to close function call", expected_right_paren),
        note("function call started here", left_paren),
    ],

    ExpectedParenthesesAroundDoWhileCondition("E084", Error) {
        condition: Span,
    } => [error("do-while loop needs parentheses around condition", condition)],

    ExpectedParenthesisAroundDoWhileCondition("E085", Error) {
        site: Span,
        token: char,
    } => [error("do-while loop is missing '{1}' around condition", site, token)],

    ExpectedParenthesesAroundIfCondition("E017", Error) {
        condition: Span,
    } => [error("if statement needs parentheses around condition", condition)],

    ExpectedParenthesisAroundIfCondition("E018", Error) {
        site: Span,
        token: char,
    } => [error("if statement is missing '{1}' around condition", site, token)],

    ExpectedParenthesesAroundSwitchCondition("E091", Error) {
        condition: Span,
    } => [error("switch statement needs parentheses around condition", condition)],

    ExpectedParenthesisAroundSwitchCondition("E092", Error) {
        site: Span,
        token: char,
    } => [error("switch statement is missing '{1}' around condition", site, token)],

    ExpectedParenthesesAroundWhileCondition("E087", Error) {
        condition: Span,
    } => [error("while loop needs parentheses around condition", condition)],

    ExpectedParenthesisAroundWhileCondition("E088", Error) {
        site: Span,
        token: char,
    } => [error("while loop is missing '{1}' around condition", site, token)],

    ExpectedParenthesesAroundWithExpression("E089", Error) {
        expression: Span,
    } => [error("with statement needs parentheses around expression", expression)],

    ExpectedParenthesisAroundWithExpression("E090", Error) {
        site: Span,
        token: char,
    } => [error("with statement is missing '{1}' around expression", site, token)],

    ExpectedVariableNameForCatch("E135", Error) {
        unexpected_token: Span,
    } => [error("expected variable name for 'catch'", unexpected_token)],

    ExportingRequiresDefault("E067", Error) {
        expression: Span,
    } => [error("exporting requires 'default'", expression)],

    ExportingRequiresCurlies("E066", Error) {
        names: Span,
    } => [error("exporting requires '{{' and '}'", names)],

    ExportingStringNameOnlyAllowedForExportFrom("E153", Error) {
        export_name: Span,
    } => [error("forwarding exports are only allowed in export-from", export_name)],

    FinallyWithoutTry("E118", Error) {
        finally_token: Span,
    } => [error("unexpected 'finally' without 'try'", finally_token)],

    FunctionStatementNotAllowedInBody("E148", Error) {
        kind_of_statement: StatementKind,
        expected_body: Span,
        function_keywords: Span,
    } => [
        error("missing body for {1:headlinese}", expected_body, kind_of_statement),
        note("a function statement is not allowed as the body of {1:singular}", function_keywords, kind_of_statement),
    ],

    GeneratorFunctionStarBelongsBeforeName("E133", Error) {
        star: Span,
    } => [error("generator function '*' belongs before function name", star)],

    InDisallowedInCStyleForLoop("E108", Error) {
        in_token: Span,
    } => [error("'in' disallowed in C-style for loop initializer", in_token)],

    IndexingRequiresExpression("E075", Error) {
        squares: Span,
    } => [error("indexing requires an expression", squares)],

    InvalidBindingInLetStatement("E019", Error) {
        site: Span,
    } => [error("invalid binding in let statement", site)],

    InvalidExpressionLeftOfAssignment("E020", Error) {
        site: Span,
    } => [error("invalid expression left of assignment", site)],

    InvalidHexEscapeSequence("E060", Error) {
        escape_sequence: Span,
    } => [error("invalid hex escape sequence: {0}", escape_sequence)],

    InvalidLoneLiteralInObjectLiteral("E021", Error) {
        site: Span,
    } => [error("invalid lone literal in object literal", site)],

    InvalidRhsForDotOperator("E074", Error) {
        dot: Span,
    } => [error("'.' operator needs a key name; use + to concatenate strings; use [] to access with a dynamic key", dot)],

    InvalidUtf8Sequence("E022", Error) {
        sequence: Span,
    } => [error("invalid UTF-8 sequence", sequence)],

    KeywordsCannotContainEscapeSequences("E023", Error) {
        escape_sequence: Span,
    } => [error("keywords cannot contain escape sequences", escape_sequence)],

    LegacyOctalLiteralMayNotBeBigInt("E032", Error) {
        characters: Span,
    } => [error("legacy octal literal may not be BigInt", characters)],

    LegacyOctalLiteralMayNotContainUnderscores("E152", Error) {
        underscores: Span,
    } => [error("legacy octal literals may not contain underscores", underscores)],

    LetWithNoBindings("E024", Error) {
        site: Span,
    } => [error("let with no bindings", site)],

    LexicalDeclarationNotAllowedInBody("E150", Error) {
        kind_of_statement: StatementKind,
        expected_body: Span,
        declaring_keyword: Span,
    } => [
        error("missing body for {1:headlinese}", expected_body, kind_of_statement),
        note("a lexical declaration is not allowed as the body of {1:singular}", declaring_keyword, kind_of_statement),
    ],

    MethodsShouldNotUseFunctionKeyword("E072", Error) {
        function_token: Span,
    } => [error("methods should not use the 'function' keyword", function_token)],

    MissingArrayClose("E157", Error) {
        left_square: Span,
        expected_right_square: Span,
    } => [
        error("missing end of array; expected ']'", expected_right_square),
        note("array started here", left_square),
    ],

    MissingArrowFunctionParameterList("E105", Error) {
        arrow: Span,
    } => [error("missing parameters for arrow function", arrow)],

    MissingBodyForCatchClause("E119", Error) {
        catch_token: Span,
    } => [error("missing body for catch clause", catch_token)],

    MissingBodyForClass("E111", Error) {
        class_keyword_and_name_and_heritage: Span,
    } => [error("missing body for class", class_keyword_and_name_and_heritage)],

    MissingBodyForDoWhileStatement("E101", Error) {
        do_token: Span,
    } => [error("missing body for do-while loop", do_token)],

    MissingBodyForFinallyClause("E121", Error) {
        finally_token: Span,
    } => [error("missing body for finally clause", finally_token)],

    MissingBodyForForStatement("E094", Error) {
        for_and_header: Span,
    } => [error("missing body for 'for' loop", for_and_header)],

    MissingBodyForIfStatement("E064", Error) {
        if_and_condition: Span,
    } => [error("missing body for 'if' statement", if_and_condition)],

    MissingBodyForSwitchStatement("E106", Error) {
        switch_and_condition: Span,
    } => [error("missing body for 'switch' statement", switch_and_condition)],

    MissingBodyForTryStatement("E120", Error) {
        try_token: Span,
    } => [error("missing body for try statement", try_token)],

    MissingBodyForWhileStatement("E104", Error) {
        while_and_condition: Span,
    } => [error("missing body for while loop", while_and_condition)],

    MissingCatchOrFinallyForTryStatement("E122", Error) {
        expected_catch_or_finally: Span,
        try_token: Span,
    } => [
        error("missing catch or finally clause for try statement", expected_catch_or_finally),
        note("try statement starts here", try_token),
    ],

    MissingCatchVariableBetweenParentheses("E130", Error) {
        left_paren: Span,
        right_paren: Span,
    } => [error("missing catch variable name between parentheses", (left_paren .. right_paren))],

    MissingCommaBetweenObjectLiteralEntries("E025", Error) {
        site: Span,
    } => [error("missing comma between object literal entries", site)],

    MissingCommaBetweenVariableDeclarations("E132", Error) {
        expected_comma: Span,
    } => [error("missing ',' between variable declarations", expected_comma)],

    MissingColonInConditionalExpression("E146", Error) {
        expected_colon: Span,
        question: Span,
    } => [
        error("missing ':' in conditional expression", expected_colon),
        note("'?' creates a conditional expression", question),
    ],

    MissingConditionForIfStatement("E138", Error) {
        if_keyword: Span,
    } => [error("missing condition for if statement", if_keyword)],

    MissingConditionForWhileStatement("E139", Error) {
        while_keyword: Span,
    } => [error("missing condition for while statement", while_keyword)],

    MissingConditionForSwitchStatement("E137", Error) {
        switch_keyword: Span,
    } => [error("missing condition for switch statement", switch_keyword)],

    MissingExpressionBetweenParentheses("E078", Error) {
        left_paren: Span,
        right_paren: Span,
    } => [error("missing expression between parentheses", (left_paren .. right_paren))],

    MissingForLoopHeader("E125", Error) {
        for_token: Span,
    } => [error("missing header and body for 'for' loop", for_token)],

    MissingForLoopRhsOrComponentsAfterExpression("E097", Error) {
        header: Span,
        for_token: Span,
    } => [
        error("for loop needs an iterable, or condition and update clauses", header),
        note("use 'while' instead to loop until a condition is false", for_token),
    ],

    MissingForLoopRhsOrComponentsAfterDeclaration("E098", Error) {
        header: Span,
    } => [error("for loop needs an iterable, or condition and update clauses", header)],

    MissingFunctionParameterList("E073", Error) {
        function_name: Span,
    } => [error("missing function parameter list", function_name)],

    MissingHeaderOfForLoop("E096", Error) {
        site: Span,
    } => [error("missing for loop header", site)],

    MissingKeyForObjectEntry("E154", Error) {
        expression: Span,
    } => [error("unexpected expression; missing key for object entry", expression)],

    MissingNameInFunctionStatement("E061", Error) {
        site: Span,
    } => [error("missing name in function statement", site)],

    MissingNameInClassStatement("E080", Error) {
        class_keyword: Span,
    } => [error("missing name of class", class_keyword)],

    MissingNameOfExportedClass("E081", Error) {
        class_keyword: Span,
    } => [error("missing name of exported class", class_keyword)],

    MissingNameOfExportedFunction("E079", Error) {
        function_keyword: Span,
    } => [error("missing name of exported function", function_keyword)],

    MissingNameOrParenthesesForFunction("E062", Error) {
        site: Span,
    } => [error("missing name or parentheses for function", site)],

    MissingOperandForOperator("E026", Error) {
        site: Span,
    } => [error("missing operand for operator", site)],

    MissingOperatorBetweenExpressionAndArrowFunction("E063", Error) {
        site: Span,
    } => [error("missing operator between expression and arrow function", site)],

    MissingPropertyNameForDotOperator("E142", Error) {
        dot: Span,
    } => [error("missing property name after '.' operator", dot)],

    MissingSemicolonAfterStatement("E027", Error) {
        site: Span,
    } => [error("missing semicolon after statement", site)],

    MissingSemicolonBetweenForLoopConditionAndUpdate("E100", Error) {
        expected_semicolon: Span,
    } => [error("missing semicolon between condition and update parts of for loop", expected_semicolon)],

    MissingSemicolonBetweenForLoopInitAndCondition("E099", Error) {
        expected_semicolon: Span,
    } => [error("missing semicolon between init and condition parts of for loop", expected_semicolon)],

    MissingTokenAfterExport("E113", Error) {
        export_token: Span,
    } => [error("incomplete export; expected 'export default ...' or 'export {{name}' or 'export * from ...' or 'export class' or 'export function' or 'export let'", export_token)],

    MissingValueForObjectLiteralEntry("E083", Error) {
        key: Span,
    } => [error("missing value for object property", key)],

    MissingVariableNameInDeclaration("E123", Error) {
        equal_token: Span,
    } => [error("missing variable name", equal_token)],

    MissingWhileAndConditionForDoWhileStatement("E103", Error) {
        do_token: Span,
        expected_while: Span,
    } => [
        error("missing 'while (condition)' for do-while statement", expected_while),
        note("do-while statement starts here", do_token),
    ],

    NumberLiteralContainsConsecutiveUnderscores("E028", Error) {
        underscores: Span,
    } => [error("number literal contains consecutive underscores", underscores)],

    NumberLiteralContainsTrailingUnderscores("E029", Error) {
        underscores: Span,
    } => [error("number literal contains trailing underscore(s)", underscores)],

    OctalLiteralMayNotHaveExponent("E030", Error) {
        characters: Span,
    } => [error("octal literal may not have exponent", characters)],

    OctalLiteralMayNotHaveDecimal("E031", Error) {
        characters: Span,
    } => [error("octal literal may not have decimal", characters)],

    PrivatePropertiesAreNotAllowedInObjectLiterals("E156", Error) {
        private_identifier: Identifier,
    } => [error("private properties are not allowed in object literals", private_identifier)],

    RedeclarationOfGlobalVariable("E033", Error) {
        redeclaration: Identifier,
    } => [error("redeclaration of global variable", redeclaration)],

    RedeclarationOfVariable("E034", Error) {
        redeclaration: Identifier,
        original_declaration: Identifier,
    } => [
        error("redeclaration of variable: {0}", redeclaration),
        note("variable already declared here", original_declaration),
    ],

    RegexpLiteralFlagsCannotContainUnicodeEscapes("E035", Error) {
        escape_sequence: Span,
    } => [error("RegExp literal cannot contain Unicode escapes", escape_sequence)],

    StrayCommaInLetStatement("E036", Error) {
        site: Span,
    } => [error("stray comma in let statement", site)],

    TypeScriptEnumNotImplemented("E127", Error) {
        enum_keyword: Span,
    } => [error("TypeScript's 'enum' feature is not yet implemented", enum_keyword)],

    UnclosedBlockComment("E037", Error) {
        comment_open: Span,
    } => [error("unclosed block comment", comment_open)],

    UnclosedCodeBlock("E134", Error) {
        block_open: Span,
    } => [error("unclosed code block; expected '}' by end of file", block_open)],

    UnclosedIdentifierEscapeSequence("E038", Error) {
        escape_sequence: Span,
    } => [error("unclosed identifier escape sequence", escape_sequence)],

    UnclosedObjectLiteral("E161", Error) {
        object_open: Span,
        expected_object_close: Span,
    } => [
        error("unclosed object literal; expected '}'", expected_object_close),
        note("object literal started here", object_open),
    ],

    UnclosedRegexpLiteral("E039", Error) {
        regexp_literal: Span,
    } => [error("unclosed regexp literal", regexp_literal)],

    UnclosedStringLiteral("E040", Error) {
        string_literal: Span,
    } => [error("unclosed string literal", string_literal)],

    UnclosedTemplate("E041", Error) {
        incomplete_template: Span,
    } => [error("unclosed template", incomplete_template)],

    UnexpectedAtCharacter("E042", Error) {
        character: Span,
    } => [error("unexpected '@'", character)],

    UnexpectedArrowAfterExpression("E160", Error) {
        arrow: Span,
        expression: Span,
    } => [
        error("unexpected '{0}'", arrow),
        note("expected parameter for arrow function, but got an expression instead", expression),
    ],

    UnexpectedArrowAfterLiteral("E158", Error) {
        arrow: Span,
        literal_parameter: Span,
    } => [
        error("unexpected '{0}'", arrow),
        note("expected parameter for arrow function, but got a literal instead", literal_parameter),
    ],

    UnexpectedBackslashInIdentifier("E043", Error) {
        backslash: Span,
    } => [error("unexpected '\\' in identifier", backslash)],

    UnexpectedCaseOutsideSwitchStatement("E115", Error) {
        case_token: Span,
    } => [error("unexpected 'case' outside switch statement", case_token)],

    UnexpectedCharactersInNumber("E044", Error) {
        characters: Span,
    } => [error("unexpected characters in number literal", characters)],

    UnexpectedControlCharacter("E045", Error) {
        character: Span,
    } => [error("unexpected control character", character)],

    UnexpectedCharactersInBinaryNumber("E046", Error) {
        characters: Span,
    } => [error("unexpected characters in binary literal", characters)],

    UnexpectedCharactersInOctalNumber("E047", Error) {
        characters: Span,
    } => [error("unexpected characters in octal literal", characters)],

    UnexpectedCharactersInHexNumber("E048", Error) {
        characters: Span,
    } => [error("unexpected characters in hex literal", characters)],

    UnexpectedDefaultOutsideSwitchStatement("E116", Error) {
        default_token: Span,
    } => [error("unexpected 'default' outside switch statement", default_token)],

    UnexpectedLiteralInParameterList("E159", Error) {
        literal: Span,
    } => [error("unexpected literal in parameter list; expected parameter name", literal)],

    UnexpectedSemicolonInCStyleForLoop("E102", Error) {
        semicolon: Span,
    } => [error("C-style for loops have only three semicolon-separated components", semicolon)],

    UnexpectedSemicolonInForInLoop("E110", Error) {
        semicolon: Span,
    } => [error("for-in loop expression cannot have semicolons", semicolon)],

    UnexpectedSemicolonInForOfLoop("E109", Error) {
        semicolon: Span,
    } => [error("for-of loop expression cannot have semicolons", semicolon)],

    NoDigitsInBinaryNumber("E049", Error) {
        characters: Span,
    } => [error("binary number literal has no digits", characters)],

    NoDigitsInHexNumber("E050", Error) {
        characters: Span,
    } => [error("hex number literal has no digits", characters)],

    NoDigitsInOctalNumber("E051", Error) {
        characters: Span,
    } => [error("octal number literal has no digits", characters)],

    UnexpectedHashCharacter("E052", Error) {
        site: Span,
    } => [error("unexpected '#'", site)],

    UnexpectedIdentifier("E053", Error) {
        site: Span,
    } => [error("unexpected identifier", site)],

    UnexpectedIdentifierInExpression("E147", Error) {
        unexpected: Identifier,
    } => [error("unexpected identifier in expression; missing operator before", unexpected)],

    // Prefer a more specific diagnostic over this catch-all where possible.
    UnexpectedToken("E054", Error) {
        token: Span,
    } => [error("unexpected token", token)],

    UnexpectedTokenAfterExport("E112", Error) {
        unexpected_token: Span,
    } => [error("unexpected token in export; expected 'export default ...' or 'export {{name}' or 'export * from ...' or 'export class' or 'export function' or 'export let'", unexpected_token)],

    UnexpectedTokenInVariableDeclaration("E114", Error) {
        unexpected_token: Span,
    } => [error("unexpected token in variable declaration; expected variable name", unexpected_token)],

    UnmatchedIndexingBracket("E055", Error) {
        left_square: Span,
    } => [error("unmatched indexing bracket", left_square)],

    UnmatchedParenthesis("E056", Error) {
        site: Span,
    } => [error("unmatched parenthesis", site)],

    UnmatchedRightCurly("E143", Error) {
        right_curly: Span,
    } => [error("unmatched '}'", right_curly)],

    UseOfUndeclaredVariable("E057", Warning) {
        name: Identifier,
    } => [warning("use of undeclared variable: {0}", name)],

    VariableUsedBeforeDeclaration("E058", Error) {
        usage: Identifier,
        declaration: Identifier,
    } => [
        error("variable used before declaration: {0}", usage),
        note("variable declared here", declaration),
    ],

    InvalidBreak("E200", Error) {
        break_statement: Span,
    } => [error("break can only be used inside of a loop or switch", break_statement)],

    InvalidContinue("E201", Error) {
        continue_statement: Span,
    } => [error("continue can only be used inside of a loop", continue_statement)],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::placeholder_indices;
    use sift_source::FileId;
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn catalog_is_complete() {
        assert_eq!(CATALOG.len(), 160);
    }

    #[test]
    fn codes_are_unique() {
        let mut seen = HashSet::new();
        for info in CATALOG {
            assert!(seen.insert(info.code), "duplicate code {}", info.code);
        }
    }

    #[test]
    fn codes_are_well_formed() {
        for info in CATALOG {
            assert_eq!(info.code.len(), 4, "{}", info.code);
            assert!(info.code.starts_with('E'), "{}", info.code);
            assert!(
                info.code[1..].bytes().all(|b| b.is_ascii_digit()),
                "{}",
                info.code
            );
        }
    }

    #[test]
    fn exactly_two_warnings() {
        let warnings: Vec<&str> = CATALOG
            .iter()
            .filter(|info| info.severity == Severity::Warning)
            .map(|info| info.code)
            .collect();
        assert_eq!(warnings, ["E059", "E057"]);
    }

    #[test]
    fn first_part_carries_diag_severity() {
        for info in CATALOG {
            assert_eq!(
                info.parts[0].severity,
                PartSeverity::from(info.severity),
                "{}",
                info.code
            );
        }
    }

    #[test]
    fn later_parts_are_notes() {
        for info in CATALOG {
            for part in &info.parts[1..] {
                assert_eq!(part.severity, PartSeverity::Note, "{}", info.code);
            }
        }
    }

    #[test]
    fn every_part_has_a_location_arg() {
        for info in CATALOG {
            for part in info.parts {
                assert!(!part.args.is_empty(), "{}: {:?}", info.code, part.template);
            }
        }
    }

    #[test]
    fn placeholder_indices_are_in_range() {
        for info in CATALOG {
            for part in info.parts {
                for index in placeholder_indices(part.template) {
                    assert!(
                        index < part.args.len(),
                        "{}: template {:?} references arg {} but only {} are bound",
                        info.code,
                        part.template,
                        index,
                        part.args.len()
                    );
                }
            }
        }
    }

    #[test]
    fn declared_fields_exactly_match_referenced_fields() {
        for info in CATALOG {
            let declared: BTreeSet<&str> = info.fields.iter().copied().collect();
            let referenced: BTreeSet<&str> = info
                .parts
                .iter()
                .flat_map(|part| part.args.iter())
                .flat_map(|arg| arg.iter().copied())
                .collect();
            assert_eq!(
                declared, referenced,
                "{}: declared fields must exactly match message-part fields",
                info.code
            );
        }
    }

    #[test]
    fn enum_agrees_with_struct_constants() {
        let file = FileId::from_raw(0);
        let span = Span::new(file, 10, 15);
        let diag: Diag = UnclosedStringLiteral {
            string_literal: span,
        }
        .into();
        assert_eq!(diag.code(), UnclosedStringLiteral::CODE);
        assert_eq!(diag.code(), "E040");
        assert_eq!(diag.severity(), UnclosedStringLiteral::SEVERITY);
        assert_eq!(diag.severity(), Severity::Error);
    }

    #[test]
    fn warning_variant_severity() {
        let file = FileId::from_raw(0);
        let diag: Diag = UseOfUndeclaredVariable {
            name: Identifier::new(Span::new(file, 0, 3)),
        }
        .into();
        assert_eq!(diag.code(), "E057");
        assert_eq!(diag.severity(), Severity::Warning);
        assert_eq!(diag.parts()[0].severity, PartSeverity::Warning);
    }

    #[test]
    fn derived_span_computed_at_part_construction() {
        let file = FileId::from_raw(0);
        let diag = MissingExpressionBetweenParentheses {
            left_paren: Span::new(file, 4, 5),
            right_paren: Span::new(file, 9, 10),
        };
        let parts = diag.parts();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].span(), Span::new(file, 4, 10));
    }

    #[test]
    fn two_part_diag_shapes() {
        let file = FileId::from_raw(0);
        let diag = RedeclarationOfVariable {
            redeclaration: Identifier::new(Span::new(file, 20, 23)),
            original_declaration: Identifier::new(Span::new(file, 5, 8)),
        };
        let parts = diag.parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].severity, PartSeverity::Error);
        assert_eq!(parts[0].span(), Span::new(file, 20, 23));
        assert_eq!(parts[1].severity, PartSeverity::Note);
        assert_eq!(parts[1].template, "variable already declared here");
        assert_eq!(parts[1].span(), Span::new(file, 5, 8));
    }

    #[test]
    fn serde_roundtrip() {
        let file = FileId::from_raw(2);
        let diag: Diag = UnclosedBlockComment {
            comment_open: Span::new(file, 7, 9),
        }
        .into();
        let json = serde_json::to_string(&diag).unwrap();
        let back: Diag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, diag);
    }
}
