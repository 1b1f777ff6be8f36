use serde::Serialize;

/// Grammar category of a node.
///
/// The `Jsx*` kinds belong to the markup extension and each has a dedicated
/// emission rule. Every other kind is host-language code that is rebuilt
/// verbatim around its nested markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    // Host language
    Program,
    Expression,
    StringLiteral,
    Unknown,

    // Markup extension
    JsxElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxFragment,
    JsxOpeningFragment,
    JsxClosingFragment,
    JsxText,
    JsxIdentifier,
    JsxMemberExpression,
    JsxNamespacedName,
    JsxAttribute,
    JsxSpreadAttribute,
    JsxExpressionContainer,
    JsxEmptyExpression,
}

impl SyntaxKind {
    /// True for kinds that have a dedicated emission rule.
    pub fn is_jsx(self) -> bool {
        !matches!(
            self,
            SyntaxKind::Program
                | SyntaxKind::Expression
                | SyntaxKind::StringLiteral
                | SyntaxKind::Unknown
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxKind::Program => "Program",
            SyntaxKind::Expression => "Expression",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::Unknown => "Unknown",
            SyntaxKind::JsxElement => "JSXElement",
            SyntaxKind::JsxOpeningElement => "JSXOpeningElement",
            SyntaxKind::JsxClosingElement => "JSXClosingElement",
            SyntaxKind::JsxFragment => "JSXFragment",
            SyntaxKind::JsxOpeningFragment => "JSXOpeningFragment",
            SyntaxKind::JsxClosingFragment => "JSXClosingFragment",
            SyntaxKind::JsxText => "JSXText",
            SyntaxKind::JsxIdentifier => "JSXIdentifier",
            SyntaxKind::JsxMemberExpression => "JSXMemberExpression",
            SyntaxKind::JsxNamespacedName => "JSXNamespacedName",
            SyntaxKind::JsxAttribute => "JSXAttribute",
            SyntaxKind::JsxSpreadAttribute => "JSXSpreadAttribute",
            SyntaxKind::JsxExpressionContainer => "JSXExpressionContainer",
            SyntaxKind::JsxEmptyExpression => "JSXEmptyExpression",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
