//! Syntax layer for the jsxsugar desugarer.
//!
//! This crate provides the input side of code generation:
//! - Node storage (`NodeArena`, `NodeIndex`, `NodeList`)
//! - Node kinds and per-kind payloads (`SyntaxKind`, `NodeData`)
//! - Line/column positions (`Position`, `SourceLocation`, `LineMap`)
//! - A markup reader that builds a tree for every JSX island in a script

// Shared handle types
pub mod base;
pub use base::{NodeIndex, NodeList};

// Node kinds
pub mod kind;
pub use kind::SyntaxKind;

// Node arena and payloads
pub mod node;
pub use node::{
    GenericData, JsxAttributeData, JsxClosingData, JsxElementData, JsxExpressionData,
    JsxFragmentData, JsxIdentifierData, JsxMemberData, JsxNamespacedNameData,
    JsxOpeningData, JsxOpeningFragmentData, JsxSpreadAttributeData, JsxTextData, Node,
    NodeArena, NodeData,
};

// Line/column positions
pub mod position;
pub use position::{LineMap, Position, SourceLocation, is_line_terminator};

// Parse errors
pub mod error;
pub use error::ParseError;

// Markup reader (JSX islands inside ECMAScript)
pub mod reader;
pub use reader::{ParsedSource, parse};

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod node_tests;
