//! Code generation for the jsxsugar desugarer.
//!
//! Walks a syntax tree from `jsxsugar-syntax` and rewrites every JSX island
//! into factory calls while recording where each piece of generated text
//! came from:
//! - `annotator`: subnode side table for generic reconstruction
//! - `tag`, `attributes`, `text`: tag classification, attribute flattening
//!   and whitespace collapsing
//! - `emitter`: per-kind emission over an explicit generated cursor
//! - `driver`: `generate`, the single-pass entry point
//! - `transform`: whole-file and buffered transforms

pub mod annotator;
pub use annotator::{SubnodeTable, annotate};

pub mod attributes;
pub use attributes::{AttributeArg, AttributePlan, plan_attributes, quote_key_name};

pub mod driver;
pub use driver::{Generated, generate};

pub mod emitter;
pub use emitter::Emitter;

pub mod error;
pub use error::GenerateError;

pub mod options;
pub use options::{DEFAULT_SOURCE_FILE_NAME, DEFAULT_SPREAD_FN, GenerationOptions, GeneratorConfig};

pub mod source_writer;
pub use source_writer::{EmittedFragment, FragmentWriter, MappingEntry};

pub mod tag;
pub use tag::{TagClass, classify_tag, substitute_tag};

pub mod text;
pub use text::{LINE_JOINER, NormalizedLine, normalize_text, quote_string};

pub mod transform;
pub use transform::{
    BufferedTransform, DEFAULT_EXTENSIONS, Extensions, TransformOutput, transform_path,
    transform_source,
};

#[cfg(test)]
#[path = "tests/annotator_tests.rs"]
mod annotator_tests;

#[cfg(test)]
#[path = "tests/attributes_tests.rs"]
mod attributes_tests;

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;

#[cfg(test)]
#[path = "tests/source_writer_tests.rs"]
mod source_writer_tests;

#[cfg(test)]
#[path = "tests/tag_tests.rs"]
mod tag_tests;

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod text_tests;
