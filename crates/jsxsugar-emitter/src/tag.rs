//! Tag classification.

use crate::options::GenerationOptions;

/// How an element's tag is turned into the head of the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagClass {
    /// Host element: `factory('div', ...)`.
    KnownTag,
    /// User component: `factory(Foo, ...)`, or `factory('Foo', ...)` when
    /// `stringify` is set.
    ComponentReference { stringify: bool },
    /// The substituted pattern is the callee: `Foo.render(...)`.
    PatternSubstitution { callee: String },
}

/// Classify a tag. `is_simple_identifier` is false for member (`a.b`) and
/// namespaced (`a:b`) names.
///
/// Simple identifiers starting with a lowercase letter are always known
/// tags; the flags only decide what happens to everything else.
pub fn classify_tag(name: &str, is_simple_identifier: bool, options: &GenerationOptions) -> TagClass {
    let lowercase_initial = name.chars().next().is_some_and(char::is_lowercase);
    if is_simple_identifier && lowercase_initial {
        return TagClass::KnownTag;
    }

    if !options.pass_unknown_tags_to_factory {
        if let Some(pattern) = &options.unknown_tag_pattern {
            return TagClass::PatternSubstitution {
                callee: substitute_tag(pattern, name),
            };
        }
    }

    TagClass::ComponentReference {
        stringify: options.unknown_tags_as_string,
    }
}

/// Replace every `{tag}` in `pattern` with `name`.
pub fn substitute_tag(pattern: &str, name: &str) -> String {
    pattern.replace("{tag}", name)
}
