//! # Enum Sample Values
//!
//! Picks one illustrative value for an enum type, used when rendering example
//! payloads.

use crate::config::IntrospectionConfig;
use crate::model::{ClassDescriptor, TypeKind};
use std::fmt::{self, Display};

/// A representative value for an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleValue {
    /// The constant's name. Rendered in double quotes.
    ConstantName(String),
    /// The constant's first constructor argument, as source literal text.
    Argument(String),
}

impl SampleValue {
    /// Converts to JSON for example payloads.
    ///
    /// Arguments that are JSON literals (`1`, `"on"`, `true`) keep their type;
    /// anything else becomes a JSON string of the raw text.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            SampleValue::ConstantName(name) => serde_json::Value::String(name.clone()),
            SampleValue::Argument(raw) => serde_json::from_str(raw.trim())
                .unwrap_or_else(|_| serde_json::Value::String(raw.clone())),
        }
    }
}

impl Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleValue::ConstantName(name) => write!(f, "\"{}\"", name),
            SampleValue::Argument(raw) => write!(f, "{}", raw),
        }
    }
}

/// Resolves sample values for enum classes.
pub struct EnumSampleResolver<'a> {
    config: &'a IntrospectionConfig,
}

impl<'a> EnumSampleResolver<'a> {
    /// Creates a resolver over the given tables.
    pub fn new(config: &'a IntrospectionConfig) -> Self {
        Self { config }
    }

    /// Picks a sample value for `enum_class`.
    ///
    /// With `name_only` the first constant's name is returned straight away.
    /// Otherwise only the first constant is considered, and only if its
    /// declared type is not a scalar: its first constructor argument wins when
    /// any method of the enum is annotated, else its name.
    pub fn resolve_sample_value(
        &self,
        enum_class: &ClassDescriptor,
        name_only: bool,
    ) -> Option<SampleValue> {
        let has_annotated_accessor = enum_class
            .methods
            .iter()
            .any(|method| !method.annotations.is_empty());

        let mut value = None;
        for (index, constant) in enum_class.enum_constants.iter().enumerate() {
            if name_only {
                return Some(SampleValue::ConstantName(constant.name.clone()));
            }
            // Only index 0 may produce a value; later constants are visited but skipped.
            if index >= 1 || self.config.kind_of(&constant.ty) == TypeKind::Scalar {
                continue;
            }
            let first_argument = constant
                .arguments
                .as_ref()
                .and_then(|args| args.first())
                .filter(|_| has_annotated_accessor);
            value = Some(match first_argument {
                Some(arg) => SampleValue::Argument(arg.clone()),
                None => SampleValue::ConstantName(constant.name.clone()),
            });
        }

        tracing::trace!(
            class = %enum_class.qualified_name,
            has_annotated_accessor,
            ?value,
            "enum_sample: resolved"
        );
        value
    }
}
