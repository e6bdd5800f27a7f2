//! # Validation Groups
//!
//! Extracts the group marker classes referenced by a parameter's validation
//! annotations.
//!
//! The cascading marker (`@Validated`) names its groups in `value`; every
//! other recognized validator (`@NotNull`, `@Size`, ...) names them in
//! `groups`. Unrecognized annotations contribute nothing.

use crate::config::IntrospectionConfig;
use crate::model::{AnnotationDescriptor, ParameterDescriptor};

/// Extracts validation-group class names from annotations.
pub struct ValidationGroupExtractor<'a> {
    config: &'a IntrospectionConfig,
}

impl<'a> ValidationGroupExtractor<'a> {
    /// Creates an extractor over the given tables.
    pub fn new(config: &'a IntrospectionConfig) -> Self {
        Self { config }
    }

    /// Group class names across all `annotations`, in annotation-then-entry
    /// order. Duplicates are kept.
    pub fn group_classes(&self, annotations: &[AnnotationDescriptor]) -> Vec<String> {
        annotations
            .iter()
            .flat_map(|annotation| self.group_classes_of(Some(annotation)))
            .collect()
    }

    /// Group class names of a single annotation.
    pub fn group_classes_of(&self, annotation: Option<&AnnotationDescriptor>) -> Vec<String> {
        let Some(annotation) = annotation else {
            return Vec::new();
        };
        let Some(property) = self.group_property(annotation) else {
            return Vec::new();
        };
        if annotation.property(property).is_none() {
            return Vec::new();
        }
        match annotation.type_refs(property) {
            Some(refs) => refs
                .into_iter()
                .map(|ty| ty.generic_canonical_name())
                .collect(),
            None => {
                tracing::debug!(
                    annotation = %annotation.ty.qualified(),
                    property,
                    "validation: property is not a class list, ignored"
                );
                Vec::new()
            }
        }
    }

    /// Group class names of every annotation on a method parameter.
    pub fn parameter_groups(&self, parameter: &ParameterDescriptor) -> Vec<String> {
        self.group_classes(&parameter.annotations)
    }

    /// The property holding group references for this kind of annotation.
    fn group_property(&self, annotation: &AnnotationDescriptor) -> Option<&'a str> {
        let name = annotation.simple_name();
        if self.config.is_cascading_marker(name) {
            Some(self.config.value_property.as_str())
        } else if self.config.is_validator(name) {
            Some(self.config.groups_property.as_str())
        } else {
            None
        }
    }
}
