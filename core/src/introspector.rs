//! # Introspector
//!
//! One entry point bundling the configuration tables and a class model, for
//! documentation drivers that need several resolvers over the same run.

use crate::config::IntrospectionConfig;
use crate::enum_sample::{EnumSampleResolver, SampleValue};
use crate::error::AppResult;
use crate::generics::{actual_type_arguments, first_actual_type_argument};
use crate::hierarchy::HierarchyFieldCollector;
use crate::model::{
    AnnotationDescriptor, ClassDescriptor, FieldDescriptor, ParameterDescriptor, TypeDescriptor,
};
use crate::registry::ClassLookup;
use crate::validation::ValidationGroupExtractor;

/// Read-only facade over the four resolvers.
pub struct Introspector<'a, L: ClassLookup + ?Sized> {
    config: &'a IntrospectionConfig,
    lookup: &'a L,
}

impl<'a, L: ClassLookup + ?Sized> Introspector<'a, L> {
    /// Creates a facade over explicit tables.
    pub fn new(config: &'a IntrospectionConfig, lookup: &'a L) -> Self {
        Self { config, lookup }
    }

    /// Creates a facade over the process-wide default tables.
    pub fn with_defaults(lookup: &'a L) -> Self {
        Self::new(IntrospectionConfig::global(), lookup)
    }

    /// Finds a class in the underlying model.
    pub fn find_class(&self, qualified_name: &str) -> Option<&'a ClassDescriptor> {
        self.lookup.find_class(qualified_name)
    }

    /// Flattened field list of `class`, ancestors included.
    pub fn fields(&self, class: &ClassDescriptor) -> AppResult<Vec<FieldDescriptor>> {
        HierarchyFieldCollector::new(self.config, self.lookup).collect(class)
    }

    /// Representative value of an enum.
    pub fn enum_sample(&self, enum_class: &ClassDescriptor, name_only: bool) -> Option<SampleValue> {
        EnumSampleResolver::new(self.config).resolve_sample_value(enum_class, name_only)
    }

    /// Bound type arguments of a reference.
    pub fn type_arguments<'t>(&self, type_ref: Option<&'t TypeDescriptor>) -> Vec<&'t TypeDescriptor> {
        actual_type_arguments(type_ref)
    }

    /// First bound type argument of a reference.
    pub fn first_type_argument<'t>(&self, type_ref: &'t TypeDescriptor) -> AppResult<&'t TypeDescriptor> {
        first_actual_type_argument(type_ref)
    }

    /// Validation group classes named by `annotations`.
    pub fn group_classes(&self, annotations: &[AnnotationDescriptor]) -> Vec<String> {
        ValidationGroupExtractor::new(self.config).group_classes(annotations)
    }

    /// Validation group classes named by a method parameter's annotations.
    pub fn parameter_groups(&self, parameter: &ParameterDescriptor) -> Vec<String> {
        ValidationGroupExtractor::new(self.config).parameter_groups(parameter)
    }
}
