#![deny(missing_docs)]

//! # Classdoc Core
//!
//! Class-model introspection for API documentation generators.
//!
//! Works on the descriptor graph produced by a source parser and derives the
//! facts a renderer needs: flattened field lists, enum sample values, generic
//! type arguments and validation groups.

/// Shared error types.
pub mod error;

/// Descriptor model (classes, members, annotations, type references).
pub mod model;

/// Class lookup and the per-run class model.
pub mod registry;

/// Static lookup tables.
pub mod config;

/// JSON / YAML document loading.
pub mod loader;

/// Qualified-name helpers.
pub mod names;

/// Flattened field collection across a hierarchy.
pub mod hierarchy;

/// Enum sample values.
pub mod enum_sample;

/// Generic type argument access.
pub mod generics;

/// Validation group extraction.
pub mod validation;

/// Facade over all resolvers.
pub mod introspector;

pub use config::IntrospectionConfig;
pub use enum_sample::{EnumSampleResolver, SampleValue};
pub use error::{AppError, AppResult};
pub use generics::{actual_type_arguments, first_actual_type_argument};
pub use hierarchy::HierarchyFieldCollector;
pub use introspector::Introspector;
pub use model::{
    AnnotationDescriptor, AnnotationValue, ClassDescriptor, ClassKind, EnumConstant,
    FieldDescriptor, FieldOrigin, MethodDescriptor, ParameterDescriptor, TypeDescriptor, TypeKind,
};
pub use registry::{ClassLookup, ClassModel};
pub use validation::ValidationGroupExtractor;
