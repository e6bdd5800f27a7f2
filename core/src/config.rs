//! # Introspection Configuration
//!
//! The static tables the resolvers consult: which type names count as
//! scalars, collections and maps, which base types stop hierarchy ascent, and
//! which annotations carry validation groups.
//!
//! Tables are plain values. Use [`IntrospectionConfig::global`] for the
//! process-wide defaults, or build a custom config in tests.

use crate::error::AppResult;
use crate::loader::{load_document, parse_document, DocumentFormat};
use crate::model::{TypeDescriptor, TypeKind};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const SCALAR_TYPES: &[&str] = &[
    "int",
    "integer",
    "long",
    "double",
    "float",
    "short",
    "byte",
    "char",
    "character",
    "boolean",
    "string",
    "bigdecimal",
    "biginteger",
    "date",
    "localdate",
    "localtime",
    "localdatetime",
    "zoneddatetime",
    "offsetdatetime",
    "instant",
    "uuid",
    "java.lang.integer",
    "java.lang.long",
    "java.lang.double",
    "java.lang.float",
    "java.lang.short",
    "java.lang.byte",
    "java.lang.character",
    "java.lang.boolean",
    "java.lang.string",
    "java.math.bigdecimal",
    "java.math.biginteger",
    "java.util.date",
    "java.time.localdate",
    "java.time.localtime",
    "java.time.localdatetime",
    "java.time.zoneddatetime",
    "java.time.offsetdatetime",
    "java.time.instant",
    "java.util.uuid",
];

const COLLECTION_TYPES: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Set",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.SortedSet",
    "java.util.TreeSet",
    "java.util.Queue",
    "java.util.Deque",
    "java.util.ArrayDeque",
    "java.util.PriorityQueue",
    "java.lang.Iterable",
];

const MAP_TYPES: &[&str] = &[
    "java.util.Map",
    "java.util.HashMap",
    "java.util.LinkedHashMap",
    "java.util.SortedMap",
    "java.util.TreeMap",
    "java.util.Hashtable",
    "java.util.Properties",
    "java.util.concurrent.ConcurrentMap",
    "java.util.concurrent.ConcurrentHashMap",
];

const OPAQUE_TERMINATORS: &[&str] = &["Object", "Timestamp", "Date", "Locale"];

const VALIDATOR_ANNOTATIONS: &[&str] = &[
    "NotNull",
    "NotEmpty",
    "NotBlank",
    "Null",
    "AssertTrue",
    "AssertFalse",
    "Min",
    "Max",
    "DecimalMin",
    "DecimalMax",
    "Digits",
    "Size",
    "Length",
    "Range",
    "Pattern",
    "Email",
    "URL",
    "Past",
    "PastOrPresent",
    "Future",
    "FutureOrPresent",
    "Positive",
    "PositiveOrZero",
    "Negative",
    "NegativeOrZero",
    "CreditCardNumber",
    "Valid",
];

fn owned_set(items: &[&str]) -> IndexSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Static lookup tables consulted by the resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntrospectionConfig {
    /// Simple or qualified names of primitive-like scalars, matched ignoring case.
    pub scalar_types: IndexSet<String>,
    /// Qualified names of collection-like types.
    pub collection_types: IndexSet<String>,
    /// Qualified names of map-like types.
    pub map_types: IndexSet<String>,
    /// Simple names of base types that contribute no fields and stop ascent.
    pub opaque_terminators: IndexSet<String>,
    /// Simple names of annotations carrying a `groups` property.
    pub validator_annotations: IndexSet<String>,
    /// Simple name of the cascading-validation marker.
    pub cascading_marker: String,
    /// Property read from the cascading marker.
    pub value_property: String,
    /// Property read from ordinary validator annotations.
    pub groups_property: String,
    /// Ceiling on superclass recursion.
    pub max_hierarchy_depth: usize,
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            scalar_types: owned_set(SCALAR_TYPES),
            collection_types: owned_set(COLLECTION_TYPES),
            map_types: owned_set(MAP_TYPES),
            opaque_terminators: owned_set(OPAQUE_TERMINATORS),
            validator_annotations: owned_set(VALIDATOR_ANNOTATIONS),
            cascading_marker: "Validated".to_string(),
            value_property: "value".to_string(),
            groups_property: "groups".to_string(),
            max_hierarchy_depth: 64,
        }
    }
}

impl IntrospectionConfig {
    /// Process-wide default tables, built once.
    pub fn global() -> &'static IntrospectionConfig {
        static GLOBAL: OnceLock<IntrospectionConfig> = OnceLock::new();
        GLOBAL.get_or_init(IntrospectionConfig::default)
    }

    /// Parses a YAML config; missing keys keep their defaults.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        parse_document(content, DocumentFormat::Yaml)
    }

    /// Parses a JSON config; missing keys keep their defaults.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        parse_document(content, DocumentFormat::Json)
    }

    /// Loads a config file, YAML or JSON by extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        load_document(path)
    }

    /// Whether `name` (simple or qualified) is a primitive-like scalar.
    /// Both sides are compared ignoring ASCII case.
    pub fn is_scalar(&self, name: &str) -> bool {
        self.scalar_types
            .iter()
            .any(|scalar| scalar.eq_ignore_ascii_case(name))
    }

    /// Whether the qualified name is collection-like. Generic suffixes are ignored.
    pub fn is_collection(&self, qualified_name: &str) -> bool {
        self.collection_types.contains(erase_generics(qualified_name))
    }

    /// Whether the qualified name is map-like. Generic suffixes are ignored.
    pub fn is_map(&self, qualified_name: &str) -> bool {
        self.map_types.contains(erase_generics(qualified_name))
    }

    /// Whether the simple name stops hierarchy ascent.
    pub fn is_opaque_terminator(&self, simple_name: &str) -> bool {
        self.opaque_terminators.contains(simple_name)
    }

    /// Whether the annotation simple name is the cascading marker (case-insensitive).
    pub fn is_cascading_marker(&self, simple_name: &str) -> bool {
        simple_name.eq_ignore_ascii_case(&self.cascading_marker)
    }

    /// Whether the annotation simple name is a recognized validator.
    pub fn is_validator(&self, simple_name: &str) -> bool {
        self.validator_annotations.contains(simple_name)
    }

    /// The kind of a type reference: the parser's own classification when
    /// present, otherwise derived from the tables.
    pub fn kind_of(&self, ty: &TypeDescriptor) -> TypeKind {
        if let Some(kind) = ty.kind {
            return kind;
        }
        if self.is_scalar(&ty.name) || self.is_scalar(ty.qualified()) {
            TypeKind::Scalar
        } else if self.is_map(ty.qualified()) {
            TypeKind::Map
        } else if self.is_collection(ty.qualified()) {
            TypeKind::Collection
        } else {
            TypeKind::Class
        }
    }
}

fn erase_generics(name: &str) -> &str {
    match name.find('<') {
        Some(idx) => name[..idx].trim_end(),
        None => name,
    }
}
