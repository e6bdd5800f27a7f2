//! # Class Registry
//!
//! The parser's in-memory model for one documentation run, indexed by
//! qualified name. Superclass references are resolved through [`ClassLookup`].

use crate::error::AppResult;
use crate::loader::{load_document, parse_document, DocumentFormat};
use crate::model::{ClassDescriptor, TypeDescriptor};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resolves qualified class names to descriptors.
pub trait ClassLookup {
    /// Finds a class by fully-qualified name.
    fn find_class(&self, qualified_name: &str) -> Option<&ClassDescriptor>;

    /// Resolves a type reference to the class it names, ignoring type arguments.
    fn resolve(&self, ty: &TypeDescriptor) -> Option<&ClassDescriptor> {
        self.find_class(ty.qualified())
    }
}

/// Serialized shape of a model dump.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ModelDump {
    #[serde(default)]
    classes: Vec<ClassDescriptor>,
}

/// All classes known to one run, in the order the parser produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ModelDump", into = "ModelDump")]
pub struct ClassModel {
    classes: IndexMap<String, ClassDescriptor>,
}

impl From<ModelDump> for ClassModel {
    fn from(dump: ModelDump) -> Self {
        dump.classes.into_iter().collect()
    }
}

impl From<ClassModel> for ModelDump {
    fn from(model: ClassModel) -> Self {
        ModelDump {
            classes: model.classes.into_values().collect(),
        }
    }
}

impl FromIterator<ClassDescriptor> for ClassModel {
    fn from_iter<I: IntoIterator<Item = ClassDescriptor>>(iter: I) -> Self {
        let mut model = ClassModel::new();
        for class in iter {
            model.insert(class);
        }
        model
    }
}

impl ClassModel {
    /// An empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class, replacing any previous entry with the same qualified name.
    pub fn insert(&mut self, class: ClassDescriptor) {
        if self.classes.contains_key(&class.qualified_name) {
            tracing::debug!(class = %class.qualified_name, "registry: replacing duplicate class");
        }
        self.classes.insert(class.qualified_name.clone(), class);
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the model holds no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates classes in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    /// Parses a JSON model dump (`{"classes": [...]}`).
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        parse_document(content, DocumentFormat::Json)
    }

    /// Parses a YAML model dump.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        parse_document(content, DocumentFormat::Yaml)
    }

    /// Loads a model dump, YAML or JSON by extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let model: ClassModel = load_document(path)?;
        tracing::debug!(classes = model.len(), "registry: model loaded");
        Ok(model)
    }
}

impl ClassLookup for ClassModel {
    fn find_class(&self, qualified_name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(qualified_name)
    }
}
