//! # Descriptor Model
//!
//! Read-only views of classes, members, annotations and type references as
//! handed over by the source-parsing collaborator. Nothing in this crate
//! mutates them.

use crate::names::simple_name;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Closed classification of a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Primitive-like scalar (numbers, strings, booleans, dates...).
    Scalar,
    /// Collection-like container (lists, sets...).
    Collection,
    /// Map-like container.
    Map,
    /// A plain class.
    Class,
    /// An interface.
    Interface,
    /// An enum.
    Enum,
}

/// A reference to a type, optionally parameterized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Simple name (e.g. `List`).
    pub name: String,
    /// Fully-qualified name (e.g. `java.util.List`).
    #[serde(default)]
    pub qualified_name: String,
    /// Classification, when the parser already resolved it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeKind>,
    /// Bound type arguments in declaration order. Empty when not parameterized.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Builds a reference from a qualified name; the simple name is derived.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: simple_name(&qualified_name).to_string(),
            qualified_name,
            kind: None,
            arguments: Vec::new(),
        }
    }

    /// Sets the resolved kind.
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Binds type arguments.
    pub fn with_arguments(mut self, arguments: Vec<TypeDescriptor>) -> Self {
        self.arguments = arguments;
        self
    }

    /// The qualified name, falling back to the simple name when the parser
    /// left it blank.
    pub fn qualified(&self) -> &str {
        if self.qualified_name.is_empty() {
            &self.name
        } else {
            &self.qualified_name
        }
    }

    /// Whether any type arguments are bound.
    pub fn is_parameterized(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Canonical name including generic parameterization,
    /// e.g. `java.util.Map<java.lang.String, com.example.User>`.
    pub fn generic_canonical_name(&self) -> String {
        if !self.is_parameterized() {
            return self.qualified().to_string();
        }
        let args: Vec<String> = self
            .arguments
            .iter()
            .map(TypeDescriptor::generic_canonical_name)
            .collect();
        format!("{}<{}>", self.qualified(), args.join(", "))
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generic_canonical_name())
    }
}

/// Declaration kind of a class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    /// A concrete or abstract class.
    #[default]
    Class,
    /// An interface.
    Interface,
    /// An enum.
    Enum,
}

/// Where a field descriptor came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    /// Present in source.
    #[default]
    Declared,
    /// Derived from an interface accessor; never written back to the model.
    Synthesized,
}

/// A field of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Declared or synthesized.
    #[serde(default)]
    pub origin: FieldOrigin,
}

impl FieldDescriptor {
    /// A field as declared in source.
    pub fn declared(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            origin: FieldOrigin::Declared,
        }
    }

    /// A virtual field derived from an accessor method.
    pub fn synthesized(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            origin: FieldOrigin::Synthesized,
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Annotations in declaration order.
    #[serde(default)]
    pub annotations: Vec<AnnotationDescriptor>,
}

/// A method of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name.
    pub name: String,
    /// Declared return type.
    pub returns: TypeDescriptor,
    /// Annotations in declaration order.
    #[serde(default)]
    pub annotations: Vec<AnnotationDescriptor>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl MethodDescriptor {
    /// A method without parameters or annotations.
    pub fn new(name: impl Into<String>, returns: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            returns,
            annotations: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Looks up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// One constant of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstant {
    /// Constant name.
    pub name: String,
    /// Declared type (normally the enum itself).
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Constructor arguments as source literal text, if the constant has an
    /// argument list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
}

/// The value of an annotation property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationValue {
    /// A class literal such as `GroupA.class`.
    TypeRef(TypeDescriptor),
    /// An array initializer `{...}`.
    List(Vec<AnnotationValue>),
    /// Any other expression, kept as source text.
    Literal(String),
}

/// An annotation applied to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationDescriptor {
    /// The annotation type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Properties keyed by name.
    #[serde(default)]
    pub properties: IndexMap<String, AnnotationValue>,
}

impl AnnotationDescriptor {
    /// An annotation without properties.
    pub fn new(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            properties: IndexMap::new(),
        }
    }

    /// Adds a property.
    pub fn with_property(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Simple name of the annotation type.
    pub fn simple_name(&self) -> &str {
        &self.ty.name
    }

    /// Raw property lookup.
    pub fn property(&self, name: &str) -> Option<&AnnotationValue> {
        self.properties.get(name)
    }

    /// Typed lookup of a class-literal list property.
    ///
    /// Returns `None` when the property is absent or holds anything other than
    /// class literals. A bare class literal counts as a one-element list.
    pub fn type_refs(&self, name: &str) -> Option<Vec<&TypeDescriptor>> {
        match self.property(name)? {
            AnnotationValue::TypeRef(ty) => Some(vec![ty]),
            AnnotationValue::List(items) => items
                .iter()
                .map(|item| match item {
                    AnnotationValue::TypeRef(ty) => Some(ty),
                    _ => None,
                })
                .collect(),
            AnnotationValue::Literal(_) => None,
        }
    }
}

/// The static shape of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Simple name.
    pub name: String,
    /// Fully-qualified name.
    pub qualified_name: String,
    /// Class, interface or enum.
    #[serde(default)]
    pub kind: ClassKind,
    /// Declared fields in source order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Declared methods in source order.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Class-level annotations.
    #[serde(default)]
    pub annotations: Vec<AnnotationDescriptor>,
    /// Direct superclass reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<TypeDescriptor>,
    /// Enum constants in declaration order.
    #[serde(default)]
    pub enum_constants: Vec<EnumConstant>,
    /// Bound type arguments, when this descriptor stands for a parameterized use.
    #[serde(default)]
    pub type_arguments: Vec<TypeDescriptor>,
}

impl ClassDescriptor {
    /// An empty class of the given kind.
    pub fn new(qualified_name: impl Into<String>, kind: ClassKind) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: simple_name(&qualified_name).to_string(),
            qualified_name,
            kind,
            fields: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
            superclass: None,
            enum_constants: Vec::new(),
            type_arguments: Vec::new(),
        }
    }

    /// Whether this is an interface.
    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Whether this is an enum.
    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up the first declared method with the given name.
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Every overload named `name`, in declaration order.
    pub fn methods_named<'s>(
        &'s self,
        name: &'s str,
    ) -> impl Iterator<Item = &'s MethodDescriptor> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// A reference to this class as a type.
    pub fn as_type(&self) -> TypeDescriptor {
        let kind = match self.kind {
            ClassKind::Class => TypeKind::Class,
            ClassKind::Interface => TypeKind::Interface,
            ClassKind::Enum => TypeKind::Enum,
        };
        TypeDescriptor {
            name: self.name.clone(),
            qualified_name: self.qualified_name.clone(),
            kind: Some(kind),
            arguments: self.type_arguments.clone(),
        }
    }
}
