#![deny(missing_docs)]

//! # Inspect Commands
//!
//! Each command resolves one fact about a class in the loaded model and
//! returns it as JSON for the caller to print.

use crate::error::{CliError, CliResult};
use classdoc_core::{ClassDescriptor, ClassLookup, ClassModel, IntrospectionConfig, Introspector};
use serde_json::{json, Value};

/// Arguments for the `fields` command.
#[derive(clap::Args, Debug, Clone)]
pub struct FieldsArgs {
    /// Fully-qualified class name.
    #[clap(long)]
    pub class: String,
}

/// Arguments for the `enum-sample` command.
#[derive(clap::Args, Debug, Clone)]
pub struct EnumSampleArgs {
    /// Fully-qualified enum name.
    #[clap(long)]
    pub class: String,

    /// Return the first constant name instead of a constructor argument.
    #[clap(long)]
    pub name_only: bool,
}

/// Arguments for the `type-args` command.
#[derive(clap::Args, Debug, Clone)]
pub struct TypeArgsArgs {
    /// Fully-qualified class name.
    #[clap(long)]
    pub class: String,

    /// Field whose declared type is inspected.
    #[clap(long)]
    pub field: String,
}

/// Arguments for the `groups` command.
#[derive(clap::Args, Debug, Clone)]
pub struct GroupsArgs {
    /// Fully-qualified class name.
    #[clap(long)]
    pub class: String,

    /// Method name.
    #[clap(long)]
    pub method: String,

    /// Restrict output to one parameter.
    #[clap(long)]
    pub param: Option<String>,
}

/// The loaded model and tables for one invocation.
pub struct Session {
    /// Classes produced by the parser.
    pub model: ClassModel,
    /// Lookup tables.
    pub config: IntrospectionConfig,
}

impl Session {
    fn introspector(&self) -> Introspector<'_, ClassModel> {
        Introspector::new(&self.config, &self.model)
    }

    fn class(&self, qualified_name: &str) -> CliResult<&ClassDescriptor> {
        self.model
            .find_class(qualified_name)
            .ok_or_else(|| CliError::General(format!("Class '{}' not found", qualified_name)))
    }
}

/// Flattened fields as `[{name, type, origin}]`.
pub fn fields(session: &Session, args: &FieldsArgs) -> CliResult<Value> {
    let class = session.class(&args.class)?;
    let fields = session.introspector().fields(class)?;
    let rows: Vec<Value> = fields
        .iter()
        .map(|field| {
            json!({
                "name": field.name,
                "type": field.ty.generic_canonical_name(),
                "origin": field.origin,
            })
        })
        .collect();
    Ok(Value::Array(rows))
}

/// Sample value of an enum, or `null`.
pub fn enum_sample(session: &Session, args: &EnumSampleArgs) -> CliResult<Value> {
    let class = session.class(&args.class)?;
    if !class.is_enum() {
        return Err(CliError::General(format!("'{}' is not an enum", args.class)));
    }
    let sample = session.introspector().enum_sample(class, args.name_only);
    Ok(sample.map(|value| value.to_json()).unwrap_or(Value::Null))
}

/// Canonical names of a field type's bound type arguments.
pub fn type_args(session: &Session, args: &TypeArgsArgs) -> CliResult<Value> {
    let class = session.class(&args.class)?;
    let field = class.field(&args.field).ok_or_else(|| {
        CliError::General(format!("Field '{}' not found on '{}'", args.field, args.class))
    })?;
    let names: Vec<String> = session
        .introspector()
        .type_arguments(Some(&field.ty))
        .into_iter()
        .map(|ty| ty.generic_canonical_name())
        .collect();
    Ok(json!(names))
}

/// Validation groups per parameter, one `{param: [group, ...]}` object per
/// overload of the method, in declaration order.
///
/// With `--param`, overloads lacking that parameter are left out.
pub fn groups(session: &Session, args: &GroupsArgs) -> CliResult<Value> {
    let class = session.class(&args.class)?;
    let introspector = session.introspector();

    let mut overloads = Vec::new();
    let mut found_method = false;
    for method in class.methods_named(&args.method) {
        found_method = true;
        let mut out = serde_json::Map::new();
        for parameter in &method.parameters {
            if args.param.as_deref().is_some_and(|wanted| wanted != parameter.name) {
                continue;
            }
            out.insert(
                parameter.name.clone(),
                json!(introspector.parameter_groups(parameter)),
            );
        }
        if args.param.is_some() && out.is_empty() {
            continue;
        }
        overloads.push(Value::Object(out));
    }

    if !found_method {
        return Err(CliError::General(format!(
            "Method '{}' not found on '{}'",
            args.method, args.class
        )));
    }
    if let Some(wanted) = &args.param {
        if overloads.is_empty() {
            return Err(CliError::General(format!(
                "Parameter '{}' not found on '{}'",
                wanted, args.method
            )));
        }
    }
    Ok(Value::Array(overloads))
}
