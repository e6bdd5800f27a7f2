//! # Hierarchy Field Collection
//!
//! Flattens the fields of a class and its ancestors into one ordered list.
//!
//! For each class the result is:
//! `[interface-synthesized fields] + [ancestor fields] + [own declared fields]`.
//! Consumers treat the list as last-wins, so a subclass field shadows an
//! inherited one with the same name.

use crate::config::IntrospectionConfig;
use crate::error::{AppError, AppResult};
use crate::model::{ClassDescriptor, FieldDescriptor, TypeDescriptor};
use crate::names::accessor_property_name;
use crate::registry::ClassLookup;

/// Walks superclass chains through a [`ClassLookup`].
pub struct HierarchyFieldCollector<'a, L: ClassLookup + ?Sized> {
    config: &'a IntrospectionConfig,
    lookup: &'a L,
}

impl<'a, L: ClassLookup + ?Sized> HierarchyFieldCollector<'a, L> {
    /// Creates a collector over the given tables and class model.
    pub fn new(config: &'a IntrospectionConfig, lookup: &'a L) -> Self {
        Self { config, lookup }
    }

    /// Flattened fields of `class`, starting at depth 0.
    pub fn collect(&self, class: &ClassDescriptor) -> AppResult<Vec<FieldDescriptor>> {
        self.collect_fields(Some(class), 0)
    }

    /// Flattened fields of `class`, treating it as sitting `depth` levels
    /// above the class the walk started from.
    ///
    /// `None` and opaque terminators yield an empty list. Fails with
    /// [`AppError::StructuralIntegrity`] once the walk passes the configured
    /// ceiling, which only happens for a cyclic ancestor chain.
    pub fn collect_fields(
        &self,
        class: Option<&ClassDescriptor>,
        depth: usize,
    ) -> AppResult<Vec<FieldDescriptor>> {
        let chain = self.ancestor_chain(class, depth)?;

        // synth(c0) .. synth(cn), then declared(cn) .. declared(c0)
        let mut fields: Vec<FieldDescriptor> = chain
            .iter()
            .flat_map(|class| self.synthesized_fields(class))
            .collect();
        for class in chain.iter().rev() {
            fields.extend(class.fields.iter().cloned());
        }

        if let Some(root) = chain.first() {
            tracing::trace!(
                class = %root.qualified_name,
                depth,
                ancestors = chain.len() - 1,
                count = fields.len(),
                "hierarchy: collected fields"
            );
        }
        Ok(fields)
    }

    /// `class` followed by its resolvable ancestors, stopping before an
    /// opaque terminator or a missing superclass.
    fn ancestor_chain<'c>(
        &'c self,
        class: Option<&'c ClassDescriptor>,
        mut depth: usize,
    ) -> AppResult<Vec<&'c ClassDescriptor>> {
        let mut chain = Vec::new();
        let mut current = class;
        while let Some(class) = current {
            if self.config.is_opaque_terminator(&class.name) {
                tracing::trace!(class = %class.qualified_name, "hierarchy: opaque terminator");
                break;
            }
            if depth > self.config.max_hierarchy_depth {
                tracing::warn!(
                    class = %class.qualified_name,
                    depth,
                    "hierarchy: depth ceiling exceeded"
                );
                return Err(AppError::StructuralIntegrity {
                    class: class.qualified_name.clone(),
                    depth,
                });
            }
            chain.push(class);
            current = class
                .superclass
                .as_ref()
                .and_then(|super_ty| self.resolve_superclass(class, super_ty));
            depth += 1;
        }
        Ok(chain)
    }

    fn resolve_superclass(
        &self,
        class: &ClassDescriptor,
        super_ty: &TypeDescriptor,
    ) -> Option<&'a ClassDescriptor> {
        let resolved = self.lookup.resolve(super_ty);
        if resolved.is_none() && !self.config.is_opaque_terminator(&super_ty.name) {
            if super_ty.qualified_name.is_empty() {
                tracing::warn!(
                    class = %class.qualified_name,
                    superclass = %super_ty.name,
                    "hierarchy: superclass has no qualified name, its fields are skipped"
                );
            } else {
                tracing::debug!(
                    class = %class.qualified_name,
                    superclass = %super_ty.qualified(),
                    "hierarchy: superclass not in model"
                );
            }
        }
        resolved
    }

    /// Virtual properties of an interface, one per `getX` accessor.
    fn synthesized_fields(&self, class: &ClassDescriptor) -> Vec<FieldDescriptor> {
        if !class.is_interface()
            || self.config.is_collection(&class.qualified_name)
            || self.config.is_map(&class.qualified_name)
        {
            return Vec::new();
        }
        class
            .methods
            .iter()
            .filter_map(|method| {
                accessor_property_name(&method.name)
                    .map(|name| FieldDescriptor::synthesized(name, method.returns.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassKind, FieldOrigin, MethodDescriptor};
    use crate::registry::ClassModel;

    fn string() -> TypeDescriptor {
        TypeDescriptor::new("java.lang.String")
    }

    fn class_with_fields(qualified: &str, fields: &[&str]) -> ClassDescriptor {
        let mut class = ClassDescriptor::new(qualified, ClassKind::Class);
        class.fields = fields
            .iter()
            .map(|f| FieldDescriptor::declared(*f, string()))
            .collect();
        class
    }

    fn names(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_none_is_empty() {
        let config = IntrospectionConfig::default();
        let model = ClassModel::new();
        let collector = HierarchyFieldCollector::new(&config, &model);
        assert!(collector.collect_fields(None, 0).unwrap().is_empty());
    }

    #[test]
    fn test_opaque_terminator_is_empty_at_any_depth() {
        let config = IntrospectionConfig::default();
        let model = ClassModel::new();
        let collector = HierarchyFieldCollector::new(&config, &model);
        let object = class_with_fields("java.lang.Object", &["hidden"]);
        assert!(collector.collect_fields(Some(&object), 0).unwrap().is_empty());
        assert!(collector
            .collect_fields(Some(&object), 10_000)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_ancestor_fields_precede_own_fields() {
        let config = IntrospectionConfig::default();
        let mut base = class_with_fields("com.example.Base", &["id", "createdAt"]);
        base.superclass = Some(TypeDescriptor::new("java.lang.Object"));
        let mut user = class_with_fields("com.example.User", &["name", "id"]);
        user.superclass = Some(TypeDescriptor::new("com.example.Base"));

        let model: ClassModel = vec![
            class_with_fields("java.lang.Object", &["monitor"]),
            base,
            user.clone(),
        ]
        .into_iter()
        .collect();
        let collector = HierarchyFieldCollector::new(&config, &model);

        let fields = collector.collect(&user).unwrap();
        assert_eq!(names(&fields), vec!["id", "createdAt", "name", "id"]);
        assert!(fields.iter().all(|f| f.origin == FieldOrigin::Declared));
    }

    #[test]
    fn test_unresolved_superclass_is_absent() {
        let config = IntrospectionConfig::default();
        let model = ClassModel::new();
        let collector = HierarchyFieldCollector::new(&config, &model);
        let mut user = class_with_fields("com.example.User", &["name"]);
        user.superclass = Some(TypeDescriptor::new("com.external.Missing"));
        assert_eq!(names(&collector.collect(&user).unwrap()), vec!["name"]);
    }

    #[test]
    fn test_interface_accessors_synthesize_fields() {
        let config = IntrospectionConfig::default();
        let model = ClassModel::new();
        let collector = HierarchyFieldCollector::new(&config, &model);

        let mut named = ClassDescriptor::new("com.example.Person", ClassKind::Interface);
        named.methods = vec![
            MethodDescriptor::new("getName", string()),
            MethodDescriptor::new("getAge", TypeDescriptor::new("int")),
            MethodDescriptor::new("toString", string()),
            MethodDescriptor::new("get", string()),
        ];

        let fields = collector.collect(&named).unwrap();
        assert_eq!(names(&fields), vec!["name", "age"]);
        assert_eq!(fields[1].ty.name, "int");
        assert!(fields.iter().all(|f| f.origin == FieldOrigin::Synthesized));
    }

    #[test]
    fn test_collection_interface_synthesizes_nothing() {
        let config = IntrospectionConfig::default();
        let model = ClassModel::new();
        let collector = HierarchyFieldCollector::new(&config, &model);

        let mut list = ClassDescriptor::new("java.util.List", ClassKind::Interface);
        list.methods = vec![MethodDescriptor::new("getFirst", TypeDescriptor::new("E"))];
        assert!(collector.collect(&list).unwrap().is_empty());
    }

    #[test]
    fn test_synthesized_before_ancestors_before_declared() {
        let config = IntrospectionConfig::default();
        let base = class_with_fields("com.example.Base", &["baseField"]);
        let mut iface = ClassDescriptor::new("com.example.Odd", ClassKind::Interface);
        iface.methods = vec![MethodDescriptor::new("getVirtual", string())];
        iface.fields = vec![FieldDescriptor::declared("CONSTANT", string())];
        iface.superclass = Some(TypeDescriptor::new("com.example.Base"));

        let model: ClassModel = vec![base].into_iter().collect();
        let collector = HierarchyFieldCollector::new(&config, &model);
        let fields = collector.collect(&iface).unwrap();
        assert_eq!(names(&fields), vec!["virtual", "baseField", "CONSTANT"]);
    }

    #[test]
    fn test_cycle_fails_with_structural_integrity() {
        let config = IntrospectionConfig {
            max_hierarchy_depth: 8,
            ..IntrospectionConfig::default()
        };
        let mut a = class_with_fields("com.example.A", &["a"]);
        a.superclass = Some(TypeDescriptor::new("com.example.B"));
        let mut b = class_with_fields("com.example.B", &["b"]);
        b.superclass = Some(TypeDescriptor::new("com.example.A"));

        let model: ClassModel = vec![a.clone(), b].into_iter().collect();
        let collector = HierarchyFieldCollector::new(&config, &model);
        match collector.collect(&a) {
            Err(AppError::StructuralIntegrity { depth, .. }) => assert_eq!(depth, 9),
            other => panic!("expected structural integrity error, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_with_huge_ceiling_does_not_overflow_stack() {
        let config = IntrospectionConfig::from_yaml_str("max_hierarchy_depth: 1000000").unwrap();
        let mut a = class_with_fields("com.example.A", &["a"]);
        a.superclass = Some(TypeDescriptor::new("com.example.B"));
        let mut b = class_with_fields("com.example.B", &["b"]);
        b.superclass = Some(TypeDescriptor::new("com.example.A"));

        let model: ClassModel = vec![a.clone(), b].into_iter().collect();
        let collector = HierarchyFieldCollector::new(&config, &model);
        match collector.collect(&a) {
            Err(AppError::StructuralIntegrity { depth, .. }) => assert_eq!(depth, 1_000_001),
            other => panic!("expected structural integrity error, got {:?}", other.map(|f| f.len())),
        }
    }

    #[test]
    fn test_deep_acyclic_chain_within_ceiling() {
        let config = IntrospectionConfig::default();
        let classes: Vec<ClassDescriptor> = (0..40)
            .map(|i| {
                let field = format!("f{}", i);
                let mut class = class_with_fields(&format!("com.example.L{}", i), &[field.as_str()]);
                if i > 0 {
                    class.superclass = Some(TypeDescriptor::new(format!("com.example.L{}", i - 1)));
                }
                class
            })
            .collect();
        let leaf = classes[39].clone();
        let model: ClassModel = classes.into_iter().collect();
        let collector = HierarchyFieldCollector::new(&config, &model);

        let fields = collector.collect(&leaf).unwrap();
        assert_eq!(fields.len(), 40);
        assert_eq!(fields[0].name, "f0");
        assert_eq!(fields[39].name, "f39");
    }

    #[test]
    fn test_simple_name_superclass_is_skipped() {
        let config = IntrospectionConfig::default();
        let mut user = class_with_fields("com.example.User", &["name"]);
        user.superclass = Some(TypeDescriptor {
            name: "Base".into(),
            qualified_name: String::new(),
            kind: None,
            arguments: vec![],
        });
        let model: ClassModel = vec![class_with_fields("com.example.Base", &["id"])]
            .into_iter()
            .collect();
        let collector = HierarchyFieldCollector::new(&config, &model);
        assert_eq!(names(&collector.collect(&user).unwrap()), vec!["name"]);
    }

    #[test]
    fn test_collection_is_idempotent() {
        let config = IntrospectionConfig::default();
        let mut user = class_with_fields("com.example.User", &["name"]);
        user.superclass = Some(TypeDescriptor::new("com.example.Base"));
        let model: ClassModel = vec![class_with_fields("com.example.Base", &["id"])]
            .into_iter()
            .collect();
        let collector = HierarchyFieldCollector::new(&config, &model);
        assert_eq!(
            collector.collect(&user).unwrap(),
            collector.collect(&user).unwrap()
        );
    }
}
