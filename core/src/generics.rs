//! # Generic Arguments
//!
//! Reads the concrete type arguments bound to a parameterized reference.
//! Only one level is resolved; callers recurse for nested generics.

use crate::error::{AppError, AppResult};
use crate::model::TypeDescriptor;

/// Type arguments bound to `type_ref`, in declaration order.
///
/// `None` and non-parameterized references yield an empty list.
pub fn actual_type_arguments(type_ref: Option<&TypeDescriptor>) -> Vec<&TypeDescriptor> {
    type_ref
        .map(|ty| ty.arguments.iter().collect())
        .unwrap_or_default()
}

/// The first type argument bound to `type_ref`.
///
/// Fails with [`AppError::Index`] when there is none; check
/// [`actual_type_arguments`] first if the reference may not be generic.
pub fn first_actual_type_argument(type_ref: &TypeDescriptor) -> AppResult<&TypeDescriptor> {
    type_ref.arguments.first().ok_or_else(|| {
        AppError::Index(format!(
            "'{}' has no actual type arguments",
            type_ref.qualified()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of_users() -> TypeDescriptor {
        TypeDescriptor::new("com.example.Page").with_arguments(vec![
            TypeDescriptor::new("com.example.User"),
            TypeDescriptor::new("com.example.User"),
            TypeDescriptor::new("java.util.List")
                .with_arguments(vec![TypeDescriptor::new("java.lang.String")]),
        ])
    }

    #[test]
    fn test_none_is_empty() {
        assert!(actual_type_arguments(None).is_empty());
    }

    #[test]
    fn test_arguments_keep_order_and_duplicates() {
        let ty = page_of_users();
        let names: Vec<&str> = actual_type_arguments(Some(&ty))
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["User", "User", "List"]);
        // Nested arguments stay on the nested reference.
        assert_eq!(actual_type_arguments(Some(&ty))[2].arguments.len(), 1);
    }

    #[test]
    fn test_first_argument() {
        let ty = page_of_users();
        assert_eq!(
            first_actual_type_argument(&ty).unwrap().qualified(),
            "com.example.User"
        );
    }

    #[test]
    fn test_non_generic_reference() {
        let ty = TypeDescriptor::new("com.example.User");
        assert!(actual_type_arguments(Some(&ty)).is_empty());
        let err = first_actual_type_argument(&ty).unwrap_err();
        assert!(matches!(err, AppError::Index(_)));
    }
}
