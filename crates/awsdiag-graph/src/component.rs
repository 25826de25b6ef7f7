//! Component types and the registries that hold them.
//!
//! A [`ComponentType`] is the kind of thing a node depicts (an EC2 instance,
//! a user, an S3 bucket). Besides its name it may carry an icon file name,
//! which the renderer resolves relative to the type's resource directory.
//!
//! Component types are grouped into category-scoped [`ComponentRegistry`]s.
//! A registry is the single place node factories look types up, so a layer
//! above this crate can swap a type for a variant (for example one that
//! points at a different icon) by rebinding the registry entry, without any
//! caller having to know.
//!
//! # Example
//!
//! ```rust
//! use awsdiag_graph::ComponentRegistry;
//!
//! let general = ComponentRegistry::new("aws", "general")
//!     .add("User", Some("user.png"))
//!     .add("Toolkit", Some("toolkit.png"));
//!
//! let user = general.get("User").unwrap();
//! assert_eq!(user.icon_path().as_deref(), Some("resources/aws/general/user.png"));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// A kind of diagram component and its icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentType {
    /// Provider namespace (e.g. "aws").
    pub provider: String,
    /// Category within the provider (e.g. "compute").
    pub category: String,
    /// Type name (e.g. "EC2").
    pub name: String,
    /// Icon file name, relative to the type's resource directory.
    pub icon: Option<String>,
}

impl ComponentType {
    /// Creates a component type.
    pub fn new(
        provider: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        icon: Option<&str>,
    ) -> Self {
        Self {
            provider: provider.into(),
            category: category.into(),
            name: name.into(),
            icon: icon.map(str::to_string),
        }
    }

    /// Returns a copy of this type pointing at a different icon.
    ///
    /// All other fields are carried over unchanged.
    pub fn with_icon(&self, icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..self.clone()
        }
    }

    /// Directory the icon file lives in, e.g. `resources/aws/general`.
    pub fn icon_dir(&self) -> String {
        format!("resources/{}/{}", self.provider, self.category)
    }

    /// Full icon path, or `None` when the type has no (or an empty) icon.
    pub fn icon_path(&self) -> Option<String> {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => Some(format!("{}/{}", self.icon_dir(), icon)),
            _ => None,
        }
    }
}

/// A category-scoped collection of component types, keyed by type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRegistry {
    provider: String,
    category: String,
    types: BTreeMap<String, ComponentType>,
}

impl ComponentRegistry {
    /// Creates an empty registry for `provider`/`category`.
    pub fn new(provider: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            category: category.into(),
            types: BTreeMap::new(),
        }
    }

    /// Registers a type by name and icon, returning `self` for chaining.
    pub fn add(mut self, name: &str, icon: Option<&str>) -> Self {
        let component = ComponentType::new(&self.provider, &self.category, name, icon);
        self.types.insert(name.to_string(), component);
        self
    }

    /// Registers a fully built type by mutable reference.
    pub fn insert(&mut self, component: ComponentType) {
        self.types.insert(component.name.clone(), component);
    }

    /// Binds `name` to a different type, returning the one it replaces.
    pub fn rebind(&mut self, name: &str, component: ComponentType) -> Option<ComponentType> {
        self.types.insert(name.to_string(), component)
    }

    /// Looks up a type by name.
    pub fn get(&self, name: &str) -> Option<&ComponentType> {
        self.types.get(name)
    }

    /// Looks up a type by name, failing if it is not registered.
    pub fn require(&self, name: &str) -> Result<&ComponentType> {
        self.get(name).ok_or_else(|| GraphError::UnknownComponent {
            category: self.category.clone(),
            name: name.to_string(),
        })
    }

    /// Iterates `(name, type)` entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentType)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Provider namespace of this registry.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Category of this registry.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_icon_path() {
        let ec2 = ComponentType::new("aws", "compute", "EC2", Some("ec2.png"));
        assert_eq!(ec2.icon_dir(), "resources/aws/compute");
        assert_eq!(
            ec2.icon_path(),
            Some("resources/aws/compute/ec2.png".to_string())
        );
    }

    #[test]
    fn test_component_without_icon_has_no_path() {
        let blank = ComponentType::new("aws", "general", "Blank", None);
        assert_eq!(blank.icon_path(), None);
        let empty = ComponentType::new("aws", "general", "Empty", Some(""));
        assert_eq!(empty.icon_path(), None);
    }

    #[test]
    fn test_with_icon_keeps_identity() {
        let user = ComponentType::new("aws", "general", "User", Some("user.png"));
        let dark = user.with_icon("user-dark.png");
        assert_eq!(dark.name, "User");
        assert_eq!(dark.category, "general");
        assert_eq!(dark.icon.as_deref(), Some("user-dark.png"));
        assert_eq!(user.icon.as_deref(), Some("user.png"));
    }

    #[test]
    fn test_registry_add_and_get() {
        let registry = ComponentRegistry::new("aws", "storage").add("S3", Some("simple-storage-service-s3.png"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        let s3 = registry.get("S3").unwrap();
        assert_eq!(s3.provider, "aws");
        assert_eq!(s3.category, "storage");
    }

    #[test]
    fn test_registry_require_unknown() {
        let registry = ComponentRegistry::new("aws", "storage");
        let err = registry.require("Glacier").unwrap_err();
        assert!(matches!(err, GraphError::UnknownComponent { .. }));
    }

    #[test]
    fn test_registry_rebind_returns_previous() {
        let mut registry = ComponentRegistry::new("aws", "general").add("User", Some("user.png"));
        let replacement = registry.get("User").unwrap().with_icon("user-dark.png");
        let previous = registry.rebind("User", replacement).unwrap();
        assert_eq!(previous.icon.as_deref(), Some("user.png"));
        assert_eq!(
            registry.get("User").unwrap().icon.as_deref(),
            Some("user-dark.png")
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_iter_is_name_ordered() {
        let registry = ComponentRegistry::new("aws", "compute")
            .add("Lambda", Some("lambda.png"))
            .add("EC2", Some("ec2.png"));
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["EC2", "Lambda"]);
    }
}
