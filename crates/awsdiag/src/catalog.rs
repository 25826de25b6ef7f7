//! AWS component catalog.
//!
//! The catalog holds one [`ComponentRegistry`] per AWS category and is the
//! factory diagrams look component types up in. It is built once for a
//! [`ColorMode`]: in dark mode the categories listed in
//! [`DARK_ICON_CATEGORIES`] are run through [`derive_dark_variants`] while
//! the catalog is being assembled, so every lookup afterwards already
//! returns the correctly themed type.

use std::collections::BTreeMap;

use awsdiag_graph::{ComponentRegistry, ComponentType};

use crate::error::{Result, StyleError};
use crate::icons::{derive_dark_variants, IconAsset};
use crate::theme::ColorMode;

/// Provider namespace of every catalog entry.
pub const PROVIDER: &str = "aws";

/// Categories whose icons have dark twins.
pub const DARK_ICON_CATEGORIES: &[&str] = &["general"];

/// Themed component registries, keyed by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    mode: ColorMode,
    registries: BTreeMap<String, ComponentRegistry>,
    dark_icons: Vec<IconAsset>,
}

impl Catalog {
    /// Builds the catalog for `mode`.
    pub fn for_mode(mode: ColorMode) -> Self {
        let mut registries = BTreeMap::new();
        let mut dark_icons = Vec::new();

        for mut registry in base_registries() {
            if DARK_ICON_CATEGORIES.contains(&registry.category()) {
                let report = derive_dark_variants(&mut registry, mode);
                dark_icons.extend(report.derived.into_iter().map(|(_, asset)| asset));
            }
            registries.insert(registry.category().to_string(), registry);
        }

        Self {
            mode,
            registries,
            dark_icons,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// The registry for `category`.
    pub fn registry(&self, category: &str) -> Result<&ComponentRegistry> {
        self.registries
            .get(category)
            .ok_or_else(|| StyleError::UnknownCategory(category.to_string()))
    }

    /// Looks up a component type, e.g. `component("compute", "EC2")`.
    pub fn component(&self, category: &str, name: &str) -> Result<&ComponentType> {
        Ok(self.registry(category)?.require(name)?)
    }

    /// Category names in order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(String::as_str)
    }

    /// Icons swapped for their dark twins while building this catalog.
    pub fn dark_icons(&self) -> &[IconAsset] {
        &self.dark_icons
    }
}

fn base_registries() -> Vec<ComponentRegistry> {
    vec![
        ComponentRegistry::new(PROVIDER, "general")
            .add("Client", Some("client.png"))
            .add("Disk", Some("disk.png"))
            .add("Forums", Some("forums.png"))
            .add("General", Some("general.png"))
            .add("GenericDatabase", Some("generic-database.png"))
            .add("GenericFirewall", Some("generic-firewall.png"))
            .add("GenericOfficeBuilding", Some("generic-office-building.png"))
            .add("GenericSamlToken", Some("generic-saml-token.png"))
            .add("GenericSDK", Some("generic-sdk.png"))
            .add("InternetAlt1", Some("internet-alt1.png"))
            .add("InternetAlt2", Some("internet-alt2.png"))
            .add("InternetGateway", Some("internet-gateway.png"))
            .add("Marketplace", Some("marketplace.png"))
            .add("MobileClient", Some("mobile-client.png"))
            .add("Multimedia", Some("multimedia.png"))
            .add("OfficeBuilding", Some("office-building.png"))
            .add("SamlToken", Some("saml-token.png"))
            .add("SDK", Some("sdk.png"))
            .add("SslPadlock", Some("ssl-padlock.png"))
            .add("TapeStorage", Some("tape-storage.png"))
            .add("Toolkit", Some("toolkit.png"))
            .add("TraditionalServer", Some("traditional-server.png"))
            .add("User", Some("user.png"))
            .add("Users", Some("users.png")),
        ComponentRegistry::new(PROVIDER, "compute")
            .add("EC2", Some("ec2.png"))
            .add("ECS", Some("elastic-container-service.png"))
            .add("EKS", Some("elastic-kubernetes-service.png"))
            .add("Lambda", Some("lambda.png")),
        ComponentRegistry::new(PROVIDER, "network")
            .add("InternetGateway", Some("internet-gateway.png"))
            .add("Nacl", Some("nacl.png"))
            .add("RouteTable", Some("route-table.png")),
        ComponentRegistry::new(PROVIDER, "storage").add("S3", Some("simple-storage-service-s3.png")),
        ComponentRegistry::new(PROVIDER, "database").add("Redshift", Some("redshift.png")),
        ComponentRegistry::new(PROVIDER, "integration")
            .add("SQS", Some("simple-queue-service-sqs.png")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use awsdiag_graph::GraphError;

    #[test]
    fn test_light_catalog_uses_original_icons() {
        let catalog = Catalog::for_mode(ColorMode::Light);
        let user = catalog.component("general", "User").unwrap();
        assert_eq!(user.icon_path().as_deref(), Some("resources/aws/general/user.png"));
        assert!(catalog.dark_icons().is_empty());
    }

    #[test]
    fn test_dark_catalog_swaps_general_icons() {
        let catalog = Catalog::for_mode(ColorMode::Dark);
        let user = catalog.component("general", "User").unwrap();
        assert_eq!(
            user.icon_path().as_deref(),
            Some("resources/aws/general/user-dark.png")
        );
        assert_eq!(
            catalog.dark_icons().len(),
            catalog.registry("general").unwrap().len()
        );
    }

    #[test]
    fn test_dark_catalog_keeps_other_categories() {
        let catalog = Catalog::for_mode(ColorMode::Dark);
        let ec2 = catalog.component("compute", "EC2").unwrap();
        assert_eq!(ec2.icon.as_deref(), Some("ec2.png"));
        let igw = catalog.component("network", "InternetGateway").unwrap();
        assert_eq!(igw.icon.as_deref(), Some("internet-gateway.png"));
    }

    #[test]
    fn test_unknown_category() {
        let catalog = Catalog::for_mode(ColorMode::Light);
        let err = catalog.component("quantum", "Braket").unwrap_err();
        assert!(matches!(err, StyleError::UnknownCategory(c) if c == "quantum"));
    }

    #[test]
    fn test_unknown_component() {
        let catalog = Catalog::for_mode(ColorMode::Light);
        let err = catalog.component("compute", "Mainframe").unwrap_err();
        assert!(matches!(
            err,
            StyleError::Graph(GraphError::UnknownComponent { .. })
        ));
    }

    #[test]
    fn test_categories() {
        let catalog = Catalog::for_mode(ColorMode::Light);
        let categories: Vec<&str> = catalog.categories().collect();
        assert_eq!(
            categories,
            vec!["compute", "database", "general", "integration", "network", "storage"]
        );
    }
}
