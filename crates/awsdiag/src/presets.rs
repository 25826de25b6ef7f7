//! Preset cluster groupings.
//!
//! Each [`GroupKind`] has a [`GroupPreset`]: a default label and the
//! matching specialized bundle. Presets produce [`ClusterOptions`] that are
//! opened like any other cluster:
//!
//! ```rust
//! use awsdiag::{AwsStyle, ColorMode};
//! use awsdiag_graph::DiagramOptions;
//!
//! let style = AwsStyle::shared(ColorMode::Light);
//! let mut diagram = style.diagram(DiagramOptions::new("Network"));
//! diagram.cluster(style.presets().region().label("us-east-1"), |region| {
//!     region.cluster(style.presets().vpc(), |_vpc| {});
//! });
//!
//! assert_eq!(diagram.clusters()[0].label, "us-east-1");
//! assert_eq!(diagram.clusters()[1].label, "VPC");
//! assert_eq!(diagram.clusters()[1].graph_attr.get("pencolor"), Some("#8C4FFF"));
//! ```
//!
//! Overriding is replacement, not merging: a label or attribute map set
//! on the returned options takes the place of the preset's entirely.

use awsdiag_graph::{AttrMap, ClusterOptions};

use crate::bundle::{Bundles, GroupKind};

/// A named default label and bundle for one kind of cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPreset {
    kind: GroupKind,
    label: &'static str,
    attrs: AttrMap,
}

impl GroupPreset {
    /// The preset for `kind`, using the bundle from `bundles`.
    pub fn new(kind: GroupKind, bundles: &Bundles) -> Self {
        Self {
            kind,
            label: kind.default_label(),
            attrs: bundles.group(kind).clone(),
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    /// Cluster options seeded with this preset's label and bundle.
    pub fn options(&self) -> ClusterOptions {
        ClusterOptions::new(self.label).graph_attr(self.attrs.clone())
    }

    /// Cluster options where each supplied value replaces the preset's.
    pub fn options_with(&self, label: Option<&str>, graph_attr: Option<AttrMap>) -> ClusterOptions {
        ClusterOptions::new(label.unwrap_or(self.label))
            .graph_attr(graph_attr.unwrap_or_else(|| self.attrs.clone()))
    }
}

/// The seven presets for one set of bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPresets {
    presets: [GroupPreset; 7],
}

impl GroupPresets {
    pub fn new(bundles: &Bundles) -> Self {
        Self {
            presets: GroupKind::ALL.map(|kind| GroupPreset::new(kind, bundles)),
        }
    }

    /// The preset for `kind`.
    pub fn get(&self, kind: GroupKind) -> &GroupPreset {
        &self.presets[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupPreset> {
        self.presets.iter()
    }

    pub fn region(&self) -> ClusterOptions {
        self.get(GroupKind::Region).options()
    }

    pub fn availability_zone(&self) -> ClusterOptions {
        self.get(GroupKind::AvailabilityZone).options()
    }

    pub fn security_group(&self) -> ClusterOptions {
        self.get(GroupKind::SecurityGroup).options()
    }

    pub fn vpc(&self) -> ClusterOptions {
        self.get(GroupKind::Vpc).options()
    }

    pub fn public_subnet(&self) -> ClusterOptions {
        self.get(GroupKind::PublicSubnet).options()
    }

    pub fn private_subnet(&self) -> ClusterOptions {
        self.get(GroupKind::PrivateSubnet).options()
    }

    pub fn generic_group(&self) -> ClusterOptions {
        self.get(GroupKind::GenericGroup).options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn presets() -> (Bundles, GroupPresets) {
        let bundles = Bundles::build(&Theme::LIGHT);
        let presets = GroupPresets::new(&bundles);
        (bundles, presets)
    }

    #[test]
    fn test_named_constructors_use_defaults() {
        let (bundles, presets) = presets();
        let cases = [
            (presets.region(), GroupKind::Region, "Region"),
            (presets.availability_zone(), GroupKind::AvailabilityZone, "Availability Zone"),
            (presets.security_group(), GroupKind::SecurityGroup, "Security Group"),
            (presets.vpc(), GroupKind::Vpc, "VPC"),
            (presets.public_subnet(), GroupKind::PublicSubnet, "Public Subnet"),
            (presets.private_subnet(), GroupKind::PrivateSubnet, "Private Subnet"),
            (presets.generic_group(), GroupKind::GenericGroup, ""),
        ];
        for (options, kind, label) in cases {
            assert_eq!(options.label, label);
            assert_eq!(options.graph_attr.as_ref(), Some(bundles.group(kind)));
        }
    }

    #[test]
    fn test_get_matches_kind() {
        let (_, presets) = presets();
        for kind in GroupKind::ALL {
            assert_eq!(presets.get(kind).kind(), kind);
        }
        assert_eq!(presets.iter().count(), 7);
    }

    #[test]
    fn test_explicit_bundle_replaces_preset() {
        let (_, presets) = presets();
        let custom = AttrMap::new().with("pencolor", "#FF0000");
        let options = presets.vpc().graph_attr(custom.clone());
        assert_eq!(options.graph_attr, Some(custom.clone()));
        assert_eq!(options.label, "VPC");

        let options = presets
            .get(GroupKind::Vpc)
            .options_with(None, Some(custom.clone()));
        assert_eq!(options.graph_attr, Some(custom));
    }

    #[test]
    fn test_explicit_label_replaces_preset() {
        let (bundles, presets) = presets();
        let options = presets
            .get(GroupKind::Region)
            .options_with(Some("eu-west-1"), None);
        assert_eq!(options.label, "eu-west-1");
        assert_eq!(options.graph_attr.as_ref(), Some(bundles.group(GroupKind::Region)));
    }

    #[test]
    fn test_empty_bundle_is_still_explicit() {
        let (_, presets) = presets();
        let options = presets
            .get(GroupKind::SecurityGroup)
            .options_with(None, Some(AttrMap::new()));
        assert_eq!(options.graph_attr, Some(AttrMap::new()));
    }

    #[test]
    fn test_presets_are_independent() {
        let (_, presets) = presets();
        let _ = presets.vpc().label("changed").graph_attr(AttrMap::new());
        assert_eq!(presets.vpc().label, "VPC");
        assert_eq!(presets.public_subnet().label, "Public Subnet");
    }
}
