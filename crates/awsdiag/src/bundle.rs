//! Attribute bundles derived from a [`Theme`].
//!
//! [`Bundles::build`] produces the four general-purpose bundles (graph,
//! cluster, node, edge) and one specialized cluster bundle per
//! [`GroupKind`]. Each group bundle is the generic cluster bundle merged
//! with that group's overrides: a border color from the brand palette and,
//! for some groups, a line style or label justification.
//!
//! Attribute names are Graphviz's and must stay exactly as written here;
//! the renderer looks them up verbatim.
//!
//! All bundles of one [`Bundles`] value come from the same theme, so light
//! and dark colors are never mixed.

use std::collections::BTreeMap;

use awsdiag_graph::AttrMap;
use serde::Serialize;

use crate::palette::BrandColor;
use crate::theme::Theme;

/// The seven cluster groupings with AWS-specific styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Region,
    AvailabilityZone,
    SecurityGroup,
    Vpc,
    PublicSubnet,
    PrivateSubnet,
    GenericGroup,
}

impl GroupKind {
    pub const ALL: [GroupKind; 7] = [
        GroupKind::Region,
        GroupKind::AvailabilityZone,
        GroupKind::SecurityGroup,
        GroupKind::Vpc,
        GroupKind::PublicSubnet,
        GroupKind::PrivateSubnet,
        GroupKind::GenericGroup,
    ];

    /// Identifier used in exported documents.
    pub const fn name(self) -> &'static str {
        match self {
            GroupKind::Region => "region",
            GroupKind::AvailabilityZone => "availability_zone",
            GroupKind::SecurityGroup => "security_group",
            GroupKind::Vpc => "vpc",
            GroupKind::PublicSubnet => "public_subnet",
            GroupKind::PrivateSubnet => "private_subnet",
            GroupKind::GenericGroup => "generic_group",
        }
    }

    /// Label a preset cluster of this kind gets when none is given.
    ///
    /// Generic groups have no meaningful default and start unlabeled.
    pub const fn default_label(self) -> &'static str {
        match self {
            GroupKind::Region => "Region",
            GroupKind::AvailabilityZone => "Availability Zone",
            GroupKind::SecurityGroup => "Security Group",
            GroupKind::Vpc => "VPC",
            GroupKind::PublicSubnet => "Public Subnet",
            GroupKind::PrivateSubnet => "Private Subnet",
            GroupKind::GenericGroup => "",
        }
    }

    /// Border color of this kind.
    pub const fn border(self) -> BrandColor {
        match self {
            GroupKind::Region | GroupKind::AvailabilityZone | GroupKind::PrivateSubnet => {
                BrandColor::Orbit
            }
            GroupKind::SecurityGroup => BrandColor::Mars,
            GroupKind::Vpc => BrandColor::Galaxy,
            GroupKind::PublicSubnet => BrandColor::Endor,
            GroupKind::GenericGroup => BrandColor::Gray,
        }
    }

    /// Attributes this kind layers over the generic cluster bundle.
    pub fn overrides(self) -> AttrMap {
        let attrs = AttrMap::new().with("pencolor", self.border().hex());
        match self {
            GroupKind::Region => attrs.with("style", "dotted"),
            GroupKind::AvailabilityZone => attrs.with("style", "dashed"),
            GroupKind::SecurityGroup => attrs.with("labeljust", "c"),
            GroupKind::GenericGroup => attrs.with("labeljust", "c").with("style", "dashed"),
            GroupKind::Vpc | GroupKind::PublicSubnet | GroupKind::PrivateSubnet => attrs,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Every attribute bundle for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundles {
    theme: Theme,
    graph: AttrMap,
    cluster: AttrMap,
    node: AttrMap,
    edge: AttrMap,
    groups: [AttrMap; 7],
}

impl Bundles {
    /// Builds all bundles from `theme`.
    pub fn build(theme: &Theme) -> Self {
        let graph = AttrMap::from_pairs([
            ("fontsize", "24"),
            ("fontcolor", theme.foreground),
            ("bgcolor", theme.background),
            ("ranksep", "1.0"),
        ]);

        let cluster = AttrMap::from_pairs([
            ("bgcolor", theme.background),
            ("fillcolor", theme.background),
            ("labeljust", "l"),
            ("margin", "24"),
            ("fontcolor", theme.foreground),
            ("fontname", "Arial"),
            ("fontsize", "18"),
            ("style", "diagonals"),
            ("penwidth", "3"),
        ]);

        let node = AttrMap::from_pairs([
            ("fillcolor", theme.background),
            ("fontcolor", theme.foreground),
            ("fontname", "Arial"),
        ]);

        let edge = AttrMap::from_pairs([
            ("fillcolor", theme.arrow_color),
            ("color", theme.arrow_color),
            ("fontcolor", theme.foreground),
            ("labelfontcolor", theme.foreground),
            ("arrowhead", "vee"),
            ("arrowsize", "1.25"),
            ("style", "bold"),
        ]);

        let groups = GroupKind::ALL.map(|kind| cluster.merge(&kind.overrides()));

        Self {
            theme: *theme,
            graph,
            cluster,
            node,
            edge,
            groups,
        }
    }

    /// The theme these bundles were built from.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn graph(&self) -> &AttrMap {
        &self.graph
    }

    pub fn cluster(&self) -> &AttrMap {
        &self.cluster
    }

    pub fn node(&self) -> &AttrMap {
        &self.node
    }

    pub fn edge(&self) -> &AttrMap {
        &self.edge
    }

    /// The specialized cluster bundle for `kind`.
    pub fn group(&self, kind: GroupKind) -> &AttrMap {
        &self.groups[kind.index()]
    }

    /// A serializable view of every bundle, keyed by name.
    pub fn document(&self) -> BundleDocument<'_> {
        BundleDocument {
            graph: &self.graph,
            cluster: &self.cluster,
            node: &self.node,
            edge: &self.edge,
            groups: GroupKind::ALL
                .iter()
                .map(|&kind| (kind.name(), self.group(kind)))
                .collect(),
        }
    }
}

/// Export shape of [`Bundles`].
#[derive(Debug, Serialize)]
pub struct BundleDocument<'a> {
    pub graph: &'a AttrMap,
    pub cluster: &'a AttrMap,
    pub node: &'a AttrMap,
    pub edge: &'a AttrMap,
    pub groups: BTreeMap<&'static str, &'a AttrMap>,
}
