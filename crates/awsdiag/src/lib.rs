//! # awsdiag - AWS Styling for Architecture Diagrams
//!
//! `awsdiag` gives diagrams built with [`awsdiag_graph`] the AWS
//! architecture-diagram look: the brand palette, a light or dark theme,
//! dark icon variants, and preset clusters for regions, VPCs, subnets and
//! security groups.
//!
//! ## Core Concepts
//!
//! - [`ColorMode`] / [`Theme`]: light or dark, chosen once from `AWS_DARK`
//! - [`BrandColor`]: the nine fixed AWS colors
//! - [`Bundles`]: graph, cluster, node, edge and per-[`GroupKind`] attribute maps
//! - [`derive_dark_variants`]: swaps raster icons for their `-dark` twins
//! - [`AwsStyle`]: all of the above resolved for one mode, and the
//!   [`Defaults`](awsdiag_graph::Defaults) hook that injects the bundles
//! - [`GroupPresets`]: the seven preset cluster constructors
//!
//! ## Quick Start
//!
//! ```rust
//! use awsdiag::{AwsStyle, ColorMode};
//! use awsdiag_graph::{DiagramOptions, EdgeOptions};
//!
//! let style = AwsStyle::shared(ColorMode::Light);
//! let user_type = style.component("general", "User").unwrap().clone();
//! let ec2_type = style.component("compute", "EC2").unwrap().clone();
//!
//! let mut diagram = style.diagram(DiagramOptions::new("EC2 to S3").show(false));
//! let user = diagram.node(&user_type, "External User");
//! let ec2 = diagram.cluster(style.presets().vpc(), |vpc| {
//!     vpc.cluster(style.presets().security_group(), |sg| sg.node(&ec2_type, "EC2 Instance"))
//! });
//! diagram.edge(user, ec2, EdgeOptions::labeled("HTTPS")).unwrap();
//!
//! assert_eq!(diagram.graph_attr().get("bgcolor"), Some("#FFFFFF"));
//! assert_eq!(diagram.clusters()[0].graph_attr.get("pencolor"), Some("#8C4FFF"));
//! ```
//!
//! ## Dark Mode
//!
//! Set `AWS_DARK=1` (or `true`, any case) before the first call to
//! [`AwsStyle::global`] or [`diagram`]. The choice is read once and holds
//! for the rest of the process. Tests and tools that need both modes build
//! explicit styles with [`AwsStyle::for_mode`].

mod bundle;
mod catalog;
mod env;
mod error;
mod icons;
mod inject;
mod palette;
mod presets;
mod style;
mod theme;

pub use bundle::{BundleDocument, Bundles, GroupKind};
pub use catalog::{Catalog, DARK_ICON_CATEGORIES, PROVIDER};
pub use env::{EnvReader, MockEnv, RealEnv};
pub use error::{Result, StyleError};
pub use icons::{
    derive_dark_path, derive_dark_variants, Derivation, DerivationReport, IconAsset, SkipReason,
    DARK_SUFFIX, RASTER_EXTENSIONS,
};
pub use inject::diagram;
pub use palette::BrandColor;
pub use presets::{GroupPreset, GroupPresets};
pub use style::AwsStyle;
pub use theme::{detect_color_mode, is_truthy, resolve_color_mode, ColorMode, Theme, DARK_MODE_ENV};
