//! The resolved diagram style.
//!
//! [`AwsStyle`] bundles everything derived from the color mode: the theme
//! triple, the attribute bundles, the group presets and the themed
//! component catalog. It is immutable once built; hand it around by
//! reference or `Arc`.
//!
//! [`AwsStyle::global`] resolves the style from the process environment the
//! first time it is called and returns the same instance for the rest of
//! the process.

use std::sync::Arc;

use awsdiag_graph::{AttrMap, ComponentType};
use once_cell::sync::Lazy;

use crate::bundle::{Bundles, GroupKind};
use crate::catalog::Catalog;
use crate::env::{EnvReader, RealEnv};
use crate::error::Result;
use crate::presets::GroupPresets;
use crate::theme::{resolve_color_mode, ColorMode, Theme};

static GLOBAL_STYLE: Lazy<Arc<AwsStyle>> = Lazy::new(|| Arc::new(AwsStyle::from_env()));

/// Theme, bundles, presets and catalog for one color mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsStyle {
    mode: ColorMode,
    theme: Theme,
    bundles: Bundles,
    presets: GroupPresets,
    catalog: Catalog,
}

impl AwsStyle {
    /// Builds the style for `mode`.
    pub fn for_mode(mode: ColorMode) -> Self {
        let theme = Theme::for_mode(mode);
        let bundles = Bundles::build(&theme);
        let presets = GroupPresets::new(&bundles);
        let catalog = Catalog::for_mode(mode);
        Self {
            mode,
            theme,
            bundles,
            presets,
            catalog,
        }
    }

    /// [`for_mode`](Self::for_mode), wrapped for sharing with diagrams.
    pub fn shared(mode: ColorMode) -> Arc<Self> {
        Arc::new(Self::for_mode(mode))
    }

    /// Builds the style for the mode `env` selects.
    pub fn from_env_reader(env: &dyn EnvReader) -> Self {
        Self::for_mode(resolve_color_mode(env))
    }

    /// Builds the style for the mode the process environment selects.
    pub fn from_env() -> Self {
        Self::from_env_reader(&RealEnv)
    }

    /// The process-wide style, resolved from the environment on first use.
    pub fn global() -> Arc<Self> {
        Arc::clone(&*GLOBAL_STYLE)
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn bundles(&self) -> &Bundles {
        &self.bundles
    }

    pub fn graph_attr(&self) -> &AttrMap {
        self.bundles.graph()
    }

    pub fn cluster_attr(&self) -> &AttrMap {
        self.bundles.cluster()
    }

    pub fn node_attr(&self) -> &AttrMap {
        self.bundles.node()
    }

    pub fn edge_attr(&self) -> &AttrMap {
        self.bundles.edge()
    }

    /// The specialized bundle for `kind`.
    pub fn group(&self, kind: GroupKind) -> &AttrMap {
        self.bundles.group(kind)
    }

    pub fn presets(&self) -> &GroupPresets {
        &self.presets
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Looks up a themed component type, e.g. `component("general", "User")`.
    pub fn component(&self, category: &str, name: &str) -> Result<&ComponentType> {
        self.catalog.component(category, name)
    }

    /// Exports every bundle as pretty JSON.
    pub fn bundles_to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.bundles.document())?)
    }

    /// Exports every bundle as YAML.
    pub fn bundles_to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.bundles.document())?)
    }
}
