//! Dark icon variants.
//!
//! The light icons of some AWS components (the `general` category: users,
//! clients, servers) are black line art that disappears on a black
//! background. Each of them ships a dark twin next to it whose file name
//! carries a `-dark` suffix before the extension:
//!
//! ```text
//! user.png  ->  user-dark.png
//! ```
//!
//! [`derive_dark_variants`] walks a [`ComponentRegistry`] and rebinds every
//! entry with a raster icon to a copy pointing at the dark twin. Entries
//! without an icon, with an empty icon, or with a non-raster icon (`.svg`)
//! are left bound to their original type.
//!
//! # Idempotence
//!
//! Derivation never suffixes twice. An icon whose stem already ends in
//! `-dark` is left alone and reported, so running derivation over an
//! already-derived registry is a no-op apart from a warning, which points
//! at an initialization-order bug in the caller.
//!
//! ```rust
//! use awsdiag::{derive_dark_variants, ColorMode};
//! use awsdiag_graph::ComponentRegistry;
//!
//! let mut general = ComponentRegistry::new("aws", "general")
//!     .add("User", Some("user.png"))
//!     .add("Logo", Some("logo.svg"));
//!
//! let report = derive_dark_variants(&mut general, ColorMode::Dark);
//! assert_eq!(report.derived.len(), 1);
//! assert_eq!(general.get("User").unwrap().icon.as_deref(), Some("user-dark.png"));
//! assert_eq!(general.get("Logo").unwrap().icon.as_deref(), Some("logo.svg"));
//!
//! let again = derive_dark_variants(&mut general, ColorMode::Dark);
//! assert!(again.derived.is_empty());
//! assert_eq!(general.get("User").unwrap().icon.as_deref(), Some("user-dark.png"));
//! ```

use awsdiag_graph::ComponentRegistry;
use serde::Serialize;

use crate::theme::ColorMode;

/// Suffix inserted before the extension of a dark icon.
pub const DARK_SUFFIX: &str = "-dark";

/// Icon extensions that have dark twins.
pub const RASTER_EXTENSIONS: &[&str] = &[".png"];

/// A light icon and its derived dark twin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconAsset {
    pub original: String,
    pub dark: String,
}

impl IconAsset {
    /// Maps a dark icon path back to its light original.
    ///
    /// Returns `None` if `dark` does not carry the dark suffix.
    pub fn light_path(dark: &str) -> Option<String> {
        let ext = raster_extension(dark)?;
        let stem = &dark[..dark.len() - ext.len()];
        let light_stem = stem.strip_suffix(DARK_SUFFIX)?;
        Some(format!("{}{}", light_stem, ext))
    }
}

/// Why an entry kept its original icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoIcon,
    EmptyPath,
    NotRaster,
    AlreadyDark,
}

/// Outcome of deriving one icon path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    Derived(String),
    Skipped(SkipReason),
}

/// Computes the dark twin of a single icon path.
pub fn derive_dark_path(path: &str) -> Derivation {
    if path.is_empty() {
        return Derivation::Skipped(SkipReason::EmptyPath);
    }
    let Some(ext) = raster_extension(path) else {
        return Derivation::Skipped(SkipReason::NotRaster);
    };
    let stem = &path[..path.len() - ext.len()];
    if stem.ends_with(DARK_SUFFIX) {
        return Derivation::Skipped(SkipReason::AlreadyDark);
    }
    Derivation::Derived(format!("{}{}{}", stem, DARK_SUFFIX, ext))
}

fn raster_extension(path: &str) -> Option<&'static str> {
    RASTER_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| path.len() > ext.len() && path.ends_with(ext))
}

/// What a derivation pass did to a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivationReport {
    /// Entries rebound to a dark variant, by type name.
    pub derived: Vec<(String, IconAsset)>,
    /// Entries left on their original type, by type name.
    pub skipped: Vec<(String, SkipReason)>,
}

impl DerivationReport {
    /// Names of entries that already carried the dark suffix.
    pub fn already_dark(&self) -> impl Iterator<Item = &str> {
        self.skipped
            .iter()
            .filter(|(_, reason)| *reason == SkipReason::AlreadyDark)
            .map(|(name, _)| name.as_str())
    }
}

/// Rebinds every raster-icon entry of `registry` to its dark variant.
///
/// Does nothing in [`ColorMode::Light`].
pub fn derive_dark_variants(registry: &mut ComponentRegistry, mode: ColorMode) -> DerivationReport {
    let mut report = DerivationReport::default();
    if !mode.is_dark() {
        return report;
    }

    let mut rebinds = Vec::new();
    for (name, component) in registry.iter() {
        let outcome = match component.icon.as_deref() {
            None => Derivation::Skipped(SkipReason::NoIcon),
            Some(icon) => derive_dark_path(icon),
        };
        match outcome {
            Derivation::Derived(dark) => {
                tracing::trace!(component = name, icon = %dark, "derived dark icon");
                let original = component.icon.clone().unwrap_or_default();
                rebinds.push((name.to_string(), component.with_icon(&dark)));
                report
                    .derived
                    .push((name.to_string(), IconAsset { original, dark }));
            }
            Derivation::Skipped(reason) => {
                if reason == SkipReason::AlreadyDark {
                    tracing::warn!(
                        component = name,
                        category = registry.category(),
                        "icon already carries the dark suffix; was dark derivation run twice?"
                    );
                }
                report.skipped.push((name.to_string(), reason));
            }
        }
    }

    for (name, component) in rebinds {
        registry.rebind(&name, component);
    }
    tracing::debug!(
        category = registry.category(),
        derived = report.derived.len(),
        skipped = report.skipped.len(),
        "dark icon derivation finished"
    );
    report
}
