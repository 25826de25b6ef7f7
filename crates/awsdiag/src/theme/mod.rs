//! Light/dark theme resolution.
//!
//! The diagram theme has exactly two variants. Which one applies is decided
//! once, from the [`DARK_MODE_ENV`] environment variable:
//!
//! ```text
//! AWS_DARK=1 cargo run --bin awsdiag-demo -- ec2-to-s3
//! ```
//!
//! Accepted truthy values are `1` and `true` in any letter case. Anything
//! else, including an unset variable, resolves to [`ColorMode::Light`]. A
//! malformed value is never an error.
//!
//! The resolved [`ColorMode`] selects a [`Theme`], the background,
//! foreground and arrow colors every attribute bundle is built from.
//!
//! ```rust
//! use awsdiag::{resolve_color_mode, ColorMode, MockEnv, Theme};
//!
//! let env = MockEnv::new().with_var("AWS_DARK", "TRUE");
//! let mode = resolve_color_mode(&env);
//! assert_eq!(mode, ColorMode::Dark);
//! assert_eq!(Theme::for_mode(mode).background, "#000000");
//! ```

mod mode;
#[allow(clippy::module_inception)]
mod theme;

pub use mode::{detect_color_mode, is_truthy, resolve_color_mode, ColorMode, DARK_MODE_ENV};
pub use theme::Theme;
