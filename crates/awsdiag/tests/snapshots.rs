//! Snapshot tests for exported bundle documents.

use awsdiag::{AwsStyle, ColorMode};
use insta::assert_snapshot;

#[test]
fn test_snapshots_light_bundles_json() {
    let style = AwsStyle::for_mode(ColorMode::Light);
    assert_snapshot!("light_bundles_json", style.bundles_to_json().unwrap());
}

#[test]
fn test_snapshots_dark_bundles_json() {
    let style = AwsStyle::for_mode(ColorMode::Dark);
    assert_snapshot!("dark_bundles_json", style.bundles_to_json().unwrap());
}
