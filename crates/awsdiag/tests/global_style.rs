//! The process-wide style is resolved once, on first use.
//!
//! Kept in its own test binary so no other test can initialize the global
//! style first.

use awsdiag::{AwsStyle, ColorMode, GroupKind, DARK_MODE_ENV};
use awsdiag_graph::{ClusterOptions, DiagramOptions};

#[test]
fn global_style_is_resolved_once() {
    std::env::set_var(DARK_MODE_ENV, "TRUE");
    let first = AwsStyle::global();
    assert_eq!(first.mode(), ColorMode::Dark);

    // Changing the variable afterwards has no effect.
    std::env::set_var(DARK_MODE_ENV, "0");
    let second = AwsStyle::global();
    assert_eq!(second.mode(), ColorMode::Dark);
    assert!(std::sync::Arc::ptr_eq(&first, &second));

    let mut diagram = awsdiag::diagram(DiagramOptions::new("global"));
    diagram.cluster(ClusterOptions::new("Event Flows"), |_| {});
    assert_eq!(diagram.graph_attr().get("bgcolor"), Some("#000000"));
    assert_eq!(
        &diagram.clusters()[0].graph_attr,
        first.group(GroupKind::GenericGroup)
    );

    std::env::remove_var(DARK_MODE_ENV);
}
