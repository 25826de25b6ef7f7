//! Default injection for diagram construction.
//!
//! [`AwsStyle`] implements the construction layer's [`Defaults`] hook.
//! Attached to a diagram, it fills every attribute map the caller omitted:
//!
//! | Parameter | Filled with |
//! |-----------|-------------|
//! | diagram `graph_attr` | [`AwsStyle::graph_attr`] |
//! | diagram `node_attr` | [`AwsStyle::node_attr`] |
//! | diagram `edge_attr` | [`AwsStyle::edge_attr`] |
//! | cluster `graph_attr` | the generic group bundle |
//!
//! Only `None` counts as omitted. A supplied map, empty or not, passes
//! through unchanged, as does every other parameter.

use std::sync::Arc;

use awsdiag_graph::{ClusterOptions, Defaults, Diagram, DiagramOptions};

use crate::bundle::GroupKind;
use crate::style::AwsStyle;

impl Defaults for AwsStyle {
    fn fill_diagram(&self, mut options: DiagramOptions) -> DiagramOptions {
        if options.graph_attr.is_none() {
            options.graph_attr = Some(self.graph_attr().clone());
        }
        if options.node_attr.is_none() {
            options.node_attr = Some(self.node_attr().clone());
        }
        if options.edge_attr.is_none() {
            options.edge_attr = Some(self.edge_attr().clone());
        }
        options
    }

    fn fill_cluster(&self, mut options: ClusterOptions) -> ClusterOptions {
        if options.graph_attr.is_none() {
            options.graph_attr = Some(self.group(GroupKind::GenericGroup).clone());
        }
        options
    }
}

impl AwsStyle {
    /// Opens a diagram with this style's defaults attached.
    pub fn diagram(self: &Arc<Self>, options: DiagramOptions) -> Diagram {
        let defaults: Arc<dyn Defaults> = Arc::clone(self) as Arc<dyn Defaults>;
        Diagram::with_defaults(options, defaults)
    }
}

/// Opens a diagram styled by [`AwsStyle::global`].
pub fn diagram(options: DiagramOptions) -> Diagram {
    AwsStyle::global().diagram(options)
}
