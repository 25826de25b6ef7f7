//! Top-level diagrams and nested cluster scopes.
//!
//! A [`Diagram`] is built from [`DiagramOptions`]. Nodes, edges and nested
//! clusters are added through a [`Scope`]; a cluster's scope is only alive
//! for the duration of the closure passed to [`Scope::cluster`], so a
//! cluster is always closed before its parent continues.
//!
//! ```rust
//! use awsdiag_graph::{ClusterOptions, ComponentType, Diagram, DiagramOptions, EdgeOptions};
//!
//! let ec2 = ComponentType::new("aws", "compute", "EC2", Some("ec2.png"));
//! let s3 = ComponentType::new("aws", "storage", "S3", Some("simple-storage-service-s3.png"));
//!
//! let mut diagram = Diagram::new(DiagramOptions::new("Web Service"));
//! let web = diagram.cluster(ClusterOptions::new("VPC"), |vpc| vpc.node(&ec2, "web"));
//! let bucket = diagram.node(&s3, "assets");
//! diagram.edge(web, bucket, EdgeOptions::labeled("read")).unwrap();
//!
//! assert_eq!(diagram.filename(), "web_service");
//! assert_eq!(diagram.nodes().len(), 2);
//! ```
//!
//! # Attribute defaults
//!
//! Every attribute map parameter is an `Option`. `None` means the caller did
//! not supply one, which is distinct from supplying an empty map. A
//! [`Defaults`] hook attached with [`Diagram::with_defaults`] gets to fill
//! the omitted maps of the top-level options once, and of every cluster
//! opened anywhere inside the diagram. Without a hook ([`Diagram::new`])
//! omitted maps are left empty for the renderer's own defaults.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::attrs::AttrMap;
use crate::component::ComponentType;
use crate::error::{GraphError, Result};

/// Rank direction of a diagram or cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Top to bottom.
    TB,
    /// Bottom to top.
    BT,
    /// Left to right.
    #[default]
    LR,
    /// Right to left.
    RL,
}

/// Edge routing style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveStyle {
    #[default]
    Ortho,
    Curved,
}

/// Construction parameters of a top-level diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramOptions {
    pub name: String,
    /// Output file stem. Derived from `name` when `None`.
    pub filename: Option<String>,
    pub direction: Direction,
    pub curvestyle: CurveStyle,
    pub outformat: String,
    pub show: bool,
    pub autolabel: bool,
    pub strict: bool,
    pub graph_attr: Option<AttrMap>,
    pub node_attr: Option<AttrMap>,
    pub edge_attr: Option<AttrMap>,
}

impl DiagramOptions {
    /// Options for a diagram called `name`, with every other parameter at
    /// its default and no attribute maps supplied.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            direction: Direction::default(),
            curvestyle: CurveStyle::default(),
            outformat: "png".to_string(),
            show: true,
            autolabel: false,
            strict: false,
            graph_attr: None,
            node_attr: None,
            edge_attr: None,
        }
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn curvestyle(mut self, curvestyle: CurveStyle) -> Self {
        self.curvestyle = curvestyle;
        self
    }

    pub fn outformat(mut self, outformat: impl Into<String>) -> Self {
        self.outformat = outformat.into();
        self
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn autolabel(mut self, autolabel: bool) -> Self {
        self.autolabel = autolabel;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Supplies the graph-level attribute map.
    pub fn graph_attr(mut self, attrs: AttrMap) -> Self {
        self.graph_attr = Some(attrs);
        self
    }

    /// Supplies the node-level attribute map.
    pub fn node_attr(mut self, attrs: AttrMap) -> Self {
        self.node_attr = Some(attrs);
        self
    }

    /// Supplies the edge-level attribute map.
    pub fn edge_attr(mut self, attrs: AttrMap) -> Self {
        self.edge_attr = Some(attrs);
        self
    }

    /// The output file stem: the explicit filename, or the name's
    /// whitespace-separated words joined with `_` and lowercased.
    pub fn resolved_filename(&self) -> String {
        if let Some(filename) = &self.filename {
            return filename.clone();
        }
        let derived = self
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        if derived.is_empty() {
            "diagrams_image".to_string()
        } else {
            derived
        }
    }
}

/// Construction parameters of a nested cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterOptions {
    pub label: String,
    pub direction: Direction,
    pub graph_attr: Option<AttrMap>,
}

impl ClusterOptions {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Replaces the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Supplies the cluster's attribute map, replacing any previous one.
    pub fn graph_attr(mut self, attrs: AttrMap) -> Self {
        self.graph_attr = Some(attrs);
        self
    }
}

/// Per-edge parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeOptions {
    pub label: Option<String>,
    pub attrs: Option<AttrMap>,
}

impl EdgeOptions {
    /// An edge carrying `label`.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            attrs: None,
        }
    }

    pub fn attrs(mut self, attrs: AttrMap) -> Self {
        self.attrs = Some(attrs);
        self
    }
}

/// Hook that fills omitted construction parameters.
///
/// Implementations must only touch parameters the caller left as `None`;
/// everything else passes through untouched.
pub trait Defaults: Send + Sync {
    fn fill_diagram(&self, options: DiagramOptions) -> DiagramOptions {
        options
    }

    fn fill_cluster(&self, options: ClusterOptions) -> ClusterOptions {
        options
    }
}

/// Leaves every parameter as supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDefaults;

impl Defaults for NoDefaults {}

/// Handle to a node within one diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a cluster within one diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClusterId(usize);

impl ClusterId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    /// Qualified type, e.g. `aws.compute.EC2`.
    pub component: String,
    pub icon: Option<String>,
    pub cluster: Option<ClusterId>,
}

/// A closed cluster as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    pub id: ClusterId,
    pub label: String,
    pub direction: Direction,
    pub graph_attr: AttrMap,
    pub parent: Option<ClusterId>,
}

/// A directed edge as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub label: Option<String>,
    pub attrs: AttrMap,
}

/// A top-level diagram.
#[derive(Serialize)]
pub struct Diagram {
    name: String,
    filename: String,
    direction: Direction,
    curvestyle: CurveStyle,
    outformat: String,
    show: bool,
    autolabel: bool,
    strict: bool,
    graph_attr: AttrMap,
    node_attr: AttrMap,
    edge_attr: AttrMap,
    clusters: Vec<Cluster>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    defaults: Arc<dyn Defaults>,
}

impl Diagram {
    /// Creates a diagram that uses the options exactly as given.
    pub fn new(options: DiagramOptions) -> Self {
        Self::with_defaults(options, Arc::new(NoDefaults))
    }

    /// Creates a diagram whose omitted parameters, and those of every
    /// cluster opened inside it, are filled by `defaults`.
    pub fn with_defaults(options: DiagramOptions, defaults: Arc<dyn Defaults>) -> Self {
        let options = defaults.fill_diagram(options);
        let filename = options.resolved_filename();
        tracing::debug!(name = %options.name, %filename, "diagram opened");
        Self {
            name: options.name,
            filename,
            direction: options.direction,
            curvestyle: options.curvestyle,
            outformat: options.outformat,
            show: options.show,
            autolabel: options.autolabel,
            strict: options.strict,
            graph_attr: options.graph_attr.unwrap_or_default(),
            node_attr: options.node_attr.unwrap_or_default(),
            edge_attr: options.edge_attr.unwrap_or_default(),
            clusters: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            defaults,
        }
    }

    /// Scope for adding elements at the top level.
    pub fn root(&mut self) -> Scope<'_> {
        Scope {
            diagram: self,
            cluster: None,
        }
    }

    /// Adds a top-level node. See [`Scope::node`].
    pub fn node(&mut self, component: &ComponentType, label: impl Into<String>) -> NodeId {
        self.root().node(component, label)
    }

    /// Opens a top-level cluster. See [`Scope::cluster`].
    pub fn cluster<R>(&mut self, options: ClusterOptions, build: impl FnOnce(&mut Scope<'_>) -> R) -> R {
        self.root().cluster(options, build)
    }

    /// Adds an edge. See [`Scope::edge`].
    pub fn edge(&mut self, from: NodeId, to: NodeId, options: EdgeOptions) -> Result<()> {
        self.root().edge(from, to, options)
    }

    /// Chains nodes with unlabeled edges. See [`Scope::connect`].
    pub fn connect(&mut self, chain: &[NodeId]) -> Result<()> {
        self.root().connect(chain)
    }

    /// Connects every source to every target. See [`Scope::fan`].
    pub fn fan(&mut self, sources: &[NodeId], targets: &[NodeId]) -> Result<()> {
        self.root().fan(sources, targets)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn curvestyle(&self) -> CurveStyle {
        self.curvestyle
    }

    pub fn outformat(&self) -> &str {
        &self.outformat
    }

    pub fn show(&self) -> bool {
        self.show
    }

    pub fn autolabel(&self) -> bool {
        self.autolabel
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn graph_attr(&self) -> &AttrMap {
        &self.graph_attr
    }

    pub fn node_attr(&self) -> &AttrMap {
        &self.node_attr
    }

    pub fn edge_attr(&self) -> &AttrMap {
        &self.edge_attr
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a cluster by id.
    pub fn get_cluster(&self, id: ClusterId) -> Option<&Cluster> {
        self.clusters.get(id.0)
    }

    /// Looks up a node by id.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Serializes the diagram description as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the diagram description as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn check_node(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id.0))
        }
    }
}

impl fmt::Debug for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagram")
            .field("name", &self.name)
            .field("filename", &self.filename)
            .field("graph_attr", &self.graph_attr)
            .field("clusters", &self.clusters.len())
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .finish_non_exhaustive()
    }
}

/// An open container that elements are added to: either the diagram's top
/// level or a cluster.
pub struct Scope<'d> {
    diagram: &'d mut Diagram,
    cluster: Option<ClusterId>,
}

impl Scope<'_> {
    /// The cluster this scope belongs to, `None` at the top level.
    pub fn id(&self) -> Option<ClusterId> {
        self.cluster
    }

    /// Adds a node of `component` type in this scope.
    pub fn node(&mut self, component: &ComponentType, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.diagram.nodes.len());
        self.diagram.nodes.push(Node {
            id,
            label: label.into(),
            component: format!(
                "{}.{}.{}",
                component.provider, component.category, component.name
            ),
            icon: component.icon_path(),
            cluster: self.cluster,
        });
        id
    }

    /// Opens a nested cluster, runs `build` inside it and closes it.
    ///
    /// The diagram's [`Defaults`] hook fills the cluster's omitted
    /// parameters before it is opened. Whatever `build` returns is passed
    /// back to the caller.
    pub fn cluster<R>(
        &mut self,
        options: ClusterOptions,
        build: impl FnOnce(&mut Scope<'_>) -> R,
    ) -> R {
        let defaults = Arc::clone(&self.diagram.defaults);
        let options = defaults.fill_cluster(options);
        let id = ClusterId(self.diagram.clusters.len());
        tracing::trace!(label = %options.label, cluster = id.0, "cluster opened");
        self.diagram.clusters.push(Cluster {
            id,
            label: options.label,
            direction: options.direction,
            graph_attr: options.graph_attr.unwrap_or_default(),
            parent: self.cluster,
        });
        let mut inner = Scope {
            diagram: &mut *self.diagram,
            cluster: Some(id),
        };
        let out = build(&mut inner);
        tracing::trace!(cluster = id.0, "cluster closed");
        out
    }

    /// Adds a directed edge from `from` to `to`.
    pub fn edge(&mut self, from: NodeId, to: NodeId, options: EdgeOptions) -> Result<()> {
        self.diagram.check_node(from)?;
        self.diagram.check_node(to)?;
        self.diagram.edges.push(Edge {
            from,
            to,
            label: options.label,
            attrs: options.attrs.unwrap_or_default(),
        });
        Ok(())
    }

    /// Links each node in `chain` to the next one with unlabeled edges.
    pub fn connect(&mut self, chain: &[NodeId]) -> Result<()> {
        for pair in chain.windows(2) {
            self.edge(pair[0], pair[1], EdgeOptions::default())?;
        }
        Ok(())
    }

    /// Adds an unlabeled edge from every source to every target.
    pub fn fan(&mut self, sources: &[NodeId], targets: &[NodeId]) -> Result<()> {
        for &from in sources {
            for &to in targets {
                self.edge(from, to, EdgeOptions::default())?;
            }
        }
        Ok(())
    }
}
