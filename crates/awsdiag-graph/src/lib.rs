//! # awsdiag-graph - Declarative Diagram Construction
//!
//! The construction model that architecture-diagram scripts build against:
//! a top-level [`Diagram`], nested clusters opened as closure scopes, nodes
//! typed by a [`ComponentType`], and directed edges. Every layer of the
//! model carries Graphviz-style [`AttrMap`]s for the renderer.
//!
//! This crate renders nothing. A finished [`Diagram`] serializes to JSON or
//! YAML and is handed to whatever renderer consumes it.
//!
//! ## Core Concepts
//!
//! - [`AttrMap`]: string → string attribute map with right-biased [`AttrMap::merge`]
//! - [`ComponentType`] / [`ComponentRegistry`]: node kinds and their icons
//! - [`DiagramOptions`] / [`ClusterOptions`]: construction parameters, with
//!   attribute maps as `Option` so "omitted" is explicit
//! - [`Defaults`]: hook that fills omitted parameters for a whole diagram
//!
//! ## Quick Start
//!
//! ```rust
//! use awsdiag_graph::{ClusterOptions, ComponentRegistry, Diagram, DiagramOptions};
//!
//! let compute = ComponentRegistry::new("aws", "compute")
//!     .add("ECS", Some("elastic-container-service.png"));
//! let ecs = compute.require("ECS").unwrap();
//!
//! let mut diagram = Diagram::new(DiagramOptions::new("Workers"));
//! let workers = diagram.cluster(ClusterOptions::new("Event Workers"), |group| {
//!     vec![group.node(ecs, "worker1"), group.node(ecs, "worker2")]
//! });
//! assert_eq!(workers.len(), 2);
//! assert_eq!(diagram.clusters()[0].label, "Event Workers");
//! ```

mod attrs;
mod component;
mod diagram;
mod error;

pub use attrs::AttrMap;
pub use component::{ComponentRegistry, ComponentType};
pub use diagram::{
    Cluster, ClusterId, ClusterOptions, CurveStyle, Defaults, Diagram, DiagramOptions, Direction,
    Edge, EdgeOptions, NoDefaults, Node, NodeId, Scope,
};
pub use error::{GraphError, Result};
