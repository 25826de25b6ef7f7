//! The example architectures.
//!
//! Each scene builds one diagram through the public `awsdiag` API. The
//! `updated` variants pass every bundle and preset explicitly; the plain
//! variant relies entirely on default injection.

use std::sync::Arc;

use anyhow::Result;
use awsdiag::AwsStyle;
use awsdiag_graph::{ClusterOptions, Diagram, DiagramOptions, EdgeOptions};

/// Title with the `(updated, dark)` marker the updated scenes carry.
fn updated_title(base: &str, style: &AwsStyle) -> String {
    let dark = if style.is_dark() { ", dark" } else { "" };
    format!("{} (updated{})", base, dark)
}

/// User → internet gateway → route table → NACL → EC2 → S3, with every
/// attribute left to the injected defaults.
pub fn ec2_to_s3(style: &Arc<AwsStyle>) -> Result<Diagram> {
    let user_type = style.component("general", "User")?;
    let igw_type = style.component("network", "InternetGateway")?;
    let route_type = style.component("network", "RouteTable")?;
    let nacl_type = style.component("network", "Nacl")?;
    let ec2_type = style.component("compute", "EC2")?;
    let s3_type = style.component("storage", "S3")?;

    let mut diagram =
        style.diagram(DiagramOptions::new("EC2 to S3 Connection Architecture").show(false));

    let user = diagram.node(user_type, "External User");
    let (igw, route_table, nacl, ec2, s3) =
        diagram.cluster(ClusterOptions::new("AWS Cloud (us-east-1)"), |cloud| {
            let (igw, route_table, nacl, ec2) =
                cloud.cluster(ClusterOptions::new("VPC"), |vpc| {
                    let igw = vpc.node(igw_type, "Internet Gateway");
                    let (route_table, nacl, ec2) =
                        vpc.cluster(ClusterOptions::new("Public Subnet"), |subnet| {
                            let route_table = subnet.node(route_type, "Route Table");
                            let nacl = subnet.node(nacl_type, "Network ACL");
                            let ec2 = subnet.cluster(ClusterOptions::new("Security Group"), |sg| {
                                sg.node(ec2_type, "EC2 Instance")
                            });
                            (route_table, nacl, ec2)
                        });
                    (igw, route_table, nacl, ec2)
                });
            let s3 = cloud.node(s3_type, "S3 Bucket");
            (igw, route_table, nacl, ec2, s3)
        });

    diagram.edge(user, igw, EdgeOptions::labeled("HTTPS"))?;
    diagram.connect(&[igw, route_table, nacl, ec2])?;
    diagram.edge(ec2, s3, EdgeOptions::labeled("API Calls"))?;
    Ok(diagram)
}

/// Same architecture, with the bundles and group presets passed explicitly.
pub fn ec2_to_s3_updated(style: &Arc<AwsStyle>) -> Result<Diagram> {
    let user_type = style.component("general", "User")?;
    let igw_type = style.component("network", "InternetGateway")?;
    let route_type = style.component("network", "RouteTable")?;
    let nacl_type = style.component("network", "Nacl")?;
    let ec2_type = style.component("compute", "EC2")?;
    let s3_type = style.component("storage", "S3")?;
    let presets = style.presets();

    let mut diagram = style.diagram(
        DiagramOptions::new(updated_title("EC2 to S3 Connection Architecture", style))
            .show(false)
            .graph_attr(style.graph_attr().clone())
            .node_attr(style.node_attr().clone())
            .edge_attr(style.edge_attr().clone()),
    );

    let user = diagram.node(user_type, "External User");
    let (igw, route_table, nacl, ec2, s3) =
        diagram.cluster(presets.region().label("AWS Cloud (us-east-1)"), |cloud| {
            let (igw, route_table, nacl, ec2) = cloud.cluster(presets.vpc(), |vpc| {
                let igw = vpc.node(igw_type, "Internet Gateway");
                let (route_table, nacl, ec2) = vpc.cluster(presets.public_subnet(), |subnet| {
                    let route_table = subnet.node(route_type, "Route Table");
                    let nacl = subnet.node(nacl_type, "Network ACL");
                    let ec2 = subnet.cluster(presets.security_group(), |sg| {
                        sg.node(ec2_type, "EC2 Instance")
                    });
                    (route_table, nacl, ec2)
                });
                (igw, route_table, nacl, ec2)
            });
            let s3 = cloud.node(s3_type, "S3 Bucket");
            (igw, route_table, nacl, ec2, s3)
        });

    diagram.edge(user, igw, EdgeOptions::labeled("HTTPS"))?;
    diagram.connect(&[igw, route_table, nacl, ec2])?;
    diagram.edge(ec2, s3, EdgeOptions::labeled("API Calls"))?;
    Ok(diagram)
}

/// EKS source fanning out to ECS workers, through SQS to Lambda handlers,
/// into S3 and Redshift.
pub fn event_processing(style: &Arc<AwsStyle>) -> Result<Diagram> {
    let eks_type = style.component("compute", "EKS")?;
    let ecs_type = style.component("compute", "ECS")?;
    let lambda_type = style.component("compute", "Lambda")?;
    let sqs_type = style.component("integration", "SQS")?;
    let s3_type = style.component("storage", "S3")?;
    let redshift_type = style.component("database", "Redshift")?;
    let presets = style.presets();

    let mut diagram = style.diagram(
        DiagramOptions::new(updated_title("Event Processing", style))
            .show(false)
            .graph_attr(style.graph_attr().clone())
            .node_attr(style.node_attr().clone())
            .edge_attr(style.edge_attr().clone()),
    );

    let source = diagram.node(eks_type, "k8s source");
    let (workers, queue, handlers) =
        diagram.cluster(presets.generic_group().label("Event Flows"), |flows| {
            let workers = flows.cluster(presets.generic_group().label("Event Workers"), |group| {
                ["worker1", "worker2", "worker3"]
                    .map(|label| group.node(ecs_type, label))
                    .to_vec()
            });
            let queue = flows.node(sqs_type, "event queue");
            let handlers = flows.cluster(presets.generic_group().label("Processing"), |group| {
                ["proc1", "proc2", "proc3"]
                    .map(|label| group.node(lambda_type, label))
                    .to_vec()
            });
            (workers, queue, handlers)
        });
    let store = diagram.node(s3_type, "events store");
    let warehouse = diagram.node(redshift_type, "analytics");

    diagram.fan(&[source], &workers)?;
    diagram.fan(&workers, &[queue])?;
    diagram.fan(&[queue], &handlers)?;
    diagram.fan(&handlers, &[store])?;
    diagram.fan(&handlers, &[warehouse])?;
    Ok(diagram)
}
