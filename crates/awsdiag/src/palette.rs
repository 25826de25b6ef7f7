//! The AWS brand palette.
//!
//! Nine fixed colors from the AWS architecture icon guidelines. Category
//! colors are used for cluster borders so a group reads the same way its
//! service category does on the official icons.

use serde::Serialize;

/// One of the nine brand colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandColor {
    /// Squid ink, the AWS dark navy.
    Squid,
    /// Neutral gray used for generic borders.
    Gray,
    /// Customer Enablement, Database, Developer Tools, Satellite.
    Nebula,
    /// Cloud Financial Management, Internet of Things, Storage.
    Endor,
    /// Blockchain, Compute, Containers, Media Services, Quantum Technologies.
    Smile,
    /// Application Integration, Management & Governance.
    Cosmos,
    /// Analytics, Games, Networking & Content Delivery, Serverless.
    Galaxy,
    /// Business Applications, Contact Center, Front-End Web & Mobile,
    /// Robotics, Security, Identity & Compliance.
    Mars,
    /// Artificial Intelligence, End User Computing, Migration & Modernization.
    Orbit,
}

impl BrandColor {
    pub const ALL: [BrandColor; 9] = [
        BrandColor::Squid,
        BrandColor::Gray,
        BrandColor::Nebula,
        BrandColor::Endor,
        BrandColor::Smile,
        BrandColor::Cosmos,
        BrandColor::Galaxy,
        BrandColor::Mars,
        BrandColor::Orbit,
    ];

    /// Hex code, `#RRGGBB`.
    pub const fn hex(self) -> &'static str {
        match self {
            BrandColor::Squid => "#232F3E",
            BrandColor::Gray => "#7D8998",
            BrandColor::Nebula => "#C925D1",
            BrandColor::Endor => "#7AA116",
            BrandColor::Smile => "#ED7100",
            BrandColor::Cosmos => "#E7157B",
            BrandColor::Galaxy => "#8C4FFF",
            BrandColor::Mars => "#DD344C",
            BrandColor::Orbit => "#01A88D",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BrandColor::Squid => "squid",
            BrandColor::Gray => "gray",
            BrandColor::Nebula => "nebula",
            BrandColor::Endor => "endor",
            BrandColor::Smile => "smile",
            BrandColor::Cosmos => "cosmos",
            BrandColor::Galaxy => "galaxy",
            BrandColor::Mars => "mars",
            BrandColor::Orbit => "orbit",
        }
    }
}
