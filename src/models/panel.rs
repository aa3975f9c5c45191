use crate::api::PanelId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Panel size tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSize {
    Small,
    Medium,
    Large,
}

impl PanelSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelSize::Small => "small",
            PanelSize::Medium => "medium",
            PanelSize::Large => "large",
        }
    }
}

impl fmt::Display for PanelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(PanelSize::Small),
            "medium" => Ok(PanelSize::Medium),
            "large" => Ok(PanelSize::Large),
            other => Err(format!("Unknown panel size: {}", other)),
        }
    }
}

/// Lifecycle status of a panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStatus {
    Available,
    Reserved,
    Active,
}

impl PanelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelStatus::Available => "available",
            PanelStatus::Reserved => "reserved",
            PanelStatus::Active => "active",
        }
    }
}

impl fmt::Display for PanelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(PanelStatus::Available),
            "reserved" => Ok(PanelStatus::Reserved),
            "active" => Ok(PanelStatus::Active),
            other => Err(format!("Unknown panel status: {}", other)),
        }
    }
}

/// Physical print dimensions of a panel in inches.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDimensions {
    pub width: f64,
    pub height: f64,
}

impl PanelDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Human-readable label, e.g. `12" x 18"`.
    pub fn label(&self) -> String {
        format!("{}\" x {}\"", self.width, self.height)
    }
}

/// A purchasable advertising panel on the van.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    pub name: String,
    pub size: PanelSize,
    /// Placement slug on the vehicle, e.g. `front-bumper`.
    pub position: String,
    pub dimensions: PanelDimensions,
    /// Monthly cost in USD
    pub monthly_cost: f64,
    pub status: PanelStatus,
    /// Business name of the current advertiser, if any
    pub reserved_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Panel {
    pub fn is_available(&self) -> bool {
        self.status == PanelStatus::Available
    }
}
