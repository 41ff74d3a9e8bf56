//! Contact leads: submissions from the public contact form awaiting triage

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{de, Record, RecordId};

/// Triage status of a lead.
///
/// The nominal flow is `new → contacted → resolved`, with `archived` reachable
/// from anywhere. Transitions are not enforced: any status may be set from any
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Resolved,
    Archived,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Resolved,
        LeadStatus::Archived,
    ];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Resolved => "resolved",
            LeadStatus::Archived => "archived",
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Resolved => "Resolved",
            LeadStatus::Archived => "Archived",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LeadStatus::Archived)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LeadStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::parse(
                    "lead status",
                    s.trim(),
                    LeadStatus::ALL.iter().map(LeadStatus::as_str),
                )
            })
    }
}

/// A contact-form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLead {
    #[serde(deserialize_with = "de::id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub service_id: Option<RecordId>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default, deserialize_with = "de::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for ContactLead {
    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str(), self.message.as_str()];
        if let Some(subject) = &self.subject {
            fields.push(subject);
        }
        fields
    }
}

/// One row of the stats endpoint: `{ "status": "new", "count": 4 }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    #[serde(deserialize_with = "de::id")]
    pub count: i64,
}

/// Lead counts grouped by status.
///
/// `total` is always the sum of the four per-status counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LeadStats {
    pub new: u64,
    pub contacted: u64,
    pub resolved: u64,
    pub archived: u64,
    pub total: u64,
}

impl LeadStats {
    /// Reduce the grouped counts into a fixed shape.
    ///
    /// Missing statuses stay at zero. Unknown statuses are ignored so that
    /// the per-status counts always add up to `total`. Negative counts clamp
    /// to zero; repeated statuses accumulate.
    pub fn from_counts(counts: &[StatusCount]) -> Self {
        let mut stats = LeadStats::default();
        for row in counts {
            let count = u64::try_from(row.count).unwrap_or(0);
            match row.status.parse::<LeadStatus>() {
                Ok(status) => *stats.slot_mut(status) += count,
                Err(_) => {
                    tracing::debug!("Ignoring unknown lead status in stats: {}", row.status);
                }
            }
        }
        stats.total = stats.new + stats.contacted + stats.resolved + stats.archived;
        stats
    }

    pub fn count(&self, status: LeadStatus) -> u64 {
        match status {
            LeadStatus::New => self.new,
            LeadStatus::Contacted => self.contacted,
            LeadStatus::Resolved => self.resolved,
            LeadStatus::Archived => self.archived,
        }
    }

    fn slot_mut(&mut self, status: LeadStatus) -> &mut u64 {
        match status {
            LeadStatus::New => &mut self.new,
            LeadStatus::Contacted => &mut self.contacted,
            LeadStatus::Resolved => &mut self.resolved,
            LeadStatus::Archived => &mut self.archived,
        }
    }
}
