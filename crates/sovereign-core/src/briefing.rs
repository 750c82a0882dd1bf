//! Briefing records shown in the command panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MILITARY_TIMESTAMP_FORMAT;

/// A display-ready intelligence briefing.
///
/// Every field is always populated. `implications` may be empty but is never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingRecord {
    pub id: String,
    pub classification: String,
    /// `YYYY-MM-DD HH:MMZ`
    pub timestamp: String,
    pub subject: String,
    pub summary: String,
    pub implications: Vec<String>,
    pub recommendation: String,
}

impl BriefingRecord {
    /// The record shown when the intelligence uplink fails for any reason.
    pub fn uplink_severed(at: DateTime<Utc>) -> Self {
        Self {
            id: "ERR-500".into(),
            classification: "UNCLASSIFIED".into(),
            timestamp: military_timestamp(at),
            subject: "UPLINK SEVERED".into(),
            summary: "Strategic intelligence core unresponsive.".into(),
            implications: vec!["Data unavailable.".into(), "Local command assumed.".into()],
            recommendation: "MANUAL OVERRIDE".into(),
        }
    }

    /// The standing overview shown before any briefing has been requested.
    pub fn standing_overview(at: DateTime<Utc>) -> Self {
        Self {
            id: "INIT-001".into(),
            classification: crate::constants::BRIEFING_CLASSIFICATION.into(),
            timestamp: military_timestamp(at),
            subject: "GLOBAL STRATEGIC OVERVIEW".into(),
            summary: "System initialized. Global threat horizons nominal with localized \
                      instability sectors in cyber-infrastructure and resource vectors."
                .into(),
            implications: vec![
                "Monitor sector 4.".into(),
                "Prepare localized containment protocols.".into(),
            ],
            recommendation: "MAINTAIN VIGILANCE".into(),
        }
    }

    /// True if this is the uplink failure sentinel.
    pub fn is_fallback(&self) -> bool {
        self.id == "ERR-500"
    }
}

/// Format a UTC instant as a military timestamp, e.g. `2026-10-15 14:07Z`.
pub fn military_timestamp(at: DateTime<Utc>) -> String {
    at.format(MILITARY_TIMESTAMP_FORMAT).to_string()
}

/// Military timestamp for the current instant.
pub fn military_now() -> String {
    military_timestamp(Utc::now())
}
