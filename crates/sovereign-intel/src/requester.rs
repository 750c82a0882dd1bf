//! The briefing requester.
//!
//! One outbound call per briefing, no retries, no caching. Any failure is
//! logged and replaced by the uplink-severed record, so `generate` never fails.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;
use tracing::{error, info};

use sovereign_core::briefing::{military_timestamp, BriefingRecord};
use sovereign_core::constants::*;

use crate::config::IntelConfig;
use crate::error::IntelError;
use crate::model::{BriefingModel, GeminiModel, GenerationRequest};
use crate::prompt;

/// Generates briefings for selected vectors through a `BriefingModel`.
pub struct BriefingRequester<M = GeminiModel> {
    config: IntelConfig,
    model: M,
}

impl BriefingRequester<GeminiModel> {
    /// Requester backed by the hosted model described by `config`.
    pub fn from_config(config: IntelConfig) -> Result<Self, IntelError> {
        let model = GeminiModel::new(&config)?;
        Ok(Self::new(config, model))
    }
}

impl<M: BriefingModel> BriefingRequester<M> {
    pub fn new(config: IntelConfig, model: M) -> Self {
        Self { config, model }
    }

    pub fn config(&self) -> &IntelConfig {
        &self.config
    }

    /// The text-generation collaborator.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Generate a briefing for `vector_id` of category `context`.
    ///
    /// Never fails: on any error the uplink-severed record is returned with a
    /// fresh timestamp.
    pub async fn generate(&self, vector_id: &str, context: &str) -> BriefingRecord {
        match self.try_generate(vector_id, context).await {
            Ok(record) => record,
            Err(e) => {
                error!(
                    error = %e,
                    kind = ?e.kind(),
                    vector_id,
                    "Briefing generation failed"
                );
                BriefingRecord::uplink_severed(Utc::now())
            }
        }
    }

    /// Generate a briefing, surfacing the failure instead of falling back.
    ///
    /// A missing credential fails before the model is contacted.
    pub async fn try_generate(
        &self,
        vector_id: &str,
        context: &str,
    ) -> Result<BriefingRecord, IntelError> {
        let api_key = self.config.credential()?;

        let request = GenerationRequest {
            system_instruction: prompt::system_instruction(vector_id, context),
            prompt: prompt::BRIEFING_PROMPT.to_string(),
            response_schema: prompt::response_schema(),
        };

        let text = self.model.generate(api_key, &request).await?;
        let draft = BriefingDraft::parse(&text)?;

        let serial = rand::thread_rng().gen_range(0..BRIEFING_ID_RANGE);
        let record = draft.into_record(serial, Utc::now());
        info!(id = %record.id, vector_id, context, "Briefing generated");
        Ok(record)
    }
}

/// The model's answer before defaults are applied. Any field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct BriefingDraft {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub implications: Option<Vec<String>>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl BriefingDraft {
    /// Parse response text. Blank text is an empty draft, not an error.
    pub fn parse(text: &str) -> Result<Self, IntelError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Fill in defaults and stamp identity. Empty strings count as missing.
    pub fn into_record(self, serial: u32, at: DateTime<Utc>) -> BriefingRecord {
        BriefingRecord {
            id: format!("{BRIEFING_ID_PREFIX}{serial}"),
            classification: BRIEFING_CLASSIFICATION.to_string(),
            timestamp: military_timestamp(at),
            subject: or_default(self.subject, DEFAULT_SUBJECT),
            summary: or_default(self.summary, DEFAULT_SUMMARY),
            implications: self.implications.unwrap_or_default(),
            recommendation: or_default(self.recommendation, DEFAULT_RECOMMENDATION),
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
