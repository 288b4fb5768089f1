//! Record selection by date range, platform and campaign.

use crate::parser::schema::{AdRecord, EnrichedRecord};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Selection applied before analysis
///
/// Empty platform/campaign lists select everything. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub campaigns: Vec<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_platforms(mut self, platforms: Vec<String>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn with_campaigns(mut self, campaigns: Vec<String>) -> Self {
        self.campaigns = campaigns;
        self
    }

    /// True when the filter keeps every record
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.platforms.is_empty()
            && self.campaigns.is_empty()
    }

    pub fn matches(&self, record: &AdRecord) -> bool {
        if self.start_date.is_some_and(|start| record.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| record.date > end) {
            return false;
        }
        if !self.platforms.is_empty() && !self.platforms.iter().any(|p| *p == record.platform) {
            return false;
        }
        if !self.campaigns.is_empty() && !self.campaigns.iter().any(|c| *c == record.campaign) {
            return false;
        }
        true
    }

    /// Keep matching records, preserving order
    pub fn apply(&self, records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
        let selected: Vec<EnrichedRecord> = records
            .iter()
            .filter(|r| self.matches(r.record()))
            .cloned()
            .collect();

        debug!("Filter kept {} of {} records", selected.len(), records.len());

        selected
    }
}
