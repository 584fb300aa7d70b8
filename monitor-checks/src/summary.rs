use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checks::Params;
use crate::error::{Error, Result};

pub const SUMMARY_RESOLUTIONS: [&str; 3] = ["hour", "day", "week"];

/// Query for the summary performance report of a single check.
///
/// `from`, `to`, `probes` and `order` are carried on the request but are not
/// part of [`get_params`](Self::get_params); callers that need them must add
/// them to the query themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPerformanceRequest {
    pub id: u64,
    /// Unix seconds.
    pub from: i64,
    /// Unix seconds.
    pub to: i64,
    pub resolution: String,
    pub include_uptime: bool,
    pub probes: String,
    pub order: String,
}

impl SummaryPerformanceRequest {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_range(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = from.timestamp();
        self.to = to.timestamp();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            debug!("Summary performance request rejected: missing id");
            return Err(Error::MissingId);
        }

        if !self.resolution.is_empty() && !SUMMARY_RESOLUTIONS.contains(&self.resolution.as_str()) {
            debug!(
                "Summary performance request {} rejected: resolution {:?}",
                self.id, self.resolution
            );
            return Err(Error::BadResolution);
        }

        Ok(())
    }

    pub fn get_params(&self) -> Params {
        let mut params = Params::new();

        if !self.resolution.is_empty() {
            params.insert("resolution".to_string(), self.resolution.clone());
        }

        // Absence already means false.
        if self.include_uptime {
            params.insert("includeuptime".to_string(), "true".to_string());
        }

        params
    }
}
