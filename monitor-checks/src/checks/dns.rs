use serde::{Deserialize, Serialize};

use super::{CheckParams, CommonFields, Params};
use crate::error::{Error, Result};

/// Resolves `hostname` against `name_server` and expects `expected_ip`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsCheck {
    pub name: String,
    pub hostname: String,
    pub expected_ip: String,
    pub name_server: String,
    pub resolution: u32,
    pub paused: bool,
    pub send_notification_when_down: u32,
    pub notify_again_every: u32,
    pub notify_when_backup: bool,
    pub integration_ids: Vec<u64>,
    pub tags: String,
    pub probe_filters: String,
    pub user_ids: Vec<u64>,
    pub team_ids: Vec<u64>,
}

impl DnsCheck {
    fn common(&self) -> CommonFields<'_> {
        CommonFields {
            name: &self.name,
            hostname: &self.hostname,
            resolution: self.resolution,
            paused: self.paused,
            send_notification_when_down: self.send_notification_when_down,
            notify_again_every: self.notify_again_every,
            notify_when_backup: self.notify_when_backup,
            integration_ids: &self.integration_ids,
            probe_filters: &self.probe_filters,
            user_ids: &self.user_ids,
            team_ids: &self.team_ids,
        }
    }
}

impl CheckParams for DnsCheck {
    fn check_type(&self) -> &'static str {
        "dns"
    }

    fn validate(&self) -> Result<()> {
        self.common().validate()?;

        if self.expected_ip.is_empty() {
            return Err(Error::validation(
                "invalid value for `ExpectedIP`, must contain non-empty string",
            ));
        }

        if self.name_server.is_empty() {
            return Err(Error::validation(
                "invalid value for `NameServer`, must contain non-empty string",
            ));
        }

        Ok(())
    }

    fn put_params(&self) -> Params {
        let mut m = self.common().to_params_with_tags(&self.tags);
        m.insert("expectedip".to_string(), self.expected_ip.clone());
        m.insert("nameserver".to_string(), self.name_server.clone());
        m
    }
}
