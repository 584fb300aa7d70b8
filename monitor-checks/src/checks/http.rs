use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CheckParams, CommonFields, Params, insert_nonzero};
use crate::error::{Error, Result};

/// An HTTP(S) check against a URL on `hostname`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpCheck {
    pub name: String,
    pub hostname: String,
    pub resolution: u32,
    pub paused: bool,
    pub send_notification_when_down: u32,
    pub notify_again_every: u32,
    pub notify_when_backup: bool,
    pub url: String,
    pub encryption: bool,
    pub port: u32,
    pub username: String,
    pub password: String,
    pub should_contain: String,
    pub should_not_contain: String,
    pub post_data: String,
    pub request_headers: HashMap<String, String>,
    pub integration_ids: Vec<u64>,
    pub response_time_threshold: u32,
    pub tags: String,
    pub probe_filters: String,
    pub user_ids: Vec<u64>,
    pub team_ids: Vec<u64>,
    /// Left out of the params entirely when `None`.
    pub verify_certificate: Option<bool>,
    /// Left out of the params entirely when `None`.
    pub ssl_down_days_before: Option<u32>,
}

impl HttpCheck {
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

impl CheckParams for HttpCheck {
    fn check_type(&self) -> &'static str {
        "http"
    }

    fn validate(&self) -> Result<()> {
        self.common().validate()?;

        if !self.should_contain.is_empty() && !self.should_not_contain.is_empty() {
            return Err(Error::validation(
                "`ShouldContain` and `ShouldNotContain` must not be declared at the same time",
            ));
        }

        Ok(())
    }

    fn put_params(&self) -> Params {
        let mut m = self.common().to_params_with_tags(&self.tags);
        m.insert("url".to_string(), self.url.clone());
        m.insert("encryption".to_string(), self.encryption.to_string());
        m.insert("postdata".to_string(), self.post_data.clone());

        insert_nonzero(&mut m, "port", self.port);
        insert_nonzero(&mut m, "responsetime_threshold", self.response_time_threshold);

        if let Some(verify) = self.verify_certificate {
            m.insert("verify_certificate".to_string(), verify.to_string());
        }

        if let Some(days) = self.ssl_down_days_before {
            m.insert("ssl_down_days_before".to_string(), days.to_string());
        }

        // Exactly one of the pair is always sent so an update can clear it.
        if !self.should_contain.is_empty() {
            m.insert("shouldcontain".to_string(), self.should_contain.clone());
        } else {
            m.insert("shouldnotcontain".to_string(), self.should_not_contain.clone());
        }

        if !self.username.is_empty() {
            m.insert(
                "auth".to_string(),
                format!("{}:{}", self.username, self.password),
            );
        }

        let mut keys: Vec<&String> = self.request_headers.keys().collect();
        keys.sort();
        for (i, key) in keys.into_iter().enumerate() {
            m.insert(
                format!("requestheader{}", i),
                format!("{}:{}", key, self.request_headers[key]),
            );
        }

        m
    }
}
