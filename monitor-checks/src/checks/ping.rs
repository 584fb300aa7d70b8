use serde::{Deserialize, Serialize};

use super::{CheckParams, CommonFields, Params, insert_nonzero};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingCheck {
    pub name: String,
    pub hostname: String,
    pub resolution: u32,
    pub paused: bool,
    pub send_notification_when_down: u32,
    pub notify_again_every: u32,
    pub notify_when_backup: bool,
    pub integration_ids: Vec<u64>,
    pub tags: String,
    pub response_time_threshold: u32,
    pub probe_filters: String,
    pub user_ids: Vec<u64>,
    pub team_ids: Vec<u64>,
}

impl PingCheck {
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

impl CheckParams for PingCheck {
    fn check_type(&self) -> &'static str {
        "ping"
    }

    fn validate(&self) -> Result<()> {
        self.common().validate()
    }

    fn put_params(&self) -> Params {
        let mut m = self.common().to_params();
        insert_nonzero(&mut m, "responsetime_threshold", self.response_time_threshold);
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_validate() {
        let mut check = PingCheck {
            name: "fake check".to_string(),
            hostname: "example.com".to_string(),
            ..Default::default()
        };
        assert!(check.validate().is_ok());

        check.hostname.clear();
        let err = check.validate().unwrap_err();
        assert!(matches!(err, Error::Validation(ref msg) if msg.contains("`Hostname`")));
    }

    #[test]
    fn test_put_params() {
        let check = PingCheck {
            name: "fake check".to_string(),
            hostname: "example.com".to_string(),
            resolution: 15,
            integration_ids: vec![7],
            response_time_threshold: 1500,
            ..Default::default()
        };
        let params = check.put_params();

        assert_eq!(params["name"], "fake check");
        assert_eq!(params["host"], "example.com");
        assert_eq!(params["resolution"], "15");
        assert_eq!(params["paused"], "false");
        assert_eq!(params["integrationids"], "7");
        assert_eq!(params["responsetime_threshold"], "1500");
        assert!(!params.contains_key("sendnotificationwhendown"));
    }

    #[test]
    fn test_put_params_never_sends_tags() {
        let check = PingCheck {
            name: "fake check".to_string(),
            hostname: "example.com".to_string(),
            ..Default::default()
        };
        assert!(!check.put_params().contains_key("tags"));

        let tagged = PingCheck {
            tags: "edge".to_string(),
            ..check
        };
        assert!(!tagged.put_params().contains_key("tags"));
        assert!(!tagged.post_params().contains_key("tags"));
    }

    #[test]
    fn test_post_params() {
        let check = PingCheck {
            name: "fake check".to_string(),
            hostname: "example.com".to_string(),
            ..Default::default()
        };
        let params = check.post_params();

        assert_eq!(params["type"], "ping");
        assert_eq!(params["paused"], "false");
        assert!(!params.contains_key("userids"));
        assert!(!params.contains_key("responsetime_threshold"));
    }
}
