use serde::{Deserialize, Serialize};

use super::{CheckParams, CommonFields, Params};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpCheck {
    pub name: String,
    pub hostname: String,
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
    /// Mandatory; always sent, even when zero.
    pub port: u32,
    pub string_to_send: String,
    pub string_to_expect: String,
}

impl TcpCheck {
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

impl CheckParams for TcpCheck {
    fn check_type(&self) -> &'static str {
        "tcp"
    }

    fn validate(&self) -> Result<()> {
        self.common().validate()?;

        if !(1..=65535).contains(&self.port) {
            return Err(Error::validation(
                "invalid value for `Port`, must contain an integer >= 1 and <= 65535",
            ));
        }

        Ok(())
    }

    fn put_params(&self) -> Params {
        let mut m = self.common().to_params_with_tags(&self.tags);
        m.insert("port".to_string(), self.port.to_string());

        if !self.string_to_send.is_empty() {
            m.insert("stringtosend".to_string(), self.string_to_send.clone());
        }

        if !self.string_to_expect.is_empty() {
            m.insert("stringtoexpect".to_string(), self.string_to_expect.clone());
        }

        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_with_port(port: u32) -> TcpCheck {
        TcpCheck {
            name: "fake check".to_string(),
            hostname: "example.com".to_string(),
            port,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_port_range() {
        assert!(check_with_port(1).validate().is_ok());
        assert!(check_with_port(8080).validate().is_ok());
        assert!(check_with_port(65535).validate().is_ok());

        for port in [0, 65536, 100_000] {
            let err = check_with_port(port).validate().unwrap_err();
            assert!(
                matches!(err, Error::Validation(ref msg) if msg.contains("`Port`")),
                "port {} should be rejected",
                port
            );
        }
    }

    #[test]
    fn test_port_error_message() {
        let err = check_with_port(0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: invalid value for `Port`, must contain an integer >= 1 and <= 65535"
        );
    }

    #[test]
    fn test_put_params_keeps_zero_port() {
        let params = check_with_port(0).put_params();
        assert_eq!(params["port"], "0");
        assert!(!params.contains_key("stringtosend"));
        assert!(!params.contains_key("stringtoexpect"));
    }

    #[test]
    fn test_put_params() {
        let check = TcpCheck {
            string_to_send: "HELO".to_string(),
            string_to_expect: "250".to_string(),
            tags: "smtp".to_string(),
            ..check_with_port(25)
        };
        let params = check.put_params();

        assert_eq!(params["port"], "25");
        assert_eq!(params["stringtosend"], "HELO");
        assert_eq!(params["stringtoexpect"], "250");
        assert_eq!(params["tags"], "smtp");
    }

    #[test]
    fn test_post_params() {
        let params = check_with_port(0).post_params();
        assert_eq!(params["type"], "tcp");
        assert_eq!(params["port"], "0");
    }
}
