//! Check definitions and their request parameter encoding.
//!
//! Every check variant implements [`CheckParams`]: `put_params` is the full
//! encoding sent on update, `post_params` is derived from it for creation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{Error, Result};

pub mod dns;
pub mod http;
pub mod ping;
pub mod tcp;

pub use dns::DnsCheck;
pub use http::HttpCheck;
pub use ping::PingCheck;
pub use tcp::TcpCheck;

/// Request parameters keyed by the remote field name.
pub type Params = BTreeMap<String, String>;

/// Check intervals in minutes accepted by the service. Zero means "default".
pub const ALLOWED_RESOLUTIONS: [u32; 5] = [1, 5, 15, 30, 60];

pub trait CheckParams {
    /// Discriminant sent as `type` when creating the check.
    fn check_type(&self) -> &'static str;

    /// Returns the first rule the check violates.
    fn validate(&self) -> Result<()>;

    /// Parameters for a full replace (PUT). Empty values are kept so that a
    /// previously set field can be cleared.
    fn put_params(&self) -> Params;

    /// Parameters for creation (POST): the PUT params without empty values,
    /// plus the `type` discriminant.
    fn post_params(&self) -> Params {
        let mut params = self.put_params();

        let dropped = drop_empty(&mut params);
        if dropped > 0 {
            debug!("Dropped {} empty params for {} check", dropped, self.check_type());
        }

        params.insert("type".to_string(), self.check_type().to_string());
        params
    }
}

/// Fields shared by every check variant, borrowed for encoding.
pub(crate) struct CommonFields<'a> {
    pub name: &'a str,
    pub hostname: &'a str,
    pub resolution: u32,
    pub paused: bool,
    pub send_notification_when_down: u32,
    pub notify_again_every: u32,
    pub notify_when_backup: bool,
    pub integration_ids: &'a [u64],
    pub probe_filters: &'a str,
    pub user_ids: &'a [u64],
    pub team_ids: &'a [u64],
}

impl CommonFields<'_> {
    pub fn to_params(&self) -> Params {
        let mut m = Params::new();
        m.insert("name".to_string(), self.name.to_string());
        m.insert("host".to_string(), self.hostname.to_string());
        m.insert("paused".to_string(), self.paused.to_string());
        m.insert("notifyagainevery".to_string(), self.notify_again_every.to_string());
        m.insert("notifywhenbackup".to_string(), self.notify_when_backup.to_string());
        m.insert("integrationids".to_string(), int_list_to_cd_string(self.integration_ids));
        m.insert("probe_filters".to_string(), self.probe_filters.to_string());
        m.insert("userids".to_string(), int_list_to_cd_string(self.user_ids));
        m.insert("teamids".to_string(), int_list_to_cd_string(self.team_ids));

        // The service reads a missing key as "use the default"; an explicit 0 is not.
        insert_nonzero(&mut m, "resolution", self.resolution);
        insert_nonzero(&mut m, "sendnotificationwhendown", self.send_notification_when_down);

        m
    }

    /// Ping checks never send `tags`; every other variant goes through here.
    pub fn to_params_with_tags(&self, tags: &str) -> Params {
        let mut m = self.to_params();
        m.insert("tags".to_string(), tags.to_string());
        m
    }

    pub fn validate(&self) -> Result<()> {
        validate_common(self.name, self.hostname, self.resolution)
    }
}

/// Removes exact empty strings only; "false" and "0" are meaningful.
/// Returns how many entries were removed.
pub(crate) fn drop_empty(params: &mut Params) -> usize {
    let before = params.len();
    params.retain(|_, v| !v.is_empty());
    before - params.len()
}

pub(crate) fn insert_nonzero(params: &mut Params, key: &str, value: u32) {
    if value != 0 {
        params.insert(key.to_string(), value.to_string());
    }
}

/// Joins integers with commas, preserving input order.
pub fn int_list_to_cd_string(integers: &[u64]) -> String {
    integers
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn validate_common(name: &str, hostname: &str, resolution: u32) -> Result<()> {
    if name.is_empty() {
        return Err(Error::validation(
            "invalid value for `Name`, must contain non-empty string",
        ));
    }

    if hostname.is_empty() {
        return Err(Error::validation(
            "invalid value for `Hostname`, must contain non-empty string",
        ));
    }

    if resolution != 0 && !ALLOWED_RESOLUTIONS.contains(&resolution) {
        return Err(Error::validation(format!(
            "invalid value {} for `Resolution`, allowed values are [1,5,15,30,60]",
            resolution
        )));
    }

    Ok(())
}

/// Any check variant, tagged by its `type` discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Check {
    Http(HttpCheck),
    Ping(PingCheck),
    Tcp(TcpCheck),
    Dns(DnsCheck),
}

impl Check {
    pub fn name(&self) -> &str {
        match self {
            Check::Http(ck) => &ck.name,
            Check::Ping(ck) => &ck.name,
            Check::Tcp(ck) => &ck.name,
            Check::Dns(ck) => &ck.name,
        }
    }

    fn inner(&self) -> &dyn CheckParams {
        match self {
            Check::Http(ck) => ck,
            Check::Ping(ck) => ck,
            Check::Tcp(ck) => ck,
            Check::Dns(ck) => ck,
        }
    }
}

impl CheckParams for Check {
    fn check_type(&self) -> &'static str {
        self.inner().check_type()
    }

    fn validate(&self) -> Result<()> {
        self.inner().validate()
    }

    fn put_params(&self) -> Params {
        self.inner().put_params()
    }

    fn post_params(&self) -> Params {
        self.inner().post_params()
    }
}

impl From<HttpCheck> for Check {
    fn from(ck: HttpCheck) -> Self {
        Check::Http(ck)
    }
}

impl From<PingCheck> for Check {
    fn from(ck: PingCheck) -> Self {
        Check::Ping(ck)
    }
}

impl From<TcpCheck> for Check {
    fn from(ck: TcpCheck) -> Self {
        Check::Tcp(ck)
    }
}

impl From<DnsCheck> for Check {
    fn from(ck: DnsCheck) -> Self {
        Check::Dns(ck)
    }
}
