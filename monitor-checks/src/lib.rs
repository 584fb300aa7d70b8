pub mod checks;
pub mod config;
pub mod error;
pub mod logging;
pub mod summary;

pub use crate::checks::{Check, CheckParams, DnsCheck, HttpCheck, Params, PingCheck, TcpCheck};
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::summary::SummaryPerformanceRequest;
