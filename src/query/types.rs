use std::fmt;

use crate::util::errors::QueryError;

/// Target of one status lookup. Built from a parsed command or the configured
/// default, and dropped once the query finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    pub host: String,
    pub port: u16,
}

impl ServerAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Snapshot the status service reports for an online server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatus {
    pub version: String,
    pub online: u32,
    pub max: u32,
    pub motd: String,
    pub query_time_ms: u64,
}

/// Outcome of one status lookup. Exactly one variant per query; failures are
/// data, not panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Online(ServerStatus),
    Failed(QueryError),
}
