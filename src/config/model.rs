use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::{Host, Url};

use crate::error::ProbeError;

/// Transport used to resolve the target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl FromStr for Protocol {
    type Err = ProbeError;

    /// Only the exact tokens `TCP` and `UDP` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TCP" => Ok(Protocol::Tcp),
            "UDP" => Ok(Protocol::Udp),
            other => Err(ProbeError::InvalidProtocol(other.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "TCP"),
            Protocol::Udp => write!(f, "UDP"),
        }
    }
}

/// Host and path extracted from the target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host name or IP literal, without IPv6 brackets.
    pub host: String,
    pub path: String,
}

impl Target {
    pub fn parse(input: &str) -> Result<Self, ProbeError> {
        let invalid = || ProbeError::InvalidTarget(input.to_string());

        let url = Url::parse(input).map_err(|_| invalid())?;
        let host = match url.host().ok_or_else(invalid)? {
            Host::Domain(domain) => domain.to_string(),
            Host::Ipv4(addr) => addr.to_string(),
            Host::Ipv6(addr) => addr.to_string(),
        };
        if host.is_empty() {
            return Err(invalid());
        }

        let path = match url.path() {
            "" => "/".to_string(),
            path => path.to_string(),
        };

        Ok(Target { host, path })
    }
}

/// Raw, unvalidated values as collected from flags, config and prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeInput {
    pub target: String,
    pub count: String,
    pub timeout_ms: String,
    pub port: String,
    pub protocol: String,
}

/// A validated probe run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    pub target: Target,
    pub port: u16,
    pub protocol: Protocol,
    /// `None` when a negative timeout was given: that deadline has already passed.
    pub timeout: Option<Duration>,
    pub count: usize,
}

impl ProbeRequest {
    /// Builds a request from raw input. The target URL is checked first, then
    /// the protocol token; numeric fields never fail and fall back to zero.
    pub fn from_input(input: &ProbeInput) -> Result<Self, ProbeError> {
        let target = Target::parse(&input.target)?;
        let protocol = input.protocol.parse()?;

        Ok(ProbeRequest {
            target,
            port: parse_or_zero(&input.port),
            protocol,
            timeout: parse_timeout(&input.timeout_ms),
            count: parse_or_zero(&input.count),
        })
    }
}

/// Parses a millisecond timeout. Malformed text counts as zero, while a
/// negative value yields `None`.
pub fn parse_timeout(input: &str) -> Option<Duration> {
    let millis: i64 = parse_or_zero(input);
    u64::try_from(millis).ok().map(Duration::from_millis)
}

/// Parses a number, treating malformed or out-of-range text as zero.
pub fn parse_or_zero<T>(input: &str) -> T
where
    T: FromStr + Default,
{
    input.trim().parse().unwrap_or_default()
}
