use serde::Deserialize;

/// Default probe settings read from the YAML config file.
/// Every field is optional; a value left out here is taken from the
/// command line or asked for interactively.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ProbeDefaults {
    /// The number of probes to send.
    pub count: Option<u64>,

    /// The probe timeout in milliseconds.
    pub timeout_ms: Option<u64>,

    /// The port to resolve and probe.
    pub port: Option<u16>,

    /// The protocol used for address resolution, `TCP` or `UDP`.
    /// Kept as text so it goes through the same validation as a prompt answer.
    pub protocol: Option<String>,
}

impl ProbeDefaults {
    pub fn count_text(&self) -> Option<String> {
        self.count.map(|count| count.to_string())
    }

    pub fn timeout_text(&self) -> Option<String> {
        self.timeout_ms.map(|timeout| timeout.to_string())
    }

    pub fn port_text(&self) -> Option<String> {
        self.port.map(|port| port.to_string())
    }
}
