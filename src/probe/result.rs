use std::net::IpAddr;

/// The outcome of one resolve-then-probe iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// 1-based position in the run.
    pub sequence: usize,
    /// Resolved peer address, `None` when resolution failed.
    pub address: Option<IpAddr>,
    pub success: bool,
    /// Either 0.0 or 1.0.
    pub loss: f64,
}

impl ProbeResult {
    pub fn new(sequence: usize) -> Self {
        ProbeResult {
            sequence,
            address: None,
            success: false,
            loss: 0.0,
        }
    }

    pub fn resolved(sequence: usize, address: IpAddr, reachability: Reachability) -> Self {
        ProbeResult {
            sequence,
            address: Some(address),
            success: reachability.success,
            loss: reachability.loss,
        }
    }
}

/// What a single TCP reachability probe observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reachability {
    pub success: bool,
    pub loss: f64,
}

impl Reachability {
    /// The connect attempt failed or timed out.
    pub const CONNECT_FAILED: Reachability = Reachability {
        success: false,
        loss: 1.0,
    };

    /// Connected, but nothing arrived before the read deadline.
    pub const NO_DATA: Reachability = Reachability {
        success: true,
        loss: 0.0,
    };

    /// Connected and the peer sent at least one byte.
    pub const DATA_RECEIVED: Reachability = Reachability {
        success: true,
        loss: 1.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_new_result_is_no_response() {
        let result = ProbeResult::new(3);
        assert_eq!(result.sequence, 3);
        assert_eq!(result.address, None);
        assert!(!result.success);
        assert_eq!(result.loss, 0.0);
    }

    #[test]
    fn test_resolved_result_takes_reachability() {
        let addr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
        let result = ProbeResult::resolved(1, addr, Reachability::CONNECT_FAILED);
        assert_eq!(result.address, Some(addr));
        assert!(!result.success);
        assert_eq!(result.loss, 1.0);
    }
}
