use crate::config::model::ProbeRequest;

use super::prelude::*;
use super::probe::probe_tcp;
use super::report;
use super::resolve::resolve_address;

/// Run `request.count` probes one after another and return their results in order.
pub async fn run_probes(request: &ProbeRequest) -> Vec<ProbeResult> {
    log::debug!(
        "Probing {} (path {}) on port {} via {}, {} probes, timeout {:?}",
        request.target.host,
        request.target.path,
        request.port,
        request.protocol,
        request.count,
        request.timeout
    );

    let mut results = Vec::new();
    for sequence in 1..=request.count {
        results.push(run_probe(request, sequence).await);
    }
    results
}

/// Resolve the target, then probe the resolved address once.
/// A resolution failure is reported and leaves the result at its defaults.
async fn run_probe(request: &ProbeRequest, sequence: usize) -> ProbeResult {
    let address =
        match resolve_address(&request.target.host, request.port, request.protocol).await {
            Ok(address) => address,
            Err(e) => {
                println!("{}", resolution_failure(&e));
                return ProbeResult::new(sequence);
            }
        };

    let reachability = probe_tcp(address, request.port, request.timeout).await;
    log::debug!("Probe {sequence}: {address} -> {reachability:?}");

    ProbeResult::resolved(sequence, address, reachability)
}

fn resolution_failure(err: &std::io::Error) -> String {
    format!("Error performing traceroute: {}", report(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::{ProbeInput, Protocol, Target};
    use crate::output::format_result;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    fn request(port: u16, protocol: Protocol, count: usize) -> ProbeRequest {
        ProbeRequest {
            target: Target {
                host: "127.0.0.1".to_string(),
                path: "/".to_string(),
            },
            port,
            protocol,
            timeout: Some(Duration::from_millis(100)),
            count,
        }
    }

    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_zero_count_runs_nothing() {
        let results = run_probes(&request(closed_port().await, Protocol::Tcp, 0)).await;
        assert!(results.is_empty());
    }

    #[test]
    fn test_resolution_failure_message() {
        let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        assert_eq!(
            resolution_failure(&err),
            "Error performing traceroute: connection refused"
        );
    }

    #[tokio::test]
    async fn test_failed_resolution_is_no_response() {
        let results = run_probes(&request(closed_port().await, Protocol::Tcp, 3)).await;

        assert_eq!(results.len(), 3);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(*result, ProbeResult::new(i + 1));
        }
    }

    #[tokio::test]
    async fn test_udp_resolution_then_refused_probe() {
        let results = run_probes(&request(closed_port().await, Protocol::Udp, 2)).await;

        assert_eq!(results.len(), 2);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.sequence, i + 1);
            assert_eq!(result.address, Some(LOCALHOST));
            assert!(!result.success);
            assert_eq!(result.loss, 1.0);
        }
    }

    #[tokio::test]
    async fn test_silent_peer_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let results = run_probes(&request(port, Protocol::Tcp, 2)).await;

        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.address, Some(LOCALHOST));
            assert!(result.success);
            assert_eq!(result.loss, 0.0);
        }
    }

    #[tokio::test]
    async fn test_negative_timeout_reports_connection_failed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let input = ProbeInput {
            target: "http://127.0.0.1/".to_string(),
            count: "1".to_string(),
            timeout_ms: "-100".to_string(),
            port: port.to_string(),
            protocol: "TCP".to_string(),
        };
        let req = ProbeRequest::from_input(&input).unwrap();
        let results = run_probes(&req).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].address, Some(LOCALHOST));
        assert!(!results[0].success);
        assert_eq!(results[0].loss, 1.0);
        assert_eq!(
            format_result(&results[0]),
            "Probe 1: Address: 127.0.0.1, Connection failed"
        );
    }

    #[tokio::test]
    async fn test_talking_peer_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let _ = stream.write_all(b"220 ready\r\n").await;
                    tokio::time::sleep(Duration::from_millis(500)).await;
                });
            }
        });

        let mut req = request(port, Protocol::Tcp, 2);
        req.timeout = Some(Duration::from_millis(1000));
        let results = run_probes(&req).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sequence, 1);
        assert_eq!(results[1].sequence, 2);
        for result in &results {
            assert!(result.success);
            assert_eq!(result.loss, 1.0);
        }
    }
}
