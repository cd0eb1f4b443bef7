use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::{TcpStream, UdpSocket, lookup_host};

use crate::config::model::Protocol;

/// Dial the target once and return the peer address the OS settled on.
/// The connection is dropped before returning.
pub async fn resolve_address(host: &str, port: u16, protocol: Protocol) -> io::Result<IpAddr> {
    match protocol {
        Protocol::Tcp => resolve_tcp(host, port).await,
        Protocol::Udp => resolve_udp(host, port).await,
    }
}

async fn resolve_tcp(host: &str, port: u16) -> io::Result<IpAddr> {
    let stream = TcpStream::connect((host, port)).await?;
    let peer = stream.peer_addr()?;
    Ok(peer.ip())
}

// A connected UDP socket only fixes the route; it says nothing about whether the host is up.
async fn resolve_udp(host: &str, port: u16) -> io::Result<IpAddr> {
    let mut last_err = None;

    for addr in lookup_host((host, port)).await? {
        let local: SocketAddr = match addr {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };

        let socket = match UdpSocket::bind(local).await {
            Ok(socket) => socket,
            Err(e) => {
                last_err = Some(e);
                continue;
            }
        };

        match socket.connect(addr).await {
            Ok(()) => return Ok(socket.peer_addr()?.ip()),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("could not resolve {host} to any address"),
        )
    }))
}
