use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use super::result::Reachability;

const READ_BUFFER_SIZE: usize = 1024;

/// Connect to `address:port` and try a single read, both bounded by `timeout`.
///
/// A failed connect is scored as full loss. Once connected, a read that yields
/// data is also scored as full loss, while a read that times out, hits EOF or
/// errors is scored as a clean probe. A zero timeout leaves the connect
/// unbounded and makes the read deadline expire immediately. A `None` timeout
/// is a deadline already in the past, so the connect fails without dialing.
pub async fn probe_tcp(address: IpAddr, port: u16, timeout: Option<Duration>) -> Reachability {
    let target = SocketAddr::new(address, port);

    let Some(timeout) = timeout else {
        log::debug!("Connect to {target} skipped: negative timeout");
        return Reachability::CONNECT_FAILED;
    };

    let mut stream = match connect(target, timeout).await {
        Ok(stream) => stream,
        Err(e) => {
            log::debug!("Connect to {target} failed: {e}");
            return Reachability::CONNECT_FAILED;
        }
    };

    if timeout.is_zero() {
        return Reachability::NO_DATA;
    }

    let mut buf = [0u8; READ_BUFFER_SIZE];
    match tokio::time::timeout(timeout, stream.read(&mut buf)).await {
        Ok(Ok(n)) if n > 0 => {
            log::debug!("Read {n} bytes from {target}");
            Reachability::DATA_RECEIVED
        }
        Ok(Ok(_)) => {
            log::debug!("{target} closed the connection without data");
            Reachability::NO_DATA
        }
        Ok(Err(e)) => {
            log::debug!("Read from {target} failed: {e}");
            Reachability::NO_DATA
        }
        Err(_) => {
            log::debug!("Read from {target} timed out after {timeout:?}");
            Reachability::NO_DATA
        }
    }
}

async fn connect(target: SocketAddr, timeout: Duration) -> io::Result<TcpStream> {
    if timeout.is_zero() {
        return TcpStream::connect(target).await;
    }

    match tokio::time::timeout(timeout, TcpStream::connect(target)).await {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("connect timed out after {timeout:?}"),
        )),
    }
}
