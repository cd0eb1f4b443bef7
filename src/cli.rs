use clap::Parser;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};

use crate::config::model::ProbeInput;
use crate::config::probe_config::ProbeDefaults;

const COUNT_PROMPT: &str = "Enter the number of probes to send: ";
const TIMEOUT_PROMPT: &str = "Enter the timeout in milliseconds: ";
const PORT_PROMPT: &str = "Enter the port number: ";
const PROTOCOL_PROMPT: &str = "Enter the protocol type (TCP/UDP): ";

/// Resolve a target and repeatedly probe it over TCP
#[derive(Parser, Debug, Clone)]
#[command(name = "tcprobe")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target URL, e.g. http://example.com/path
    pub target: String,

    /// Number of probes to send
    #[arg(short = 'c', long = "count", env = "PROBE_COUNT")]
    pub count: Option<String>,

    /// Probe timeout in milliseconds
    #[arg(short = 't', long = "timeout", env = "PROBE_TIMEOUT_MS")]
    pub timeout: Option<String>,

    /// Port to resolve and probe
    #[arg(short = 'p', long = "port", env = "PROBE_PORT")]
    pub port: Option<String>,

    /// Protocol used to resolve the address (TCP or UDP)
    #[arg(short = 'P', long = "protocol", env = "PROBE_PROTOCOL")]
    pub protocol: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Gather every probe setting, asking on `reader` for anything that was
/// neither passed on the command line nor set in the config file.
pub async fn collect_input<R>(
    args: Args,
    defaults: &ProbeDefaults,
    reader: &mut R,
) -> io::Result<ProbeInput>
where
    R: AsyncBufRead + Unpin,
{
    let count = value_or_prompt(args.count, defaults.count_text(), reader, COUNT_PROMPT).await?;
    let timeout_ms =
        value_or_prompt(args.timeout, defaults.timeout_text(), reader, TIMEOUT_PROMPT).await?;
    let port = value_or_prompt(args.port, defaults.port_text(), reader, PORT_PROMPT).await?;
    let protocol = value_or_prompt(
        args.protocol,
        defaults.protocol.clone(),
        reader,
        PROTOCOL_PROMPT,
    )
    .await?;

    Ok(ProbeInput {
        target: args.target,
        count,
        timeout_ms,
        port,
        protocol,
    })
}

async fn value_or_prompt<R>(
    flag: Option<String>,
    default: Option<String>,
    reader: &mut R,
    prompt: &str,
) -> io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    match flag.or(default) {
        Some(value) => Ok(value),
        None => ask(reader, prompt).await,
    }
}

// End of input reads as an empty answer.
async fn ask<R>(reader: &mut R, prompt: &str) -> io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut stdout = io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line.trim().to_string())
}
