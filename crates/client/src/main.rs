//! Command-line client for the tuple-space server
//!
//! One request per invocation: compose the request line from argv,
//! validate it locally with the shared wire codec, send it, print the
//! single reply line. `-rd` and `-in` block until the space has a
//! matching tuple, so the process may hang by design.
//!
//! Exits 1 on usage errors, malformed tuples, a wildcard in `-out`, or
//! connection failure; 0 otherwise.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream};

use anyhow::{bail, Context, Result};
use clap::Parser;
use linda_wire::{parse_request, ProtocolError};

/// Send one -out/-rd/-in request to a tuple-space server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address of the tuple-space server.
    #[arg(long, default_value = "127.0.0.1:8080")]
    server: SocketAddr,

    /// Operation: -out, -rd or -in.
    #[arg(allow_hyphen_values = true)]
    command: String,

    /// Tuple literal, e.g. '("job", 42, ?)'. May span several shell
    /// words; they are re-joined with single spaces.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    tuple: Vec<String>,
}

/// Assemble and locally validate the request line before any I/O, so
/// bad requests fail fast without a server.
fn assemble_request(command: &str, tuple_words: &[String]) -> Result<String, ProtocolError> {
    let line = format!("{} {}", command, tuple_words.join(" "));
    let request = parse_request(&line)?;
    request.validate()?;
    Ok(line)
}

fn exchange(server: SocketAddr, line: &str) -> Result<String> {
    let stream = TcpStream::connect(server)
        .with_context(|| format!("failed to connect to {server}"))?;
    let mut reader = BufReader::new(stream.try_clone().context("clone stream")?);
    let mut writer = stream;

    writeln!(writer, "{line}").context("failed to send request")?;

    let mut reply = String::new();
    reader.read_line(&mut reply).context("failed to read reply")?;
    if reply.is_empty() {
        bail!("server closed the connection without replying");
    }
    Ok(reply.trim_end().to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let line = assemble_request(&cli.command, &cli.tuple)
        .map_err(|err| anyhow::anyhow!("{err}"))?;
    let reply = exchange(cli.server, &line)?;
    println!("{reply}");
    Ok(())
}
