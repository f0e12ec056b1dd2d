//! TCP front end for the tuple space
//!
//! One OS thread per accepted connection (unbounded, unpooled); the
//! shared [`TupleSpace`] is the only state crossing connections. Each
//! handler decodes one line into a command plus tuple, dispatches to
//! the engine, writes one reply line, and loops until the peer
//! disconnects. A request is fully answered before the next is read,
//! so a blocking `-rd`/`-in` holds its connection (and only its
//! connection) open.

#![warn(clippy::all)]

use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

use linda_engine::TupleSpace;
use linda_wire::{parse_request, Command, Reply, Request};
use tracing::{debug, info, warn};

/// Accept connections forever, spawning one handler thread each.
///
/// Accept errors are logged and the loop continues; they never take the
/// server down. The listener is taken by value so callers can bind an
/// ephemeral port first and read the address back.
pub fn serve(listener: TcpListener, space: Arc<TupleSpace>) -> io::Result<()> {
    loop {
        match listener.accept() {
            Ok((stream, peer)) => {
                info!(%peer, "client connected");
                let space = Arc::clone(&space);
                thread::spawn(move || match handle_connection(stream, &space) {
                    Ok(()) => info!(%peer, "client disconnected"),
                    Err(err) => warn!(%peer, error = %err, "connection closed with error"),
                });
            }
            Err(err) => warn!(error = %err, "failed to accept connection"),
        }
    }
}

/// Per-connection request/reply loop.
///
/// Transport failure (including the peer closing) ends the loop; it
/// never affects the engine or other connections. Blank lines are
/// skipped. Protocol errors are answered in-band and keep the
/// connection open.
pub fn handle_connection(stream: TcpStream, space: &TupleSpace) -> io::Result<()> {
    let peer = stream.peer_addr()?;
    let reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = dispatch(line, space);
        debug!(%peer, request = line, reply = %reply, "handled request");
        writer.write_all(reply.to_string().as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(())
}

/// Decode and validate one request line, run it against the engine,
/// and produce the reply. `-rd` and `-in` may block the calling thread
/// until a matching tuple exists.
fn dispatch(line: &str, space: &TupleSpace) -> Reply {
    let request = match parse_request(line) {
        Ok(request) => request,
        Err(err) => return Reply::Error(err.to_string()),
    };
    if let Err(err) = request.validate() {
        return Reply::Error(err.to_string());
    }

    let Request { command, tuple } = request;
    match command {
        Command::Out => {
            space.out(tuple.clone());
            Reply::Stored(tuple)
        }
        Command::Rd => Reply::Matched(space.rd(&tuple)),
        Command::In => Reply::Taken(space.take(&tuple)),
    }
}
