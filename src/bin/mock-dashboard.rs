//! Stand-in dashboard server for integration tests and local demos.
//!
//! Speaks the launcher's handoff protocol:
//! `mock-dashboard <source-unit> --host <host> --port <port> [--debug]`
//! then binds and answers every request with a fixed page. The source unit
//! is accepted but not evaluated.

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "mock-dashboard", version)]
struct Args {
    /// Application-definition source unit.
    source_unit: Option<PathBuf>,

    /// Host to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(long, default_value_t = 8050)]
    port: u16,

    /// Debug mode flag (accepted, ignored).
    #[arg(long)]
    debug: bool,

    /// Accept the handoff but never bind, for readiness-timeout tests.
    #[arg(long, hide = true)]
    hold: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    if args.hold {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
        }
    }

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("mock-dashboard: failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    println!("mock-dashboard listening on {addr} (debug={})", args.debug);

    loop {
        match listener.accept().await {
            Ok((mut socket, _)) => {
                tokio::spawn(async move {
                    // Drain whatever part of the request arrives first.
                    let mut buf = [0u8; 4096];
                    let _ = socket.read(&mut buf).await;

                    let body = "mock dashboard";
                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
            Err(_) => break,
        }
    }
}
