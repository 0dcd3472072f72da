//! Local stand-in for the remote oracle.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use recursive_ask::types::config::OracleConfig;

/// Request seen by the fake oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub seed: String,
    pub n: u64,
}

type Handler = dyn Fn(&str, u64) -> (u16, String) + Send + Sync;

/// HTTP server answering `GET /api/recursive/ask?seed=..&n=..`.
///
/// The handler receives `(seed, n)` and returns `(status, body)`. The server
/// thread lives until the test process exits.
pub struct FakeOracle {
    addr: SocketAddr,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl FakeOracle {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&str, u64) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake oracle");
        let addr = listener.local_addr().expect("local addr");
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handler: Arc<Handler> = Arc::new(handler);
        let log = Arc::clone(&seen);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                serve(stream, handler.as_ref(), &log);
            }
        });

        Self { addr, seen }
    }

    /// Oracle that answers `10 * n + 1` for every `n`.
    pub fn linear() -> Self {
        Self::start(|_, n| (200, format!(r#"{{"result": {}}}"#, answer(n))))
    }

    pub fn url(&self) -> String {
        format!("http://{}/api/recursive/ask", self.addr)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self, n: u64) -> usize {
        self.requests().iter().filter(|r| r.n == n).count()
    }
}

/// Answer of [`FakeOracle::linear`].
pub fn answer(n: u64) -> i64 {
    10 * n as i64 + 1
}

/// `f(n)` computed bottom-up against [`answer`].
pub fn expected(n: u64) -> i64 {
    let mut table: Vec<i64> = Vec::new();
    for k in 0..=n as usize {
        let value = match k {
            0 => 1,
            2 => 2,
            k if k % 2 == 1 => answer(k as u64),
            k => table[k - 1] + table[k - 2] + table[k - 3] + table[k - 4],
        };
        table.push(value);
    }
    table[n as usize]
}

/// An address nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/api/recursive/ask", addr)
}

/// Oracle configuration for `url` that ignores any proxy set in the environment.
pub fn oracle_config(url: String) -> OracleConfig {
    let mut config = OracleConfig::new(url);
    config.system_proxy = false;
    config
}

fn serve(mut stream: TcpStream, handler: &Handler, seen: &Mutex<Vec<SeenRequest>>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => {}
        }
    }

    let query = request_line
        .split_whitespace()
        .nth(1)
        .and_then(|target| target.split_once('?'))
        .map(|(_, q)| q.to_string())
        .unwrap_or_default();

    let mut seed = None;
    let mut n = None;
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("seed", v)) => seed = Some(v.replace('+', " ")),
            Some(("n", v)) => n = v.parse::<u64>().ok(),
            _ => {}
        }
    }

    let (status, body) = match (seed, n) {
        (Some(seed), Some(n)) => {
            seen.lock().unwrap().push(SeenRequest {
                seed: seed.clone(),
                n,
            });
            handler(&seed, n)
        }
        _ => (400, r#"{"error": "bad request"}"#.to_string()),
    };

    let response = format!(
        "HTTP/1.1 {} Fake\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
