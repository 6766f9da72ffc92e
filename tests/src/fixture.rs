//! # Fixture Feed
//!
//! A tiny HTTP/1.1 server on `127.0.0.1` that answers GET requests from a fixed
//! routing table. Every connection is served once and closed.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub const CATALOG_PATH: &str = "/v1/currencies.json";

pub const CATALOG_BODY: &str = r#"{"eur":"Euro","uah":"Ukrainian Hryvnia","usd":"US Dollar"}"#;
pub const USD_BODY: &str = r#"{"date":"2024-01-01","usd":{"eur":0.86389992,"uah":41.71458864,"usd":1}}"#;
pub const EUR_BODY: &str = r#"{"eur":{"usd":1.0875}}"#;

#[derive(Clone)]
struct Canned {
    status: u16,
    body: String,
}

#[derive(Default)]
pub struct FixtureBuilder {
    routes: HashMap<String, Canned>,
}

impl FixtureBuilder {
    pub fn route(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            Canned {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn start(self) -> anyhow::Result<FixtureServer> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let hits: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let routes = self.routes;
        let hits_ref = hits.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let _ = serve(stream, &routes, &hits_ref);
            }
        });

        Ok(FixtureServer { addr, hits })
    }
}

pub struct FixtureServer {
    addr: SocketAddr,
    hits: Arc<Mutex<Vec<String>>>,
}

impl FixtureServer {
    pub fn builder() -> FixtureBuilder {
        FixtureBuilder::default()
    }

    /// A feed knowing `usd`, `eur` and `uah`, with rate documents for `usd` and `eur`.
    pub fn sample_feed() -> anyhow::Result<FixtureServer> {
        Self::builder()
            .route(CATALOG_PATH, 200, CATALOG_BODY)
            .route("/v1/currencies/usd.json", 200, USD_BODY)
            .route("/v1/currencies/eur.json", 200, EUR_BODY)
            .start()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requested paths, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().map(|hits| hits.clone()).unwrap_or_default()
    }
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

fn serve(
    mut stream: TcpStream,
    routes: &HashMap<String, Canned>,
    hits: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    loop {
        let mut header = String::new();
        let read = reader.read_line(&mut header)?;
        if read == 0 || header.trim_end().is_empty() {
            break;
        }
    }

    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    if let Ok(mut hits) = hits.lock() {
        hits.push(path.clone());
    }

    let canned = routes.get(&path).cloned().unwrap_or(Canned {
        status: 404,
        body: String::new(),
    });

    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        canned.status,
        reason_phrase(canned.status),
        canned.body.len(),
        canned.body
    )?;
    stream.flush()
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
