// src/core/net.rs
//
// Blocking HTTP GET with a rotating User-Agent and bounded, linearly
// backed-off retries. One `Fetcher` per run; the UA cursor lives in it.

use std::thread::sleep;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

use crate::config::consts;
use crate::config::options::FetchOptions;
use crate::error::FetchError;

const FALLBACK_UA: &str = concat!("bench_scrape/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a URL into page text.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> Result<String, FetchError>;
}

pub struct Fetcher {
    client: Client,
    opts: FetchOptions,
    ua_cursor: usize,
}

impl Fetcher {
    pub fn new(opts: FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .build()
            .map_err(|e| FetchError::Transport { url: s!("(client setup)"), msg: e.to_string() })?;
        Ok(Self { client, opts, ua_cursor: 0 })
    }

    /// Next User-Agent in the pool, round-robin.
    pub fn next_user_agent(&mut self) -> String {
        if self.opts.user_agents.is_empty() {
            return s!(FALLBACK_UA);
        }
        let ua = self.opts.user_agents[self.ua_cursor % self.opts.user_agents.len()].clone();
        self.ua_cursor = self.ua_cursor.wrapping_add(1);
        ua
    }

    fn get_once(&mut self, url: &str) -> Result<String, FetchError> {
        let ua = self.next_user_agent();
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, ua)
            .header(ACCEPT, consts::ACCEPT)
            .header(ACCEPT_LANGUAGE, consts::ACCEPT_LANGUAGE)
            .send()
            .map_err(|e| classify(url, e))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { url: s!(url) });
        }
        if !status.is_success() {
            return Err(FetchError::Http { status: status.as_u16(), url: s!(url) });
        }
        resp.text().map_err(|e| classify(url, e))
    }
}

impl Fetch for Fetcher {
    fn fetch(&mut self, url: &str) -> Result<String, FetchError> {
        let attempts = self.opts.max_retries.max(1);
        let mut last = s!();

        for attempt in 1..=attempts {
            match self.get_once(url) {
                Ok(body) => {
                    logd!("Fetch: {} ({} bytes, attempt {})", url, body.len(), attempt);
                    return Ok(body);
                }
                Err(e) if !e.is_transient() => {
                    logd!("Fetch: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    logw!("Fetch: attempt {}/{} failed: {}", attempt, attempts, e);
                    last = e.to_string();
                    if attempt < attempts {
                        sleep(self.opts.retry_delay * attempt);
                    }
                }
            }
        }

        Err(FetchError::Exhausted { url: s!(url), attempts, last })
    }
}

fn classify(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout { url: s!(url) }
    } else {
        FetchError::Transport { url: s!(url), msg: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    /// Loopback server answering one connection per status, in order.
    /// Joining the handle gives the number of requests it saw.
    fn serve(statuses: &[u16]) -> (String, JoinHandle<usize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/dataset", listener.local_addr().unwrap());
        let statuses = statuses.to_vec();

        let handle = thread::spawn(move || {
            let mut hits = 0;
            for status in statuses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut req = Vec::new();
                let mut buf = [0u8; 1024];
                while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    req.extend_from_slice(&buf[..n]);
                }
                hits += 1;
                let body = format!("status {status}");
                let resp = format!(
                    "HTTP/1.1 {status} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(resp.as_bytes()).unwrap();
            }
            hits
        });
        (url, handle)
    }

    fn opts(uas: &[&str], retries: u32) -> FetchOptions {
        FetchOptions {
            user_agents: uas.iter().map(|s| s!(*s)).collect(),
            max_retries: retries,
            retry_delay: Duration::ZERO,
            timeout: Duration::from_millis(300),
        }
    }

    #[test]
    fn user_agents_rotate_round_robin() {
        let mut f = Fetcher::new(opts(&["a", "b", "c"], 1)).unwrap();
        let seen: Vec<String> = (0..5).map(|_| f.next_user_agent()).collect();
        assert_eq!(seen, vec!["a", "b", "c", "a", "b"]);
    }

    #[test]
    fn empty_pool_uses_crate_agent() {
        let mut f = Fetcher::new(opts(&[], 1)).unwrap();
        assert!(f.next_user_agent().starts_with("bench_scrape/"));
    }

    #[test]
    fn unreachable_host_is_exhausted_after_max_retries() {
        // Port 9 on loopback: connection refused, no network needed.
        let mut f = Fetcher::new(opts(&["a", "b"], 3)).unwrap();
        match f.fetch("http://127.0.0.1:9/") {
            Err(FetchError::Exhausted { attempts, .. }) => assert_eq!(attempts, 3),
            other => panic!("expected Exhausted, got {other:?}"),
        }
        // One UA consumed per attempt.
        assert_eq!(f.next_user_agent(), "b");
    }

    #[test]
    fn server_errors_are_retried_up_to_the_bound() {
        let (url, server) = serve(&[503, 500, 502]);
        let mut f = Fetcher::new(opts(&["a"], 3)).unwrap();
        match f.fetch(&url) {
            Err(FetchError::Exhausted { attempts, last, .. }) => {
                assert_eq!(attempts, 3);
                assert!(last.contains("502"), "{last}");
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
        assert_eq!(server.join().unwrap(), 3);
    }

    #[test]
    fn success_after_a_transient_failure() {
        let (url, server) = serve(&[500, 200]);
        let mut f = Fetcher::new(opts(&["a"], 3)).unwrap();
        assert_eq!(f.fetch(&url).unwrap(), "status 200");
        assert_eq!(server.join().unwrap(), 2);
    }

    #[test]
    fn not_found_goes_through_the_same_retries() {
        let (url, server) = serve(&[404, 404, 404]);
        let mut f = Fetcher::new(opts(&["a"], 3)).unwrap();
        match f.fetch(&url) {
            Err(FetchError::Exhausted { attempts, last, .. }) => {
                assert_eq!(attempts, 3);
                assert!(last.starts_with("not found"), "{last}");
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
        assert_eq!(server.join().unwrap(), 3);
    }
}
