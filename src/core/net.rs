// src/core/net.rs
// Blocking HTTP GET via a shared ureq agent. The Alfresco server speaks
// HTTPS only, so everything goes through the agent's TLS stack.

use std::io::Read;

use crate::config::consts::USER_AGENT;
use crate::error::CavaError;

pub struct Fetcher {
    agent: ureq::Agent,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    /// GET `url` and return the body as text (lossy UTF-8).
    /// Any status >= 400 is an error carrying the status and URL.
    pub fn get_text(&self, url: &str) -> Result<String, CavaError> {
        tracing::debug!("GET {url}");
        let resp = match self.agent.get(url).header("User-Agent", USER_AGENT).call() {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(code)) => {
                return Err(CavaError::Http {
                    status: code,
                    url: url.to_owned(),
                });
            }
            Err(e) => {
                return Err(CavaError::Transport {
                    url: url.to_owned(),
                    msg: e.to_string(),
                });
            }
        };

        let status = resp.status().as_u16();
        if status >= 400 {
            return Err(CavaError::Http {
                status,
                url: url.to_owned(),
            });
        }

        let mut body = Vec::new();
        resp.into_body()
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| CavaError::Transport {
                url: url.to_owned(),
                msg: e.to_string(),
            })?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// `https://host/some/path?x=1` → `https://host`
/// Used to resolve the relative hrefs in Alfresco listings.
pub fn url_origin(url: &str) -> Option<String> {
    let scheme_end = url.find("://")?;
    let rest = &url[scheme_end + 3..];
    let host_end = rest.find('/').unwrap_or(rest.len());
    Some(format!("{}{}", &url[..scheme_end + 3], &rest[..host_end]))
}
