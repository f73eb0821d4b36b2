//! Opening asset sources by URI.
//!
//! A URI with a scheme and a non-empty host is fetched over the network;
//! anything else is treated as a local file path.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::config::FetchConfig;

/// Where an asset URI points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A network locator (scheme plus host).
    Remote(String),
    /// A local file path.
    Local(PathBuf),
}

impl Location {
    /// Classify a URI string.
    pub fn classify(uri: &str) -> Self {
        match uri.parse::<ureq::http::Uri>() {
            Ok(parsed)
                if parsed.scheme().is_some()
                    && parsed.host().is_some_and(|host| !host.is_empty()) =>
            {
                Self::Remote(uri.to_string())
            }
            _ => Self::Local(PathBuf::from(uri)),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{}", url),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Produces a byte stream for a location.
///
/// The returned reader is dropped by the caller as soon as it has been
/// consumed, so implementations should release handles on drop.
pub trait SourceOpener {
    fn open(&self, location: &Location) -> io::Result<Box<dyn Read>>;
}

/// Blocking HTTP(S) for remote locations, the filesystem for local ones.
#[derive(Clone)]
pub struct DefaultSources {
    agent: ureq::Agent,
    user_agent: String,
}

impl DefaultSources {
    pub fn from_config(config: &FetchConfig) -> Self {
        let timeout = match config.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build()
            .into();

        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }

    fn fetch(&self, url: &str) -> io::Result<Box<dyn Read>> {
        debug!(url, "fetching remote asset");
        let response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| match e {
                ureq::Error::Io(err) => err,
                other => io::Error::new(io::ErrorKind::Other, other.to_string()),
            })?;
        Ok(Box::new(response.into_body().into_reader()))
    }
}

impl Default for DefaultSources {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

impl SourceOpener for DefaultSources {
    fn open(&self, location: &Location) -> io::Result<Box<dyn Read>> {
        match location {
            Location::Remote(url) => self.fetch(url),
            Location::Local(path) => {
                debug!(path = %path.display(), "opening local asset");
                Ok(Box::new(BufReader::new(File::open(path)?)))
            }
        }
    }
}
