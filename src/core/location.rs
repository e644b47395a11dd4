// src/core/location.rs
//
// A resource is either a file on disk or a plain http:// URL.
// Dataset JSON and photos both go through here.

use std::{fmt, fs, path::PathBuf};

use crate::error::GameError;
use super::net::{self, NetResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Http { host: String, port: u16, path: String },
}

impl Location {
    /// `http://host[:port]/path` or a filesystem path. `https://` is refused.
    pub fn parse(s: &str) -> Result<Self, GameError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GameError::InvalidLocation(s!("empty location")));
        }
        if s.starts_with("https://") {
            return Err(GameError::InvalidLocation(format!("TLS is not supported: {s}")));
        }
        let Some(rest) = s.strip_prefix("http://") else {
            return Ok(Location::File(PathBuf::from(s)));
        };

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port = p
                    .parse::<u16>()
                    .map_err(|_| GameError::InvalidLocation(format!("bad port in {s}")))?;
                (h, port)
            }
            None => (authority, 80),
        };
        if host.is_empty() {
            return Err(GameError::InvalidLocation(format!("missing host in {s}")));
        }
        Ok(Location::Http { host: s!(host), port, path: s!(path) })
    }

    /// Resolve a photo reference found in a record against this root.
    /// Absolute URLs stand on their own.
    pub fn join(&self, reference: &str) -> Result<Location, GameError> {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Location::parse(reference);
        }
        let rel = reference.trim_start_matches("./");
        Ok(match self {
            Location::File(dir) => Location::File(dir.join(rel)),
            Location::Http { host, port, path } => {
                let base = path.trim_end_matches('/');
                let rel = rel.trim_start_matches('/');
                Location::Http {
                    host: host.clone(),
                    port: *port,
                    path: join!(base, "/", rel),
                }
            }
        })
    }

    pub fn fetch(&self) -> NetResult<Vec<u8>> {
        match self {
            Location::File(p) => Ok(fs::read(p)?),
            Location::Http { host, port, path } => net::http_get(host, *port, path),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(p) => write!(f, "{}", p.display()),
            Location::Http { host, port: 80, path } => write!(f, "http://{host}{path}"),
            Location::Http { host, port, path } => write!(f, "http://{host}:{port}{path}"),
        }
    }
}

/// Byte source for dataset and photo loading. Swapped out in tests.
pub trait Fetch: Send + Sync {
    fn fetch(&self, loc: &Location) -> NetResult<Vec<u8>>;
}

/// Reads files and speaks plain HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceFetcher;

impl Fetch for SourceFetcher {
    fn fetch(&self, loc: &Location) -> NetResult<Vec<u8>> {
        loc.fetch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_http_with_and_without_port() {
        assert_eq!(
            Location::parse("http://example.org:8080/data/deputes.json").unwrap(),
            Location::Http { host: s!("example.org"), port: 8080, path: s!("/data/deputes.json") }
        );
        assert_eq!(
            Location::parse("http://example.org").unwrap(),
            Location::Http { host: s!("example.org"), port: 80, path: s!("/") }
        );
    }

    #[test]
    fn plain_text_is_a_file() {
        assert_eq!(
            Location::parse("data/senateurs.json").unwrap(),
            Location::File(PathBuf::from("data/senateurs.json"))
        );
    }

    #[test]
    fn rejects_tls_and_garbage() {
        assert!(Location::parse("https://www.senat.fr/").is_err());
        assert!(Location::parse("http://host:notaport/").is_err());
        assert!(Location::parse("http:///path").is_err());
        assert!(Location::parse("   ").is_err());
    }

    #[test]
    fn join_resolves_relative_photos() {
        let root = Location::File(PathBuf::from("site"));
        assert_eq!(
            root.join("photos/deputes/jean-dupont.jpg").unwrap(),
            Location::File(PathBuf::from("site/photos/deputes/jean-dupont.jpg"))
        );

        let web = Location::parse("http://example.org/polidle/").unwrap();
        assert_eq!(
            web.join("./photos/senateurs/x.jpg").unwrap().to_string(),
            "http://example.org/polidle/photos/senateurs/x.jpg"
        );

        let abs = root.join("http://cdn.example:81/p.jpg").unwrap();
        assert_eq!(abs.to_string(), "http://cdn.example:81/p.jpg");
    }
}
