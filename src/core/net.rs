// src/core/net.rs
// HTTP/1.0 GET over plain TCP, no TLS.
// HTTP/1.0 so the server closes the connection at the end (no chunked transfer).

use std::{
    error::Error,
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub type NetResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// GET `path` from `host:port` and return the raw body bytes.
pub fn http_get(host: &str, port: u16, path: &str) -> NetResult<Vec<u8>> {
    let mut stream = TcpStream::connect((host, port))?;
    stream.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    stream.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    stream.write_all(req.as_bytes())?;
    stream.flush()?;

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;

    split_response(&buf).map(|body| body.to_vec())
}

/// Check the status line and return the body slice.
fn split_response(resp: &[u8]) -> NetResult<&[u8]> {
    let status_end = find(resp, b"\r\n").ok_or("Malformed HTTP response")?;
    let status = String::from_utf8_lossy(&resp[..status_end]);
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(format!("HTTP error: {}", status).into());
    }
    let body_idx = find(resp, b"\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(&resp[body_idx..])
}

fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::split_response;

    #[test]
    fn body_after_headers() {
        let resp = b"HTTP/1.0 200 OK\r\nContent-Type: image/jpeg\r\n\r\n\xff\xd8\xff\x00";
        assert_eq!(split_response(resp).unwrap(), b"\xff\xd8\xff\x00");
    }

    #[test]
    fn non_200_is_error() {
        let resp = b"HTTP/1.1 404 Not Found\r\n\r\nnope";
        let err = split_response(resp).unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn missing_blank_line_is_error() {
        assert!(split_response(b"HTTP/1.0 200 OK\r\nX: y").is_err());
    }
}
