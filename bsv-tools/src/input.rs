//! Reading hex, txids and WIFs from arguments, flags, pipes, files and URLs.

use std::io::{self, BufRead, IsTerminal};

/// Errors raised while resolving a tool's primary input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("no {0} provided")]
    Missing(&'static str),

    #[error("{what} is not a valid hex string")]
    InvalidHex { what: &'static str, value: String },

    #[error("reading input: {0}")]
    Io(#[from] io::Error),

    #[error("reading file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("fetching URL: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),
}

/// Non-empty and made only of hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Keep printable ASCII (`!` through `~`), dropping whitespace and control
/// characters.
pub fn clean_string(s: &str) -> String {
    s.chars().filter(|c| ('!'..='~').contains(c)).collect()
}

/// Read every line of `reader`, clean it and concatenate the results.
pub fn read_hex_from_reader<R: BufRead>(reader: R) -> io::Result<String> {
    let mut out = String::with_capacity(256);
    for line in reader.lines() {
        out.push_str(&clean_string(&line?));
    }
    Ok(out)
}

/// The positional argument, else the flag, else piped stdin.
///
/// Empty values count as absent. Stdin is only read when it is not a
/// terminal, so an interactive run with no input returns `None` instead
/// of blocking.
pub fn positional_or_stdin(
    positional: Option<String>,
    flag: Option<String>,
) -> Result<Option<String>, InputError> {
    if let Some(value) = positional.or(flag).filter(|v| !v.is_empty()) {
        return Ok(Some(value));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let piped = read_hex_from_reader(stdin.lock())?;
    Ok(Some(piped).filter(|v| !v.is_empty()))
}

/// Require a present, hex-only value. `what` names it in errors.
pub fn require_hex(value: Option<String>, what: &'static str) -> Result<String, InputError> {
    let value = value.filter(|v| !v.is_empty()).ok_or(InputError::Missing(what))?;
    if !is_valid_hex(&value) {
        return Err(InputError::InvalidHex { what, value });
    }
    Ok(value)
}

/// Expand `file://path` and `http(s)://` inputs to their cleaned contents.
/// Anything else is returned unchanged.
pub async fn resolve_source(input: String) -> Result<String, InputError> {
    if let Some(path) = input.strip_prefix("file://") {
        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| InputError::File { path: path.to_string(), source })?;
        return Ok(clean_string(&data));
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        tracing::debug!(url = %input, "fetching input");
        let response = reqwest::get(&input).await?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(InputError::HttpStatus(response.status().as_u16()));
        }
        let body = response.text().await?;
        return Ok(clean_string(&body));
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("0123456789abcdefABCDEF"));
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("0x00"));
        assert!(!is_valid_hex("ab cd"));
        assert!(!is_valid_hex("abcg"));
    }

    #[test]
    fn test_clean_string() {
        assert_eq!(clean_string("  ab\tcd\r\n"), "abcd");
        assert_eq!(clean_string("a\u{0}b\u{7f}c"), "abc");
        assert_eq!(clean_string("héllo"), "hllo");
        assert_eq!(clean_string("!~"), "!~");
    }

    #[test]
    fn test_read_hex_from_reader_joins_lines() {
        let input = "0100\n  0000 \r\n\n00ff\n";
        assert_eq!(read_hex_from_reader(input.as_bytes()).unwrap(), "0100000000ff");
        assert_eq!(read_hex_from_reader("".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_positional_beats_flag() {
        let got = positional_or_stdin(Some("aa".into()), Some("bb".into())).unwrap();
        assert_eq!(got.as_deref(), Some("aa"));
        let got = positional_or_stdin(None, Some("bb".into())).unwrap();
        assert_eq!(got.as_deref(), Some("bb"));
    }

    #[test]
    fn test_require_hex() {
        assert_eq!(require_hex(Some("abcd".into()), "txid").unwrap(), "abcd");

        let err = require_hex(None, "txid").unwrap_err();
        assert_eq!(err.to_string(), "no txid provided");
        let err = require_hex(Some(String::new()), "transaction").unwrap_err();
        assert!(matches!(err, InputError::Missing("transaction")));

        let err = require_hex(Some("xyz".into()), "txid").unwrap_err();
        assert_eq!(err.to_string(), "txid is not a valid hex string");
    }

    #[tokio::test]
    async fn test_resolve_plain_passthrough() {
        assert_eq!(resolve_source("0100".into()).await.unwrap(), "0100");
    }

    #[tokio::test]
    async fn test_resolve_file_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0100 0000").unwrap();
        writeln!(file, "00").unwrap();

        let url = format!("file://{}", file.path().display());
        assert_eq!(resolve_source(url).await.unwrap(), "0100000000");
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let err = resolve_source("file:///definitely/not/here.hex".into()).await.unwrap_err();
        assert!(matches!(err, InputError::File { .. }));
    }

    #[tokio::test]
    async fn test_resolve_http_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tx.hex"))
            .respond_with(ResponseTemplate::new(200).set_body_string("01000000\n0000\n"))
            .mount(&server)
            .await;

        let got = resolve_source(format!("{}/tx.hex", server.uri())).await.unwrap();
        assert_eq!(got, "010000000000");
    }

    #[tokio::test]
    async fn test_resolve_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = resolve_source(format!("{}/missing", server.uri())).await.unwrap_err();
        assert!(matches!(err, InputError::HttpStatus(404)));
        assert_eq!(err.to_string(), "HTTP error: 404");
    }
}
