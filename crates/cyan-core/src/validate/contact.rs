//! Email and URL shape checks

use super::FieldError;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;
use url::{Host, Url};

/// Schemes accepted for project and source links
const URL_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Whole address, in UTF-16 code units
const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;

/// Dot-separated atext runs (no leading, trailing or doubled dots); non-ASCII letters allowed
static LOCAL_PART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}-]+)*$",
    )
    .unwrap()
});

/// LDH labels followed by an alphabetic or punycode top-level domain
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+([A-Za-z]{2,}|(?i:xn--)[A-Za-z0-9-]+)$",
    )
    .unwrap()
});

/// Check that the input looks like `local@domain.tld`
///
/// Internationalized domains are checked in their punycode form.
pub fn check_email(input: &str) -> Result<(), FieldError> {
    if input.encode_utf16().count() > MAX_EMAIL_LEN {
        return Err(FieldError::Email);
    }

    let (local, domain) = input.split_once('@').ok_or(FieldError::Email)?;

    if local.chars().count() > MAX_LOCAL_PART_LEN || !LOCAL_PART_RE.is_match(local) {
        return Err(FieldError::Email);
    }

    // IP literals and anything `url` refuses as a host are not mail domains
    let Ok(Host::Domain(ascii)) = Host::parse(domain) else {
        return Err(FieldError::Email);
    };
    if ascii.len() > MAX_DOMAIN_LEN || !DOMAIN_RE.is_match(&ascii) {
        return Err(FieldError::Email);
    }
    Ok(())
}

/// Check that the input is an absolute http(s)/ftp URL with a real host
///
/// The scheme must be followed by a literal `://`, and IPv4 hosts must be
/// written as a dotted quad.
pub fn check_url(input: &str) -> Result<(), FieldError> {
    // Url::parse trims surrounding whitespace; a pasted link with spaces is still wrong
    if input.chars().any(char::is_whitespace) {
        return Err(FieldError::Url);
    }

    let (scheme, rest) = input.split_once("://").ok_or(FieldError::Url)?;
    if !URL_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
        return Err(FieldError::Url);
    }

    let url = Url::parse(input).map_err(|_| FieldError::Url)?;

    match url.host() {
        Some(Host::Domain(domain)) if DOMAIN_RE.is_match(domain) => Ok(()),
        // `url` turns hosts like `123` or `0x7f.1` into addresses; only accept them as typed
        Some(Host::Ipv4(_)) if raw_host(rest).parse::<Ipv4Addr>().is_ok() => Ok(()),
        Some(Host::Ipv6(_)) => Ok(()),
        _ => Err(FieldError::Url),
    }
}

/// Host as typed after `://`, without userinfo or port
fn raw_host(rest: &str) -> &str {
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    host_port.rsplit_once(':').map_or(host_port, |(host, _)| host)
}
