// src/safety.rs

//! URL safety filter.
//!
//! Best-effort block list against fetching private-network targets. It is
//! not a complete SSRF defense: DNS rebinding, IPv6 loopback/link-local
//! addresses, and redirect-based bypasses are all out of scope and remain
//! open risks of the service.

use url::Url;

/// Decide whether a raw URL may be fetched.
///
/// Accepts only `http`/`https` URLs whose hostname is not `localhost` and
/// not inside the RFC 1918 dotted ranges (`127.*` included).
///
/// # Examples
/// ```
/// use pagemirror::safety::is_safe;
///
/// assert!(is_safe("https://example.com/page"));
/// assert!(!is_safe("http://192.168.1.1/admin"));
/// ```
pub fn is_safe(raw_url: &str) -> bool {
    let Ok(url) = Url::parse(raw_url) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    let Some(host) = url.host_str() else {
        return false;
    };

    if host == "localhost"
        || host.starts_with("127.")
        || host.starts_with("192.168.")
        || host.starts_with("10.")
    {
        return false;
    }

    // 172.16.0.0 - 172.31.255.255: test the second dotted octet.
    if host.starts_with("172.") {
        if let Some(second) = host.split('.').nth(1) {
            if let Ok(n) = second.parse::<u8>() {
                if (16..=31).contains(&n) {
                    return false;
                }
            }
        }
    }

    true
}
