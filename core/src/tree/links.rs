//! Link display helpers

/// Hostname of a URL with a leading `www.` removed.
///
/// Input that does not parse as `scheme://host...` is shown as typed.
pub fn display_host(url: &str) -> String {
    let trimmed = url.trim();
    match parse_host(trimmed) {
        Some(host) => strip_www(&host.to_ascii_lowercase()).to_string(),
        None => strip_www(trimmed).to_string(),
    }
}

/// Width of an inline rename input, one column wider than its text
pub fn input_width_ch(value: &str) -> usize {
    value.chars().count() + 1
}

fn parse_host(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    let mut chars = scheme.chars();
    if !chars.next()?.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }

    let authority = rest.split(|c: char| matches!(c, '/' | '?' | '#')).next()?;
    let host_port = authority.rsplit('@').next()?;
    let host = if host_port.starts_with('[') {
        host_port.split_inclusive(']').next()?
    } else {
        host_port.split(':').next()?
    };

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_www_and_path() {
        assert_eq!(display_host("https://www.example.com/a/b?c=1"), "example.com");
        assert_eq!(display_host("http://docs.rs"), "docs.rs");
    }

    #[test]
    fn test_drops_port_and_credentials() {
        assert_eq!(display_host("https://user:pw@WWW.Host.io:8080/x"), "host.io");
        assert_eq!(display_host("http://[::1]:9000/"), "[::1]");
    }

    #[test]
    fn test_unparseable_falls_back_to_text() {
        assert_eq!(display_host("www.example.com/page"), "example.com/page");
        assert_eq!(display_host("not a url"), "not a url");
        assert_eq!(display_host("https://"), "https://");
    }

    #[test]
    fn test_input_width() {
        assert_eq!(input_width_ch(""), 1);
        assert_eq!(input_width_ch("Nova aba"), 9);
    }
}
