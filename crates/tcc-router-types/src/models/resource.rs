//! Network address derived from an enlisted participant's resource identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Invoker;

/// Structured form of a `host:qualifier:port` resource identifier.
///
/// The qualifier (middle field) is owned by the resource-archive format and is
/// kept verbatim without interpretation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ResourceAddress {
    pub host: String,
    pub qualifier: String,
    pub port: u16,
}

impl ResourceAddress {
    /// Parse an identifier into an address.
    ///
    /// Returns `None` unless the identifier has exactly three colon-separated
    /// fields and the last one is a port written in canonical decimal form.
    /// Whitespace is dropped only where it touches a colon; leading or trailing
    /// whitespace of the whole identifier stays part of the host or port and
    /// makes the identifier non-matching. Trailing empty fields are discarded,
    /// so `host:qualifier:port:` still counts as three fields.
    pub fn parse(identifier: &str) -> Option<Self> {
        let raw: Vec<&str> = identifier.split(':').collect();
        let last = raw.len().saturating_sub(1);
        let mut fields: Vec<&str> = raw
            .into_iter()
            .enumerate()
            .map(|(i, field)| {
                let field = if i > 0 { field.trim_start_matches(is_separator_space) } else { field };
                if i < last {
                    field.trim_end_matches(is_separator_space)
                } else {
                    field
                }
            })
            .collect();
        while fields.last().is_some_and(|field| field.is_empty()) {
            fields.pop();
        }

        let [host, qualifier, port] = fields.as_slice() else {
            return None;
        };
        let port = port.parse::<u16>().ok().filter(|parsed| parsed.to_string() == *port)?;
        Some(Self { host: (*host).to_string(), qualifier: (*qualifier).to_string(), port })
    }

    /// Whether `invoker` sits at this address (host compared case-insensitively).
    pub fn matches<I: Invoker + ?Sized>(&self, invoker: &I) -> bool {
        self.port == invoker.port() && self.host.eq_ignore_ascii_case(invoker.host())
    }
}

fn is_separator_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

impl fmt::Display for ResourceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Endpoint;

    #[test]
    fn test_parse_well_formed_identifier() {
        let addr = ResourceAddress::parse("10.0.0.2:order-service:20880").expect("three fields");
        assert_eq!(addr.host, "10.0.0.2");
        assert_eq!(addr.qualifier, "order-service");
        assert_eq!(addr.port, 20880);
        assert_eq!(addr.to_string(), "10.0.0.2:20880");
    }

    #[test]
    fn test_parse_ignores_whitespace_around_colons() {
        let addr = ResourceAddress::parse("10.0.0.2 : app :  20880").expect("three fields");
        assert_eq!(addr.host, "10.0.0.2");
        assert_eq!(addr.qualifier, "app");
        assert_eq!(addr.port, 20880);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert_eq!(ResourceAddress::parse("malformed-id"), None);
        assert_eq!(ResourceAddress::parse("10.0.0.2:20880"), None);
        assert_eq!(ResourceAddress::parse("a:b:c:20880"), None);
        assert_eq!(ResourceAddress::parse(""), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric_port() {
        assert_eq!(ResourceAddress::parse("10.0.0.2:app:http"), None);
        assert_eq!(ResourceAddress::parse("10.0.0.2:app:"), None);
        assert_eq!(ResourceAddress::parse("10.0.0.2:app:70000"), None);
    }

    #[test]
    fn test_parse_rejects_non_canonical_port_text() {
        assert_eq!(ResourceAddress::parse("10.0.0.2:app:020880"), None);
        assert_eq!(ResourceAddress::parse("10.0.0.2:app:+20880"), None);
    }

    #[test]
    fn test_outer_whitespace_is_not_stripped() {
        let endpoint = Endpoint::new("10.0.0.2", 20880);
        for id in [" 10.0.0.2:app:20880 ", " 10.0.0.2:app:20880", "10.0.0.2:app:20880\t"] {
            let matched = ResourceAddress::parse(id).is_some_and(|addr| addr.matches(&endpoint));
            assert!(!matched, "{id:?} must not match");
        }
    }

    #[test]
    fn test_trailing_empty_fields_are_dropped() {
        let addr = ResourceAddress::parse("10.0.0.2:app:20880:").expect("trailing colon tolerated");
        assert_eq!(addr.port, 20880);
        assert!(ResourceAddress::parse("10.0.0.2:app:20880: :").is_some());
        assert_eq!(ResourceAddress::parse("10.0.0.2:app:20880:extra"), None);
    }

    #[test]
    fn test_matches_is_case_insensitive_on_host() {
        let addr = ResourceAddress::parse("Node-B.Example:app:20880").expect("three fields");
        assert!(addr.matches(&Endpoint::new("node-b.example", 20880)));
        assert!(!addr.matches(&Endpoint::new("node-b.example", 20881)));
        assert!(!addr.matches(&Endpoint::new("node-c.example", 20880)));
    }
}
