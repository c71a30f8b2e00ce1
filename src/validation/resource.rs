//! Validation of external resource values (URLs, email addresses, plain
//! strings) driven by the declared type of the resource name they belong
//! to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use url::Url;
use validator::{ValidateEmail, ValidateUrl};

use crate::error::ValidationError;

/// The value types this crate knows how to validate. Resource name
/// registries may grow new type slugs; anything unrecognized is rejected
/// loudly rather than waved through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceValueKind {
    Url,
    Email,
    String,
}

/// The declared type of a resource name, as carried by the registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceKind {
    pub slug: String,
    /// Human-readable type name, used in rejection messages.
    pub name: String,
}

/// A resource name record: its own slug plus its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceName {
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// Accepts syntactically valid email addresses.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("Please enter a valid email address."))
    }
}

/// Accepts syntactically valid URLs of any scheme.
pub fn validate_url(value: &str) -> Result<(), ValidationError> {
    if value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("Please enter a valid URL."))
    }
}

/// Accepts syntactically valid http or https URLs; returns the parsed URL.
pub fn validate_http_url(value: &str) -> Result<Url, ValidationError> {
    let parsed =
        Url::parse(value).map_err(|_| ValidationError::new("Please enter a valid URL."))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::new(
            "Please enter a valid http or https URL.",
        ));
    }
    Ok(parsed)
}

fn validate_github_url(value: &str) -> Result<(), ValidationError> {
    let parsed = validate_http_url(value)?;
    let host = parsed.host_str().unwrap_or_default();
    if !host.eq_ignore_ascii_case("github.com") {
        return Err(ValidationError::new("URL must be a github url"));
    }
    Ok(())
}

/// Validates a resource value using its name's declared type.
///
/// Github organization and repository names must point at `github.com`
/// over http(s). Values of unknown types are rejected with a message
/// naming the type.
pub fn validate_external_resource_value(
    name: &ResourceName,
    value: &str,
) -> Result<(), ValidationError> {
    match ResourceValueKind::from_str(&name.kind.slug) {
        Ok(ResourceValueKind::Url) => match name.slug.as_str() {
            "github_org" | "github_repo" => validate_github_url(value),
            // TODO: validate XMPP URIs (XEP-0032); jabber room addresses
            // are currently accepted as-is.
            "jabber_room" => Ok(()),
            _ => validate_url(value),
        },
        Ok(ResourceValueKind::Email) => validate_email(value),
        Ok(ResourceValueKind::String) => Ok(()),
        Err(_) => Err(ValidationError::new(format!(
            "Unknown resource type {}",
            name.kind.name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource_name(type_slug: &str, type_name: &str, slug: &str) -> ResourceName {
        ResourceName {
            slug: slug.to_string(),
            kind: ResourceKind {
                slug: type_slug.to_string(),
                name: type_name.to_string(),
            },
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user+tag@example.com").is_ok());

        for value in ["not-an-email", "@example.com", "user@", ""] {
            let err = validate_email(value)
                .expect_err(&format!("Accepted invalid email: {:?}", value));
            assert_eq!(err.message(), "Please enter a valid email address.");
        }
    }

    #[test]
    fn test_url_validation_accepts_any_scheme() {
        assert!(validate_url("https://example.com/page").is_ok());
        assert!(validate_url("ftp://example.com/file").is_ok());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_http_url_validation_restricts_schemes() {
        assert!(validate_http_url("http://example.com").is_ok());
        assert!(validate_http_url("https://example.com").is_ok());
        assert!(validate_http_url("ftp://example.com").is_err());
        assert!(validate_http_url("no scheme at all").is_err());
    }

    #[test]
    fn test_github_org_urls() {
        let name = resource_name("url", "URL", "github_org");

        assert!(validate_external_resource_value(&name, "https://github.com/ietf/ietf").is_ok());
        assert!(validate_external_resource_value(&name, "http://github.com/somewhere").is_ok());

        let err =
            validate_external_resource_value(&name, "https://gitlab.com/x").unwrap_err();
        assert_eq!(err.message(), "URL must be a github url");

        let err = validate_external_resource_value(&name, "https://github.com.evil.org/x")
            .unwrap_err();
        assert_eq!(err.message(), "URL must be a github url");

        // Scheme restriction applies before the host check.
        assert!(validate_external_resource_value(&name, "ftp://github.com/x").is_err());
    }

    #[test]
    fn test_github_repo_uses_the_same_rule() {
        let name = resource_name("url", "URL", "github_repo");
        assert!(
            validate_external_resource_value(&name, "https://github.com/ietf/datatracker").is_ok()
        );
        assert!(validate_external_resource_value(&name, "https://example.com/repo").is_err());
    }

    #[test]
    fn test_jabber_room_is_not_validated() {
        let name = resource_name("url", "URL", "jabber_room");
        let values = vec![
            "xmpp:hallway@jabber.example.org?join",
            "definitely not a url",
            "",
        ];

        for value in values {
            assert!(
                validate_external_resource_value(&name, value).is_ok(),
                "jabber_room value was rejected: {:?}",
                value
            );
        }
    }

    #[test]
    fn test_other_url_names_accept_any_valid_url() {
        let name = resource_name("url", "URL", "tracker");
        assert!(validate_external_resource_value(&name, "https://issues.example.org").is_ok());
        assert!(validate_external_resource_value(&name, "not a url").is_err());
    }

    #[test]
    fn test_email_type_dispatch() {
        let name = resource_name("email", "Email address", "mailing_list");
        assert!(validate_external_resource_value(&name, "list@example.org").is_ok());
        assert!(validate_external_resource_value(&name, "not-an-email").is_err());
    }

    #[test]
    fn test_string_type_accepts_anything() {
        let name = resource_name("string", "String", "free_text");
        for value in ["anything", "", "even\x00control\x01chars"] {
            assert!(validate_external_resource_value(&name, value).is_ok());
        }
    }

    #[test]
    fn test_unknown_type_fails_naming_it() {
        let name = resource_name("bogus", "bogus", "whatever");
        let err = validate_external_resource_value(&name, "value").unwrap_err();
        assert_eq!(err.message(), "Unknown resource type bogus");
    }

    #[test]
    fn test_kind_slugs_round_trip() {
        use std::str::FromStr;

        let cases = vec![
            ("url", ResourceValueKind::Url),
            ("email", ResourceValueKind::Email),
            ("string", ResourceValueKind::String),
        ];

        for (slug, kind) in cases {
            assert_eq!(ResourceValueKind::from_str(slug).unwrap(), kind);
            assert_eq!(kind.to_string(), slug);
        }
        assert!(ResourceValueKind::from_str("carpet").is_err());
    }

    #[test]
    fn test_resource_name_deserializes_from_registry_json() {
        let name: ResourceName = serde_json::from_value(serde_json::json!({
            "slug": "github_org",
            "type": { "slug": "url", "name": "URL" },
        }))
        .unwrap();

        assert_eq!(name.slug, "github_org");
        assert_eq!(name.kind.slug, "url");
        assert!(validate_external_resource_value(&name, "https://github.com/ietf").is_ok());
    }
}
