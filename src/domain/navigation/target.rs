//! NavigationTarget - an in-app path fragment.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use url::Url;

/// Marker every target starts with.
pub const FRAGMENT_MARKER: char = '#';

/// A destination inside the host application, e.g. `#menu_id=crm.crm_menu_root`.
///
/// Invariant: never empty and always begins with `#`. Construction goes
/// through [`NavigationTarget::normalize`], so the invariant cannot be broken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NavigationTarget(String);

impl NavigationTarget {
    /// Normalizes raw input into a target.
    ///
    /// - An absolute URL is reduced to the text after its first `#` (or to its
    ///   path when it has no fragment); scheme and host are discarded. The
    ///   text is taken verbatim, without percent-encoding.
    /// - An empty or `/` path maps to the bare `#`.
    /// - A result lacking a leading `#` gets one prepended.
    /// - A result that already starts with `#` passes through unchanged.
    pub fn normalize(raw: &str) -> Self {
        let fragment = match Url::parse(raw) {
            Ok(url) if url.has_host() => match raw.split_once(FRAGMENT_MARKER) {
                Some((_, fragment)) if !fragment.is_empty() => fragment,
                _ => match raw_path(raw) {
                    "/" => "",
                    path => path,
                },
            },
            _ => raw,
        };

        if fragment.starts_with(FRAGMENT_MARKER) {
            Self(fragment.to_string())
        } else {
            Self(format!("{}{}", FRAGMENT_MARKER, fragment))
        }
    }

    /// The bare `#` target: the host application's home screen.
    pub fn home() -> Self {
        Self(FRAGMENT_MARKER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full browser URL for this target under the host application.
    ///
    /// `http://localhost:8069` + `#menu_id=x` -> `http://localhost:8069/web#menu_id=x`.
    pub fn absolute_url(&self, host_base_url: &Url) -> String {
        format!("{}/web{}", host_base_url.as_str().trim_end_matches('/'), self.0)
    }
}

/// Path of an absolute URL exactly as written, without query or fragment.
fn raw_path(raw: &str) -> &str {
    let after_scheme = raw.split_once("://").map_or(raw, |(_, rest)| rest);
    let end = after_scheme
        .find(|c| c == '?' || c == FRAGMENT_MARKER)
        .unwrap_or(after_scheme.len());
    let authority_and_path = &after_scheme[..end];
    authority_and_path
        .find('/')
        .map_or("", |start| &authority_and_path[start..])
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for NavigationTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}
