//! Opening external links in the platform's default handler.
//!
//! Failures here are never fatal: [`open_link`] logs them and reports a
//! plain `bool` to the caller.

use crate::error::LinkError;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

/// A labelled link shown on the contact screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// Something that can hand a URI to an external handler.
pub trait LinkOpener {
    fn open(&self, uri: &Url) -> Result<(), LinkError>;
}

/// Opens links in the user's default browser or mail/phone handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, uri: &Url) -> Result<(), LinkError> {
        webbrowser::open(uri.as_str()).map_err(|e| LinkError::ExternalLinkFailure {
            uri: uri.to_string(),
            message: e.to_string(),
        })
    }
}

/// Parses and validates a link. Surrounding whitespace is ignored.
pub fn parse_link(uri: &str) -> Result<Url, LinkError> {
    let trimmed = uri.trim();
    let url = Url::parse(trimmed).map_err(|e| LinkError::InvalidUri {
        uri: trimmed.to_string(),
        message: e.to_string(),
    })?;
    if url.cannot_be_a_base() && url.scheme() != "mailto" && url.scheme() != "tel" {
        return Err(LinkError::InvalidUri {
            uri: trimmed.to_string(),
            message: "not an openable link".to_string(),
        });
    }
    Ok(url)
}

/// Opens `uri` with `opener`. Any failure is logged and reported as `false`.
pub fn open_link(opener: &dyn LinkOpener, uri: &str) -> bool {
    let result = parse_link(uri).and_then(|url| opener.open(&url));
    match result {
        Ok(()) => {
            info!("Opened link '{}'", uri.trim());
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}
