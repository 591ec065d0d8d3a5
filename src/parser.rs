//! Decomposing a URL string into an editable form.

use url::Url;

use crate::error::CleanError;
use crate::models::{ParsedUrl, QueryParam};

/// Parse an absolute URL into base (origin + path), ordered query
/// parameters, and fragment. Duplicate keys stay separate entries and the
/// query-string order is preserved; every parameter starts enabled.
///
/// Keys and values come out percent-decoded, and the builder emits them as
/// stored, so a cleaned URL round-trips through the decoded form.
pub fn parse(url_str: &str) -> Result<ParsedUrl, CleanError> {
    let url = Url::parse(url_str)?;

    let params = url
        .query_pairs()
        .map(|(key, value)| QueryParam {
            key: key.into_owned(),
            value: value.into_owned(),
            enabled: true,
        })
        .collect();

    let hash = match url.fragment() {
        Some(fragment) => format!("#{fragment}"),
        None => String::new(),
    };

    Ok(ParsedUrl {
        base: format!("{}{}", url.origin().ascii_serialization(), url.path()),
        params,
        hash,
    })
}
