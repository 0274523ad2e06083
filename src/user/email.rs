//! Email logic.

use std::borrow::Cow;
use std::sync::LazyLock;

use idna::uts46::{AsciiDenyList, DnsLength, Hyphens, Uts46};
use regex_lite::Regex;

/// Maximum bytes before `@`.
pub const MAX_LOCAL_LENGTH: usize = 64;
/// Maximum bytes of the domain label.
pub const MAX_DOMAIN_LENGTH: usize = 255;
/// Maximum bytes of the top-level domain.
pub const MAX_TLD_LENGTH: usize = 24;

const AT_SEPARATOR: char = '@';
const DOT_SEPARATOR: char = '.';

static USER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~.-]+$").unwrap()
});
static HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s]+\.[^\s]+$").unwrap());
static USER_DOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^[.])|([.]$)|([.]{2,})").unwrap());

/// Check whether `email` is a structurally valid address.
///
/// The host must hold exactly one dot, so `mail.example.com` is rejected.
/// Lengths are measured in UTF-8 bytes of the raw input.
/// Local part and host are converted to their ASCII form (UTS #46) before
/// the character checks, which lets internationalized addresses through.
pub fn is_email(email: &str) -> bool {
    if email.is_empty() {
        tracing::debug!(rule = "empty", "email rejected");
        return false;
    }

    let Some((local, host)) = split_exact(email, AT_SEPARATOR) else {
        tracing::debug!(rule = "at_separator", "email rejected");
        return false;
    };

    if local.is_empty() || local.len() > MAX_LOCAL_LENGTH {
        tracing::debug!(rule = "local_length", "email rejected");
        return false;
    }

    let Some((domain, ext)) = split_exact(host, DOT_SEPARATOR) else {
        tracing::debug!(rule = "dot_separator", "email rejected");
        return false;
    };

    if domain.is_empty() || domain.len() > MAX_DOMAIN_LENGTH {
        tracing::debug!(rule = "domain_length", "email rejected");
        return false;
    }
    if ext.is_empty() || ext.len() > MAX_TLD_LENGTH {
        tracing::debug!(rule = "tld_length", "email rejected");
        return false;
    }

    let (Some(puny_local), Some(puny_host)) = (to_ascii(local), to_ascii(host))
    else {
        tracing::debug!(rule = "idna", "email rejected");
        return false;
    };

    if USER_DOT_RE.is_match(&puny_local)
        || !USER_RE.is_match(&puny_local)
        || !HOST_RE.is_match(&puny_host)
    {
        tracing::debug!(rule = "charset", "email rejected");
        return false;
    }

    true
}

/// Split `value` on `separator`, only if it occurs exactly once.
fn split_exact(value: &str, separator: char) -> Option<(&str, &str)> {
    let (left, right) = value.split_once(separator)?;
    if right.contains(separator) {
        return None;
    }

    Some((left, right))
}

fn to_ascii(value: &str) -> Option<Cow<'_, str>> {
    Uts46::new()
        .to_ascii(
            value.as_bytes(),
            AsciiDenyList::EMPTY,
            Hyphens::Allow,
            DnsLength::Ignore,
        )
        .ok()
}
