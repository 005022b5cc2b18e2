use std::sync::LazyLock;

use provision_common::{ProvisionError, Result};
use regex::Regex;

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+$").expect("trailing digit pattern is valid"));

/// Increments the trailing run of digits in `hostname`.
///
/// The prefix is kept byte for byte. The new number keeps the width of the
/// old one when the old one was zero padded (`app09` becomes `app10`,
/// `app099` becomes `app100`), and simply grows otherwise (`web9` becomes
/// `web10`).
pub fn increment_hostname(hostname: &str) -> Result<String> {
    let no_suffix = || ProvisionError::NoNumericSuffix(hostname.to_string());

    let digits = TRAILING_DIGITS.find(hostname).ok_or_else(no_suffix)?;
    let value: u64 = digits.as_str().parse().map_err(|_| no_suffix())?;
    let next: u64 = value.checked_add(1).ok_or_else(no_suffix)?;
    let width: usize = digits.as_str().len();

    Ok(format!(
        "{}{:0width$}",
        &hostname[..digits.start()],
        next,
        width = width
    ))
}
