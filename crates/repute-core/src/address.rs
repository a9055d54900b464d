//! Wallet address validation and normalization.
//!
//! Addresses are `0x`-prefixed, 20-byte hex strings. Checksum casing is
//! accepted but not verified.

/// Number of hex digits in an address body.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Check whether `candidate` is a syntactically valid wallet address.
pub fn is_address(candidate: &str) -> bool {
    let body = match candidate
        .strip_prefix("0x")
        .or_else(|| candidate.strip_prefix("0X"))
    {
        Some(body) => body,
        None => return false,
    };
    body.len() == ADDRESS_HEX_LEN && body.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize an address (or opaque subject identifier) for keying and querying.
///
/// Trims surrounding whitespace and lowercases. Never fails: identifiers that
/// are not addresses are normalized the same way.
pub fn normalize(subject: &str) -> String {
    subject.trim().to_lowercase()
}

/// Shorten an address for display: `0x1234…abcd`.
pub fn abbreviate(address: &str) -> String {
    if is_address(address) {
        format!("{}…{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}
