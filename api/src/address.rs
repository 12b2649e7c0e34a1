//! Helpers for working with token contract addresses as plain strings.
//!
//! Upstream sources disagree on address casing (checksummed vs. lower-cased),
//! so every comparison in the app goes through these case-insensitive helpers.

/// Case-insensitive address equality.
pub fn same_address(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// True if `address` occurs in `addresses`, compared case-insensitively.
pub fn includes_address<S: AsRef<str>>(addresses: &[S], address: &str) -> bool {
    addresses.iter().any(|a| same_address(a.as_ref(), address))
}

/// Shortens an address for display: `0xC02a…6Cc2`.
pub fn abbreviate_address(address: &str) -> String {
    if address.len() <= 12 {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_address_ignores_case() {
        assert!(same_address("0xAbCd", "0xabcd"));
        assert!(!same_address("0xAbCd", "0xabce"));
    }

    #[test]
    fn includes_address_matches_across_casings() {
        let list = vec!["0xaaa".to_string(), "0xbbb".to_string()];
        assert!(includes_address(&list, "0xAAA"));
        assert!(!includes_address(&list, "0xCCC"));
    }

    #[test]
    fn abbreviate_keeps_short_addresses_intact() {
        assert_eq!(abbreviate_address("0xabc"), "0xabc");
        assert_eq!(
            abbreviate_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            "0xC02a…6Cc2"
        );
    }
}
