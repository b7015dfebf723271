//! Address and filter normalization.
//!
//! # Responsibilities
//! - Enforce the EVM address format contract (`0x` + 40 hex digits)
//! - Normalize addresses into [`Address`] so comparisons are byte equality
//! - Match free-form status labels case-insensitively
//!
//! # Design Decisions
//! - All normalization lives here; handlers and the store never lowercase
//!   or trim strings themselves
//! - Parsing into `Address` makes case-insensitive matching structural
//!   rather than a string convention

use alloy::primitives::Address;

/// Parse a textual EVM address, enforcing the strict `0x` + 40 hex format.
///
/// `Address::from_str` alone is too lenient for the API contract (it accepts
/// a missing `0x` prefix), so the shape is checked before parsing. Hex digit
/// case is not significant: `0xAbC...` and `0xabc...` produce the same
/// `Address`.
pub fn parse_evm_address(input: &str) -> Option<Address> {
    let hex = input.strip_prefix("0x")?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    input.parse().ok()
}

/// Whether `input` satisfies the EVM address format contract.
pub fn is_evm_address(input: &str) -> bool {
    parse_evm_address(input).is_some()
}

/// Match a stored status label against a user-supplied filter.
///
/// The filter is trimmed and compared case-insensitively; stored labels are
/// compared as-is. An all-whitespace filter matches nothing here — callers
/// treat it as "no filter" before reaching this point.
pub fn status_matches(stored: &str, filter: &str) -> bool {
    stored.eq_ignore_ascii_case(filter.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

    #[test]
    fn accepts_valid_addresses() {
        assert!(is_evm_address(VALID));
        assert!(is_evm_address(&VALID.to_lowercase()));
        assert!(is_evm_address("0x0000000000000000000000000000000000000000"));
        assert!(is_evm_address("0xABCDEFabcdef0123456789ABCDEFabcdef012345"));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(!is_evm_address("742d35Cc6634C0532925a3b844Bc454e4438f44e"));
        assert!(!is_evm_address("0X742d35Cc6634C0532925a3b844Bc454e4438f44e"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_evm_address("0x742d35"));
        assert!(!is_evm_address(&format!("{}ff", VALID)));
        assert!(!is_evm_address("0x"));
        assert!(!is_evm_address(""));
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(!is_evm_address("0xZZZd35Cc6634C0532925a3b844Bc454e4438f44e"));
        assert!(!is_evm_address("0x742d35Cc6634C0532925a3b844Bc454e4438f4 e"));
        assert!(!is_evm_address("not-an-address"));
    }

    #[test]
    fn parsing_normalizes_case() {
        let upper = parse_evm_address(&format!("0x{}", VALID[2..].to_uppercase())).unwrap();
        let lower = parse_evm_address(&VALID.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn status_filter_is_case_insensitive_and_trimmed() {
        assert!(status_matches("active", " Active "));
        assert!(status_matches("in-progress", "IN-PROGRESS"));
        assert!(!status_matches("active", "archived"));
        assert!(!status_matches("active", "act"));
    }
}
