//! Parser functions for CLI arguments.

use alloy_primitives::{B256, U256};
use std::str::FromStr;

/// Parse a string slice into [B256].
pub(crate) fn parse_b256(s: &str) -> Result<B256, String> {
    B256::from_str(s).map_err(|_| format!("Invalid B256 value: {}", s))
}

/// Parse a decimal or `0x`-prefixed hex string slice into [U256].
pub(crate) fn parse_u256(s: &str) -> Result<U256, String> {
    U256::from_str(s).map_err(|_| format!("Invalid U256 value: {}", s))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_b256() {
        assert_eq!(parse_b256(&B256::ZERO.to_string()), Ok(B256::ZERO));
        assert!(parse_b256("0x1234").is_err());
    }

    #[test]
    fn test_parse_u256() {
        assert_eq!(parse_u256("3333"), Ok(U256::from(3333)));
        assert_eq!(parse_u256("0xd05"), Ok(U256::from(3333)));
        assert!(parse_u256("-1").is_err());
        assert!(parse_u256("three").is_err());
    }
}
