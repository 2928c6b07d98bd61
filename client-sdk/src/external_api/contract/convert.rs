use alloy::primitives::{
    utils::{format_ether, ParseUnits, Unit},
    U256,
};

use super::error::BlockchainError;

/// Converts a decimal ETH amount such as "1.5" into wei.
///
/// The conversion is pure decimal-string arithmetic; amounts never pass
/// through floating point, so anything representable in wei converts
/// exactly and anything finer than a wei is rejected.
pub fn eth_to_wei(amount: &str) -> Result<U256, BlockchainError> {
    let parsed = ParseUnits::parse_units(amount, Unit::ETHER)
        .map_err(|e| BlockchainError::ConversionError(format!("invalid amount {amount}: {e}")))?;
    match parsed {
        ParseUnits::U256(wei) => Ok(wei),
        ParseUnits::I256(_) => Err(BlockchainError::ConversionError(format!(
            "negative amount: {amount}"
        ))),
    }
}

/// Formats a wei value as a decimal ETH string.
pub fn wei_to_eth(wei: U256) -> String {
    format_ether(wei)
}
