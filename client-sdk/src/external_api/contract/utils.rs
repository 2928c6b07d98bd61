use alloy::{
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
};

use super::error::BlockchainError;

/// Builds a JSON-RPC provider with the standard fillers (gas estimation,
/// nonce management, chain id) and erases its type so it can be stored in
/// plain struct fields.
pub fn get_provider(rpc_url: &str) -> Result<DynProvider, BlockchainError> {
    let url = rpc_url
        .parse()
        .map_err(|_| BlockchainError::ProviderUnavailable(format!("invalid rpc url: {rpc_url}")))?;
    let provider = ProviderBuilder::default()
        .with_gas_estimation()
        .with_simple_nonce_management()
        .fetch_chain_id()
        .connect_http(url)
        .erased();
    Ok(provider)
}

pub async fn get_eth_balance(
    provider: &DynProvider,
    address: Address,
) -> Result<U256, BlockchainError> {
    let balance = provider.get_balance(address).await?;
    Ok(balance)
}
