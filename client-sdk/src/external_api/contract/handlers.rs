use alloy::{
    providers::{DynProvider, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::error::BlockchainError;

/// Submits a transaction request and waits for it to be mined.
///
/// The request carries a `from` address owned by the node, so submission
/// goes out as `eth_sendTransaction` and the node does the signing. A
/// receipt with reverted status is turned into an error instead of being
/// handed back to the caller as a success.
pub async fn send_transaction(
    provider: &DynProvider,
    tx_request: TransactionRequest,
    tx_name: &str,
) -> Result<TransactionReceipt, BlockchainError> {
    let pending = provider.send_transaction(tx_request).await?;
    let tx_hash = *pending.tx_hash();
    log::info!("{tx_name} tx hash: {tx_hash}");
    let receipt = pending.get_receipt().await?;
    if !receipt.inner.status() {
        return Err(BlockchainError::TransactionFailed(format!(
            "{tx_name} failed with tx hash: {tx_hash}"
        )));
    }
    Ok(receipt)
}
