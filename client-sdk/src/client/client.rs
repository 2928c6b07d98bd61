use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider},
    rpc::types::TransactionReceipt,
};

use crate::external_api::contract::{
    bank_contract::BankContract, convert::eth_to_wei, error::BlockchainError,
};

/// Client for the bank contract.
///
/// Holds the provider handle and the contract handle derived from it. The
/// provider owns the accounts and does the signing; the client only decides
/// what to submit and to whom.
#[derive(Clone)]
pub struct BankClient {
    pub provider: DynProvider,
    pub bank_contract: BankContract,
}

impl BankClient {
    /// The provider is injected by the caller; the contract binding to the
    /// fixed bank address is derived from it at construction.
    pub fn new(provider: DynProvider) -> Self {
        let bank_contract = BankContract::new(provider.clone());
        Self {
            provider,
            bank_contract,
        }
    }

    /// Deposits `amount` (decimal ETH, e.g. "1.5") into the bank contract
    /// from the provider's first account and returns the mined receipt.
    ///
    /// Every call submits an independent transaction. There is no
    /// deduplication between calls with the same amount, and no retry:
    /// a rejected submission propagates to the caller as-is.
    pub async fn deposit(&self, amount: &str) -> Result<TransactionReceipt, BlockchainError> {
        let depositor = self.fetch_depositor().await?;
        let value = eth_to_wei(amount)?;
        log::info!("depositing {amount} ETH ({value} wei) from {depositor}");
        self.bank_contract.deposit(depositor, value).await
    }

    /// Accounts currently exposed by the provider.
    pub async fn accounts(&self) -> Result<Vec<Address>, BlockchainError> {
        let accounts = self.provider.get_accounts().await?;
        Ok(accounts)
    }

    /// The account deposits are sent from: the first one the provider
    /// reports. A provider with no accounts (e.g. a node without unlocked
    /// accounts) yields `NoAccount`.
    pub async fn fetch_depositor(&self) -> Result<Address, BlockchainError> {
        let accounts = self.accounts().await?;
        accounts.first().copied().ok_or(BlockchainError::NoAccount)
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::address,
        providers::{mock::Asserter, ProviderBuilder},
    };
    use serde_json::json;

    use crate::external_api::contract::bank_contract::BANK_CONTRACT_ADDRESS;

    use super::*;

    fn get_mocked_provider(asserter: Asserter) -> DynProvider {
        ProviderBuilder::default()
            .with_gas_estimation()
            .with_simple_nonce_management()
            .fetch_chain_id()
            .connect_mocked_client(asserter)
            .erased()
    }

    #[tokio::test]
    async fn depositor_is_the_first_reported_account() {
        let asserter = Asserter::new();
        asserter.push_success(&json!([
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
        ]));
        let client = BankClient::new(get_mocked_provider(asserter));

        let depositor = client.fetch_depositor().await.unwrap();

        assert_eq!(
            depositor,
            address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
        );
    }

    #[tokio::test]
    async fn deposit_without_accounts_yields_no_account() {
        let asserter = Asserter::new();
        asserter.push_success(&json!([]));
        let client = BankClient::new(get_mocked_provider(asserter));

        let err = client.deposit("1").await.unwrap_err();

        assert!(matches!(err, BlockchainError::NoAccount));
    }

    #[test]
    fn client_targets_the_fixed_contract_address() {
        let client = BankClient::new(get_mocked_provider(Asserter::new()));
        assert_eq!(client.bank_contract.address(), BANK_CONTRACT_ADDRESS);
    }
}
