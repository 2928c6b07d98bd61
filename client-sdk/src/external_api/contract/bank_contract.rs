use alloy::{
    primitives::{address, Address, U256},
    providers::DynProvider,
    rpc::types::{TransactionReceipt, TransactionRequest},
    sol,
};

use super::{error::BlockchainError, handlers::send_transaction};

sol!(
    #[sol(rpc)]
    Bank,
    "abi/Bank.json",
);

/// Address of the deployed bank contract. Every adapter instance talks to
/// this one deployment; the address cannot be overridden at runtime.
pub const BANK_CONTRACT_ADDRESS: Address = address!("0x4b5380a25a3142fd81672594ac2f7288ed1c67e9");

#[derive(Clone)]
pub struct BankContract {
    provider: DynProvider,
    address: Address,
}

impl BankContract {
    pub fn new(provider: DynProvider) -> Self {
        Self {
            provider,
            address: BANK_CONTRACT_ADDRESS,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Builds the `deposit` call as a transaction request carrying `value`
    /// wei from `depositor`. Each call builds a fresh request; nothing is
    /// cached or deduplicated between calls.
    pub fn deposit_request(&self, depositor: Address, value: U256) -> TransactionRequest {
        let contract = Bank::new(self.address, self.provider.clone());
        contract
            .deposit()
            .from(depositor)
            .value(value)
            .into_transaction_request()
    }

    /// Submits a `deposit` transaction and waits for the mined receipt.
    pub async fn deposit(
        &self,
        depositor: Address,
        value: U256,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let tx_request = self.deposit_request(depositor, value);
        send_transaction(&self.provider, tx_request, "deposit").await
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::TxKind,
        providers::{mock::Asserter, Provider, ProviderBuilder},
        sol_types::SolCall,
    };

    use super::*;

    fn get_provider() -> DynProvider {
        ProviderBuilder::default()
            .with_gas_estimation()
            .with_simple_nonce_management()
            .fetch_chain_id()
            .connect_mocked_client(Asserter::new())
            .erased()
    }

    #[test]
    fn contract_is_bound_to_the_fixed_address() {
        let contract = BankContract::new(get_provider());
        assert_eq!(contract.address(), BANK_CONTRACT_ADDRESS);
    }

    #[test]
    fn deposit_request_is_fully_formed() {
        let contract = BankContract::new(get_provider());
        let depositor = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let value = U256::from(1_000_000_000_000_000_000u64);

        let tx = contract.deposit_request(depositor, value);

        assert_eq!(tx.from, Some(depositor));
        assert_eq!(tx.to, Some(TxKind::Call(BANK_CONTRACT_ADDRESS)));
        assert_eq!(tx.value, Some(value));
        assert_eq!(
            tx.input.input().unwrap().as_ref(),
            &Bank::depositCall::SELECTOR[..]
        );
    }

    #[test]
    fn sequential_deposit_requests_are_identical() {
        let contract = BankContract::new(get_provider());
        let depositor = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let value = U256::from(1_000_000_000_000_000_000u64);

        let first = contract.deposit_request(depositor, value);
        let second = contract.deposit_request(depositor, value);

        assert_eq!(first, second);
    }
}
