use dapp_bank_client_sdk::external_api::contract::error::BlockchainError;
use envy::Error as EnvyError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Env error: {0}")]
    EnvError(#[from] EnvyError),

    #[error("Blockchain error: {0}")]
    BlockchainError(#[from] BlockchainError),
}
