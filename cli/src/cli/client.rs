use dapp_bank_client_sdk::{
    client::client::BankClient, external_api::contract::utils::get_provider,
};

use crate::env_var::EnvVar;

use super::error::CliError;

pub fn get_client() -> Result<BankClient, CliError> {
    let env = envy::from_env::<EnvVar>()?;
    let provider = get_provider(&env.rpc_url)?;
    Ok(BankClient::new(provider))
}
