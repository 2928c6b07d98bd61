use dapp_bank_client_sdk::external_api::contract::{
    convert::wei_to_eth, utils::get_eth_balance,
};

use super::{client::get_client, error::CliError};

pub async fn accounts() -> Result<(), CliError> {
    let client = get_client()?;
    let accounts = client.accounts().await?;
    if accounts.is_empty() {
        println!("No accounts available");
        return Ok(());
    }
    for (i, account) in accounts.iter().enumerate() {
        println!("{i}: {account}");
    }
    Ok(())
}

pub async fn balance() -> Result<(), CliError> {
    let client = get_client()?;
    let depositor = client.fetch_depositor().await?;
    let balance = get_eth_balance(&client.provider, depositor).await?;
    println!("Address: {depositor}");
    println!("Balance: {} ETH", wei_to_eth(balance));
    Ok(())
}
