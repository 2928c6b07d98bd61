use super::{client::get_client, error::CliError};

pub async fn deposit(amount: &str) -> Result<(), CliError> {
    let client = get_client()?;
    let receipt = client.deposit(amount).await?;
    println!("Deposited {} ETH", amount);
    println!("Tx hash: {}", receipt.transaction_hash);
    Ok(())
}
