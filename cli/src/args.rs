use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(name = "dapp-bank-cli")]
#[clap(about = "CLI for the bank contract")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deposit ETH into the bank contract from the node's first account
    Deposit {
        /// Amount in ETH, e.g. "1.5"
        #[clap(long)]
        amount: String,
    },
    /// List the accounts the node exposes
    Accounts,
    /// Show the depositor account and its ETH balance
    Balance,
}
