use clap::Parser;
use colored::Colorize as _;
use dapp_bank_cli::{
    args::{Args, Commands},
    cli::{
        deposit::deposit,
        error::CliError,
        get::{accounts, balance},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    dotenvy::dotenv().ok();

    match main_process(args.command).await {
        Ok(_) => {}
        Err(e) => {
            println!("{}", e.to_string().red());
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn main_process(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Deposit { amount } => {
            deposit(&amount).await?;
        }
        Commands::Accounts => {
            accounts().await?;
        }
        Commands::Balance => {
            balance().await?;
        }
    }
    Ok(())
}
