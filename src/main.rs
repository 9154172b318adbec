use clap::{Parser, Subcommand};
use dotenv::dotenv;
use lcd_client::{Config, LcdClient};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "lcd-client", about = "Query distribution and validator state from an LCD")]
struct Cli {
    /// Overrides LCD_URL
    #[arg(long)]
    lcd_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Staking rewards of a delegator
    Rewards { delegator: String },
    /// Self-bond rewards and commission of a validator
    ValidatorRewards { validator: String },
    WithdrawAddress { delegator: String },
    CommunityPool,
    Parameters,
    /// Validators with voting power and proposer priority
    Validators,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env_with_url(cli.lcd_url)?;

    info!("Querying LCD at {}", config.lcd_url);
    let lcd = LcdClient::new(config)?;
    let distribution = lcd.distribution();

    match cli.command {
        Command::Rewards { delegator } => print_json(&distribution.rewards(&delegator).await?)?,
        Command::ValidatorRewards { validator } => {
            print_json(&distribution.validator_rewards(&validator).await?)?
        }
        Command::WithdrawAddress { delegator } => {
            print_json(&distribution.withdraw_address(&delegator).await?)?
        }
        Command::CommunityPool => print_json(&distribution.community_pool().await?)?,
        Command::Parameters => print_json(&distribution.parameters().await?)?,
        Command::Validators => {
            print_json(&lcd.utils().validators_with_voting_power().await?)?
        }
    }

    Ok(())
}
