use batcher::gateway::rpc::{connect, connect_with_signer};
use batcher::{ActionBatch, Address, AddressRegistry, Coin, Config, DefiClient, U256};
use clap::{Parser, Subcommand};
use eyre::{Result, eyre};
use std::env;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a gas price from recent block data
    GasPrice {
        /// Block to sample; defaults to the latest block
        #[arg(long = "block", short = 'b')]
        block: Option<u64>,

        /// Network ID
        #[arg(long = "network", short = 'n', default_value_t = 1)]
        network_id: u32,
    },
    /// Read an account's balance of a coin
    Balance {
        /// Coin symbol, e.g. DAI or cDAI
        #[arg(long = "coin", short = 'c')]
        coin: String,

        /// Account to query
        #[arg(long = "owner", short = 'o')]
        owner: String,

        /// Network ID
        #[arg(long = "network", short = 'n', default_value_t = 1)]
        network_id: u32,
    },
    /// Build a single-swap batch; prints it, or executes with --execute
    Swap {
        /// Input amount in the quote coin's smallest unit
        #[arg(long = "amount", short = 'a')]
        amount: String,

        /// Coin to receive
        #[arg(long = "base")]
        base: String,

        /// Coin to pay with
        #[arg(long = "quote")]
        quote: String,

        /// Venue: uniswap, sushiswap or kyber
        #[arg(long = "venue", default_value = "uniswap")]
        venue: String,

        /// Submit the batch (requires PRIVATE_KEY in the environment)
        #[arg(long = "execute", short = 'e')]
        execute: bool,

        /// Network ID
        #[arg(long = "network", short = 'n', default_value_t = 1)]
        network_id: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::GasPrice { block, network_id } => {
            let config = Config::load()?;
            let gateway = connect(config.rpc_url(*network_id)?).await?;
            let client = DefiClient::new(gateway, Address::ZERO, AddressRegistry::mainnet());
            let gas_price = client.suggest_gas_price(*block).await?;
            println!("{}", gas_price);
        }
        Commands::Balance {
            coin,
            owner,
            network_id,
        } => {
            let coin: Coin = coin.parse().map_err(|e| eyre!("{e}"))?;
            let owner: Address = owner.parse()?;
            let config = Config::load()?;
            let gateway = connect(config.rpc_url(*network_id)?).await?;
            let client = DefiClient::new(gateway, owner, AddressRegistry::mainnet());
            let balance = client.balance_of(coin).await?;
            println!("{}", balance);
        }
        Commands::Swap {
            amount,
            base,
            quote,
            venue,
            execute,
            network_id,
        } => {
            let amount: U256 = amount.parse()?;
            let base: Coin = base.parse().map_err(|e| eyre!("{e}"))?;
            let quote: Coin = quote.parse().map_err(|e| eyre!("{e}"))?;
            let config = Config::load()?;
            let rpc_url = config.rpc_url(*network_id)?;

            if *execute {
                let private_key = env::var("PRIVATE_KEY")
                    .map_err(|_| eyre!("PRIVATE_KEY must be set to execute"))?;
                let (gateway, owner) = connect_with_signer(rpc_url, private_key).await?;
                let client = DefiClient::new(gateway, owner, AddressRegistry::mainnet());
                let batch = build_swap(&client, amount, base, quote, venue)?;
                let receipt = client.execute_actions(&batch).await?;
                println!("Executed in transaction: {}", receipt.tx_hash);
            } else {
                let gateway = connect(rpc_url).await?;
                let client = DefiClient::new(gateway, Address::ZERO, AddressRegistry::mainnet());
                let batch = build_swap(&client, amount, base, quote, venue)?;
                print_batch(&batch)?;
            }
        }
    }

    Ok(())
}

fn build_swap<G>(
    client: &DefiClient<G>,
    amount: U256,
    base: Coin,
    quote: Coin,
    venue: &str,
) -> Result<ActionBatch>
where
    G: batcher::ChainGateway,
{
    let batch = match venue {
        "uniswap" => client.uniswap().swap_actions(amount, base, quote)?,
        "sushiswap" => client.sushiswap().swap_actions(amount, base, quote)?,
        "kyber" => client.kyber().swap_actions(amount, base, quote)?,
        other => return Err(eyre!("unknown venue: {}", other)),
    };
    Ok(batch)
}

fn print_batch(batch: &ActionBatch) -> Result<()> {
    println!("# Batch");
    println!("```json");
    println!("{}", serde_json::to_string_pretty(&batch.describe())?);
    println!("```");
    println!(
        "\nTotal native value required: {}",
        batch.combine().total_value
    );
    Ok(())
}
