extern crate pretty_env_logger;

use std::env;

use structopt::StructOpt;
use token_creator_core::{
    build_create, build_mint, create_token, mint_token, Authorities, CreateFields, HederaLedger,
    KeyInput, OperatorConfig, Result,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "token-creator", about = "Create and mint tokens from CLI")]
struct Opt {
    #[structopt(long, env = "OPERATOR_KEY", hide_env_values = true)]
    operator_key: String,

    #[structopt(long, env = "OPERATOR_ID")]
    operator_id: String,

    #[structopt(
        long,
        env = "HEDERA_NETWORK",
        default_value = "testnet",
        help = "one of: mainnet, testnet, previewnet"
    )]
    network: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    #[structopt(about = "Create tokens", after_help = CREATE_EXAMPLES)]
    Create(CreateOpt),
    #[structopt(about = "Mint tokens", after_help = MINT_EXAMPLES)]
    Mint(MintOpt),
}

#[derive(Debug, StructOpt)]
struct CreateOpt {
    #[structopt(long)]
    token_name: String,

    #[structopt(long)]
    token_symbol: String,

    #[structopt(long, default_value = "0")]
    decimals: u32,

    #[structopt(long, default_value = "0")]
    initial_supply: u64,

    #[structopt(long)]
    treasury_account_id: String,

    #[structopt(long, help = "the key required to sign token update transactions")]
    admin_key: Option<String>,

    #[structopt(long, help = "the key required to add KYC to token holders")]
    kyc_key: Option<String>,

    #[structopt(long)]
    freeze_key: Option<String>,

    #[structopt(long)]
    wipe_key: Option<String>,

    #[structopt(long, help = "leave unset for a token with limited supply")]
    supply_key: Option<String>,

    #[structopt(long)]
    freeze_default: bool,

    #[structopt(long, help = "RFC 3339 format, e.g. 2030-01-01T00:00:00Z")]
    expiration_time: Option<String>,
}

impl CreateOpt {
    fn into_parts(self) -> (CreateFields, Authorities<KeyInput>) {
        let fields = CreateFields {
            name: self.token_name,
            symbol: self.token_symbol,
            decimals: self.decimals,
            initial_supply: self.initial_supply,
            treasury_account_id: self.treasury_account_id,
            expiration_time: self.expiration_time,
            freeze_default: self.freeze_default,
        };
        let authorities = Authorities {
            admin: KeyInput::from(self.admin_key),
            kyc: KeyInput::from(self.kyc_key),
            freeze: KeyInput::from(self.freeze_key),
            wipe: KeyInput::from(self.wipe_key),
            supply: KeyInput::from(self.supply_key),
        };
        (fields, authorities)
    }
}

#[derive(Debug, StructOpt)]
struct MintOpt {
    #[structopt(long)]
    token_id: String,

    #[structopt(long)]
    amount: u64,

    #[structopt(
        long,
        help = "used for signing; required if the supply key of the token is not the operator key"
    )]
    supply_key: Option<String>,
}

const CREATE_EXAMPLES: &str = r#"EXAMPLES:
Create a mutable token (set an admin key):
    token-creator --operator-key <key> --operator-id <id> create \
        --token-name <name> --token-symbol <symbol> \
        --treasury-account-id <id> --admin-key <key>

Create a token which requires KYC (set a kyc key):
    token-creator --operator-key <key> --operator-id <id> create \
        --token-name <name> --token-symbol <symbol> \
        --treasury-account-id <id> --kyc-key <key>

Create a token with limited supply (do not set a supply key):
    token-creator --operator-key <key> --operator-id <id> create \
        --token-name <name> --token-symbol <symbol> \
        --treasury-account-id <id> --initial-supply <amount>"#;

const MINT_EXAMPLES: &str = r#"EXAMPLES:
    token-creator --operator-key <key> --operator-id <id> mint \
        --token-id <id> --amount <amount> --supply-key <key>"#;

async fn run(opt: Opt) -> Result<()> {
    let config = OperatorConfig::new(&opt.operator_id, &opt.operator_key, &opt.network)?;
    log::debug!("{:?}", config);
    let ledger = HederaLedger::connect(&config)?;

    match opt.cmd {
        Command::Create(create) => {
            let (fields, authorities) = create.into_parts();
            let tx = build_create(&fields, &authorities)?;
            let token_id = create_token(&ledger, &tx).await?;
            println!("{token_id}");
        }
        Command::Mint(mint) => {
            let plan = build_mint(&mint.token_id, mint.amount, &KeyInput::from(mint.supply_key))?;
            let total_supply = mint_token(&ledger, &plan).await?;
            println!("New Total Supply: {total_supply}");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "token_creator=info");
    }
    pretty_env_logger::init();

    let opt = Opt::from_args();
    if let Err(err) = run(opt).await {
        log::debug!("{:?}", err);
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
