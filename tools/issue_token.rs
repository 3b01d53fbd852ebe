use clap::Parser;

use jobboard::{api::middleware::auth::JwtKeys, Config};

/// Print a signed bearer token for a user
#[derive(Parser)]
struct Cli {
    username: String,

    /// Grant admin rights
    #[arg(long)]
    admin: bool,

    /// Overrides TOKEN_TTL_SECS
    #[arg(long)]
    ttl_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    let keys = JwtKeys::new(
        config.signing_secret(),
        cli.ttl_secs.unwrap_or(config.token_ttl_secs),
    );
    println!("{}", keys.create_token(&cli.username, cli.admin)?);

    Ok(())
}
