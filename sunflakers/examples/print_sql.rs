use std::{env, fs};

use sunflake::build_query::build_query;
use sunflake::models::SunflakeState;

fn usage() {
    eprintln!("Usage: print_sql <state_json>");
    eprintln!("Example: cargo run --example print_sql -- query_state.json");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        usage();
        std::process::exit(1);
    }

    let state_str = fs::read_to_string(args.remove(0))?;
    let state: SunflakeState = serde_json::from_str(&state_str)?;

    let sql = build_query(&state)?;
    println!("{sql}");
    Ok(())
}
