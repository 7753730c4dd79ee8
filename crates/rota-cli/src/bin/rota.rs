//! rota - plan a route and tick off its steps from the terminal.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rota_cli::{parse_command, App, Command, Flow, GeoJsonMap, LocalIdentity};
use rota_core::{FieldRole, TravelMode};
use rota_mapbox::{MapboxClient, MapboxConfig};
use rota_sdk::{AddressResolver, RouteFetcher, RouteSession};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Travel mode: driving, cycling or walking
    #[arg(long, default_value = "driving")]
    mode: TravelMode,

    /// Starting address
    #[arg(long)]
    origin: Option<String>,

    /// Destination address
    #[arg(long)]
    destination: Option<String>,

    /// Write the drawn route and viewport to this GeoJSON file
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("rota_cli=info".parse()?)
        .add_directive("rota_sdk=info".parse()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json)?;

    let config = MapboxConfig::from_env()?;
    let suggestion_limit = config.suggestion_limit;
    let client = Arc::new(MapboxClient::new(config)?);

    let resolver = AddressResolver::new(client.clone()).with_suggestion_limit(suggestion_limit);
    let session = RouteSession::new(RouteFetcher::new(client.clone(), client));
    let identity = LocalIdentity::from_env();
    if let Some(user) = identity.user() {
        tracing::info!(user, "starting session");
    }

    let mut app = App::new(
        resolver,
        session,
        GeoJsonMap::new(args.geojson),
        args.mode,
        Arc::new(identity),
    );

    let mut initial = Vec::new();
    if let Some(text) = args.origin {
        initial.push(Command::Type {
            role: FieldRole::Origin,
            text,
        });
    }
    if let Some(text) = args.destination {
        initial.push(Command::Type {
            role: FieldRole::Destination,
            text,
        });
    }
    if initial.len() == 2 {
        initial.push(Command::Go);
    }
    for command in initial {
        let (_, output) = app.handle(command).await;
        println!("{}", output);
    }

    println!("mode: {} (type 'help' for commands)", app.mode());
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt();
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                let (flow, output) = app.handle(command).await;
                if !output.is_empty() {
                    println!("{}", output);
                }
                if flow == Flow::Exit {
                    break;
                }
            }
            Err(message) => println!("{}", message),
        }
        prompt();
    }

    Ok(())
}
