use anyhow::Context;
use clap::Parser;
use shared::CountSummary;
use tracing::info;
use venue_client::{VenueApi, VenueService};
use venue_console::logger::init_logger;
use venue_console::{Cli, Command, Console, Decision, VenueRow, render_table};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logger(Some(&cli.log_level), cli.log_json);

    let http = cli
        .client_config()
        .build_http_client()
        .context("failed to build HTTP client")?;
    info!(base_url = %cli.base_url, timeout = cli.timeout, "Venue console starting");

    let console = Console::with_listing(VenueService::new(http), cli.listing());
    run(&console, cli.command).await
}

async fn run<A: VenueApi>(console: &Console<A>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List(args) => {
            console.load().await?;
            console.set_page(args.page).await;
            print_listing(console).await;
        }
        Command::Show { id } => {
            console.refresh().await?;
            console.select(id).await?;
            match console.detail().await {
                Some(detail) => print!("{}", detail.render()),
                None => println!("No details for hotel {id}"),
            }
        }
        Command::Approve { id } => review(console, id, Decision::Approve).await?,
        Command::Reject { id } => review(console, id, Decision::Reject).await?,
        Command::Edit { id, set } => {
            console.refresh().await?;
            console.begin_edit(id).await?;
            for (field, value) in &set {
                if let Err(err) = console.set_field(*field, value).await {
                    console.cancel_edit().await?;
                    return Err(err).with_context(|| format!("cannot set {field}"));
                }
            }
            console
                .save_edit()
                .await
                .with_context(|| format!("failed to update hotel {id}"))?;
            println!("Hotel {id} updated");
        }
        Command::Counts { mobile } => {
            console.refresh_counts(mobile.as_deref()).await?;
            if let Some(counts) = console.snapshot().await.counts {
                print_counts(&counts);
            }
        }
    }
    Ok(())
}

async fn review<A: VenueApi>(
    console: &Console<A>,
    id: shared::VenueId,
    decision: Decision,
) -> anyhow::Result<()> {
    console.refresh().await?;
    console
        .review(id, decision)
        .await
        .with_context(|| format!("failed to {} hotel {id}", decision.label().to_lowercase()))?;
    println!("Hotel {id} {}", decision.past_tense());
    Ok(())
}

async fn print_listing<A: VenueApi>(console: &Console<A>) {
    let state = console.snapshot().await;
    if let Some(error) = state.page_error() {
        eprintln!("Error: {error}");
    }

    let rows: Vec<Vec<String>> = state.rows().iter().map(VenueRow::cells).collect();
    print!("{}", render_table(&VenueRow::HEADERS, &rows));

    let page = state.listing.page();
    let summary = state.summary();
    println!();
    println!(
        "Page {}/{} | Total: {} | Verified: {} | Valid: {}",
        page.page, page.total_pages, summary.total, summary.verified, summary.valid
    );

    if let Some(counts) = &state.counts {
        println!();
        print_counts(counts);
    }
}

fn print_counts(counts: &CountSummary) {
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            vec![key.to_string(), value]
        })
        .collect();
    print!("{}", render_table(&["Count", "Value"], &rows));
}
