use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use storefront::backend::PaymentBackend;
use storefront::config::Config;
use storefront::error::{AppError, Result};
use storefront::funnel::{self, Verification};
use storefront::models::{self, DownloadLink, PurchaseIntent, MAIN_PACKAGE_ID};
use storefront::poller::StatusPoller;
use storefront::ticker::Countdown;

#[derive(Parser)]
#[command(name = "storefront", about = "Headless checkout funnel client", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available packages
    Packages {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the public landing-page counters
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a checkout session and print the payment URL
    Buy {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = MAIN_PACKAGE_ID)]
        package: String,
    },
    /// Verify a completed payment and print the download bundle
    Verify {
        /// Session id from the checkout return link
        #[arg(long)]
        session: String,
        /// Buyer email (falls back to the session's metadata)
        #[arg(long)]
        email: Option<String>,
        /// The premium upsell was purchased with this session
        #[arg(long)]
        upsell: bool,
    },
    /// Fetch a previously generated download bundle
    Downloads {
        #[arg(long)]
        session: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storefront=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let backend = PaymentBackend::from_config(&config);

    match run(cli.command, &config, &backend).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config, backend: &PaymentBackend) -> Result<()> {
    match command {
        Command::Packages { json } => {
            // Live catalog when reachable, static catalog otherwise.
            let packages = match backend.packages().await {
                Ok(packages) => packages,
                Err(err) => {
                    tracing::warn!(error = %err, "packages fetch failed, using static catalog");
                    models::catalog()
                }
            };
            if json {
                let body = serde_json::to_string_pretty(&packages)
                    .map_err(|e| AppError::Internal(e.to_string()))?;
                println!("{body}");
            } else {
                for p in packages {
                    println!("{}  {} {:.2}  {}", p.id, p.currency.to_uppercase(), p.price, p.name);
                    for item in &p.contents {
                        println!("    - {item}");
                    }
                }
            }
        }
        Command::Stats { json } => {
            let stats = funnel::landing_stats(backend).await;
            if json {
                let body = serde_json::to_string_pretty(&stats)
                    .map_err(|e| AppError::Internal(e.to_string()))?;
                println!("{body}");
            } else {
                println!("revenue generated:  {}", stats.total_revenue);
                println!("total customers:    {}", stats.total_customers);
                println!("success rate:       {}", stats.success_rate);
                println!("customers saved:    {}", stats.customers_saved);
            }
        }
        Command::Buy { email, package } => {
            let intent = PurchaseIntent::new(email, false);
            let session =
                funnel::begin_checkout(backend, &intent, &package, &config.origin_url).await?;
            println!("Checkout session created: {}", session.session_id);
            println!("Complete your payment at:\n  {}", session.url);
            println!(
                "\nAfter paying, run:\n  storefront verify --session {}",
                session.session_id
            );
        }
        Command::Verify {
            session,
            email,
            upsell,
        } => {
            let poller = StatusPoller::new(config.poll_attempts, config.poll_delay());

            // Heartbeat while the poller runs; dropping the countdown stops
            // it, so nothing prints after verification settles.
            let budget = config.poll_attempts as u64 * config.poll_delay_ms / 1000;
            let heartbeat = Countdown::start(
                chrono::Utc::now() + chrono::Duration::seconds(budget as i64),
                Duration::from_secs(2),
            );
            let mut ticks = heartbeat.subscribe();
            let progress = tokio::spawn(async move {
                while ticks.changed().await.is_ok() {
                    eprintln!("verifying payment...");
                }
            });

            let outcome =
                funnel::verify_purchase(backend, &poller, Some(&session), email.as_deref(), upsell)
                    .await;
            drop(heartbeat);
            let _ = progress.await;

            match outcome {
                Verification::Confirmed { email, bundle, .. } => {
                    println!("Payment confirmed.");
                    if let Some(email) = email {
                        println!("Setup instructions are on their way to {email}.");
                    }
                    println!("\nYour downloads:");
                    print_bundle(&bundle);
                }
                Verification::Failed { reason, .. } => return Err(reason),
            }
        }
        Command::Downloads { session } => {
            let bundle = backend.downloads(&session).await?;
            print_bundle(&bundle);
        }
    }

    Ok(())
}

fn print_bundle(bundle: &[DownloadLink]) {
    for link in bundle {
        println!("  {} ({})\n    {}", link.name, link.size, link.url);
    }
}
