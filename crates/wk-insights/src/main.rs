//! `wkinsights`: print review and mnemonic statistics for a WaniKani account.
//!
//! Configuration comes from `WK_*` environment variables, `.env`, and the
//! `.wanikani/config.toml` files; see `wk-config`.

use anyhow::Context;
use wk_api::WkClient;
use wk_config::WkConfig;
use wk_insights::{ReviewStats, SubjectCount, mnemonic_mentions, render_mentions, render_reviews};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("wkinsights error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = WkConfig::load_with_dotenv().context("failed to load configuration")?;
    init_tracing(config.insights.verbose)?;

    config
        .require_api()
        .context("no API token provided")?;

    let client = WkClient::from_config(&config).context("failed to build API client")?;

    let reviews = client
        .get_all_reviews()
        .await
        .context("failed to fetch reviews")?;
    let stats = ReviewStats::from_reviews(&reviews);
    tracing::info!(reviews = stats.total(), subjects = stats.subject_count(), "reviews fetched");

    let mut top = Vec::new();
    for (subject_id, count) in stats.most_reviewed(config.insights.top_subjects) {
        let subject = client
            .get_subject(subject_id)
            .await
            .with_context(|| format!("failed to fetch subject {subject_id}"))?;
        top.push(SubjectCount {
            label: subject.characters().unwrap_or_else(|| subject.slug()).to_string(),
            meaning: subject.primary_meaning().map(|m| m.meaning.clone()),
            count,
        });
    }
    print!("{}", render_reviews(&stats, &top));
    println!();

    let subjects = client
        .get_all_subjects()
        .await
        .context("failed to fetch subjects")?;
    tracing::info!(subjects = subjects.len(), "subjects fetched");

    let mentions = mnemonic_mentions(&subjects, &config.insights.mention_term);
    print!("{}", render_mentions(&mentions));

    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "info" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
