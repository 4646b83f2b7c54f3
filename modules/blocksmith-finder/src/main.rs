mod searcher;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blocksmith_common::{BlocksmithError, Config, Side};
use blocksmith_evidence::find_evidence;
use searcher::SerperSearcher;

/// Inputs longer than this are almost always pasted speeches, not claims,
/// and produce useless queries.
const MAX_INPUT_LEN: usize = 200;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("blocksmith=info".parse()?))
        .init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [resolution, side, argument] = args.as_slice() else {
        bail!("Usage: blocksmith-finder <resolution> <affirmative|negative> <argument>");
    };
    let side: Side = side.parse()?;
    validate_inputs(resolution, argument)?;

    info!("Blocksmith evidence finder starting...");

    let config = Config::from_env();
    config.log_redacted();

    let searcher = SerperSearcher::new(&config.serper_api_key);

    match find_evidence(&searcher, resolution, argument, side, config.result_limit).await? {
        Some(evidence) => {
            info!(
                source = evidence.source.as_str(),
                resolution_relevant = evidence.verdicts.resolution_relevant,
                argument_relevant = evidence.verdicts.argument_relevant,
                source_reliable = evidence.verdicts.source_reliable,
                "Evidence found"
            );
            println!("{}", evidence.copy_block());
            println!("\nCitation: {}", evidence.citation);
            println!("{}", evidence.relevance_note);
        }
        None => {
            println!("No relevant evidence found. Try refining your search terms.");
        }
    }

    Ok(())
}

fn validate_inputs(resolution: &str, argument: &str) -> Result<(), BlocksmithError> {
    if resolution.trim().is_empty() {
        return Err(BlocksmithError::Validation(
            "Please enter a debate resolution".to_string(),
        ));
    }
    if argument.trim().is_empty() {
        return Err(BlocksmithError::Validation(
            "Please enter the opponent's argument".to_string(),
        ));
    }
    if resolution.chars().count() > MAX_INPUT_LEN || argument.chars().count() > MAX_INPUT_LEN {
        return Err(BlocksmithError::Validation(
            "Resolution or argument is too long. Please be more concise".to_string(),
        ));
    }
    Ok(())
}
