use anyhow::Result;
use clap::Parser;
use cordura::{
    analysis::{self, AnalysisFilter},
    cli::{Cli, OutputFormat},
    csv_output, json_output, report,
    scorecard::Scorecard,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let scorecard = Scorecard::from_csv_path(&args.input)?;
    let filter = AnalysisFilter {
        pavilion: args.pavilion,
        metric: args.metric,
    };
    let results = analysis::analyze_filtered(&scorecard, &filter);

    match args.format {
        OutputFormat::Text => print!("{}", report::render(&results)),
        OutputFormat::Json => println!("{}", json_output::to_json(&results)?),
        OutputFormat::Csv => print!("{}", csv_output::to_csv(&results)),
    }

    Ok(())
}
