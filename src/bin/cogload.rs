//! Score a text for cognitive load from the command line.

use cognitive_load::{
    CognitiveLoadEngine, FrequencyTable, HeuristicParser, ParsedDocument, Report, ScoringConfig,
    cli::CogloadArgs,
};
use ortho_config::OrthoConfig;
use std::{
    error::Error,
    fs,
    io::{self, Read},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EMPTY_INPUT_HINT: &str = "Please paste or type some text to analyze.";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = CogloadArgs::load()?;
    let text = read_input(&args)?;
    if text.trim().is_empty() {
        println!("{EMPTY_INPUT_HINT}");
        return Ok(());
    }

    let config = match &args.scoring_path {
        Some(path) => ScoringConfig::load_from_path(path)?,
        None => ScoringConfig::default(),
    };
    let lexicon = match &args.lexicon {
        Some(path) => FrequencyTable::from_tsv(config.language.clone(), &fs::read_to_string(path)?)?,
        None => FrequencyTable::english(),
    };
    debug!(language = %config.language, entries = lexicon.len(), "loaded lexicon");
    let engine = CognitiveLoadEngine::new()
        .with_lexicon(lexicon)
        .with_config(config)?;

    let result = match &args.document {
        Some(path) => {
            let doc: ParsedDocument = serde_json::from_str(&fs::read_to_string(path)?)?;
            engine.compute(&doc, &text)
        }
        None => engine.score_text(&HeuristicParser::default(), &text)?,
    };
    let report = Report::new(&result);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if args.rewrite {
        request_rewrite(&args, &text)?;
    }
    Ok(())
}

fn read_input(args: &CogloadArgs) -> io::Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_report(report: &Report) {
    let result = &report.result;
    println!("Cognitive Load Index: {:.3} ({})", result.cli, result.label);
    println!("  Intrinsic:  {:.3}", result.intrinsic.score);
    println!("  Extraneous: {:.3}", result.extraneous.score);
    println!("  Germane:    {:.3}", result.germane.score);
    let terms = &result.intrinsic.features.terms_sample;
    if !terms.is_empty() {
        println!("  Terms: {}", terms.join(", "));
    }
    println!();
    for line in &report.explanation {
        println!("- {line}");
    }
}

#[cfg(feature = "rewrite")]
fn request_rewrite(args: &CogloadArgs, text: &str) -> Result<(), Box<dyn Error>> {
    use cognitive_load::{
        RewriteClient, TargetLevel, TextProcessor,
        rewrite::DEFAULT_MODEL,
    };

    let level = args
        .target_level
        .as_deref()
        .map(str::parse::<TargetLevel>)
        .transpose()?
        .unwrap_or_default();
    let model = args.model.as_deref().unwrap_or(DEFAULT_MODEL);
    match RewriteClient::from_env(model).and_then(|client| client.with_level(level).process(text)) {
        Ok(rewritten) => println!("\nRewrite ({level}):\n{rewritten}"),
        Err(err) if err.is_retryable() => eprintln!("Rewrite failed: {err}; please try again"),
        Err(err) => eprintln!("Rewrite failed: {err}"),
    }
    Ok(())
}

#[cfg(not(feature = "rewrite"))]
#[expect(
    clippy::unnecessary_wraps,
    reason = "signature matches the rewrite-enabled build"
)]
fn request_rewrite(_args: &CogloadArgs, _text: &str) -> Result<(), Box<dyn Error>> {
    eprintln!("Rewrite unavailable: cogload was built without the `rewrite` feature");
    Ok(())
}
