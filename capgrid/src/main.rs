//! capgrid command-line tool
//!
//! Trains from the fixed sample directory layout, recognizes one captcha
//! image, and writes the single-line result to the output path.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use capgrid::{ClassifierKind, Recognizer};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: capgrid [--classifier exact|bayes] <training-dir> <image> <output>";

struct Args {
    classifier: ClassifierKind,
    training_dir: String,
    image: String,
    output: String,
}

fn parse_args() -> Result<Args> {
    let mut classifier = ClassifierKind::default();
    let mut positional = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--classifier" => {
                let value = args.next().context("--classifier needs a value")?;
                classifier = match value.as_str() {
                    "exact" => ClassifierKind::Exact,
                    "bayes" => ClassifierKind::Bayes,
                    other => bail!("unknown classifier '{}'\n{}", other, USAGE),
                };
            }
            "--help" | "-h" => bail!("{}", USAGE),
            _ => positional.push(arg),
        }
    }

    let [training_dir, image, output]: [String; 3] = positional
        .try_into()
        .map_err(|_| anyhow::anyhow!("{}", USAGE))?;

    Ok(Args {
        classifier,
        training_dir,
        image,
        output,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let (recognizer, report) = Recognizer::train(&args.training_dir, args.classifier)
        .with_context(|| format!("training from {} failed", args.training_dir))?;
    // Per-sample skip reasons are logged by the trainer itself
    info!(
        trained = report.trained_count(),
        skipped = report.skipped_count(),
        "corpus built"
    );

    let text = recognizer
        .run(&args.image, &args.output)
        .with_context(|| format!("writing {} failed", args.output))?;
    info!(image = %args.image, output = %args.output, result = %text, "done");

    Ok(())
}
