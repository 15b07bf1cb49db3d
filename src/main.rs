use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};

use corak::{
    describe, extract, generate_test_dataset, reader, validate, AccuracyMetrics, DataClass, MarkerStyle,
    SAMPLE_SENTENCES,
};

#[derive(Parser, Debug)]
#[command(name = "corak")]
#[command(about = "Validate and extract Malaysian names, phone numbers and email addresses")]
#[command(version)]
struct Args {
    /// Emit debug-level logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Test a whole value against a class pattern
    Validate {
        class: DataClass,
        value: String,
    },

    /// Show pattern source, description and examples
    Describe {
        /// Limit output to one class
        class: Option<DataClass>,

        #[arg(long)]
        json: bool,
    },

    /// Find names, phone numbers and emails in free text
    Extract {
        /// Text to scan; read from --file or stdin when omitted
        text: Option<String>,

        /// Read text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Scan the built-in sample sentences
        #[arg(long, conflicts_with_all = ["text", "file"])]
        samples: bool,

        /// Marker style for annotated output
        #[arg(long, value_enum, default_value_t = MarkerStyle::Bracket)]
        style: MarkerStyle,

        /// Print the full extraction result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the labelled QA dataset as JSON
    Dataset {
        #[arg(long)]
        class: Option<DataClass>,
    },

    /// Score human annotations against the dataset labels
    Score {
        /// JSON map of case id to {"verdict": bool, "comment": str}
        annotations: PathBuf,

        /// Limit scoring to one class
        #[arg(long)]
        class: Option<DataClass>,

        /// Write a QA report for --class to this path
        #[arg(long, requires = "class")]
        report_out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries command output, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Validate { class, value } => {
            let matched = validate(class, &value);
            info!(%class, matched, "Validated value");
            println!("{}", if matched { "match" } else { "no match" });
        }
        Command::Describe { class, json } => {
            let classes = match class {
                Some(class) => vec![class],
                None => DataClass::ALL.to_vec(),
            };
            let descriptions: Vec<_> = classes.into_iter().map(describe).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&descriptions)?);
            } else {
                for desc in descriptions {
                    println!("{}: {}", desc.class, desc.description);
                    println!("  pattern: {}", desc.pattern_source);
                    println!("  sentence pattern: {}", desc.sentence_pattern_source);
                    for example in &desc.examples {
                        println!("  example: {example}");
                    }
                }
            }
        }
        Command::Extract { text, file, samples, style, json } => {
            let inputs: Vec<String> = if samples {
                SAMPLE_SENTENCES.iter().map(|s| s.to_string()).collect()
            } else if let Some(text) = text {
                vec![text]
            } else if let Some(path) = file {
                vec![reader::read_text_async(&path).await?]
            } else {
                vec![reader::read_stdin_async().await?]
            };

            let results: Vec<_> = inputs.iter().map(|input| extract(input)).collect();
            let total_spans: usize = results.iter().map(|r| r.spans.len()).sum();
            info!(inputs = results.len(), spans = total_spans, "Extraction complete");

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    println!("{}", result.render(style));
                }
            }
        }
        Command::Dataset { class } => {
            let cases: Vec<_> = generate_test_dataset()
                .into_iter()
                .filter(|c| class.map_or(true, |class| c.class == class))
                .collect();
            println!("{}", serde_json::to_string_pretty(&cases)?);
        }
        Command::Score { annotations, class, report_out } => {
            let session = reader::read_annotations_async(&annotations).await?;
            let cases = generate_test_dataset();

            let classes = match class {
                Some(class) => vec![class],
                None => DataClass::ALL.to_vec(),
            };

            for class in classes {
                let (annotated, total) = session.progress(&cases, class);
                let metrics = session.metrics_for(&cases, class);
                print_metrics(class, annotated, total, &metrics);
            }

            if let (Some(path), Some(class)) = (report_out, class) {
                let report = session.report(&cases, class, chrono::Utc::now());
                reader::write_report_async(&path, &report).await?;
                println!("Report written to {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_metrics(class: DataClass, annotated: usize, total: usize, metrics: &AccuracyMetrics) {
    println!("{class}: annotated {annotated} / {total}");
    println!(
        "  TP {}  TN {}  FP {}  FN {}",
        metrics.true_positives, metrics.true_negatives, metrics.false_positives, metrics.false_negatives
    );
    println!(
        "  accuracy {:.1}%  precision {:.1}%  recall {:.1}%  f1 {:.1}%",
        metrics.accuracy * 100.0,
        metrics.precision * 100.0,
        metrics.recall * 100.0,
        metrics.f1_score * 100.0
    );
}
