//! lipi - Indian script transliteration CLI

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use lipi::config::{load_config, load_config_from, LipiConfig};
use lipi::detection::{detect_script_with_confidence, is_valid_script_result};
use lipi::phrases::{self, Category};
use lipi::quality::{analyze_text, review_text};
use lipi::{Script, ScriptTag, Transliterator};

/// Source script argument: a script tag or `auto`
#[derive(Debug, Clone, Copy)]
struct SourceArg(Option<ScriptTag>);

fn parse_source(s: &str) -> Result<SourceArg, String> {
    if s.trim().eq_ignore_ascii_case("auto") {
        return Ok(SourceArg(None));
    }
    s.parse::<ScriptTag>()
        .map(|tag| SourceArg(Some(tag)))
        .map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect the dominant script of the text
    Detect { text: String },

    /// Convert text into one target script
    Convert {
        text: String,
        /// Source script (devanagari, tamil, malayalam, gurmukhi, latin) or auto
        #[arg(short, long, default_value = "auto", value_parser = parse_source)]
        from: SourceArg,
        /// Target script
        #[arg(short, long)]
        to: Script,
    },

    /// Convert text into every configured target script
    All {
        text: String,
        #[arg(short, long, default_value = "auto", value_parser = parse_source)]
        from: SourceArg,
    },

    /// Score the input text
    Quality { text: String },

    /// Word counts, complexity and readability of the text
    Analyze { text: String },

    /// Tourist phrasebook
    Phrases {
        /// Phrase to translate
        phrase: Option<String>,
        /// List the phrases of one category
        #[arg(short, long)]
        category: Option<Category>,
        /// Search phrases and categories
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// lipi - convert text between Devanagari, Tamil, Malayalam, Gurmukhi and romanized input
#[derive(Parser, Debug)]
#[command(name = "lipi")]
#[command(version)]
#[command(about = "Transliterate text between Indian scripts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // warnings and errors only unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("cannot read config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => load_config(),
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

/// Reject blank input before it reaches the engine
fn require_text(text: &str) -> Result<&str, String> {
    if text.trim().is_empty() {
        Err("please enter text".to_string())
    } else {
        Ok(text)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("cannot encode output: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn run(cli: &Cli, config: &LipiConfig) -> Result<(), String> {
    let transliterator = Transliterator::from_config(config);

    match &cli.command {
        Commands::Detect { text } => {
            let text = require_text(text)?;
            let script = transliterator.detect_script(text);
            let (_, share) = detect_script_with_confidence(text);
            if cli.json {
                print_json(&serde_json::json!({ "script": script, "confidence": share }))?;
            } else {
                println!("{} ({:.0}%)", script.display_name(), share * 100.0);
            }
        }

        Commands::Convert { text, from, to } => {
            let text = require_text(text)?;
            let result = transliterator.convert_auto(text, from.0, *to);
            if !result.is_error() && !is_valid_script_result(&result.text, *to) {
                log::warn!("output is not entirely {}", to.display_name());
            }
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", result.text);
                println!(
                    "method: {}  confidence: {:.0}%",
                    result.method,
                    result.confidence * 100.0
                );
            }
        }

        Commands::All { text, from } => {
            let text = require_text(text)?;
            let report = transliterator.transliterate_all(text, from.0, &config.targets);
            if cli.json {
                print_json(&report)?;
            } else {
                println!("source: {}", report.source.display_name());
                for (script, result) in &report.results {
                    println!(
                        "{:<20} {}  [{} {:.0}%]",
                        script.display_name(),
                        result.text,
                        result.method,
                        result.confidence * 100.0
                    );
                }
                if report.low_quality {
                    println!("warning: low input quality ({:.0}%)", report.quality.overall * 100.0);
                }
            }
        }

        Commands::Quality { text } => {
            let text = require_text(text)?;
            let metrics = transliterator.assess_text_quality(text);
            if cli.json {
                print_json(&metrics)?;
            } else {
                println!("confidence:   {:.1}%", metrics.confidence * 100.0);
                println!("accuracy:     {:.1}%", metrics.accuracy * 100.0);
                println!("completeness: {:.1}%", metrics.completeness * 100.0);
                println!("readability:  {:.1}%", metrics.readability * 100.0);
                println!("overall:      {:.1}%", metrics.overall * 100.0);
            }
        }

        Commands::Analyze { text } => {
            let text = require_text(text)?;
            let analysis = analyze_text(text);
            let review = review_text(text);
            if cli.json {
                print_json(&serde_json::json!({ "analysis": analysis, "review": review }))?;
            } else {
                println!("script:      {} ({:.0}%)", analysis.script.display_name(), analysis.confidence * 100.0);
                println!("words:       {}", analysis.word_count);
                println!("characters:  {}", analysis.character_count);
                println!("complexity:  {:?}", analysis.complexity);
                println!("readability: {:.1}", analysis.readability_score);
                for tip in &review.recommendations {
                    println!("- {}", tip);
                }
            }
        }

        Commands::Phrases {
            phrase,
            category,
            search,
        } => run_phrases(cli.json, phrase.as_deref(), *category, search.as_deref())?,
    }

    Ok(())
}

fn run_phrases(
    json: bool,
    phrase: Option<&str>,
    category: Option<Category>,
    search: Option<&str>,
) -> Result<(), String> {
    if let Some(phrase) = phrase {
        let phrase = require_text(phrase)?;
        let Some(entry) = phrases::translations(phrase) else {
            let hints = phrases::suggestions(phrase);
            if hints.is_empty() {
                return Err(format!("no translation for \"{}\"", phrase));
            }
            return Err(format!("no translation for \"{}\"; try: {}", phrase, hints.join(", ")));
        };
        if json {
            return print_json(entry);
        }
        println!("{} ({})", entry.english, entry.meaning);
        for script in Script::ALL {
            println!("  {:<20} {}", script.display_name(), entry.get(script));
        }
        return Ok(());
    }

    let entries = match (category, search) {
        (Some(category), _) => phrases::phrases_in(category),
        (None, Some(query)) => phrases::search(query),
        (None, None) => {
            let categories = phrases::categories();
            if json {
                return print_json(&categories);
            }
            for category in categories {
                println!("{} ({})", category, phrases::phrases_in(category).len());
            }
            return Ok(());
        }
    };

    if json {
        return print_json(&entries);
    }
    for entry in entries {
        println!("{:<36} {}", entry.english, entry.devanagari);
    }
    Ok(())
}
