use std::{error::Error, path::PathBuf};

use clap::{Parser, ValueEnum};
use wordgrid::{load_symbols, ScanConfig, ScanReport, SnapStrategy};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Cluster glyph centers into rows and columns.
    Lanes,
    /// Divide corner coordinates by the median tile size.
    TileSize,
}

impl From<StrategyArg> for SnapStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Lanes => SnapStrategy::LaneClustering,
            StrategyArg::TileSize => SnapStrategy::TileSize,
        }
    }
}

/// Rebuild a letter-tile board from recognizer output and score its words.
#[derive(Parser, Debug)]
#[command(name = "wordgrid", version, about, long_about = None)]
struct Args {
    /// JSON array of symbols `{text, bbox: {x0, y0, x1, y1}, confidence?}`.
    #[arg(short, long)]
    symbols: Option<PathBuf>,

    /// Newline-separated word list.
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// JSON scan config; flags given on the command line take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON scan report here.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Minimum recognizer confidence (0-100).
    #[arg(long, conflicts_with = "no_confidence")]
    confidence: Option<f32>,

    /// Keep every single-letter symbol regardless of confidence.
    #[arg(long)]
    no_confidence: bool,

    /// Accepted relative deviation from the median glyph height.
    #[arg(long)]
    size_deviation: Option<f32>,

    /// Grid snapping strategy.
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// off, error, warn, info, debug or trace. With the `tracing` feature any
    /// `RUST_LOG`-style directive is accepted and `RUST_LOG` takes precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    #[cfg(feature = "tracing")]
    {
        wordgrid::core::init_tracing_with(false, level);
        let _ = tracing_log::LogTracer::init();
    }
    #[cfg(not(feature = "tracing"))]
    {
        use std::str::FromStr;
        let level = log::LevelFilter::from_str(level).unwrap_or(log::LevelFilter::Warn);
        let _ = wordgrid::core::init_with_level(level);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = match &args.config {
        Some(path) => ScanConfig::load_json(path)?,
        None => ScanConfig::default(),
    };
    if let Some(t) = args.confidence {
        config.params.layout.filter.confidence_threshold = Some(t);
    }
    if args.no_confidence {
        config.params.layout.filter.confidence_threshold = None;
    }
    if let Some(d) = args.size_deviation {
        config.params.layout.filter.size_deviation = d;
    }
    if let Some(s) = args.strategy {
        config.params.layout.mapper.strategy = s.into();
    }

    let symbols_path = args
        .symbols
        .or_else(|| config.symbols_path.as_ref().map(PathBuf::from))
        .ok_or("no symbols file given (use --symbols or set symbols_path)")?;
    let dictionary_path = args
        .dictionary
        .or_else(|| config.dictionary_path.as_ref().map(PathBuf::from))
        .ok_or("no word list given (use --dictionary or set dictionary_path)")?;
    let output_path = args.output.or_else(|| config.output_path());

    let scanner = config.build_scanner(&dictionary_path)?;
    let symbols = load_symbols(&symbols_path)?;
    let result = scanner.scan(&symbols);

    for row in result.grid().to_rows() {
        println!("{row}");
    }
    println!("mode: {:?}", result.extraction.mode);
    if result.is_empty() {
        println!("no valid words found");
    } else {
        for word in &result.sheet.words {
            println!("{:<12} {:>3}", word.text, word.points);
        }
    }
    println!("total: {}", result.sheet.total);

    if let Some(path) = output_path {
        ScanReport::from_result(&result).write_json(&path)?;
        log::info!("report written to {}", path.display());
    }

    Ok(())
}
