use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use interpret::{
    Notation,
    log::{LogLevel, Logger},
    parse_with,
};

#[derive(Parser)]
#[command(name = "interpret")]
#[command(about = "Evaluate a left-fold integer expression such as \"10 + 2 - 5\"")]
struct Cli {
    /// The expression to evaluate, tokens separated by whitespace
    #[arg(default_value = "10 + 2 - 5")]
    expression: String,

    /// Operators follow their operands (`10 2 + 5 -`)
    #[arg(long)]
    postfix: bool,

    /// Print the parsed tree before the result
    #[arg(long)]
    tree: bool,

    /// Disable ansi colored output
    #[arg(long)]
    no_color: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn init_logging(level: LogLevel, ansi: bool) {
    // RUST_LOG overrides the level picked on the command line
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("interpret={}", level.as_filter())));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level, !cli.no_color);

    let logger = Logger::new(!cli.no_color, cli.log_level);
    let notation = if cli.postfix {
        Notation::Postfix
    } else {
        Notation::Infix
    };

    logger.info(format_args!("Evaluating expression: {}", cli.expression));

    let expr = parse_with(&cli.expression, notation)
        .with_context(|| format!("Failed to evaluate `{}`", cli.expression))?;

    if cli.tree {
        logger.info(format_args!("Parsed tree: {expr}"));
    } else {
        logger.verbose(format_args!("Parsed tree: {expr}"));
    }

    logger.info(format_args!("Result: {}", expr.evaluate()));

    Ok(())
}
