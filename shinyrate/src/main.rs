use anyhow::{Context, Result};
use clap::Parser;
use shinyrate_core::{CalcConfig, Modifier, ModifierSet, ShinyReport};

/// Calculate the probability of encountering a shiny pokemon
#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Calculate probability including the shiny charm
    #[arg(long, overrides_with = "no_shiny_charm")]
    shiny_charm: bool,

    /// Calculate probability without the shiny charm (default)
    #[arg(long, overrides_with = "shiny_charm")]
    no_shiny_charm: bool,

    /// Calculate probability using the masuda method
    #[arg(long, overrides_with = "no_masuda")]
    masuda: bool,

    /// Calculate probability without the masuda method (default)
    #[arg(long, overrides_with = "masuda")]
    no_masuda: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Active modifiers. Each flag pair overrides itself, so the later of
    /// `--x` / `--no-x` is the only one left set.
    fn modifiers(&self) -> ModifierSet {
        ModifierSet::empty()
            .with(Modifier::ShinyCharm, self.shiny_charm && !self.no_shiny_charm)
            .with(Modifier::Masuda, self.masuda && !self.no_masuda)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let modifiers = args.modifiers();
    log::debug!("Active modifiers: {}", modifiers);

    let config = CalcConfig::default();
    let report = ShinyReport::build(&config, modifiers)
        .with_context(|| format!("Failed to compute shiny odds for [{}]", modifiers))?;

    print!("{}", report);

    Ok(())
}
