use clap::Parser;

/// niwin: a click-through, always-on-top overlay window.
#[derive(Parser, Debug)]
#[command(name = "niwin", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Keep the window capturing input instead of letting clicks through.
    #[arg(long)]
    pub no_pass_through: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
