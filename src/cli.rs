use clap::Parser;

/// Remove no-face rows (label -2) from the AffectNet training annotations
#[derive(Debug, Parser)]
#[command(version, long_about = None)]
pub struct Cli {}
