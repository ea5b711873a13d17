use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the tag of the input
    Compute(ComputeArgs),

    /// Verify a tag against the input
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Input (message) file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Key file path (raw key bytes).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the raw 16-byte tag to this path (the tag is always printed as hex).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Only valid with --gen-key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits256,
        requires = "gen_key"
    )]
    pub key_size: KeySize,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Expected tag, provided as hex string
    #[arg(short = 't', long = "tag", value_name = "HEX")]
    pub tag: String,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}
