//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "symmap",
    about = "Resolve well-known symbol names to their obfuscated counterparts",
    after_help = "\
EXAMPLES:
    symmap il2cpp_init                       Resolve one name (artifacts next to the executable)
    symmap -d mapper.txt -i UnityPlayer.dll il2cpp_init il2cpp_shutdown
    symmap -d mapper.txt -i UnityPlayer.dll --list"
)]
pub struct Args {
    /// Names to resolve (printed as `name -> mapped`)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Path to the descriptor file (default: mapper.txt next to the executable)
    #[arg(short, long)]
    pub descriptor: Option<PathBuf>,

    /// Path to the binary image (default: UnityPlayer.dll next to the executable)
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Dump every loaded entry instead of resolving names
    #[arg(long)]
    pub list: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
