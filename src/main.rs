//! # symmap - Main Entry Point
//!
//! Loads the descriptor/image pair and resolves the names given on the
//! command line, or dumps the whole table with `--list`. The library never
//! raises resolution failures, so the binary's only hard errors are usage
//! mistakes and a load that left the store unloaded.

use anyhow::{bail, Result};
use clap::Parser;
use symmap::cli::Args;
use symmap::store::{default_paths, MapperStore, StoreState};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.to_string().to_lowercase().contains("missing required argument") {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if args.names.is_empty() && !args.list {
        bail!(
            "Missing required argument: NAME or --list\n\n\
             Usage:\n  \
             symmap il2cpp_init      Resolve a name\n  \
             symmap --list           Dump the whole table\n\n\
             Run 'symmap --help' for more options"
        );
    }

    // Explicit paths win; anything omitted falls back to the conventional
    // artifact names next to the executable.
    let (descriptor, image) = match (args.descriptor, args.image) {
        (Some(descriptor), Some(image)) => (descriptor, image),
        (descriptor, image) => {
            let (default_descriptor, default_image) = default_paths()?;
            (descriptor.unwrap_or(default_descriptor), image.unwrap_or(default_image))
        }
    };

    if !args.quiet {
        println!("symmap v{}", env!("CARGO_PKG_VERSION"));
        println!("descriptor: {}", descriptor.display());
        println!("image: {}", image.display());
    }

    let mut store = MapperStore::new();
    store.load(&descriptor, &image);

    if store.state() != StoreState::Loaded {
        bail!(
            "failed to load mappings from {} (run with RUST_LOG=warn for details)",
            descriptor.display()
        );
    }

    if args.list {
        for entry in store.entries() {
            println!(
                "{} @ {} -> {}",
                entry.original_name,
                entry.read_offset,
                entry.mapped_name.as_deref().unwrap_or("<unresolved>")
            );
        }
    }

    for name in &args.names {
        println!("{} -> {}", name, store.resolve(name));
    }

    store.cleanup();
    Ok(())
}
