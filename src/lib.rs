//! # symmap - Obfuscated Symbol Name Mapper
//!
//! symmap resolves well-known symbol names (e.g. `il2cpp_init`) to the
//! obfuscated names an export table actually carries. The indirection lives
//! in two artifacts produced by offline analysis tooling:
//!
//! - a **descriptor file** (`mapper.txt`): comma-separated text lines
//!   pairing each well-known name with a byte offset;
//! - a **binary image** (`UnityPlayer.dll`): the companion binary holding
//!   the obfuscated names as NUL-terminated strings at those offsets.
//!
//! The indirection is loaded once into an in-memory table and answers
//! repeated name-resolution queries for the life of the process.
//!
//! ## Pipeline
//!
//! ```text
//! descriptor line ──▶ descriptor::parse_line ──▶ (name, offset)
//!                                                     │
//! binary image ─────▶ image::ImageReader ──▶ mapped name at offset
//!                                                     │
//!                                                     ▼
//!                                      table::EntryTable (append, shrink)
//!                                                     │
//!                                                     ▼
//!                      store::MapperStore::resolve(name) ──▶ &str
//! ```
//!
//! ## Module Structure
//!
//! - [`descriptor`]: one-line parser for the descriptor format
//! - [`image`]: seek-and-read of NUL-terminated strings at image offsets
//! - [`table`]: the owned resolution table (growth policy, first-match find)
//! - [`store`]: load-once / resolve / teardown lifecycle around the table
//! - [`cli`]: argument parsing for the inspection binary
//! - [`domain`]: core newtypes and structured errors
//!
//! ## Failure philosophy
//!
//! Nothing in this crate raises a hard failure to a resolving caller. A
//! missing artifact, a malformed descriptor line, or an unreadable string at
//! an offset degrades to fewer entries or to returning the queried name
//! unchanged (identity fallback), reported through `log` only. A host that
//! configured no mapping at all and a host whose mapping failed to load are
//! indistinguishable except in the logs.

pub mod cli;
pub mod descriptor;
pub mod domain;
pub mod image;
pub mod store;
pub mod table;
