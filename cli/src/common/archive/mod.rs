//! # sdvpack Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Archive output for `sdvpack pack`. Mods are distributed as `.zip` files, so
//! the only format is zip:
//!
//! - **`zip`**: Builds `<workspace>[_<version>].zip` from the filtered entries,
//!   committing the file only after it is completely written.
//!

pub mod zip;
