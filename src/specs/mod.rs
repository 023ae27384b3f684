// src/specs/mod.rs
//! Page-specific parsing specs.
//!
//! Each spec encodes where the ground truth lives in a remote page's HTML
//! and how to extract it tolerantly (case-insensitive tag matching, local
//! scanning within known blocks, whitespace/entity normalization). Specs
//! only extract; fetching policy, caching and export live in higher layers
//! (`api`, `store`, `file`).

pub mod folder;
