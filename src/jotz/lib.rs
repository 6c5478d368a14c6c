//! # Jotz Architecture
//!
//! Jotz is a **UI-agnostic scratch-file library**. The bundled CLI is one
//! client of it, not the other way around: everything from the API facade
//! inward takes plain Rust arguments and returns plain Rust types.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, validates names, prints output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the tracked list                      │
//! │  - One method per user action, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The actual behavior, including eviction                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait over the two areas            │
//! │  - FsStore (production), MemoryStore (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Tracked List
//!
//! Alongside the store sits [`tracked::TrackedList`], a bounded record of
//! the names created through the API. When a create pushes it past capacity
//! the oldest entry is evicted and its file deleted from the area the entry
//! was created in, which is not necessarily the area of the create that
//! triggered it. Files written into existence without a create are never
//! tracked and never evicted.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. Commands report
//! through [`commands::CmdResult`]; rendering is the frontend's problem.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Behavior for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`tracked`]: The bounded list of created names
//! - [`model`]: Core data types (`Jot`, `Area`, `TrackedEntry`)
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod store;
pub mod tracked;
