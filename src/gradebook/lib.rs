//! # Gradebook Architecture
//!
//! Gradebook is an interactive, in-memory record manager for students and their grades.
//! An operator adds and removes students, adds and removes grades, and views a student's
//! grade-point average from a numbered text menu. Nothing is persisted.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses flags, loads config, installs logging             │
//! │  - Wires stdin/stdout into a Session                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Loop (session.rs, menu.rs)                         │
//! │  - Menu, prompts, argument splitting, rendering             │
//! │  - Generic over BufRead/Write, no direct stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates raw tokens and ratings                         │
//! │  - Applies config policies, dispatches to commands          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait, InMemoryStore                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Control Flow Without Restarts
//!
//! A failed command never restarts the loop from inside itself. Each step of the
//! [`session::Session`] returns a [`session::Flow`] and the loop decides whether to show
//! the menu again or stop. User-input errors are values of [`error::GradebookError`]
//! that the session prints; only I/O and config errors reach `main`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: `Student`, `Grade`, `Rating`
//! - [`validation`]: Token, rating and argument-line checks
//! - [`config`]: Behavior policies and their JSON loader
//! - [`menu`]: Top-level menu selections and prompts
//! - [`session`]: The interactive command loop
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod session;
pub mod store;
pub mod validation;
