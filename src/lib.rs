//! LectureScribe - AI-powered lecture transcription CLI
//!
//! This crate provides the core functionality for uploading recorded lectures
//! and turning them into transcripts and summaries using Google Gemini.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases, the session (view state) controller, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, JSON-file library, config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
