//! # caption-pipeline
//!
//! Social media caption generation backed by Google Gemini.
//!
//! A topic and a tone go in; three short captions (and optionally a set of
//! hashtags) come out. The crate covers the whole request path plus the small
//! bits of UI state that sit around it.
//!
//! ## Features
//!
//! - **Typed styles** — six caption tones as a closed enum
//! - **Structured output** — every call declares a JSON response schema
//! - **Forgiving parsing** — malformed or partial replies degrade to empty
//!   lists instead of errors
//! - **Friendly errors** — provider failures show a fixed message; the
//!   diagnostic goes to `tracing`
//! - **Request orchestration** — validation, loading, success and failure
//!   states with a watchable state channel
//! - **Theme persistence and clipboard copy** for presentation layers
//!
//! ## Quick Start
//!
//! ```no_run
//! use caption_pipeline::{CaptionStyle, GeminiClient, GeminiConfig, Orchestrator, Outcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = GeminiClient::new(GeminiConfig::from_env());
//!     let mut generator = Orchestrator::new(client);
//!
//!     generator.set_topic("beach sunset");
//!     generator.set_style(CaptionStyle::Punny);
//!     generator.set_include_hashtags(true);
//!
//!     match generator.submit().await {
//!         Outcome::Success(result) => {
//!             for caption in &result.captions {
//!                 println!("{}", caption);
//!             }
//!             println!("{}", result.hashtag_line());
//!         }
//!         Outcome::Failure(message) => eprintln!("{}", message),
//!     }
//! }
//! ```

pub mod app;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod pipeline;
pub mod prompt;
pub mod settings;
pub mod style;
pub mod types;

pub use app::{App, Screen};
pub use client::{CaptionModel, GeminiClient};
pub use clipboard::{ClipboardWriter, Copier, SystemClipboard};
pub use config::GeminiConfig;
pub use error::{ClipboardError, GenerationError, Result, SettingsError};
pub use normalize::normalize;
pub use orchestrator::{Orchestrator, RequestState};
pub use pipeline::generate_captions;
pub use prompt::{Prompt, ResponseSchema};
pub use settings::{SettingsStore, ThemeMode, ThemeSettings};
pub use style::{CaptionStyle, Language};
pub use types::{GenerationRequest, GenerationResult, Outcome};
