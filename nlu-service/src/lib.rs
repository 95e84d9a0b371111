//! Intent resolution boundary: classifies free text into an intent name and
//! extracted parameters via a Dialogflow-style `detectIntent` REST call.
//!
//! The resolver is optional at runtime: when its environment variables are
//! absent the application runs without one and chat falls back to a fixed
//! connection-error reply.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::NluConfig;
pub use error_handler::NluError;
pub use services::dialogflow_service::{DialogflowService, IntentResult};
