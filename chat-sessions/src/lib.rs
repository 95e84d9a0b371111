//! Session-scoped conversational state for the interactive chat mode.
//!
//! Each session pins the first message it receives as its *base question*
//! and accumulates the follow-up exchange as an ordered turn history. The
//! prompt sent to the generative model is shaped by turn position: the
//! opening turn asks for a short standalone explanation, every later turn
//! replays the base question and history as context.
//!
//! The store is process-wide and bounded; see [`store::SessionStore`] for
//! the locking and eviction rules.

pub mod prompt;
pub mod session;
pub mod store;

pub use session::{ChatSession, Turn};
pub use store::SessionStore;
