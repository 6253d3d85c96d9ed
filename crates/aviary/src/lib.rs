//! Client SDK for the Aviary agent platform.
//!
//! The platform manages agents, conversations, tools, and knowledge bases
//! behind a uniform JSON envelope. This crate provides:
//!
//! - [`PlatformClient`]: the async REST client, one method per endpoint.
//! - [`ConversationSession`]: a stateful view over one conversation and the
//!   agent it is bound to (message log, model binding, model switching).
//! - [`catalog`]: static model catalog and provider routing for display.
//! - [`config`] / [`credentials`]: configuration and stored-login plumbing
//!   shared with the `aviaryctl` binary.
//!
//! The canonical data types live in [`aviary_protocol`], re-exported here
//! as [`protocol`].

pub mod catalog;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod session;

pub use client::PlatformClient;
pub use error::{ClientError, ClientResult};
pub use session::{ConversationApi, ConversationSession, FALLBACK_MODEL};

pub use aviary_protocol as protocol;
