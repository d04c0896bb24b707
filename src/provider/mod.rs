//! AI provider identification for prompt-studio.
//!
//! The proxy forwards requests to one of a closed set of vendors. This
//! module names them ([`ProviderKind`]), unwraps each vendor's response
//! envelope ([`envelope`]), resolves which provider/model pair to use
//! ([`resolve_model`]) and prints the model catalog ([`list_models`]).

pub mod envelope;
mod kind;
mod listing;
mod resolve;

pub use kind::ProviderKind;
pub use listing::list_models;
pub use resolve::resolve_model;
