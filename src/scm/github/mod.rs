//! GitHub and GitHub Enterprise SCM.
//!
//! Turns a [`Spec`] into a ready [`Github`] adapter: settings are validated
//! and defaulted, a GraphQL client is bound to the public or enterprise
//! endpoint, and the working directory is prepared. The adapter then
//! resolves the repository identity on demand.

mod adapter;
mod client;
pub mod directory;
pub mod endpoint;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod repository;
mod spec;

pub use adapter::Github;
pub use client::{GraphQlClient, HttpGraphQlClient};
pub use endpoint::GraphQlEndpoint;
pub use error::GitHubError;
pub use repository::{Repository, resolve};
pub use spec::Spec;
