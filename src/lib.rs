//! GitHub source-control adapter for pipeline engines.
//!
//! Resolves layered SCM configuration into a validated [`scm::github::Github`]
//! adapter and resolves repository identity (including fork parent) through
//! the GitHub GraphQL API.

pub mod scm;
pub mod shared;
