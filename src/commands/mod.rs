mod common;
pub mod resolve;
pub mod schema;
pub mod show;

pub use common::ScmArgs;
