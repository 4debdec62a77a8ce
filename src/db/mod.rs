//! Database module for the Relieve server
//!
//! This module holds the record types, the `Store` seam the handlers
//! talk to, and its Postgres implementation.

pub mod models;
pub mod operations;
pub mod store;

pub use models::{
    Comment, NewComment, NewPost, NewPsikolog, NewReport, NewUser, NewWisdomPoint, Post,
    Psikolog, PsikologPoint, Report, User, Validate, WisdomPoint, WisdomPointStatus,
};
pub use operations::DbOperations;
pub use store::Store;

#[cfg(test)]
pub use store::MockStore;
