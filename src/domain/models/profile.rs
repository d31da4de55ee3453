//! User profile value types.
//!
//! `UserRecord` and `Post` mirror the raw upstream shapes; `UserProfile` is
//! the merged entity handed to callers. A profile is assembled exactly once,
//! at aggregation time, and is immutable afterwards.

use serde::{Deserialize, Serialize};

/// Identifier of an upstream user. Also the cache key.
pub type UserId = u64;

/// A single post authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier assigned by the upstream API.
    pub id: u64,

    /// Free-form post title.
    pub title: String,
}

/// Raw user resource as returned by the upstream `users/{id}` endpoint.
///
/// The upstream payload carries more fields (address, phone, company);
/// serde ignores anything not listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name.
    pub name: String,

    /// Login handle.
    pub username: String,

    /// Contact email.
    pub email: String,
}

/// A user merged with their posts.
///
/// Invariant: `posts` is always populated (possibly empty) - a partial
/// profile is never handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,

    /// Login handle.
    pub username: String,

    /// Contact email.
    pub email: String,

    /// Posts in upstream arrival order, never re-sorted.
    pub posts: Vec<Post>,
}

impl UserProfile {
    /// Merge a user record with their posts, preserving post order.
    #[must_use]
    pub fn assemble(user: UserRecord, posts: Vec<Post>) -> Self {
        Self {
            name: user.name,
            username: user.username,
            email: user.email,
            posts,
        }
    }
}
