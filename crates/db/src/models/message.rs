//! Message entity model and DTOs.
//!
//! Messages for one `user_id` form a conversation thread; grouping
//! happens in memory via `kreatif_core::threads`.

use kreatif_core::threads::ThreadMessage;
use kreatif_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A message row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub subject: Option<String>,
    pub content: String,
    pub from_admin: bool,
    pub read: bool,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// A message row joined with its owner's name and email.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MessageWithProfile {
    pub id: DbId,
    pub subject: Option<String>,
    pub content: String,
    pub from_admin: bool,
    pub read: bool,
    pub user_id: DbId,
    pub user_name: String,
    pub user_email: String,
    pub created_at: Timestamp,
}

/// DTO for appending a message to a thread.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessage {
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub content: String,
    pub from_admin: bool,
    pub user_id: DbId,
}

impl ThreadMessage for MessageWithProfile {
    fn user_id(&self) -> DbId {
        self.user_id
    }

    fn from_admin(&self) -> bool {
        self.from_admin
    }

    fn read(&self) -> bool {
        self.read
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
