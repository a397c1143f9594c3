//! Conversation thread grouping.
//!
//! Messages are stored flat; the console view groups them into one
//! thread per user in memory (eager load + index by `user_id`), with
//! threads ordered by their most recent message.

use std::collections::HashMap;

use crate::types::{DbId, Timestamp};

/// Read-only view of a message row needed for thread grouping.
pub trait ThreadMessage {
    fn user_id(&self) -> DbId;
    fn from_admin(&self) -> bool;
    fn read(&self) -> bool;
    fn created_at(&self) -> Timestamp;
}

/// One conversation: every message sharing a `user_id`.
#[derive(Debug)]
pub struct Thread<M> {
    pub user_id: DbId,
    /// Messages in the order they were supplied (callers fetch ascending
    /// by `created_at`, so this is chronological).
    pub messages: Vec<M>,
    /// Count of inbound (`from_admin = false`) unread messages.
    pub unread_count: usize,
}

impl<M: ThreadMessage> Thread<M> {
    /// Timestamp of the thread's most recent message.
    pub fn last_activity(&self) -> Option<Timestamp> {
        self.messages.iter().map(|m| m.created_at()).max()
    }
}

/// Group a flat message list into threads, sorted by last activity
/// descending (most recently active conversation first).
pub fn group_by_user<M: ThreadMessage>(messages: Vec<M>) -> Vec<Thread<M>> {
    let mut index: HashMap<DbId, Thread<M>> = HashMap::new();
    let mut order: Vec<DbId> = Vec::new();

    for msg in messages {
        let uid = msg.user_id();
        let thread = index.entry(uid).or_insert_with(|| {
            order.push(uid);
            Thread {
                user_id: uid,
                messages: Vec::new(),
                unread_count: 0,
            }
        });
        if !msg.from_admin() && !msg.read() {
            thread.unread_count += 1;
        }
        thread.messages.push(msg);
    }

    let mut threads: Vec<Thread<M>> = order
        .into_iter()
        .filter_map(|uid| index.remove(&uid))
        .collect();
    threads.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));
    threads
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct Msg {
        user_id: DbId,
        from_admin: bool,
        read: bool,
        created_at: Timestamp,
    }

    impl ThreadMessage for Msg {
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

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn msg(user_id: DbId, from_admin: bool, read: bool, secs: i64) -> Msg {
        Msg {
            user_id,
            from_admin,
            read,
            created_at: at(secs),
        }
    }

    #[test]
    fn groups_one_thread_per_user() {
        let threads = group_by_user(vec![msg(1, false, true, 10), msg(2, false, true, 20), msg(1, true, true, 30)]);
        assert_eq!(threads.len(), 2);
        let t1 = threads.iter().find(|t| t.user_id == 1).unwrap();
        assert_eq!(t1.messages.len(), 2);
    }

    #[test]
    fn unread_counts_only_inbound_unread() {
        let threads = group_by_user(vec![
            msg(1, false, false, 1), // inbound unread -> counts
            msg(1, false, true, 2),  // inbound read -> no
            msg(1, true, false, 3),  // outbound unread -> no
        ]);
        assert_eq!(threads[0].unread_count, 1);
    }

    #[test]
    fn threads_sorted_by_last_activity_desc() {
        let threads = group_by_user(vec![
            msg(1, false, true, 10),
            msg(2, false, true, 50),
            msg(1, true, true, 20),
        ]);
        assert_eq!(threads[0].user_id, 2);
        assert_eq!(threads[1].user_id, 1);
    }

    #[test]
    fn message_order_within_thread_is_preserved() {
        let threads = group_by_user(vec![msg(7, false, true, 1), msg(7, true, true, 2), msg(7, false, true, 3)]);
        let times: Vec<i64> = threads[0]
            .messages
            .iter()
            .map(|m| m.created_at().timestamp())
            .collect();
        assert_eq!(times, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_yields_no_threads() {
        let threads = group_by_user(Vec::<Msg>::new());
        assert!(threads.is_empty());
    }
}
