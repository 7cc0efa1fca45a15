//! In-flight de-duplication for identity resolution.
//!
//! At most one `/auth/me` request may be outstanding at a time. The first
//! caller to `begin` becomes the owner and runs the fetch; every caller that
//! arrives while it is pending parks on a oneshot channel and receives the
//! same outcome when the owner calls `complete`. A `RefCell` suffices
//! because all callers share the single-threaded browser executor and no
//! borrow is held across an await.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::cell::RefCell;

use futures::channel::oneshot;

use crate::net::http::ApiError;
use crate::net::types::UserProfile;

/// Outcome of one identity resolution, shared by every waiter.
pub type Resolution = Result<UserProfile, ApiError>;

/// What a caller got from [`IdentityResolver::begin`].
pub enum Join {
    /// No fetch was pending; the caller must run it and call `complete`.
    Owner,
    /// A fetch is pending; await the shared outcome.
    Waiter(oneshot::Receiver<Resolution>),
}

/// Shared pending-result slot for the identity fetch.
#[derive(Default)]
pub struct IdentityResolver {
    waiters: RefCell<Option<Vec<oneshot::Sender<Resolution>>>>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an identity fetch is currently outstanding.
    pub fn in_flight(&self) -> bool {
        self.waiters.borrow().is_some()
    }

    /// Join the pending fetch, or claim ownership of a new one.
    pub fn begin(&self) -> Join {
        let mut slot = self.waiters.borrow_mut();
        match slot.as_mut() {
            Some(waiters) => {
                let (tx, rx) = oneshot::channel();
                waiters.push(tx);
                Join::Waiter(rx)
            }
            None => {
                *slot = Some(Vec::new());
                Join::Owner
            }
        }
    }

    /// Publish the outcome to every waiter and release the slot. Only the
    /// owner returned by [`Self::begin`] may call this.
    pub fn complete(&self, outcome: &Resolution) {
        let waiters = self.waiters.borrow_mut().take().unwrap_or_default();
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }
    }
}

/// Outcome for a waiter whose owning fetch was dropped mid-flight: fail
/// closed rather than report authenticated.
pub fn cancelled() -> Resolution {
    Err(ApiError::Network("identity fetch was cancelled".to_owned()))
}
