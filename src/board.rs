// src/board.rs
//! In-memory view model behind the activity list.
//!
//! The board owns the last successfully fetched collection and everything the
//! list needs to render it: which remove controls are busy and whether the
//! last fetch failed. Successful mutations never touch the collection; they
//! bump `refresh_epoch`, and the app runs exactly one fetch per bump.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use yew::Reducible;

use crate::error::ApiError;
use crate::model::ActivityCollection;

pub const REMOVE_REJECTED: &str = "Failed to remove participant.";
pub const REMOVE_ERRORED: &str = "Error removing participant.";

/// Text for the blocking notification after a failed unregister.
pub fn remove_failure_notice(err: &ApiError) -> &'static str {
    if err.is_network() {
        REMOVE_ERRORED
    } else {
        REMOVE_REJECTED
    }
}

/// Identifies one remove control: activity name plus participant email.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RemoveKey {
    pub activity: String,
    pub participant: String,
}

impl RemoveKey {
    pub fn new(activity: impl Into<String>, participant: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            participant: participant.into(),
        }
    }
}

/// Sequence number handed to each list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct TicketCounter(u64);

impl TicketCounter {
    pub fn issue(&mut self) -> FetchTicket {
        self.0 += 1;
        FetchTicket(self.0)
    }

    /// Most recently issued ticket, without issuing a new one.
    pub fn last(&self) -> FetchTicket {
        FetchTicket(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
pub enum BoardAction {
    FetchSucceeded {
        ticket: FetchTicket,
        activities: ActivityCollection,
    },
    FetchFailed {
        ticket: FetchTicket,
    },
    RemoveStarted(RemoveKey),
    RemoveFailed(RemoveKey),
    /// `after` is the newest ticket issued when the success was handled. Only
    /// a fetch issued later can be trusted to leave the participant out.
    RemoveSucceeded {
        key: RemoveKey,
        after: FetchTicket,
    },
    SignupSucceeded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    view: ListView,
    activities: Rc<ActivityCollection>,
    applied: Option<FetchTicket>,
    // In flight.
    pending: BTreeSet<RemoveKey>,
    // Succeeded, waiting for a fetch newer than the ticket recorded here.
    settling: BTreeMap<RemoveKey, FetchTicket>,
    refresh_epoch: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            view: ListView::Loading,
            activities: Rc::new(ActivityCollection::default()),
            applied: None,
            pending: BTreeSet::new(),
            settling: BTreeMap::new(),
            refresh_epoch: 0,
        }
    }
}

impl Board {
    pub fn view(&self) -> ListView {
        self.view
    }

    /// Last successfully fetched collection. Stays around after a failed
    /// fetch so the signup form keeps its options.
    pub fn activities(&self) -> Rc<ActivityCollection> {
        Rc::clone(&self.activities)
    }

    pub fn refresh_epoch(&self) -> u64 {
        self.refresh_epoch
    }

    pub fn is_busy(&self, key: &RemoveKey) -> bool {
        self.pending.contains(key) || self.settling.contains_key(key)
    }

    fn is_stale(&self, ticket: FetchTicket) -> bool {
        self.applied.is_some_and(|applied| ticket < applied)
    }

    fn settle(&mut self, applied: FetchTicket) {
        self.settling.retain(|_, after| *after >= applied);
    }
}

impl Reducible for Board {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::FetchSucceeded { ticket, activities } => {
                if self.is_stale(ticket) {
                    return self;
                }
                next.applied = Some(ticket);
                next.view = ListView::Ready;
                next.activities = Rc::new(activities);
                next.settle(ticket);
            }
            BoardAction::FetchFailed { ticket } => {
                if self.is_stale(ticket) {
                    return self;
                }
                next.applied = Some(ticket);
                next.view = ListView::Failed;
                next.settle(ticket);
            }
            BoardAction::RemoveStarted(key) => {
                if self.is_busy(&key) {
                    return self;
                }
                next.pending.insert(key);
            }
            BoardAction::RemoveFailed(key) => {
                next.pending.remove(&key);
            }
            BoardAction::RemoveSucceeded { key, after } => {
                next.pending.remove(&key);
                next.settling.insert(key, after);
                next.refresh_epoch += 1;
            }
            BoardAction::SignupSucceeded => {
                next.refresh_epoch += 1;
            }
        }
        Rc::new(next)
    }
}
