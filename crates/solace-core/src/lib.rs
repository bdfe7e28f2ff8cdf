//! Notification aggregation and streak computation.
//!
//! Everything in this crate is pure: callers fetch the events from the
//! content store and hand them over as plain values.

pub mod notifications;
pub mod streak;

pub use notifications::{
    CommentEvent, MessageEvent, NotificationItem, NotificationKind, NotificationLimits,
    Notifications, ReactionEvent, aggregate_notifications,
};
pub use streak::{ActivityRecord, compute_streak};
