//! Subscriptions to state store changes.
//!
//! Every dispatch that replaces a section is broadcast to subscribers whose
//! filter includes that section. Buffers are bounded: a subscriber that
//! stops draining its channel is dropped rather than blocking dispatch.
//!
//! # Example
//!
//! ```ignore
//! let handle = store.subscribe(SubscriptionConfig {
//!     filter: SubscriptionFilter::sections(vec![Section::Settings]),
//!     ..Default::default()
//! });
//!
//! while let Ok(event) = handle.recv() {
//!     match event {
//!         StateEvent::SectionReplaced { revision, .. } => println!("settings at {:?}", revision),
//!         StateEvent::Dropped { .. } => break,
//!     }
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    DropReason, StateEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId,
};
