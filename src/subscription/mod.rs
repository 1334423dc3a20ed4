// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for receiver state changes.
//!
//! The subscription system consists of:
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Registry that stores callbacks per event kind and dispatches changes
//! - [`Subscribable`] - Trait for types that support event subscriptions
//!
//! Events are delivered synchronously when the cached state changes. There
//! is no buffering or replay: a late subscriber does not see earlier events.
//!
//! # Usage
//!
//! ```no_run
//! use yamaha_remote::Receiver;
//! use yamaha_remote::subscription::Subscribable;
//!
//! # async fn example() -> yamaha_remote::Result<()> {
//! let receiver = Receiver::http("192.168.1.158").build().await?;
//!
//! let sub_id = receiver.on_volume_changed(|volume| {
//!     println!("Volume is now {volume}");
//! });
//!
//! // Later, unsubscribe
//! receiver.unsubscribe(sub_id);
//! # Ok(())
//! # }
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
