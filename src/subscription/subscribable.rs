// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that emit state change events.

use crate::error::TransportError;
use crate::state::StateChange;
use crate::subscription::SubscriptionId;
use crate::types::Volume;

/// Trait for types that support event subscriptions.
///
/// Each callback receives the new value of the property that changed.
/// Changes are reported once per field that actually changed, whether the
/// change was requested locally or discovered by a refresh.
pub trait Subscribable {
    /// Subscribes to `power-changed`.
    ///
    /// The callback receives `true` for on and `false` for standby.
    fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static;

    /// Subscribes to `volume-changed`.
    fn on_volume_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Volume) + Send + Sync + 'static;

    /// Subscribes to `muted-changed`.
    fn on_muted_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static;

    /// Subscribes to all state changes.
    ///
    /// This is useful for logging or when you need to react to any change.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static;

    /// Subscribes to failures of the background volume flush.
    ///
    /// The callback receives the level that could not be applied and the
    /// transport error. Cached state is unchanged when this fires.
    fn on_volume_flush_failed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Volume, &TransportError) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
