// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for receiver state subscriptions.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry storing callbacks per event kind and
//!   dispatching changes to them

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::error::TransportError;
use crate::state::StateChange;
use crate::types::Volume;

/// Unique identifier for a subscription.
///
/// IDs increase monotonically within a registry, so ordering by ID is
/// ordering by registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type SwitchCallback = Arc<dyn Fn(bool) + Send + Sync>;
type VolumeCallback = Arc<dyn Fn(Volume) + Send + Sync>;
type StateChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;
type FlushFailedCallback = Arc<dyn Fn(Volume, &TransportError) + Send + Sync>;

type Slot<C> = RwLock<BTreeMap<SubscriptionId, C>>;

/// Registry for managing receiver subscription callbacks.
///
/// Callbacks are invoked synchronously, in registration order, on the
/// thread that applied the change. The registry lock is released before any
/// callback runs, so a callback may subscribe, unsubscribe or call back into
/// the receiver.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    power_callbacks: Slot<SwitchCallback>,
    volume_callbacks: Slot<VolumeCallback>,
    muted_callbacks: Slot<SwitchCallback>,
    /// Receives every change, before the kind-specific callbacks.
    state_changed_callbacks: Slot<StateChangedCallback>,
    flush_failed_callbacks: Slot<FlushFailedCallback>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            power_callbacks: RwLock::new(BTreeMap::new()),
            volume_callbacks: RwLock::new(BTreeMap::new()),
            muted_callbacks: RwLock::new(BTreeMap::new()),
            state_changed_callbacks: RwLock::new(BTreeMap::new()),
            flush_failed_callbacks: RwLock::new(BTreeMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn insert<C>(&self, slot: &Slot<C>, callback: C) -> SubscriptionId {
        let id = self.next_id();
        slot.write().insert(id, callback);
        id
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for `power-changed`.
    pub fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let callback: SwitchCallback = Arc::new(callback);
        self.insert(&self.power_callbacks, callback)
    }

    /// Registers a callback for `volume-changed`.
    pub fn on_volume_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Volume) + Send + Sync + 'static,
    {
        let callback: VolumeCallback = Arc::new(callback);
        self.insert(&self.volume_callbacks, callback)
    }

    /// Registers a callback for `muted-changed`.
    pub fn on_muted_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let callback: SwitchCallback = Arc::new(callback);
        self.insert(&self.muted_callbacks, callback)
    }

    /// Registers a callback for all state changes.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let callback: StateChangedCallback = Arc::new(callback);
        self.insert(&self.state_changed_callbacks, callback)
    }

    /// Registers a callback for failed background volume flushes.
    pub fn on_volume_flush_failed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Volume, &TransportError) + Send + Sync + 'static,
    {
        let callback: FlushFailedCallback = Arc::new(callback);
        self.insert(&self.flush_failed_callbacks, callback)
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.power_callbacks.write().remove(&id).is_some()
            || self.volume_callbacks.write().remove(&id).is_some()
            || self.muted_callbacks.write().remove(&id).is_some()
            || self.state_changed_callbacks.write().remove(&id).is_some()
            || self.flush_failed_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.power_callbacks.write().clear();
        self.volume_callbacks.write().clear();
        self.muted_callbacks.write().clear();
        self.state_changed_callbacks.write().clear();
        self.flush_failed_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a state change to the generic and the matching callbacks.
    pub fn dispatch(&self, change: &StateChange) {
        for callback in snapshot(&self.state_changed_callbacks) {
            callback(change);
        }

        match *change {
            StateChange::Power(on) => {
                for callback in snapshot(&self.power_callbacks) {
                    callback(on);
                }
            }
            StateChange::Volume(volume) => {
                for callback in snapshot(&self.volume_callbacks) {
                    callback(volume);
                }
            }
            StateChange::Muted(muted) => {
                for callback in snapshot(&self.muted_callbacks) {
                    callback(muted);
                }
            }
        }
    }

    /// Dispatches a failed volume flush.
    pub fn dispatch_flush_failed(&self, volume: Volume, error: &TransportError) {
        for callback in snapshot(&self.flush_failed_callbacks) {
            callback(volume, error);
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.power_callbacks.read().len()
            + self.volume_callbacks.read().len()
            + self.muted_callbacks.read().len()
            + self.state_changed_callbacks.read().len()
            + self.flush_failed_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

/// Clones the callbacks out so none run under the registry lock.
fn snapshot<C: Clone>(slot: &Slot<C>) -> Vec<C> {
    slot.read().values().cloned().collect()
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn subscription_id_display() {
        let id = SubscriptionId::new(42);
        assert_eq!(id.to_string(), "Sub(42)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn registry_power_callback() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let id = registry.on_power_changed(move |_on| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(registry.callback_count(), 1);

        registry.dispatch(&StateChange::Power(false));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        assert!(registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.dispatch(&StateChange::Power(true));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_volume_callback_receives_value() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(Mutex::new(None::<Volume>));
        let received_clone = received.clone();

        registry.on_volume_changed(move |volume| {
            *received_clone.lock() = Some(volume);
        });

        registry.dispatch(&StateChange::Volume(Volume::from_tenths(-300)));
        assert_eq!(*received.lock(), Some(Volume::from_tenths(-300)));
    }

    #[test]
    fn registry_only_matching_kind_is_called() {
        let registry = CallbackRegistry::new();
        let muted_calls = Arc::new(AtomicU32::new(0));
        let muted_clone = muted_calls.clone();

        registry.on_muted_changed(move |_| {
            muted_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::Power(false));
        registry.dispatch(&StateChange::Volume(Volume::ZERO));
        assert_eq!(muted_calls.load(Ordering::SeqCst), 0);

        registry.dispatch(&StateChange::Muted(true));
        assert_eq!(muted_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_state_changed_callback() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        registry.on_state_changed(move |_change| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::Power(true));
        registry.dispatch(&StateChange::Volume(Volume::ZERO));
        registry.dispatch(&StateChange::Muted(false));

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn registry_calls_in_registration_order() {
        let registry = CallbackRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in 0..5 {
            let order = order.clone();
            registry.on_power_changed(move |_| order.lock().push(tag));
        }

        registry.dispatch(&StateChange::Power(false));
        assert_eq!(*order.lock(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn registry_callback_may_unsubscribe_itself() {
        let registry = Arc::new(CallbackRegistry::new());
        let id_slot = Arc::new(Mutex::new(None::<SubscriptionId>));

        let registry_clone = registry.clone();
        let id_clone = id_slot.clone();
        let id = registry.on_muted_changed(move |_| {
            if let Some(id) = *id_clone.lock() {
                registry_clone.unsubscribe(id);
            }
        });
        *id_slot.lock() = Some(id);

        registry.dispatch(&StateChange::Muted(true));
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_flush_failed_callback() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(Mutex::new(None));
        let received_clone = received.clone();

        registry.on_volume_flush_failed(move |volume, error| {
            *received_clone.lock() = Some((volume, error.to_string()));
        });

        registry.dispatch_flush_failed(Volume::from_tenths(-120), &TransportError::Status(503));
        assert_eq!(
            *received.lock(),
            Some((Volume::from_tenths(-120), "unexpected HTTP status 503".to_string()))
        );
    }

    #[test]
    fn registry_unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn registry_clear() {
        let registry = CallbackRegistry::new();

        registry.on_power_changed(|_| {});
        registry.on_volume_changed(|_| {});
        registry.on_state_changed(|_| {});

        assert_eq!(registry.callback_count(), 3);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_unique_ids() {
        let registry = CallbackRegistry::new();

        let id1 = registry.on_power_changed(|_| {});
        let id2 = registry.on_volume_changed(|_| {});
        let id3 = registry.on_muted_changed(|_| {});

        assert!(id1 < id2);
        assert!(id2 < id3);
    }

    #[test]
    fn registry_debug() {
        let registry = CallbackRegistry::new();
        registry.on_power_changed(|_| {});

        let debug = format!("{registry:?}");
        assert!(debug.contains("CallbackRegistry"));
        assert!(debug.contains("callback_count"));
    }
}
