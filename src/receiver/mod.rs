// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stateful receiver controller.
//!
//! [`Receiver`] owns the cached [`DeviceState`] of the main zone and is the
//! only place it is mutated. Each setter turns a property change into a
//! command, performs the round trip through its [`Transport`], and only then
//! updates the cache and notifies subscribers.
//!
//! # Power and mute
//!
//! [`set_power`](Receiver::set_power) and [`set_muted`](Receiver::set_muted)
//! await their round trip and return its error, if any.
//!
//! # Volume
//!
//! Volume is usually driven by a slider that fires many times per second.
//! [`set_volume`](Receiver::set_volume) therefore only records the requested
//! level in a single pending slot and schedules a flush on the tokio runtime.
//! Requests arriving before the flush runs overwrite the slot; only the most
//! recent level is sent.
//!
//! ```no_run
//! use yamaha_remote::Receiver;
//!
//! # async fn example() -> yamaha_remote::Result<()> {
//! let receiver = Receiver::http("192.168.1.158").build().await?;
//!
//! receiver.set_power(true).await?;
//!
//! // Only -30.0 dB goes out on the wire
//! receiver.set_volume(-25.0)?;
//! receiver.set_volume(-30.0)?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;

#[cfg(feature = "http")]
pub use http_builder::HttpReceiverBuilder;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::command::{MuteCommand, PowerCommand, StatusCommand, VolumeCommand};
use crate::error::{Error, TransportError};
use crate::protocol::Transport;
use crate::response::StatusSnapshot;
use crate::state::{DeviceState, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::types::Volume;

/// Controller keeping a local model of a receiver's main zone.
///
/// Cloning a `Receiver` is cheap and yields a handle to the same state,
/// subscriptions and transport.
///
/// # Type Parameter
///
/// `T` is the transport used for round trips, [`HttpTransport`] in
/// production.
///
/// [`HttpTransport`]: crate::protocol::HttpTransport
pub struct Receiver<T: Transport> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    transport: T,
    state: Mutex<DeviceState>,
    /// Latest requested level not yet taken by a flush.
    pending_volume: Mutex<Option<Volume>>,
    /// Set when a flush is requested, cleared when that flush starts.
    flush_scheduled: AtomicBool,
    /// Held for the duration of a flush or refresh; at most one volume write
    /// in flight, never overlapping a status read.
    flush_lock: tokio::sync::Mutex<()>,
    flush_delay: Duration,
    runtime: Option<Handle>,
    callbacks: CallbackRegistry,
}

impl<T: Transport> Receiver<T> {
    /// Creates a controller with the startup defaults and no debounce delay.
    ///
    /// The volume flush runs on the runtime current at construction, or
    /// the one current when [`set_volume`](Self::set_volume) is called.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_flush_delay(transport, Duration::ZERO)
    }

    /// Creates a controller that waits `delay` before each volume flush.
    ///
    /// A delay widens the window in which slider ticks are coalesced; with
    /// `Duration::ZERO` the flush runs on the next scheduling turn.
    #[must_use]
    pub fn with_flush_delay(transport: T, delay: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                state: Mutex::new(DeviceState::new()),
                pending_volume: Mutex::new(None),
                flush_scheduled: AtomicBool::new(false),
                flush_lock: tokio::sync::Mutex::new(()),
                flush_delay: delay,
                runtime: Handle::try_current().ok(),
                callbacks: CallbackRegistry::new(),
            }),
        }
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Returns the debounce delay applied before each volume flush.
    #[must_use]
    pub fn flush_delay(&self) -> Duration {
        self.inner.flush_delay
    }

    /// Returns a snapshot of the cached state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        *self.inner.state.lock()
    }

    /// Returns the cached power flag.
    #[must_use]
    pub fn power(&self) -> bool {
        self.inner.state.lock().power()
    }

    /// Returns the cached level.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.inner.state.lock().volume()
    }

    /// Returns the cached mute flag.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.inner.state.lock().is_muted()
    }

    // ========== Power ==========

    /// Switches the zone on or to standby.
    ///
    /// Does nothing if the cached state already matches.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails; cached state is unchanged.
    pub async fn set_power(&self, on: bool) -> Result<(), Error> {
        let current = self.inner.state.lock().power();
        if current == on {
            return Ok(());
        }
        self.inner
            .transport
            .send_command(&PowerCommand::from(on))
            .await?;
        self.inner.commit(StateChange::Power(on));
        Ok(())
    }

    /// Flips the cached power flag.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn toggle_power(&self) -> Result<(), Error> {
        let on = self.power();
        self.set_power(!on).await
    }

    // ========== Mute ==========

    /// Mutes or unmutes the zone.
    ///
    /// Does nothing if the cached state already matches.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails; cached state is unchanged.
    pub async fn set_muted(&self, muted: bool) -> Result<(), Error> {
        let current = self.inner.state.lock().is_muted();
        if current == muted {
            return Ok(());
        }
        self.inner
            .transport
            .send_command(&MuteCommand::from(muted))
            .await?;
        self.inner.commit(StateChange::Muted(muted));
        Ok(())
    }

    /// Flips the cached mute flag.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn toggle_mute(&self) -> Result<(), Error> {
        let muted = self.is_muted();
        self.set_muted(!muted).await
    }

    // ========== Volume ==========

    /// Requests a new level in decibels.
    ///
    /// The level is quantized to 0.5 dB and recorded as the pending level;
    /// a flush is scheduled on the tokio runtime. Nothing is sent before
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` if the level is not finite or out of range.
    pub fn set_volume(&self, level: f64) -> Result<(), Error> {
        self.enqueue_volume(Volume::new(level)?);
        Ok(())
    }

    /// Requests a new level, like [`set_volume`](Self::set_volume).
    ///
    /// The level is quantized to 0.5 dB, so a value built with
    /// [`Volume::from_tenths`] or read from the receiver is accepted as long
    /// as it lies within range.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` if the level is out of range.
    pub fn request_volume(&self, volume: Volume) -> Result<(), Error> {
        self.enqueue_volume(Volume::new(volume.db())?);
        Ok(())
    }

    /// Records `volume` as the pending level and schedules a flush.
    ///
    /// If the level equals the cached one while no flush or refresh is
    /// running, any pending request is dropped and nothing is scheduled.
    fn enqueue_volume(&self, volume: Volume) {
        // Held until the pending slot is updated so that no flush or
        // refresh can change the cached level in between.
        let idle = self.inner.flush_lock.try_lock();
        let current = self.inner.state.lock().volume();

        {
            let mut pending = self.inner.pending_volume.lock();
            if volume == current && idle.is_ok() {
                if pending.take().is_some() {
                    tracing::trace!(%volume, "Volume back at cached level, dropped pending request");
                }
                return;
            }
            if let Some(previous) = pending.replace(volume) {
                tracing::trace!(%previous, %volume, "Superseded pending volume request");
            }
        }
        drop(idle);

        self.schedule_flush();
    }

    /// Sends the pending level now, on the caller's task.
    ///
    /// Returns the level that was written, or `None` if nothing was pending
    /// or the pending level already matched the cached one.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails; cached state is unchanged and
    /// the request is not retried.
    pub async fn flush_volume(&self) -> Result<Option<Volume>, Error> {
        self.inner
            .flush()
            .await
            .map_err(|(_, error)| Error::Transport(error))
    }

    fn schedule_flush(&self) {
        if self.inner.flush_scheduled.swap(true, Ordering::AcqRel) {
            return;
        }

        let handle = Handle::try_current()
            .ok()
            .or_else(|| self.inner.runtime.clone());

        match handle {
            Some(handle) => {
                // A runtime that has shut down drops the task unpolled; the
                // guard then clears the flag and the request stays pending.
                let scheduled = ScheduledFlush::new(Arc::clone(&self.inner));
                handle.spawn(scheduled.run());
            }
            None => {
                // Leave the request pending for an explicit flush_volume().
                self.inner.flush_scheduled.store(false, Ordering::Release);
                tracing::warn!("No tokio runtime available, volume flush not scheduled");
            }
        }
    }

    // ========== Refresh ==========

    /// Reads the zone status and reconciles the cache against it.
    ///
    /// Every field that differs is updated and notified independently. This
    /// is how changes made by other clients (a remote, the front panel) are
    /// discovered; the controller never schedules it on its own. A volume
    /// write in flight completes before the status is read.
    ///
    /// Returns the changes that were applied.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails or the reply lacks a field;
    /// cached state is unchanged.
    pub async fn refresh(&self) -> Result<Vec<StateChange>, Error> {
        // Serialized with volume writes so a status read never lands on top
        // of a level confirmed after it was taken.
        let flushing = self.inner.flush_lock.lock().await;
        let response = self
            .inner
            .transport
            .send_command(&StatusCommand::basic())
            .await?;
        let status = StatusSnapshot::from_response(&response)?;

        let changes = self.inner.state.lock().reconcile(&status);
        drop(flushing);

        tracing::debug!(?status, changed = changes.len(), "Refreshed receiver status");

        for change in &changes {
            self.inner.callbacks.dispatch(change);
        }
        Ok(changes)
    }
}

impl<T: Transport> Inner<T> {
    /// Applies a confirmed change and notifies subscribers if it changed
    /// anything. Callbacks run after the state lock is released.
    fn commit(&self, change: StateChange) -> bool {
        let changed = self.state.lock().apply(&change);
        if changed {
            tracing::debug!(%change, "Receiver state changed");
            self.callbacks.dispatch(&change);
        }
        changed
    }

    async fn flush(&self) -> Result<Option<Volume>, (Volume, TransportError)> {
        let _flushing = self.flush_lock.lock().await;

        let Some(volume) = self.pending_volume.lock().take() else {
            return Ok(None);
        };
        let current = self.state.lock().volume();
        if volume == current {
            return Ok(None);
        }

        tracing::debug!(%volume, "Flushing volume");

        self.transport
            .send_command(&VolumeCommand::new(volume))
            .await
            .map_err(|error| (volume, error))?;

        // A refresh may have landed the same level while the write was in
        // flight; commit only notifies if the cache still differs.
        self.commit(StateChange::Volume(volume));
        Ok(Some(volume))
    }
}

/// A spawned volume flush that owns the "scheduled" flag until it starts.
///
/// Dropping it before [`run`](Self::run) reaches the flush clears the flag,
/// so a task lost to runtime shutdown never blocks later requests.
struct ScheduledFlush<T: Transport> {
    inner: Arc<Inner<T>>,
    armed: bool,
}

impl<T: Transport> ScheduledFlush<T> {
    fn new(inner: Arc<Inner<T>>) -> Self {
        Self { inner, armed: true }
    }

    async fn run(mut self) {
        if !self.inner.flush_delay.is_zero() {
            tokio::time::sleep(self.inner.flush_delay).await;
        }
        self.armed = false;
        self.inner.flush_scheduled.store(false, Ordering::Release);

        if let Err((volume, error)) = self.inner.flush().await {
            tracing::warn!(%volume, error = %error, "Volume flush failed");
            self.inner.callbacks.dispatch_flush_failed(volume, &error);
        }
    }
}

impl<T: Transport> Drop for ScheduledFlush<T> {
    fn drop(&mut self) {
        if self.armed {
            self.inner.flush_scheduled.store(false, Ordering::Release);
            tracing::warn!("Scheduled volume flush dropped before running, request left pending");
        }
    }
}

impl<T: Transport> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> std::fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Receiver")
            .field("state", &self.state())
            .field("pending_volume", &*self.inner.pending_volume.lock())
            .field("flush_delay", &self.inner.flush_delay)
            .field("callbacks", &self.inner.callbacks)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Subscribable for Receiver<T> {
    fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_power_changed(callback)
    }

    fn on_volume_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Volume) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_volume_changed(callback)
    }

    fn on_muted_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_muted_changed(callback)
    }

    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_state_changed(callback)
    }

    fn on_volume_flush_failed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Volume, &TransportError) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_volume_flush_failed(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.callbacks.unsubscribe(id)
    }
}
