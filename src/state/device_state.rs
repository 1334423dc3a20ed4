// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Receiver state tracking.

use crate::response::StatusSnapshot;
use crate::types::Volume;

use super::StateChange;

/// Cached state of the receiver's main zone.
///
/// Fields only ever hold values confirmed by the receiver, either through a
/// successful write or a status read. A fresh state assumes the zone is on,
/// at 0.0 dB and unmuted until the first refresh says otherwise.
///
/// # Examples
///
/// ```
/// use yamaha_remote::state::DeviceState;
/// use yamaha_remote::types::Volume;
///
/// let mut state = DeviceState::new();
/// assert!(state.power());
/// assert_eq!(state.volume(), Volume::ZERO);
///
/// state.set_volume(Volume::new(-35.0).unwrap());
/// assert_eq!(state.volume().db(), -35.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    power: bool,
    volume: Volume,
    muted: bool,
}

impl DeviceState {
    /// Creates a state with the startup defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            power: true,
            volume: Volume::ZERO,
            muted: false,
        }
    }

    /// Returns `true` when the zone is on, `false` in standby.
    #[must_use]
    pub fn power(&self) -> bool {
        self.power
    }

    /// Sets the power flag.
    pub fn set_power(&mut self, on: bool) {
        self.power = on;
    }

    /// Returns the current level.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Sets the level.
    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }

    /// Returns `true` when muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Sets the mute flag.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Applies a change, returning `true` if the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match *change {
            StateChange::Power(on) => replace_if_different(&mut self.power, on),
            StateChange::Volume(volume) => replace_if_different(&mut self.volume, volume),
            StateChange::Muted(muted) => replace_if_different(&mut self.muted, muted),
        }
    }

    /// Reconciles against a status read.
    ///
    /// Each field is compared independently; the returned changes, in
    /// volume, mute, power order, are exactly the ones that were applied.
    pub fn reconcile(&mut self, status: &StatusSnapshot) -> Vec<StateChange> {
        [
            StateChange::Volume(status.volume),
            StateChange::Muted(status.muted),
            StateChange::Power(status.power),
        ]
        .into_iter()
        .filter(|change| self.apply(change))
        .collect()
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

fn replace_if_different<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = DeviceState::default();
        assert!(state.power());
        assert_eq!(state.volume(), Volume::ZERO);
        assert!(!state.is_muted());
    }

    #[test]
    fn apply_reports_changes() {
        let mut state = DeviceState::new();
        assert!(state.apply(&StateChange::Power(false)));
        assert!(!state.apply(&StateChange::Power(false)));
        assert!(!state.power());

        let vol = Volume::from_tenths(-205);
        assert!(state.apply(&StateChange::Volume(vol)));
        assert!(!state.apply(&StateChange::Volume(vol)));
        assert_eq!(state.volume(), vol);
    }

    #[test]
    fn reconcile_reports_every_differing_field() {
        let mut state = DeviceState::new();
        state.set_power(false);
        state.set_volume(Volume::from_tenths(-100));

        let changes = state.reconcile(&StatusSnapshot {
            power: true,
            volume: Volume::from_tenths(-300),
            muted: true,
        });

        assert_eq!(
            changes,
            vec![
                StateChange::Volume(Volume::from_tenths(-300)),
                StateChange::Muted(true),
                StateChange::Power(true),
            ]
        );
        assert!(state.power());
        assert!(state.is_muted());
        assert_eq!(state.volume().db(), -30.0);
    }

    #[test]
    fn reconcile_identical_status_is_silent() {
        let mut state = DeviceState::new();
        let changes = state.reconcile(&StatusSnapshot {
            power: true,
            volume: Volume::ZERO,
            muted: false,
        });
        assert!(changes.is_empty());
    }
}
