// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A [`StateChange`] is emitted once per field whose cached value actually
//! changed, whether from a confirmed write or from a refresh.

use std::fmt;

use crate::types::Volume;

/// A confirmed change to one tracked property.
///
/// # Examples
///
/// ```
/// use yamaha_remote::state::{EventKind, StateChange};
///
/// let change = StateChange::Power(false);
/// assert_eq!(change.kind(), EventKind::Power);
/// assert_eq!(change.kind().name(), "power-changed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// Power switched; `true` is on, `false` standby.
    Power(bool),

    /// Main zone level changed.
    Volume(Volume),

    /// Mute switched.
    Muted(bool),
}

impl StateChange {
    /// Returns which event this change is delivered as.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Power(_) => EventKind::Power,
            Self::Volume(_) => EventKind::Volume,
            Self::Muted(_) => EventKind::Muted,
        }
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(on) => write!(f, "{}: {}", self.kind(), if *on { "on" } else { "standby" }),
            Self::Volume(volume) => write!(f, "{}: {volume}", self.kind()),
            Self::Muted(muted) => write!(f, "{}: {muted}", self.kind()),
        }
    }
}

/// Kind of change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `power-changed`
    Power,
    /// `volume-changed`
    Volume,
    /// `muted-changed`
    Muted,
}

impl EventKind {
    /// Returns the event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Power => "power-changed",
            Self::Volume => "volume-changed",
            Self::Muted => "muted-changed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
