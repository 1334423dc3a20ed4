// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Receiver state management types.
//!
//! [`DeviceState`] is the controller's cached snapshot of the main zone;
//! [`StateChange`] describes a single confirmed change to one of its fields.
//!
//! # Examples
//!
//! ```
//! use yamaha_remote::state::{DeviceState, StateChange};
//!
//! let mut state = DeviceState::new();
//!
//! // Apply a mute change
//! assert!(state.apply(&StateChange::Muted(true)));
//! assert!(state.is_muted());
//! ```

mod device_state;
mod state_change;

pub use device_state::DeviceState;
pub use state_change::{EventKind, StateChange};
