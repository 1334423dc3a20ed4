// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for receiver control.
//!
//! Each type checks its range at construction time, so a command built
//! from it is always accepted by the receiver's codec.
//!
//! # Types
//!
//! - [`Volume`] - Main zone level in dB (-80.0 to +16.0, 0.5 dB steps)

mod volume;

pub use volume::Volume;
