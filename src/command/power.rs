// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control command.

use crate::command::{Command, Verb};

/// Command to switch the main zone on or to standby.
///
/// # Examples
///
/// ```
/// use yamaha_remote::command::{Command, PowerCommand};
///
/// let cmd = PowerCommand::from(false);
/// assert_eq!(cmd, PowerCommand::Standby);
/// assert_eq!(
///     cmd.zone_fragment(),
///     "<Power_Control><Power>Standby</Power></Power_Control>"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    /// Power the zone up.
    On,
    /// Put the zone in standby.
    Standby,
}

impl PowerCommand {
    /// Returns the value written to `<Power>`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Standby => "Standby",
        }
    }
}

impl From<bool> for PowerCommand {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Standby }
    }
}

impl Command for PowerCommand {
    fn verb(&self) -> Verb {
        Verb::Put
    }

    fn zone_fragment(&self) -> String {
        format!(
            "<Power_Control><Power>{}</Power></Power_Control>",
            self.as_str()
        )
    }
}
