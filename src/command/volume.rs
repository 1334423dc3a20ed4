// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume and mute commands.

use crate::command::{Command, Verb};
use crate::types::Volume;

/// Command to set the main zone level.
///
/// The level is encoded as an integer at one decimal place
/// (`Exp` is always 1), so -40.0 dB is sent as `Val=-400`.
///
/// # Examples
///
/// ```
/// use yamaha_remote::command::{Command, VolumeCommand};
/// use yamaha_remote::types::Volume;
///
/// let cmd = VolumeCommand::new(Volume::new(-40.0).unwrap());
/// assert_eq!(
///     cmd.zone_fragment(),
///     "<Volume><Lvl><Val>-400</Val><Exp>1</Exp><Unit>dB</Unit></Lvl></Volume>"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeCommand(Volume);

impl VolumeCommand {
    /// Creates a command setting the given level.
    #[must_use]
    pub const fn new(volume: Volume) -> Self {
        Self(volume)
    }

    /// Returns the level this command sets.
    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.0
    }
}

impl Command for VolumeCommand {
    fn verb(&self) -> Verb {
        Verb::Put
    }

    fn zone_fragment(&self) -> String {
        format!(
            "<Volume><Lvl><Val>{}</Val><Exp>1</Exp><Unit>dB</Unit></Lvl></Volume>",
            self.0.tenths()
        )
    }
}

/// Command to mute or unmute the main zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteCommand {
    /// Mute.
    On,
    /// Unmute.
    Off,
}

impl MuteCommand {
    /// Returns the value written to `<Mute>`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
        }
    }
}

impl From<bool> for MuteCommand {
    fn from(muted: bool) -> Self {
        if muted { Self::On } else { Self::Off }
    }
}

impl Command for MuteCommand {
    fn verb(&self) -> Verb {
        Verb::Put
    }

    fn zone_fragment(&self) -> String {
        format!("<Volume><Mute>{}</Mute></Volume>", self.as_str())
    }
}
