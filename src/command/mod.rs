// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! YNC command definitions.
//!
//! This module provides typed representations of the commands understood by
//! the receiver's `/YamahaRemoteControl/ctrl` endpoint.
//!
//! # Available Commands
//!
//! | Command Type | Verb | Purpose |
//! |-------------|------|---------|
//! | [`PowerCommand`] | `PUT` | Switch between On and Standby |
//! | [`VolumeCommand`] | `PUT` | Set the main zone level in dB |
//! | [`MuteCommand`] | `PUT` | Mute or unmute the main zone |
//! | [`StatusCommand`] | `GET` | Read power, volume and mute in one go |
//!
//! # Command Structure
//!
//! Every command is a fragment nested under `<Main_Zone>`, wrapped in a
//! `<YAMAHA_AV cmd="VERB">` envelope:
//!
//! ```
//! use yamaha_remote::command::{Command, MuteCommand};
//!
//! let cmd = MuteCommand::On;
//! assert_eq!(cmd.body(), "<Main_Zone><Volume><Mute>On</Mute></Volume></Main_Zone>");
//! assert_eq!(
//!     cmd.to_xml(),
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?><YAMAHA_AV cmd=\"PUT\">\
//!      <Main_Zone><Volume><Mute>On</Mute></Volume></Main_Zone></YAMAHA_AV>"
//! );
//! ```

mod power;
mod status;
mod volume;

pub use power::PowerCommand;
pub use status::StatusCommand;
pub use volume::{MuteCommand, VolumeCommand};

use std::fmt;

/// Element name of the zone every command is addressed to.
pub const MAIN_ZONE: &str = "Main_Zone";

/// Request verb carried in the envelope's `cmd` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Read parameters.
    Get,
    /// Write parameters.
    Put,
}

impl Verb {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command that can be sent to the receiver.
pub trait Command {
    /// Returns whether the command reads or writes.
    fn verb(&self) -> Verb;

    /// Returns the fragment placed inside the `<Main_Zone>` element.
    fn zone_fragment(&self) -> String;

    /// Returns the command body addressed to the main zone.
    fn body(&self) -> String {
        format!("<{MAIN_ZONE}>{}</{MAIN_ZONE}>", self.zone_fragment())
    }

    /// Returns the full request document.
    fn to_xml(&self) -> String {
        envelope(self.verb(), &self.body())
    }
}

/// Wraps a command body in the `YAMAHA_AV` request envelope.
#[must_use]
pub fn envelope(verb: Verb, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?><YAMAHA_AV cmd=\"{verb}\">{body}</YAMAHA_AV>"
    )
}
