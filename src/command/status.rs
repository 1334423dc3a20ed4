// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query command.

use crate::command::{Command, Verb};

/// Command reading the main zone's basic status.
///
/// The reply carries power, volume and mute; see
/// [`StatusSnapshot`](crate::response::StatusSnapshot).
///
/// # Examples
///
/// ```
/// use yamaha_remote::command::{Command, StatusCommand, Verb};
///
/// let cmd = StatusCommand::basic();
/// assert_eq!(cmd.verb(), Verb::Get);
/// assert_eq!(cmd.zone_fragment(), "<Basic_Status>GetParam</Basic_Status>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCommand;

impl StatusCommand {
    /// Creates the basic status query.
    #[must_use]
    pub const fn basic() -> Self {
        Self
    }
}

impl Command for StatusCommand {
    fn verb(&self) -> Verb {
        Verb::Get
    }

    fn zone_fragment(&self) -> String {
        "<Basic_Status>GetParam</Basic_Status>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_request_document() {
        assert_eq!(
            StatusCommand::basic().to_xml(),
            concat!(
                r#"<?xml version="1.0" encoding="utf-8"?><YAMAHA_AV cmd="GET">"#,
                "<Main_Zone><Basic_Status>GetParam</Basic_Status></Main_Zone></YAMAHA_AV>"
            )
        );
    }
}
