// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Basic status response parsing.

use xmltree::Element;

use crate::error::TransportError;
use crate::response::{CommandResponse, text_at};
use crate::types::Volume;

/// Tracked properties read back from a basic status reply.
///
/// # Examples
///
/// ```
/// use yamaha_remote::response::{CommandResponse, StatusSnapshot};
///
/// let xml = r#"<YAMAHA_AV rsp="GET" RC="0"><Main_Zone><Basic_Status>
///     <Power_Control><Power>On</Power></Power_Control>
///     <Volume><Lvl><Val>-300</Val><Exp>1</Exp><Unit>dB</Unit></Lvl><Mute>Off</Mute></Volume>
/// </Basic_Status></Main_Zone></YAMAHA_AV>"#;
///
/// let response = CommandResponse::parse(xml).unwrap();
/// let status = StatusSnapshot::from_response(&response).unwrap();
/// assert!(status.power);
/// assert_eq!(status.volume.db(), -30.0);
/// assert!(!status.muted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// `true` when the zone is on, `false` in standby.
    pub power: bool,
    /// Current level.
    pub volume: Volume,
    /// `true` when muted.
    pub muted: bool,
}

impl StatusSnapshot {
    /// Extracts the snapshot from a basic status reply.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::MissingField` if an element is absent and
    /// `TransportError::InvalidValue` if the volume is not an integer.
    pub fn from_response(response: &CommandResponse) -> Result<Self, TransportError> {
        let status = response
            .zone()?
            .get_child("Basic_Status")
            .ok_or_else(|| TransportError::MissingField("Basic_Status".to_string()))?;
        Self::from_element(status)
    }

    /// Extracts the snapshot from a `<Basic_Status>` element.
    ///
    /// # Errors
    ///
    /// See [`from_response`](Self::from_response).
    pub fn from_element(status: &Element) -> Result<Self, TransportError> {
        let value = parse_int(status, "Volume/Lvl/Val")?;
        let exp = parse_int(status, "Volume/Lvl/Exp")?;
        if !(0..=MAX_EXP).contains(&exp) {
            return Err(TransportError::InvalidValue {
                field: "Volume/Lvl/Exp".to_string(),
                message: format!("exponent {exp} outside 0..={MAX_EXP}"),
            });
        }

        Ok(Self {
            power: text_at(status, "Power_Control/Power")? == "On",
            volume: Volume::from_device(value, exp),
            muted: text_at(status, "Volume/Mute")? == "On",
        })
    }
}

/// Largest decimal exponent accepted in a volume reading.
const MAX_EXP: i32 = 3;

fn parse_int(status: &Element, path: &str) -> Result<i32, TransportError> {
    let text = text_at(status, path)?;
    text.parse::<i32>().map_err(|e| TransportError::InvalidValue {
        field: path.to_string(),
        message: format!("{text:?}: {e}"),
    })
}
