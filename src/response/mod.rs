// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for YNC XML replies.
//!
//! The receiver answers every request with a `YAMAHA_AV` document that
//! echoes the zone element it was addressed to:
//!
//! ```xml
//! <YAMAHA_AV rsp="GET" RC="0">
//!   <Main_Zone><Basic_Status>...</Basic_Status></Main_Zone>
//! </YAMAHA_AV>
//! ```
//!
//! [`CommandResponse`] holds the parsed tree; [`StatusSnapshot`] extracts the
//! tracked properties from a basic status reply.

mod status;

pub use status::StatusSnapshot;

use xmltree::Element;

use crate::command::MAIN_ZONE;
use crate::error::TransportError;

/// Parsed response from a receiver command.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    root: Element,
}

impl CommandResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Xml` if the body is not well-formed, and
    /// `TransportError::Rejected` if the receiver reported a non-zero `RC`.
    pub fn parse(body: &str) -> Result<Self, TransportError> {
        let root =
            Element::parse(body.as_bytes()).map_err(|e| TransportError::Xml(e.to_string()))?;
        let response = Self { root };

        match response.return_code() {
            Some(rc) if rc != "0" => Err(TransportError::Rejected(rc.to_string())),
            _ => Ok(response),
        }
    }

    /// Wraps an already parsed document without checking the return code.
    #[must_use]
    pub fn from_element(root: Element) -> Self {
        Self { root }
    }

    /// Returns the `YAMAHA_AV` root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns the `RC` attribute of the root element, if present.
    #[must_use]
    pub fn return_code(&self) -> Option<&str> {
        self.root.attributes.get("RC").map(String::as_str)
    }

    /// Returns the echoed zone element.
    ///
    /// Falls back to the first child element when the reply does not name
    /// `Main_Zone` explicitly.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::MissingField` if the root has no child element.
    pub fn zone(&self) -> Result<&Element, TransportError> {
        self.root
            .get_child(MAIN_ZONE)
            .or_else(|| self.root.children.iter().find_map(|node| node.as_element()))
            .ok_or_else(|| TransportError::MissingField(MAIN_ZONE.to_string()))
    }
}

/// Walks a `/`-separated element path below `element` and returns its text.
pub(crate) fn text_at(element: &Element, path: &str) -> Result<String, TransportError> {
    let mut current = element;
    for name in path.split('/') {
        current = current
            .get_child(name)
            .ok_or_else(|| TransportError::MissingField(path.to_string()))?;
    }
    current
        .get_text()
        .map(|text| text.trim().to_string())
        .ok_or_else(|| TransportError::MissingField(path.to_string()))
}
