// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport recording every command, for unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tokio::sync::Semaphore;

use crate::command::Verb;
use crate::error::TransportError;
use crate::protocol::Transport;
use crate::response::CommandResponse;

const PUT_OK: &str = r#"<YAMAHA_AV rsp="PUT" RC="0"><Main_Zone/></YAMAHA_AV>"#;

/// Builds a basic status reply.
pub(crate) fn status_body(power: bool, tenths: i32, muted: bool) -> String {
    format!(
        "<YAMAHA_AV rsp=\"GET\" RC=\"0\"><Main_Zone><Basic_Status>\
         <Power_Control><Power>{}</Power></Power_Control>\
         <Volume><Lvl><Val>{tenths}</Val><Exp>1</Exp><Unit>dB</Unit></Lvl>\
         <Mute>{}</Mute></Volume>\
         </Basic_Status></Main_Zone></YAMAHA_AV>",
        if power { "On" } else { "Standby" },
        if muted { "On" } else { "Off" },
    )
}

#[derive(Debug)]
pub(crate) struct MockTransport {
    sent: Mutex<Vec<(Verb, String)>>,
    status: Mutex<String>,
    fail: AtomicBool,
    /// When set, writes wait for a permit before answering.
    write_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            status: Mutex::new(status_body(true, 0, false)),
            fail: AtomicBool::new(false),
            write_gate: Mutex::new(None),
        }
    }

    pub(crate) fn set_status(&self, power: bool, tenths: i32, muted: bool) {
        *self.status.lock() = status_body(power, tenths, muted);
    }

    pub(crate) fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Holds every write until a permit is added to the returned semaphore.
    pub(crate) fn gate_writes(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.write_gate.lock() = Some(gate.clone());
        gate
    }

    pub(crate) fn sent(&self) -> Vec<(Verb, String)> {
        self.sent.lock().clone()
    }

    pub(crate) fn writes(&self) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter(|(verb, _)| *verb == Verb::Put)
            .map(|(_, body)| body.clone())
            .collect()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, verb: Verb, body: &str) -> Result<CommandResponse, TransportError> {
        self.sent.lock().push((verb, body.to_string()));

        if verb == Verb::Put {
            let gate = self.write_gate.lock().clone();
            if let Some(gate) = gate {
                gate.acquire()
                    .await
                    .map_err(|e| TransportError::Xml(e.to_string()))?
                    .forget();
            }
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(TransportError::Status(500));
        }

        let reply = match verb {
            Verb::Get => self.status.lock().clone(),
            Verb::Put => PUT_OK.to_string(),
        };
        CommandResponse::parse(&reply)
    }
}
