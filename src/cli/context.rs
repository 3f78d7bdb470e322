//! Shared state handed to every command

use super::output::OutputMode;
use super::reporter::TaskReporter;
use crate::infrastructure::photon::PhotonClient;

/// The client and output mode of one invocation
pub struct CommandContext<'a> {
    pub client: &'a PhotonClient,
    pub mode: OutputMode,
}

impl<'a> CommandContext<'a> {
    pub fn new(client: &'a PhotonClient, mode: OutputMode) -> Self {
        Self { client, mode }
    }

    pub fn is_interactive(&self) -> bool {
        self.mode.is_interactive()
    }

    pub fn reporter(&self) -> TaskReporter<'a> {
        TaskReporter::new(self.client.poller(), self.mode)
    }
}
