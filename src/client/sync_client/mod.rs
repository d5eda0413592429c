// src/client/sync_client/mod.rs

mod io_helpers;
mod operations;
mod transaction;

#[cfg(test)]
pub(crate) mod mock;

use crate::common::{
    config::ClientConfig,
    error::NexStarError,
    hal_traits::{NexStarSerial, NexStarTimer},
};

/// Blocking client for a NexStar hand controller.
///
/// Owns its transport for its whole lifetime: the link is opened in the
/// constructor (unless the caller already opened it) and closed when the
/// client is dropped. Every exchange takes `&mut self`, so a second command can
/// never be issued while one is outstanding. Share a client across threads
/// behind a mutex.
#[derive(Debug)]
pub struct NexStarClient<IF>
where
    IF: NexStarSerial + NexStarTimer,
{
    interface: IF,
    config: ClientConfig,
}

impl<IF> NexStarClient<IF>
where
    IF: NexStarSerial + NexStarTimer,
{
    /// Connects with the default settings (9600 8N1, 3.5 s timeout).
    pub fn new(interface: IF) -> Result<Self, NexStarError<IF::Error>> {
        Self::with_config(interface, ClientConfig::default())
    }

    pub fn with_config(
        interface: IF,
        config: ClientConfig,
    ) -> Result<Self, NexStarError<IF::Error>> {
        let mut client = NexStarClient { interface, config };
        if !client.interface.is_open() {
            client.interface.open(&client.config.serial)?;
        }
        Ok(client)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    /// Direct access to the transport. Bytes written or read here bypass framing.
    pub fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    /// Closes the transport, reporting failures that `Drop` would swallow.
    ///
    /// Calling it on a closed client does nothing.
    pub fn close(&mut self) -> Result<(), NexStarError<IF::Error>> {
        if self.interface.is_open() {
            self.interface.close()?;
        }
        Ok(())
    }
}

impl<IF> Drop for NexStarClient<IF>
where
    IF: NexStarSerial + NexStarTimer,
{
    fn drop(&mut self) {
        if let Err(_e) = self.close() {
            wire_debug!(error = ?_e, "failed to close transport");
        }
    }
}
