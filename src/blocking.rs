use crate::client::LcdClient;
use crate::config::Config;
use crate::error::Result;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

/// Synchronous front for [`LcdClient`], driving each call on a private
/// current-thread runtime.
///
/// Must not be used from inside another tokio runtime.
pub struct BlockingLcd {
    runtime: Runtime,
    client: LcdClient,
}

impl BlockingLcd {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_client(LcdClient::new(config)?)
    }

    pub fn with_client(client: LcdClient) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime, client })
    }

    pub fn client(&self) -> &LcdClient {
        &self.client
    }

    /// Runs one async operation to completion.
    ///
    /// ```ignore
    /// let pool = lcd.run(|c| async move { c.distribution().community_pool().await })?;
    /// ```
    pub fn run<'s, F, Fut, T>(&'s self, op: F) -> Result<T>
    where
        F: FnOnce(&'s LcdClient) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.runtime.block_on(op(&self.client))
    }
}
