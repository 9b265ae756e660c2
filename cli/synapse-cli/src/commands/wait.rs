// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Waiting for long-running management operations
//!
//! ARM accepts create, update, and delete requests before the work is done.
//! Unless `--no-wait` is given, commands poll the resource until it settles.

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use synapse_api::{ProvisioningState, Provisioned};
use tokio::time::sleep;

/// Delay between polls
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Args, Clone, Debug)]
pub struct WaitArgs {
    /// Return as soon as the request is accepted
    #[arg(long)]
    pub no_wait: bool,

    /// Seconds to wait for the operation to finish
    #[arg(long, default_value = "1800")]
    pub wait_timeout: u64,
}

impl WaitArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout)
    }

    /// Finish a create or update
    ///
    /// With `--no-wait` this is whatever body the service returned with its
    /// acceptance; otherwise the resource once provisioning settles.
    pub async fn settle<T, F, Fut>(
        &self,
        what: &str,
        accepted: Option<T>,
        fetch: F,
    ) -> Result<Option<T>>
    where
        T: Provisioned,
        F: FnMut() -> Fut,
        Fut: Future<Output = synapse_client::Result<T>>,
    {
        if self.no_wait {
            return Ok(accepted);
        }
        wait_for_provisioning(what, self.timeout(), POLL_INTERVAL, fetch)
            .await
            .map(Some)
    }

    /// Finish a delete; returns whether the resource is known to be gone
    pub async fn settle_deletion<T, F, Fut>(&self, what: &str, fetch: F) -> Result<bool>
    where
        T: Provisioned,
        F: FnMut() -> Fut,
        Fut: Future<Output = synapse_client::Result<T>>,
    {
        if self.no_wait {
            return Ok(false);
        }
        wait_for_deletion(what, self.timeout(), POLL_INTERVAL, fetch).await?;
        Ok(true)
    }
}

/// Poll `fetch` until `done` reports completion
///
/// A 404 from `fetch` is passed to `done` as `None`; any other error ends
/// the wait.
pub async fn wait_until<T, F, Fut, D>(
    what: &str,
    timeout: Duration,
    interval: Duration,
    mut fetch: F,
    mut done: D,
) -> Result<Option<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = synapse_client::Result<T>>,
    D: FnMut(Option<&T>) -> Result<bool>,
{
    let start = Instant::now();

    loop {
        let current = match fetch().await {
            Ok(resource) => Some(resource),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e.into()),
        };

        if done(current.as_ref())? {
            return Ok(current);
        }

        if start.elapsed() > timeout {
            return Err(anyhow::anyhow!(
                "Timeout waiting for {} after {}s",
                what,
                timeout.as_secs()
            ));
        }

        tracing::debug!(what, "operation still in progress");
        sleep(interval).await;
    }
}

/// Wait for a resource to finish provisioning
///
/// Returns the settled resource. `Failed` and `Canceled` are errors. A
/// resource that does not exist yet is polled again.
pub async fn wait_for_provisioning<T, F, Fut>(
    what: &str,
    timeout: Duration,
    interval: Duration,
    fetch: F,
) -> Result<T>
where
    T: Provisioned,
    F: FnMut() -> Fut,
    Fut: Future<Output = synapse_client::Result<T>>,
{
    let settled = wait_until(what, timeout, interval, fetch, |resource| {
        let Some(resource) = resource else {
            return Ok(false);
        };
        match resource.provisioning_state() {
            None | Some(ProvisioningState::Succeeded) => Ok(true),
            Some(state) if state.is_failure() => {
                Err(anyhow::anyhow!("{} finished in state {}", what, state))
            }
            Some(_) => Ok(false),
        }
    })
    .await?;

    settled.ok_or_else(|| anyhow::anyhow!("{} disappeared while waiting", what))
}

/// Wait for a resource to be gone
pub async fn wait_for_deletion<T, F, Fut>(
    what: &str,
    timeout: Duration,
    interval: Duration,
    fetch: F,
) -> Result<()>
where
    T: Provisioned,
    F: FnMut() -> Fut,
    Fut: Future<Output = synapse_client::Result<T>>,
{
    wait_until(what, timeout, interval, fetch, |resource| match resource {
        None => Ok(true),
        Some(resource) => match resource.provisioning_state() {
            Some(state) if state.is_failure() => {
                Err(anyhow::anyhow!("Deleting {} failed in state {}", what, state))
            }
            _ => Ok(false),
        },
    })
    .await?;
    Ok(())
}
