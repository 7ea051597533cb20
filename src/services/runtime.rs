//! Refetch Runtime
//!
//! Refetches backed by tokio clients cannot run on the GPUI executor. They are
//! spawned on a small shared tokio runtime and the module's GPUI task awaits
//! the join handle. A refetch that panics or is aborted comes back as an
//! [`Error::Refetch`], which the module treats like any other failed retry.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::constants::REFETCH_WORKER_THREADS;
use crate::error::{Error, Result};

static REFETCH_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn refetch_runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = REFETCH_RUNTIME.get() {
        return Ok(runtime);
    }

    let runtime = Builder::new_multi_thread()
        .worker_threads(REFETCH_WORKER_THREADS)
        .thread_name("ah-kit-refetch")
        .enable_all()
        .build()?;
    debug!(workers = REFETCH_WORKER_THREADS, "Started refetch runtime");
    // A concurrent caller may have installed one first; theirs is kept
    let _ = REFETCH_RUNTIME.set(runtime);

    REFETCH_RUNTIME.get().ok_or_else(|| Error::Refetch {
        message: "refetch runtime unavailable".to_string(),
    })
}

/// Run `future` on the refetch runtime and await its output from any executor
pub async fn run_in_tokio<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = refetch_runtime()?.spawn(future);
    handle.await.map_err(|e| Error::Refetch {
        message: e.to_string(),
    })
}
