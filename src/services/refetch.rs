//! Refetch Callback
//!
//! The asynchronous operation a module runs when its retry button is pressed.

use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gpui::App;

use super::run_in_tokio;
use crate::error::Result;

/// Future returned by a refetch
pub type RefetchFuture = LocalBoxFuture<'static, Result<()>>;

/// Caller-supplied refetch operation
#[derive(Clone)]
pub struct Refetch(Rc<dyn Fn(&mut App) -> RefetchFuture>);

impl Refetch {
    /// Wrap a refetch that runs on the GPUI executor
    pub fn new<F, Fut>(refetch: F) -> Self
    where
        F: Fn(&mut App) -> Fut + 'static,
        Fut: Future<Output = Result<()>> + 'static,
    {
        Self(Rc::new(move |cx| refetch(cx).boxed_local()))
    }

    /// Wrap a refetch that must run on tokio
    pub fn tokio<F, Fut>(refetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self::new(move |_cx| {
            let future = refetch();
            async move { run_in_tokio(future).await? }
        })
    }

    /// Start the operation
    pub fn start(&self, cx: &mut App) -> RefetchFuture {
        (self.0)(cx)
    }
}

impl std::fmt::Debug for Refetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refetch").finish_non_exhaustive()
    }
}
