// ── Option resolution ──
//
// Turns the current query into the visible option pool. Without a fetch
// function this is a synchronous filter over the static source. With one,
// each query schedules a debounced task on the tokio runtime that reports
// back over an mpsc channel; completions are tagged with the sequence
// number of the request that produced them and only the latest one is
// ever applied.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::error::FetchError;
use crate::matcher::Matcher;
use crate::model::SelectItem;

/// Async option source: `(query, static source) -> options`.
pub type FetchFn<T> =
    Arc<dyn Fn(String, Arc<[T]>) -> BoxFuture<'static, Result<Vec<T>, FetchError>> + Send + Sync>;

/// Wrap an async closure as a [`FetchFn`].
pub fn fetch_fn<T, F, Fut>(fetch: F) -> FetchFn<T>
where
    T: SelectItem,
    F: Fn(String, Arc<[T]>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + Send + 'static,
{
    Arc::new(move |query, source| Box::pin(fetch(query, source)))
}

/// A finished fetch, tagged with the request it answers.
#[derive(Debug)]
pub struct Resolution<T> {
    pub(crate) seq: u64,
    pub(crate) result: Result<Vec<T>, FetchError>,
}

impl<T> Resolution<T> {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What a call to [`OptionResolver::resolve`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The pool was replaced synchronously.
    Ready,
    /// A fetch was scheduled; the pool changes when it completes.
    Scheduled { seq: u64 },
}

pub struct OptionResolver<T: SelectItem> {
    source: Arc<[T]>,
    matcher: Matcher<T>,
    fetch: Option<FetchFn<T>>,
    debounce: Duration,
    options: Vec<T>,
    fetching: bool,
    /// Sequence number of the latest issued request.
    seq: u64,
    cancel: CancellationToken,
    /// Child token of the request currently in flight.
    pending: Option<CancellationToken>,
    tx: mpsc::UnboundedSender<Resolution<T>>,
    rx: mpsc::UnboundedReceiver<Resolution<T>>,
}

impl<T: SelectItem> OptionResolver<T> {
    /// Start with the full source as the pool.
    pub fn new(
        source: Vec<T>,
        matcher: Matcher<T>,
        fetch: Option<FetchFn<T>>,
        debounce: Duration,
    ) -> Self {
        let source: Arc<[T]> = source.into();
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            options: source.to_vec(),
            source,
            matcher,
            fetch,
            debounce,
            fetching: false,
            seq: 0,
            cancel: CancellationToken::new(),
            pending: None,
            tx,
            rx,
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn fetching(&self) -> bool {
        self.fetching
    }

    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    /// Replace the static source. The caller re-resolves its query.
    pub fn set_source(&mut self, source: Vec<T>) {
        self.source = source.into();
    }

    /// Resolve `query` into a new pool, synchronously or by scheduling a fetch.
    ///
    /// Any request still in flight is cancelled first. An empty query
    /// always yields the full source immediately.
    pub fn resolve(&mut self, query: &str) -> ResolveOutcome {
        self.cancel_pending();
        self.seq = self.seq.wrapping_add(1);

        if query.is_empty() {
            self.options = self.source.to_vec();
            self.fetching = false;
            return ResolveOutcome::Ready;
        }

        // After shutdown no task may be spawned; fall back to local filtering.
        let fetch = self.fetch.clone().filter(|_| !self.cancel.is_cancelled());
        let Some(fetch) = fetch else {
            self.options = self.matcher.filter(&self.source, query);
            self.fetching = false;
            return ResolveOutcome::Ready;
        };

        let seq = self.seq;
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(seq, "no tokio runtime available -- option fetch skipped");
            self.options.clear();
            self.fetching = false;
            return ResolveOutcome::Ready;
        };

        let cancel = self.cancel.child_token();
        self.pending = Some(cancel.clone());
        self.fetching = true;

        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        let query = query.to_owned();
        let debounce = self.debounce;
        debug!(seq, %query, debounce_ms = debounce.as_millis(), "option fetch scheduled");

        runtime.spawn(async move {
            if !debounce.is_zero() {
                tokio::select! {
                    () = cancel.cancelled() => return,
                    () = tokio::time::sleep(debounce) => {}
                }
            }

            let result = tokio::select! {
                () = cancel.cancelled() => return,
                result = fetch(query, source) => result,
            };

            // Receiver gone means the resolver was dropped.
            let _ = tx.send(Resolution { seq, result });
        });

        ResolveOutcome::Scheduled { seq }
    }

    /// Apply a completed fetch. Returns `false` if it was stale and discarded.
    pub fn apply(&mut self, resolution: Resolution<T>) -> bool {
        if resolution.seq != self.seq || self.cancel.is_cancelled() {
            trace!(
                seq = resolution.seq,
                latest = self.seq,
                "discarding stale resolution"
            );
            return false;
        }

        match resolution.result {
            Ok(options) => {
                debug!(seq = resolution.seq, count = options.len(), "options resolved");
                self.options = options;
            }
            Err(e) => {
                warn!(seq = resolution.seq, error = %e, "option fetch failed");
                self.options.clear();
            }
        }
        self.fetching = false;
        self.pending = None;
        true
    }

    /// Take a completion that has already arrived, if any.
    pub fn try_next(&mut self) -> Option<Resolution<T>> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next completion. Stays pending while nothing is in flight.
    pub async fn next(&mut self) -> Option<Resolution<T>> {
        self.rx.recv().await
    }

    /// Cancel everything; no completion is applied afterwards.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        self.pending = None;
        self.fetching = false;
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!(seq = self.seq, "cancelling in-flight fetch");
            pending.cancel();
        }
    }
}

impl<T: SelectItem> Drop for OptionResolver<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
