//! Load state for a single remote resource.
//!
//! [`FetchTracker`] is the state machine on its own, shared by
//! [`FetchResource`] and the UI hook. Every attempt is tagged with a
//! [`Generation`]; only the result of the latest attempt is applied.

use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::ResourceClient;

/// Tag of a single fetch attempt. Zero means nothing was issued yet.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
)]
pub struct Generation(pub u64);

impl Generation {
    /// Step to the next generation and return it.
    pub fn advance(&mut self) -> Generation {
        self.0 += 1;
        *self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<T> {
    /// Nothing requested yet.
    Idle,
    /// An attempt is in flight. `stale` holds data from an earlier success.
    Loading { stale: Option<T> },
    Success(T),
    /// The latest attempt failed. Earlier data is kept in `stale`.
    Failed { message: String, stale: Option<T> },
}

impl<T> Default for FetchStatus<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchStatus<T> {
    /// Latest successfully fetched data, even while reloading or after a
    /// failed reload.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Idle => None,
            Self::Loading { stale } | Self::Failed { stale, .. } => {
                stale.as_ref()
            }
            Self::Success(data) => Some(data),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    fn into_data(self) -> Option<T> {
        match self {
            Self::Idle => None,
            Self::Loading { stale } | Self::Failed { stale, .. } => stale,
            Self::Success(data) => Some(data),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchTracker<T> {
    status: FetchStatus<T>,
    latest: Generation,
}

impl<T> Default for FetchTracker<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            latest: Generation::default(),
        }
    }
}

impl<T> FetchTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FetchStatus<T> {
        &self.status
    }

    /// Generation of the most recently started attempt.
    pub fn latest(&self) -> Generation {
        self.latest
    }

    /// Issue the next generation and enter `Loading`.
    pub fn begin(&mut self) -> Generation {
        let mut next = self.latest;
        let generation = next.advance();
        self.start(generation);
        generation
    }

    /// Enter `Loading` for an externally issued generation. Generations at or
    /// below the latest one are ignored.
    pub fn start(&mut self, generation: Generation) {
        if generation <= self.latest {
            tracing::debug!(
                %generation,
                latest = %self.latest,
                "ignoring out of order fetch start"
            );
            return;
        }
        self.latest = generation;
        let stale = std::mem::take(&mut self.status).into_data();
        self.status = FetchStatus::Loading { stale };
    }

    /// Apply the outcome of an attempt. Returns false when the attempt was
    /// superseded and its result discarded.
    pub fn finish(
        &mut self,
        generation: Generation,
        result: Result<T, String>,
    ) -> bool {
        if generation != self.latest || !self.status.is_loading() {
            tracing::debug!(
                %generation,
                latest = %self.latest,
                "discarding stale fetch result"
            );
            return false;
        }

        let stale = std::mem::take(&mut self.status).into_data();
        self.status = match result {
            Ok(data) => FetchStatus::Success(data),
            Err(message) => {
                tracing::warn!(%generation, "fetch failed: {message}");
                FetchStatus::Failed { message, stale }
            }
        };
        true
    }
}

type FetchFn<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, String>>>;

/// An attempt handed out by [`FetchResource::load`]. Dropping it before it
/// settles finishes the attempt as cancelled, so `Loading` never outlives
/// the future that would have ended it.
struct PendingAttempt<T> {
    tracker: Rc<RefCell<FetchTracker<T>>>,
    generation: Generation,
    settled: bool,
}

impl<T> PendingAttempt<T> {
    fn settle(&mut self, result: Result<T, String>) -> bool {
        self.settled = true;
        self.tracker.borrow_mut().finish(self.generation, result)
    }
}

impl<T> Drop for PendingAttempt<T> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Ok(mut tracker) = self.tracker.try_borrow_mut() {
            tracker.finish(self.generation, Err(CANCELLED.to_owned()));
        }
    }
}

/// Error recorded when an attempt's future is dropped before it resolves.
pub const CANCELLED: &str = "request cancelled";

/// A fetchable resource with observable load state.
///
/// Construction does not fetch; call [`FetchResource::load`]. State lives
/// behind an `Rc`, so clones observe the same resource. Meant for a single
/// threaded executor.
pub struct FetchResource<T> {
    fetch_fn: FetchFn<T>,
    tracker: Rc<RefCell<FetchTracker<T>>>,
}

impl<T> Clone for FetchResource<T> {
    fn clone(&self) -> Self {
        Self {
            fetch_fn: self.fetch_fn.clone(),
            tracker: self.tracker.clone(),
        }
    }
}

impl<T: Clone + 'static> FetchResource<T> {
    pub fn new<F, Fut>(fetch_fn: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, String>> + 'static,
    {
        Self {
            fetch_fn: Rc::new(move || fetch_fn().boxed_local()),
            tracker: Rc::new(RefCell::new(FetchTracker::new())),
        }
    }

    pub fn status(&self) -> FetchStatus<T> {
        self.tracker.borrow().status().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.tracker.borrow().status().data().cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.tracker.borrow().status().error().map(str::to_owned)
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.borrow().status().is_loading()
    }

    pub fn generation(&self) -> Generation {
        self.tracker.borrow().latest()
    }

    /// Start an attempt.
    ///
    /// The state switches to `Loading` (clearing any error) as soon as this
    /// is called; the returned future performs the read and resolves to
    /// whether its result was applied. Overlapping calls are not cancelled,
    /// but only the newest one's result is kept. Dropping the future early
    /// fails the attempt with [`CANCELLED`].
    pub fn load(&self) -> impl Future<Output = bool> + use<T> {
        let generation = self.tracker.borrow_mut().begin();
        tracing::debug!(%generation, "fetch started");

        let attempt = (self.fetch_fn)();
        let mut pending = PendingAttempt {
            tracker: self.tracker.clone(),
            generation,
            settled: false,
        };
        async move {
            let result = attempt.await;
            pending.settle(result)
        }
    }

    /// Same as [`FetchResource::load`].
    pub fn refetch(&self) -> impl Future<Output = bool> + use<T> {
        self.load()
    }
}

impl<T: DeserializeOwned + Clone + 'static> FetchResource<T> {
    /// A resource that GETs `url` and parses its body as JSON.
    pub fn from_url(client: ResourceClient, url: impl Into<String>) -> Self {
        let url = url.into();
        Self::new(move || {
            let client = client.clone();
            let url = url.clone();
            async move {
                client.get_json::<T>(&url).await.map_err(|e| e.to_string())
            }
        })
    }
}
