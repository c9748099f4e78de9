use client::{FetchStatus, FetchTracker, Generation};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub status: FetchStatus<T>,
    /// Latest fetched data, kept while refetching and after a failed refetch.
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T> FetchHookReturn<T> {
    /// Text shown in place of the data while there is none.
    fn placeholder(&self, context: &str) -> String {
        match &self.status {
            FetchStatus::Idle => format!("No {context} loaded"),
            FetchStatus::Failed { message, .. } => {
                format!("Error loading {context}: {message}")
            }
            FetchStatus::Loading { .. } | FetchStatus::Success(_) => {
                format!("Loading {context}...")
            }
        }
    }

    /// Render based on fetch state with contextual messages.
    ///
    /// - Nothing requested yet: "No {context} loaded" and a load button
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: the error and a retry button
    /// - Has data: `render_fn(data, is_loading, error)`, where `error` is
    ///   from a failed refetch and `data` from the previous success
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        if let Some(data) = self.data.as_ref() {
            return render_fn(data, self.is_loading, self.error.as_ref());
        }

        let text = self.placeholder(context);
        let on_load = self.refetch.reform(|_: MouseEvent| ());
        match &self.status {
            FetchStatus::Idle => html! {
                <div class="text-center py-12 space-y-3">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {text}
                    </p>
                    <button
                        onclick={on_load}
                        class="text-sm font-medium text-neutral-700 \
                               dark:text-neutral-300 hover:underline"
                    >
                        {"Load"}
                    </button>
                </div>
            },
            FetchStatus::Failed { .. } => html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800 space-y-3">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {text}
                    </p>
                    <button
                        onclick={on_load}
                        class="text-sm font-medium text-red-700 \
                               dark:text-red-300 hover:underline"
                    >
                        {"Retry"}
                    </button>
                </div>
            },
            FetchStatus::Loading { .. } | FetchStatus::Success(_) => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {text}
                    </p>
                </div>
            },
        }
    }
}

pub enum FetchAction<T> {
    Start(Generation),
    Finish(Generation, Result<T, String>),
}

struct TrackerState<T>(FetchTracker<T>);

impl<T> Default for TrackerState<T> {
    fn default() -> Self {
        Self(FetchTracker::new())
    }
}

impl<T: Clone> Reducible for TrackerState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Start(generation) => {
                let mut tracker = self.0.clone();
                tracker.start(generation);
                Rc::new(Self(tracker))
            }
            FetchAction::Finish(generation, result) => {
                // superseded attempts leave the state untouched
                if generation != self.0.latest() {
                    tracing::debug!(%generation, "dropping stale fetch result");
                    return self;
                }
                let mut tracker = self.0.clone();
                tracker.finish(generation, result);
                Rc::new(Self(tracker))
            }
        }
    }
}

/// Generic fetch hook composer.
///
/// With `auto_start` the fetch runs on mount and whenever `deps` change;
/// otherwise nothing is requested until `refetch` is emitted. Each attempt
/// gets a new generation and only the latest one's result is applied, so
/// overlapping refetches resolve to the newest request.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_characters(ids: Sample) -> FetchHookReturn<Vec<Character>> {
///     let sample = ids.clone();
///     use_fetch(ids, true, move || {
///         let sample = sample.clone();
///         async move {
///             get_character_client()
///                 .characters(&sample)
///                 .await
///                 .map_err(|e| e.to_string())
///         }
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(
    deps: D,
    auto_start: bool,
    fetch_fn: F,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let tracker = use_reducer(TrackerState::<T>::default);
    let generations = use_mut_ref(Generation::default);

    let refetch = {
        let dispatcher = tracker.dispatcher();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_: (), _| {
            let generation = generations.borrow_mut().advance();
            dispatcher.dispatch(FetchAction::Start(generation));

            let dispatcher = dispatcher.clone();
            let attempt = fetch_fn();
            yew::platform::spawn_local(async move {
                let result = attempt.await;
                dispatcher.dispatch(FetchAction::Finish(generation, result));
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            if auto_start {
                refetch.emit(());
            }
        });
    }

    let status = tracker.0.status().clone();
    FetchHookReturn {
        data: status.data().cloned(),
        is_loading: status.is_loading(),
        error: status.error().map(str::to_owned),
        status,
        refetch,
    }
}
