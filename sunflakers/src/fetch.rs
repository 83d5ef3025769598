//! Dependency-tracked fetch state with stale-completion guarding.
//!
//! Each metadata listing (databases, schemas, tables, columns) is driven by
//! one `FetchSlot`. The slot watches a dependency snapshot, hands out a
//! `RequestToken` whenever that snapshot changes, and applies a completion
//! only if its token still matches the latest issued request. In-flight
//! calls are never cancelled at the transport level; a superseded call
//! simply has its result discarded when it finally lands.

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
        }
    }
}

/// Proof that a fetch was issued; required to complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

#[derive(Debug)]
pub struct FetchSlot<T> {
    name: &'static str,
    state: FetchState<T>,
    deps: Option<Vec<String>>,
    generation: u64,
    defer_first: bool,
}

impl<T> FetchSlot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: FetchState::default(),
            deps: None,
            generation: 0,
            defer_first: false,
        }
    }

    /// A slot that skips the fetch triggered by its very first dependency
    /// observation. Dependent listings (schemas under a database, tables
    /// under a schema) use this so they do not fire against the default
    /// empty value before the parent field has been deliberately set.
    pub fn deferred(name: &'static str) -> Self {
        Self {
            defer_first: true,
            ..Self::new(name)
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Compare `deps` against the last observed snapshot. Returns a token
    /// when a fetch should start; the caller runs the async call and feeds
    /// the outcome back through [`complete`](Self::complete).
    pub fn observe(&mut self, deps: &[&str]) -> Option<RequestToken> {
        let snapshot: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
        if self.deps.as_ref() == Some(&snapshot) {
            return None;
        }
        let first = self.deps.is_none();
        self.deps = Some(snapshot);

        if first && self.defer_first {
            tracing::debug!(slot = self.name, "skipping fetch before first mount");
            return None;
        }
        Some(self.begin())
    }

    /// Start a fetch unconditionally (manual refresh). Supersedes any fetch
    /// still in flight.
    pub fn begin(&mut self) -> RequestToken {
        self.generation += 1;
        self.state = FetchState {
            loading: true,
            data: None,
            error: None,
        };
        RequestToken {
            generation: self.generation,
        }
    }

    /// Apply a fetch outcome. Returns the data when this completion is
    /// current and succeeded; stale completions are discarded outright.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<T, String>,
    ) -> Option<&T> {
        if token.generation != self.generation {
            tracing::debug!(
                slot = self.name,
                stale = token.generation,
                current = self.generation,
                "discarding stale fetch completion"
            );
            return None;
        }
        match result {
            Ok(data) => {
                self.state = FetchState {
                    loading: false,
                    data: Some(data),
                    error: None,
                };
                self.state.data.as_ref()
            }
            Err(error) => {
                self.state = FetchState {
                    loading: false,
                    data: None,
                    error: Some(error),
                };
                None
            }
        }
    }
}
