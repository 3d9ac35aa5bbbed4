//! Page controller: one state record, one event enum, and a pure reducer.
//!
//! All transitions go through [`reduce`]; no I/O happens here. The event loop
//! in `main` watches for the Loading phase and runs the single outstanding
//! fetch, tagging its completion event with the generation current at
//! dispatch time so a late response for a superseded page is discarded.

use crate::api_client::{PageFetch, PER_PAGE};
use crate::errors::ErrorInfo;
use crate::models::Repo;
use crate::overlay::{DismissReason, Overlay};
use crate::pagination::{self, PageMarker, WINDOW_SIZE};

/// Fetch lifecycle for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Everything the views need, owned in one place.
#[derive(Debug, Clone)]
pub struct PageState {
    pub current_page: u32,
    pub total_count: u64,
    pub phase: Phase,
    pub entries: Vec<Repo>,
    pub detail: Overlay<Repo>,
    pub error: Overlay<ErrorInfo>,
    /// Bumped on every fetch start; completion events carrying an older
    /// value are stale and ignored.
    pub generation: u64,
}

/// Inputs the reducer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Application start: kick off the first fetch.
    Mounted,
    /// A pagination-bar slot was selected. Ellipsis slots are inert.
    PageSelected(PageMarker),
    PrevPage,
    NextPage,
    /// The outstanding fetch settled, tagged with its originating generation.
    FetchCompleted {
        generation: u64,
        result: Result<PageFetch, ErrorInfo>,
    },
    /// A card was selected; opens the detail overlay.
    RepoSelected(usize),
    DetailDismissed(DismissReason),
    ErrorDismissed(DismissReason),
    /// Retry from the error overlay: a full reset back to page 1.
    RetryRequested,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_count: 0,
            phase: Phase::Idle,
            entries: Vec::new(),
            detail: Overlay::Closed,
            error: Overlay::Closed,
            generation: 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.total_count, PER_PAGE)
    }

    pub fn visible_pages(&self) -> Vec<PageMarker> {
        pagination::visible_pages(self.current_page, self.total_pages(), WINDOW_SIZE)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The empty-state message is reserved for a genuine zero-result success,
    /// never shown while loading or after a failure.
    pub fn show_empty_state(&self) -> bool {
        self.phase == Phase::Loaded && self.entries.is_empty() && !self.error.is_open()
    }

    /// The pagination bar is hidden while loading and when there is nothing
    /// to page through.
    pub fn show_pagination(&self) -> bool {
        !self.is_loading() && !self.entries.is_empty()
    }

    /// Enter Loading for the current page: new generation, stale error gone.
    fn begin_load(mut self) -> Self {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.error = Overlay::Closed;
        self
    }

    fn jump_to(self, page: u32) -> Self {
        if page == self.current_page || page < 1 || page > self.total_pages() {
            return self;
        }

        Self {
            current_page: page,
            ..self
        }
        .begin_load()
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one event to the state. Pure: same inputs, same output, no side
/// effects.
pub fn reduce(state: PageState, event: Event) -> PageState {
    match event {
        Event::Mounted => state.begin_load(),

        Event::PageSelected(PageMarker::Number(page)) => state.jump_to(page),
        Event::PageSelected(PageMarker::Ellipsis) => state,

        Event::PrevPage => {
            let prev = state.current_page.saturating_sub(1);
            state.jump_to(prev)
        }

        Event::NextPage => {
            let next = state.current_page + 1;
            state.jump_to(next)
        }

        Event::FetchCompleted { generation, result } => {
            if generation != state.generation {
                // A newer page selection superseded this fetch.
                return state;
            }

            match result {
                Ok(fetch) => PageState {
                    phase: Phase::Loaded,
                    entries: fetch.entries,
                    total_count: fetch.total_count,
                    error: Overlay::Closed,
                    ..state
                },
                Err(info) => PageState {
                    phase: Phase::Failed,
                    entries: Vec::new(),
                    error: Overlay::open(info),
                    ..state
                },
            }
        }

        Event::RepoSelected(index) => match state.entries.get(index) {
            Some(repo) => PageState {
                detail: Overlay::open(repo.clone()),
                ..state
            },
            None => state,
        },

        Event::DetailDismissed(reason) => {
            let mut state = state;
            state.detail.dismiss(reason);
            state
        }

        Event::ErrorDismissed(reason) => {
            let mut state = state;
            state.error.dismiss(reason);
            state
        }

        Event::RetryRequested => {
            // Mirrors the close-then-reload behavior: everything resets to
            // the initial page. The generation carries over so an in-flight
            // response from before the reset can never match.
            PageState {
                generation: state.generation,
                ..PageState::new()
            }
            .begin_load()
        }
    }
}
