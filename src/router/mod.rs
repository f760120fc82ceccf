//! Fragment routing.
//!
//! | fragment          | view                              |
//! |-------------------|-----------------------------------|
//! | `` or `#`         | feed at the session's current page |
//! | contains `#/page/`| sets the current page, then feed  |
//! | anything else     | detail for the id in the fragment |

use crate::app::Result;
use crate::config::ViewConfig;
use crate::domain::Page;
use crate::fetcher::ResourceClient;
use crate::store::Session;
use crate::view::{detail, feed, RenderSink};

const PAGE_PREFIX: &str = "#/page/";

/// Length of both `#/page/` and `#/show/`; parameters start after it.
const PREFIX_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Feed,
    Page(Page),
    Show(String),
}

impl Route {
    pub fn parse(fragment: &str) -> Self {
        if fragment.is_empty() || fragment == "#" {
            Route::Feed
        } else if fragment.contains(PAGE_PREFIX) {
            Route::Page(Page::coerce(parameter(fragment)))
        } else {
            Route::Show(parameter(fragment).to_string())
        }
    }
}

/// Text after the route prefix. Fragments that don't match a prefix still
/// lose their first seven characters.
fn parameter(fragment: &str) -> &str {
    fragment
        .char_indices()
        .nth(PREFIX_LEN)
        .map(|(at, _)| &fragment[at..])
        .unwrap_or("")
}

/// Owns the session and drives one view per fragment change.
pub struct Router<S> {
    session: Session,
    client: ResourceClient,
    view: ViewConfig,
    sink: S,
}

impl<S: RenderSink> Router<S> {
    pub fn new(client: ResourceClient, view: ViewConfig, sink: S) -> Self {
        Self {
            session: Session::new(),
            client,
            view,
            sink,
        }
    }

    /// Handle a fragment change.
    ///
    /// The sink is only updated once the view's data has arrived and the
    /// markup is complete; a failed navigation leaves it untouched.
    pub async fn navigate(&mut self, fragment: &str) -> Result<Route> {
        let route = Route::parse(fragment);
        tracing::info!("Navigating to {:?} ({:?})", fragment, route);

        let html = match &route {
            Route::Feed => {
                let page = self.session.current_page();
                feed::render(&mut self.session, &self.client, &self.view, page).await?
            }
            Route::Page(page) => {
                self.session.set_current_page(*page);
                feed::render(&mut self.session, &self.client, &self.view, *page).await?
            }
            Route::Show(id) => {
                detail::render(&mut self.session, &self.client, &self.view, id).await?
            }
        };

        self.sink.update_view(&html)?;
        Ok(route)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
