//! Top-level pages and the resolver that hands them to the navigator.
//!
//! Home, chat and groups pages sit inside the app layout; login and the
//! not-found page render bare.

use crate::chat::{build_view_states, ChatId, ChatListRenderer, ChatListSnapshot};
use crate::layout::{wrap, Chrome, View};
use crate::markup::{Element, Node};
use crate::routing::{Params, ViewId, ViewResolver};
use crate::session::SessionState;
use crate::types::ShellError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Inputs every page renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageProps {
    pub session: SessionState,
    pub params: Params,
    pub chats: ChatListSnapshot,
}

/// A page boxed behind the [`View`] trait
pub type BoxedPage = Box<dyn View<Props = PageProps> + Send + Sync>;

/// Row renderer shared by every page a resolver hands out
pub type SharedRenderer = Arc<Mutex<ChatListRenderer>>;

/// Renders one of the shell's top-level views
#[derive(Clone)]
pub struct PageView {
    view: ViewId,
    rows: SharedRenderer,
}

impl PageView {
    pub fn new(view: ViewId) -> Self {
        Self::with_renderer(view, SharedRenderer::default())
    }

    pub fn with_renderer(view: ViewId, rows: SharedRenderer) -> Self {
        Self { view, rows }
    }

    fn chat_list(&self, props: &PageProps, active: Option<&ChatId>, groups_only: bool) -> Node {
        let chats: Vec<_> = props
            .chats
            .chats
            .iter()
            .filter(|chat| !groups_only || chat.is_group)
            .cloned()
            .collect();
        let states = build_view_states(&chats, &props.chats.presence(), active);
        Element::new("nav")
            .attr("class", "chat-list")
            .child(self.rows.lock().render_list(&states))
            .into()
    }
}

impl View for PageView {
    type Props = PageProps;

    fn render(&self, props: &PageProps) -> Node {
        match self.view {
            ViewId::Home => Element::new("main")
                .attr("class", "page page-home")
                .child(self.chat_list(props, props.chats.active_chat.as_ref(), false))
                .child(
                    Element::new("section")
                        .attr("class", "chat-placeholder")
                        .text("Select a friend to chat"),
                )
                .into(),
            ViewId::Chat => {
                let active = props
                    .params
                    .get("chatId")
                    .and_then(|id| ChatId::try_from(id.clone()).ok());
                Element::new("main")
                    .attr("class", "page page-chat")
                    .child(self.chat_list(props, active.as_ref(), false))
                    .child(
                        Element::new("section")
                            .attr("class", "chat-window")
                            .attr(
                                "data-chat-id",
                                active.as_ref().map(ChatId::to_string).unwrap_or_default(),
                            ),
                    )
                    .into()
            }
            ViewId::Groups => Element::new("main")
                .attr("class", "page page-groups")
                .child(self.chat_list(props, None, true))
                .into(),
            ViewId::Login => Element::new("main")
                .attr("class", "page page-login")
                .child(
                    Element::new("form")
                        .attr("class", "login-form")
                        .child(Element::new("h5").text("Login")),
                )
                .into(),
            ViewId::NotFound => Element::new("main")
                .attr("class", "page page-not-found")
                .child(Element::new("h1").text("404"))
                .child(Element::new("p").text("Page not found"))
                .child(Element::new("a").attr("href", "/").text("Go back to home"))
                .into(),
        }
    }
}

/// Resolves pages that are compiled into the binary.
///
/// All pages share one row renderer, so rows that did not change between
/// renders are reused.
#[derive(Clone, Default)]
pub struct StaticPages {
    chrome: Chrome,
    rows: SharedRenderer,
}

impl StaticPages {
    pub fn new(chrome: Chrome) -> Self {
        Self {
            chrome,
            rows: SharedRenderer::default(),
        }
    }

    /// `(hits, misses)` of the shared row renderer
    pub fn row_cache_stats(&self) -> (u64, u64) {
        let rows = self.rows.lock();
        (rows.hits(), rows.misses())
    }

    pub fn page(&self, view: ViewId) -> BoxedPage {
        let page = PageView::with_renderer(view, Arc::clone(&self.rows));
        match view {
            ViewId::Home | ViewId::Chat | ViewId::Groups => Box::new(wrap(&self.chrome, page)),
            ViewId::Login | ViewId::NotFound => Box::new(page),
        }
    }
}

#[async_trait]
impl ViewResolver<ViewId> for StaticPages {
    type Output = BoxedPage;

    async fn resolve(&self, view: &ViewId) -> Result<BoxedPage, ShellError> {
        Ok(self.page(*view))
    }
}
