use leptos::prelude::*;

/// Top-level pages reachable from the sidebar. Switching pages swaps the
/// rendered view; there are no URLs or history entries involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Activity,
    Settings,
}

impl Page {
    /// All pages, in sidebar order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Activity, Page::Settings];

    /// Label shown in the sidebar and the document title.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Activity => "Activity",
            Page::Settings => "Settings",
        }
    }
}

#[derive(Clone, Copy)]
pub struct NavContext {
    pub page: ReadSignal<Page>,
    pub set_page: WriteSignal<Page>,
}

/// Reflect the active page in the browser tab title.
pub fn apply_page_title(page: Page) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            doc.set_title(&format!("SubTrack | {}", page.label()));
        }
    }
}
