use crate::services::lightbox::Viewport;
use serde::Serialize;

/// Page-level effects requested by the lightbox, rendered into the page:
/// `scroll_locked` becomes a body class and `keyboard` enables the key
/// bindings script.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PageChrome {
    pub scroll_locked: bool,
    pub keyboard: bool,
}

impl Viewport for PageChrome {
    fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    fn attach_keys(&mut self) {
        self.keyboard = true;
    }

    fn detach_keys(&mut self) {
        self.keyboard = false;
    }
}
