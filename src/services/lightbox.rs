//! Full-screen viewer state for a gallery.
//!
//! The lightbox is either closed or showing one item. While it is open the
//! page underneath must not scroll and the arrow/escape keys drive
//! navigation; both effects are requested through a [`Viewport`] and are
//! released on every path back to closed, including dropping the lightbox
//! while it is still open.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(usize),
}

/// Keys the lightbox listens for. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowRight,
    ArrowLeft,
    Other,
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Escape" | "Esc" => Key::Escape,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            _ => Key::Other,
        })
    }
}

/// Host environment effects held while the lightbox is open.
pub trait Viewport {
    fn lock_scroll(&mut self);
    fn unlock_scroll(&mut self);
    fn attach_keys(&mut self);
    fn detach_keys(&mut self);
}

pub struct Lightbox<V: Viewport> {
    state: LightboxState,
    count: usize,
    viewport: V,
}

impl<V: Viewport> Lightbox<V> {
    pub fn new(count: usize, viewport: V) -> Self {
        Self {
            state: LightboxState::Closed,
            count,
            viewport,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(i) => Some(i),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.index().is_some()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Opens item `index`. Out-of-range indices are ignored; returns whether
    /// the lightbox is now showing `index`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        if !self.is_open() {
            self.acquire();
        }
        self.state = LightboxState::Open(index);
        true
    }

    pub fn close(&mut self) {
        self.release();
    }

    pub fn next(&mut self) {
        if let LightboxState::Open(i) = self.state {
            self.state = LightboxState::Open((i + 1) % self.count);
        }
    }

    pub fn previous(&mut self) {
        if let LightboxState::Open(i) = self.state {
            self.state = LightboxState::Open((i + self.count - 1) % self.count);
        }
    }

    /// Index `next()` would move to, without moving.
    pub fn next_index(&self) -> Option<usize> {
        self.index().map(|i| (i + 1) % self.count)
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.index().map(|i| (i + self.count - 1) % self.count)
    }

    /// Keys are only heard while the listener is attached, i.e. while open.
    pub fn handle_key(&mut self, key: Key) {
        if !self.is_open() {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.previous(),
            Key::Other => {}
        }
    }

    /// Adopts a new item count. An open lightbox is clamped onto the last
    /// item, or closed when no items remain.
    pub fn resize(&mut self, count: usize) {
        self.count = count;
        if let LightboxState::Open(i) = self.state {
            if count == 0 {
                self.release();
            } else if i >= count {
                self.state = LightboxState::Open(count - 1);
            }
        }
    }

    fn acquire(&mut self) {
        self.viewport.lock_scroll();
        self.viewport.attach_keys();
    }

    fn release(&mut self) {
        if self.is_open() {
            self.state = LightboxState::Closed;
            self.viewport.unlock_scroll();
            self.viewport.detach_keys();
        }
    }
}

impl<V: Viewport> Drop for Lightbox<V> {
    fn drop(&mut self) {
        self.release();
    }
}
