mod event;
mod media;

pub use event::*;
pub use media::*;
