pub mod aggregate;
pub mod cache;
pub mod catalog;
pub mod cloudinary;
pub mod gallery;
pub mod http;
pub mod imagekit;
pub mod lightbox;
pub mod media;
pub mod media_url;
pub mod slug;
pub mod source;
