//! Command handlers, one module per command group.

pub mod bookmarks;
pub mod highlights;
pub mod init;
pub mod journal;
pub mod misc;
pub mod plan;
pub mod reading;
pub mod reflection;
pub mod settings;
pub mod stats;
