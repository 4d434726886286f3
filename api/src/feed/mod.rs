//! Feed module
//!
//! Homepage feed assembly and plain-text rendering.

pub mod assembler;
pub mod renderer;

pub use assembler::{
    assemble, check_limit, fetch_size, normalize, MAX_LIST_LIMIT, MAX_POPULAR_LIMIT,
    MIN_LIST_LIMIT, MIN_POPULAR_LIMIT,
};
pub use renderer::{render_feed, render_posts, render_profile};
