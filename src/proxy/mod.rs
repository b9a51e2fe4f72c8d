//! Output side of the pipeline: header rewriting and playlist generation

pub mod generator;
pub mod rewriter;

pub use generator::{render_playlist, write_playlist, write_playlist_to};
pub use rewriter::{Rewriter, rewrite_header};
