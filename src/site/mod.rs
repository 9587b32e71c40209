//! The rendered page.
//!
//! Everything here is pure composition: static sections plus whatever the
//! release fetch produced. No I/O, no failure modes.

mod page;

pub use page::render_page;
