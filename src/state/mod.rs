//! Browser-independent controller state.
//!
//! DESIGN
//! ======
//! Each controller keeps its decision logic here as plain data plus methods,
//! so scroll, theme, pagination, and reveal behavior can be unit tested
//! natively. `controllers` only translates DOM events into calls on these
//! types and writes the results back to the page.

pub mod back_to_top;
pub mod feed;
pub mod navbar;
pub mod reveal;
pub mod theme;
