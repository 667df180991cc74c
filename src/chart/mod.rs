//! Chart renderers: pure functions from query-result rows to a [`figure::Figure`],
//! plus the HTML writer that turns a figure into a viewable artifact.
//! No renderer retains state across invocations; zero-row input is a
//! deterministic render error.

pub mod bar;
pub mod figure;
pub mod html;
pub mod line;
pub mod map;
pub mod pie;
pub mod scatter;
