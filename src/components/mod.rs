//! Page components: the animated sky and the exit-transition link.

pub mod exit_link;
pub mod starfield;
