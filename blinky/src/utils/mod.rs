//! Miscellaneous helpers.

mod pause;
