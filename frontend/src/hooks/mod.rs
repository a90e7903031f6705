pub mod use_scrolled;

pub use use_scrolled::use_scrolled;
