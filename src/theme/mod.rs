//! Editor chrome styling.
//!
//! Card colors are not here: they come from the card's own configuration via
//! the presentation mapper.

mod styles;

pub use styles::GLOBAL_STYLES;
