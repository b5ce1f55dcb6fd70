//! Built-in phase handlers. Each one assumes its phase is active; the registry guards that.

pub(crate) mod output;
pub(crate) mod transformer;
