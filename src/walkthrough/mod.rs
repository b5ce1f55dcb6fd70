pub(crate) mod context;
pub(crate) mod phase;
pub(crate) mod phases;
pub(crate) mod registry;
pub(crate) mod scene;
