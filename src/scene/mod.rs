pub(crate) mod geometry;
pub(crate) mod labels;
pub(crate) mod plot;
