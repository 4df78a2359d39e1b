pub(crate) mod common;
pub(crate) mod hybrid_map;
pub(crate) mod matrix;
