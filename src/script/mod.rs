pub(crate) mod model;
pub(crate) mod rules;
pub(crate) mod validate;
