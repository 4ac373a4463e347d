pub(crate) mod generated;
pub(crate) mod model;
pub(crate) mod presets;
