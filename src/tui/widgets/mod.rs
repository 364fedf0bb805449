pub mod help;
pub mod root;
pub mod swatches;
