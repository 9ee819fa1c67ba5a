pub mod input;
pub mod labels;
pub mod navigation;
