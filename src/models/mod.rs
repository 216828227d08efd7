//! Panda Market API model types.

mod article;
mod product;

pub use article::*;
pub use product::*;
