//! # External Resource Management

mod resource_loader;
mod url_resource;

#[doc(inline)]
pub use resource_loader::*;
#[doc(inline)]
pub use url_resource::*;
