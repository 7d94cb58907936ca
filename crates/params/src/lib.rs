//! Request parameter binding for keystone services.
//!
//! Fills a caller-owned structure from the path parameters, query string and
//! headers of an incoming request, through an explicit table of
//! (key, source, field) rows built once at startup.

mod bindings;
mod error;
mod request;
mod source;
mod value;

pub use bindings::ParamBindings;
pub use error::{ParamsError, Result};
pub use request::RequestParams;
pub use source::{AVAILABLE_SOURCES, ParamOptions, ParamSource};
pub use value::ParamValue;
