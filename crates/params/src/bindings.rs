//! Explicit request parameter binding tables.
//!
//! Responsibilities:
//! - Register (key, source, field) rows for one destination type.
//! - Fill a destination from a `RequestParams`.
//!
//! Invariants:
//! - Tags are parsed when a row is registered; `bind` never sees a bad source.
//! - Missing or empty values leave their field untouched.
//! - `bind` stops at the first conversion failure; rows before it stay applied.

use crate::error::{ParamsError, Result};
use crate::request::RequestParams;
use crate::source::ParamOptions;
use crate::value::ParamValue;

type Setter<T> = Box<dyn Fn(&mut T, &str) -> std::result::Result<(), String> + Send + Sync>;

struct ParamBinding<T> {
    options: ParamOptions,
    setter: Setter<T>,
}

pub struct ParamBindings<T> {
    bindings: Vec<ParamBinding<T>>,
}

impl<T> std::fmt::Debug for ParamBindings<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamBindings")
            .field(
                "bindings",
                &self.bindings.iter().map(|b| &b.options).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T: 'static> Default for ParamBindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> ParamBindings<T> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Registers a field under a `"key[,source]"` tag.
    pub fn param<V: ParamValue + 'static>(self, tag: &str, field: fn(&mut T) -> &mut V) -> Result<Self> {
        Ok(self.param_with(ParamOptions::parse(tag)?, field))
    }

    /// Registers a field with already-parsed options.
    pub fn param_with<V: ParamValue + 'static>(
        mut self,
        options: ParamOptions,
        field: fn(&mut T) -> &mut V,
    ) -> Self {
        self.bindings.push(ParamBinding {
            options,
            setter: Box::new(move |dest, raw| {
                *field(dest) = V::parse_param(raw)?;
                Ok(())
            }),
        });
        self
    }

    pub fn options(&self) -> impl Iterator<Item = &ParamOptions> {
        self.bindings.iter().map(|b| &b.options)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Fills `dest` from `request`.
    pub fn bind(&self, request: &RequestParams, dest: &mut T) -> Result<()> {
        let mut bound = 0usize;

        for binding in &self.bindings {
            let ParamOptions { key, source } = &binding.options;
            let Some(raw) = request.get(*source, key).filter(|v| !v.is_empty()) else {
                continue;
            };

            (binding.setter)(dest, raw).map_err(|message| ParamsError::InvalidValue {
                key: key.clone(),
                location: *source,
                message,
            })?;
            bound += 1;
        }

        tracing::debug!(bound, "Bound request parameters");
        Ok(())
    }
}
