use std::fmt;

use crate::tag::Attrs;
use crate::value::Target;
use crate::{Error, Name, Result};

/// A command-line option bound to a field or a callback.
#[derive(Debug)]
pub struct Opt<'a> {
    field: Name,
    short: Option<char>,
    long: Option<Name>,
    description: Name,
    default: Option<Name>,
    optional_argument: bool,
    target: Target<'a>,
}

impl<'a> Opt<'a> {
    pub(crate) fn new(attrs: Attrs, target: Target<'a>) -> Self {
        let Attrs {
            field,
            short,
            long,
            description,
            default,
            optional_argument,
        } = attrs;
        debug_assert!(short.is_some() || long.is_some());
        Self {
            field,
            short,
            long,
            description,
            default,
            optional_argument,
            target,
        }
    }

    /// Name of the field this option was declared on.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The value applied by [`set_or_default`](Self::set_or_default) when
    /// the argument is omitted. Unused for boolean options.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn optional_argument(&self) -> bool {
        self.optional_argument
    }

    pub fn is_bool(&self) -> bool {
        match &self.target {
            Target::Slot(v) => v.is_bool(),
            Target::Callback(_) => false,
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self.target, Target::Callback(_))
    }

    /// Whether a value must follow this option on the command line.
    pub fn requires_argument(&self) -> bool {
        let takes_argument = match &self.target {
            Target::Slot(v) => !v.is_bool(),
            Target::Callback(c) => c.takes_argument(),
        };
        takes_argument && !self.optional_argument
    }

    /// Applies one occurrence of this option.
    ///
    /// An absent value is passed on as `""`. On error the bound field keeps
    /// its previous value.
    pub fn set(&mut self, value: Option<&str>) -> Result<()> {
        let text = value.unwrap_or_default();
        let res = match &mut self.target {
            Target::Callback(c) => return c.call(text).map_err(Error::Callback),
            Target::Slot(v) => v.set(text),
        };
        res.map_err(|reason| Error::Convert {
            option: self.to_string(),
            value: text.to_owned(),
            reason,
        })
    }

    /// Like [`set`](Self::set), but an omitted argument of an option with
    /// [`optional_argument`](Self::optional_argument) takes the default.
    pub fn set_or_default(&mut self, value: Option<&str>) -> Result<()> {
        if value.is_none() && self.optional_argument && !self.is_bool() {
            let default = self.default.clone().unwrap_or_default();
            self.set(Some(default.as_ref()))
        } else {
            self.set(value)
        }
    }
}

impl fmt::Display for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short, self.long()) {
            (Some(s), Some(l)) => write!(f, "-{}, --{}", s, l),
            (Some(s), None) => write!(f, "-{}", s),
            (None, Some(l)) => write!(f, "--{}", l),
            (None, None) => Ok(()),
        }
    }
}
