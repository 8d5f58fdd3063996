use crate::{Error, Name, Result};

/// Raw option attributes attached to one field.
///
/// Values are kept as written and only validated by [`Tag::parse`], so a
/// malformed attribute is reported when the owning [`Group`](crate::Group)
/// is built.
#[derive(Clone, Debug, Default)]
pub struct Tag {
    field: Name,
    short: Option<Name>,
    long: Option<Name>,
    description: String,
    default: Option<Name>,
    optional: bool,
    skip: bool,
}

/// What the scanner should do with a field.
#[derive(Debug, Eq, PartialEq)]
pub enum Directive {
    Skip,
    Bind(Attrs),
}

/// Validated option attributes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attrs {
    pub field: Name,
    pub short: Option<char>,
    pub long: Option<Name>,
    pub description: Name,
    pub default: Option<Name>,
    pub optional_argument: bool,
}

impl Tag {
    pub fn new(field: impl Into<Name>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn short(mut self, short: impl Into<Name>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn long(mut self, long: impl Into<Name>) -> Self {
        self.long = Some(long.into());
        self
    }

    /// Appends a line to the description.
    pub fn description(mut self, line: &str) -> Self {
        let line = line.trim();
        if !line.is_empty() {
            if !self.description.is_empty() {
                self.description.push(' ');
            }
            self.description.push_str(line);
        }
        self
    }

    pub fn default_value(mut self, default: impl Into<Name>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    pub fn parse(self) -> Result<Directive> {
        let Self {
            field,
            short,
            long,
            description,
            default,
            optional,
            skip,
        } = self;

        if skip {
            return Ok(Directive::Skip);
        }

        let short = match short.filter(|s| !s.is_empty()) {
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err(Error::ShortNameTooLong { field, short: s }),
                }
            }
            None => None,
        };
        let long = long.filter(|l| !l.is_empty());
        if short.is_none() && long.is_none() {
            return Ok(Directive::Skip);
        }

        Ok(Directive::Bind(Attrs {
            field,
            short,
            long,
            description: description.into(),
            default,
            optional_argument: optional,
        }))
    }
}
