use std::collections::BTreeMap;

use crate::tag::{Directive, Tag};
use crate::value::Bind;
use crate::{Error, Name, Opt, Options, Result};

/// A named set of options bound to the fields of one container.
#[derive(Debug)]
pub struct Group<'a> {
    name: Name,
    options: Vec<Opt<'a>>,
    long_names: BTreeMap<Name, usize>,
    short_names: BTreeMap<char, usize>,
    error: Option<Error>,
}

impl<'a> Group<'a> {
    /// Scans `container` for options.
    ///
    /// Scanning stops at the first error, which is kept in
    /// [`error`](Self::error); options registered before it stay in place.
    pub fn new<T>(name: impl Into<Name>, container: &'a mut T) -> Self
    where
        T: ?Sized + Options,
    {
        let mut group = Self {
            name: name.into(),
            options: Vec::new(),
            long_names: BTreeMap::new(),
            short_names: BTreeMap::new(),
            error: None,
        };
        let res = container.scan(&mut Scanner { group: &mut group });
        group.error = res.err();
        group
    }

    /// Like [`new`](Self::new), but fails on construction errors.
    pub fn try_new<T>(name: impl Into<Name>, container: &'a mut T) -> Result<Self>
    where
        T: ?Sized + Options,
    {
        let mut group = Self::new(name, container);
        match group.error.take() {
            Some(e) => Err(e),
            None => Ok(group),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The first error met while scanning. A group with an error must not
    /// be used to parse arguments.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Options in declaration order.
    pub fn options(&self) -> &[Opt<'a>] {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut [Opt<'a>] {
        &mut self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Opt<'a>> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn long(&self, name: &str) -> Option<&Opt<'a>> {
        self.long_names.get(name).map(|&i| &self.options[i])
    }

    pub fn long_mut(&mut self, name: &str) -> Option<&mut Opt<'a>> {
        let i = *self.long_names.get(name)?;
        Some(&mut self.options[i])
    }

    pub fn short(&self, name: char) -> Option<&Opt<'a>> {
        self.short_names.get(&name).map(|&i| &self.options[i])
    }

    pub fn short_mut(&mut self, name: char) -> Option<&mut Opt<'a>> {
        let i = *self.short_names.get(&name)?;
        Some(&mut self.options[i])
    }

    fn insert(&mut self, opt: Opt<'a>) -> Result<()> {
        let i = self.options.len();
        // check both names before touching either index
        if let Some(short) = opt.short() {
            if let Some(&t) = self.short_names.get(&short) {
                return Err(Error::DuplicateShort {
                    short,
                    field: opt.field().to_owned().into(),
                    previous: self.options[t].field().to_owned().into(),
                });
            }
        }
        if let Some(long) = opt.long() {
            if let Some(&t) = self.long_names.get(long) {
                return Err(Error::DuplicateLong {
                    long: long.to_owned().into(),
                    field: opt.field().to_owned().into(),
                    previous: self.options[t].field().to_owned().into(),
                });
            }
        }

        if let Some(short) = opt.short() {
            self.short_names.insert(short, i);
        }
        if let Some(long) = opt.long() {
            self.long_names.insert(long.to_owned().into(), i);
        }
        log::trace!("group `{}`: bound `{}` to `{}`", self.name, opt, opt.field());
        self.options.push(opt);
        Ok(())
    }
}

impl<'g, 'a> IntoIterator for &'g Group<'a> {
    type Item = &'g Opt<'a>;
    type IntoIter = std::slice::Iter<'g, Opt<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects the options of a container into a [`Group`].
///
/// Handed to [`Options::scan`], which reports every option-bearing field in
/// declaration order.
pub struct Scanner<'g, 'a> {
    group: &'g mut Group<'a>,
}

impl<'g, 'a> Scanner<'g, 'a> {
    /// Registers a field described by `tag`.
    pub fn field<T>(&mut self, tag: Tag, slot: &'a mut T) -> Result<()>
    where
        T: Bind,
    {
        match tag.parse()? {
            Directive::Skip => {
                log::trace!("group `{}`: skipped a field", self.group.name);
                Ok(())
            }
            Directive::Bind(attrs) => self.group.insert(Opt::new(attrs, slot.target())),
        }
    }

    /// Merges the options of a nested container into this group.
    pub fn embed<T>(&mut self, container: &'a mut T) -> Result<()>
    where
        T: ?Sized + Options,
    {
        container.scan(self)
    }
}
