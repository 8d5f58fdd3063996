use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Field, Ident, Lit, LitStr, Token};

use crate::util::Errors;

/// How a field takes part in option scanning.
pub(crate) enum FieldKind {
    /// No `#[opt]` attribute, or `#[opt(skip)]`.
    Ignored,
    /// `#[opt(flatten)]`: a nested container.
    Flatten,
    Option(OptAttrs),
}

#[derive(Default)]
pub(crate) struct OptAttrs {
    pub short: Option<LitStr>,
    pub long: Option<LitStr>,
    pub description: Vec<LitStr>,
    pub default: Option<LitStr>,
    pub optional: bool,
}

#[derive(Default)]
struct RawAttrs {
    found: bool,
    short: Option<LitStr>,
    long: Option<LitStr>,
    description: Option<LitStr>,
    default: Option<LitStr>,
    optional: Option<Span>,
    skip: Option<Span>,
    flatten: Option<Span>,
}

/// Parses the attributes of a named field, returning its name with them.
pub(crate) fn parse_field(field: &Field) -> syn::Result<(&Ident, FieldKind)> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn_error!(Span::call_site(), "expected a named field"))?;

    let mut raw = RawAttrs::default();
    let mut docs = Vec::new();
    let mut errors = Errors::default();
    for attr in field.attrs.iter() {
        if attr.path().is_ident("opt") {
            raw.found = true;
            errors.add_result(attr.parse_nested_meta(|meta| raw.parse_meta(ident, meta)));
        } else if attr.path().is_ident("doc") {
            if let Some(doc) = get_doc(attr) {
                docs.push(doc);
            }
        }
    }
    errors.fail()?;

    if !raw.found || raw.skip.is_some() {
        return Ok((ident, FieldKind::Ignored));
    }
    if let Some(span) = raw.flatten {
        if raw.short.is_some()
            || raw.long.is_some()
            || raw.description.is_some()
            || raw.default.is_some()
            || raw.optional.is_some()
        {
            return Err(syn_error!(
                span,
                "`flatten` cannot be combined with other option attributes"
            ));
        }
        return Ok((ident, FieldKind::Flatten));
    }

    let RawAttrs {
        short,
        long,
        description,
        default,
        optional,
        ..
    } = raw;
    let attrs = OptAttrs {
        short,
        long,
        // an explicit description takes precedence over doc comments
        description: description.map_or(docs, |d| vec![d]),
        default,
        optional: optional.is_some(),
    };
    Ok((ident, FieldKind::Option(attrs)))
}

impl RawAttrs {
    fn parse_meta(&mut self, field: &Ident, meta: ParseNestedMeta) -> syn::Result<()> {
        let key = meta
            .path
            .get_ident()
            .ok_or_else(|| meta.error("expected an identifier"))?
            .clone();
        let span = key.span();
        let duplicate = || syn_error!(span, "duplicate `{}`", key);

        if key == "short" {
            let lit = match meta.value()?.parse::<Lit>()? {
                Lit::Str(s) => s,
                Lit::Char(c) => LitStr::new(&c.value().to_string(), c.span()),
                l => return Err(syn_error!(l.span(), "expected a character or a string")),
            };
            set_once(&mut self.short, lit, duplicate)
        } else if key == "long" {
            let lit = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<LitStr>()?
            } else {
                let name = field.unraw().to_string().replace('_', "-");
                LitStr::new(&name, span)
            };
            set_once(&mut self.long, lit, duplicate)
        } else if key == "description" {
            set_once(&mut self.description, meta.value()?.parse()?, duplicate)
        } else if key == "default" {
            set_once(&mut self.default, meta.value()?.parse()?, duplicate)
        } else if key == "optional" {
            set_once(&mut self.optional, span, duplicate)
        } else if key == "skip" {
            set_once(&mut self.skip, span, duplicate)
        } else if key == "flatten" {
            set_once(&mut self.flatten, span, duplicate)
        } else {
            Err(syn_error!(span, "unknown option attribute `{}`", key))
        }
    }
}

fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    duplicate: impl FnOnce() -> syn::Error,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(duplicate());
    }
    *slot = Some(value);
    Ok(())
}

fn get_doc(attr: &Attribute) -> Option<LitStr> {
    let exp = if let syn::Meta::NameValue(ref m) = attr.meta {
        &m.value
    } else {
        return None;
    };
    match exp {
        syn::Expr::Lit(syn::ExprLit {
            lit: Lit::Str(s), ..
        }) => Some(s.clone()),
        _ => None,
    }
}
