use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, WherePredicate};

use crate::attrs::{parse_field, FieldKind, OptAttrs};
use crate::util::Errors;

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let DeriveInput {
        ident,
        mut generics,
        data,
        ..
    } = input;

    let body = match data {
        Data::Struct(syn::DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => {
            let mut bindings = Vec::new();
            let mut stmts = Vec::new();
            let mut bounds = Vec::<WherePredicate>::new();
            let mut errors = Errors::default();

            for field in fields.named.iter() {
                let (name, kind) = if let Some(parsed) = errors.add_result(parse_field(field)) {
                    parsed
                } else {
                    continue;
                };
                let ty = &field.ty;
                match kind {
                    FieldKind::Ignored => continue,
                    FieldKind::Flatten => {
                        stmts.push(quote!(__scanner.embed(#name)?;));
                        bounds.push(syn::parse_quote!(#ty: ::optbind::Options));
                    }
                    FieldKind::Option(attrs) => {
                        let tag = expand_tag(&name.unraw().to_string(), attrs);
                        stmts.push(quote!(__scanner.field(#tag, #name)?;));
                        bounds.push(syn::parse_quote!(#ty: ::optbind::Bind));
                    }
                }
                bindings.push(name);
            }
            errors.fail()?;

            // generic fields need their bounds spelled out
            if generics.type_params().next().is_some() {
                generics.make_where_clause().predicates.extend(bounds);
            }
            quote!(
                let Self { #(#bindings,)* .. } = self;
                #(#stmts)*
                ::core::result::Result::Ok(())
            )
        }
        // enums, unions, tuple and unit structs are reported when scanned
        _ => {
            let container = ident.to_string();
            quote!(::core::result::Result::Err(
                ::optbind::Error::not_struct(#container)
            ))
        }
    };
    Ok(expand_impl(&ident, &generics, body))
}

fn expand_tag(field: &str, attrs: OptAttrs) -> TokenStream {
    let OptAttrs {
        short,
        long,
        description,
        default,
        optional,
    } = attrs;

    let mut tag = quote!(::optbind::Tag::new(#field));
    if let Some(short) = short {
        tag.extend(quote!(.short(#short)));
    }
    if let Some(long) = long {
        tag.extend(quote!(.long(#long)));
    }
    for line in description {
        tag.extend(quote!(.description(#line)));
    }
    if let Some(default) = default {
        tag.extend(quote!(.default_value(#default)));
    }
    if optional {
        tag.extend(quote!(.optional()));
    }
    tag
}

fn expand_impl(ident: &syn::Ident, generics: &syn::Generics, body: TokenStream) -> TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    quote!(
        #[automatically_derived]
        impl #impl_generics ::optbind::Options for #ident #ty_generics #where_clause {
            fn scan<'__a>(
                &'__a mut self,
                __scanner: &mut ::optbind::Scanner<'_, '__a>,
            ) -> ::optbind::Result<()> {
                #body
            }
        }
    )
}
