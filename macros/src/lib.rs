use syn::parse_macro_input;

#[macro_use]
mod util;
mod attrs;
mod expand;

/// Derives `optbind::Options` for a struct with named fields.
///
/// Fields marked with `#[opt(...)]` become options:
///
/// - `short = 'c'` or `short = "c"`: the short name;
/// - `long = "name"`, or bare `long` to use the field name in kebab-case;
/// - `description = "..."`: defaults to the field's doc comment;
/// - `default = "..."` and `optional`: the value of an omitted argument;
/// - `skip`: ignore the field;
/// - `flatten`: merge the options of a nested container.
///
/// ```ignore
/// use optbind::Options;
///
/// #[derive(Options)]
/// struct Cli {
///     /// Number of parallel jobs
///     #[opt(short = 'j', long, default = "4", optional)]
///     jobs: usize,
///     #[opt(flatten)]
///     log: Logging,
/// }
///
/// #[derive(Options)]
/// struct Logging {
///     #[opt(short = 'q', long)]
///     quiet: bool,
/// }
/// ```
#[proc_macro_derive(Options, attributes(opt))]
pub fn derive_options(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand::expand(parse_macro_input!(input as _))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
