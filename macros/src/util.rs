macro_rules! syn_error {
    ($span:expr, $fmt:literal, $($args:tt)+) => {
        ::syn::Error::new($span, format!($fmt, $($args)*))
    };
    ($span:expr, $msg:expr $(,)?) => {
        ::syn::Error::new($span, $msg)
    };
}

/// Collects every error of an input instead of stopping at the first one.
#[derive(Default)]
pub(crate) struct Errors(Option<syn::Error>);

impl Errors {
    pub fn add(&mut self, e: syn::Error) {
        if let Some(err) = self.0.as_mut() {
            err.combine(e);
        } else {
            self.0 = Some(e);
        }
    }

    pub fn add_result<T>(&mut self, res: syn::Result<T>) -> Option<T> {
        match res {
            Ok(t) => Some(t),
            Err(e) => {
                self.add(e);
                None
            }
        }
    }

    pub fn fail(self) -> syn::Result<()> {
        match self.0 {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
