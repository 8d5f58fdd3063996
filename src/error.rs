use crate::Name;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The container cannot hold options, only structs with named fields can.
    #[error("`{container}` is not a struct with named fields")]
    NotStruct { container: Name },
    /// A short name must be exactly one character.
    #[error("short name of `{field}` must be a single character, found {short:?}")]
    ShortNameTooLong { field: Name, short: Name },
    /// Two fields declare the same short name.
    #[error("short name `-{short}` of `{field}` is already used by `{previous}`")]
    DuplicateShort {
        short: char,
        field: Name,
        previous: Name,
    },
    /// Two fields declare the same long name.
    #[error("long name `--{long}` of `{field}` is already used by `{previous}`")]
    DuplicateLong {
        long: Name,
        field: Name,
        previous: Name,
    },
    /// A value could not be converted into the type of its slot.
    #[error("invalid value {value:?} for `{option}`: {reason}")]
    Convert {
        option: String,
        value: String,
        reason: ConvertError,
    },
    /// Reported by a bound callback.
    #[error(transparent)]
    Callback(BoxError),
}

impl Error {
    pub fn not_struct(container: impl Into<Name>) -> Self {
        Self::NotStruct {
            container: container.into(),
        }
    }

    /// Returns `true` if this error was raised while building a group.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::NotStruct { .. }
                | Self::ShortNameTooLong { .. }
                | Self::DuplicateShort { .. }
                | Self::DuplicateLong { .. }
        )
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("{0}")]
    Invalid(BoxError),
    #[error("expected `key=value`")]
    MissingSeparator,
}

impl ConvertError {
    pub fn invalid(e: impl Into<BoxError>) -> Self {
        Self::Invalid(e.into())
    }
}
