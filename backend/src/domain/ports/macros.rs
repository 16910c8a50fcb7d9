//! Helper macro for declaring driven-port error enums.
//!
//! Each variant names the domain [`ErrorCode`](crate::domain::ErrorCode) it
//! surfaces as, so services propagate adapter failures with `?` and callers
//! still see a distinct code per failure kind.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )?
                    => $message:literal as $code:ident
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Domain error code this failure surfaces as.
            pub fn code(&self) -> $crate::domain::ErrorCode {
                match self {
                    $( Self::$variant { .. } => $crate::domain::ErrorCode::$code, )*
                }
            }
        }

        impl From<$name> for $crate::domain::Error {
            fn from(value: $name) -> Self {
                $crate::domain::Error::new(value.code(), value.to_string())
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use crate::domain::{Error, ErrorCode};

    define_port_error! {
        pub enum ExamplePortError {
            Down { message: String } => "store down: {message}" as ServiceUnavailable,
            Retries { count: u32 } => "gave up after {count} attempts" as InternalError,
            Duplicate => "record already exists" as MaxCheckInsExceeded,
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::down("socket closed");
        assert_eq!(err.to_string(), "store down: socket closed");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::retries(3_u32);
        assert_eq!(err.to_string(), "gave up after 3 attempts");
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(ExamplePortError::duplicate(), ExamplePortError::Duplicate);
    }

    #[test]
    fn conversion_keeps_code_and_message() {
        let error: Error = ExamplePortError::down("socket closed").into();
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(error.message(), "store down: socket closed");

        let duplicate: Error = ExamplePortError::duplicate().into();
        assert_eq!(duplicate.code(), ErrorCode::MaxCheckInsExceeded);
    }
}
