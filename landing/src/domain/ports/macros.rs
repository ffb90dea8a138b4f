//! Generates the error enums returned by outbound ports.
//!
//! Each variant gets a `thiserror` message and a snake-case constructor whose
//! parameters accept `impl Into<T>`, so adapters can write
//! `AuthError::transport("connection reset")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $(#[doc = concat!("`", stringify!($field), "` detail.")] $field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        /// Sample error used to exercise the generated constructors.
        pub enum DispatchError {
            /// No fields.
            Busy => "dispatch already in flight",
            /// One string field.
            Rejected { message: String } => "dispatch rejected: {message}",
            /// Mixed field types.
            Throttled { message: String, retry_after_secs: u32 } =>
                "dispatch throttled for {retry_after_secs}s: {message}",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(DispatchError::busy(), DispatchError::Busy);
        assert_eq!(DispatchError::busy().to_string(), "dispatch already in flight");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = DispatchError::rejected("phone missing");
        assert_eq!(err.to_string(), "dispatch rejected: phone missing");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = DispatchError::throttled("slow down", 30_u32);
        assert_eq!(err.to_string(), "dispatch throttled for 30s: slow down");
    }
}
