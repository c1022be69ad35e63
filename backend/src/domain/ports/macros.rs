//! `define_port_error!`, the generator behind `EntityStoreError` and
//! `CountryDirectoryError`.
//!
//! A variant is written as `Name { field: Type } => "message"`. The macro
//! emits the enum with `thiserror` messages plus one snake_case constructor
//! per variant, so adapters write `EntityStoreError::duplicate_id(id)` or
//! `CountryDirectoryError::status(503_u16, preview)` instead of struct
//! literals. Constructor arguments take `impl Into<Type>`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
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
                $variant $( { $($field : $ty),* } )?,
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
    //! Constructor and message coverage for generated port errors.
    define_port_error! {
        pub enum LookupPortError {
            Unreachable => "lookup backend unreachable",
            Missing { key: String } => "lookup key missing: {key}",
            Conflict { id: i32 } => "lookup id {id} already taken",
            Rejected { key: String, status: u16 } => "lookup of {key} rejected with {status}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        let err = LookupPortError::unreachable();
        assert_eq!(err, LookupPortError::Unreachable);
        assert_eq!(err.to_string(), "lookup backend unreachable");
    }

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = LookupPortError::missing("germany");
        assert_eq!(err.to_string(), "lookup key missing: germany");
    }

    #[test]
    fn integer_fields_keep_their_type() {
        let err = LookupPortError::conflict(42);
        assert_eq!(err, LookupPortError::Conflict { id: 42 });
    }

    #[test]
    fn mixed_fields_render_in_order() {
        let err = LookupPortError::rejected("de", 503_u16);
        assert_eq!(err.to_string(), "lookup of de rejected with 503");
    }
}
