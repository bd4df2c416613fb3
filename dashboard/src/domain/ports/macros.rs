//! Helper macro for declaring port error enums with snake-case constructors.

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
    //! Constructor coverage for generated port errors.
    define_port_error! {
        pub enum SamplePortError {
            Unreadable { key: String } => "cannot read {key}",
            Status { code: u16 } => "status {code}",
            Rejected { key: String, code: u16 } => "rejected {key} ({code})",
            Closed => "closed",
        }
    }

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = SamplePortError::unreadable("isLoggedIn");
        assert_eq!(err.to_string(), "cannot read isLoggedIn");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        let err = SamplePortError::status(404_u16);
        assert_eq!(err.to_string(), "status 404");
    }

    #[test]
    fn mixed_and_unit_variants_are_supported() {
        assert_eq!(
            SamplePortError::rejected("bookmarkedUsers", 7_u16).to_string(),
            "rejected bookmarkedUsers (7)"
        );
        assert_eq!(SamplePortError::closed(), SamplePortError::Closed);
    }
}
