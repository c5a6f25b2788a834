//! Declares an integer-backed enum and wires it into SeaORM.
//!
//! The generated type carries an [`crate::IntEnum`] implementation, a
//! shared [`crate::EnumColumn`] built on first use, and the SeaORM value
//! traits needed for the type to sit in an entity model with
//! `column_type = "Integer"`: `From<E> for Value` for the bind direction,
//! `TryGetable` for the result direction, plus `ValueType` and
//! `Nullable`.

/// Declare an integer-backed enum column type.
///
/// ```
/// enum_column::int_enum! {
///     pub enum Priority as "Priority" {
///         Low = 0,
///         High = 9,
///     }
/// }
///
/// assert_eq!(Priority::column().encode(Priority::High), 9);
/// ```
#[macro_export]
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $enum_name:literal {
            $($(#[$variant_meta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Shared adapter for this enum, built on first use.
            $vis fn column() -> &'static $crate::EnumColumn<$name> {
                static COLUMN: $crate::once_cell::sync::Lazy<$crate::EnumColumn<$name>> =
                    $crate::once_cell::sync::Lazy::new($crate::EnumColumn::new);
                $crate::once_cell::sync::Lazy::force(&COLUMN)
            }
        }

        impl $crate::IntEnum for $name {
            const NAME: &'static str = $enum_name;

            fn variants() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn to_value(&self) -> i32 {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl ::std::convert::From<$name> for $crate::sea_orm::Value {
            fn from(case: $name) -> Self {
                $crate::sea_orm::Value::Int(::std::option::Option::Some(
                    $name::column().encode(case),
                ))
            }
        }

        impl $crate::sea_orm::TryGetable for $name {
            fn try_get_by<I: $crate::sea_orm::ColIdx>(
                res: &$crate::sea_orm::QueryResult,
                idx: I,
            ) -> ::std::result::Result<Self, $crate::sea_orm::TryGetError> {
                let raw = <i32 as $crate::sea_orm::TryGetable>::try_get_by(res, idx)?;
                $name::column()
                    .decode(raw)
                    .map_err(|err| $crate::sea_orm::TryGetError::DbErr(err.into()))
            }
        }

        impl $crate::sea_orm::sea_query::ValueType for $name {
            fn try_from(
                v: $crate::sea_orm::Value,
            ) -> ::std::result::Result<Self, $crate::sea_orm::sea_query::ValueTypeErr> {
                let raw = <i32 as $crate::sea_orm::sea_query::ValueType>::try_from(v)?;
                $name::column()
                    .decode(raw)
                    .map_err(|_| $crate::sea_orm::sea_query::ValueTypeErr)
            }

            fn type_name() -> ::std::string::String {
                ::std::stringify!($name).to_owned()
            }

            fn array_type() -> $crate::sea_orm::sea_query::ArrayType {
                $crate::sea_orm::sea_query::ArrayType::Int
            }

            fn column_type() -> $crate::sea_orm::sea_query::ColumnType {
                $crate::sea_orm::sea_query::ColumnType::Integer
            }
        }

        impl $crate::sea_orm::sea_query::Nullable for $name {
            fn null() -> $crate::sea_orm::Value {
                $crate::sea_orm::Value::Int(::std::option::Option::None)
            }
        }
    };
}
