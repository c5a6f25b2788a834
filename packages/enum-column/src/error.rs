use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the result (read) direction.
///
/// The bind direction is infallible: a case always has a scalar. Reading
/// is where enum/schema drift or corrupt rows surface, and those are
/// fatal to the calling operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumColumnError {
    #[error("cannot map INT value '{value}' to enum '{enum_name}'")]
    UnknownValue { value: i32, enum_name: &'static str },
}

impl EnumColumnError {
    pub fn unknown_value(value: i32, enum_name: &'static str) -> Self {
        Self::UnknownValue { value, enum_name }
    }
}

impl From<EnumColumnError> for DbErr {
    fn from(err: EnumColumnError) -> Self {
        DbErr::Type(err.to_string())
    }
}
