//! The enum column adapter: bind and result conversion between an
//! enumerated case and its stored integer scalar.

use std::collections::HashMap;

use sea_orm::sea_query::{ColumnDef, IntoIden};
use sea_orm::Value;

use crate::error::EnumColumnError;

/// A closed enumerated type with a fixed integer scalar per case.
///
/// Implementations are normally generated by [`crate::int_enum!`]; the
/// trait can also be implemented by hand for enums that already exist.
pub trait IntEnum: Copy + Eq + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// All cases in definition order.
    fn variants() -> &'static [Self];

    /// The storage scalar of this case.
    fn to_value(&self) -> i32;
}

/// Column construction options carried by an [`EnumColumn`] and preserved
/// exactly when the adapter is cloned for a duplicated column definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub nullable: bool,
    pub default: Option<i32>,
}

/// Bidirectional converter between an [`IntEnum`] and its stored scalar.
///
/// The reverse lookup table is built once at construction, so the result
/// direction is a single map probe per read. On the (invalid) chance two
/// cases share a scalar, the first case in definition order wins, same as
/// scanning the cases front to back.
#[derive(Debug, Clone)]
pub struct EnumColumn<E: IntEnum> {
    reverse: HashMap<i32, E>,
    spec: ColumnSpec,
}

impl<E: IntEnum> EnumColumn<E> {
    pub fn new() -> Self {
        Self::with_spec(ColumnSpec::default())
    }

    pub fn with_spec(spec: ColumnSpec) -> Self {
        let mut reverse = HashMap::with_capacity(E::variants().len());
        for case in E::variants() {
            reverse.entry(case.to_value()).or_insert(*case);
        }
        Self { reverse, spec }
    }

    /// Bind direction: the scalar stored for `case`.
    ///
    /// The input is a member of the type by construction, so this cannot
    /// fail.
    pub fn encode(&self, case: E) -> i32 {
        case.to_value()
    }

    /// Result direction: the case stored as `raw`.
    ///
    /// A scalar no case claims means enum/schema drift or a corrupt row;
    /// the caller gets a type error naming the value and the enum.
    pub fn decode(&self, raw: i32) -> Result<E, EnumColumnError> {
        self.reverse
            .get(&raw)
            .copied()
            .ok_or(EnumColumnError::UnknownValue {
                value: raw,
                enum_name: E::NAME,
            })
    }

    pub fn spec(&self) -> &ColumnSpec {
        &self.spec
    }

    /// Render the column this adapter describes: an integer column with
    /// the pass-through options applied.
    pub fn column_def<T: IntoIden>(&self, name: T) -> ColumnDef {
        let mut def = ColumnDef::new(name);
        def.integer();
        if !self.spec.nullable {
            def.not_null();
        }
        if let Some(value) = self.spec.default {
            def.default(Value::Int(Some(value)));
        }
        def
    }
}

impl<E: IntEnum> Default for EnumColumn<E> {
    fn default() -> Self {
        Self::new()
    }
}
