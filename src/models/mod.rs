pub mod project;
pub mod task;
pub mod user;
pub mod aggregate;

pub use project::*;
pub use task::*;
pub use user::*;
pub use aggregate::*;

use serde::{Deserialize, Deserializer};

/// Campo `null` vira o valor zero do tipo (`""`, `false`); ausente fica a cargo de `#[serde(default)]`
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
