mod ad;
mod category;
mod category_field;
mod form;

pub use ad::*;
pub use category::*;
pub use category_field::*;
pub use form::*;

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
