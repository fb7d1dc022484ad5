#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::format::PnmVariant;

impl Serialize for PnmVariant {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // variant serialization is simply its debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}
