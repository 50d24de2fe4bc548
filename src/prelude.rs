//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate,
//! allowing for convenient glob imports:
//!
//! ```
//! use dhcpv6_opt_wire::prelude::*;
//! ```

pub use crate::config::DecodeConfig;
pub use crate::duid::{Duid, DuidType};
pub use crate::error::{Error, LabelError};
pub use crate::frame::OptionFrame;
pub use crate::iana::{HwType, OptionCode};
pub use crate::label::{DomainName, DomainNameList};
pub use crate::options::{
    Dhcpv6Option, OptClientId, OptDomainSearchList, OptElapsedTime, OptFqdn, OptPreference,
    OptServerId, OptUnknown, OptionValue, ParseOption,
};
pub use crate::registry::Options;
