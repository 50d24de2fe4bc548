#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! # dhcpv6-opt-wire
//!
//! This crate decodes the options area of a DHCPv6 message into typed
//! options, and encodes them back byte for byte. It is a `no_std` crate that
//! needs `alloc`: decoded options own their data.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - Exact round trip, unknown option codes included
//! - Every short read reported as the single [`error::Error::BufferTooShort`]
//! - Static decoder registry, no lock on the decode path
//! - Optional `log` tracing (the `log` feature, on by default)
//!
//! ## Architecture
//!
//! - `frame` - Zero-copy wrapper around one `(code, length, value)` frame
//! - `registry` - Code to decoder table and the [`registry::Options`] collection
//! - `options` - The option contract and the typed options
//! - `duid` - DHCP Unique Identifier variants
//! - `label` - RFC 1035 label sequences (domain names)
//! - `buffer` - Big-endian read cursor and writer
//! - `iana` - Option codes and hardware types
//! - `field` - Field offset definitions
//!
//! ## Example
//!
//! ```
//! use dhcpv6_opt_wire::prelude::*;
//!
//! let data = [
//!     0x00, 0x01, 0x00, 0x0A, 0x00, 0x03, 0x00, 0x01, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
//! ];
//! let options = Options::from_bytes(&data).unwrap();
//! let duid = options.client_id().unwrap();
//! assert_eq!(duid.to_string(), "DUID-LL{HWType=Ethernet HWAddr=00:01:02:03:04:05}");
//! assert_eq!(options.to_bytes().unwrap(), data);
//! ```

extern crate alloc;

#[macro_use]
mod macros;

/// Bounds-checked big-endian cursor and growable writer.
pub mod buffer;

/// Decode limits.
pub mod config;

/// DHCP Unique Identifier (DUID) variants.
pub mod duid;

/// Error type for parsing and encoding failures.
pub mod error;

/// Field offset definitions for the wire format.
pub mod field;

/// Zero-copy option frame wrapper.
pub mod frame;

/// Option codes and hardware types.
pub mod iana;

/// Domain names in label-sequence encoding.
pub mod label;

/// DHCPv6 option types.
pub mod options;

/// Option decoder registry and the options collection.
pub mod registry;

/// Prelude module for convenient imports.
pub mod prelude;
