//! DHCP Unique Identifiers (RFC 8415 section 11, RFC 6355).
//!
//! A DUID is a tagged structure: a 2-byte type is followed by a layout that
//! depends on the type. The set of types is closed; a tag outside it is a
//! decode failure rather than an opaque fallback.
//!
//! ```text
//! DUID-LLT  | type=1 (2) | hw-type (2) | time (4) | link-layer address ... |
//! DUID-EN   | type=2 (2) | enterprise-number (4) | identifier ...         |
//! DUID-LL   | type=3 (2) | hw-type (2) | link-layer address ...            |
//! DUID-UUID | type=4 (2) | UUID (16)                                       |
//! ```

use crate::buffer::{Cursor, Writer};
use crate::error::Error;
use crate::field;
use crate::iana::HwType;
use alloc::vec::Vec;
use core::fmt;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// DUID type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum DuidType {
    /// Link-layer address plus time (1)
    Llt = 1,
    /// Vendor-assigned unique ID based on enterprise number (2)
    En = 2,
    /// Link-layer address (3)
    Ll = 3,
    /// UUID (4, RFC 6355)
    Uuid = 4,
}

impl DuidType {
    /// Convert a u16 value to a DuidType.
    ///
    /// # Returns
    /// * `Some(DuidType)` for 1 through 4
    /// * `None` for any other value
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(DuidType::Llt),
            2 => Some(DuidType::En),
            3 => Some(DuidType::Ll),
            4 => Some(DuidType::Uuid),
            _ => None,
        }
    }

    /// Convert the DuidType to its wire value.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

/// A decoded DUID.
///
/// Variable-length trailing fields (addresses, identifiers) have no length
/// of their own on the wire: they run to the end of the enclosing option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Duid {
    /// DUID-LLT
    Llt {
        /// Hardware type of the interface the address belongs to
        hw_type: HwType,
        /// Seconds since midnight (UTC), January 1, 2000, modulo 2^32
        time: u32,
        /// Link-layer address
        link_layer_addr: Vec<u8>,
    },
    /// DUID-EN
    En {
        /// IANA private enterprise number of the vendor
        enterprise_number: u32,
        /// Vendor-assigned identifier
        identifier: Vec<u8>,
    },
    /// DUID-LL
    Ll {
        /// Hardware type of the interface the address belongs to
        hw_type: HwType,
        /// Link-layer address
        link_layer_addr: Vec<u8>,
    },
    /// DUID-UUID
    Uuid {
        /// The 128-bit UUID in network byte order
        uuid: [u8; field::duid::UUID_LEN],
    },
}

impl Duid {
    /// Build a DUID-LL from a hardware type and address.
    pub fn new_ll(hw_type: HwType, link_layer_addr: &[u8]) -> Self {
        Duid::Ll {
            hw_type,
            link_layer_addr: link_layer_addr.to_vec(),
        }
    }

    /// Build a DUID-LLT from a hardware type, time and address.
    pub fn new_llt(hw_type: HwType, time: u32, link_layer_addr: &[u8]) -> Self {
        Duid::Llt {
            hw_type,
            time,
            link_layer_addr: link_layer_addr.to_vec(),
        }
    }

    /// The type tag of this DUID.
    pub fn duid_type(&self) -> DuidType {
        match self {
            Duid::Llt { .. } => DuidType::Llt,
            Duid::En { .. } => DuidType::En,
            Duid::Ll { .. } => DuidType::Ll,
            Duid::Uuid { .. } => DuidType::Uuid,
        }
    }

    /// Parse a DUID occupying all of `data`.
    ///
    /// # Errors
    /// * `Error::BufferTooShort` if `data` ends before a fixed field
    /// * `Error::UnknownVariant` if the type tag is not recognized
    /// * `Error::TrailingData` if a DUID-UUID is longer than 16 bytes
    ///
    /// # Example
    /// ```
    /// use dhcpv6_opt_wire::duid::Duid;
    /// use dhcpv6_opt_wire::iana::HwType;
    ///
    /// let duid = Duid::parse(&[0, 3, 0, 1, 0xde, 0xad, 0, 0, 0xbe, 0xef]).unwrap();
    /// assert_eq!(duid, Duid::new_ll(HwType::Ethernet, &[0xde, 0xad, 0, 0, 0xbe, 0xef]));
    /// assert_eq!(duid.to_string(), "DUID-LL{HWType=Ethernet HWAddr=de:ad:00:00:be:ef}");
    /// ```
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let tag = cursor.read_u16()?;
        let duid_type = DuidType::from_u16(tag).ok_or(Error::UnknownVariant(tag))?;

        match duid_type {
            DuidType::Llt => {
                let hw_type = HwType::from(cursor.read_u16()?);
                let time = cursor.read_u32()?;
                Ok(Duid::Llt {
                    hw_type,
                    time,
                    link_layer_addr: cursor.read_all().to_vec(),
                })
            }
            DuidType::En => {
                let enterprise_number = cursor.read_u32()?;
                Ok(Duid::En {
                    enterprise_number,
                    identifier: cursor.read_all().to_vec(),
                })
            }
            DuidType::Ll => {
                let hw_type = HwType::from(cursor.read_u16()?);
                Ok(Duid::Ll {
                    hw_type,
                    link_layer_addr: cursor.read_all().to_vec(),
                })
            }
            DuidType::Uuid => {
                let uuid = cursor.read_array::<{ field::duid::UUID_LEN }>()?;
                cursor.finish()?;
                Ok(Duid::Uuid { uuid })
            }
        }
    }

    /// Size of the encoded DUID, type tag included.
    pub fn buffer_len(&self) -> usize {
        field::duid::TYPE_LEN
            + match self {
                Duid::Llt { link_layer_addr, .. } => 2 + 4 + link_layer_addr.len(),
                Duid::En { identifier, .. } => 4 + identifier.len(),
                Duid::Ll { link_layer_addr, .. } => 2 + link_layer_addr.len(),
                Duid::Uuid { .. } => field::duid::UUID_LEN,
            }
    }

    /// Append the encoded DUID to `writer`.
    pub fn emit(&self, writer: &mut Writer) {
        writer.write_u16(self.duid_type().as_u16());
        match self {
            Duid::Llt {
                hw_type,
                time,
                link_layer_addr,
            } => {
                writer.write_u16((*hw_type).into());
                writer.write_u32(*time);
                writer.write_bytes(link_layer_addr);
            }
            Duid::En {
                enterprise_number,
                identifier,
            } => {
                writer.write_u32(*enterprise_number);
                writer.write_bytes(identifier);
            }
            Duid::Ll {
                hw_type,
                link_layer_addr,
            } => {
                writer.write_u16((*hw_type).into());
                writer.write_bytes(link_layer_addr);
            }
            Duid::Uuid { uuid } => writer.write_bytes(uuid),
        }
    }

    /// Encode the DUID into a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(self.buffer_len());
        self.emit(&mut writer);
        writer.into_inner()
    }
}

/// Colon-separated lowercase hex, as hardware addresses are usually written.
struct HexColon<'a>(&'a [u8]);

impl fmt::Display for HexColon<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Duid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Duid::Llt {
                hw_type,
                time,
                link_layer_addr,
            } => write!(
                f,
                "DUID-LLT{{HWType={} HWAddr={} Time={}}}",
                hw_type,
                HexColon(link_layer_addr),
                time
            ),
            Duid::En {
                enterprise_number,
                identifier,
            } => {
                write!(f, "DUID-EN{{EnterpriseNumber={} EnterpriseIdentifier=", enterprise_number)?;
                for byte in identifier {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "}}")
            }
            Duid::Ll {
                hw_type,
                link_layer_addr,
            } => write!(f, "DUID-LL{{HWType={} HWAddr={}}}", hw_type, HexColon(link_layer_addr)),
            Duid::Uuid { uuid } => {
                write!(f, "DUID-UUID{{UUID=")?;
                for (i, byte) in uuid.iter().enumerate() {
                    if matches!(i, 4 | 6 | 8 | 10) {
                        write!(f, "-")?;
                    }
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "}}")
            }
        }
    }
}
