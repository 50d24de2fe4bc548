//! IANA number spaces used by DHCPv6 options.
//!
//! Both spaces are open: values without a name are carried as `Unknown` so
//! that they survive a parse/emit round trip. The names only feed `Display`.

use core::fmt;

enum_with_unknown! {
    /// DHCPv6 option codes (RFC 8415 section 24 and later registrations).
    pub enum OptionCode(u16) {
        /// Client Identifier (1)
        ClientId = 1,
        /// Server Identifier (2)
        ServerId = 2,
        /// Identity Association for Non-temporary Addresses (3)
        IaNa = 3,
        /// Identity Association for Temporary Addresses (4)
        IaTa = 4,
        /// IA Address (5)
        IaAddr = 5,
        /// Option Request (6)
        Oro = 6,
        /// Preference (7)
        Preference = 7,
        /// Elapsed Time (8)
        ElapsedTime = 8,
        /// Relay Message (9)
        RelayMsg = 9,
        /// Authentication (11)
        Auth = 11,
        /// Server Unicast (12)
        Unicast = 12,
        /// Status Code (13)
        StatusCode = 13,
        /// Rapid Commit (14)
        RapidCommit = 14,
        /// User Class (15)
        UserClass = 15,
        /// Vendor Class (16)
        VendorClass = 16,
        /// Vendor-specific Information (17)
        VendorOpts = 17,
        /// Interface-Id (18)
        InterfaceId = 18,
        /// Reconfigure Message (19)
        ReconfMsg = 19,
        /// Reconfigure Accept (20)
        ReconfAccept = 20,
        /// DNS Recursive Name Server (23, RFC 3646)
        DnsServers = 23,
        /// Domain Search List (24, RFC 3646)
        DomainSearchList = 24,
        /// Identity Association for Prefix Delegation (25)
        IaPd = 25,
        /// IA Prefix (26)
        IaPrefix = 26,
        /// Information Refresh Time (32)
        InformationRefreshTime = 32,
        /// Fully Qualified Domain Name (39, RFC 4704)
        Fqdn = 39,
        /// Solicit Max Retransmission Time (82)
        SolMaxRt = 82,
        /// Information-request Max Retransmission Time (83)
        InfMaxRt = 83,
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::ClientId => write!(f, "Client ID"),
            Self::ServerId => write!(f, "Server ID"),
            Self::IaNa => write!(f, "IANA"),
            Self::IaTa => write!(f, "IATA"),
            Self::IaAddr => write!(f, "IA IP Address"),
            Self::Oro => write!(f, "Requested Options"),
            Self::Preference => write!(f, "Preference"),
            Self::ElapsedTime => write!(f, "Elapsed Time"),
            Self::RelayMsg => write!(f, "Relay Message"),
            Self::Auth => write!(f, "Authentication"),
            Self::Unicast => write!(f, "Server Unicast"),
            Self::StatusCode => write!(f, "Status Code"),
            Self::RapidCommit => write!(f, "Rapid Commit"),
            Self::UserClass => write!(f, "User Class"),
            Self::VendorClass => write!(f, "Vendor Class"),
            Self::VendorOpts => write!(f, "Vendor-specific Information"),
            Self::InterfaceId => write!(f, "Interface-Id"),
            Self::ReconfMsg => write!(f, "Reconfigure Message"),
            Self::ReconfAccept => write!(f, "Reconfigure Accept"),
            Self::DnsServers => write!(f, "DNS"),
            Self::DomainSearchList => write!(f, "Domain Search List"),
            Self::IaPd => write!(f, "IAPD"),
            Self::IaPrefix => write!(f, "IA Prefix"),
            Self::InformationRefreshTime => write!(f, "Information Refresh Time"),
            Self::Fqdn => write!(f, "FQDN"),
            Self::SolMaxRt => write!(f, "SOL_MAX_RT"),
            Self::InfMaxRt => write!(f, "INF_MAX_RT"),
            Self::Unknown(code) => write!(f, "unknown ({})", code),
        }
    }
}

enum_with_unknown! {
    /// ARP hardware types (IANA "Hardware Types" registry).
    pub enum HwType(u16) {
        /// Ethernet (10Mb)
        Ethernet = 1,
        /// Experimental Ethernet (3Mb)
        ExperimentalEthernet = 2,
        /// Amateur Radio AX.25
        AmateurRadioAx25 = 3,
        /// Proteon ProNET Token Ring
        ProteonTokenRing = 4,
        /// Chaos
        Chaos = 5,
        /// IEEE 802 Networks
        Ieee802 = 6,
        /// ARCNET
        Arcnet = 7,
        /// Hyperchannel
        Hyperchannel = 8,
        /// Lanstar
        Lanstar = 9,
        /// Autonet Short Address
        Autonet = 10,
        /// LocalTalk
        LocalTalk = 11,
        /// LocalNet
        LocalNet = 12,
        /// Ultra link
        UltraLink = 13,
        /// SMDS
        Smds = 14,
        /// Frame Relay
        FrameRelay = 15,
        /// Asynchronous Transmission Mode
        Atm = 16,
        /// HDLC
        Hdlc = 17,
        /// Fibre Channel
        FibreChannel = 18,
        /// Serial Line
        SerialLine = 20,
        /// MIL-STD-188-220
        MilStd188220 = 22,
        /// Metricom
        Metricom = 23,
        /// IEEE 1394.1995
        Ieee1394 = 24,
        /// MAPOS
        Mapos = 25,
        /// Twinaxial
        Twinaxial = 26,
        /// EUI-64
        Eui64 = 27,
        /// HIPARP
        Hiparp = 28,
        /// IP and ARP over ISO 7816-3
        Iso7816 = 29,
        /// ARPSec
        ArpSec = 30,
        /// IPsec tunnel
        IpsecTunnel = 31,
        /// InfiniBand
        Infiniband = 32,
        /// TIA-102 Project 25 Common Air Interface
        Cai = 33,
        /// Wiegand Interface
        Wiegand = 34,
        /// Pure IP
        PureIp = 35,
    }
}

impl fmt::Display for HwType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Ethernet => write!(f, "Ethernet"),
            Self::ExperimentalEthernet => write!(f, "Experimental Ethernet"),
            Self::AmateurRadioAx25 => write!(f, "Amateur Radio AX.25"),
            Self::ProteonTokenRing => write!(f, "Proteon ProNET Token Ring"),
            Self::Chaos => write!(f, "Chaos"),
            Self::Ieee802 => write!(f, "IEEE 802"),
            Self::Arcnet => write!(f, "ARCNET"),
            Self::Hyperchannel => write!(f, "Hyperchannel"),
            Self::Lanstar => write!(f, "Lanstar"),
            Self::Autonet => write!(f, "Autonet Short Address"),
            Self::LocalTalk => write!(f, "LocalTalk"),
            Self::LocalNet => write!(f, "LocalNet"),
            Self::UltraLink => write!(f, "Ultra link"),
            Self::Smds => write!(f, "SMDS"),
            Self::FrameRelay => write!(f, "Frame Relay"),
            Self::Atm => write!(f, "ATM"),
            Self::Hdlc => write!(f, "HDLC"),
            Self::FibreChannel => write!(f, "Fibre Channel"),
            Self::SerialLine => write!(f, "Serial Line"),
            Self::MilStd188220 => write!(f, "MIL-STD-188-220"),
            Self::Metricom => write!(f, "Metricom"),
            Self::Ieee1394 => write!(f, "IEEE 1394.1995"),
            Self::Mapos => write!(f, "MAPOS"),
            Self::Twinaxial => write!(f, "Twinaxial"),
            Self::Eui64 => write!(f, "EUI-64"),
            Self::Hiparp => write!(f, "HIPARP"),
            Self::Iso7816 => write!(f, "IP and ARP over ISO 7816-3"),
            Self::ArpSec => write!(f, "ARPSec"),
            Self::IpsecTunnel => write!(f, "IPsec tunnel"),
            Self::Infiniband => write!(f, "Infiniband"),
            Self::Cai => write!(f, "CAI TIA-102"),
            Self::Wiegand => write!(f, "Wiegand Interface"),
            Self::PureIp => write!(f, "Pure IP"),
            Self::Unknown(value) => write!(f, "unknown ({})", value),
        }
    }
}
