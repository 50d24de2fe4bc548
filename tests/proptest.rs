//! Property-based tests using proptest

use dhcpv6_opt_wire::frame::frames;
use dhcpv6_opt_wire::prelude::*;
use dhcpv6_opt_wire::registry::is_registered;
use proptest::prelude::*;

fn arb_duid() -> impl Strategy<Value = Duid> {
    prop_oneof![
        (any::<u16>(), prop::collection::vec(any::<u8>(), 0..32))
            .prop_map(|(hw, addr)| Duid::new_ll(HwType::from(hw), &addr)),
        (any::<u16>(), any::<u32>(), prop::collection::vec(any::<u8>(), 0..32))
            .prop_map(|(hw, time, addr)| Duid::new_llt(HwType::from(hw), time, &addr)),
        (any::<u32>(), prop::collection::vec(any::<u8>(), 0..32)).prop_map(
            |(enterprise_number, identifier)| Duid::En {
                enterprise_number,
                identifier,
            }
        ),
        any::<[u8; 16]>().prop_map(|uuid| Duid::Uuid { uuid }),
    ]
}

fn arb_domain_name() -> impl Strategy<Value = DomainName> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 1..20), 0..5)
        .prop_map(|labels| DomainName::new(labels).unwrap())
}

fn arb_unknown() -> impl Strategy<Value = OptUnknown> {
    (any::<u16>(), prop::collection::vec(any::<u8>(), 0..64))
        .prop_filter("code must have no decoder", |(code, _)| {
            !is_registered(OptionCode::from(*code))
        })
        .prop_map(|(code, data)| OptUnknown {
            code: OptionCode::from(code),
            data,
        })
}

fn arb_option() -> impl Strategy<Value = OptionValue> {
    prop_oneof![
        arb_duid().prop_map(|duid| OptionValue::from(OptClientId::new(duid))),
        arb_duid().prop_map(|duid| OptionValue::from(OptServerId::new(duid))),
        any::<u8>().prop_map(|preference| OptionValue::from(OptPreference { preference })),
        any::<u16>().prop_map(|centiseconds| OptionValue::from(OptElapsedTime { centiseconds })),
        prop::collection::vec(arb_domain_name(), 0..4).prop_map(|names| {
            OptionValue::from(OptDomainSearchList {
                domains: DomainNameList::new(names),
            })
        }),
        (any::<u8>(), arb_domain_name())
            .prop_map(|(flags, domain_name)| OptionValue::from(OptFqdn { flags, domain_name })),
        arb_unknown().prop_map(OptionValue::from),
    ]
}

proptest! {
    #[test]
    fn prop_round_trip_encode_decode(
        values in prop::collection::vec(arb_option(), 0..8)
    ) {
        let options: Options = values.into_iter().collect();
        let encoded = options.to_bytes().unwrap();
        prop_assert_eq!(encoded.len(), options.buffer_len());

        let decoded = Options::from_bytes(&encoded).unwrap();
        prop_assert_eq!(&decoded, &options);
        prop_assert_eq!(decoded.to_bytes().unwrap(), encoded);
    }

    #[test]
    fn prop_frame_length_matches_value(option in arb_option()) {
        let value = option.to_bytes();
        let options: Options = core::iter::once(option).collect();
        let encoded = options.to_bytes().unwrap();
        prop_assert_eq!(encoded.len(), 4 + value.len());

        let mut iter = frames(&encoded);
        let frame = iter.next().unwrap().unwrap();
        prop_assert_eq!(frame.length() as usize, value.len());
        prop_assert_eq!(frame.value(), &value[..]);
        prop_assert!(iter.next().is_none());
    }

    #[test]
    fn prop_strict_prefix_is_truncated(option in arb_option()) {
        let options: Options = core::iter::once(option).collect();
        let encoded = options.to_bytes().unwrap();
        for end in 1..encoded.len() {
            prop_assert_eq!(Options::from_bytes(&encoded[..end]), Err(Error::BufferTooShort));
        }
    }

    #[test]
    fn prop_unknown_code_passthrough(unknown in arb_unknown()) {
        let mut encoded = Vec::new();
        encoded.extend_from_slice(&u16::from(unknown.code).to_be_bytes());
        encoded.extend_from_slice(&(unknown.data.len() as u16).to_be_bytes());
        encoded.extend_from_slice(&unknown.data);

        let decoded = Options::from_bytes(&encoded).unwrap();
        prop_assert_eq!(decoded.iter().next(), Some(&OptionValue::Unknown(unknown)));
        prop_assert_eq!(decoded.to_bytes().unwrap(), encoded);
    }

    #[test]
    fn prop_unknown_duid_type_rejected(
        tag in prop_oneof![Just(0u16), 5u16..],
        rest in prop::collection::vec(any::<u8>(), 0..32)
    ) {
        let mut data = tag.to_be_bytes().to_vec();
        data.extend_from_slice(&rest);
        prop_assert_eq!(Duid::parse(&data), Err(Error::UnknownVariant(tag)));
        prop_assert_eq!(OptClientId::from_bytes(&data), Err(Error::UnknownVariant(tag)));
    }

    #[test]
    fn prop_decode_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..1024)
    ) {
        // Should either succeed or return an error, never panic
        if let Ok(options) = Options::from_bytes(&data) {
            prop_assert_eq!(options.to_bytes().unwrap(), data);
        }
    }
}
