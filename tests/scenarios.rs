//! End-to-end decode and encode of whole options areas.

use dhcpv6_opt_wire::prelude::*;

#[test]
fn test_client_id_ll_round_trip() {
    let data = [
        0x00, 0x01, 0x00, 0x0A, 0x00, 0x03, 0x00, 0x01, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
    ];
    let options = Options::from_bytes(&data).unwrap();
    assert_eq!(options.len(), 1);

    let duid = options.client_id().unwrap();
    assert_eq!(duid.duid_type(), DuidType::Ll);
    assert_eq!(
        duid,
        &Duid::Ll {
            hw_type: HwType::Ethernet,
            link_layer_addr: vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05],
        }
    );
    assert_eq!(options.to_bytes().unwrap(), data);
}

#[test]
fn test_empty_input() {
    let options = Options::from_bytes(&[]).unwrap();
    assert!(options.is_empty());
    assert!(options.to_bytes().unwrap().is_empty());
}

#[test]
fn test_truncated_value() {
    let err = Options::from_bytes(&[0x00, 0x01, 0x00, 0x01, 0x00]).unwrap_err();
    assert_eq!(err, Error::BufferTooShort);
    assert!(err.is_truncated());
}

#[test]
fn test_fqdn_round_trip() {
    let mut value = vec![0x00];
    value.extend_from_slice(&[3, b'w', b'w', b'w']);
    value.extend_from_slice(&[7, b'e', b'x', b'a', b'm', b'p', b'l', b'e']);
    value.extend_from_slice(&[3, b'c', b'o', b'm', 0]);

    let mut data = vec![0x00, 0x27, 0x00, value.len() as u8];
    data.extend_from_slice(&value);

    let options = Options::from_bytes(&data).unwrap();
    let fqdn = options.fqdn().unwrap();
    assert_eq!(fqdn.flags, 0);
    assert_eq!(fqdn.domain_name.to_string(), "www.example.com.");
    assert_eq!(options.to_bytes().unwrap(), data);
}

#[test]
fn test_fqdn_non_ascii_label_round_trip() {
    let data = [0x00, 0x27, 0x00, 0x07, 0x00, 4, b'c', b'a', b'f', 0xE9, 0];
    let options = Options::from_bytes(&data).unwrap();
    let fqdn = options.fqdn().unwrap();
    assert_eq!(fqdn.domain_name.labels(), [vec![b'c', b'a', b'f', 0xE9]]);
    assert_eq!(fqdn.domain_name.to_string(), "caf\\233.");
    assert_eq!(options.to_bytes().unwrap(), data);
}

#[test]
fn test_client_id_from_bytes_cases() {
    let ll = [0, 3, 0, 1, 0, 1, 2, 3, 4, 5];
    let opt = OptClientId::from_bytes(&ll).unwrap();
    assert_eq!(opt.duid, Duid::new_ll(HwType::Ethernet, &[0, 1, 2, 3, 4, 5]));

    let llt = [0, 1, 0, 1, 0, 0, 0, 42, 0xde, 0xad];
    let opt = OptClientId::from_bytes(&llt).unwrap();
    assert_eq!(opt.duid, Duid::new_llt(HwType::Ethernet, 42, &[0xde, 0xad]));
    assert_eq!(opt.to_bytes(), llt);

    let mut uuid = vec![0, 4];
    uuid.extend(0u8..16);
    let opt = OptClientId::from_bytes(&uuid).unwrap();
    assert_eq!(opt.duid.duid_type(), DuidType::Uuid);
    assert_eq!(opt.to_bytes(), uuid);

    uuid.push(0xFF);
    assert_eq!(OptClientId::from_bytes(&uuid), Err(Error::TrailingData));
}

#[test]
fn test_client_id_from_bytes_invalid() {
    assert_eq!(OptClientId::from_bytes(&[0]), Err(Error::BufferTooShort));
    assert_eq!(OptClientId::from_bytes(&[0, 3, 0]), Err(Error::BufferTooShort));
    assert_eq!(OptClientId::from_bytes(&[0, 4, 1, 2, 3]), Err(Error::BufferTooShort));
    assert_eq!(OptClientId::from_bytes(&[0, 9, 0, 0]), Err(Error::UnknownVariant(9)));
}

#[test]
fn test_client_id_display() {
    let opt = OptClientId::new(Duid::new_ll(HwType::Ethernet, &[0xde, 0xad, 0, 0, 0xbe, 0xef]));
    assert_eq!(opt.to_string(), "Client ID: DUID-LL{HWType=Ethernet HWAddr=de:ad:00:00:be:ef}");
}

#[test]
fn test_mixed_message_keeps_order() {
    let mut options = Options::new();
    options.add(OptClientId::new(Duid::new_ll(HwType::Ethernet, &[1, 2, 3, 4, 5, 6])));
    options.add(OptUnknown {
        code: OptionCode::Oro,
        data: vec![0x00, 0x17, 0x00, 0x18],
    });
    options.add(OptElapsedTime { centiseconds: 0 });
    options.add(OptServerId::new(Duid::En {
        enterprise_number: 32473,
        identifier: vec![0xAB],
    }));
    options.add(OptDomainSearchList {
        domains: DomainNameList::new(vec![
            DomainName::from_dotted("example.com").unwrap(),
            DomainName::from_dotted("example.org.").unwrap(),
        ]),
    });

    let bytes = options.to_bytes().unwrap();
    assert_eq!(bytes.len(), options.buffer_len());
    assert_eq!(&bytes[..4], &[0x00, 0x01, 0x00, 0x0A]);

    let decoded = Options::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, options);
    let codes: Vec<OptionCode> = decoded.iter().map(|opt| opt.code()).collect();
    assert_eq!(
        codes,
        [
            OptionCode::ClientId,
            OptionCode::Oro,
            OptionCode::ElapsedTime,
            OptionCode::ServerId,
            OptionCode::DomainSearchList,
        ]
    );
}

#[test]
fn test_unregistered_code_passthrough() {
    let data = [0xFF, 0x00, 0x00, 0x02, 0xC0, 0x0C];
    let options = Options::from_bytes(&data).unwrap();
    match options.iter().next() {
        Some(OptionValue::Unknown(opt)) => {
            assert_eq!(opt.code, OptionCode::Unknown(0xFF00));
            assert_eq!(opt.data, [0xC0, 0x0C]);
        }
        other => panic!("expected an opaque option, got {:?}", other),
    }
    assert_eq!(options.to_bytes().unwrap(), data);
}

#[test]
fn test_failure_is_atomic() {
    // Valid Preference, then a frame whose declared length runs off the end.
    let data = [0x00, 0x07, 0x00, 0x01, 0x05, 0x00, 0x08, 0x00, 0x04, 0x00];
    assert_eq!(Options::from_bytes(&data), Err(Error::BufferTooShort));
}

#[test]
fn test_options_display() {
    let options: Options = [
        OptionValue::from(OptPreference { preference: 10 }),
        OptionValue::from(OptFqdn {
            flags: 1,
            domain_name: DomainName::from_dotted("host.example.com").unwrap(),
        }),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        options.to_string(),
        "Options: [Preference: 10, FQDN: {Flags=1 DomainName=host.example.com.}]"
    );
}
