// Key record codec and public-key renderings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use yasb_core::constants::KEY_RECORD_LEN;
    use yasb_core::keys::{
        decode_key_record, decode_public_point, embedding_tokens, encode_key_parts,
        encode_key_record, format_public_key_for_embedding, format_public_key_with_style,
        public_key_base64, public_key_hex, EmbedStyle, KeyError, KeyRecord, PrivateScalar,
        PublicPoint,
    };
    use yasb_core::scalar::{Scalar, ScalarError};
    use zeroize::Zeroizing;

    fn sample_record() -> KeyRecord {
        KeyRecord::new(
            PrivateScalar::new(Scalar::from_u128(0xDEAD_BEEF)),
            PublicPoint::new(Scalar::from_be_array([0x11; 32]), Scalar::from_be_array([0x22; 32])),
        )
    }

// # ✅ 1. Layout

    #[test]
    fn record_layout_is_d_qx_qy() {
        let bytes = encode_key_record(&sample_record());
        assert_eq!(bytes.len(), KEY_RECORD_LEN);
        assert!(bytes[..28].iter().all(|&b| b == 0));
        assert_eq!(&bytes[28..32], &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(bytes[32..64].iter().all(|&b| b == 0x11));
        assert!(bytes[64..96].iter().all(|&b| b == 0x22));
    }

    #[test]
    fn encode_decode_roundtrip() {
        let record = sample_record();
        let decoded = decode_key_record(&encode_key_record(&record)[..]).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn short_parts_are_left_padded() {
        // a 31-byte d must not be written at the field's left edge
        let d = [0x7Fu8; 31];
        let bytes = encode_key_parts(&d, &[1], &[2]).unwrap();
        assert_eq!(bytes[0], 0);
        assert_eq!(&bytes[1..32], &d);
        assert_eq!(bytes[63], 1);
        assert_eq!(bytes[95], 2);
    }

    #[test]
    fn encoded_record_is_wiped_on_drop() {
        // the secret-bearing buffer must stay wrapped so it is cleared on drop
        let wrapped: Zeroizing<[u8; KEY_RECORD_LEN]> = encode_key_record(&sample_record());
        let plain: &[u8; KEY_RECORD_LEN] = &wrapped;
        assert_eq!(&plain[28..32], &[0xDE, 0xAD, 0xBE, 0xEF]);

        let parts: Zeroizing<[u8; KEY_RECORD_LEN]> = encode_key_parts(&[0xDE, 0xAD, 0xBE, 0xEF], &[0x11; 32], &[0x22; 32]).unwrap();
        assert_eq!(*parts, *wrapped);
    }

// # ❌ 2. Rejections

    #[test]
    fn oversized_part_is_rejected() {
        let big = [0xFFu8; 33];
        let err = encode_key_parts(&[1], &big, &[2]).unwrap_err();
        assert_eq!(
            err,
            KeyError::Scalar { field: "qx", source: ScalarError::Encoding { significant: 33, width: 32 } }
        );
    }

    #[test]
    fn truncated_record_is_rejected() {
        let bytes = encode_key_record(&sample_record());
        assert!(matches!(
            decode_key_record(&bytes[..95]),
            Err(KeyError::Truncated { have: 95, need: 96 })
        ));
        assert!(matches!(decode_key_record(&[]), Err(KeyError::Truncated { have: 0, .. })));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = encode_key_record(&sample_record()).to_vec();
        bytes.extend_from_slice(b"junk");
        assert_eq!(decode_key_record(&bytes).unwrap(), sample_record());
    }

    #[test]
    fn public_point_only() {
        let bytes = encode_key_record(&sample_record());
        assert_eq!(decode_public_point(&bytes[..]).unwrap(), sample_record().public);
    }

    #[test]
    fn private_scalar_is_redacted() {
        let dbg = format!("{:?}", sample_record());
        assert!(dbg.contains("<redacted>"));
        assert!(!dbg.contains("deadbeef"));
    }

// # 🧾 3. Embedding format

    #[test]
    fn embedding_has_64_tokens_16_per_line() {
        let public = sample_record().public;
        let text = format_public_key_for_embedding(&public);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line.matches("0x").count(), 16);
            assert!(line.ends_with(','));
        }
        assert!(lines[0].starts_with("0x11, 0x11,"));
        assert!(lines[3].starts_with("0x22, 0x22,"));
    }

    #[test]
    fn embedding_keeps_leading_zero_bytes() {
        let public = PublicPoint::new(Scalar::from_u128(0xAB), Scalar::from_u128(0xCD));
        let tokens = embedding_tokens(&public);
        assert_eq!(tokens.len(), 64);
        assert_eq!(tokens[0], "0x00");
        assert_eq!(tokens[31], "0xab");
        assert_eq!(tokens[32], "0x00");
        assert_eq!(tokens[63], "0xcd");
    }

    #[test]
    fn c_macro_style_continues_lines() {
        let text = format_public_key_with_style(&sample_record().public, EmbedStyle::CMacro);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[..3].iter().all(|l| l.ends_with(", \\")));
        assert!(!lines[3].ends_with('\\'));
    }

    #[test]
    fn hex_and_base64_cover_both_coordinates() {
        let public = sample_record().public;
        let h = public_key_hex(&public);
        assert_eq!(h.len(), 128);
        assert!(h.starts_with(&"11".repeat(32)));
        assert!(h.ends_with(&"22".repeat(32)));
        assert_eq!(public_key_base64(&public).len(), 88);
    }

    proptest! {
        #[test]
        fn prop_key_round_trip(
            d in any::<[u8; 32]>(),
            qx in any::<[u8; 32]>(),
            qy in any::<[u8; 32]>(),
        ) {
            let bytes = encode_key_parts(&d, &qx, &qy).unwrap();
            let record = decode_key_record(&bytes[..]).unwrap();
            prop_assert_eq!(record.private.expose(), &Scalar::from_be_array(d));
            prop_assert_eq!(record.public.x, Scalar::from_be_array(qx));
            prop_assert_eq!(record.public.y, Scalar::from_be_array(qy));
        }

        #[test]
        fn prop_natural_length_parts_round_trip(
            d in proptest::collection::vec(any::<u8>(), 0..=32),
            qx in proptest::collection::vec(any::<u8>(), 0..=32),
        ) {
            let bytes = encode_key_parts(&d, &qx, &[]).unwrap();
            let record = decode_key_record(&bytes[..]).unwrap();
            prop_assert_eq!(record.private.expose(), &Scalar::from_be_slice(&d).unwrap());
            prop_assert_eq!(record.public.x, Scalar::from_be_slice(&qx).unwrap());
            prop_assert!(record.public.y.is_zero());
        }
    }
}
