// Fixed-width scalar encoding: the primitive every 32-byte field goes through.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use yasb_core::scalar::{trim_leading_zeros, write_fixed_be, Scalar, ScalarError};

// ## 1️⃣ Left padding

    #[test]
    fn short_value_is_right_aligned() {
        let s = Scalar::from_be_slice(&[0xAB, 0xCD]).unwrap();
        let bytes = s.to_be_bytes();
        assert!(bytes[..30].iter().all(|&b| b == 0));
        assert_eq!(&bytes[30..], &[0xAB, 0xCD]);
    }

    #[test]
    fn write_fixed_be_clears_stale_bytes() {
        let mut slot = [0xFFu8; 32];
        write_fixed_be(&mut slot, &[0x01]).unwrap();
        assert!(slot[..31].iter().all(|&b| b == 0));
        assert_eq!(slot[31], 0x01);
    }

    #[test]
    fn leading_zeros_in_input_are_accepted() {
        let mut input = vec![0u8; 40];
        input[39] = 7;
        let s = Scalar::from_be_slice(&input).unwrap();
        assert_eq!(s, Scalar::from_u128(7));
    }

    #[test]
    fn empty_input_is_zero() {
        let s = Scalar::from_be_slice(&[]).unwrap();
        assert!(s.is_zero());
        assert_eq!(s.significant_bytes(), &[] as &[u8]);
        assert_eq!(s.bit_len(), 0);
    }

// ## 2️⃣ Overflow is an error, never a truncation

    #[test]
    fn thirty_three_significant_bytes_rejected() {
        let mut input = [0u8; 33];
        input[0] = 1;
        let err = Scalar::from_be_slice(&input).unwrap_err();
        assert_eq!(err, ScalarError::Encoding { significant: 33, width: 32 });
    }

    #[test]
    fn write_fixed_be_rejects_small_slot() {
        let mut slot = [0u8; 4];
        assert!(matches!(
            write_fixed_be(&mut slot, &[1, 2, 3, 4, 5]),
            Err(ScalarError::Encoding { significant: 5, width: 4 })
        ));
    }

// ## 3️⃣ Natural form helpers

    #[test]
    fn bit_len_matches_value() {
        assert_eq!(Scalar::from_u128(1).bit_len(), 1);
        assert_eq!(Scalar::from_u128(0xFF).bit_len(), 8);
        assert_eq!(Scalar::from_u128(0x100).bit_len(), 9);
        assert_eq!(Scalar::from_be_array([0x80; 32]).bit_len(), 256);
    }

    #[test]
    fn trim_leading_zeros_keeps_interior_zeros() {
        assert_eq!(trim_leading_zeros(&[0, 0, 1, 0, 2]), &[1, 0, 2]);
    }

    #[test]
    fn debug_prints_hex() {
        let s = Scalar::from_u128(0xAB);
        let dbg = format!("{:?}", s);
        assert!(dbg.starts_with("Scalar(0x00"));
        assert!(dbg.ends_with("ab)"));
    }

    proptest! {
        #[test]
        fn prop_natural_bytes_round_trip(bytes in any::<[u8; 32]>()) {
            let full = Scalar::from_be_array(bytes);
            let natural = full.significant_bytes().to_vec();
            let back = Scalar::from_be_slice(&natural).unwrap();
            prop_assert_eq!(back, full);
        }
    }
}
