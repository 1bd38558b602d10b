//! Property-based tests for the Yildiz layers, padding and modes.

use proptest::prelude::*;
use yildiz_core::padding::{pad, unpad};
use yildiz_core::round::{inv_mix, inv_permute, inv_substitute, mix, permute, substitute};
use yildiz_core::{decrypt_block, encrypt_block, expand_key, MasterKey, Mode, YildizCipher};

proptest! {
    #[test]
    fn substitute_inverts(block in any::<[u8; 16]>()) {
        let mut state = block;
        substitute(&mut state);
        inv_substitute(&mut state);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn permute_inverts(block in any::<[u8; 16]>()) {
        let mut state = block;
        permute(&mut state);
        inv_permute(&mut state);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn mix_inverts(block in any::<[u8; 16]>()) {
        let mut state = block;
        mix(&mut state);
        inv_mix(&mut state);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn block_round_trip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let rks = expand_key(&MasterKey::from(key));
        prop_assert_eq!(decrypt_block(&encrypt_block(&block, &rks), &rks), block);
    }

    #[test]
    fn padding_round_trip(data in prop::collection::vec(any::<u8>(), 0..=100)) {
        let padded = pad(&data);
        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert!(padded.len() - data.len() >= 1 && padded.len() - data.len() <= 16);
        prop_assert_eq!(unpad(&padded).unwrap(), &data[..]);
    }

    #[test]
    fn ecb_round_trip(key in ".*", data in prop::collection::vec(any::<u8>(), 0..=100)) {
        let cipher = YildizCipher::new(&key);
        let ct = cipher.encrypt(&data, Mode::Ecb);
        prop_assert_eq!(ct.len(), (data.len() / 16 + 1) * 32);
        prop_assert_eq!(cipher.decrypt(&ct, Mode::Ecb).unwrap(), data);
    }

    #[test]
    fn cbc_round_trip(key in ".*", data in prop::collection::vec(any::<u8>(), 0..=100)) {
        let cipher = YildizCipher::new(&key);
        let ct = cipher.encrypt(&data, Mode::Cbc);
        prop_assert_eq!(ct.len(), 32 + (data.len() / 16 + 1) * 32);
        prop_assert_eq!(cipher.decrypt(&ct, Mode::Cbc).unwrap(), data);
    }

    #[test]
    fn text_round_trip(key in ".*", text in ".*") {
        let cipher = YildizCipher::new(&key);
        for mode in [Mode::Ecb, Mode::Cbc] {
            let ct = cipher.encrypt(&text, mode);
            prop_assert_eq!(cipher.decrypt_text(&ct, mode).unwrap(), text.clone());
        }
    }

    #[test]
    fn ecb_is_deterministic(key in ".*", text in ".*") {
        let cipher = YildizCipher::new(&key);
        prop_assert_eq!(cipher.encrypt(&text, Mode::Ecb), cipher.encrypt(&text, Mode::Ecb));
    }
}
