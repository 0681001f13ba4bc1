use channel_claims::{sign_claim, Amount, Error};

const GOOD_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const GOOD_ADDRESS: &str = "0xC573C58EfFCdE6f66034566Be7f00153082cE2DB";

#[test]
fn short_and_long_keys_are_rejected() {
    let amount = Amount::from(1u8);
    for (key, length) in [("ab".repeat(31), 31), ("ab".repeat(33), 33)] {
        assert_eq!(
            sign_claim(&key, GOOD_ADDRESS, &amount).unwrap_err(),
            Error::InvalidKeyLength { length }
        );
    }
}

#[test]
fn short_and_long_addresses_are_rejected() {
    let amount = Amount::from(1u8);
    for (address, length) in [("cd".repeat(19), 19), ("cd".repeat(21), 21)] {
        assert_eq!(
            sign_claim(GOOD_KEY, &address, &amount).unwrap_err(),
            Error::InvalidAddressLength { length }
        );
    }
}

#[test]
fn non_hex_inputs_are_rejected() {
    let amount = Amount::from(1u8);
    assert!(matches!(
        sign_claim("0xgg", GOOD_ADDRESS, &amount),
        Err(Error::InvalidHexEncoding(_))
    ));
    assert!(matches!(
        sign_claim(GOOD_KEY, "wat", &amount),
        Err(Error::InvalidHexEncoding(_))
    ));
}

#[test]
fn out_of_range_scalars_pass_validation_and_fail_in_the_signer() {
    // All-zero and all-FF scalars are the right length, so the validator
    // accepts them; the signing backend rejects them.
    let amount = Amount::from(1u8);
    for key in ["00".repeat(32), "ff".repeat(32)] {
        assert!(matches!(
            sign_claim(&key, GOOD_ADDRESS, &amount),
            Err(Error::SigningFailure { .. })
        ));
    }
}
