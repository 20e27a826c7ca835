use otpkit::auth_url::{self, AuthUrlOptions, OtpKind};
use otpkit::{base32, generate_secret, hotp, totp, Algorithm, Defaults, Secret, TotpOptions};

#[test]
fn rfc4226_appendix_d() {
    let secret = Secret::from_utf8("12345678901234567890").to_base32();
    let expected = [
        "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583", "399871",
        "520489",
    ];
    for (counter, code) in expected.iter().enumerate() {
        let counter = counter as u64;
        assert_eq!(
            hotp::generate(&secret, counter, 6, Algorithm::Sha1).unwrap(),
            *code
        );
        assert!(hotp::validate(&secret, code, counter, 6, Algorithm::Sha1, 0).unwrap());
    }
}

#[test]
fn rfc6238_appendix_b_sha256() {
    let secret = Secret::from_utf8("12345678901234567890123456789012").to_base32();
    for (time, code) in [
        (59, "46119246"),
        (1111111109, "68084774"),
        (1111111111, "67062674"),
        (1234567890, "91819424"),
        (2000000000, "90698825"),
    ] {
        assert_eq!(
            totp::generate(&secret, 30, 8, Algorithm::Sha256, time).unwrap(),
            code
        );
    }
}

#[test]
fn rfc6238_appendix_b_sha512_with_options() {
    let secret = Secret::from_utf8(
        "1234567890123456789012345678901234567890123456789012345678901234",
    )
    .to_base32();
    let defaults = Defaults {
        algorithm: Algorithm::Sha512,
        ..Defaults::default()
    };
    for (time, code) in [
        (59, "90693936"),
        (1111111109, "25091201"),
        (1111111111, "99943326"),
        (1234567890, "93441116"),
        (2000000000, "38618901"),
    ] {
        let options = TotpOptions {
            digits: Some(8),
            current_time: Some(time),
            ..TotpOptions::default()
        };
        assert_eq!(totp::generate_with(&secret, &options, &defaults).unwrap(), code);
        assert!(totp::validate_with(&secret, code, &options, &defaults).unwrap());
    }
}

#[test]
fn totp_window_edges() {
    let secret = Secret::from_utf8("12345678901234567890").to_base32();
    let period = 30;
    let now = 1111111109;
    // Code from three steps earlier
    let old = totp::generate(&secret, period, 8, Algorithm::Sha1, now - 3 * period).unwrap();
    assert!(totp::validate(&secret, &old, period, 8, Algorithm::Sha1, 3, now).unwrap());
    assert!(!totp::validate(&secret, &old, period, 8, Algorithm::Sha1, 2, now).unwrap());
    // Code from three steps later
    let new = totp::generate(&secret, period, 8, Algorithm::Sha1, now + 3 * period).unwrap();
    assert!(totp::validate(&secret, &new, period, 8, Algorithm::Sha1, 3, now).unwrap());
    assert!(!totp::validate(&secret, &new, period, 8, Algorithm::Sha1, 2, now).unwrap());
}

#[test]
fn generated_secret_is_usable() {
    let secret = generate_secret(20).unwrap();
    assert_eq!(base32::decode(&secret).len(), 20);
    let code = totp::generate(&secret, 30, 6, Algorithm::Sha1, 1_700_000_000).unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert!(totp::validate(&secret, &code, 30, 6, Algorithm::Sha1, 0, 1_700_000_000).unwrap());
}

#[test]
fn provisioning_url_example() {
    let options = AuthUrlOptions::new("JBSWY3DPEHPK3PXP")
        .with_label("alice@example.com")
        .with_issuer("Example");
    let url = auth_url::build(OtpKind::Totp, &options, &Defaults::default()).unwrap();
    assert!(url.starts_with(
        "otpauth://totp/alice%40example.com?issuer=Example&secret=JBSWY3DPEHPK3PXP\
         &algorithm=SHA1&digits=6&period=30"
    ));
}
