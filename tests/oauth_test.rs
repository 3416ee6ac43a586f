use nowplaying::twitter::oauth::*;

// Example request from X's "Creating a signature" documentation.
const CONSUMER_KEY: &str = "xvz1evFS4wEEPTGEFPHBog";
const CONSUMER_SECRET: &str = "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw";
const TOKEN: &str = "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb";
const TOKEN_SECRET: &str = "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE";
const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
const URL: &str = "https://api.twitter.com/1.1/statuses/update.json";
const STATUS: &str = "Hello Ladies + Gentlemen, a signed OAuth request!";

#[test]
fn test_encode_keeps_unreserved_only() {
    assert_eq!(encode("a-b.c_d~e"), "a-b.c_d~e");
    assert_eq!(encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
    assert_eq!(encode("!*"), "%21%2A");
    assert_eq!(encode("é"), "%C3%A9");
}

#[test]
fn test_signature_matches_reference() {
    let params = [
        ("status", STATUS),
        ("include_entities", "true"),
        ("oauth_consumer_key", CONSUMER_KEY),
        ("oauth_nonce", NONCE),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", "1318622958"),
        ("oauth_token", TOKEN),
        ("oauth_version", "1.0"),
    ];

    let sig = signature("post", URL, &params, CONSUMER_SECRET, TOKEN_SECRET);
    assert_eq!(sig, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
}

#[test]
fn test_authorization_header_matches_reference() {
    let credentials = Credentials {
        consumer_key: CONSUMER_KEY,
        consumer_secret: CONSUMER_SECRET,
        token: TOKEN,
        token_secret: TOKEN_SECRET,
    };

    let header = authorization_header(
        "POST",
        URL,
        &[("status", STATUS), ("include_entities", "true")],
        &credentials,
        NONCE,
        1318622958,
    );

    assert!(header.starts_with("OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", "));
    assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
    assert!(header.contains("oauth_timestamp=\"1318622958\""));
    assert!(header.contains("oauth_version=\"1.0\""));

    // Request parameters are signed but not repeated in the header
    assert!(!header.contains("status"));
}

#[test]
fn test_generate_nonce() {
    let nonce = generate_nonce();
    assert_eq!(nonce.len(), 32);
    assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(nonce, generate_nonce());
}
