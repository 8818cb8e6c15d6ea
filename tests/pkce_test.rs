use moodtunes::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);
}

#[test]
fn test_code_challenge_is_url_safe() {
    // URL-safe base64 without padding: no '+', '/' or trailing '='
    for verifier in ["a", "short", &generate_code_verifier()] {
        let challenge = generate_code_challenge(verifier);
        assert!(!challenge.contains('+'));
        assert!(!challenge.contains('/'));
        assert!(!challenge.ends_with('='));
        assert!(
            challenge
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        );
    }
}

#[test]
fn test_challenges_differ_for_fresh_verifiers() {
    let a = generate_code_challenge(&generate_code_verifier());
    let b = generate_code_challenge(&generate_code_verifier());
    assert_ne!(a, b);
}

#[test]
fn test_query_string_encodes_pairs() {
    let query = query_string([("q", "mood tunes"), ("type", "track")]);
    assert_eq!(query, "q=mood+tunes&type=track");

    let empty = query_string::<[(&str, &str); 0], &str, &str>([]);
    assert_eq!(empty, "");
}
