use super::*;

#[test]
fn encode_component_escapes_spaces() {
    assert_eq!(encode_component("Chess Club"), "Chess%20Club");
}

#[test]
fn encode_component_escapes_email_reserved_chars() {
    assert_eq!(encode_component("a+b@x.com"), "a%2Bb%40x.com");
}

#[test]
fn encode_component_keeps_unreserved_set() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_escapes_path_and_query_delimiters() {
    assert_eq!(encode_component("a/b?c=d&e#f"), "a%2Fb%3Fc%3Dd%26e%23f");
}

#[test]
fn encode_component_encodes_utf8_bytes() {
    assert_eq!(encode_component("Café"), "Caf%C3%A9");
}

#[test]
fn encode_component_empty_is_empty() {
    assert_eq!(encode_component(""), "");
}

#[test]
fn encode_component_escapes_every_ascii_byte_outside_unreserved_set() {
    for byte in 0_u8..0x80 {
        let raw = char::from(byte).to_string();
        let unreserved = byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte);
        let expected = if unreserved { raw.clone() } else { format!("%{byte:02X}") };
        assert_eq!(encode_component(&raw), expected, "byte {byte:#04x}");
    }
}
