use rand::RngCore;

/// Length of the random portion of a bearer token, in bytes. Rendered as
/// hex, so tokens are 40 characters on the wire.
const TOKEN_BYTES: usize = 20;

/// Generate an opaque bearer token. Tokens carry no embedded claims; they
/// are only meaningful as a lookup key into the `auth_tokens` table.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);

    let mut token = String::with_capacity(TOKEN_BYTES * 2);
    for byte in bytes {
        token.push_str(&format!("{:02x}", byte));
    }
    token
}
