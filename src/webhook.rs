//! Verification of the `X-Razorpay-Signature` header sent with webhooks.

use crate::Error;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "X-Razorpay-Signature";

/// Checks that `signature` is the lowercase hex HMAC-SHA256 of `body` keyed with `secret`.
///
/// `body` must be the raw request body, byte for byte as received. Arguments are optional
/// so that a missing header can be passed straight through: any `None` fails with
/// [`Error::Validation`], while empty strings are valid inputs.
///
/// The digest comparison runs in constant time.
pub fn validate_webhook_signature(
    body: Option<&str>,
    signature: Option<&str>,
    secret: Option<&str>,
) -> Result<bool, Error> {
    let (body, signature, secret) = match (body, signature, secret) {
        (Some(body), Some(signature), Some(secret)) => (body, signature, secret),
        _ => {
            return Err(Error::Validation(
                "Invalid Parameters: Please give request body, signature sent in header and webhook secret"
                    .to_string(),
            ))
        }
    };

    // Only the exact lowercase encoding of the digest is accepted
    if !signature
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    {
        return Ok(false);
    }
    let expected = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => return Ok(false),
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::Other(anyhow::anyhow!("Failed to create HMAC: {}", e)))?;
    mac.update(body.as_bytes());

    Ok(mac.verify_slice(&expected).is_ok())
}
