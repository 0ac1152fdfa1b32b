use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

/// Admin secret made available to the checker as request data.
#[derive(Clone)]
pub struct AdminKey(pub String);

/// Static API key sent in the `x-api-key` header.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "x-api-key",
    key_in = "header",
    checker = "admin_key_checker"
)]
#[allow(dead_code)]
pub struct AdminApiKey(pub ());

async fn admin_key_checker(req: &Request, api_key: ApiKey) -> Option<()> {
    let Some(expected) = req.data::<AdminKey>() else {
        tracing::error!("Admin key is not configured on the route");
        return None;
    };

    if keys_match(api_key.key.as_bytes(), expected.0.as_bytes()) {
        Some(())
    } else {
        tracing::warn!("Rejected admin request with invalid api key");
        None
    }
}

/// Compares without short-circuiting on the first differing byte.
fn keys_match(given: &[u8], expected: &[u8]) -> bool {
    given.len() == expected.len()
        && given
            .iter()
            .zip(expected)
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}
