/*
[INPUT]:  URL templates with :name placeholders and caller-supplied values
[OUTPUT]: Concrete request paths with every placeholder substituted
[POS]:    HTTP layer - URL template resolution
[UPDATE]: When endpoint templates gain new placeholder forms
*/

use std::collections::HashMap;

use crate::http::error::{MercadoPagoError, Result};

/// A URL path template with colon-prefixed placeholders, e.g.
/// `/checkout/preferences/:id`.
///
/// Placeholders occupy whole path segments. `resolve` substitutes each one
/// with the caller-supplied value and fails on a placeholder with no value,
/// so a resolved path never reaches the wire with a `:name` token left in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate<'a> {
    template: &'a str,
}

impl<'a> PathTemplate<'a> {
    pub fn new(template: &'a str) -> Self {
        Self { template }
    }

    /// Substitute every placeholder with its value from `params`.
    ///
    /// Entries in `params` that match no placeholder are ignored.
    pub fn resolve(&self, params: &HashMap<String, String>) -> Result<String> {
        if !self.template.contains(':') {
            return Ok(self.template.to_string());
        }

        let mut segments = Vec::new();
        for segment in self.template.split('/') {
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value = params.get(name).ok_or_else(|| {
                        MercadoPagoError::MissingPathParam {
                            name: name.to_string(),
                        }
                    })?;
                    segments.push(value.as_str());
                }
                None => segments.push(segment),
            }
        }

        Ok(segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn params(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[rstest]
    #[case("/checkout/preferences/:id", &[("id", "123")], "/checkout/preferences/123")]
    #[case(
        "/point/integration-api/devices/:device_id/payment-intents",
        &[("device_id", "dev-1")],
        "/point/integration-api/devices/dev-1/payment-intents"
    )]
    #[case(
        "/point/integration-api/devices/:device_id/payment-intents/:payment_intent_id",
        &[("device_id", "dev-1"), ("payment_intent_id", "intent-9")],
        "/point/integration-api/devices/dev-1/payment-intents/intent-9"
    )]
    fn test_resolves_all_placeholders(
        #[case] template: &str,
        #[case] entries: &[(&str, &str)],
        #[case] expected: &str,
    ) {
        let resolved = PathTemplate::new(template)
            .resolve(&params(entries))
            .expect("resolve failed");
        assert_eq!(resolved, expected);
        assert!(!resolved.contains(':'));
    }

    #[test]
    fn test_template_without_placeholders_passes_through() {
        let resolved = PathTemplate::new("/v1/payments/search")
            .resolve(&HashMap::new())
            .expect("resolve failed");
        assert_eq!(resolved, "/v1/payments/search");
    }

    #[test]
    fn test_missing_placeholder_value_fails() {
        let err = PathTemplate::new("/v1/payments/:id")
            .resolve(&HashMap::new())
            .expect_err("resolve should fail");
        match err {
            MercadoPagoError::MissingPathParam { name } => assert_eq!(name, "id"),
            other => panic!("Expected MissingPathParam, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_params_are_ignored() {
        let resolved = PathTemplate::new("/v1/payments/:id")
            .resolve(&params(&[("id", "42"), ("unused", "x")]))
            .expect("resolve failed");
        assert_eq!(resolved, "/v1/payments/42");
    }
}
