//! Query-string assembly for the campaign webhook
//!
//! Every parameter is always present (empty string when unset) and appears
//! in a fixed order, so two submissions of the same data at the same instant
//! produce byte-identical URLs. Encoding is `application/x-www-form-urlencoded`
//! (space becomes `+`, `,` becomes `%2C`), which is what the n8n flow was
//! built against.

use campaigner_core::prelude::*;
use campaigner_core::{CampaignData, FilterField};
use url::Url;

/// Production webhook the campaign flow listens on
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://omnibox-flow.creditoreal.com.br/webhook/testemautic";

/// URL shown in previews, which never reach the network
pub const DEFAULT_PREVIEW_URL: &str = "https://your-n8n-instance.com/webhook/mautic-integration";

/// Ordered `(key, value)` pairs sent to the webhook
pub fn query_pairs(campaign: &CampaignData, timestamp: &str) -> Vec<(&'static str, String)> {
    let settings = &campaign.mautic_settings;
    let filters = &campaign.filters;

    let mut pairs = vec![
        ("name", campaign.name.clone()),
        ("segmentName", campaign.segment_name.clone()),
        ("roles", campaign.roles.join(",")),
    ];
    pairs.extend(
        FilterField::ALL
            .into_iter()
            .map(|field| (field.key(), filters.get(field).to_string())),
    );
    pairs.extend([
        (
            "campaignDescription",
            settings.campaign_description.clone(),
        ),
        ("segmentDescription", settings.segment_description.clone()),
        (
            "isPublished",
            if settings.is_published { "1" } else { "0" }.to_string(),
        ),
        ("timestamp", timestamp.to_string()),
    ]);
    pairs
}

/// Append the campaign query to `base`
pub fn build_webhook_url(base: &str, campaign: &CampaignData, timestamp: &str) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| {
        warn!("Rejected webhook base URL {:?}: {}", base, e);
        Error::invalid_url(base)
    })?;

    url.query_pairs_mut()
        .extend_pairs(query_pairs(campaign, timestamp));

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaigner_core::SettingsTextField;

    const TS: &str = "2025-01-02T03:04:05.000Z";

    fn minimal() -> CampaignData {
        CampaignData::default()
            .with_name("X")
            .with_segment_name("Y")
            .with_role_toggled("Admin")
    }

    #[test]
    fn test_query_contains_required_prefix() {
        let url = build_webhook_url(DEFAULT_WEBHOOK_URL, &minimal(), TS).unwrap();
        assert!(url
            .as_str()
            .starts_with(&format!("{DEFAULT_WEBHOOK_URL}?name=X&segmentName=Y&roles=Admin")));
    }

    #[test]
    fn test_all_parameters_present_in_order() {
        let pairs = query_pairs(&minimal(), TS);
        let keys: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "segmentName",
                "roles",
                "condominio",
                "cidade",
                "bairro",
                "estado",
                "campaignDescription",
                "segmentDescription",
                "isPublished",
                "timestamp",
            ]
        );
    }

    #[test]
    fn test_unset_optionals_encoded_as_empty() {
        let url = build_webhook_url(DEFAULT_WEBHOOK_URL, &minimal(), TS).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("&condominio=&cidade=&bairro=&estado=&"));
        assert!(query.contains("&campaignDescription=&segmentDescription=&"));
    }

    #[test]
    fn test_published_flag_encoding() {
        let published = query_pairs(&minimal(), TS);
        assert!(published.contains(&("isPublished", "1".to_string())));

        let draft = query_pairs(&minimal().with_published(false), TS);
        assert!(draft.contains(&("isPublished", "0".to_string())));
    }

    #[test]
    fn test_roles_joined_and_form_encoded() {
        let data = minimal()
            .with_role_toggled("Morador")
            .with_settings_text(SettingsTextField::CampaignDescription, "Verão 2025");
        let url = build_webhook_url(DEFAULT_WEBHOOK_URL, &data, TS).unwrap();
        let query = url.query().unwrap();

        assert!(query.contains("roles=Admin%2CMorador"));
        assert!(query.contains("campaignDescription=Ver%C3%A3o+2025"));
        assert!(query.ends_with("timestamp=2025-01-02T03%3A04%3A05.000Z"));
    }

    #[test]
    fn test_query_is_deterministic() {
        let a = build_webhook_url(DEFAULT_WEBHOOK_URL, &minimal(), TS).unwrap();
        let b = build_webhook_url(DEFAULT_WEBHOOK_URL, &minimal(), TS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decoded_pairs_round_trip() {
        let data = minimal().with_filter(FilterField::Bairro, "Vila Madalena & Cia");
        let url = build_webhook_url(DEFAULT_WEBHOOK_URL, &data, TS).unwrap();
        let bairro = url
            .query_pairs()
            .find(|(k, _)| k == "bairro")
            .map(|(_, v)| v.into_owned());
        assert_eq!(bairro.as_deref(), Some("Vila Madalena & Cia"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = build_webhook_url("not a url", &minimal(), TS).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }
}
