use crate::error::CookbookError;
use crate::model::SavedRecipe;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Characters `encodeURIComponent` leaves alone, so links we build decode the
/// same way in a browser.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DATA_PARAM: &str = "data";

/// JSON-encodes `value` and percent-encodes the result for use as a query
/// parameter.
pub fn encode_record<T: Serialize>(value: &T) -> Result<String, CookbookError> {
    let json = serde_json::to_string(value)?;
    Ok(utf8_percent_encode(&json, URI_COMPONENT).to_string())
}

/// Inverse of [`encode_record`].
pub fn decode_record<T: DeserializeOwned>(encoded: &str) -> Result<T, CookbookError> {
    let json = percent_decode_str(encoded)
        .decode_utf8()
        .map_err(|e| CookbookError::InvalidTransport(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| CookbookError::InvalidTransport(e.to_string()))
}

/// Link to the recipe viewer with the saved entry embedded in the `data`
/// query parameter.
pub fn viewer_url(base: &str, saved: &SavedRecipe) -> Result<String, CookbookError> {
    Ok(format!("{base}?{DATA_PARAM}={}", encode_record(saved)?))
}

/// Reads back the entry embedded by [`viewer_url`].
pub fn from_viewer_url(url: &str) -> Result<SavedRecipe, CookbookError> {
    let query = url
        .split_once('?')
        .map(|(_, query)| query.split('#').next().unwrap_or_default())
        .unwrap_or_default();

    let encoded = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == DATA_PARAM)
        .map(|(_, value)| value)
        .ok_or_else(|| CookbookError::InvalidTransport("No recipe data provided".to_string()))?;

    decode_record(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Instructions, RecipeRecord};

    #[test]
    fn test_encoding_matches_encode_uri_component() {
        let encoded = encode_record(&"a b&c=d/é (ok)!").unwrap();
        assert_eq!(encoded, "%22a%20b%26c%3Dd%2F%C3%A9%20(ok)!%22");
    }

    #[test]
    fn test_record_round_trip() {
        let mut recipe = RecipeRecord::named("Crème brûlée").unwrap();
        recipe.ingredients = vec!["4 egg yolks".to_string(), "500ml cream".to_string()];
        recipe.instructions = Some(Instructions::Steps(vec![
            "Heat cream & vanilla".to_string(),
            "Whisk 100% of the yolks?".to_string(),
        ]));
        recipe.total_time = Some("PT5H".to_string());

        let decoded: RecipeRecord = decode_record(&encode_record(&recipe).unwrap()).unwrap();
        assert_eq!(decoded, recipe);
    }

    #[test]
    fn test_viewer_url_round_trip() {
        let mut recipe = RecipeRecord::named("Chili").unwrap();
        recipe.instructions = Some(Instructions::Text("1. Brown beef\n2. Simmer".to_string()));
        let saved = SavedRecipe::new(recipe, "https://example.com/chili?ref=home#top");

        let url = viewer_url("chrome-extension://abc/recipe-viewer.html", &saved).unwrap();
        assert!(url.starts_with("chrome-extension://abc/recipe-viewer.html?data=%7B"));
        assert_eq!(from_viewer_url(&url).unwrap(), saved);
    }

    #[test]
    fn test_missing_data_param() {
        let err = from_viewer_url("recipe-viewer.html?other=1").unwrap_err();
        assert!(matches!(err, CookbookError::InvalidTransport(_)));
        assert!(from_viewer_url("recipe-viewer.html").is_err());
    }

    #[test]
    fn test_malformed_payload() {
        assert!(matches!(
            from_viewer_url("recipe-viewer.html?data=%7Bnot-json"),
            Err(CookbookError::InvalidTransport(_))
        ));
        assert!(matches!(
            decode_record::<RecipeRecord>("%FF%FE"),
            Err(CookbookError::InvalidTransport(_))
        ));
    }
}
