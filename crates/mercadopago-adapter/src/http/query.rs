/*
[INPUT]:  Search filter mappings and pagination fields
[OUTPUT]: URL-encoded query strings for search endpoints
[POS]:    HTTP layer - query string encoding
[UPDATE]: When search endpoints gain new fixed parameters
*/

use std::collections::BTreeMap;

use crate::types::SearchRequest;

/// Pagination defaults applied when the caller leaves them unset
const DEFAULT_SEARCH_LIMIT: u32 = 30;
const DEFAULT_SEARCH_OFFSET: u32 = 0;

/// Encode a filter mapping into a `key=value&…` query string.
///
/// Every entry is encoded as given; dropping empty values is the caller's
/// concern (`search_query` does so for search requests).
pub fn encode_filters(filters: &BTreeMap<String, String>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in filters {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Build the query string for a search endpoint: pagination first (with
/// platform defaults), then the filters, empty values skipped.
pub(crate) fn search_query(request: &SearchRequest) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    serializer.append_pair(
        "limit",
        &request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).to_string(),
    );
    serializer.append_pair(
        "offset",
        &request.offset.unwrap_or(DEFAULT_SEARCH_OFFSET).to_string(),
    );
    for (key, value) in &request.filters {
        if value.is_empty() {
            continue;
        }
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
