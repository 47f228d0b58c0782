use course_library_core::domain::query::resource_parameters::ResourceQueryParameters;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceUriType {
    PreviousPage,
    CurrentPage,
    NextPage,
}

/// Builds the URI of a page of `route` for the given shaping parameters.
///
/// Only the page number moves; blank parameters are left out. Callers must not
/// ask for a previous or next page that does not exist.
pub fn create_resource_uri(
    route: &str,
    params: &ResourceQueryParameters,
    uri_type: ResourceUriType,
) -> String {
    let page_number = match uri_type {
        ResourceUriType::PreviousPage => params.page_number.saturating_sub(1),
        ResourceUriType::CurrentPage => params.page_number,
        ResourceUriType::NextPage => params.page_number.saturating_add(1),
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    if !params.order_by.trim().is_empty() {
        query.append_pair("orderBy", &params.order_by);
    }
    query.append_pair("pageNumber", &page_number.to_string());
    query.append_pair("pageSize", &params.page_size.to_string());
    if let Some(main_category) = non_empty(&params.main_category) {
        query.append_pair("mainCategory", main_category);
    }
    if let Some(search_query) = non_empty(&params.search_query) {
        query.append_pair("searchQuery", search_query);
    }

    format!("{}?{}", route, query.finish())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
