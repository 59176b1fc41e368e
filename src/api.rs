use url::form_urlencoded;

pub const API_HEROES: &str = "api/heroes";

pub fn api_hero(id: i32) -> String {
    format!("{API_HEROES}/{id}")
}

/// `api/heroes/?name={term}`, with the term form-encoded.
pub fn api_search(term: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", term)
        .finish();
    format!("{API_HEROES}/?{query}")
}
