use gf_core::{Article, Error, FetchOutcome, Result};
use serde_json::{Map, Value};

const RESPONSE: &str = "response";
const RESULTS: &str = "results";
const WEB_TITLE: &str = "webTitle";
const SECTION_NAME: &str = "sectionName";
const WEB_PUBLICATION_DATE: &str = "webPublicationDate";
const WEB_URL: &str = "webUrl";
const FIELDS: &str = "fields";
const BYLINE: &str = "byline";

/// Maps a search response body to articles.
///
/// An empty body means there was nothing to parse. Otherwise entries are read
/// in order until the first structural problem; the articles read before it
/// are kept and the rest of the array is not looked at.
pub fn extract_articles(body: &str) -> FetchOutcome {
    if body.is_empty() {
        return FetchOutcome::EmptyInput;
    }

    let mut articles = Vec::new();
    match read_results(body, &mut articles) {
        Ok(()) => FetchOutcome::Success(articles),
        Err(e) => FetchOutcome::ParseError {
            partial: articles,
            reason: e.to_string(),
        },
    }
}

fn read_results(body: &str, articles: &mut Vec<Article>) -> Result<()> {
    let root: Value = serde_json::from_str(body)?;
    let root = root.as_object().ok_or_else(|| Error::TypeMismatch {
        key: "body".to_string(),
        expected: "an object",
    })?;

    let response = get_object(root, RESPONSE)?;
    let results = get_value(response, RESULTS)?
        .as_array()
        .ok_or_else(|| Error::TypeMismatch {
            key: RESULTS.to_string(),
            expected: "an array",
        })?;

    for (index, entry) in results.iter().enumerate() {
        let entry = entry.as_object().ok_or_else(|| Error::TypeMismatch {
            key: format!("{}[{}]", RESULTS, index),
            expected: "an object",
        })?;
        articles.push(read_article(entry)?);
    }

    Ok(())
}

fn read_article(entry: &Map<String, Value>) -> Result<Article> {
    let title = get_string(entry, WEB_TITLE)?;

    // A present `fields` must be an object, even when it is null.
    let author = match entry.get(FIELDS) {
        Some(_) => {
            let fields = get_object(entry, FIELDS)?;
            match fields.get(BYLINE) {
                Some(_) => Some(get_string(fields, BYLINE)?),
                None => None,
            }
        }
        None => None,
    };

    let section_name = get_string(entry, SECTION_NAME)?;
    let publication_date = get_string(entry, WEB_PUBLICATION_DATE)?;
    let url = get_string(entry, WEB_URL)?;

    Ok(Article::new(title, author, section_name, publication_date, url))
}

fn get_value<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    map.get(key).ok_or_else(|| Error::MissingField(key.to_string()))
}

fn get_object<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a Map<String, Value>> {
    get_value(map, key)?.as_object().ok_or_else(|| Error::TypeMismatch {
        key: key.to_string(),
        expected: "an object",
    })
}

/// Strings are taken as they are; any other value, null included, is
/// rendered as its JSON text.
fn get_string(map: &Map<String, Value>, key: &str) -> Result<String> {
    match get_value(map, key)? {
        Value::String(s) => Ok(s.clone()),
        value => Ok(value.to_string()),
    }
}
