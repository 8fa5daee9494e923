use crate::url::POSTGRESQL;
use std::{borrow::Cow, fmt::Write};

// Every byte except A-Z a-z 0-9 - . _ ~ is written as %XX, a space as %20.
pub(crate) fn percent_encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}

// The query part of the connection URL, in the order in which the pairs are added.
#[derive(Debug, Default)]
pub(crate) struct QueryPairs(Vec<(String, String)>);
impl QueryPairs {
    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.0.push((key.to_string(), value.to_string()));
    }
}

// `encoded_password` is written as is, so that a mask can stand in for the password.
pub(crate) fn format_as_url(
    user: &str,
    encoded_password: &str,
    host: &str,
    port: &str,
    dbname: &str,
    query: &QueryPairs,
) -> String {
    let mut url = String::with_capacity(100);
    write!(
        url,
        "{POSTGRESQL}://{}:{encoded_password}@{host}:{port}/{dbname}",
        percent_encode(user),
    )
    .ok();

    let mut sep = std::iter::once("?").chain(std::iter::repeat("&"));
    for (key, value) in &query.0 {
        write!(
            url,
            "{}{}={}",
            sep.next().unwrap_or_default(),
            percent_encode(key),
            percent_encode(value)
        )
        .ok();
    }
    url
}

// The directory part of a path, "." for a bare file name.
pub(crate) fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        None => ".",
        Some(pos) => match path[..pos].trim_end_matches('/') {
            "" => "/",
            dir => dir,
        },
    }
}
