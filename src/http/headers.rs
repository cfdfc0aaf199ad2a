/// An ordered collection of HTTP header fields.
///
/// Header names keep the casing they were inserted with, but every lookup and
/// replacement compares names case-insensitively, so `content-length` and
/// `Content-Length` address the same field. Each name appears at most once;
/// inserting a name that is already present replaces its value in place and
/// keeps its original position.
///
/// # Example
///
/// ```
/// # use wicket::http::headers::Headers;
/// let mut headers = Headers::new();
/// headers.insert("User-Agent", "curl/8.0");
///
/// assert_eq!(headers.get("user-agent"), Some("curl/8.0"));
/// assert_eq!(headers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Inserts a header, replacing the value of any field with the same name.
    ///
    /// Returns the previous value if one was replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Looks up a header value by name, ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|idx| self.entries[idx].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|idx| self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}
