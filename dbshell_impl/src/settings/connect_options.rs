use super::SslMode;
use crate::url::SSLMODE;

/// The `OPTIONS` of a [`ConnectionSettings`](crate::ConnectionSettings).
///
/// Keys are unique; the options keep the order in which they were inserted.
/// That order determines the order of the options without a fixed position
/// in the connection URL (see module [`url`](crate::url)).
///
/// ```rust
/// use dbshell::ConnectOptions;
///
/// let options = ConnectOptions::new()
///     .with("sslmode", "verify-full")
///     .with("application_name", "dbshell");
/// assert_eq!(Some("verify-full"), options.get("sslmode"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConnectOptions(Vec<(String, String)>);

impl ConnectOptions {
    /// Creates an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option.
    ///
    /// If the key is already present, its value is replaced and it keeps its position.
    pub fn insert<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) -> &mut Self {
        let (key, value) = (key.as_ref(), value.as_ref().to_owned());
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key.to_owned(), value)),
        }
        self
    }

    /// Builder-method for setting an option.
    #[must_use]
    pub fn with<K: AsRef<str>, V: AsRef<str>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes an option and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(pos).1)
    }

    /// Returns the value of an option.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    // An empty value counts as not given.
    pub(crate) fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// The TLS mode, if one is given.
    pub fn sslmode(&self) -> Option<SslMode> {
        self.get(SSLMODE).and_then(SslMode::from_option_value)
    }

    /// Iterates over the options, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ConnectOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}
