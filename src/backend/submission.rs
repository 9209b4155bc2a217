/// Key used by static-site form backends to route a post to a form.
///
pub const FORM_NAME_KEY: &str = "form-name";

/// Ordered key/value pairs posted to the form backend.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pairs: Vec<(String, String)>,
}

impl Submission {
    /// Start a submission addressed to the named form.
    ///
    pub fn new(form_name: &str) -> Self {
        Submission {
            pairs: vec![(FORM_NAME_KEY.to_string(), form_name.to_string())],
        }
    }

    /// Append a field, keeping insertion order.
    ///
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Return the first value posted under the key.
    ///
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
