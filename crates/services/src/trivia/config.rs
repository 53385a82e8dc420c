/// Request parameters for the trivia provider.
///
/// The quiz always asks for the same set; the builder exists so tests can point
/// the client at a local stub.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaConfig {
    pub base_url: String,
    pub amount: u32,
    pub kind: String,
}

impl TriviaConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://opentdb.com";
    pub const DEFAULT_AMOUNT: u32 = 10;
    pub const DEFAULT_KIND: &'static str = "multiple";

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full endpoint URL without the query string.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/api.php", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("amount", self.amount.to_string()),
            ("type", self.kind.clone()),
        ]
    }
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            amount: Self::DEFAULT_AMOUNT,
            kind: Self::DEFAULT_KIND.to_string(),
        }
    }
}
