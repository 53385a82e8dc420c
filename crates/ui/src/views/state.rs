use services::FetchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Network,
    MalformedResponse,
}

impl ViewError {
    #[must_use]
    pub fn title() -> &'static str {
        "Failed to load quiz questions."
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Network => "The quiz server could not be reached. Please try again.",
            Self::MalformedResponse => "The quiz server sent questions we could not read.",
        }
    }
}

impl From<&FetchError> for ViewError {
    fn from(err: &FetchError) -> Self {
        if err.is_malformed() {
            Self::MalformedResponse
        } else {
            Self::Network
        }
    }
}
