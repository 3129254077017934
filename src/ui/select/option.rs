/// Label of the placeholder entry shown while candidates load.
pub const LOADING_LABEL: &str = "Loading...";

/// One entry of a dropdown's option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub key: String,
    pub label: String,
    /// Matches the caller-owned value.
    pub selected: bool,
    pub disabled: bool,
}

impl SelectOption {
    pub fn loading() -> Self {
        Self {
            key: String::new(),
            label: LOADING_LABEL.to_string(),
            selected: false,
            disabled: true,
        }
    }
}
