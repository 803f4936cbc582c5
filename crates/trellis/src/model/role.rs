//! Data roles for item models.
//!
//! A role says what a data request is for. Models return [`ItemData::None`]
//! for roles they do not serve.

/// Purpose of a data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary text to display: the item name or the category name.
    Display,
    /// Tooltip text shown on hover.
    ToolTip,
}

/// Value returned from `ItemModel::data`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemData {
    /// No data for this node and role.
    #[default]
    None,
    /// Text.
    String(String),
}

impl ItemData {
    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Consumes the value, returning the text if there is any.
    pub fn into_string(self) -> Option<String> {
        match self {
            ItemData::String(s) => Some(s),
            ItemData::None => None,
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}
