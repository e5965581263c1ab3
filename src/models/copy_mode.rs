//! Copy affordance selection

use serde::{Deserialize, Serialize};

/// Which copy buttons a renderer attaches to a verse block
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CopyMode {
    /// One button copying the whole block
    #[default]
    All,
    /// One button per row
    Row,
    /// Both of the above
    Both,
}

impl CopyMode {
    /// Parse a `data-copy` value; absent or unknown values fall back to `All`
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("row") => CopyMode::Row,
            Some("both") => CopyMode::Both,
            _ => CopyMode::All,
        }
    }

    pub fn wants_block_button(&self) -> bool {
        matches!(self, CopyMode::All | CopyMode::Both)
    }

    pub fn wants_row_buttons(&self) -> bool {
        matches!(self, CopyMode::Row | CopyMode::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_mode_from_attribute() {
        assert_eq!(CopyMode::from_attribute(None), CopyMode::All);
        assert_eq!(CopyMode::from_attribute(Some("row")), CopyMode::Row);
        assert_eq!(CopyMode::from_attribute(Some(" BOTH ")), CopyMode::Both);
        assert_eq!(CopyMode::from_attribute(Some("lines")), CopyMode::All);
    }

    #[test]
    fn test_copy_mode_buttons() {
        assert!(CopyMode::All.wants_block_button());
        assert!(!CopyMode::All.wants_row_buttons());
        assert!(!CopyMode::Row.wants_block_button());
        assert!(CopyMode::Both.wants_block_button() && CopyMode::Both.wants_row_buttons());
    }
}
