//! Form Descriptor Model

use serde::{Deserialize, Serialize};

/// One paper/process form attached to a department checklist
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormDescriptor {
    pub name: String,
    /// Form category, e.g. 倉管 (warehouse) or 號機 (per machine)
    #[serde(rename = "type")]
    pub kind: String,
}

impl FormDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl From<(&str, &str)> for FormDescriptor {
    fn from((name, kind): (&str, &str)) -> Self {
        Self::new(name, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_serialized_as_type() {
        let form = FormDescriptor::new("半成品標示單", "給下一課");
        let json = serde_json::to_string(&form).unwrap();
        assert_eq!(json, r#"{"name":"半成品標示單","type":"給下一課"}"#);

        let parsed: FormDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, form);
    }
}
