//! Operator metadata attached to an export

use serde::{Deserialize, Serialize};

/// Text used for a public address that was not resolved
pub const ADDRESS_PLACEHOLDER: &str = "Unable to fetch public IP";

/// Text used for an optional field that was left empty
pub const NOT_PROVIDED: &str = "Not provided";

/// Public network address of the device under test
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "address")]
pub enum NetworkAddress {
    /// Lookup still running
    #[default]
    Pending,
    /// Lookup succeeded
    Resolved(String),
    /// Lookup failed, was cancelled or is disabled
    Unresolved,
}

impl NetworkAddress {
    /// The address, or the placeholder when there is none
    #[must_use]
    pub fn display_value(&self) -> &str {
        match self {
            Self::Resolved(addr) => addr,
            Self::Pending | Self::Unresolved => ADDRESS_PLACEHOLDER,
        }
    }

    /// Whether an address is available
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Editable metadata fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataField {
    /// QA operator name (required for export)
    Operator,
    /// Terminal hardware version
    Hardware,
    /// Terminal firmware version
    Firmware,
    /// Payment application version
    Application,
}

impl std::fmt::Display for MetadataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator => write!(f, "operator"),
            Self::Hardware => write!(f, "hardware"),
            Self::Firmware => write!(f, "firmware"),
            Self::Application => write!(f, "application"),
        }
    }
}

impl std::str::FromStr for MetadataField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operator" | "qa" | "name" => Ok(Self::Operator),
            "hardware" | "hw" => Ok(Self::Hardware),
            "firmware" | "fw" => Ok(Self::Firmware),
            "application" | "app" => Ok(Self::Application),
            _ => Err(format!(
                "Invalid metadata field: {s}. Use: operator, hardware, firmware, application"
            )),
        }
    }
}

/// Metadata captured alongside the checklist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMetadata {
    /// QA operator name, stored as typed
    pub operator_name: String,
    /// Terminal hardware version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_version: Option<String>,
    /// Terminal firmware version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    /// Payment application version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_version: Option<String>,
    /// Written once by the address lookup
    #[serde(default)]
    pub network_address: NetworkAddress,
}

impl FormMetadata {
    /// Operator name without surrounding whitespace
    #[must_use]
    pub fn operator(&self) -> &str {
        self.operator_name.trim()
    }

    /// Set a field; optional fields are cleared when the value is blank
    pub fn set(&mut self, field: MetadataField, value: &str) {
        let optional = || {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        match field {
            MetadataField::Operator => self.operator_name = value.to_string(),
            MetadataField::Hardware => self.hardware_version = optional(),
            MetadataField::Firmware => self.firmware_version = optional(),
            MetadataField::Application => self.application_version = optional(),
        }
    }
}
