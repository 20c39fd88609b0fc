//! The fixed catalog of quality attributes.

use crate::error::QdsError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a quality attribute.
///
/// Declaration order is catalog order; `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    Modularity,
    Maintainability,
    Reliability,
    Performance,
    Scalability,
    Security,
    Usability,
    Interoperability,
    Testability,
    Portability,
}

impl AttributeKey {
    /// All keys in catalog order
    pub const ALL: [Self; 10] = [
        Self::Modularity,
        Self::Maintainability,
        Self::Reliability,
        Self::Performance,
        Self::Scalability,
        Self::Security,
        Self::Usability,
        Self::Interoperability,
        Self::Testability,
        Self::Portability,
    ];

    /// Key string used in form field names and response sheets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modularity => "modularity",
            Self::Maintainability => "maintainability",
            Self::Reliability => "reliability",
            Self::Performance => "performance",
            Self::Scalability => "scalability",
            Self::Security => "security",
            Self::Usability => "usability",
            Self::Interoperability => "interoperability",
            Self::Testability => "testability",
            Self::Portability => "portability",
        }
    }

    /// Catalog entry for this key
    #[must_use]
    pub fn attribute(&self) -> &'static Attribute {
        // Catalog entries are laid out in enum declaration order.
        &ATTRIBUTE_CATALOG[*self as usize]
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.attribute().label
    }

    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        self.attribute().suggestion
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = QdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == needle)
            .ok_or_else(|| QdsError::unknown_attribute(s))
    }
}

/// A software quality dimension rated by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: AttributeKey,
    /// Display label
    pub label: &'static str,
    /// Improvement advice surfaced when the attribute lags behind
    pub suggestion: &'static str,
}

/// The immutable attribute catalog, in presentation order.
pub static ATTRIBUTE_CATALOG: [Attribute; 10] = [
    Attribute {
        key: AttributeKey::Modularity,
        label: "Modularity",
        suggestion: "Increase separation between components, define clear interfaces, and reduce hidden dependencies so changes in one module have minimal ripple effects.",
    },
    Attribute {
        key: AttributeKey::Maintainability,
        label: "Maintainability",
        suggestion: "Improve coding standards, documentation, and automated tests so future changes are easier and safer to apply.",
    },
    Attribute {
        key: AttributeKey::Reliability,
        label: "Reliability",
        suggestion: "Add monitoring, better error handling, and redundancy for critical components to reduce runtime failures.",
    },
    Attribute {
        key: AttributeKey::Performance,
        label: "Performance / Efficiency",
        suggestion: "Profile the system to find bottlenecks, then optimize hot paths, database queries, and caching where it matters most.",
    },
    Attribute {
        key: AttributeKey::Scalability,
        label: "Scalability",
        suggestion: "Consider stateless services, load balancing, and data partitioning to handle higher load without major redesign.",
    },
    Attribute {
        key: AttributeKey::Security,
        label: "Security",
        suggestion: "Strengthen authentication, authorization, encryption, and perform regular security reviews and testing.",
    },
    Attribute {
        key: AttributeKey::Usability,
        label: "Usability",
        suggestion: "Run usability tests, simplify workflows, and make key actions more discoverable and consistent for users.",
    },
    Attribute {
        key: AttributeKey::Interoperability,
        label: "Interoperability",
        suggestion: "Adopt standard protocols and well-documented APIs so other systems can integrate with minimal friction.",
    },
    Attribute {
        key: AttributeKey::Testability,
        label: "Testability",
        suggestion: "Refactor into smaller, loosely coupled components with clear contracts so automated tests are easier to write and maintain.",
    },
    Attribute {
        key: AttributeKey::Portability,
        label: "Portability",
        suggestion: "Abstract platform-specific details and rely on cross-platform tools so deployment to new environments is smoother.",
    },
];

/// Iterate over the catalog in presentation order.
pub fn catalog() -> impl Iterator<Item = &'static Attribute> {
    ATTRIBUTE_CATALOG.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_keys() {
        for (attr, key) in ATTRIBUTE_CATALOG.iter().zip(AttributeKey::ALL) {
            assert_eq!(attr.key, key);
            assert_eq!(key.attribute().label, attr.label);
        }
    }

    #[test]
    fn test_key_roundtrip_through_str() {
        for key in AttributeKey::ALL {
            assert_eq!(key.as_str().parse::<AttributeKey>().unwrap(), key);
        }
        assert_eq!(" Security ".parse::<AttributeKey>().unwrap(), AttributeKey::Security);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!("elegance".parse::<AttributeKey>().is_err());
    }

    #[test]
    fn test_performance_label() {
        assert_eq!(AttributeKey::Performance.label(), "Performance / Efficiency");
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&AttributeKey::Interoperability).unwrap();
        assert_eq!(json, "\"interoperability\"");
    }
}
