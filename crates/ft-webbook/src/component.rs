//! Pure components available for table generation.

use crate::error::WebBookError;
use std::fmt;

/// Pure fluid components the table generator can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Water (H₂O)
    H2O,
    /// Carbon dioxide (CO₂)
    CO2,
}

impl Component {
    pub const ALL: [Component; 2] = [Component::H2O, Component::CO2];

    /// Canonical component name, as used in file names and headers.
    pub fn key(&self) -> &'static str {
        match self {
            Component::H2O => "H2O",
            Component::CO2 => "CO2",
        }
    }

    /// WebBook identifier (CAS registry number prefixed with `C`).
    pub fn webbook_id(&self) -> &'static str {
        match self {
            Component::H2O => "C7732185",
            Component::CO2 => "C124389",
        }
    }

    /// Output file name for a table of this component, e.g. `h2ovalues.csv`.
    pub fn table_file_name(&self) -> String {
        format!("{}values.csv", self.key().to_lowercase())
    }
}

impl std::str::FromStr for Component {
    type Err = WebBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H2O" => Ok(Component::H2O),
            "CO2" => Ok(Component::CO2),
            _ => Err(WebBookError::UnsupportedComponent {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webbook_ids() {
        assert_eq!(Component::H2O.webbook_id(), "C7732185");
        assert_eq!(Component::CO2.webbook_id(), "C124389");
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("H2O".parse::<Component>().unwrap(), Component::H2O);
        assert_eq!("CO2".parse::<Component>().unwrap(), Component::CO2);
        assert_eq!(" co2 ".parse::<Component>().unwrap(), Component::CO2);
    }

    #[test]
    fn reject_unknown_names() {
        for name in ["N2", "", "Water", "H2O2"] {
            let err = name.parse::<Component>().unwrap_err();
            assert!(matches!(err, WebBookError::UnsupportedComponent { .. }));
        }
    }

    #[test]
    fn file_names_are_lower_case() {
        assert_eq!(Component::H2O.table_file_name(), "h2ovalues.csv");
        assert_eq!(Component::CO2.table_file_name(), "co2values.csv");
    }

    #[test]
    fn canonical_key_roundtrip() {
        for component in Component::ALL {
            assert_eq!(component.key().parse::<Component>().unwrap(), component);
        }
    }
}
