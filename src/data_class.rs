// WHY: closed set of recognised data categories; every pattern, highlight and
// dataset entry is keyed by one of these

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of personal data recognised by the validators and the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataClass {
    Name,
    Phone,
    Email,
}

impl DataClass {
    /// All classes in scan order
    pub const ALL: [DataClass; 3] = [DataClass::Name, DataClass::Phone, DataClass::Email];

    /// Lowercase identifier, also used as the dataset id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            DataClass::Name => "name",
            DataClass::Phone => "phone",
            DataClass::Email => "email",
        }
    }

    /// Uppercase label used by the bracket marker style
    pub fn label(&self) -> &'static str {
        match self {
            DataClass::Name => "NAME",
            DataClass::Phone => "PHONE",
            DataClass::Email => "EMAIL",
        }
    }
}

impl fmt::Display for DataClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
