//! The closed set of fetchable datasets and their static descriptors.

use std::fmt;
use std::str::FromStr;

use crate::error::NavfetchError;

/// Base URL of the object-storage bucket serving the dataset archives.
const DATASET_BASE_URL: &str = "https://prior-datasets.s3.us-east-2.amazonaws.com/navigation";

/// A navigation-task dataset known to this tool.
///
/// The set is closed: anything outside it is rejected before any network
/// or filesystem action happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetId {
    RobothorPointnav,
    RobothorObjectnav,
    IthorPointnav,
    IthorObjectnav,
}

/// Static (URL, archive filename, extracted folder name) triple for one
/// dataset. Public fields so tests can aim a descriptor at a local server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetDescriptor {
    pub url: String,
    pub archive_name: String,
    pub dir_name: String,
}

impl DatasetId {
    pub const ALL: [DatasetId; 4] = [
        DatasetId::RobothorPointnav,
        DatasetId::RobothorObjectnav,
        DatasetId::IthorPointnav,
        DatasetId::IthorObjectnav,
    ];

    /// The CLI key for this dataset, also its extracted folder name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetId::RobothorPointnav => "robothor-pointnav",
            DatasetId::RobothorObjectnav => "robothor-objectnav",
            DatasetId::IthorPointnav => "ithor-pointnav",
            DatasetId::IthorObjectnav => "ithor-objectnav",
        }
    }

    /// Comma-separated list of valid keys, for usage messages.
    pub fn valid_keys() -> String {
        Self::ALL
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve this identifier to its fixed remote/local naming triple.
    pub fn descriptor(&self) -> DatasetDescriptor {
        let key = self.as_str();
        DatasetDescriptor {
            url: format!("{DATASET_BASE_URL}/{key}.tar.gz"),
            archive_name: format!("{key}.tar.gz"),
            dir_name: key.to_string(),
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetId {
    type Err = NavfetchError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|id| id.as_str() == input)
            .copied()
            .ok_or_else(|| NavfetchError::UnknownDataset {
                name: input.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_parses_back_to_its_id() {
        for id in DatasetId::ALL {
            let parsed: DatasetId = id.as_str().parse().expect("parse");
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        for input in ["foo", "", "robothor", "ROBOTHOR-POINTNAV", "robothor-pointnav "] {
            let result = input.parse::<DatasetId>();
            assert!(matches!(
                result,
                Err(NavfetchError::UnknownDataset { ref name }) if name == input
            ));
        }
    }

    #[test]
    fn descriptor_naming_is_derived_from_the_key() {
        let descriptor = DatasetId::IthorObjectnav.descriptor();
        assert_eq!(
            descriptor.url,
            "https://prior-datasets.s3.us-east-2.amazonaws.com/navigation/ithor-objectnav.tar.gz"
        );
        assert_eq!(descriptor.archive_name, "ithor-objectnav.tar.gz");
        assert_eq!(descriptor.dir_name, "ithor-objectnav");
    }

    #[test]
    fn valid_keys_lists_all_four() {
        let keys = DatasetId::valid_keys();
        assert_eq!(
            keys,
            "robothor-pointnav, robothor-objectnav, ithor-pointnav, ithor-objectnav"
        );
    }
}
