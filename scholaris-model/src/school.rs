//! School lookup records.

use serde::{Deserialize, Serialize};

use crate::ids::SchoolId;

/// A school, as served by the directory's lookup query.
///
/// The console only renders the name; the locality fields travel with the
/// record because the service returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    #[serde(rename = "schoolId")]
    pub id: SchoolId,
    #[serde(rename = "schoolName")]
    pub name: String,
    pub emis_number: String,
    pub district: String,
    pub province: String,
    pub country: String,
}
