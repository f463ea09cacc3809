use std::cmp::Ordering;
use std::fmt;

/// Placeholder tag for an environment with no readable image reference.
pub const UNKNOWN_TAG: &str = "unknown";

/// How the UAT tag of a service relates to its PROD tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Aligned,
    UatNewer,
    ProdNewer,
    MissingConfig,
    NeedsReview,
}

impl Status {
    /// Every category, in the order the summary lists them.
    pub const ALL: [Status; 5] = [
        Status::Aligned,
        Status::UatNewer,
        Status::ProdNewer,
        Status::MissingConfig,
        Status::NeedsReview,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Aligned => "Aligned",
            Status::UatNewer => "UAT newer",
            Status::ProdNewer => "PROD newer",
            Status::MissingConfig => "Missing config",
            Status::NeedsReview => "Needs review",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct ServiceTagRecord {
    pub service_name: String,
    pub uat_tag: String,
    pub prod_tag: String,
    pub status: Status,
}

impl PartialOrd for ServiceTagRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServiceTagRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.service_name.cmp(&other.service_name)
    }
}

impl PartialEq for ServiceTagRecord {
    fn eq(&self, other: &Self) -> bool {
        self.service_name == other.service_name
    }
}

impl Eq for ServiceTagRecord {}
