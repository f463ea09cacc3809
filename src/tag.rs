//! Tag extraction and UAT/PROD tag classification.

use crate::types::{Status, UNKNOWN_TAG};
use std::cmp::Ordering;

/// Returns the part of an image reference after its last colon, or
/// [`UNKNOWN_TAG`] when the reference is empty or has no colon.
pub fn extract_tag(image_ref: &str) -> String {
    match image_ref.rsplit_once(':') {
        Some((_, tag)) if !tag.is_empty() => tag.to_string(),
        _ => UNKNOWN_TAG.to_string(),
    }
}

/// One numeric piece of a version, kept as its digits so that components of
/// any length compare exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component(String);

impl Component {
    /// Accepts a non-empty run of ASCII digits, dropping leading zeros.
    fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        let normalized = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Component {
    // Without leading zeros, a longer digit string is the larger number.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

/// Numeric components of a dotted version tag such as `v1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion(Vec<Component>);

impl ParsedVersion {
    /// Fewer components than this and the tag is not worth comparing.
    pub const MIN_COMPONENTS: usize = 3;

    /// Parses `tag`, returning `None` when it is not a comparable version.
    ///
    /// One leading `v`/`V` is dropped, then every character that is not a
    /// digit or a dot. Empty dot-separated pieces are skipped.
    pub fn parse(tag: &str) -> Option<Self> {
        let unprefixed = tag
            .strip_prefix('v')
            .or_else(|| tag.strip_prefix('V'))
            .unwrap_or(tag);

        let cleaned: String = unprefixed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if cleaned.is_empty() {
            return None;
        }

        let components: Vec<Component> = cleaned
            .split('.')
            .filter_map(Component::from_digits)
            .collect();

        if components.len() < Self::MIN_COMPONENTS {
            return None;
        }
        Some(Self(components))
    }

    pub fn components(&self) -> &[Component] {
        &self.0
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParsedVersion {
    /// Element-wise by numeric value; a longer version wins a shared prefix.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().cmp(other.0.iter())
    }
}

/// Classifies a pair of tags already produced by [`extract_tag`].
pub fn classify(uat_tag: &str, prod_tag: &str) -> Status {
    if uat_tag == prod_tag {
        return Status::Aligned;
    }
    if uat_tag == UNKNOWN_TAG || prod_tag == UNKNOWN_TAG {
        return Status::MissingConfig;
    }

    match (ParsedVersion::parse(uat_tag), ParsedVersion::parse(prod_tag)) {
        (Some(uat), Some(prod)) => match uat.cmp(&prod) {
            Ordering::Greater => Status::UatNewer,
            Ordering::Less => Status::ProdNewer,
            Ordering::Equal => Status::Aligned,
        },
        _ => Status::NeedsReview,
    }
}
