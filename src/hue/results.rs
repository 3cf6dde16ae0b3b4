use serde_json::Value;

/// Synthetic code for a response that matches none of the bridge's envelopes.
pub const MALFORMED_RESPONSE: i64 = -1;
/// Synthetic code for a call that never produced a response (connection failure, timeout).
pub const TRANSPORT_FAILURE: i64 = -2;

/// Outcome of a single attribute change reported by the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum HueResult {
    Success { address: String, value: Value },
    Failure { code: i64, address: String, description: String },
}

impl HueResult {
    pub fn success(address: impl Into<String>, value: Value) -> Self {
        HueResult::Success {
            address: address.into(),
            value,
        }
    }

    pub fn failure(code: i64, address: impl Into<String>, description: impl Into<String>) -> Self {
        HueResult::Failure {
            code,
            address: address.into(),
            description: description.into(),
        }
    }

    pub fn malformed_response(address: impl Into<String>, description: impl Into<String>) -> Self {
        Self::failure(MALFORMED_RESPONSE, address, description)
    }

    pub fn transport_failure(address: impl Into<String>, description: impl Into<String>) -> Self {
        Self::failure(TRANSPORT_FAILURE, address, description)
    }

    pub fn address(&self) -> &str {
        match self {
            HueResult::Success { address, .. } | HueResult::Failure { address, .. } => address,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HueResult::Success { .. })
    }
}

/// Ordered outcomes of one logical command, possibly spanning several HTTP calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HueResults {
    entries: Vec<HueResult>,
}

impl HueResults {
    pub fn new() -> Self {
        HueResults { entries: Vec::new() }
    }

    /// Concatenates per-call collections in the order they are given.
    pub fn merge(collections: impl IntoIterator<Item = HueResults>) -> Self {
        let mut merged = HueResults::new();
        for collection in collections {
            merged.entries.extend(collection.entries);
        }
        merged
    }

    pub fn push(&mut self, result: HueResult) {
        self.entries.push(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HueResult> {
        self.entries.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|entry| !entry.is_success())
    }

    pub fn errors(&self) -> impl Iterator<Item = &HueResult> {
        self.entries.iter().filter(|entry| !entry.is_success())
    }

    pub fn successes(&self) -> impl Iterator<Item = &HueResult> {
        self.entries.iter().filter(|entry| entry.is_success())
    }
}

impl From<HueResult> for HueResults {
    fn from(result: HueResult) -> Self {
        HueResults { entries: vec![result] }
    }
}

impl From<Vec<HueResult>> for HueResults {
    fn from(entries: Vec<HueResult>) -> Self {
        HueResults { entries }
    }
}

impl FromIterator<HueResult> for HueResults {
    fn from_iter<I: IntoIterator<Item = HueResult>>(iter: I) -> Self {
        HueResults {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for HueResults {
    type Item = HueResult;
    type IntoIter = std::vec::IntoIter<HueResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a HueResults {
    type Item = &'a HueResult;
    type IntoIter = std::slice::Iter<'a, HueResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn merge_preserves_call_order_and_internal_order() {
        let first = HueResults::from(vec![
            HueResult::success("/lights/1/state/on", json!(true)),
            HueResult::failure(7, "/lights/1/state/bri", "invalid value"),
        ]);
        let second = HueResults::from(HueResult::success("/lights/2/state/on", json!(true)));

        let merged = HueResults::merge(vec![first, HueResults::new(), second]);

        let addresses = merged.iter().map(HueResult::address).collect::<Vec<_>>();
        assert_eq!(addresses, vec!["/lights/1/state/on", "/lights/1/state/bri", "/lights/2/state/on"]);
    }

    #[test]
    fn merge_never_deduplicates() {
        let entry = HueResult::success("/groups/0/action/on", json!(true));

        let merged = HueResults::merge(vec![HueResults::from(entry.clone()), HueResults::from(entry.clone())]);

        assert_eq!(merged, HueResults::from(vec![entry.clone(), entry]));
    }

    #[test]
    fn errors_and_successes_partition_the_entries() {
        let results = HueResults::from(vec![
            HueResult::success("/lights/1/state/on", json!(true)),
            HueResult::transport_failure("/lights/2/state", "timed out"),
        ]);

        assert!(results.has_errors());
        assert_eq!(results.successes().count(), 1);
        assert_eq!(results.errors().collect::<Vec<_>>(), vec![&HueResult::failure(TRANSPORT_FAILURE, "/lights/2/state", "timed out")]);
    }
}
