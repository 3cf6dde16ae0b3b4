use crate::hue::client::HueClientError;
use std::fmt::{Display, Formatter};

/// The lights a command is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetSet {
    /// Every light known to the bridge, addressed through group 0.
    #[default]
    All,
    Lights(Vec<String>),
}

impl TargetSet {
    pub fn lights<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = ids.into_iter().map(Into::into).collect::<Vec<String>>();
        if ids.is_empty() { TargetSet::All } else { TargetSet::Lights(ids) }
    }

    pub(crate) fn validate(&self) -> Result<(), HueClientError> {
        match self {
            TargetSet::All => Ok(()),
            TargetSet::Lights(ids) if ids.iter().any(|id| id.trim().is_empty()) => {
                Err(HueClientError::InvalidArgument("light id can not be empty or a blank string".to_string()))
            }
            TargetSet::Lights(_) => Ok(()),
        }
    }
}

impl From<Vec<String>> for TargetSet {
    fn from(ids: Vec<String>) -> Self {
        TargetSet::lights(ids)
    }
}

impl From<&[&str]> for TargetSet {
    fn from(ids: &[&str]) -> Self {
        TargetSet::lights(ids.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for TargetSet {
    fn from(ids: [&str; N]) -> Self {
        TargetSet::lights(ids)
    }
}

impl<T: Into<TargetSet>> From<Option<T>> for TargetSet {
    fn from(ids: Option<T>) -> Self {
        ids.map(Into::into).unwrap_or_default()
    }
}

impl Display for TargetSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetSet::All => write!(f, "all lights"),
            TargetSet::Lights(ids) => write!(f, "lights [{}]", ids.join(", ")),
        }
    }
}
