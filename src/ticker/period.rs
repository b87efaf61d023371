use std::time::Duration;

use crate::error::StopwatchError;

/// How often a tick source fires. `Disabled` stops it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    #[default]
    Disabled,
    Every(Duration),
}

impl Period {
    pub fn every(interval: Duration) -> Result<Self, StopwatchError> {
        if interval.is_zero() {
            return Err(StopwatchError::InvalidInterval(
                "interval must be greater than 0".to_string(),
            ));
        }
        Ok(Period::Every(interval))
    }

    pub fn every_millis(millis: u64) -> Result<Self, StopwatchError> {
        Self::every(Duration::from_millis(millis))
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            Period::Disabled => None,
            Period::Every(interval) => Some(*interval),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Period::Every(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_rejected() {
        let err = Period::every(Duration::ZERO).unwrap_err();
        assert!(matches!(err, StopwatchError::InvalidInterval(_)));
        assert!(Period::every_millis(0).is_err());
    }

    #[test]
    fn test_period_duration() {
        let period = Period::every_millis(1000).unwrap();
        assert!(period.is_enabled());
        assert_eq!(period.duration(), Some(Duration::from_secs(1)));

        assert!(!Period::default().is_enabled());
        assert_eq!(Period::Disabled.duration(), None);
    }
}
