use core::fmt;

/// Stable identifier for a station.
///
/// Assigned by the station directory, which owns identity uniqueness.
/// Every other layer holds ids and resolves them to [`crate::Station`]
/// values only transiently.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StationId(u64);

impl StationId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Required so that `RouteError::NoRoute { source: StationId, .. }` type-checks:
// the `#[derive(thiserror::Error)]` macro treats any field literally named
// `source` as the error's source and therefore requires `StationId: Error`.
impl std::error::Error for StationId {}

/// Stable identifier for a line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LineId(u64);

impl LineId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_raw() {
        for raw in [0_u64, 1, 42, 10_000, u64::MAX] {
            assert_eq!(StationId::new(raw).get(), raw);
            assert_eq!(LineId::new(raw).get(), raw);
        }
    }

    #[test]
    fn ids_order_by_raw_value() {
        assert!(StationId::new(1) < StationId::new(2));
        assert_eq!(LineId::new(7), LineId::new(7));
    }
}
