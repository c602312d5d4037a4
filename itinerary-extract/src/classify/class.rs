//! Container class values recognised inside a travel block.

/// Meaning of a container's `class` attribute value.
///
/// Matching is exact: the booking page uses these literal values, and any
/// other value (including a superset such as `"duration big"`) is
/// [`ContainerClass::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerClass {
    /// Start of the departure sub-block.
    Departure,
    /// Start of the arrival sub-block.
    Arrival,
    /// Time-of-day label; departure or arrival depending on context.
    TimeOfDay,
    /// Station name; departure or arrival depending on context.
    Station,
    Duration,
    /// Car and seat region. Its unclassed children hold the values.
    PlacementInfo,
    TrainInfo,
    PlacementType,
    /// Booking reference (PNR locator).
    Reference,
    /// `class=""`.
    Empty,
    Other,
}

impl ContainerClass {
    /// Classify a raw attribute value.
    pub fn parse(value: &str) -> Self {
        match value {
            "departure" => Self::Departure,
            "arrival" => Self::Arrival,
            "travelTime libStatus4" => Self::TimeOfDay,
            "travelStation" => Self::Station,
            "duration" => Self::Duration,
            "placementInfo" => Self::PlacementInfo,
            "trainInfo" => Self::TrainInfo,
            "placementType" => Self::PlacementType,
            "prnLocatorValue" => Self::Reference,
            "" => Self::Empty,
            _ => Self::Other,
        }
    }
}
