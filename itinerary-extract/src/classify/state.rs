//! Per-block classification state.
//!
//! The state is flat: opening a container overwrites the active field and
//! context, and closing one only changes the depth. A text node is therefore
//! attributed to the most recently *opened* classified container, not to its
//! direct parent. Booking pages put each value right after its label
//! container, which is what makes this work.

use std::fmt;

use crate::markup::Tag;

use super::class::ContainerClass;
use super::error::{DirectionalLabel, InternalStateError};

/// Which sub-block of a travel block we are inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    #[default]
    None,
    Departure,
    Arrival,
    /// Inside the car/seat region.
    Placement,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Context::None => "none",
            Context::Departure => "departure",
            Context::Arrival => "arrival",
            Context::Placement => "placement",
        };
        f.write_str(name)
    }
}

/// A record field a text node can be committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
    Duration,
    From,
    To,
    /// Car or seat, decided by the text itself.
    Seat,
    Train,
    Ref,
    PlaceType,
}

/// Where the next non-empty text node goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveField {
    #[default]
    Ignore,
    Field(Field),
}

/// Mutable state for classifying one travel block.
///
/// Created when the block's opening tag has been consumed, so the depth
/// starts at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationState {
    depth: u32,
    active: ActiveField,
    context: Context,
}

impl ClassificationState {
    pub fn new() -> Self {
        Self {
            depth: 1,
            active: ActiveField::Ignore,
            context: Context::None,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn active(&self) -> ActiveField {
        self.active
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// Enter a nested container and re-dispatch on its class values.
    ///
    /// Each `class` attribute is dispatched in order. A container without
    /// any class selects the seat field inside a placement region and leaves
    /// the state alone elsewhere.
    pub fn open(&mut self, tag: &Tag) -> Result<(), InternalStateError> {
        self.depth += 1;

        let mut classed = false;
        for value in tag.attr_values("class") {
            classed = true;
            self.dispatch(ContainerClass::parse(value))?;
        }

        if !classed && self.context == Context::Placement {
            self.active = ActiveField::Field(Field::Seat);
        }

        Ok(())
    }

    /// Leave a container. Returns true once the block itself is closed.
    pub fn close(&mut self) -> bool {
        self.depth = self.depth.saturating_sub(1);
        self.depth == 0
    }

    fn dispatch(&mut self, class: ContainerClass) -> Result<(), InternalStateError> {
        self.active = match class {
            ContainerClass::Departure => {
                self.context = Context::Departure;
                ActiveField::Ignore
            }
            ContainerClass::Arrival => {
                self.context = Context::Arrival;
                ActiveField::Ignore
            }
            ContainerClass::TimeOfDay => ActiveField::Field(self.directional(
                DirectionalLabel::TimeOfDay,
                Field::Start,
                Field::End,
            )?),
            ContainerClass::Station => ActiveField::Field(self.directional(
                DirectionalLabel::Station,
                Field::From,
                Field::To,
            )?),
            ContainerClass::Duration => ActiveField::Field(Field::Duration),
            ContainerClass::PlacementInfo => {
                self.context = Context::Placement;
                self.active
            }
            ContainerClass::TrainInfo => ActiveField::Field(Field::Train),
            ContainerClass::PlacementType => ActiveField::Field(Field::PlaceType),
            ContainerClass::Reference => ActiveField::Field(Field::Ref),
            ContainerClass::Empty if self.context == Context::Placement => {
                ActiveField::Field(Field::Seat)
            }
            ContainerClass::Empty | ContainerClass::Other => ActiveField::Ignore,
        };
        Ok(())
    }

    fn directional(
        &self,
        label: DirectionalLabel,
        departure: Field,
        arrival: Field,
    ) -> Result<Field, InternalStateError> {
        match self.context {
            Context::Departure => Ok(departure),
            Context::Arrival => Ok(arrival),
            context => Err(InternalStateError { label, context }),
        }
    }
}

impl Default for ClassificationState {
    fn default() -> Self {
        Self::new()
    }
}
