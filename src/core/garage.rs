use crate::domain::model::{ArrivalOutcome, Car, DepartureOutcome};
use std::iter::from_fn;

/// Single-lane garage: a bounded stack where the last car in is the first
/// one able to leave.
#[derive(Debug, Clone)]
pub struct Garage {
    cars: Vec<Car>,
    capacity: usize,
}

impl Garage {
    pub const DEFAULT_CAPACITY: usize = 10;
    pub const MAX_CAPACITY: usize = 100_000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cars: Vec::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cars.len() >= self.capacity
    }

    pub fn arrive(&mut self, plate: &str) -> ArrivalOutcome {
        if self.is_full() {
            tracing::debug!(plate, capacity = self.capacity, "garage full, arrival refused");
            return ArrivalOutcome::Full;
        }

        self.cars.push(Car::new(plate));
        tracing::debug!(plate, occupied = self.cars.len(), "car parked");
        ArrivalOutcome::Admitted
    }

    /// Removes the topmost car with `plate`. Every car above it is moved out
    /// and back in, keeping their order.
    pub fn depart(&mut self, plate: &str) -> DepartureOutcome {
        if self.cars.is_empty() {
            return DepartureOutcome::Empty;
        }

        let Some(depth) = self.cars.iter().rev().position(|car| car.plate() == plate) else {
            return DepartureOutcome::NotFound;
        };

        // Top of the stack first.
        let mut moved: Vec<Car> = Vec::with_capacity(depth);
        moved.extend(from_fn(|| self.cars.pop()).take(depth));

        let departed = self.cars.pop();
        debug_assert_eq!(departed.as_ref().map(Car::plate), Some(plate));

        self.cars.extend(moved.into_iter().rev());

        tracing::debug!(plate, moved_out = depth, occupied = self.cars.len(), "car departed");
        DepartureOutcome::Departed { moved_out: depth }
    }

    /// Plates bottom-to-top, or `None` when nothing is parked.
    pub fn list(&self) -> Option<Vec<&str>> {
        if self.cars.is_empty() {
            None
        } else {
            Some(self.cars.iter().map(Car::plate).collect())
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }
}

impl Default for Garage {
    fn default() -> Self {
        Self::new()
    }
}
