//! Cost configuration for commutes and road trips.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ShareError};
use crate::core::types::{Money, TripMode};

/// Daily commute cost configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommuteCost {
    /// Cost of one commute day, the same for every day.
    pub daily_cost: Money,
    /// Number of commute days (periods).
    pub day_count: usize,
}

impl Default for CommuteCost {
    fn default() -> Self {
        Self {
            daily_cost: 2000.0,
            day_count: 5,
        }
    }
}

impl CommuteCost {
    /// Create a commute configuration.
    pub fn new(daily_cost: Money, day_count: usize) -> Self {
        Self {
            daily_cost,
            day_count,
        }
    }
}

/// Single road-trip fuel cost configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadTripCost {
    /// Trip distance.
    pub distance: f64,
    /// Distance travelled per unit of fuel.
    pub fuel_efficiency: f64,
    /// Price of one unit of fuel.
    pub fuel_unit_price: Money,
}

impl Default for RoadTripCost {
    fn default() -> Self {
        // 200 km at 15 km/l with fuel at 270 per litre
        Self {
            distance: 200.0,
            fuel_efficiency: 15.0,
            fuel_unit_price: 270.0,
        }
    }
}

impl RoadTripCost {
    /// Create a road-trip configuration.
    pub fn new(distance: f64, fuel_efficiency: f64, fuel_unit_price: Money) -> Self {
        Self {
            distance,
            fuel_efficiency,
            fuel_unit_price,
        }
    }

    /// Fuel cost of the whole trip: `distance / efficiency * unit price`.
    ///
    /// Zero efficiency, or inputs that produce an infinite or NaN cost, are rejected.
    pub fn trip_cost(&self) -> Result<Money> {
        if self.fuel_efficiency == 0.0 {
            return Err(ShareError::degenerate("fuel efficiency is zero"));
        }
        let cost = self.distance / self.fuel_efficiency * self.fuel_unit_price;
        if !cost.is_finite() {
            return Err(ShareError::degenerate(format!(
                "trip cost is not finite (distance={}, efficiency={}, price={})",
                self.distance, self.fuel_efficiency, self.fuel_unit_price
            )));
        }
        Ok(cost)
    }
}

/// Full cost parameters for an allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostParameters {
    /// Commute mode inputs.
    pub commute: CommuteCost,
    /// Road-trip mode inputs.
    pub road_trip: RoadTripCost,
    /// Tolls for the whole trip or series.
    pub tolls: Money,
    /// Parking for the whole trip or series.
    pub parking: Money,
}

impl CostParameters {
    /// Commute parameters with no shared fees.
    pub fn commute(daily_cost: Money, day_count: usize) -> Self {
        Self {
            commute: CommuteCost::new(daily_cost, day_count),
            ..Self::default()
        }
    }

    /// Road-trip parameters with no shared fees.
    pub fn road_trip(distance: f64, fuel_efficiency: f64, fuel_unit_price: Money) -> Self {
        Self {
            road_trip: RoadTripCost::new(distance, fuel_efficiency, fuel_unit_price),
            ..Self::default()
        }
    }

    /// Set tolls.
    pub fn with_tolls(mut self, tolls: Money) -> Self {
        self.tolls = tolls;
        self
    }

    /// Set parking.
    pub fn with_parking(mut self, parking: Money) -> Self {
        self.parking = parking;
        self
    }

    /// Combined shared fees.
    #[inline]
    pub fn shared_fees(&self) -> Money {
        self.tolls + self.parking
    }

    /// Number of periods for a mode: the day count when commuting, 1 for a road trip.
    pub fn periods(&self, mode: TripMode) -> usize {
        match mode {
            TripMode::Commute => self.commute.day_count,
            TripMode::RoadTrip => 1,
        }
    }

    /// Cost charged for every period of a mode.
    pub fn period_cost(&self, mode: TripMode) -> Result<Money> {
        match mode {
            TripMode::Commute => Ok(self.commute.daily_cost),
            TripMode::RoadTrip => self.road_trip.trip_cost(),
        }
    }
}

/// Common commute lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPreset {
    /// Five working days.
    WorkWeek,
    /// Two working weeks.
    TwoWeeks,
    /// A working month.
    WorkMonth,
    /// Any other day count.
    Custom(usize),
}

impl DayPreset {
    /// Number of days the preset stands for.
    pub fn days(self) -> usize {
        match self {
            DayPreset::WorkWeek => 5,
            DayPreset::TwoWeeks => 10,
            DayPreset::WorkMonth => 22,
            DayPreset::Custom(days) => days,
        }
    }
}
