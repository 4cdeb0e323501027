// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::err::FeeScheduleError;
use carpark_core::prelude::TimeDelta;
use carpark_model::prelude::VehicleClass;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Prices a stay. Implementations must be pure.
pub trait FeePolicy {
    fn fee(&self, duration: TimeDelta<i64>, class: VehicleClass) -> f64;
}

impl<F> FeePolicy for F
where
    F: Fn(TimeDelta<i64>, VehicleClass) -> f64,
{
    #[inline]
    fn fee(&self, duration: TimeDelta<i64>, class: VehicleClass) -> f64 {
        self(duration, class)
    }
}

/// Linear rate table: `base_rate_per_hour * multiplier(class) * hours`.
///
/// `seconds_per_hour` sets the billing unit. The default of `1.0` bills every
/// elapsed second as a full hour, which keeps short demo runs visible; use
/// [`FeeSchedule::hourly`] for wall-clock hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FeeSchedule {
    base_rate_per_hour: f64,
    motorcycle_multiplier: f64,
    car_multiplier: f64,
    truck_multiplier: f64,
    seconds_per_hour: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            base_rate_per_hour: 6.0,
            motorcycle_multiplier: 1.0,
            car_multiplier: 1.5,
            truck_multiplier: 2.0,
            seconds_per_hour: 1.0,
        }
    }
}

impl FeeSchedule {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hourly() -> Self {
        Self::default().with_seconds_per_hour(3600.0)
    }

    #[inline]
    pub fn with_base_rate_per_hour(mut self, v: f64) -> Self {
        self.base_rate_per_hour = v;
        self
    }

    #[inline]
    pub fn with_motorcycle_multiplier(mut self, v: f64) -> Self {
        self.motorcycle_multiplier = v;
        self
    }

    #[inline]
    pub fn with_car_multiplier(mut self, v: f64) -> Self {
        self.car_multiplier = v;
        self
    }

    #[inline]
    pub fn with_truck_multiplier(mut self, v: f64) -> Self {
        self.truck_multiplier = v;
        self
    }

    #[inline]
    pub fn with_seconds_per_hour(mut self, v: f64) -> Self {
        self.seconds_per_hour = v;
        self
    }

    #[inline]
    pub fn base_rate_per_hour(&self) -> f64 {
        self.base_rate_per_hour
    }

    #[inline]
    pub fn seconds_per_hour(&self) -> f64 {
        self.seconds_per_hour
    }

    #[inline]
    pub fn multiplier(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Small => self.motorcycle_multiplier,
            VehicleClass::Medium => self.car_multiplier,
            VehicleClass::Large => self.truck_multiplier,
        }
    }

    pub fn validate(&self) -> Result<(), FeeScheduleError> {
        let fields = [
            ("baseRatePerHour", self.base_rate_per_hour),
            ("motorcycleMultiplier", self.motorcycle_multiplier),
            ("carMultiplier", self.car_multiplier),
            ("truckMultiplier", self.truck_multiplier),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(FeeScheduleError::InvalidValue { field, value });
            }
        }
        if !self.seconds_per_hour.is_finite() || self.seconds_per_hour <= 0.0 {
            return Err(FeeScheduleError::InvalidValue {
                field: "secondsPerHour",
                value: self.seconds_per_hour,
            });
        }
        if self.motorcycle_multiplier > self.car_multiplier
            || self.car_multiplier > self.truck_multiplier
        {
            return Err(FeeScheduleError::UnorderedMultipliers);
        }
        Ok(())
    }

    /// Finishes a setter chain, rejecting values [`FeeSchedule::validate`] refuses.
    pub fn build(self) -> Result<Self, FeeScheduleError> {
        self.validate()?;
        Ok(self)
    }

    /// Parses and validates a JSON schedule. Missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, FeeScheduleError> {
        let schedule: Self = serde_json::from_str(s)?;
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FeeScheduleError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl FeePolicy for FeeSchedule {
    #[inline]
    fn fee(&self, duration: TimeDelta<i64>, class: VehicleClass) -> f64 {
        let hours = duration.non_negative().as_seconds_f64() / self.seconds_per_hour;
        let fee = self.multiplier(class) * self.base_rate_per_hour * hours;
        // Schedules assembled through the setters skip validation.
        if fee.is_finite() { fee.max(0.0) } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn secs(s: i64) -> TimeDelta<i64> {
        TimeDelta::from_secs(s)
    }

    #[test]
    fn test_default_rate_table() {
        let f = FeeSchedule::default();
        assert_eq!(f.fee(secs(3600), VehicleClass::Small), 21600.0);
        assert_eq!(f.fee(secs(4), VehicleClass::Small), 24.0);
        assert_eq!(f.fee(secs(4), VehicleClass::Medium), 36.0);
        assert_eq!(f.fee(secs(4), VehicleClass::Large), 48.0);
    }

    #[test]
    fn test_hourly_billing() {
        let f = FeeSchedule::hourly();
        assert_eq!(f.fee(secs(3600), VehicleClass::Small), 6.0);
        assert_eq!(f.fee(secs(7200), VehicleClass::Medium), 18.0);
        assert_eq!(f.fee(secs(1800), VehicleClass::Large), 6.0);
    }

    #[test]
    fn test_fractional_seconds_are_billed() {
        let f = FeeSchedule::default();
        assert_eq!(
            f.fee(TimeDelta::from_millis(500), VehicleClass::Small),
            3.0
        );
    }

    #[test]
    fn test_negative_duration_costs_nothing() {
        let f = FeeSchedule::default();
        assert_eq!(f.fee(secs(-10), VehicleClass::Large), 0.0);
        assert_eq!(f.fee(TimeDelta::zero(), VehicleClass::Medium), 0.0);
    }

    #[test]
    fn test_monotone_in_duration_and_class() {
        let f = FeeSchedule::default();
        for class in VehicleClass::ALL {
            let mut prev = 0.0;
            for s in [0, 1, 2, 30, 600, 3600, 86_400] {
                let fee = f.fee(secs(s), class);
                assert!(fee >= prev);
                prev = fee;
            }
        }
        for s in [0, 1, 59, 3600] {
            let fees: Vec<f64> = VehicleClass::ALL.iter().map(|c| f.fee(secs(s), *c)).collect();
            assert!(fees.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_builder_setters() {
        let f = FeeSchedule::new()
            .with_base_rate_per_hour(2.0)
            .with_motorcycle_multiplier(0.5)
            .with_car_multiplier(1.0)
            .with_truck_multiplier(3.0);
        assert_eq!(f.base_rate_per_hour(), 2.0);
        assert_eq!(f.multiplier(VehicleClass::Small), 0.5);
        assert_eq!(f.fee(secs(10), VehicleClass::Large), 60.0);
        assert!(f.validate().is_ok());
        assert_eq!(f.build().unwrap(), f);
    }

    #[test]
    fn test_build_rejects_invalid_setters() {
        let err = FeeSchedule::new().with_base_rate_per_hour(-6.0).build().unwrap_err();
        assert!(matches!(
            err,
            FeeScheduleError::InvalidValue { field: "baseRatePerHour", .. }
        ));
        let err = FeeSchedule::new().with_seconds_per_hour(0.0).build().unwrap_err();
        assert!(matches!(
            err,
            FeeScheduleError::InvalidValue { field: "secondsPerHour", .. }
        ));
        assert!(FeeSchedule::default().build().is_ok());
    }

    #[test]
    fn test_unvalidated_schedule_bills_zero_instead_of_negative_or_nan() {
        let negative = FeeSchedule::new().with_base_rate_per_hour(-6.0);
        assert_eq!(negative.fee(secs(10), VehicleClass::Small), 0.0);

        let no_unit = FeeSchedule::new().with_seconds_per_hour(0.0);
        assert_eq!(no_unit.fee(TimeDelta::zero(), VehicleClass::Small), 0.0);
        assert_eq!(no_unit.fee(secs(10), VehicleClass::Large), 0.0);
    }

    #[test]
    fn test_json_uses_camel_case_and_defaults() {
        let f = FeeSchedule::from_json_str(r#"{ "baseRatePerHour": 4.0, "truckMultiplier": 3.0 }"#)
            .unwrap();
        assert_eq!(f.base_rate_per_hour(), 4.0);
        assert_eq!(f.multiplier(VehicleClass::Medium), 1.5);
        assert_eq!(f.multiplier(VehicleClass::Large), 3.0);
        assert_eq!(f.seconds_per_hour(), 1.0);

        let empty = FeeSchedule::from_json_str("{}").unwrap();
        assert_eq!(empty, FeeSchedule::default());
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let err = FeeSchedule::from_json_str(r#"{ "busMultiplier": 4.0 }"#).unwrap_err();
        assert!(matches!(err, FeeScheduleError::Json(_)));
    }

    #[test]
    fn test_validation() {
        let err = FeeSchedule::new().with_base_rate_per_hour(-1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            FeeScheduleError::InvalidValue { field: "baseRatePerHour", .. }
        ));

        let err = FeeSchedule::new().with_seconds_per_hour(0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            FeeScheduleError::InvalidValue { field: "secondsPerHour", .. }
        ));

        let err = FeeSchedule::new().with_car_multiplier(5.0).validate().unwrap_err();
        assert!(matches!(err, FeeScheduleError::UnorderedMultipliers));

        let err = FeeSchedule::new()
            .with_truck_multiplier(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, FeeScheduleError::InvalidValue { .. }));
    }

    #[test]
    fn test_closures_are_policies() {
        let flat = |_: TimeDelta<i64>, _: VehicleClass| 5.0;
        assert_eq!(flat.fee(secs(100), VehicleClass::Large), 5.0);
    }

    #[test]
    fn test_loads_shipped_schedules() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config");
        let demo = FeeSchedule::from_path(dir.join("fees.demo.json")).unwrap();
        assert_eq!(demo, FeeSchedule::default());
        let hourly = FeeSchedule::from_path(dir.join("fees.hourly.json")).unwrap();
        assert_eq!(hourly, FeeSchedule::hourly());
    }
}
