use std::str::FromStr;

const METERS_PER_KILOMETER: f64 = 1000.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const KELVIN_OFFSET: f64 = 273.15;
const RANKINE_OFFSET: f64 = 459.67;
const FAHRENHEIT_SCALE: f64 = 1.8;
const POUNDS_PER_KG: f64 = 2.20462;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    Speed,
    Temperature,
    Mass,
}

impl Dimension {
    pub fn base_unit(&self) -> Unit {
        match self {
            Dimension::Speed => Unit::MetersPerSecond,
            Dimension::Temperature => Unit::Kelvin,
            Dimension::Mass => Unit::Kilogram,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    MetersPerSecond,
    KilometersPerHour,
    Celsius,
    Fahrenheit,
    Kelvin,
    Kilogram,
    Pound,
}

impl Unit {
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::MetersPerSecond | Unit::KilometersPerHour => Dimension::Speed,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Dimension::Temperature,
            Unit::Kilogram | Unit::Pound => Dimension::Mass,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::MetersPerSecond => "m/s",
            Unit::KilometersPerHour => "km/h",
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
            Unit::Kelvin => "K",
            Unit::Kilogram => "kg",
            Unit::Pound => "lb",
        }
    }

    /// Value expressed in the base unit of this unit's dimension.
    pub fn base_value(&self, value: f64) -> f64 {
        match self {
            Unit::KilometersPerHour => value * METERS_PER_KILOMETER / SECONDS_PER_HOUR,
            Unit::Celsius => value + KELVIN_OFFSET,
            Unit::Fahrenheit => (value + RANKINE_OFFSET) / FAHRENHEIT_SCALE,
            Unit::Pound => value / POUNDS_PER_KG,
            Unit::MetersPerSecond | Unit::Kelvin | Unit::Kilogram => value,
        }
    }

    pub fn value_from_base(&self, value: f64) -> f64 {
        match self {
            Unit::KilometersPerHour => value * SECONDS_PER_HOUR / METERS_PER_KILOMETER,
            Unit::Celsius => value - KELVIN_OFFSET,
            Unit::Fahrenheit => value * FAHRENHEIT_SCALE - RANKINE_OFFSET,
            Unit::Pound => value * POUNDS_PER_KG,
            Unit::MetersPerSecond | Unit::Kelvin | Unit::Kilogram => value,
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "m/s" => Ok(Unit::MetersPerSecond),
            "km/h" => Ok(Unit::KilometersPerHour),
            "c" => Ok(Unit::Celsius),
            "f" => Ok(Unit::Fahrenheit),
            "k" => Ok(Unit::Kelvin),
            "kg" => Ok(Unit::Kilogram),
            "lb" => Ok(Unit::Pound),
            _ => Err(format!("Unknown unit: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("KM/H".parse::<Unit>(), Ok(Unit::KilometersPerHour));
        assert_eq!("Kg".parse::<Unit>(), Ok(Unit::Kilogram));
        assert_eq!("c".parse::<Unit>(), Ok(Unit::Celsius));
        assert!("mph".parse::<Unit>().is_err());
    }

    #[test]
    fn test_base_units_are_identity() {
        for dimension in [Dimension::Speed, Dimension::Temperature, Dimension::Mass] {
            let base = dimension.base_unit();
            assert_eq!(base.dimension(), dimension);
            assert_eq!(base.base_value(12.5), 12.5);
            assert_eq!(base.value_from_base(12.5), 12.5);
        }
    }

    #[test]
    fn test_symbols_parse_back() {
        for unit in [
            Unit::MetersPerSecond,
            Unit::KilometersPerHour,
            Unit::Celsius,
            Unit::Fahrenheit,
            Unit::Kelvin,
            Unit::Kilogram,
            Unit::Pound,
        ] {
            assert_eq!(unit.symbol().parse::<Unit>(), Ok(unit));
        }
    }
}
