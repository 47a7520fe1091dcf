use log::debug;
use thiserror::Error;

mod unit;

pub use unit::{Dimension, Unit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unsupported source unit: {0}")]
    UnsupportedSourceUnit(String),
    #[error("Unsupported target unit: {0}")]
    UnsupportedTargetUnit(String),
    #[error("Cannot convert {from} to {to}.")]
    IncompatibleUnits { from: String, to: String },
    #[error("{0}")]
    Syntax(String),
}

/// Converts `value` between two units of the same dimension.
///
/// Unit names are matched case-insensitively. The source unit is checked
/// before the target unit.
pub fn convert(value: f64, unit_from: &str, unit_to: &str) -> Result<f64, ConversionError> {
    let from: Unit = unit_from
        .parse()
        .map_err(|_| ConversionError::UnsupportedSourceUnit(unit_from.to_string()))?;
    let to: Unit = unit_to
        .parse()
        .map_err(|_| ConversionError::UnsupportedTargetUnit(unit_to.to_string()))?;

    if from.dimension() != to.dimension() {
        return Err(ConversionError::IncompatibleUnits {
            from: unit_from.to_string(),
            to: unit_to.to_string(),
        });
    }

    let base = from.base_value(value);
    let result = to.value_from_base(base);
    debug!(
        "convert {} {:?} -> {} {:?} (base {} {})",
        value,
        from,
        result,
        to,
        base,
        from.dimension().base_unit().symbol()
    );
    Ok(result)
}
