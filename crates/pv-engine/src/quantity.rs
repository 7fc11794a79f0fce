//! Response quantities reported at the two query depths.

use std::fmt;

/// Stress and strain components collected from one engine record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantity {
    VerticalStress,
    TangentialStress,
    RadialStress,
    ShearStress,
    VerticalStrain,
    TangentialStrain,
    RadialStrain,
}

impl Quantity {
    /// Report column order.
    pub const ALL: [Quantity; 7] = [
        Quantity::VerticalStress,
        Quantity::TangentialStress,
        Quantity::RadialStress,
        Quantity::ShearStress,
        Quantity::VerticalStrain,
        Quantity::TangentialStrain,
        Quantity::RadialStrain,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Quantity::VerticalStress => "sigz",
            Quantity::TangentialStress => "sigt",
            Quantity::RadialStress => "sigr",
            Quantity::ShearStress => "tau",
            Quantity::VerticalStrain => "epz",
            Quantity::TangentialStrain => "ept",
            Quantity::RadialStrain => "epr",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Quantity::VerticalStress => "σz",
            Quantity::TangentialStress => "σt",
            Quantity::RadialStress => "σr",
            Quantity::ShearStress => "τ",
            Quantity::VerticalStrain => "εz",
            Quantity::TangentialStrain => "εt",
            Quantity::RadialStrain => "εr",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The two depths queried on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPoint {
    /// Depth equal to the surface thickness.
    Full,
    /// Depth equal to half the surface thickness.
    Half,
}

impl QueryPoint {
    pub const ALL: [QueryPoint; 2] = [QueryPoint::Full, QueryPoint::Half];

    pub fn depth(self, surface_thickness: f64) -> f64 {
        match self {
            QueryPoint::Full => surface_thickness,
            QueryPoint::Half => surface_thickness / 2.0,
        }
    }

    /// Column suffix used in report headers.
    pub fn suffix(self) -> &'static str {
        match self {
            QueryPoint::Full => "h1",
            QueryPoint::Half => "h1/2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryPoint::Full => "full",
            QueryPoint::Half => "half",
        }
    }
}

/// Quantities captured at one depth. Absent values stay `None`, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResponseSet {
    values: [Option<f64>; 7],
}

impl ResponseSet {
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        self.values[quantity.slot()]
    }

    pub fn set(&mut self, quantity: Quantity, value: f64) {
        self.values[quantity.slot()] = Some(value);
    }

    pub fn populated_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.populated_count() == Quantity::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quantity, Option<f64>)> + '_ {
        Quantity::ALL.iter().map(|&q| (q, self.get(q)))
    }
}

/// Decoded responses of one run at both query depths.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunResult {
    pub full: ResponseSet,
    pub half: ResponseSet,
}

impl RunResult {
    pub fn at(&self, point: QueryPoint) -> &ResponseSet {
        match point {
            QueryPoint::Full => &self.full,
            QueryPoint::Half => &self.half,
        }
    }

    pub fn at_mut(&mut self, point: QueryPoint) -> &mut ResponseSet {
        match point {
            QueryPoint::Full => &mut self.full,
            QueryPoint::Half => &mut self.half,
        }
    }

    pub fn missing_count(&self) -> usize {
        2 * Quantity::ALL.len() - self.full.populated_count() - self.half.populated_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_set_starts_empty() {
        let set = ResponseSet::default();
        assert!(set.is_empty());
        assert!(Quantity::ALL.iter().all(|&q| set.get(q).is_none()));
    }

    #[test]
    fn set_and_get_by_name() {
        let mut set = ResponseSet::default();
        set.set(Quantity::ShearStress, -0.125);
        assert_eq!(set.get(Quantity::ShearStress), Some(-0.125));
        assert_eq!(set.get(Quantity::RadialStress), None);
        assert_eq!(set.populated_count(), 1);
    }

    #[test]
    fn query_depths() {
        assert_eq!(QueryPoint::Full.depth(40.0), 40.0);
        assert_eq!(QueryPoint::Half.depth(45.0), 22.5);
    }

    #[test]
    fn missing_count_covers_both_depths() {
        let mut result = RunResult::default();
        assert_eq!(result.missing_count(), 14);
        result.full.set(Quantity::VerticalStrain, 1e-4);
        assert_eq!(result.missing_count(), 13);
    }
}
