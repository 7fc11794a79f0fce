use pv_project::{Combination, LayerConstants};

/// Everything the engine needs for one run. Built once per grid point, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSpec {
    surface_modulus: f64,
    base_modulus: f64,
    surface_thickness: f64,
    constants: LayerConstants,
}

impl RunSpec {
    pub fn new(combination: &Combination, constants: &LayerConstants) -> Self {
        Self {
            surface_modulus: combination.surface_modulus,
            base_modulus: combination.base_modulus,
            surface_thickness: combination.surface_thickness,
            constants: *constants,
        }
    }

    pub fn surface_modulus(&self) -> f64 {
        self.surface_modulus
    }

    pub fn base_modulus(&self) -> f64 {
        self.base_modulus
    }

    pub fn surface_thickness(&self) -> f64 {
        self.surface_thickness
    }

    pub fn constants(&self) -> &LayerConstants {
        &self.constants
    }
}
