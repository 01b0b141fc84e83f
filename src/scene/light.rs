use crate::core::{Colour, Point3D};

/// A single, unshadowed point light, with no physical size and no falloff with distance.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Light {
    pub position: Point3D,
    pub intensity: Colour,
}

impl Light {
    pub fn point(intensity: Colour, position: Point3D) -> Self {
        Light {
            position,
            intensity,
        }
    }

    pub fn sample(&self) -> LightSample {
        LightSample::new(self.position, self.intensity)
    }
}

/// The position and colour a `Light` contributes at the moment it's evaluated; kept
/// distinct from `Light` so shading code doesn't need to care how many lights contributed.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LightSample {
    pub position: Point3D,
    pub colour: Colour,
}

impl LightSample {
    pub fn new(position: Point3D, colour: Colour) -> Self {
        LightSample { position, colour }
    }
}
