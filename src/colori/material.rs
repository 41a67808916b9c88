use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Material {
    Textiles,
    Ceramics,
    Paintings,
}

impl Material {
    pub const ALL: [Self; 3] = [Self::Textiles, Self::Ceramics, Self::Paintings];
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-player stock of stored materials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Materials([u32; 3]);

impl Materials {
    pub fn get(&self, material: Material) -> u32 {
        self.0[material.index()]
    }
    pub fn add(&mut self, material: Material) {
        self.0[material.index()] += 1;
    }
    pub fn remove(&mut self, material: Material) {
        assert!(self.get(material) > 0, "no {:?} stored", material);
        self.0[material.index()] -= 1;
    }
}
