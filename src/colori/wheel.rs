use super::color::Color;
use serde::Deserialize;
use serde::Serialize;

/// Per-player stock of color pips, indexed by wheel position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorWheel([u32; 12]);

impl ColorWheel {
    pub fn get(&self, color: Color) -> u32 {
        self.0[color.index()]
    }
    pub fn add(&mut self, color: Color, n: u32) {
        self.0[color.index()] += n;
    }
    pub fn remove(&mut self, color: Color) -> bool {
        match self.0[color.index()] {
            0 => false,
            _ => {
                self.0[color.index()] -= 1;
                true
            }
        }
    }
    /// consume both inputs and gain their mixture
    pub fn mix(&mut self, a: Color, b: Color) {
        assert!(self.get(a) > 0 && self.get(b) > 0, "missing {} or {}", a, b);
        let result = a.mix(&b);
        self.remove(a);
        self.remove(b);
        self.add(result, 1);
    }
    pub fn affords(&self, cost: &[Color]) -> bool {
        let mut need = [0u32; 12];
        cost.iter().for_each(|c| need[c.index()] += 1);
        need.iter().zip(self.0.iter()).all(|(need, have)| need <= have)
    }
    pub fn pay(&mut self, cost: &[Color]) {
        assert!(self.affords(cost), "cannot pay {:?}", cost);
        cost.iter().for_each(|c| {
            self.remove(*c);
        });
    }
    /// colors with at least one pip, in wheel order
    pub fn owned(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL.into_iter().filter(|c| self.get(*c) > 0)
    }
    /// distinct mixable pairs currently on the wheel, in wheel order
    pub fn mixes(&self) -> Vec<(Color, Color)> {
        let owned = self.owned().collect::<Vec<_>>();
        owned
            .iter()
            .enumerate()
            .flat_map(|(i, a)| owned[i + 1..].iter().map(move |b| (*a, *b)))
            .filter(|(a, b)| a.mixes(b))
            .collect()
    }
}

impl From<&[Color]> for ColorWheel {
    fn from(colors: &[Color]) -> Self {
        let mut wheel = Self::default();
        colors.iter().for_each(|c| wheel.add(*c, 1));
        wheel
    }
}
