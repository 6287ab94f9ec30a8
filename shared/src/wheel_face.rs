//! Layout of the wheel: one conic-gradient slice per prize, sized by its
//! probability, plus the placement of each prize label.

use serde::{Deserialize, Serialize};

use crate::shared_roulette::PrizeSlice;

/// Slices start at the top of the wheel rather than at 3 o'clock.
pub const ANGLE_OFFSET: f64 = -90.0;

pub const EMPTY_WHEEL_GRADIENT: &str = "conic-gradient(#E5E7EB 0deg 360deg)";

pub const PALETTE: [&str; 12] = [
    "#F59E0B", "#FDE047", "#86EFAC", "#22C55E", "#A7F3D0", "#FCD34D",
    "#FDBA74", "#F97316", "#FCA5A5", "#FB7185", "#FBBF24", "#4ADE80",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelSegment {
    pub name: String,
    pub color: String,
    pub start: f64,
    pub end: f64,
}

impl WheelSegment {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelLabel {
    pub name: String,
    /// Rotation of the label around the wheel centre, in `[0, 360)`.
    pub angle: f64,
    pub font_size: u32,
    pub radius: u32,
}

impl WheelLabel {
    /// Characters are stacked one per line along the radius.
    pub fn chars(&self) -> Vec<char> {
        self.name.chars().collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelFace {
    pub gradient: String,
    pub segments: Vec<WheelSegment>,
    pub labels: Vec<WheelLabel>,
}

impl Default for WheelFace {
    fn default() -> Self {
        Self {
            gradient: EMPTY_WHEEL_GRADIENT.to_string(),
            segments: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl WheelFace {
    /// Prizes with a non-positive probability get no slice.
    pub fn from_prizes(prizes: &[PrizeSlice]) -> Self {
        let usable: Vec<&PrizeSlice> = prizes
            .iter()
            .filter(|prize| prize.probability.is_finite() && prize.probability > 0.0)
            .collect();
        let total: f64 = usable.iter().map(|prize| prize.probability).sum();
        if total <= 0.0 {
            return Self::default();
        }

        let mut segments = Vec::with_capacity(usable.len());
        let mut start = 0.0;
        for (index, prize) in usable.iter().enumerate() {
            let end = start + prize.probability / total * 360.0;
            segments.push(WheelSegment {
                name: prize.name.clone(),
                color: PALETTE[index % PALETTE.len()].to_string(),
                start,
                end,
            });
            start = end;
        }

        let parts: Vec<String> = segments
            .iter()
            .map(|s| format!("{} {:.2}deg {:.2}deg", s.color, s.start, s.end))
            .collect();
        let gradient = format!("conic-gradient(from {}deg, {})", ANGLE_OFFSET, parts.join(", "));
        let labels = segments.iter().map(label_for).collect();

        Self {
            gradient,
            segments,
            labels,
        }
    }
}

fn label_for(segment: &WheelSegment) -> WheelLabel {
    let length = segment.name.chars().count().max(1) as u32;
    let overflow = length.saturating_sub(4);
    let span = segment.span();
    let (base, radius): (u32, u32) = if span >= 40.0 {
        (14, 104)
    } else if span >= 25.0 {
        (12, 96)
    } else {
        (10, 88)
    };

    WheelLabel {
        name: segment.name.clone(),
        angle: (segment.mid() + ANGLE_OFFSET).rem_euclid(360.0),
        font_size: base.saturating_sub(overflow).max(9),
        radius: radius.saturating_sub(overflow * 4).max(78),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prize(name: &str, probability: f64) -> PrizeSlice {
        PrizeSlice {
            name: name.to_string(),
            probability,
        }
    }

    #[test]
    fn test_no_usable_prizes_gives_grey_wheel() {
        let face = WheelFace::from_prizes(&[prize("銘謝惠顧", 0.0)]);
        assert_eq!(face, WheelFace::default());
        assert_eq!(face.gradient, EMPTY_WHEEL_GRADIENT);
    }

    #[test]
    fn test_slices_follow_probability() {
        let face = WheelFace::from_prizes(&[prize("頭獎", 1.0), prize("跳過", -2.0), prize("二獎", 3.0)]);
        assert_eq!(face.segments.len(), 2);
        assert_eq!(face.segments[0].end, 90.0);
        assert_eq!(face.segments[1].start, 90.0);
        assert_eq!(face.segments[1].end, 360.0);
        assert_eq!(face.segments[1].color, "#FDE047");
        assert_eq!(
            face.gradient,
            "conic-gradient(from -90deg, #F59E0B 0.00deg 90.00deg, #FDE047 90.00deg 360.00deg)"
        );
    }

    #[test]
    fn test_label_sizing() {
        let face = WheelFace::from_prizes(&[
            prize("頭獎", 50.0),
            prize("超級豪華大獎組合", 10.0),
            prize("小", 5.0),
        ]);
        // 50/65 of the wheel, short name
        assert_eq!(face.labels[0].font_size, 14);
        assert_eq!(face.labels[0].radius, 104);
        // ~55 degrees, eight characters
        assert_eq!(face.labels[1].font_size, 10);
        assert_eq!(face.labels[1].radius, 88);
        // ~27.7 degrees
        assert_eq!(face.labels[2].font_size, 12);
        assert_eq!(face.labels[2].radius, 96);
        assert_eq!(face.labels[2].chars(), vec!['小']);
    }

    #[test]
    fn test_label_angle_offset() {
        let face = WheelFace::from_prizes(&[prize("A", 1.0), prize("B", 1.0)]);
        assert_eq!(face.labels[0].angle, 0.0);
        assert_eq!(face.labels[1].angle, 180.0);
    }

    #[test]
    fn test_long_names_hit_label_floors() {
        let face = WheelFace::from_prizes(&[prize("一二三四五六七八九十", 1.0), prize("B", 30.0)]);
        // ~11.6 degrees, ten characters
        assert_eq!(face.labels[0].font_size, 9);
        assert_eq!(face.labels[0].radius, 78);
    }

    #[test]
    fn test_palette_cycles() {
        let prizes: Vec<PrizeSlice> = (0..13).map(|i| prize(&i.to_string(), 1.0)).collect();
        let face = WheelFace::from_prizes(&prizes);
        assert_eq!(face.segments[12].color, face.segments[0].color);
    }
}
