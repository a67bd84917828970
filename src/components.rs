use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BallId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(pub DVec2);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity(pub DVec2);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeInfo {
    pub radius: f64,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);

    /// Colors the randomized scenario picks from.
    pub const PALETTE: [Color; 7] = [
        Color::BLACK,
        Color::BLUE,
        Color::RED,
        Color::GREEN,
        Color::YELLOW,
        Color::ORANGE,
        Color::PURPLE,
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
