//! Plain records for the transit network: stations, lines and passengers.

use std::fmt;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_LINE_CAPACITY, DEFAULT_LINE_SPEED, DEFAULT_STATION_CAPACITY,
};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Unique station identifier (`S1`, `S2`, ...).
    StationId
);
string_id!(
    /// Unique line identifier, assigned sequentially as `L<n>`.
    LineId
);
string_id!(
    /// Unique passenger identifier (`P1`, `P2`, ...).
    PassengerId
);

/// Informational station category. Has no effect on line editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StationKind {
    #[default]
    Residential,
    Commercial,
    Industrial,
}

impl StationKind {
    pub fn label(self) -> &'static str {
        match self {
            StationKind::Residential => "residential",
            StationKind::Commercial => "commercial",
            StationKind::Industrial => "industrial",
        }
    }
}

/// A stop in the network, positioned in scene coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub x: f32,
    pub y: f32,
    pub kind: StationKind,
    /// Maximum number of waiting passengers the station is rated for.
    pub capacity: u32,
    /// Passengers currently waiting here.
    pub waiting: u32,
    /// Set once any line visits the station. Never cleared.
    pub connected: bool,
}

impl Station {
    pub fn new(id: StationId, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            kind: StationKind::default(),
            capacity: DEFAULT_STATION_CAPACITY,
            waiting: 0,
            connected: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// sRGB display color of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LineColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend each channel toward white by `factor` (0 = unchanged, 1 = white).
    pub fn lighten(self, factor: f32) -> Self {
        let blend = |c: u8| {
            let c = f32::from(c);
            (c + (255.0 - c) * factor).clamp(0.0, 255.0) as u8
        };
        Self::new(blend(self.r), blend(self.g), blend(self.b))
    }
}

/// A transit line: an ordered, duplicate-free sequence of station ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub color: LineColor,
    pub stations: Vec<StationId>,
    /// Carried for a future vehicle simulation; unused by the editor.
    pub capacity: u32,
    /// Carried for a future vehicle simulation; unused by the editor.
    pub speed: f32,
}

impl Line {
    pub fn new(id: LineId, color: LineColor, stations: Vec<StationId>) -> Self {
        Self {
            id,
            color,
            stations,
            capacity: DEFAULT_LINE_CAPACITY,
            speed: DEFAULT_LINE_SPEED,
        }
    }

    pub fn contains(&self, station: &StationId) -> bool {
        self.stations.contains(station)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: PassengerId,
    pub origin: StationId,
    pub dest: StationId,
    pub progress: f32,
    /// Line the passenger is riding, if boarded.
    pub onboard: Option<LineId>,
}

impl Passenger {
    pub fn new(id: PassengerId, origin: StationId, dest: StationId) -> Self {
        Self {
            id,
            origin,
            dest,
            progress: 0.0,
            onboard: None,
        }
    }
}
