//! Static descriptive data for the sun and the eight planets.

use bevy::prelude::*;

/// Identifier of an orbiting body, in orbital order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    pub const ALL: [BodyId; 8] = [
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Position in [`BodyId::ALL`] and in [`PLANETS`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase identifier, e.g. `"mars"`.
    pub fn slug(self) -> &'static str {
        match self {
            BodyId::Mercury => "mercury",
            BodyId::Venus => "venus",
            BodyId::Earth => "earth",
            BodyId::Mars => "mars",
            BodyId::Jupiter => "jupiter",
            BodyId::Saturn => "saturn",
            BodyId::Uranus => "uranus",
            BodyId::Neptune => "neptune",
        }
    }

    /// Name given to the speed slider controlling this body (`"<slug>-speed"`).
    pub fn slider_name(self) -> String {
        format!("{}-speed", self.slug())
    }

    pub fn descriptor(self) -> &'static BodyDescriptor {
        &PLANETS[self.index()]
    }
}

/// Immutable description of one celestial body.
#[derive(Debug, Clone, Copy)]
pub struct BodyDescriptor {
    pub display_name: &'static str,
    pub radius: f32,
    pub orbital_distance: f32,
    pub base_angular_speed: f32,
    /// sRGB colour as `0xRRGGBB`.
    pub color: u32,
}

impl BodyDescriptor {
    pub fn bevy_color(&self) -> Color {
        Color::srgb_u8(
            ((self.color >> 16) & 0xff) as u8,
            ((self.color >> 8) & 0xff) as u8,
            (self.color & 0xff) as u8,
        )
    }
}

pub const SUN: BodyDescriptor = BodyDescriptor {
    display_name: "Sun",
    radius: 5.0,
    orbital_distance: 0.0,
    base_angular_speed: 0.0,
    color: 0xffff00,
};

/// Planet descriptors, indexed by [`BodyId::index`].
pub const PLANETS: [BodyDescriptor; 8] = [
    BodyDescriptor {
        display_name: "Mercury",
        radius: 0.8,
        orbital_distance: 10.0,
        base_angular_speed: 1.0,
        color: 0x8c8c8c,
    },
    BodyDescriptor {
        display_name: "Venus",
        radius: 1.2,
        orbital_distance: 15.0,
        base_angular_speed: 1.0,
        color: 0xe39e1c,
    },
    BodyDescriptor {
        display_name: "Earth",
        radius: 1.5,
        orbital_distance: 20.0,
        base_angular_speed: 1.0,
        color: 0x2b83ff,
    },
    BodyDescriptor {
        display_name: "Mars",
        radius: 1.0,
        orbital_distance: 25.0,
        base_angular_speed: 1.0,
        color: 0xc1440e,
    },
    BodyDescriptor {
        display_name: "Jupiter",
        radius: 3.0,
        orbital_distance: 35.0,
        base_angular_speed: 1.0,
        color: 0xd8ca9d,
    },
    BodyDescriptor {
        display_name: "Saturn",
        radius: 2.5,
        orbital_distance: 45.0,
        base_angular_speed: 1.0,
        color: 0xe3bb76,
    },
    BodyDescriptor {
        display_name: "Uranus",
        radius: 2.0,
        orbital_distance: 55.0,
        base_angular_speed: 1.0,
        color: 0x5580aa,
    },
    BodyDescriptor {
        display_name: "Neptune",
        radius: 2.0,
        orbital_distance: 65.0,
        base_angular_speed: 1.0,
        color: 0x366896,
    },
];
