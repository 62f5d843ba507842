//! Initial body arrangements
//!
//! Every preset returns a fresh `Vec<Body>`. Only `random` depends on
//! anything but its arguments; pass a seeded rng to make it reproducible.

use std::f64::consts::PI;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ArrangementConfig, BodyConfig};
use crate::simulation::states::{Body, NVec3};

/// (name, mass, distance from the Sun on +x, orbital speed along +y)
const INNER_PLANETS: [(&str, f64, f64, f64); 4] = [
    ("Mercury", 1.7e-7, 0.39, 10.0),
    ("Venus", 2.4e-6, 0.72, 7.4),
    ("Earth", 3.0e-6, 1.0, 6.3),
    ("Mars", 3.2e-7, 1.52, 5.1),
];

const OUTER_PLANETS: [(&str, f64, f64, f64); 4] = [
    ("Jupiter", 9.5e-4, 5.2, 2.8),
    ("Saturn", 2.9e-4, 9.54, 2.0),
    ("Uranus", 4.4e-5, 19.22, 1.4),
    ("Neptune", 5.1e-5, 30.06, 1.1),
];

const BLACK_HOLE_MASS: f64 = 100.0;

/// Tangential speed of the bodies in the three-body ring
const THREE_BODY_SPEED: f64 = 5.0;

/// Sun plus planets on circular-ish orbits in the xy plane
///
/// `extra_velocity` is added to every body, the black hole included.
pub fn solar_system(extra_velocity: NVec3, black_hole: bool, outer_planets: bool) -> Vec<Body> {
    let mut bodies = vec![Body::new("Sun", 1.0, NVec3::zeros(), NVec3::zeros())];

    let planets = INNER_PLANETS
        .iter()
        .chain(OUTER_PLANETS.iter().filter(|_| outer_planets));
    for &(name, mass, distance, speed) in planets {
        bodies.push(Body::new(
            name,
            mass,
            NVec3::new(distance, 0.0, 0.0),
            NVec3::new(0.0, speed, 0.0),
        ));
    }

    if black_hole {
        bodies.push(Body::new(
            "Black Hole",
            BLACK_HOLE_MASS,
            NVec3::new(-25.0, -25.0, -40.0),
            NVec3::new(10.0, 10.0, 15.0),
        ));
    }

    for b in bodies.iter_mut() {
        b.kick(extra_velocity);
    }

    bodies
}

/// `n` bodies with mass in `mass_range` and each position/velocity component
/// in `+-pos_range[k]` / `+-vel_range[k]`
///
/// With `planar` set the z components are zeroed.
pub fn random_bodies<R: Rng>(
    rng: &mut R,
    n: usize,
    mass_range: [f64; 2],
    pos_range: [f64; 3],
    vel_range: [f64; 3],
    planar: bool,
) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let mass = rng.random_range(mass_range[0]..=mass_range[1]);
            let mut x = NVec3::from_fn(|k, _| rng.random_range(-pos_range[k]..=pos_range[k]));
            let mut v = NVec3::from_fn(|k, _| rng.random_range(-vel_range[k]..=vel_range[k]));
            if planar {
                x.z = 0.0;
                v.z = 0.0;
            }
            Body::new(i.to_string(), mass, x, v)
        })
        .collect()
}

/// Three unit masses at 120 degree spacing on the unit circle, moving tangentially
pub fn three_body() -> Vec<Body> {
    let t2 = 2.0 * PI / 3.0;
    let t3 = 2.0 * t2;

    [("One", 0.0), ("Two", t2), ("Three", t3)]
        .into_iter()
        .map(|(name, theta)| {
            let (s, c) = theta.sin_cos();
            Body::new(
                name,
                1.0,
                NVec3::new(c, s, 0.0),
                NVec3::new(-THREE_BODY_SPEED * s, THREE_BODY_SPEED * c, 0.0),
            )
        })
        .collect()
}

/// Three unit masses in a rough line, drifting along +y
pub fn testing() -> Vec<Body> {
    vec![
        Body::new("One", 1.0, NVec3::new(0.0, 0.0, 0.0), NVec3::new(0.0, 0.9, 0.0)),
        Body::new("Two", 1.0, NVec3::new(2.0, -0.5, 0.0), NVec3::new(0.0, 0.85, 0.0)),
        Body::new("Three", 1.0, NVec3::new(4.0, 0.0, 0.0), NVec3::new(0.0, 0.8, 0.0)),
    ]
}

/// Bodies listed explicitly in a scenario file
pub fn custom(bodies: &[BodyConfig]) -> Vec<Body> {
    bodies
        .iter()
        .map(|bc| Body::new(bc.name.clone(), bc.m, NVec3::from(bc.x), NVec3::from(bc.v)))
        .collect()
}

/// Build the bodies for `arrangement`; `planar` is true for 2D scenarios
pub fn build_arrangement(arrangement: &ArrangementConfig, planar: bool) -> Vec<Body> {
    let bodies = match arrangement {
        ArrangementConfig::Solar { extra_velocity, black_hole, outer_planets } => {
            solar_system(NVec3::from(*extra_velocity), *black_hole, *outer_planets)
        }
        ArrangementConfig::Random { n, mass_range, pos_range, vel_range, seed } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(*s),
                None => StdRng::from_os_rng(),
            };
            random_bodies(&mut rng, *n, *mass_range, *pos_range, *vel_range, planar)
        }
        ArrangementConfig::Three => three_body(),
        ArrangementConfig::Testing => testing(),
        ArrangementConfig::Custom { bodies } => custom(bodies),
    };

    debug!("arrangement {:?} built {} bodies", arrangement, bodies.len());
    bodies
}
