// Easing curves used by the tween timeline.
// Curves take a time fraction in \[0, 1\] and return a progress fraction.
// Every curve maps 0 to 0 and 1 to 1; elastic curves overshoot in between.

use crate::error::{MotionError, Result};
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Polynomial ease of order `degree + 1` (power1 is quadratic).
    Power { degree: u8, direction: Direction },
    Sine(Direction),
    ElasticOut { amplitude: f32, period: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::POWER1_OUT
    }
}

impl Easing {
    pub const POWER1_OUT: Easing = Easing::Power {
        degree: 1,
        direction: Direction::Out,
    };
    pub const POWER1_IN_OUT: Easing = Easing::Power {
        degree: 1,
        direction: Direction::InOut,
    };
    pub const POWER2_OUT: Easing = Easing::Power {
        degree: 2,
        direction: Direction::Out,
    };
    pub const POWER3_OUT: Easing = Easing::Power {
        degree: 3,
        direction: Direction::Out,
    };
    pub const POWER3_IN_OUT: Easing = Easing::Power {
        degree: 3,
        direction: Direction::InOut,
    };
    pub const SINE_IN_OUT: Easing = Easing::Sine(Direction::InOut);

    pub const fn elastic_out(amplitude: f32, period: f32) -> Easing {
        Easing::ElasticOut { amplitude, period }
    }

    /// Map a time fraction to a progress fraction. Input is clamped to \[0, 1\].
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Easing::Linear => t,
            Easing::Power { degree, direction } => {
                let exp = degree as i32 + 1;
                match direction {
                    Direction::In => t.powi(exp),
                    Direction::Out => 1.0 - (1.0 - t).powi(exp),
                    Direction::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(exp) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                        }
                    }
                }
            }
            Easing::Sine(direction) => match direction {
                Direction::In => 1.0 - (t * FRAC_PI_2).cos(),
                Direction::Out => (t * FRAC_PI_2).sin(),
                Direction::InOut => -((PI * t).cos() - 1.0) / 2.0,
            },
            Easing::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }

    /// Parse a curve name, warning and falling back to `power1.out` when the
    /// name is not recognised.
    pub fn parse_or_default(name: &str) -> Easing {
        name.parse().unwrap_or_else(|e| {
            log::warn!("[easing] {}; using power1.out", e);
            Easing::default()
        })
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    if t <= 0.0 {
        return 0.0;
    }
    let amp = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let period = period / amplitude.clamp(f32::EPSILON, 1.0);
    let phase = period / TAU * (1.0 / amp).asin();
    let freq = TAU / period;
    amp * 2f32.powf(-10.0 * t) * ((t - phase) * freq).sin() + 1.0
}

fn parse_direction(s: &str) -> Option<Direction> {
    match s {
        "in" => Some(Direction::In),
        "out" => Some(Direction::Out),
        "inOut" => Some(Direction::InOut),
        _ => None,
    }
}

/// Parses `"a, b"` into two numbers; missing values fall back to the defaults.
fn parse_args(args: &str, defaults: (f32, f32)) -> Option<(f32, f32)> {
    let mut parts = args.split(',').map(str::trim).filter(|p| !p.is_empty());
    let a = match parts.next() {
        Some(p) => p.parse().ok()?,
        None => defaults.0,
    };
    let b = match parts.next() {
        Some(p) => p.parse().ok()?,
        None => defaults.1,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((a, b))
}

impl FromStr for Easing {
    type Err = MotionError;

    /// Accepts script-style names: `none`, `linear`, `power2.out`,
    /// `sine.inOut`, `elastic.out(1, 0.6)`. A bare family name means `.out`.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || MotionError::UnknownEasing(s.to_string());
        let name = s.trim();
        let (head, args) = match name.find('(') {
            Some(open) => {
                let inner = name[open + 1..].strip_suffix(')').ok_or_else(unknown)?;
                (&name[..open], Some(inner))
            }
            None => (name, None),
        };
        let (family, dir) = match head.split_once('.') {
            Some((f, d)) => (f, parse_direction(d).ok_or_else(unknown)?),
            None => (head, Direction::Out),
        };
        match family {
            "none" | "linear" | "power0" if args.is_none() => Ok(Easing::Linear),
            "sine" if args.is_none() => Ok(Easing::Sine(dir)),
            "elastic" if dir == Direction::Out => {
                let (amplitude, period) = parse_args(args.unwrap_or(""), (1.0, 0.3))
                    .ok_or_else(unknown)?;
                Ok(Easing::ElasticOut { amplitude, period })
            }
            _ => {
                let degree = family
                    .strip_prefix("power")
                    .and_then(|d| d.parse::<u8>().ok())
                    .filter(|d| (1..=4).contains(d))
                    .ok_or_else(unknown)?;
                if args.is_some() {
                    return Err(unknown());
                }
                Ok(Easing::Power {
                    degree,
                    direction: dir,
                })
            }
        }
    }
}
