//! Level domain: seeded rubble scatter.
//!
//! Rubble gives the wall probe something uneven to reject: small tilted
//! blocks whose faces meet the horizontal rays at glancing angles.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{PlatformDef, RubbleDef, SurfaceKind};

/// Sample uniformly from `[a, b]`, tolerating an empty or inverted range.
fn sample(rng: &mut ChaCha8Rng, a: f32, b: f32) -> f32 {
    let (lo, hi) = (a.min(b), a.max(b));
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0;
    }
    if lo == hi {
        return lo;
    }
    rng.random_range(lo..=hi)
}

/// Same seed, same rubble.
pub fn generate_rubble(def: &RubbleDef) -> Vec<PlatformDef> {
    let mut rng = ChaCha8Rng::seed_from_u64(def.seed);
    let tilt = def.max_tilt_degrees.abs();

    (0..def.count)
        .map(|_| {
            let x = sample(&mut rng, def.area_min.0, def.area_max.0);
            let y = sample(&mut rng, def.area_min.1, def.area_max.1);
            let w = sample(&mut rng, def.min_size.0, def.max_size.0);
            let h = sample(&mut rng, def.min_size.1, def.max_size.1);
            let rotation_degrees = sample(&mut rng, -tilt, tilt);

            PlatformDef {
                surface: SurfaceKind::Ground,
                center: (x, y),
                size: (w, h),
                rotation_degrees,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(seed: u64) -> RubbleDef {
        RubbleDef {
            seed,
            count: 12,
            area_min: (-100.0, -10.0),
            area_max: (100.0, 10.0),
            min_size: (4.0, 2.0),
            max_size: (16.0, 8.0),
            max_tilt_degrees: 30.0,
        }
    }

    #[test]
    fn test_rubble_is_deterministic_per_seed() {
        assert_eq!(generate_rubble(&def(7)), generate_rubble(&def(7)));
        assert_ne!(generate_rubble(&def(7)), generate_rubble(&def(8)));
    }

    #[test]
    fn test_rubble_stays_in_bounds() {
        let pieces = generate_rubble(&def(3));
        assert_eq!(pieces.len(), 12);
        for piece in &pieces {
            assert!((-100.0..=100.0).contains(&piece.center.0));
            assert!((-10.0..=10.0).contains(&piece.center.1));
            assert!((4.0..=16.0).contains(&piece.size.0));
            assert!((2.0..=8.0).contains(&piece.size.1));
            assert!(piece.rotation_degrees.abs() <= 30.0);
            assert_eq!(piece.surface, SurfaceKind::Ground);
        }
    }

    #[test]
    fn test_degenerate_ranges_collapse() {
        let flat = RubbleDef {
            area_min: (5.0, 5.0),
            area_max: (5.0, 5.0),
            min_size: (8.0, 8.0),
            max_size: (8.0, 8.0),
            max_tilt_degrees: 0.0,
            ..def(1)
        };
        for piece in generate_rubble(&flat) {
            assert_eq!(piece.center, (5.0, 5.0));
            assert_eq!(piece.size, (8.0, 8.0));
            assert_eq!(piece.rotation_degrees, 0.0);
        }
    }
}
