use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Where a ray cast along the depth axis met a sphere
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HitRecord {
    /// Depth of the front-facing intersection; larger is nearer the viewer
    pub depth: f32,
    /// Depth component of the unit surface normal at the hit, in (0,1]
    pub shade: f32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum HitResult {
    Miss,
    Hit(HitRecord),
}

/// An opaque sphere with a flat base colour
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, Serialize)]
pub struct Sphere {
    pub centre: Vec3,
    pub radius: f32,
    pub colour: Vec3,
}

impl Sphere {
    /// Test the ray through (ox, oy), parallel to the z axis, against this sphere
    pub fn hit(&self, ox: f32, oy: f32) -> HitResult {
        let dx = ox - self.centre.x;
        let dy = oy - self.centre.y;
        let dist_sq = dx * dx + dy * dy;
        let rad_sq = self.radius * self.radius;
        if dist_sq < rad_sq {
            // rad_sq > dist_sq so the difference is strictly positive
            let dz = (rad_sq - dist_sq).sqrt();
            let shade = dz / rad_sq.sqrt();
            HitResult::Hit(HitRecord { depth: self.centre.z + dz, shade })
        }
        else {
            HitResult::Miss
        }
    }
}

/// Find the sphere nearest the viewer along the ray through (ox, oy).
///
/// Spheres are scanned in index order and a later hit only replaces the current
/// best if its depth is strictly greater, so on equal depths the lower index wins.
pub fn nearest_hit(spheres: &[Sphere], ox: f32, oy: f32) -> Option<(usize, HitRecord)> {
    let mut result: Option<(usize, HitRecord)> = None;
    for (index, sphere) in spheres.iter().enumerate() {
        if let HitResult::Hit(record) = sphere.hit(ox, oy) {
            let nearer = match result {
                Some((_, best)) => record.depth > best.depth,
                None => true,
            };
            if nearer {
                result = Some((index, record));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::HitResult::*;

    fn sphere_at(x: f32, y: f32, z: f32, radius: f32) -> Sphere {
        Sphere { centre: Vec3::new(x, y, z), radius, colour: Vec3::splat(1.0) }
    }

    #[test]
    fn hit_sphere_works() {
        let sphere = sphere_at(0.0, 0.0, -5.0, 2.0);

        // Dead centre: full radius of depth, normal points straight at the viewer
        match sphere.hit(0.0, 0.0) {
            Miss => panic!("This ray and sphere were supposed to hit"),
            Hit(record) => {
                assert_eq!(record.depth, -3.0);
                assert_eq!(record.shade, 1.0);
            }
        };

        // Off centre by a 3-4-5 triangle scaled into the sphere
        let sphere = sphere_at(10.0, 20.0, 0.0, 5.0);
        assert_eq!(sphere.hit(13.0, 20.0), Hit(HitRecord { depth: 4.0, shade: 0.8 }));

        // Outside the silhouette
        match sphere.hit(20.0, 20.0) {
            Miss => (),
            Hit(_) => panic!("This ray and sphere were supposed to miss"),
        };
    }

    #[test]
    fn grazing_ray_misses() {
        // Exactly on the silhouette is not a hit
        let sphere = sphere_at(0.0, 0.0, 0.0, 3.0);
        assert_eq!(sphere.hit(3.0, 0.0), Miss);
        assert_eq!(sphere.hit(0.0, -3.0), Miss);
        assert!(matches!(sphere.hit(2.999, 0.0), Hit(_)));
    }

    #[test]
    fn shade_stays_in_unit_range() {
        let sphere = sphere_at(1.5, -2.5, 7.0, 43.25);
        for ix in -50..50 {
            for iy in -50..50 {
                if let Hit(record) = sphere.hit(ix as f32, iy as f32) {
                    assert!(record.shade > 0.0 && record.shade <= 1.0);
                }
            }
        }
    }

    #[test]
    fn nearest_hit_prefers_greatest_depth() {
        let spheres = vec![
            sphere_at(0.0, 0.0, -100.0, 10.0),
            sphere_at(0.0, 0.0, 50.0, 10.0),
            sphere_at(0.0, 0.0, 0.0, 10.0),
        ];
        let (index, record) = nearest_hit(&spheres, 0.0, 0.0).unwrap();
        assert_eq!(index, 1);
        assert_eq!(record.depth, 60.0);
    }

    #[test]
    fn nearest_hit_keeps_first_on_ties() {
        let spheres = vec![
            sphere_at(100.0, 100.0, 0.0, 10.0),
            sphere_at(0.0, 0.0, 5.0, 10.0),
            sphere_at(0.0, 0.0, 5.0, 10.0),
        ];
        let (index, _) = nearest_hit(&spheres, 1.0, 1.0).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn nearest_hit_accepts_very_deep_hits() {
        let spheres = vec![sphere_at(0.0, 0.0, -1.0e12, 10.0)];
        assert_eq!(nearest_hit(&spheres, 0.0, 0.0).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn nearest_hit_none_when_all_miss() {
        let spheres = vec![sphere_at(100.0, 100.0, 0.0, 10.0)];
        assert!(nearest_hit(&spheres, 0.0, 0.0).is_none());
        assert!(nearest_hit(&[], 0.0, 0.0).is_none());
    }
}
