use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Sphere;
use crate::math::Vec3;

/// Number of spheres in a generated scene
pub const SPHERES: usize = 20;

#[derive(Debug, Deserialize, Serialize)]
struct SceneDeclaration {
    spheres: Vec<Sphere>,
}

/// An immutable set of spheres, built once and shared read-only by every pixel
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Generate `count` spheres with every attribute drawn uniformly:
    /// colour channels in [0,1), centre coordinates in [-1000,1000), radius in [40,240)
    pub fn build<R: Rng>(count: usize, rng: &mut R) -> Scene {
        let mut random_sphere = || {
            let colour = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
            let centre = Vec3::new(
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
            );
            let radius = rng.gen_range(40.0..240.0);
            Sphere { centre, radius, colour }
        };

        let spheres = (0..count).map(|_| random_sphere()).collect();
        Scene { spheres }
    }

    pub fn from_spheres(spheres: Vec<Sphere>) -> Scene {
        Scene { spheres }
    }

    /// The sphere at `index`. Panics if `index >= self.len()`
    pub fn get(&self, index: usize) -> &Sphere {
        &self.spheres[index]
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sphere> {
        self.spheres.iter()
    }

    /// Read a scene previously written with [`Scene::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scene> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let reader = BufReader::new(file);

        let declaration: SceneDeclaration = serde_json::from_reader(reader)?;
        Ok(Scene { spheres: declaration.spheres })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);

        let declaration = SceneDeclaration { spheres: self.spheres.clone() };
        serde_json::to_writer_pretty(&mut writer, &declaration)?;
        writer.flush().map_err(|e| Error::io(path, e))?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Sphere;
    type IntoIter = std::slice::Iter<'a, Sphere>;

    fn into_iter(self) -> Self::IntoIter {
        self.spheres.iter()
    }
}
