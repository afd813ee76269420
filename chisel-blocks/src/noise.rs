//! The noise extension: Perlin, simplex and curl reporter blocks.

use chisel_ext::{
    Arguments, BlockSpec, Extension, ExtensionError, ExtensionInfo, MenuItem, Value, svg_data_uri,
};
use chisel_noise::NoiseEngine;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::icon::ICON_SVG;

/// Menu value selecting the X component of the curl field.
const DIMENSION_X: &str = "x";
/// Menu value selecting the Y component of the curl field.
const DIMENSION_Y: &str = "y";

/// Procedural noise blocks.
///
/// Each invocation reseeds the owned engine with the block's SEED argument
/// and evaluates at (X, Y), so a script sweeping coordinates with a fixed
/// seed samples one continuous field. The engine sits behind a mutex because
/// hosts may run blocks from several threads and reseeding replaces the
/// permutation table non-atomically relative to readers.
pub struct NoiseExtension {
    engine: Mutex<NoiseEngine>,
}

impl NoiseExtension {
    /// Create the extension with its own noise engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Mutex::new(NoiseEngine::default()),
        }
    }

    fn sample(&self, args: &Arguments, eval: impl Fn(&NoiseEngine, f64, f64) -> f64) -> Result<Value, ExtensionError> {
        let x = args.number("X")?;
        let y = args.number("Y")?;
        let seed = args.number("SEED")?;

        let mut engine = self.engine.lock();
        engine.seed(seed);
        Ok(Value::Number(eval(&engine, x, y)))
    }
}

impl Default for NoiseExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for NoiseExtension {
    fn info(&self) -> ExtensionInfo {
        let icon = svg_data_uri(ICON_SVG);

        let mut menus = FxHashMap::default();
        menus.insert(
            "Dimension".to_string(),
            vec![MenuItem::plain(DIMENSION_X), MenuItem::plain(DIMENSION_Y)],
        );

        ExtensionInfo {
            id: "noise".to_string(),
            name: "Noise".to_string(),
            block_icon_uri: icon.clone(),
            menu_icon_uri: icon,
            blocks: vec![
                BlockSpec::reporter("perlinNoise", "PerlinNoise x[X] y[Y] Seed[SEED]")
                    .number_arg("X", 0.0)
                    .number_arg("Y", 0.0)
                    .number_arg("SEED", 0.0),
                BlockSpec::reporter("simplexNoise", "SimplexNoise x[X] y[Y] Seed[SEED]")
                    .number_arg("X", 0.0)
                    .number_arg("Y", 0.0)
                    .number_arg("SEED", 0.0),
                BlockSpec::reporter("curlNoise", "CurlNoise x[X] y[Y] Seed[SEED]: [DIMENSION]")
                    .number_arg("X", 0.0)
                    .number_arg("Y", 0.0)
                    .number_arg("SEED", 0.0)
                    .menu_arg("DIMENSION", "Dimension", DIMENSION_X),
            ],
            menus,
        }
    }

    fn execute(&self, opcode: &str, args: &Arguments) -> Result<Value, ExtensionError> {
        match opcode {
            "perlinNoise" => self.sample(args, NoiseEngine::perlin2),
            "simplexNoise" => self.sample(args, NoiseEngine::simplex2),
            "curlNoise" => {
                let dimension = args.string("DIMENSION")?;
                self.sample(args, move |engine, x, y| {
                    let curl = engine.curl2(x, y);
                    if dimension == DIMENSION_Y { curl[1] } else { curl[0] }
                })
            }
            other => Err(ExtensionError::UnknownOpcode(other.to_string())),
        }
    }
}
