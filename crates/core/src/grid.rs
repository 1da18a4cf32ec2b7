use crate::{
    config::GridConfig,
    hex::{Hex, HexIndexSet},
    layout::Layout,
    timed,
};
use anyhow::Context;
use log::info;
use nalgebra::Point2;
use serde::Serialize;
use validator::Validate;

/// A fully generated hex grid. Holds the config that defined it, and the
/// hexes that make it up in the order the config's shape produced them.
///
/// A grid is pure data. Hosts that want to attach engine objects (meshes,
/// entities, etc.) to each cell should key them by [Hex], e.g. in a
/// [HexMap](crate::HexMap), and use [HexGrid::tiles] for the placement data.
#[derive(Clone, Debug)]
pub struct HexGrid {
    /// The config used to generate this grid. Generation is deterministic
    /// based on config, and once the grid exists the config can't change.
    config: GridConfig,

    /// Every hex in the grid, without duplicates
    hexes: HexIndexSet,
}

/// Placement data for a single cell of a grid. See [HexGrid::tiles].
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Tile {
    pub hex: Hex,
    /// World position of the hex's center
    pub center: Point2<f64>,
    /// World positions of the hex's corners. See [Layout::hex_corners].
    pub corners: [Point2<f64>; 6],
}

impl HexGrid {
    /// Generate a new grid from a config. Returns an error if the config is
    /// invalid.
    pub fn generate(config: GridConfig) -> anyhow::Result<Self> {
        info!("Generating grid with config {:?}", config);

        config.validate().context("invalid config")?;

        let hexes = timed!(
            "Grid generation",
            log::Level::Info,
            config.shape.generate()?.into_iter().collect::<HexIndexSet>()
        );

        Ok(Self { config, hexes })
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.config.layout
    }

    /// Number of hexes in the grid
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.hexes.contains(&hex)
    }

    /// Every hex in the grid, in generation order
    pub fn hexes(&self) -> impl Iterator<Item = Hex> + '_ {
        self.hexes.iter().copied()
    }

    /// Map a hex onto this grid's wraparound space. If the grid doesn't wrap,
    /// the hex comes back unchanged.
    pub fn wrap(&self, hex: Hex) -> Hex {
        match self.config.wrap_radius {
            Some(radius) => hex.wrap_in_range(radius.into()),
            None => hex,
        }
    }

    /// Find the hex of this grid under a world position. Positions off the
    /// edge of a wrapping grid come back in on the other side. Returns `None`
    /// if the position isn't on the grid.
    pub fn hex_at(&self, point: Point2<f64>) -> Option<Hex> {
        let hex = self.wrap(self.layout().world_pos_to_hex(point));
        if self.contains(hex) {
            Some(hex)
        } else {
            None
        }
    }

    /// World placement data for every hex in the grid, in generation order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let layout = self.layout();
        self.hexes().map(move |hex| Tile {
            hex,
            center: layout.hex_to_world_point(hex),
            corners: layout.hex_corners(hex),
        })
    }

    /// The outer boundary of the grid in world space. See [Layout::outline].
    pub fn outline(&self) -> Vec<Point2<f64>> {
        timed!("Grid outline", self.layout().outline(self.hexes()))
    }

    /// Serialize this grid's layout, tiles and outline into JSON. This is an
    /// export format for renderers, and can't be loaded back into a grid.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        #[derive(Serialize)]
        struct Document<'a> {
            layout: &'a Layout,
            wrap_radius: Option<u16>,
            tiles: Vec<Tile>,
            outline: Vec<Point2<f64>>,
        }

        let document = Document {
            layout: self.layout(),
            wrap_radius: self.config.wrap_radius,
            tiles: self.tiles().collect(),
            outline: self.outline(),
        };
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(&document).expect("error serializing grid")
    }
}
