//! Core data models for the mind map viewer: the map content fed to the
//! content layer, and the user-tunable view settings.

use serde::{Deserialize, Serialize};

/// A single node of the mind map. Coordinates are map-local pixels; the node
/// is rendered at `(x, y)` inside the content layer and moves with it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: u32,
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// `None` marks the root node the view centers on at startup.
    pub parent: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MindMap {
    pub title: String,
    pub nodes: Vec<MapNode>,
}

impl MindMap {
    pub fn root(&self) -> Option<&MapNode> {
        self.nodes.iter().find(|n| n.parent.is_none())
    }

    /// Built-in demo map shown until real content loading exists.
    pub fn demo() -> Self {
        let mut nodes = Vec::new();
        let mut add = |id: u32, label: &str, x: f64, y: f64, parent: Option<u32>| {
            nodes.push(MapNode {
                id,
                label: label.to_string(),
                x,
                y,
                parent,
            });
        };
        add(1, "Product Launch", 360.0, 40.0, None);
        add(2, "Research", 80.0, 180.0, Some(1));
        add(3, "Competitors", 20.0, 300.0, Some(2));
        add(4, "User interviews", 160.0, 300.0, Some(2));
        add(5, "Design", 360.0, 180.0, Some(1));
        add(6, "Wireframes", 320.0, 300.0, Some(5));
        add(7, "Brand", 460.0, 300.0, Some(5));
        add(8, "Engineering", 640.0, 180.0, Some(1));
        add(9, "Prototype", 600.0, 300.0, Some(8));
        add(10, "Infrastructure", 740.0, 300.0, Some(8));
        Self {
            title: "Product Launch".to_string(),
            nodes,
        }
    }
}

/// Zoom behavior knobs, persisted to localStorage as one JSON blob.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Wheel zoom factor is `1 + zoom_step` per notch.
    pub zoom_step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Flip which wheel direction zooms in.
    pub invert_wheel: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom_step: 0.1,
            min_scale: 0.1,
            max_scale: 10.0,
            invert_wheel: false,
        }
    }
}
