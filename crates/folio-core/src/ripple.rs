//! Click ripple geometry.

use std::time::Duration;

use crate::config::RippleConfig;

pub const RIPPLE: &str = "ripple";

/// A bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and offset of a ripple inside its button, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// A square as large as the button's longer side, centred on the click.
    pub fn at(button: Rect, client_x: f64, client_y: f64) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }

    /// Inline style declarations for the ripple element.
    pub fn styles(&self) -> [(&'static str, String); 4] {
        let size = format!("{}px", self.size);
        [
            ("width", size.clone()),
            ("height", size),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

/// A ripple ready to insert, and how long it stays.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleSpec {
    pub geometry: RippleGeometry,
    pub lifetime: Duration,
}

#[derive(Debug, Clone)]
pub struct RippleEffect {
    lifetime: Duration,
}

impl RippleEffect {
    pub fn new(config: &RippleConfig) -> Self {
        Self {
            lifetime: config.lifetime(),
        }
    }

    pub fn on_press(&self, button: Rect, client_x: f64, client_y: f64) -> RippleSpec {
        RippleSpec {
            geometry: RippleGeometry::at(button, client_x, client_y),
            lifetime: self.lifetime,
        }
    }
}
