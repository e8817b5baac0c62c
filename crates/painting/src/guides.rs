//! Boundary guides ("tooltips") on the overlay surface
//!
//! Each active edge gets one dashed line `edge_inset` pixels inside the
//! surface, spanning the full opposite dimension. The style is fixed.

use inkshare_config::BoardConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{GUIDE_COLOR, GUIDE_DASH_PATTERN, GUIDE_LINE_WIDTH};
use crate::raster::dashed_segment;
use crate::surface::CpuSurface;
use crate::types::Point;
use crate::validation::{validate_guide_length, ValidationError};

/// Where guides go on a surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    pub width: f32,
    pub height: f32,
    /// Distance of each guide from its edge
    #[serde(alias = "edge")]
    pub edge_inset: f32,
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub bottom: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

impl BoundaryConfig {
    /// Guides for the board's own surface, per the configured edges
    pub fn from_board(config: &BoardConfig) -> Self {
        Self {
            width: config.width_f32(),
            height: config.height_f32(),
            edge_inset: config.edge_inset,
            top: config.guides.top,
            bottom: config.guides.bottom,
            left: config.guides.left,
            right: config.guides.right,
        }
    }

    /// Sizes arrive from the page layer unchecked
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_guide_length("width", self.width)?;
        validate_guide_length("height", self.height)?;
        validate_guide_length("edge_inset", self.edge_inset)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub edge: Edge,
    pub from: Point,
    pub to: Point,
}

/// Guide geometry for every active edge, in top, bottom, left, right order
pub fn guide_lines(config: &BoundaryConfig) -> Vec<GuideLine> {
    let BoundaryConfig {
        width,
        height,
        edge_inset: inset,
        ..
    } = *config;

    [
        (config.top, Edge::Top, (0.0, inset), (width, inset)),
        (
            config.bottom,
            Edge::Bottom,
            (0.0, height - inset),
            (width, height - inset),
        ),
        (config.left, Edge::Left, (inset, 0.0), (inset, height)),
        (
            config.right,
            Edge::Right,
            (width - inset, 0.0),
            (width - inset, height),
        ),
    ]
    .into_iter()
    .filter(|(active, ..)| *active)
    .map(|(_, edge, from, to)| GuideLine {
        edge,
        from: from.into(),
        to: to.into(),
    })
    .collect()
}

/// Draw the guides onto `overlay` and return how many were drawn.
///
/// Drawing accumulates; clear the overlay first when the edges change.
/// An out-of-range config is rejected before anything is drawn.
pub fn render_guides(
    overlay: &mut CpuSurface,
    config: &BoundaryConfig,
) -> Result<usize, ValidationError> {
    config.validate()?;
    let lines = guide_lines(config);
    for line in &lines {
        let dashes = dashed_segment(
            overlay,
            line.from,
            line.to,
            GUIDE_LINE_WIDTH,
            GUIDE_COLOR,
            GUIDE_DASH_PATTERN,
        );
        debug!("render_guides: {:?} guide, {} dashes", line.edge, dashes);
    }
    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(top: bool, bottom: bool, left: bool, right: bool) -> BoundaryConfig {
        BoundaryConfig {
            width: 800.0,
            height: 600.0,
            edge_inset: 20.0,
            top,
            bottom,
            left,
            right,
        }
    }

    fn painted(surface: &CpuSurface, x: u32, y: u32) -> bool {
        surface.get_pixel(x, y).unwrap()[3] > 0.0
    }

    #[test]
    fn test_no_edges_draws_nothing() {
        let mut overlay = CpuSurface::new(800, 600);
        let cfg = config(false, false, false, false);

        assert!(guide_lines(&cfg).is_empty());
        assert_eq!(render_guides(&mut overlay, &cfg), Ok(0));
        assert!(overlay.is_blank());
    }

    #[test]
    fn test_all_edges_geometry() {
        let lines = guide_lines(&config(true, true, true, true));

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            GuideLine {
                edge: Edge::Top,
                from: Point::new(0.0, 20.0),
                to: Point::new(800.0, 20.0),
            }
        );
        assert_eq!(lines[1].from, Point::new(0.0, 580.0));
        assert_eq!(lines[1].to, Point::new(800.0, 580.0));
        assert_eq!(lines[2].from, Point::new(20.0, 0.0));
        assert_eq!(lines[2].to, Point::new(20.0, 600.0));
        assert_eq!(lines[3].from, Point::new(780.0, 0.0));
        assert_eq!(lines[3].to, Point::new(780.0, 600.0));
    }

    #[test]
    fn test_top_and_left_scenario() {
        let mut overlay = CpuSurface::new(800, 600);
        let drawn = render_guides(&mut overlay, &config(true, false, true, false));
        assert_eq!(drawn, Ok(2));

        // Dashes at the start of both guides
        assert!(painted(&overlay, 1, 20));
        assert!(painted(&overlay, 20, 1));
        // Far end of the top guide: last dash starts at 792
        assert!(painted(&overlay, 793, 20));
        // Gaps in the pattern stay empty
        assert!(!painted(&overlay, 6, 20));
        // No bottom or right guide, nothing in the middle
        assert!(!painted(&overlay, 1, 580));
        assert!(!painted(&overlay, 780, 1));
        assert!(!painted(&overlay, 400, 300));
    }

    #[test]
    fn test_all_edges_on_the_overlay() {
        let mut overlay = CpuSurface::new(800, 600);
        assert_eq!(render_guides(&mut overlay, &config(true, true, true, true)), Ok(4));

        // Bottom guide on y = 580, right guide on x = 780
        assert!(painted(&overlay, 1, 580));
        assert!(painted(&overlay, 793, 580));
        assert!(painted(&overlay, 780, 1));
        assert!(painted(&overlay, 780, 594));
        // Gaps of both guides stay empty
        assert!(!painted(&overlay, 6, 580));
        assert!(!painted(&overlay, 780, 6));
        // Nothing between the guides
        assert!(!painted(&overlay, 1, 560));
        assert!(!painted(&overlay, 760, 1));
        assert!(!painted(&overlay, 400, 300));
    }

    #[test]
    fn test_out_of_range_config_rejected() {
        let mut overlay = CpuSurface::new(100, 100);
        let mut cfg = config(true, true, true, true);

        cfg.width = 1.0e9;
        assert_eq!(
            render_guides(&mut overlay, &cfg),
            Err(ValidationError::InvalidGuide {
                field: "width",
                value: 1.0e9
            })
        );

        cfg.width = 100.0;
        cfg.edge_inset = -5.0;
        assert!(render_guides(&mut overlay, &cfg).is_err());

        cfg.edge_inset = 10.0;
        cfg.height = f32::INFINITY;
        assert!(render_guides(&mut overlay, &cfg).is_err());
        assert!(overlay.is_blank());
    }

    #[test]
    fn test_guides_use_fixed_style() {
        let mut overlay = CpuSurface::new(100, 100);
        render_guides(
            &mut overlay,
            &BoundaryConfig {
                width: 100.0,
                height: 100.0,
                edge_inset: 10.0,
                top: true,
                bottom: false,
                left: false,
                right: false,
            },
        )
        .unwrap();

        let pixel = overlay.get_pixel(1, 10).unwrap();
        assert!((pixel[0] - 10.0 / 255.0).abs() < 1e-4);
        // 1px line on an integer row splits across two rows at half coverage
        assert!((pixel[3] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_repeat_render_is_indistinguishable_in_shape() {
        let cfg = config(true, true, false, false);
        let mut once = CpuSurface::new(800, 600);
        let mut twice = CpuSurface::new(800, 600);

        render_guides(&mut once, &cfg).unwrap();
        render_guides(&mut twice, &cfg).unwrap();
        render_guides(&mut twice, &cfg).unwrap();

        let painted_once: Vec<bool> = once.pixels().iter().map(|p| p[3] > 0.0).collect();
        let painted_twice: Vec<bool> = twice.pixels().iter().map(|p| p[3] > 0.0).collect();
        assert_eq!(painted_once, painted_twice);
    }

    #[test]
    fn test_deserialize_page_layout_shape() {
        let json = r#"{"width": 800, "height": 600, "edge": 20, "top": true, "left": true}"#;
        let cfg: BoundaryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg, config(true, false, true, false));
    }
}
