//! Drawing board: one participant's set of surfaces
//!
//! This ties the pieces together the way a game page uses them:
//! 1. `new` creates the player's own surface and the tooltip overlay
//! 2. `setup_canvas` draws the boundary guides
//! 3. pointer samples go through `draw_point` / `end_drawing`
//! 4. messages from other participants go through `apply`
//! 5. pen changes go through `set_pen` and `refresh_cursor`

use inkshare_config::BoardConfig;
use inkshare_ipc::{DrawMessage, StrokeMessage};
use tracing::{debug, info};

use crate::cursor::{CursorResource, CursorUpdate, ExportRegistry};
use crate::error::PaintError;
use crate::guides::{render_guides, BoundaryConfig};
use crate::path::PathRenderer;
use crate::registry::{SurfaceRegistry, CURSOR_PREVIEW_SURFACE, OWN_SURFACE, TOOLTIP_SURFACE};
use crate::surface::CpuSurface;
use crate::types::{Pen, PenSettings, Point, Stroke};

/// A completed local stroke, ready to replicate
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedStroke {
    pub stroke: Stroke,
    pub pen: PenSettings,
}

impl FinishedStroke {
    /// Package for the transport. `canvas` is the surface name the other
    /// participants know this player by.
    pub fn to_message(&self, canvas: impl Into<String>) -> StrokeMessage {
        StrokeMessage {
            canvas: canvas.into(),
            pen: self.pen.clone(),
            points: self.stroke.to_wire(),
        }
    }
}

pub struct DrawingBoard {
    config: BoardConfig,
    surfaces: SurfaceRegistry,
    paths: PathRenderer,
    cursor: CursorResource,
    pen: PenSettings,
    /// Points of the stroke being drawn on the own surface
    current_stroke: Stroke,
}

impl DrawingBoard {
    /// Create the own surface and tooltip overlay, sized per `config`
    pub fn new(config: BoardConfig) -> Result<Self, PaintError> {
        let pen = PenSettings::new(config.pen.color.clone(), config.pen.size);
        Pen::from_settings(&pen)?;

        let mut surfaces = SurfaceRegistry::new();
        surfaces.create(OWN_SURFACE, config.width, config.height)?;
        surfaces.create(TOOLTIP_SURFACE, config.width, config.height)?;

        let mut paths = PathRenderer::new();
        paths.set_pen(&surfaces, OWN_SURFACE, &pen)?;

        info!(
            "DrawingBoard::new {}x{} scale={:.2} pen={:?}",
            config.width, config.height, config.scale, pen
        );
        Ok(Self {
            config,
            surfaces,
            paths,
            cursor: CursorResource::new(ExportRegistry::new()),
            pen,
            current_stroke: Stroke::new(),
        })
    }

    /// (Re)draw the boundary guides. The overlay is cleared first, so this
    /// can be called again whenever the active edges change. A rejected
    /// config leaves the current guides in place.
    pub fn setup_canvas(&mut self, boundary: &BoundaryConfig) -> Result<usize, PaintError> {
        boundary.validate()?;
        let overlay = self.surfaces.get_mut(TOOLTIP_SURFACE)?;
        overlay.clear();
        let drawn = render_guides(overlay, boundary)?;
        info!("DrawingBoard::setup_canvas drew {} guides", drawn);
        Ok(drawn)
    }

    /// Add a surface for a remote participant, sized like the own surface
    pub fn add_participant(&mut self, name: &str) -> Result<(), PaintError> {
        self.surfaces
            .create(name, self.config.width, self.config.height)?;
        info!("DrawingBoard::add_participant({:?})", name);
        Ok(())
    }

    /// Drop a participant's surface and its path state
    pub fn remove_participant(&mut self, name: &str) -> Option<CpuSurface> {
        self.paths.forget(name);
        self.surfaces.remove(name)
    }

    /// Add a surface that mirrors the cursor bitmap
    pub fn add_cursor_preview(&mut self, size: u32) -> Result<(), PaintError> {
        self.surfaces.create(CURSOR_PREVIEW_SURFACE, size, size)?;
        Ok(())
    }

    /// Feed one pointer sample into the own surface
    pub fn draw_point(&mut self, point: Point) -> Result<(), PaintError> {
        self.paths.draw_point(&mut self.surfaces, OWN_SURFACE, point)?;
        self.current_stroke.push(point);
        Ok(())
    }

    /// Finish the local stroke and hand back its points with the pen they
    /// were drawn with
    pub fn end_drawing(&mut self) -> Result<FinishedStroke, PaintError> {
        self.paths.end_path(&self.surfaces, OWN_SURFACE)?;
        let stroke = std::mem::take(&mut self.current_stroke);
        debug!("DrawingBoard::end_drawing {} points", stroke.len());
        Ok(FinishedStroke {
            stroke,
            pen: self.pen.clone(),
        })
    }

    /// Erase the own surface
    pub fn clear(&mut self) -> Result<(), PaintError> {
        self.paths.clear(&mut self.surfaces, OWN_SURFACE)
    }

    /// Change the local pen. Invalid settings are rejected before they can
    /// affect a stroke in progress.
    pub fn set_pen(&mut self, pen: PenSettings) -> Result<(), PaintError> {
        self.paths.set_pen(&self.surfaces, OWN_SURFACE, &pen)?;
        self.pen = pen;
        Ok(())
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), PaintError> {
        self.set_pen(PenSettings::new(color, self.pen.size))
    }

    pub fn set_size(&mut self, size: f32) -> Result<(), PaintError> {
        self.set_pen(PenSettings::new(self.pen.color.clone(), size))
    }

    /// Apply a message delivered by another participant
    pub fn apply(&mut self, message: &DrawMessage) -> Result<(), PaintError> {
        match message {
            DrawMessage::Stroke(stroke) => {
                let points: Vec<Point> = stroke.points.iter().copied().map(Point::from).collect();
                self.paths
                    .draw_stroke(&mut self.surfaces, &stroke.canvas, &stroke.pen, &points)?;
            }
            DrawMessage::Clear { canvas } => {
                self.paths.clear(&mut self.surfaces, canvas)?;
            }
            DrawMessage::Background { canvas, color } => {
                self.draw_background(canvas, color)?;
            }
        }
        Ok(())
    }

    /// Fill a surface with a solid color
    pub fn draw_background(&mut self, canvas: &str, color: &str) -> Result<(), PaintError> {
        self.paths.fill(&mut self.surfaces, canvas, color)
    }

    /// Regenerate the cursor for the current pen and install it
    pub async fn refresh_cursor(&mut self) -> Result<CursorUpdate, PaintError> {
        let update = self
            .cursor
            .set_cursor(self.pen.size, &self.pen.color, self.config.scale)
            .await?;

        if update == CursorUpdate::Installed && self.surfaces.contains(CURSOR_PREVIEW_SURFACE) {
            if let Some(bitmap) = self.cursor.bitmap() {
                let preview = self.surfaces.get_mut(CURSOR_PREVIEW_SURFACE)?;
                preview.clear();
                preview.draw_image(bitmap, 0, 0);
            }
        }
        Ok(update)
    }

    pub fn surface(&self, name: &str) -> Result<&CpuSurface, PaintError> {
        self.surfaces.get(name)
    }

    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    pub fn paths(&self) -> &PathRenderer {
        &self.paths
    }

    pub fn cursor(&self) -> &CursorResource {
        &self.cursor
    }

    pub fn pen(&self) -> &PenSettings {
        &self.pen
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CursorStyle;
    use crate::validation::ValidationError;
    use inkshare_config::GuideEdges;

    fn board() -> DrawingBoard {
        DrawingBoard::new(BoardConfig::new(120, 80)).unwrap()
    }

    #[test]
    fn test_new_board_surfaces() {
        let board = board();
        assert_eq!(board.surfaces().names(), vec![OWN_SURFACE, TOOLTIP_SURFACE]);
        assert!(board.surface(OWN_SURFACE).unwrap().is_blank());
        assert_eq!(board.paths().pen(OWN_SURFACE).width, 4.0);
    }

    #[test]
    fn test_invalid_default_pen_rejected() {
        let mut config = BoardConfig::new(10, 10);
        config.pen.size = -1.0;
        assert!(DrawingBoard::new(config).is_err());
    }

    #[test]
    fn test_setup_canvas_redraws_guides() {
        let mut board = board();
        let mut config = BoardConfig::new(120, 80);
        config.guides = GuideEdges::default();

        let drawn = board
            .setup_canvas(&BoundaryConfig::from_board(&config))
            .unwrap();
        assert_eq!(drawn, 4);
        assert!(!board.surface(TOOLTIP_SURFACE).unwrap().is_blank());
        assert!(board.surface(OWN_SURFACE).unwrap().is_blank());

        config.guides = GuideEdges::none();
        let drawn = board
            .setup_canvas(&BoundaryConfig::from_board(&config))
            .unwrap();
        assert_eq!(drawn, 0);
        assert!(board.surface(TOOLTIP_SURFACE).unwrap().is_blank());
    }

    #[test]
    fn test_local_stroke_replicates_identically() {
        let mut author = board();
        let mut viewer = board();
        viewer.add_participant("remote-1").unwrap();

        author
            .set_pen(PenSettings::new("rgba(40, 90, 200, 0.8)", 6.0))
            .unwrap();
        for point in [[10.0, 10.0], [30.0, 12.0], [31.0, 40.0], [90.0, 60.0]] {
            author.draw_point(point.into()).unwrap();
        }
        let finished = author.end_drawing().unwrap();
        assert_eq!(finished.stroke.len(), 4);

        let message = DrawMessage::Stroke(finished.to_message("remote-1"));
        viewer.apply(&message).unwrap();

        assert_eq!(
            author.surface(OWN_SURFACE).unwrap().pixels(),
            viewer.surface("remote-1").unwrap().pixels()
        );
        // Replay never touches the viewer's own drawing
        assert!(viewer.surface(OWN_SURFACE).unwrap().is_blank());
    }

    #[test]
    fn test_pen_change_after_stroke_does_not_alter_replica() {
        let mut author = board();
        let mut viewer = board();
        viewer.add_participant("remote-1").unwrap();

        author.set_pen(PenSettings::new("#204080", 5.0)).unwrap();
        for point in [[15.0, 15.0], [60.0, 20.0], [70.0, 70.0]] {
            author.draw_point(point.into()).unwrap();
        }
        let finished = author.end_drawing().unwrap();

        // The player picks a new pen before the stroke is sent
        author.set_pen(PenSettings::new("red", 20.0)).unwrap();
        assert_eq!(finished.pen, PenSettings::new("#204080", 5.0));

        viewer
            .apply(&DrawMessage::Stroke(finished.to_message("remote-1")))
            .unwrap();
        assert_eq!(
            author.surface(OWN_SURFACE).unwrap().pixels(),
            viewer.surface("remote-1").unwrap().pixels()
        );
    }

    #[test]
    fn test_rejected_boundary_keeps_guides() {
        let mut board = board();
        let config = BoardConfig::new(120, 80);
        board
            .setup_canvas(&BoundaryConfig::from_board(&config))
            .unwrap();
        let before = board.surface(TOOLTIP_SURFACE).unwrap().pixels().to_vec();

        let mut huge = BoundaryConfig::from_board(&config);
        huge.width = 1.0e9;
        assert!(matches!(
            board.setup_canvas(&huge),
            Err(PaintError::Validation(ValidationError::InvalidGuide { .. }))
        ));
        assert_eq!(board.surface(TOOLTIP_SURFACE).unwrap().pixels(), &before[..]);
    }

    #[tokio::test]
    async fn test_refresh_cursor_rejects_oversized_pen() {
        let mut board = board();
        board.set_size(12.0).unwrap();
        board.refresh_cursor().await.unwrap();
        let installed = board.cursor().style().clone();

        board.set_size(1.0e6).unwrap();
        assert!(matches!(
            board.refresh_cursor().await,
            Err(PaintError::Validation(ValidationError::CursorTooLarge { .. }))
        ));
        assert_eq!(board.cursor().style(), &installed);
    }

    #[test]
    fn test_apply_clear_and_background() {
        let mut board = board();
        board.add_participant("remote-2").unwrap();

        board
            .apply(&DrawMessage::Background {
                canvas: "remote-2".to_string(),
                color: "#ffffff".to_string(),
            })
            .unwrap();
        assert_eq!(board.surface("remote-2").unwrap().painted_pixels(), 120 * 80);

        board
            .apply(&DrawMessage::Clear {
                canvas: "remote-2".to_string(),
            })
            .unwrap();
        assert!(board.surface("remote-2").unwrap().is_blank());
    }

    #[test]
    fn test_apply_to_unknown_surface_fails() {
        let mut board = board();
        let message = DrawMessage::Clear {
            canvas: "remote-5".to_string(),
        };
        assert!(matches!(
            board.apply(&message),
            Err(PaintError::UnknownSurface(_))
        ));
    }

    #[test]
    fn test_set_pen_validation() {
        let mut board = board();
        assert!(board.set_size(0.0).is_err());
        assert!(board.set_color("not a color").is_err());
        assert_eq!(board.pen(), &PenSettings::new("#000000", 4.0));

        board.set_size(9.0).unwrap();
        board.set_color("red").unwrap();
        assert_eq!(board.pen(), &PenSettings::new("red", 9.0));
        assert_eq!(board.paths().pen(OWN_SURFACE).color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_clear_own_surface() {
        let mut board = board();
        board.draw_point(Point::new(5.0, 5.0)).unwrap();
        board.draw_point(Point::new(50.0, 50.0)).unwrap();
        assert!(!board.surface(OWN_SURFACE).unwrap().is_blank());

        board.clear().unwrap();
        assert!(board.surface(OWN_SURFACE).unwrap().is_blank());
    }

    #[test]
    fn test_remove_participant() {
        let mut board = board();
        board.add_participant("remote-1").unwrap();
        assert!(board.remove_participant("remote-1").is_some());
        assert!(board.surface("remote-1").is_err());
    }

    #[tokio::test]
    async fn test_refresh_cursor_follows_pen() {
        let mut config = BoardConfig::new(120, 80);
        config.scale = 2.0;
        let mut board = DrawingBoard::new(config).unwrap();
        board.add_cursor_preview(10).unwrap();

        board.set_size(10.0).unwrap();
        assert_eq!(board.refresh_cursor().await.unwrap(), CursorUpdate::Installed);
        assert!(matches!(
            board.cursor().style(),
            CursorStyle::Image { hotspot, .. } if *hotspot == (5.0, 5.0)
        ));
        assert!(!board.surface(CURSOR_PREVIEW_SURFACE).unwrap().is_blank());

        board.set_size(6.0).unwrap();
        board.refresh_cursor().await.unwrap();
        assert_eq!(board.cursor().exports().live_count(), 1);
        assert_eq!(board.cursor().bitmap().unwrap().dimensions(), (6, 6));
    }
}
