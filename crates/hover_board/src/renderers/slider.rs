//! Rectangle slider renderer
//!
//! A vertical slider: the value axis runs bottom (0) to top (1). The handle
//! button and optional jump preview button cut the track into segments, and
//! each segment is a [`MeshSliderRectangle`] whose UV range matches its span
//! of the whole track.

use log::trace;

use super::button::RectangleButton;
use crate::config::{clamp_renderer_size, SliderLayoutConfig, SliderMeshConfig};
use crate::foundation::math::{clamp01, inverse_lerp, inverse_transform_point, lerp, transform_point, Mat4, Vec3};
use crate::items::SliderFillType;
use crate::meshes::MeshSliderRectangle;

/// Jump value meaning "no jump preview this frame"
pub const JUMP_INACTIVE: f32 = -1.0;

const SPAN_EPSILON: f32 = 1e-5;

/// One visible piece of the slider track
#[derive(Debug, Clone)]
pub struct TrackSegment {
    /// Vertical center of the segment in slider space
    pub offset_y: f32,
    /// Segment mesh
    pub mesh: MeshSliderRectangle,
}

/// Rectangle slider: handle, jump preview and a segmented track
#[derive(Debug, Clone)]
pub struct RectangleSlider {
    /// Whether a controller currently drives this renderer
    pub controlled_by_item: bool,
    /// Width, clamped to `[0, 100]` on update
    pub size_x: f32,
    /// Height, clamped to `[0, 100]` on update
    pub size_y: f32,
    /// Draggable handle
    pub handle_button: RectangleButton,
    /// Preview of where a jump would land
    pub jump_button: RectangleButton,
    /// Normalized handle position
    pub handle_value: f32,
    /// Normalized jump preview position, or [`JUMP_INACTIVE`]
    pub jump_value: f32,
    /// Where the track fill starts
    pub fill_starting_point: SliderFillType,
    /// Normalized position of the range's zero crossing
    pub zero_value: f32,
    /// Whether the jump preview may be shown
    pub allow_jump: bool,
    /// Handle/jump/track sizing
    pub layout: SliderLayoutConfig,
    mesh_config: SliderMeshConfig,
    segments: Vec<TrackSegment>,
    active_segments: usize,
}

impl RectangleSlider {
    /// Create a 10x10 slider with the given layout and track colors
    pub fn new(layout: &SliderLayoutConfig, mesh_config: &SliderMeshConfig) -> Self {
        Self {
            controlled_by_item: false,
            size_x: 10.0,
            size_y: 10.0,
            handle_button: RectangleButton::new(),
            jump_button: RectangleButton::new(),
            handle_value: 0.0,
            jump_value: JUMP_INACTIVE,
            fill_starting_point: SliderFillType::MinimumValue,
            zero_value: 0.0,
            allow_jump: false,
            layout: layout.clone(),
            mesh_config: mesh_config.clone(),
            segments: Vec::new(),
            active_segments: 0,
        }
    }

    /// Lay out handle, jump preview and track after the parent pushed settings
    pub fn update_after_parent(&mut self) {
        self.size_x = clamp_renderer_size(self.size_x);
        self.size_y = clamp_renderer_size(self.size_y);

        let handle_y = self.value_to_y(self.handle_value);
        self.handle_button.size_x = self.size_x;
        self.handle_button.size_y = self.handle_size_y();
        self.handle_button.local_offset_y = handle_y;
        self.handle_button.visible = true;
        self.handle_button.update_after_parent();

        let jump_y = self.is_jump_visible().then(|| self.value_to_y(self.jump_value));
        self.jump_button.size_x = self.size_x;
        self.jump_button.size_y = clamp_renderer_size(self.layout.jump_size_y).min(self.size_y);
        self.jump_button.visible = jump_y.is_some();
        if let Some(jump_y) = jump_y {
            self.jump_button.local_offset_y = jump_y;
        }
        self.jump_button.update_after_parent();

        self.update_track(handle_y, jump_y);
    }

    /// Whether the jump preview is shown this frame
    pub fn is_jump_visible(&self) -> bool {
        self.allow_jump && self.jump_value >= 0.0
    }

    /// Normalized position where the track fill starts
    pub fn fill_start_ratio(&self) -> f32 {
        match self.fill_starting_point {
            SliderFillType::MinimumValue => 0.0,
            SliderFillType::Zero => clamp01(self.zero_value),
            SliderFillType::MaximumValue => 1.0,
        }
    }

    /// Slider value under a world-space point, projected onto the value axis
    pub fn value_via_nearest_world_position(&self, world: &Mat4, position: Vec3) -> f32 {
        let local = inverse_transform_point(world, position);
        let (min_y, max_y) = self.handle_travel();
        inverse_lerp(min_y, max_y, local.y)
    }

    /// Nearest point on the slider rectangle to a world-space point
    pub fn nearest_world_position(&self, world: &Mat4, from: Vec3) -> Vec3 {
        let local = inverse_transform_point(world, from);
        let half_x = self.size_x / 2.0;
        let half_y = self.size_y / 2.0;

        let nearest = Vec3::new(local.x.clamp(-half_x, half_x), local.y.clamp(-half_y, half_y), 0.0);
        transform_point(world, nearest)
    }

    /// Track segments laid out by the last update
    pub fn track_segments(&self) -> &[TrackSegment] {
        &self.segments[..self.active_segments]
    }

    fn handle_size_y(&self) -> f32 {
        clamp_renderer_size(self.layout.handle_size_y).min(self.size_y)
    }

    fn handle_travel(&self) -> (f32, f32) {
        let half = (self.size_y - self.handle_size_y()) / 2.0;
        (-half, half)
    }

    fn value_to_y(&self, value: f32) -> f32 {
        let (min_y, max_y) = self.handle_travel();
        lerp(min_y, max_y, value)
    }

    fn update_track(&mut self, handle_y: f32, jump_y: Option<f32>) {
        let bottom = -self.size_y / 2.0;
        let top = self.size_y / 2.0;

        let half_handle = self.handle_button.size_y / 2.0;
        let half_jump = self.jump_button.size_y / 2.0;
        let mut cutouts = vec![(handle_y - half_handle, handle_y + half_handle)];
        if let Some(jump_y) = jump_y {
            cutouts.push((jump_y - half_jump, jump_y + half_jump));
        }

        let fill_y = self.value_to_y(self.fill_start_ratio());
        let (fill_lo, fill_hi) = (fill_y.min(handle_y), fill_y.max(handle_y));

        let mut breaks = vec![bottom, top, fill_lo, fill_hi];
        for &(lo, hi) in &cutouts {
            breaks.extend([lo, hi]);
        }
        breaks.retain(|y| *y >= bottom && *y <= top);
        breaks.sort_by(f32::total_cmp);
        breaks.dedup_by(|a, b| (*a - *b).abs() <= SPAN_EPSILON);

        let mut spans: Vec<(f32, f32, bool)> = Vec::new();
        for pair in breaks.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            if end - start <= SPAN_EPSILON {
                continue;
            }

            let mid = (start + end) / 2.0;
            if cutouts.iter().any(|&(lo, hi)| mid > lo && mid < hi) {
                continue;
            }

            let is_fill = mid > fill_lo && mid < fill_hi;
            match spans.last_mut() {
                Some(last) if last.2 == is_fill && (last.1 - start).abs() <= SPAN_EPSILON => last.1 = end,
                _ => spans.push((start, end, is_fill)),
            }
        }

        let track_width = clamp_renderer_size(self.size_x - 2.0 * self.layout.track_inset_x);
        for (i, &(start, end, is_fill)) in spans.iter().enumerate() {
            if i == self.segments.len() {
                self.segments.push(TrackSegment {
                    offset_y: 0.0,
                    mesh: MeshSliderRectangle::new(&self.mesh_config),
                });
            }

            let segment = &mut self.segments[i];
            segment.offset_y = (start + end) / 2.0;
            segment.mesh.active = true;
            segment.mesh.size_x = track_width;
            segment.mesh.size_y = end - start;
            segment.mesh.uv_start_y = inverse_lerp(bottom, top, start);
            segment.mesh.uv_end_y = inverse_lerp(bottom, top, end);
            segment.mesh.is_fill = is_fill;
            segment.mesh.update_after_renderer();
        }

        for segment in self.segments.iter_mut().skip(spans.len()) {
            segment.mesh.active = false;
        }
        self.active_segments = spans.len();

        trace!("Slider track laid out in {} segments", spans.len());
    }
}
