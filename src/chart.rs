use crate::constants::{
    CHART_FONT_PX, CHART_HEIGHT_PX, CHART_LABEL_GAP_PX, CHART_MARGIN_PX, CHART_MARKER_RADIUS_PX,
    CHART_MAX_SIDE_PX, CHART_ROI_TICKS, CHART_TITLE, CHART_TITLE_FONT_PX, CHART_WIDTH_PX,
    CHART_X_LABEL, CHART_Y_LABEL,
};
use crate::error::RoiError;
use ab_glyph::FontRef;
use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_text_mut, text_size,
};
use imageproc::rect::Rect;
use std::path::Path;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const GRID: Rgb<u8> = Rgb([225, 225, 225]);
pub const AXIS: Rgb<u8> = Rgb([60, 60, 60]);
pub const ZERO_LINE: Rgb<u8> = Rgb([150, 150, 150]);
pub const ROI_LINE: Rgb<u8> = Rgb([0, 0, 255]);

// DejaVu Sans, see assets/DejaVuSans-LICENSE.txt
static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

fn load_font() -> Result<FontRef<'static>, RoiError> {
    Ok(FontRef::try_from_slice(FONT_BYTES)?)
}

/// Line chart of ROI per year, markers on every year.
///
/// With labels on (the default) the chart carries a title, axis labels,
/// year and ROI tick labels and a legend.
#[derive(Debug, Clone)]
pub struct RoiChart {
    width: u32,
    height: u32,
    margin: u32,
    marker_radius: i32,
    line_color: Rgb<u8>,
    labels: bool,
}

impl Default for RoiChart {
    fn default() -> Self {
        Self::new(CHART_WIDTH_PX, CHART_HEIGHT_PX)
    }
}

/// Pixel bounds of the plotting area plus the ROI range mapped onto it.
struct PlotArea {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    roi_min: f64,
    roi_max: f64,
}

impl PlotArea {
    fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return (self.left + self.right) / 2.0;
        }
        self.left + index as f64 * (self.right - self.left) / (count - 1) as f64
    }

    fn y_for(&self, roi: f64) -> f64 {
        let t = (roi - self.roi_min) / (self.roi_max - self.roi_min);
        self.bottom - t * (self.bottom - self.top)
    }

    fn roi_ticks(&self) -> Vec<f64> {
        (0..=CHART_ROI_TICKS)
            .map(|tick| {
                let t = tick as f64 / CHART_ROI_TICKS as f64;
                self.roi_min + t * (self.roi_max - self.roi_min)
            })
            .collect()
    }
}

/// ROI range with padding, so the line never touches the frame.
fn padded_range(roi: &[f64]) -> (f64, f64) {
    let (mut roi_min, mut roi_max) = roi
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    if !roi_min.is_finite() || !roi_max.is_finite() {
        roi_min = 0.0;
        roi_max = 0.0;
    }
    let span = roi_max - roi_min;
    if span <= f64::EPSILON * roi_max.abs().max(1.0) {
        let pad = (roi_max.abs() * 0.1).max(0.5);
        (roi_min - pad, roi_max + pad)
    } else {
        (roi_min - span * 0.05, roi_max + span * 0.05)
    }
}

fn roi_tick_label(value: f64) -> String {
    format!("{:.2}", value)
}

impl RoiChart {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: CHART_MARGIN_PX,
            marker_radius: CHART_MARKER_RADIUS_PX,
            line_color: ROI_LINE,
            labels: true,
        }
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_marker_radius(mut self, radius: i32) -> Self {
        self.marker_radius = radius;
        self
    }

    pub fn with_line_color(mut self, color: Rgb<u8>) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Renders `roi` (x = year index, y = ROI) and writes it as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, roi: &[f64], output_path: P) -> Result<(), RoiError> {
        let image = self.render(roi)?;
        if let Some(parent) = output_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        image.save(output_path)?;
        Ok(())
    }

    /// Fails with [`RoiError::ChartSize`] before allocating if either side is
    /// zero or larger than `CHART_MAX_SIDE_PX`.
    pub fn render(&self, roi: &[f64]) -> Result<RgbImage, RoiError> {
        self.check_size()?;
        let font = if self.labels { Some(load_font()?) } else { None };

        let mut img = ImageBuffer::from_pixel(self.width, self.height, BACKGROUND);
        let area = self.plot_area(roi, font.as_ref());
        self.draw_grid(&mut img, &area, roi.len());

        if area.roi_min < 0.0 && area.roi_max > 0.0 {
            let y = area.y_for(0.0).round() as f32;
            draw_line_segment_mut(
                &mut img,
                (area.left as f32, y),
                (area.right as f32, y),
                ZERO_LINE,
            );
        }
        self.draw_frame(&mut img, &area);

        let points: Vec<(i32, i32)> = roi
            .iter()
            .enumerate()
            .map(|(i, value)| {
                (
                    area.x_for(i, roi.len()).round() as i32,
                    area.y_for(*value).round() as i32,
                )
            })
            .collect();

        for pair in points.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            draw_line_segment_mut(
                &mut img,
                (x0 as f32, y0 as f32),
                (x1 as f32, y1 as f32),
                self.line_color,
            );
        }
        for point in &points {
            draw_filled_circle_mut(&mut img, *point, self.marker_radius, self.line_color);
        }

        if let Some(font) = &font {
            self.draw_labels(&mut img, &area, roi.len(), font);
            self.draw_legend(&mut img, &area, font);
        }

        Ok(img)
    }

    fn check_size(&self) -> Result<(), RoiError> {
        let valid = 1..=CHART_MAX_SIDE_PX;
        if valid.contains(&self.width) && valid.contains(&self.height) {
            Ok(())
        } else {
            Err(RoiError::ChartSize {
                width: self.width,
                height: self.height,
                max: CHART_MAX_SIDE_PX,
            })
        }
    }

    fn plot_area(&self, roi: &[f64], font: Option<&FontRef<'static>>) -> PlotArea {
        // keep at least half of each axis for plotting on tiny images
        let margin = self.margin.min(self.width / 4).min(self.height / 4) as f64;
        let (roi_min, roi_max) = padded_range(roi);

        let (mut left, mut top, mut bottom_inset) = (margin, margin, margin);
        if let Some(font) = font {
            let gap = CHART_LABEL_GAP_PX as f64;
            let (_, title_h) = text_size(CHART_TITLE_FONT_PX, font, CHART_TITLE);
            let (y_label_w, _) = text_size(CHART_FONT_PX, font, CHART_Y_LABEL);
            let (_, x_label_h) = text_size(CHART_FONT_PX, font, CHART_X_LABEL);
            let (_, tick_h) = text_size(CHART_FONT_PX, font, "0123456789");
            let tick_w = [roi_min, roi_max]
                .iter()
                .map(|v| text_size(CHART_FONT_PX, font, &roi_tick_label(*v)).0)
                .max()
                .unwrap_or(0);

            left += y_label_w as f64 + tick_w as f64 + 2.0 * gap;
            top += title_h as f64 + 2.0 * gap;
            bottom_inset += x_label_h as f64 + tick_h as f64 + 2.0 * gap;
        }

        let right = (self.width as f64 - 1.0 - margin).max(left);
        let bottom = (self.height as f64 - 1.0 - bottom_inset).max(top);
        left = left.min(right);
        top = top.min(bottom);

        PlotArea {
            left,
            right,
            top,
            bottom,
            roi_min,
            roi_max,
        }
    }

    fn draw_grid(&self, img: &mut RgbImage, area: &PlotArea, count: usize) {
        let (top, bottom) = (area.top as f32, area.bottom as f32);
        let (left, right) = (area.left as f32, area.right as f32);

        if count > 1 {
            for i in 0..count {
                let x = area.x_for(i, count).round() as f32;
                draw_line_segment_mut(img, (x, top), (x, bottom), GRID);
            }
        }
        for tick in area.roi_ticks() {
            let y = area.y_for(tick).round() as f32;
            draw_line_segment_mut(img, (left, y), (right, y), GRID);
        }
    }

    fn draw_frame(&self, img: &mut RgbImage, area: &PlotArea) {
        let (l, r) = (area.left as i32, area.right as i32);
        let (t, b) = (area.top as i32, area.bottom as i32);
        let frame = Rect::at(l, t).of_size((r - l + 1) as u32, (b - t + 1) as u32);
        draw_hollow_rect_mut(img, frame, AXIS);
    }

    fn draw_labels(&self, img: &mut RgbImage, area: &PlotArea, count: usize, font: &FontRef<'static>) {
        let gap = CHART_LABEL_GAP_PX;
        let margin = self.margin.min(self.width / 4).min(self.height / 4) as i32;

        let (title_w, _) = text_size(CHART_TITLE_FONT_PX, font, CHART_TITLE);
        let title_x = (self.width as i32 - title_w as i32) / 2;
        draw_text_mut(img, AXIS, title_x, margin, CHART_TITLE_FONT_PX, font, CHART_TITLE);

        let (_, y_label_h) = text_size(CHART_FONT_PX, font, CHART_Y_LABEL);
        let mid_y = ((area.top + area.bottom) / 2.0) as i32 - y_label_h as i32 / 2;
        draw_text_mut(img, AXIS, margin, mid_y, CHART_FONT_PX, font, CHART_Y_LABEL);

        for tick in area.roi_ticks() {
            let label = roi_tick_label(tick);
            let (w, h) = text_size(CHART_FONT_PX, font, &label);
            let x = area.left as i32 - gap - w as i32;
            let y = area.y_for(tick).round() as i32 - h as i32 / 2;
            draw_text_mut(img, AXIS, x, y, CHART_FONT_PX, font, &label);
        }

        // thin year labels out so neighbours never overlap
        if count > 0 {
            let (widest, tick_h) = text_size(CHART_FONT_PX, font, &(count - 1).to_string());
            let plot_w = (area.right - area.left).max(1.0);
            let per_label = (widest as i32 + gap) as f64;
            let step = ((count as f64 * per_label / plot_w).ceil() as usize).max(1);
            for year in (0..count).step_by(step) {
                let label = year.to_string();
                let (w, _) = text_size(CHART_FONT_PX, font, &label);
                let x = area.x_for(year, count).round() as i32 - w as i32 / 2;
                draw_text_mut(img, AXIS, x, area.bottom as i32 + gap, CHART_FONT_PX, font, &label);
            }

            let (x_label_w, _) = text_size(CHART_FONT_PX, font, CHART_X_LABEL);
            let x = ((area.left + area.right) / 2.0) as i32 - x_label_w as i32 / 2;
            let y = area.bottom as i32 + 2 * gap + tick_h as i32;
            draw_text_mut(img, AXIS, x, y, CHART_FONT_PX, font, CHART_X_LABEL);
        }
    }

    fn draw_legend(&self, img: &mut RgbImage, area: &PlotArea, font: &FontRef<'static>) {
        let gap = CHART_LABEL_GAP_PX;
        let sample_w = 24;
        let (text_w, text_h) = text_size(CHART_FONT_PX, font, CHART_Y_LABEL);

        let box_w = (gap * 3 + sample_w + text_w as i32) as u32;
        let box_h = (gap * 2 + text_h as i32) as u32;
        let box_x = area.right as i32 - gap - box_w as i32;
        let box_y = area.top as i32 + gap;
        if box_x <= area.left as i32 || box_y + box_h as i32 >= area.bottom as i32 {
            return;
        }

        let legend = Rect::at(box_x, box_y).of_size(box_w, box_h);
        draw_filled_rect_mut(img, legend, BACKGROUND);
        draw_hollow_rect_mut(img, legend, AXIS);

        let line_y = (box_y + gap + text_h as i32 / 2) as f32;
        let line_x0 = (box_x + gap) as f32;
        let line_x1 = line_x0 + sample_w as f32;
        draw_line_segment_mut(img, (line_x0, line_y), (line_x1, line_y), self.line_color);
        draw_filled_circle_mut(
            img,
            (((line_x0 + line_x1) / 2.0) as i32, line_y as i32),
            self.marker_radius,
            self.line_color,
        );
        draw_text_mut(
            img,
            AXIS,
            box_x + gap * 2 + sample_w,
            box_y + gap,
            CHART_FONT_PX,
            font,
            CHART_Y_LABEL,
        );
    }
}
