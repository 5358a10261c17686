use crate::domain::errors::{AppError, RenderResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::rendering::scale::ChartScale;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// One polyline in a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub stroke: &'static str,
    pub fill: Option<&'static str>,
    pub dashed: bool,
    pub point_radius: f64,
}

/// Declarative description of a line chart, built by the application layer
/// from a Result Record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChartSpec {
    /// Categorical x axis labels; when present, dataset x values are indices
    /// into this list.
    pub x_labels: Option<Vec<String>>,
    pub datasets: Vec<ChartDataset>,
}

impl LineChartSpec {
    pub fn points(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.datasets.iter().flat_map(|d| d.points.iter())
    }
}

/// A rendered chart instance tied to one canvas.
///
/// Dropping the struct does not clear pixels; callers go through
/// [`ChartSlot`] which destroys the previous instance before drawing a new
/// one on the same canvas.
pub struct LineChart {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl LineChart {
    /// Draw `spec` onto the canvas and hand back the live instance.
    pub fn render(canvas_id: &str, width: u32, height: u32, spec: &LineChartSpec) -> RenderResult<Self> {
        let chart = Self { canvas_id: canvas_id.to_string(), width, height };
        let (_canvas, context) = chart.canvas_context()?;

        // Dark panel background
        context.clear_rect(0.0, 0.0, width as f64, height as f64);
        context.set_fill_style(&JsValue::from("#0f172a"));
        context.fill_rect(0.0, 0.0, width as f64, height as f64);

        let scale = match ChartScale::from_points(spec.points(), width as f64, height as f64) {
            Some(scale) => scale,
            None => {
                chart.render_no_data_message(&context)?;
                return Ok(chart);
            }
        };

        for dataset in &spec.datasets {
            chart.render_dataset(&context, dataset, &scale)?;
        }
        chart.render_axis_labels(&context, spec, &scale)?;
        chart.render_legend(&context, spec)?;

        get_logger().debug(
            LogComponent::Infrastructure("LineChart"),
            &format!("Rendered {} datasets on #{}", spec.datasets.len(), canvas_id),
        );

        Ok(chart)
    }

    /// Release the instance: wipe the canvas it owned.
    pub fn destroy(self) {
        if let Ok((_canvas, context)) = self.canvas_context() {
            context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        }
        get_logger().debug(
            LogComponent::Infrastructure("LineChart"),
            &format!("Destroyed chart instance on #{}", self.canvas_id),
        );
    }

    /// Get canvas element and context
    fn canvas_context(&self) -> RenderResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Rendering("Document not available".to_string()))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| AppError::Rendering(format!("Canvas #{} not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Rendering("Element is not a canvas".to_string()))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::Rendering("Failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("Failed to cast to 2D context".to_string()))?;

        Ok((canvas, context))
    }

    fn render_dataset(
        &self,
        context: &CanvasRenderingContext2d,
        dataset: &ChartDataset,
        scale: &ChartScale,
    ) -> RenderResult<()> {
        if dataset.points.is_empty() {
            return Ok(());
        }

        let pixels: Vec<(f64, f64)> =
            dataset.points.iter().map(|&(x, y)| scale.map(x, y)).collect();

        // Area fill down to the plot baseline
        if let Some(fill) = dataset.fill {
            context.set_fill_style(&JsValue::from(fill));
            context.begin_path();
            context.move_to(pixels[0].0, scale.baseline());
            for &(px, py) in &pixels {
                context.line_to(px, py);
            }
            context.line_to(pixels[pixels.len() - 1].0, scale.baseline());
            context.close_path();
            context.fill();
        }

        context.set_stroke_style(&JsValue::from(dataset.stroke));
        context.set_line_width(2.0);
        let dash = if dataset.dashed {
            js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0))
        } else {
            js_sys::Array::new()
        };
        context
            .set_line_dash(&dash)
            .map_err(|_| AppError::Rendering("Failed to set line dash".to_string()))?;

        context.begin_path();
        context.move_to(pixels[0].0, pixels[0].1);
        for &(px, py) in &pixels[1..] {
            context.line_to(px, py);
        }
        context.stroke();

        // Point markers
        if dataset.point_radius > 0.0 {
            context.set_fill_style(&JsValue::from(dataset.stroke));
            for &(px, py) in &pixels {
                context.begin_path();
                context
                    .arc(px, py, dataset.point_radius, 0.0, std::f64::consts::TAU)
                    .map_err(|_| AppError::Rendering("Failed to draw point marker".to_string()))?;
                context.fill();
            }
        }

        Ok(())
    }

    /// Min/max y labels on the left, first/last x labels on the bottom.
    fn render_axis_labels(
        &self,
        context: &CanvasRenderingContext2d,
        spec: &LineChartSpec,
        scale: &ChartScale,
    ) -> RenderResult<()> {
        context.set_fill_style(&JsValue::from("#e5e7eb"));
        context.set_font("12px Arial");

        let max_text = format!("{:.2}", scale.max_y);
        let min_text = format!("{:.2}", scale.min_y);
        context
            .fill_text(&max_text, 6.0, scale.padding + 4.0)
            .map_err(|_| AppError::Rendering("Failed to draw axis label".to_string()))?;
        context
            .fill_text(&min_text, 6.0, scale.baseline())
            .map_err(|_| AppError::Rendering("Failed to draw axis label".to_string()))?;

        let (first, last) = match &spec.x_labels {
            Some(labels) if !labels.is_empty() => {
                (labels[0].clone(), labels[labels.len() - 1].clone())
            }
            _ => (format!("{:.0}", scale.min_x), format!("{:.0}", scale.max_x)),
        };
        let label_y = scale.baseline() + 20.0;
        context
            .fill_text(&first, scale.padding, label_y)
            .map_err(|_| AppError::Rendering("Failed to draw axis label".to_string()))?;
        context
            .fill_text(&last, scale.padding + scale.plot_width - 40.0, label_y)
            .map_err(|_| AppError::Rendering("Failed to draw axis label".to_string()))?;

        Ok(())
    }

    fn render_legend(
        &self,
        context: &CanvasRenderingContext2d,
        spec: &LineChartSpec,
    ) -> RenderResult<()> {
        context.set_font("12px Arial");
        let mut x = 50.0;
        for dataset in &spec.datasets {
            context.set_fill_style(&JsValue::from(dataset.stroke));
            context.fill_rect(x, 12.0, 10.0, 10.0);
            context.set_fill_style(&JsValue::from("#e5e7eb"));
            context
                .fill_text(&dataset.label, x + 14.0, 21.0)
                .map_err(|_| AppError::Rendering("Failed to draw legend".to_string()))?;
            x += 14.0 + dataset.label.len() as f64 * 7.0 + 20.0;
        }
        Ok(())
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> RenderResult<()> {
        context.set_fill_style(&JsValue::from("#e5e7eb"));
        context.set_font("16px Arial");
        context
            .fill_text("No chart data available", 50.0, self.height as f64 / 2.0)
            .map_err(|_| AppError::Rendering("Failed to draw message".to_string()))?;

        get_logger().warn(LogComponent::Infrastructure("LineChart"), "No data points to render");
        Ok(())
    }
}

/// Per-panel chart holder enforcing destroy-before-redraw on one canvas.
///
/// Owned by the panel component instance, not a module global, so multiple
/// panels on one page keep independent chart instances.
pub struct ChartSlot {
    canvas_id: String,
    width: u32,
    height: u32,
    current: RefCell<Option<LineChart>>,
}

impl ChartSlot {
    pub fn new(canvas_id: &str, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.to_string(), width, height, current: RefCell::new(None) }
    }

    /// Destroy whatever chart lives on this canvas, then draw the new spec.
    pub fn replace(&self, spec: &LineChartSpec) -> RenderResult<()> {
        if let Some(previous) = self.current.borrow_mut().take() {
            previous.destroy();
        }
        let chart = LineChart::render(&self.canvas_id, self.width, self.height, spec)?;
        *self.current.borrow_mut() = Some(chart);
        Ok(())
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }
}
