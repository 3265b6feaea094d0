/// The subset of a 2D drawing context the line renderer needs.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, pattern: &[f64]);
    fn begin_path(&mut self);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    StrokeStyle(String),
    LineWidth(f64),
    LineDash(Vec<f64>),
    BeginPath,
    LineTo(f64, f64),
    Stroke,
}

/// Headless surface that records every call, used to drive the renderer
/// without a browser.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Points of every stroked path, in draw order.
    pub fn stroked_paths(&self) -> Vec<Vec<(f64, f64)>> {
        let mut paths = Vec::new();
        let mut current: Option<Vec<(f64, f64)>> = None;
        for cmd in &self.commands {
            match cmd {
                DrawCommand::BeginPath => current = Some(Vec::new()),
                DrawCommand::LineTo(x, y) => {
                    if let Some(path) = current.as_mut() {
                        path.push((*x, *y));
                    }
                }
                DrawCommand::Stroke => {
                    if let Some(path) = current.take() {
                        paths.push(path);
                    }
                }
                _ => {}
            }
        }
        paths
    }

    /// Most recent dash pattern set on the surface.
    pub fn last_dash(&self) -> Option<&[f64]> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::LineDash(p) => Some(p.as_slice()),
            _ => None,
        })
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.commands.push(DrawCommand::LineDash(pattern.to_vec()));
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
