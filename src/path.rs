use crate::colour::Colour;
use crate::surface::Surface;

/// A single outline drawing command, in surface coordinates
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { x1: f32, y1: f32, x: f32, y: f32 },
    CurveTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    Close,
}

/// A drawable outline, typically the glyphs of a run of text. The fill is
/// applied when the path is drawn; a path without a fill only builds the
/// outline on the surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
    pub fill: Option<Colour>,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadTo { x1, y1, x, y });
    }

    pub fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Replay the outline onto the surface as a fresh path, then fill it if
    /// this path has a fill
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.begin_path();
        for command in self.commands.iter() {
            match *command {
                PathCommand::MoveTo { x, y } => surface.move_to(x, y),
                PathCommand::LineTo { x, y } => surface.line_to(x, y),
                PathCommand::QuadTo { x1, y1, x, y } => surface.quad_to(x1, y1, x, y),
                PathCommand::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => surface.curve_to(x1, y1, x2, y2, x, y),
                PathCommand::Close => surface.close_path(),
            }
        }

        if let Some(fill) = self.fill {
            surface.set_fill_style(Some(fill));
            surface.fill();
        }
    }
}
