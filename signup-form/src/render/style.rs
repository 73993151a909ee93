#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub reversed: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            reversed: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }
}

/// Colors used by the form renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    /// Input field surface.
    pub surface: Rgb,
    /// Focus ring and primary button.
    pub primary: Rgb,
    pub error: Rgb,
    pub success: Rgb,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            background: Rgb::new(17, 24, 39),
            foreground: Rgb::new(243, 244, 246),
            muted: Rgb::new(156, 163, 175),
            surface: Rgb::new(31, 41, 55),
            primary: Rgb::new(6, 182, 212),
            error: Rgb::new(239, 68, 68),
            success: Rgb::new(34, 197, 94),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
