//! Pages, spreads and album formats.

use serde::{Deserialize, Serialize};

/// Page identifier. Each page is one spread (a left and a right side).
pub type PageId = String;

/// A logical spread that elements are bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
}

impl Page {
    pub fn new(id: impl Into<PageId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Physical size of a single album page, in document units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumFormat {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl AlbumFormat {
    /// Built-in album formats.
    pub fn presets() -> Vec<AlbumFormat> {
        vec![
            AlbumFormat::new("a4", "210×297 (A4)", 210.0, 297.0),
            AlbumFormat::new("200", "200×200", 200.0, 200.0),
            AlbumFormat::new("225", "225×270", 225.0, 270.0),
        ]
    }

    pub fn new(id: &str, name: &str, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            width,
            height,
        }
    }

    /// Width of a full spread (two pages side by side).
    pub fn spread_width(&self) -> f64 {
        self.width * 2.0
    }
}

impl Default for AlbumFormat {
    fn default() -> Self {
        AlbumFormat::new("a4", "210×297 (A4)", 210.0, 297.0)
    }
}

/// Whether the canvas shows a whole spread or one page of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Spread,
    Single,
}

/// Which half of the spread is displayed in single-page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSide {
    #[default]
    Left,
    Right,
}

/// View state describing which part of the active spread is on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub view_mode: ViewMode,
    pub side: PageSide,
    pub format: AlbumFormat,
}

impl PageLayout {
    pub fn new(format: AlbumFormat) -> Self {
        Self {
            view_mode: ViewMode::default(),
            side: PageSide::default(),
            format,
        }
    }

    /// Switch view mode. Entering single view always starts on the left page.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if mode == ViewMode::Single {
            self.side = PageSide::Left;
        }
    }

    /// Horizontal offset between displayed coordinates and stored coordinates.
    ///
    /// Stored x stays continuous across the spread, so the right page in
    /// single view is shifted by one page width.
    pub fn x_offset(&self) -> f64 {
        if self.view_mode == ViewMode::Single && self.side == PageSide::Right {
            self.format.width
        } else {
            0.0
        }
    }

    /// Size of the visible canvas content.
    pub fn canvas_size(&self) -> kurbo::Size {
        let width = match self.view_mode {
            ViewMode::Spread => self.format.spread_width(),
            ViewMode::Single => self.format.width,
        };
        kurbo::Size::new(width, self.format.height)
    }
}
