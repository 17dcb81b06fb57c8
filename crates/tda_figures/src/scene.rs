//! Renderable scene descriptions.
//!
//! A [`Figure`] is a plain data value: a list of [`Trace`]s plus a
//! [`Layout`]. The field names follow plotly's figure schema so the
//! serialised JSON can be handed straight to a plotly front end.

use serde::Serialize;

// =============================================================================
// Trace styling
// =============================================================================

/// How a trace's samples are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    /// One marker per sample.
    Markers,
    /// A polyline through the samples.
    Lines,
}

/// Area fill of a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    /// Fill the closed shape described by the trace itself.
    ToSelf,
}

/// Hover label behaviour of a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverInfo {
    /// Trace does not react to hovering.
    Skip,
}

/// Dash pattern of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    /// Dashed line.
    Dash,
}

/// Marker styling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    /// Marker diameter in pixels.
    pub size: u32,
    /// CSS colour.
    pub color: String,
}

impl Marker {
    /// Create a marker style.
    pub fn new(size: u32, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }
}

/// Line styling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    /// CSS colour.
    pub color: String,
    /// Stroke width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Dash pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashStyle>,
}

impl Line {
    /// Create a solid line of default width.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            width: None,
            dash: None,
        }
    }

    /// Set the stroke width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the dash pattern.
    pub fn dash(mut self, dash: DashStyle) -> Self {
        self.dash = Some(dash);
        self
    }
}

// =============================================================================
// Trace
// =============================================================================

/// One drawable primitive: a marker set, or a polyline that may be filled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    /// Horizontal coordinates.
    pub x: Vec<f64>,
    /// Vertical coordinates.
    pub y: Vec<f64>,
    /// Drawing mode.
    pub mode: TraceMode,
    /// Marker styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// Line styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    /// Area fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    /// Fill colour, only meaningful with `fill`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    /// Whether the trace appears in the legend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    /// Hover behaviour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<HoverInfo>,
}

impl Trace {
    fn with_mode(x: Vec<f64>, y: Vec<f64>, mode: TraceMode) -> Self {
        Self {
            x,
            y,
            mode,
            marker: None,
            line: None,
            fill: None,
            fillcolor: None,
            showlegend: None,
            hoverinfo: None,
        }
    }

    /// Marker trace through the given coordinates.
    pub fn markers(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::with_mode(x, y, TraceMode::Markers)
    }

    /// Polyline trace through the given coordinates.
    pub fn lines(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::with_mode(x, y, TraceMode::Lines)
    }

    /// Set the marker style.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Set the line style.
    pub fn line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    /// Fill the enclosed area with `color`.
    pub fn filled(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(Fill::ToSelf);
        self.fillcolor = Some(color.into());
        self
    }

    /// Hide the trace from the legend and from hover labels.
    pub fn decorative(mut self) -> Self {
        self.showlegend = Some(false);
        self.hoverinfo = Some(HoverInfo::Skip);
        self
    }

    /// Number of samples in the trace.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trace holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` samples.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Horizontal anchor of the title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XAnchor {
    /// Anchor at the left edge.
    Left,
}

/// Hover behaviour of the whole figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    /// Label the sample closest to the cursor.
    Closest,
}

/// Figure title.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    /// Title text.
    pub text: String,
    /// Horizontal anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<XAnchor>,
}

impl Title {
    /// Title with default anchoring.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            xanchor: None,
        }
    }

    /// Set the horizontal anchor.
    pub fn anchored(mut self, xanchor: XAnchor) -> Self {
        self.xanchor = Some(xanchor);
        self
    }
}

/// Axis title.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    /// Title text.
    pub text: String,
}

/// Axis configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    /// Axis title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    /// Visible `[min, max]` range.
    pub range: [f64; 2],
    /// Axis this one is scaled against (e.g. `"y"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleanchor: Option<String>,
    /// Unit ratio relative to `scaleanchor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleratio: Option<f64>,
}

impl Axis {
    /// Untitled axis over `[min, max]`.
    pub fn ranged(min: f64, max: f64) -> Self {
        Self {
            title: None,
            range: [min, max],
            scaleanchor: None,
            scaleratio: None,
        }
    }

    /// Set the axis title.
    pub fn titled(mut self, text: impl Into<String>) -> Self {
        self.title = Some(AxisTitle { text: text.into() });
        self
    }

    /// Lock this axis' unit length to `anchor` at the given ratio.
    pub fn scaled_to(mut self, anchor: impl Into<String>, ratio: f64) -> Self {
        self.scaleanchor = Some(anchor.into());
        self.scaleratio = Some(ratio);
        self
    }
}

/// Figure-wide layout metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    /// Title.
    pub title: Title,
    /// Horizontal axis.
    pub xaxis: Axis,
    /// Vertical axis.
    pub yaxis: Axis,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Hover behaviour.
    pub hovermode: HoverMode,
    /// Whether a legend is drawn.
    pub showlegend: bool,
}

// =============================================================================
// Figure
// =============================================================================

/// A complete scene: traces drawn in order, plus layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    data: Vec<Trace>,
    layout: Layout,
}

impl Figure {
    /// Assemble a figure.
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// Traces in drawing order.
    #[inline]
    pub fn traces(&self) -> &[Trace] {
        &self.data
    }

    /// Layout metadata.
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Serialise to a JSON value.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Serialise to a compact JSON string.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialise to an indented JSON string.
    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The two figures produced for one radius.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FigurePair {
    /// Points with a disk around each.
    pub point_cloud: Figure,
    /// Filtered birth/death scatter.
    pub persistence_diagram: Figure,
}
