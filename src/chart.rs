//! Climate chart data and layout for `climate-*` questions.
//! Values are in chart units: temperatures are pre-offset marker heights,
//! precipitation is twice the bar height.

pub const CHART_WIDTH: f64 = 300.0;
pub const CHART_HEIGHT: f64 = 220.0;
pub const AXIS_Y: f64 = 180.0;
pub const AXIS_X: f64 = 30.0;
const TEMP_OFFSET: f64 = 50.0;
const MONTH_STEP: f64 = 20.0;
const TEMP_MARKER_X: f64 = 45.0;
pub const TEMP_MARKER_SIZE: f64 = 8.0;
const BAR_X: f64 = 42.0;
pub const BAR_WIDTH: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClimateZone {
    /// Tropical rainforest.
    Af,
    /// Tropical savanna.
    Aw,
    /// Hot desert.
    BWh,
    /// Mediterranean.
    Csa,
    /// Oceanic.
    Cfb,
}

pub struct ClimateData {
    pub temp: [u32; 12],
    pub precip: [u32; 12],
}

const AF: ClimateData = ClimateData {
    temp: [180, 175, 170, 175, 180, 185, 190, 195, 190, 185, 180, 175],
    precip: [90, 85, 95, 100, 95, 90, 85, 80, 85, 90, 95, 90],
};
const AW: ClimateData = ClimateData {
    temp: [170, 165, 160, 165, 170, 175, 180, 185, 180, 175, 170, 165],
    precip: [20, 15, 10, 5, 30, 80, 100, 95, 85, 60, 40, 25],
};
const BWH: ClimateData = ClimateData {
    temp: [150, 140, 120, 100, 80, 70, 75, 85, 105, 125, 145, 155],
    precip: [5, 3, 2, 1, 1, 0, 0, 1, 2, 3, 4, 5],
};
const CSA: ClimateData = ClimateData {
    temp: [160, 150, 130, 110, 90, 75, 70, 75, 95, 115, 135, 155],
    precip: [80, 70, 60, 40, 20, 5, 2, 5, 25, 50, 70, 85],
};
const CFB: ClimateData = ClimateData {
    temp: [170, 155, 140, 120, 100, 85, 80, 85, 105, 125, 145, 165],
    precip: [70, 65, 60, 55, 50, 45, 40, 45, 55, 65, 70, 75],
};

impl ClimateZone {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "af" => Some(Self::Af),
            "aw" => Some(Self::Aw),
            "bwh" => Some(Self::BWh),
            "csa" => Some(Self::Csa),
            "cfb" => Some(Self::Cfb),
            _ => None,
        }
    }

    pub fn data(self) -> &'static ClimateData {
        match self {
            Self::Af => &AF,
            Self::Aw => &AW,
            Self::BWh => &BWH,
            Self::Csa => &CSA,
            Self::Cfb => &CFB,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthLabel {
    pub x: f64,
    pub text: &'static str,
}

pub struct ChartLayout {
    pub temp_markers: Vec<Rect>,
    pub precip_bars: Vec<Rect>,
    pub month_labels: [MonthLabel; 3],
}

fn month_center(month: usize) -> f64 {
    TEMP_MARKER_X + TEMP_MARKER_SIZE / 2.0 + month as f64 * MONTH_STEP
}

pub fn layout(zone: ClimateZone) -> ChartLayout {
    let data = zone.data();
    let temp_markers = data
        .temp
        .iter()
        .enumerate()
        .map(|(m, &t)| Rect {
            x: TEMP_MARKER_X + m as f64 * MONTH_STEP,
            y: AXIS_Y - (t as f64 - TEMP_OFFSET),
            width: TEMP_MARKER_SIZE,
            height: TEMP_MARKER_SIZE,
        })
        .collect();
    let precip_bars = data
        .precip
        .iter()
        .enumerate()
        .map(|(m, &p)| {
            let h = p as f64 / 2.0;
            Rect {
                x: BAR_X + m as f64 * MONTH_STEP,
                y: AXIS_Y - h,
                width: BAR_WIDTH,
                height: h,
            }
        })
        .collect();
    ChartLayout {
        temp_markers,
        precip_bars,
        month_labels: [
            MonthLabel { x: month_center(0), text: "1" },
            MonthLabel { x: month_center(5), text: "6" },
            MonthLabel { x: month_center(11), text: "12" },
        ],
    }
}

/// Width of the x axis so the last bar still sits on it.
pub fn axis_length() -> f64 {
    BAR_X + 11.0 * MONTH_STEP + BAR_WIDTH + 4.0 - AXIS_X
}
