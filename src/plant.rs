//! Procedural plant geometry. Everything here is pure arithmetic on the growth
//! level; `components::plant_view` turns it into SVG.

/// Stem pixels added per growth level.
pub const GROWTH_STEP: f64 = 25.0;
/// Y of the soil line inside the 150-wide plant canvas.
pub const BASE_Y: f64 = 150.0;
pub const STEM_X: f64 = 73.0;
pub const STEM_WIDTH: f64 = 4.0;
pub const CENTER_X: f64 = 75.0;
/// The live view starts panning once the stem is taller than this.
pub const PAN_THRESHOLD: f64 = 75.0;
/// Height of pot plus base area in the final view.
const FINAL_MARGIN: f64 = 65.0;
const FINAL_BASELINE: f64 = 173.0;
pub const CM_PER_LEVEL: u32 = 10;
const MIN_CONTAINER_PX: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decoration {
    /// `x`/`y` are the flower centre; the group is drawn from `(x - 10, y - 10)`.
    Flower { x: f64, y: f64 },
    Butterfly { x: f64, y: f64 },
    Dragonfly { x: f64, y: f64 },
}

/// Which view the plant is drawn in. Odd-numbered flowers sit closer to the
/// stem on the result screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Live,
    Final,
}

impl Scene {
    fn right_flower_dx(self) -> f64 {
        match self {
            Scene::Live => 20.0,
            Scene::Final => 15.0,
        }
    }
}

pub fn stem_height(growth: u32) -> f64 {
    growth as f64 * GROWTH_STEP
}

pub fn stem_top(growth: u32) -> f64 {
    BASE_Y - stem_height(growth)
}

/// Downward pan of the live plant group so tall plants stay on screen.
pub fn pan_offset(growth: u32) -> f64 {
    (stem_height(growth) - PAN_THRESHOLD).max(0.0)
}

/// Decorations unlocked at exactly this level.
pub fn decorations_at(level: u32, scene: Scene) -> Vec<Decoration> {
    let mut out = Vec::new();
    if level == 0 {
        return out;
    }
    let height = stem_height(level);
    if level % 5 == 0 {
        let y = BASE_Y - (height - GROWTH_STEP) - 5.0;
        let x = CENTER_X + if level % 10 == 0 { -20.0 } else { scene.right_flower_dx() };
        out.push(Decoration::Flower { x, y });
    }
    let insect_y = BASE_Y - height - 15.0;
    match level {
        10 => out.push(Decoration::Butterfly { x: CENTER_X - 40.0, y: insect_y }),
        20 => out.push(Decoration::Dragonfly { x: CENTER_X + 10.0, y: insect_y }),
        _ => {}
    }
    out
}

/// Every decoration earned up to and including `growth`.
pub fn decorations(growth: u32, scene: Scene) -> Vec<Decoration> {
    (1..=growth).flat_map(|level| decorations_at(level, scene)).collect()
}

pub fn height_cm(growth: u32) -> u32 {
    growth * CM_PER_LEVEL
}

/// Pixel height of the result-screen plant container.
pub fn container_height_px(growth: u32) -> u32 {
    MIN_CONTAINER_PX.max(150 + height_cm(growth) * 2)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalLayout {
    pub view_height: f64,
    pub y_translate: f64,
}

pub fn final_layout(growth: u32) -> FinalLayout {
    let view_height = stem_height(growth) + FINAL_MARGIN;
    FinalLayout {
        view_height,
        y_translate: view_height - FINAL_BASELINE,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureTick {
    pub label: u32,
    /// Distance from the bottom of the scale, in percent.
    pub bottom_percent: f64,
}

/// Ticks for the measuring scale beside the final plant. Empty for a bare pot.
pub fn measure_ticks(cm: u32) -> Vec<MeasureTick> {
    if cm == 0 {
        return Vec::new();
    }
    let step = 10.max(cm.div_ceil(100) * 10);
    (0..=cm)
        .step_by(step as usize)
        .map(|label| MeasureTick {
            label,
            bottom_percent: label as f64 / cm as f64 * 100.0,
        })
        .collect()
}

/// Inline transition for the stem rect. `y` and `height` are rect attributes
/// and do not inherit, so this has to sit on the rect itself.
pub fn stem_transition(secs: f64) -> String {
    format!("transition: height {0}s ease-out, y {0}s ease-out;", secs)
}

/// CSS custom properties driving the wilt keyframes from the current leaf offset.
pub fn wilt_vars(growth: u32) -> String {
    let h = stem_height(growth);
    format!(
        "--wilt-start-y: translate(0, {}px); --wilt-end-y: translate(0, {}px);",
        -h,
        -h + 10.0
    )
}
