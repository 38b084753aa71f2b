// Small helpers shared by the model and the components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

/// Fisher-Yates shuffle driven by `rand`, which must return values in `[0, 1)`.
pub fn shuffle_with<T>(items: &mut [T], mut rand: impl FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        let j = ((rand() * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, js_sys::Math::random);
}

/// Display order for `len` choices, shuffled.
pub fn shuffled_order(len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    shuffle(&mut order);
    order
}

/// Two-digit question number, e.g. `NEXT 01`.
pub fn pad2(n: usize) -> String {
    format!("{:02}", n)
}
