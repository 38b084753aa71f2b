// Persisted user settings (localStorage)
use crate::model::Speed;

const SPEED_KEY: &str = "gs_setting_speed";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn parse_speed(raw: &str) -> Option<Speed> {
    raw.trim().parse::<u32>().ok().and_then(Speed::from_level)
}

pub fn load_speed() -> Option<Speed> {
    let raw = storage()?.get_item(SPEED_KEY).ok().flatten()?;
    parse_speed(&raw)
}

pub fn save_speed(speed: Speed) {
    if let Some(store) = storage() {
        let _ = store.set_item(SPEED_KEY, &speed.level().to_string());
    }
}
