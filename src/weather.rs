use crate::{
    config::ResolvedSettings,
    info,
    platform::WidgetType,
    slots::{contains, contains_any, WidgetSlots},
    store::{store_keys, SettingsStore},
    DEBUG_NAME,
};

/// Trigger seam toward the weather retrieval process. Fire-and-forget; the
/// bridge never observes a result.
pub trait WeatherUpdater {
    fn update_weather(&mut self, force_refresh: bool);
}

/// Weather enablement derived from the final slot assignment. Both fields
/// are always concrete; "leave the previous value" is never an option here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherFlags {
    pub weather_disabled: bool,
    pub forecast_enabled: bool,
}

pub fn derive_weather_flags(slots: &WidgetSlots) -> WeatherFlags {
    let has_weather = contains_any(
        slots,
        &[WidgetType::WeatherCurrent, WidgetType::WeatherForecastToday],
    );

    WeatherFlags {
        weather_disabled: !has_weather,
        forecast_enabled: contains(slots, WidgetType::WeatherForecastToday),
    }
}

/// Commits the enablement flags. Called right after normalization, before
/// any transport traffic: if the send later fails, the companion-side flags
/// run ahead of the watch until the next successful pass. Accepted.
pub fn persist_weather_flags(store: &mut dyn SettingsStore, flags: WeatherFlags) {
    store.set(
        store_keys::DISABLE_WEATHER,
        if flags.weather_disabled { "yes" } else { "no" },
    );
    store.set(
        store_keys::ENABLE_FORECAST,
        if flags.forecast_enabled { "yes" } else { "no" },
    );

    info!(
        "[{}][WEATHER] Persisted flags: disabled={}, forecast={}",
        DEBUG_NAME, flags.weather_disabled, flags.forecast_enabled
    );
}

/// Location and data-source preferences only matter while a weather widget
/// is on screen; without one they are left untouched in the store.
pub fn persist_weather_prefs(
    store: &mut dyn SettingsStore,
    settings: &ResolvedSettings,
    slots: &WidgetSlots,
) {
    let has_weather = contains_any(
        slots,
        &[WidgetType::WeatherCurrent, WidgetType::WeatherForecastToday],
    );
    if !has_weather {
        return;
    }

    if let Some(location) = &settings.weather_location {
        store.set(store_keys::WEATHER_LOC, &location.name);
        store.set(store_keys::WEATHER_LOC_LAT, &location.lat);
        store.set(store_keys::WEATHER_LOC_LNG, &location.lng);
    }

    if let Some(datasource) = &settings.weather_datasource {
        store.set(store_keys::WEATHER_DATASOURCE, datasource);
        if let Some(api_key) = &settings.weather_api_key {
            store.set(store_keys::WEATHER_API_KEY, api_key);
        }
    }
}

pub fn is_weather_disabled(store: &dyn SettingsStore) -> bool {
    store
        .get(store_keys::DISABLE_WEATHER)
        .map(|v| v == "yes")
        .unwrap_or(true)
}

/// First launch: the watchface ships with weather off, so an unset flag
/// must read as disabled rather than kicking off a retrieval.
pub fn ensure_first_run_defaults(store: &mut dyn SettingsStore) {
    if store.get(store_keys::DISABLE_WEATHER).is_none() {
        store.set(store_keys::DISABLE_WEATHER, "yes");
        info!("[{}][WEATHER] First run, weather disabled by default", DEBUG_NAME);
    }
}

/// Companion startup hook: refresh weather data if it is enabled.
pub fn handle_startup(store: &mut dyn SettingsStore, updater: &mut dyn WeatherUpdater) {
    ensure_first_run_defaults(store);

    if !is_weather_disabled(store) {
        updater.update_weather(false);
    }
}

/// A message from the watch is always a request for weather data: the watch
/// knows better than our flag whether it needs it.
pub fn handle_device_weather_request(
    store: &mut dyn SettingsStore,
    updater: &mut dyn WeatherUpdater,
) {
    store.set(store_keys::DISABLE_WEATHER, "no");
    updater.update_weather(false);
}
