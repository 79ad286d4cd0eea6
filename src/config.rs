use serde_json::{Map, Value};

use crate::{
    info, warn,
    platform::{BarPosition, PlatformVariant, WidgetType},
    CONFIG_VERSION, DEBUG_NAME,
};

const BASE_CONFIG_URL: &str = "http://freakified.github.io/TimeStylePebble/";

/// Untrusted, flat settings object decoded from the webview response.
/// Every accessor is tolerant: a missing or malformed value reads as absent.
#[derive(Debug, Clone)]
pub struct RawConfig {
    map: Map<String, Value>,
}

/// Typed projection of [`RawConfig`]. A field is `Some` only when the form
/// supplied a recognized, parseable value; absence means the watch keeps
/// whatever it already has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSettings {
    pub color_bg: Option<u32>,
    pub color_sidebar: Option<u32>,
    pub color_time: Option<u32>,
    pub sidebar_text_color: Option<u32>,

    pub language_id: Option<u8>,
    pub show_leading_zero: Option<u32>,
    pub center_time: Option<u32>,
    pub clock_font_id: Option<u32>,

    pub hourly_vibe: Option<u32>,
    pub bluetooth_vibe: Option<u32>,

    pub disconnect_icon: Option<u32>,
    pub use_large_fonts: Option<u32>,
    pub use_metric: Option<u32>,
    pub show_battery_pct: Option<u32>,
    pub autobattery_requested: Option<bool>,

    pub altclock_name: Option<String>,
    pub altclock_offset: Option<i32>,

    pub decimal_separator: Option<String>,
    pub health_activity_display: Option<u32>,
    pub health_use_restful_sleep: Option<u32>,

    pub bar_position: Option<BarPosition>,
    pub requested_widgets: [Option<WidgetType>; 4],

    // companion-local weather preferences, never sent to the watch
    pub weather_location: Option<WeatherLocation>,
    pub weather_datasource: Option<String>,
    pub weather_api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherLocation {
    pub name: String,
    pub lat: String,
    pub lng: String,
}

impl RawConfig {
    /// Decodes the URL-encoded webview response into a raw settings object.
    /// `None` means the user closed the form without saving; the whole
    /// reconciliation pass is a no-op in that case.
    pub fn from_webview_response(response: &str) -> Option<Self> {
        let decoded = urlencoding::decode(response).ok()?;
        let trimmed = decoded.trim();
        if trimmed.is_empty() {
            return None;
        }

        let value: Value = match serde_json::from_str(trimmed) {
            Ok(v) => v,
            Err(e) => {
                warn!("[{}][CONFIG] Webview response is not valid JSON: {e}", DEBUG_NAME);
                return None;
            }
        };

        let map = value.as_object()?.clone();
        Some(Self { map })
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self { map }
    }

    fn value_at(&self, key: &str) -> Option<&Value> {
        let v = self.map.get(key)?;
        if v.is_null() {
            return None;
        }
        Some(v)
    }

    fn str_at(&self, key: &str) -> Option<&str> {
        self.value_at(key)?.as_str()
    }

    // The form submits unset text inputs as "", which the original treated
    // as absent. Preserve that.
    fn nonempty_str_at(&self, key: &str) -> Option<&str> {
        let s = self.str_at(key)?;
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    fn hex_color_at(&self, key: &str) -> Option<u32> {
        let s = self.nonempty_str_at(key)?;
        u32::from_str_radix(s.trim_start_matches("0x"), 16).ok()
    }

    fn i64_at(&self, key: &str) -> Option<i64> {
        let v = self.value_at(key)?;
        if let Some(n) = v.as_i64() {
            return Some(n);
        }
        v.as_str()?.trim().parse::<i64>().ok()
    }

    fn flag_at(&self, key: &str) -> Option<u32> {
        match self.nonempty_str_at(key)? {
            "yes" => Some(1),
            "no" => Some(0),
            other => {
                info!("[{}][CONFIG] Unrecognized value for {key}: {other:?}", DEBUG_NAME);
                None
            }
        }
    }

    fn table_at(&self, key: &str, table: &[(&str, u32)]) -> Option<u32> {
        let s = self.nonempty_str_at(key)?;
        match table.iter().find(|(name, _)| *name == s) {
            Some((_, code)) => Some(*code),
            None => {
                info!("[{}][CONFIG] Unrecognized value for {key}: {s:?}", DEBUG_NAME);
                None
            }
        }
    }

    fn widget_at(&self, key: &str) -> Option<WidgetType> {
        let code = self.i64_at(key)?;
        if !(0..=u32::MAX as i64).contains(&code) {
            return None;
        }
        WidgetType::from_code(code as u32)
    }
}

/// Field-by-field projection of the raw form data. No transform ever fails
/// the pass; anything unparseable degrades to "field absent".
pub fn parse_config(raw: &RawConfig) -> ResolvedSettings {
    let mut settings = ResolvedSettings::default();

    // color settings
    settings.color_bg = raw.hex_color_at("color_bg");
    settings.color_sidebar = raw.hex_color_at("color_sidebar");
    settings.color_time = raw.hex_color_at("color_time");
    settings.sidebar_text_color = raw.hex_color_at("sidebar_text_color");

    // general options
    settings.language_id = raw
        .i64_at("language_id")
        .and_then(|v| u8::try_from(v).ok());
    settings.show_leading_zero = raw.flag_at("leading_zero_setting");
    settings.center_time = raw.flag_at("center_time_setting");
    settings.clock_font_id = raw.table_at(
        "clock_font_setting",
        &[
            ("default", 0),
            ("leco", 1),
            ("bold", 2),
            ("bold-h", 3),
            ("bold-m", 4),
        ],
    );

    // notification settings
    settings.hourly_vibe = raw.table_at(
        "hourly_vibe_setting",
        &[("no", 0), ("yes", 1), ("half", 2)],
    );
    settings.bluetooth_vibe = raw.flag_at("bluetooth_vibe_setting");

    // sidebar options
    settings.disconnect_icon = raw.flag_at("disconnect_icon_setting");
    settings.use_large_fonts = raw.flag_at("use_large_sidebar_font_setting");
    settings.use_metric = raw.table_at("units", &[("c", 1), ("f", 0)]);
    settings.show_battery_pct = raw.table_at(
        "battery_meter_setting",
        &[("icon-and-percent", 1), ("icon-only", 0)],
    );
    settings.autobattery_requested = raw_autobattery(raw);

    settings.altclock_name = raw.nonempty_str_at("altclock_name").map(str::to_string);
    settings.altclock_offset = raw
        .i64_at("altclock_offset")
        .and_then(|v| i32::try_from(v).ok());

    settings.decimal_separator = raw
        .nonempty_str_at("decimal_separator")
        .map(str::to_string);
    settings.health_activity_display = raw.table_at(
        "health_activity_display",
        &[
            ("steps", 0),
            ("distance", 1),
            ("duration", 2),
            ("calories", 3),
        ],
    );
    settings.health_use_restful_sleep = raw.flag_at("health_use_restful_sleep");

    settings.bar_position = raw
        .nonempty_str_at("sidebar_position")
        .and_then(BarPosition::parse);
    settings.requested_widgets = [
        raw.widget_at("widget_0_id"),
        raw.widget_at("widget_1_id"),
        raw.widget_at("widget_2_id"),
        raw.widget_at("widget_3_id"),
    ];

    // weather location/source configs are the companion's concern only
    if let Some(name) = raw.str_at("weather_loc") {
        settings.weather_location = Some(WeatherLocation {
            name: name.to_string(),
            lat: raw.str_at("weather_loc_lat").unwrap_or_default().to_string(),
            lng: raw.str_at("weather_loc_lng").unwrap_or_default().to_string(),
        });
    }
    settings.weather_datasource = raw
        .nonempty_str_at("weather_datasource")
        .map(str::to_string);
    settings.weather_api_key = raw.str_at("weather_api_key").map(str::to_string);

    settings
}

fn raw_autobattery(raw: &RawConfig) -> Option<bool> {
    raw.nonempty_str_at("autobattery_setting").map(|v| v == "on")
}

/// Per-platform settings form URL, tagged with the config version so the
/// form can hide options this watchface build doesn't understand.
pub fn config_page_url(platform: PlatformVariant) -> String {
    let page = match platform {
        PlatformVariant::Aplite => "config_bw.html",
        PlatformVariant::Chalk => "config_color_round.html",
        PlatformVariant::Diorite => "config_diorite.html",
        PlatformVariant::Basalt => "config_color.html",
    };

    format!("{BASE_CONFIG_URL}{page}?appversion={CONFIG_VERSION}")
}
