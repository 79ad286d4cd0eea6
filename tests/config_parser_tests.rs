//! Field-by-field parsing tests for the webview settings payload

use serde_json::{json, Value};
use settings_bridge::config::{parse_config, RawConfig};
use settings_bridge::platform::{BarPosition, PlatformVariant, WidgetType};

fn raw(value: Value) -> RawConfig {
    RawConfig::from_map(value.as_object().expect("test payload must be an object").clone())
}

#[test]
fn test_colors_parse_as_hex() {
    let settings = parse_config(&raw(json!({
        "color_bg": "FF0000",
        "color_time": "0x00AA55",
    })));
    assert_eq!(settings.color_bg, Some(0xFF0000));
    assert_eq!(settings.color_time, Some(0x00AA55));
    assert_eq!(settings.color_sidebar, None);
}

#[test]
fn test_malformed_color_is_omitted() {
    let settings = parse_config(&raw(json!({ "color_bg": "not-a-color" })));
    assert_eq!(settings.color_bg, None);
}

#[test]
fn test_empty_string_counts_as_absent() {
    let settings = parse_config(&raw(json!({
        "color_bg": "",
        "altclock_name": "",
        "leading_zero_setting": "",
    })));
    assert_eq!(settings.color_bg, None);
    assert_eq!(settings.altclock_name, None);
    assert_eq!(settings.show_leading_zero, None);
}

#[test]
fn test_yes_no_flags() {
    let settings = parse_config(&raw(json!({
        "leading_zero_setting": "yes",
        "center_time_setting": "no",
        "bluetooth_vibe_setting": "yes",
    })));
    assert_eq!(settings.show_leading_zero, Some(1));
    assert_eq!(settings.center_time, Some(0));
    assert_eq!(settings.bluetooth_vibe, Some(1));
}

#[test]
fn test_unrecognized_flag_is_omitted_not_defaulted() {
    let settings = parse_config(&raw(json!({ "leading_zero_setting": "maybe" })));
    assert_eq!(settings.show_leading_zero, None);
}

#[test]
fn test_hourly_vibe_tristate() {
    let settings = parse_config(&raw(json!({ "hourly_vibe_setting": "half" })));
    assert_eq!(settings.hourly_vibe, Some(2));

    let settings = parse_config(&raw(json!({ "hourly_vibe_setting": "yes" })));
    assert_eq!(settings.hourly_vibe, Some(1));

    let settings = parse_config(&raw(json!({ "hourly_vibe_setting": "no" })));
    assert_eq!(settings.hourly_vibe, Some(0));
}

#[test]
fn test_clock_font_table() {
    let settings = parse_config(&raw(json!({ "clock_font_setting": "bold-h" })));
    assert_eq!(settings.clock_font_id, Some(3));

    let settings = parse_config(&raw(json!({ "clock_font_setting": "comic-sans" })));
    assert_eq!(settings.clock_font_id, None);
}

#[test]
fn test_health_activity_display_table() {
    let settings = parse_config(&raw(json!({ "health_activity_display": "calories" })));
    assert_eq!(settings.health_activity_display, Some(3));

    let settings = parse_config(&raw(json!({ "health_activity_display": "lightyears" })));
    assert_eq!(settings.health_activity_display, None);
}

#[test]
fn test_battery_meter_table() {
    let settings = parse_config(&raw(json!({ "battery_meter_setting": "icon-and-percent" })));
    assert_eq!(settings.show_battery_pct, Some(1));

    let settings = parse_config(&raw(json!({ "battery_meter_setting": "icon-only" })));
    assert_eq!(settings.show_battery_pct, Some(0));
}

#[test]
fn test_units_table() {
    let settings = parse_config(&raw(json!({ "units": "c" })));
    assert_eq!(settings.use_metric, Some(1));

    let settings = parse_config(&raw(json!({ "units": "f" })));
    assert_eq!(settings.use_metric, Some(0));

    let settings = parse_config(&raw(json!({ "units": "kelvin" })));
    assert_eq!(settings.use_metric, None);
}

#[test]
fn test_altclock_offset_parses_base_ten() {
    let settings = parse_config(&raw(json!({ "altclock_offset": "-5" })));
    assert_eq!(settings.altclock_offset, Some(-5));

    let settings = parse_config(&raw(json!({ "altclock_offset": 3 })));
    assert_eq!(settings.altclock_offset, Some(3));

    let settings = parse_config(&raw(json!({ "altclock_offset": "east" })));
    assert_eq!(settings.altclock_offset, None);
}

#[test]
fn test_language_id_zero_is_a_value() {
    let settings = parse_config(&raw(json!({ "language_id": 0 })));
    assert_eq!(settings.language_id, Some(0));
}

#[test]
fn test_widget_ids_pass_through() {
    let settings = parse_config(&raw(json!({
        "widget_0_id": 7,
        "widget_1_id": "10",
        "widget_3_id": 0,
    })));
    assert_eq!(settings.requested_widgets[0], Some(WidgetType::WeatherCurrent));
    assert_eq!(settings.requested_widgets[1], Some(WidgetType::Health));
    assert_eq!(settings.requested_widgets[2], None); // absent stays absent
    assert_eq!(settings.requested_widgets[3], Some(WidgetType::Empty));
}

#[test]
fn test_unknown_widget_code_is_omitted() {
    let settings = parse_config(&raw(json!({ "widget_0_id": 99 })));
    assert_eq!(settings.requested_widgets[0], None);
}

#[test]
fn test_sidebar_position_parses() {
    let settings = parse_config(&raw(json!({ "sidebar_position": "bottom" })));
    assert_eq!(settings.bar_position, Some(BarPosition::Bottom));

    let settings = parse_config(&raw(json!({ "sidebar_position": "none" })));
    assert_eq!(settings.bar_position, Some(BarPosition::None));

    let settings = parse_config(&raw(json!({ "sidebar_position": "diagonal" })));
    assert_eq!(settings.bar_position, None);
}

#[test]
fn test_weather_prefs_are_captured() {
    let settings = parse_config(&raw(json!({
        "weather_loc": "Lisbon",
        "weather_loc_lat": "38.72",
        "weather_loc_lng": "-9.14",
        "weather_datasource": "owm",
        "weather_api_key": "abc123",
    })));
    let location = settings.weather_location.expect("location should parse");
    assert_eq!(location.name, "Lisbon");
    assert_eq!(location.lat, "38.72");
    assert_eq!(location.lng, "-9.14");
    assert_eq!(settings.weather_datasource.as_deref(), Some("owm"));
    assert_eq!(settings.weather_api_key.as_deref(), Some("abc123"));
}

#[test]
fn test_webview_response_is_url_decoded() {
    let payload = json!({ "color_bg": "FF0000", "units": "c" }).to_string();
    let encoded = urlencoding::encode(&payload).into_owned();

    let raw = RawConfig::from_webview_response(&encoded).expect("should decode");
    let settings = parse_config(&raw);
    assert_eq!(settings.color_bg, Some(0xFF0000));
    assert_eq!(settings.use_metric, Some(1));
}

#[test]
fn test_empty_response_means_no_settings() {
    assert!(RawConfig::from_webview_response("").is_none());
    assert!(RawConfig::from_webview_response("   ").is_none());
}

#[test]
fn test_non_json_response_is_rejected() {
    assert!(RawConfig::from_webview_response("CANCELLED").is_none());
}

#[test]
fn test_config_page_url_per_platform() {
    use settings_bridge::config::config_page_url;

    assert!(config_page_url(PlatformVariant::Aplite).contains("config_bw.html"));
    assert!(config_page_url(PlatformVariant::Chalk).contains("config_color_round.html"));
    assert!(config_page_url(PlatformVariant::Diorite).contains("config_diorite.html"));
    assert!(config_page_url(PlatformVariant::Basalt).contains("config_color.html"));
    assert!(config_page_url(PlatformVariant::Basalt).contains("appversion="));
}
