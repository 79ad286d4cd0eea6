//! Wire dictionary construction and relevance gating tests

use settings_bridge::config::ResolvedSettings;
use settings_bridge::encoder::{
    build_primary, build_secondary, needs_secondary, WireDictionary, WireValue,
};
use settings_bridge::keys;
use settings_bridge::locale::{BundledLocales, LocaleError};
use settings_bridge::platform::{BarPosition, PlatformVariant, WidgetType};
use settings_bridge::slots::{WidgetSlots, EMPTY_SLOTS};

use WidgetType::{AltTimeZone, BatteryMeter, Empty, Health, Sleep, Step, WeatherCurrent};

fn slots(widgets: [WidgetType; 4]) -> WidgetSlots {
    widgets
}

#[test]
fn test_omitted_fields_stay_off_the_wire() {
    let settings = ResolvedSettings::default();
    let dict = build_primary(&settings, &EMPTY_SLOTS, Some(0), PlatformVariant::Basalt);

    assert!(!dict.contains_key(keys::SETTING_COLOR_BG));
    assert!(!dict.contains_key(keys::SETTING_HOURLY_VIBE));
    assert!(!dict.contains_key(keys::SETTING_SIDEBAR_POSITION));
    // the four slot keys and the replaceable key always travel
    assert!(dict.contains_key(keys::SETTING_WIDGET_0_ID));
    assert!(dict.contains_key(keys::SETTING_WIDGET_3_ID));
    assert!(dict.contains_key(keys::REPLACEABLE_WIDGET));
    assert_eq!(dict.len(), 5);
}

#[test]
fn test_present_scalars_are_encoded() {
    let settings = ResolvedSettings {
        color_bg: Some(0xFF0000),
        show_leading_zero: Some(1),
        hourly_vibe: Some(2),
        bar_position: Some(BarPosition::Top),
        ..Default::default()
    };
    let dict = build_primary(&settings, &EMPTY_SLOTS, Some(0), PlatformVariant::Basalt);

    assert_eq!(dict.get(keys::SETTING_COLOR_BG), Some(&WireValue::Uint(0xFF0000)));
    assert_eq!(dict.get(keys::SETTING_SHOW_LEADING_ZERO), Some(&WireValue::Uint(1)));
    assert_eq!(dict.get(keys::SETTING_HOURLY_VIBE), Some(&WireValue::Uint(2)));
    assert_eq!(dict.get(keys::SETTING_SIDEBAR_POSITION), Some(&WireValue::Uint(4)));
}

#[test]
fn test_hidden_sidebar_drops_sidebar_fields() {
    let settings = ResolvedSettings {
        bar_position: Some(BarPosition::None),
        disconnect_icon: Some(1),
        use_large_fonts: Some(1),
        use_metric: Some(1),
        ..Default::default()
    };
    let dict = build_primary(&settings, &EMPTY_SLOTS, None, PlatformVariant::Basalt);

    assert!(!dict.contains_key(keys::SETTING_DISCONNECT_ICON));
    assert!(!dict.contains_key(keys::SETTING_USE_LARGE_FONTS));
    assert!(!dict.contains_key(keys::SETTING_USE_METRIC));
    assert!(!dict.contains_key(keys::REPLACEABLE_WIDGET));
    // position itself still travels so the watch can hide the sidebar
    assert_eq!(dict.get(keys::SETTING_SIDEBAR_POSITION), Some(&WireValue::Uint(0)));
}

#[test]
fn test_metric_units_require_a_weather_widget() {
    let settings = ResolvedSettings {
        use_metric: Some(1),
        bar_position: Some(BarPosition::Bottom),
        ..Default::default()
    };

    let without = build_primary(
        &settings,
        &slots([Health, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Basalt,
    );
    assert!(!without.contains_key(keys::SETTING_USE_METRIC));

    let with = build_primary(
        &settings,
        &slots([WeatherCurrent, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Basalt,
    );
    assert_eq!(with.get(keys::SETTING_USE_METRIC), Some(&WireValue::Uint(1)));
}

#[test]
fn test_alt_clock_fields_require_the_widget() {
    let settings = ResolvedSettings {
        altclock_name: Some("UTC".to_string()),
        altclock_offset: Some(-5),
        bar_position: Some(BarPosition::Right),
        ..Default::default()
    };

    let without = build_primary(
        &settings,
        &slots([Health, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Basalt,
    );
    assert!(!without.contains_key(keys::SETTING_ALT_CLOCK_NAME));
    assert!(!without.contains_key(keys::SETTING_ALT_CLOCK_OFFSET));

    let with = build_primary(
        &settings,
        &slots([AltTimeZone, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Basalt,
    );
    assert_eq!(
        with.get(keys::SETTING_ALT_CLOCK_NAME),
        Some(&WireValue::Text("UTC".to_string()))
    );
    assert_eq!(with.get(keys::SETTING_ALT_CLOCK_OFFSET), Some(&WireValue::Int(-5)));
}

#[test]
fn test_health_fields_dropped_on_no_health_platform() {
    let settings = ResolvedSettings {
        decimal_separator: Some(",".to_string()),
        health_activity_display: Some(1),
        health_use_restful_sleep: Some(1),
        bar_position: Some(BarPosition::Right),
        ..Default::default()
    };
    let health_slots = slots([Health, Empty, Empty, Empty]);

    let aplite = build_primary(&settings, &health_slots, Some(1), PlatformVariant::Aplite);
    assert!(!aplite.contains_key(keys::SETTING_DECIMAL_SEPARATOR));
    assert!(!aplite.contains_key(keys::SETTING_HEALTH_ACTIVITY_DISPLAY));
    assert!(!aplite.contains_key(keys::SETTING_HEALTH_USE_RESTFUL_SLEEP));

    let basalt = build_primary(&settings, &health_slots, Some(1), PlatformVariant::Basalt);
    assert_eq!(
        basalt.get(keys::SETTING_DECIMAL_SEPARATOR),
        Some(&WireValue::Text(",".to_string()))
    );
    assert_eq!(
        basalt.get(keys::SETTING_HEALTH_ACTIVITY_DISPLAY),
        Some(&WireValue::Uint(1))
    );
    assert_eq!(
        basalt.get(keys::SETTING_HEALTH_USE_RESTFUL_SLEEP),
        Some(&WireValue::Uint(1))
    );
}

#[test]
fn test_restful_sleep_travels_with_sleep_widget() {
    let settings = ResolvedSettings {
        health_use_restful_sleep: Some(0),
        health_activity_display: Some(2),
        bar_position: Some(BarPosition::Right),
        ..Default::default()
    };
    let dict = build_primary(
        &settings,
        &slots([Sleep, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Diorite,
    );

    assert_eq!(
        dict.get(keys::SETTING_HEALTH_USE_RESTFUL_SLEEP),
        Some(&WireValue::Uint(0))
    );
    // activity display needs a health or step widget, not a sleep widget
    assert!(!dict.contains_key(keys::SETTING_HEALTH_ACTIVITY_DISPLAY));
}

#[test]
fn test_activity_fields_travel_with_step_widget() {
    let settings = ResolvedSettings {
        health_activity_display: Some(0),
        bar_position: Some(BarPosition::Right),
        ..Default::default()
    };
    let dict = build_primary(
        &settings,
        &slots([Step, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Basalt,
    );
    assert_eq!(
        dict.get(keys::SETTING_HEALTH_ACTIVITY_DISPLAY),
        Some(&WireValue::Uint(0))
    );
}

#[test]
fn test_autobattery_suppressed_by_battery_widget() {
    let settings = ResolvedSettings {
        autobattery_requested: Some(true),
        bar_position: Some(BarPosition::Right),
        ..Default::default()
    };

    let free = build_primary(
        &settings,
        &slots([Health, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Basalt,
    );
    assert_eq!(free.get(keys::SETTING_DISABLE_AUTOBATTERY), Some(&WireValue::Uint(0)));

    let occupied = build_primary(
        &settings,
        &slots([BatteryMeter, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Basalt,
    );
    assert_eq!(
        occupied.get(keys::SETTING_DISABLE_AUTOBATTERY),
        Some(&WireValue::Uint(1))
    );

    let off = ResolvedSettings {
        autobattery_requested: Some(false),
        bar_position: Some(BarPosition::Right),
        ..Default::default()
    };
    let dict = build_primary(
        &off,
        &slots([Health, Empty, Empty, Empty]),
        Some(1),
        PlatformVariant::Basalt,
    );
    assert_eq!(dict.get(keys::SETTING_DISABLE_AUTOBATTERY), Some(&WireValue::Uint(1)));
}

#[test]
fn test_needs_secondary_gating() {
    let mut settings = ResolvedSettings {
        language_id: Some(2),
        bar_position: Some(BarPosition::Bottom),
        ..Default::default()
    };
    assert!(needs_secondary(&settings, &EMPTY_SLOTS));

    settings.bar_position = Some(BarPosition::Right);
    assert!(!needs_secondary(&settings, &EMPTY_SLOTS));
    assert!(needs_secondary(
        &settings,
        &slots([WidgetType::Date, Empty, Empty, Empty])
    ));

    settings.language_id = None;
    settings.bar_position = Some(BarPosition::Bottom);
    assert!(!needs_secondary(&settings, &EMPTY_SLOTS));
}

#[test]
fn test_secondary_contains_twenty_locale_entries() {
    let dict = build_secondary(0, &BundledLocales).expect("english is always shipped");
    assert_eq!(dict.len(), 20);

    for i in 0..7 {
        assert!(dict.contains_key(keys::SETTING_LANGUAGE_DAY_NAMES + i));
    }
    for i in 0..12 {
        assert!(dict.contains_key(keys::SETTING_LANGUAGE_MONTH_NAMES + i));
    }
    assert_eq!(
        dict.get(keys::SETTING_LANGUAGE_WORD_FOR_WEEK),
        Some(&WireValue::Text("Wk".to_string()))
    );
}

#[test]
fn test_secondary_fails_on_unknown_language() {
    let result = build_secondary(200, &BundledLocales);
    assert_eq!(result, Err(LocaleError::UnknownLanguage(200)));
}

#[test]
fn test_encoded_size_matches_dict_layout() {
    let mut dict = WireDictionary::new();
    assert_eq!(dict.encoded_size(), 1); // count byte only

    dict.insert_uint(1, 42);
    assert_eq!(dict.encoded_size(), 1 + 7 + 4);

    dict.insert_text(2, "abc");
    assert_eq!(dict.encoded_size(), 1 + (7 + 4) + (7 + 4)); // text is NUL-terminated
}
