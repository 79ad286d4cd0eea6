use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    config::ResolvedSettings,
    keys,
    locale::{LocaleDataProvider, LocaleError},
    platform::{BarPosition, PlatformVariant, WidgetType},
    slots::{contains, contains_any, WidgetSlots},
    warn, DEBUG_NAME,
};

/// Transport payload ceiling in bytes. Settings and locale text are split
/// into two messages so each stays under it; the watch's inbox buffer is
/// sized to match.
pub const WIRE_PAYLOAD_LIMIT: usize = 512;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireValue {
    Uint(u32),
    Int(i32),
    Text(String),
}

impl WireValue {
    /// Payload bytes of this value in the watch dictionary layout.
    /// Integers are fixed 4-byte words; text is NUL-terminated.
    fn payload_size(&self) -> usize {
        match self {
            Self::Uint(_) | Self::Int(_) => 4,
            Self::Text(s) => s.len() + 1,
        }
    }
}

/// Ordered small-integer-keyed mapping, one entry per settings field that
/// survived relevance gating.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WireDictionary {
    entries: BTreeMap<u32, WireValue>,
}

impl WireDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_uint(&mut self, key: u32, value: u32) {
        self.entries.insert(key, WireValue::Uint(value));
    }

    pub fn insert_int(&mut self, key: u32, value: i32) {
        self.entries.insert(key, WireValue::Int(value));
    }

    pub fn insert_text(&mut self, key: u32, value: &str) {
        self.entries.insert(key, WireValue::Text(value.to_string()));
    }

    pub fn get(&self, key: u32) -> Option<&WireValue> {
        self.entries.get(&key)
    }

    pub fn contains_key(&self, key: u32) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u32, &WireValue)> {
        self.entries.iter()
    }

    /// Size of this dictionary in the watch transport framing: a 1-byte
    /// entry count, then per entry a 4-byte key, 1-byte type tag, 2-byte
    /// length and the payload.
    pub fn encoded_size(&self) -> usize {
        1 + self
            .entries
            .values()
            .map(|v| 7 + v.payload_size())
            .sum::<usize>()
    }
}

/// Builds the primary settings message. Fields are gated by relevance:
/// anything the form omitted stays omitted, and sidebar-, widget- and
/// platform-dependent fields are only sent when the watch would actually
/// use them.
pub fn build_primary(
    settings: &ResolvedSettings,
    slots: &WidgetSlots,
    replaceable: Option<usize>,
    platform: PlatformVariant,
) -> WireDictionary {
    let mut dict = WireDictionary::new();

    // color settings
    insert_opt_uint(&mut dict, keys::SETTING_COLOR_BG, settings.color_bg);
    insert_opt_uint(&mut dict, keys::SETTING_COLOR_SIDEBAR, settings.color_sidebar);
    insert_opt_uint(&mut dict, keys::SETTING_COLOR_TIME, settings.color_time);
    insert_opt_uint(
        &mut dict,
        keys::SETTING_SIDEBAR_TEXT_COLOR,
        settings.sidebar_text_color,
    );

    // general options
    insert_opt_uint(
        &mut dict,
        keys::SETTING_LANGUAGE_ID,
        settings.language_id.map(u32::from),
    );
    insert_opt_uint(
        &mut dict,
        keys::SETTING_SHOW_LEADING_ZERO,
        settings.show_leading_zero,
    );
    insert_opt_uint(&mut dict, keys::SETTING_CENTER_TIME, settings.center_time);
    insert_opt_uint(&mut dict, keys::SETTING_CLOCK_FONT_ID, settings.clock_font_id);

    // notification settings
    insert_opt_uint(&mut dict, keys::SETTING_HOURLY_VIBE, settings.hourly_vibe);
    insert_opt_uint(
        &mut dict,
        keys::SETTING_BLUETOOTH_VIBE,
        settings.bluetooth_vibe,
    );

    if let Some(position) = settings.bar_position {
        dict.insert_uint(keys::SETTING_SIDEBAR_POSITION, position.code());
    }

    // normalized slot assignment always travels in full
    dict.insert_uint(keys::SETTING_WIDGET_0_ID, slots[0].code());
    dict.insert_uint(keys::SETTING_WIDGET_1_ID, slots[1].code());
    dict.insert_uint(keys::SETTING_WIDGET_2_ID, slots[2].code());
    dict.insert_uint(keys::SETTING_WIDGET_3_ID, slots[3].code());

    let sidebar_hidden = settings.bar_position == Some(BarPosition::None);
    if !sidebar_hidden {
        encode_sidebar_fields(&mut dict, settings, slots, replaceable, platform);
    }

    let size = dict.encoded_size();
    if size > WIRE_PAYLOAD_LIMIT {
        warn!(
            "[{}][ENCODE] Primary message is {size} bytes, over the {WIRE_PAYLOAD_LIMIT}-byte ceiling",
            DEBUG_NAME
        );
    }

    dict
}

fn encode_sidebar_fields(
    dict: &mut WireDictionary,
    settings: &ResolvedSettings,
    slots: &WidgetSlots,
    replaceable: Option<usize>,
    platform: PlatformVariant,
) {
    insert_opt_uint(dict, keys::SETTING_DISCONNECT_ICON, settings.disconnect_icon);
    insert_opt_uint(dict, keys::SETTING_USE_LARGE_FONTS, settings.use_large_fonts);

    if let Some(index) = replaceable {
        dict.insert_uint(keys::REPLACEABLE_WIDGET, index as u32);
    }

    // weather widget settings
    let has_weather = contains_any(
        slots,
        &[WidgetType::WeatherCurrent, WidgetType::WeatherForecastToday],
    );
    if has_weather {
        insert_opt_uint(dict, keys::SETTING_USE_METRIC, settings.use_metric);
    }

    // battery meter widget settings
    insert_opt_uint(dict, keys::SETTING_SHOW_BATTERY_PCT, settings.show_battery_pct);
    if let Some(requested) = settings.autobattery_requested {
        // the automatic low-battery widget only runs when no explicit
        // battery meter widget occupies a slot
        let enabled = requested && !contains(slots, WidgetType::BatteryMeter);
        dict.insert_uint(
            keys::SETTING_DISABLE_AUTOBATTERY,
            if enabled { 0 } else { 1 },
        );
    }

    // alt tz widget settings
    if contains(slots, WidgetType::AltTimeZone) {
        if let Some(name) = &settings.altclock_name {
            dict.insert_text(keys::SETTING_ALT_CLOCK_NAME, name);
        }
        if let Some(offset) = settings.altclock_offset {
            dict.insert_int(keys::SETTING_ALT_CLOCK_OFFSET, offset);
        }
    }

    // health widget settings only exist on health-capable platforms
    if platform.capabilities().supports_health {
        let has_activity = contains_any(slots, &[WidgetType::Health, WidgetType::Step]);
        if has_activity {
            if let Some(sep) = &settings.decimal_separator {
                dict.insert_text(keys::SETTING_DECIMAL_SEPARATOR, sep);
            }
            insert_opt_uint(
                dict,
                keys::SETTING_HEALTH_ACTIVITY_DISPLAY,
                settings.health_activity_display,
            );
        }

        if contains_any(slots, &[WidgetType::Health, WidgetType::Sleep]) {
            insert_opt_uint(
                dict,
                keys::SETTING_HEALTH_USE_RESTFUL_SLEEP,
                settings.health_use_restful_sleep,
            );
        }
    }
}

/// The locale message is only worth sending when the watch will render
/// locale text: a horizontal layout (which shows the date strip) or an
/// explicit date widget.
pub fn needs_secondary(settings: &ResolvedSettings, slots: &WidgetSlots) -> bool {
    if settings.language_id.is_none() {
        return false;
    }

    settings.bar_position.is_some_and(BarPosition::is_horizontal)
        || contains(slots, WidgetType::Date)
}

/// Builds the locale message: 7 day names, 12 month names and the word for
/// "week", looked up by language id. Splitting this out of the primary
/// message keeps both under the transport ceiling.
pub fn build_secondary(
    language_id: u8,
    locales: &dyn LocaleDataProvider,
) -> Result<WireDictionary, LocaleError> {
    let mut dict = WireDictionary::new();

    let days = locales.day_names(language_id)?;
    for (i, day) in days.iter().enumerate() {
        dict.insert_text(keys::SETTING_LANGUAGE_DAY_NAMES + i as u32, day);
    }

    let months = locales.month_names(language_id)?;
    for (i, month) in months.iter().enumerate() {
        dict.insert_text(keys::SETTING_LANGUAGE_MONTH_NAMES + i as u32, month);
    }

    dict.insert_text(
        keys::SETTING_LANGUAGE_WORD_FOR_WEEK,
        locales.word_for_week(language_id)?,
    );

    let size = dict.encoded_size();
    if size > WIRE_PAYLOAD_LIMIT {
        warn!(
            "[{}][ENCODE] Locale message is {size} bytes, over the {WIRE_PAYLOAD_LIMIT}-byte ceiling",
            DEBUG_NAME
        );
    }

    Ok(dict)
}

fn insert_opt_uint(dict: &mut WireDictionary, key: u32, value: Option<u32>) {
    if let Some(v) = value {
        dict.insert_uint(key, v);
    }
}
