//! Wire dictionary key assignments shared with the watch firmware.
//! Never renumber; the firmware matches on these values.

pub const SETTING_COLOR_BG: u32 = 1;
pub const SETTING_COLOR_SIDEBAR: u32 = 2;
pub const SETTING_COLOR_TIME: u32 = 3;
pub const SETTING_SIDEBAR_TEXT_COLOR: u32 = 4;

pub const SETTING_LANGUAGE_ID: u32 = 5;
pub const SETTING_SHOW_LEADING_ZERO: u32 = 6;
pub const SETTING_CENTER_TIME: u32 = 7;
pub const SETTING_CLOCK_FONT_ID: u32 = 8;

pub const SETTING_HOURLY_VIBE: u32 = 9;
pub const SETTING_BLUETOOTH_VIBE: u32 = 10;

pub const SETTING_SIDEBAR_POSITION: u32 = 11;
pub const SETTING_DISCONNECT_ICON: u32 = 12;
pub const SETTING_USE_LARGE_FONTS: u32 = 13;
pub const SETTING_USE_METRIC: u32 = 14;
pub const SETTING_SHOW_BATTERY_PCT: u32 = 15;
pub const SETTING_DISABLE_AUTOBATTERY: u32 = 16;

pub const SETTING_ALT_CLOCK_NAME: u32 = 17;
pub const SETTING_ALT_CLOCK_OFFSET: u32 = 18;

pub const SETTING_DECIMAL_SEPARATOR: u32 = 19;
pub const SETTING_HEALTH_ACTIVITY_DISPLAY: u32 = 20;
pub const SETTING_HEALTH_USE_RESTFUL_SLEEP: u32 = 21;

pub const SETTING_WIDGET_0_ID: u32 = 22;
pub const SETTING_WIDGET_1_ID: u32 = 23;
pub const SETTING_WIDGET_2_ID: u32 = 24;
pub const SETTING_WIDGET_3_ID: u32 = 25;
pub const REPLACEABLE_WIDGET: u32 = 26;

// locale message: contiguous blocks, indexed by day/month offset
pub const SETTING_LANGUAGE_DAY_NAMES: u32 = 30; // 30..=36
pub const SETTING_LANGUAGE_MONTH_NAMES: u32 = 40; // 40..=51
pub const SETTING_LANGUAGE_WORD_FOR_WEEK: u32 = 52;
