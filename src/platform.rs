/// Hardware classes of the supported watch generations. Obtained once per
/// reconciliation pass and passed explicitly; never read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformVariant {
    /// Oldest generation: monochrome, no health sensors.
    Aplite,
    /// Standard color rectangular platform.
    Basalt,
    /// Round display, two effective widget slots (0 and 2).
    Chalk,
    /// Monochrome rectangular with health sensors.
    Diorite,
}

/// The only platform distinctions the pipeline cares about, collapsed into
/// one descriptor so a single pipeline serves every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    pub round_layout: bool,
    pub supports_health: bool,
    pub slot_count: u8,
}

impl PlatformVariant {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "aplite" => Some(Self::Aplite),
            "basalt" => Some(Self::Basalt),
            "chalk" => Some(Self::Chalk),
            "diorite" => Some(Self::Diorite),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aplite => "aplite",
            Self::Basalt => "basalt",
            Self::Chalk => "chalk",
            Self::Diorite => "diorite",
        }
    }

    pub fn capabilities(self) -> PlatformCapabilities {
        match self {
            Self::Aplite => PlatformCapabilities {
                round_layout: false,
                supports_health: false,
                slot_count: 4,
            },
            Self::Basalt | Self::Diorite => PlatformCapabilities {
                round_layout: false,
                supports_health: true,
                slot_count: 4,
            },
            Self::Chalk => PlatformCapabilities {
                round_layout: true,
                supports_health: true,
                slot_count: 2,
            },
        }
    }
}

/// Sidebar placement requested by the settings form. LEFT/RIGHT leave three
/// effective slots, BOTTOM/TOP four, NONE hides the sidebar entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPosition {
    None = 0,
    Left = 1,
    Right = 2,
    Bottom = 3,
    Top = 4,
}

impl BarPosition {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "bottom" => Some(Self::Bottom),
            "top" => Some(Self::Top),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Closed set of sidebar widget ids shared with the watch firmware.
/// `Empty` is the absence sentinel; unused slots always hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
    Empty = 0,
    BluetoothDisconnect = 1,
    BatteryMeter = 2,
    AltTimeZone = 3,
    Date = 4,
    Seconds = 5,
    WeekNumber = 6,
    WeatherCurrent = 7,
    WeatherForecastToday = 8,
    // id 9 was the old "time" widget; kept reserved so stored ids stay stable
    Reserved = 9,
    Health = 10,
    Beats = 11,
    Heartrate = 12,
    Sleep = 13,
    Step = 14,
}

impl WidgetType {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::BluetoothDisconnect),
            2 => Some(Self::BatteryMeter),
            3 => Some(Self::AltTimeZone),
            4 => Some(Self::Date),
            5 => Some(Self::Seconds),
            6 => Some(Self::WeekNumber),
            7 => Some(Self::WeatherCurrent),
            8 => Some(Self::WeatherForecastToday),
            9 => Some(Self::Reserved),
            10 => Some(Self::Health),
            11 => Some(Self::Beats),
            12 => Some(Self::Heartrate),
            13 => Some(Self::Sleep),
            14 => Some(Self::Step),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn is_weather(self) -> bool {
        matches!(self, Self::WeatherCurrent | Self::WeatherForecastToday)
    }
}
