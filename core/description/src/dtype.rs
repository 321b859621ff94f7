//! Host data type tags and the enumerations attached to parameters.

use serde::{Deserialize, Serialize};

pub const DTYPE_GROUP: i32 = 1;
pub const DTYPE_COLOR: i32 = 3;
pub const DTYPE_SUBCONTAINER: i32 = 5;
pub const DTYPE_BUTTON: i32 = 8;
pub const DTYPE_SEPARATOR: i32 = 10;
pub const DTYPE_LONG: i32 = 15;
pub const DTYPE_REAL: i32 = 19;
pub const DTYPE_TIME: i32 = 22;
pub const DTYPE_VECTOR: i32 = 23;
pub const DTYPE_STRING: i32 = 130;
pub const DTYPE_FILENAME: i32 = 131;
pub const DTYPE_BASELISTLINK: i32 = 133;
pub const DTYPE_BOOL: i32 = 400_006_001;
pub const CUSTOMDATATYPE_GRADIENT: i32 = 1_000_481;
pub const CUSTOMDATATYPE_SPLINE: i32 = 1_009_060;
pub const CUSTOMDATATYPE_INEXCLUDE_LIST: i32 = 1_009_290;

pub const CUSTOMGUI_REALSLIDER: i32 = 1_000_477;
pub const CUSTOMGUI_SUBDESCRIPTION: i32 = 1_000_479;
pub const CUSTOMGUI_TEXBOX: i32 = 1_000_480;
pub const CUSTOMGUI_LONGSLIDER: i32 = 1_000_489;
pub const CUSTOMGUI_REALSLIDERONLY: i32 = 200_000_006;
pub const CUSTOMGUI_LONG_LAT: i32 = 200_000_249;
pub const CUSTOMGUI_CYCLEBUTTON: i32 = 200_000_263;
/// QuickTab GUI as reported by user data; differs from the SDK's quicktab id.
pub const CUSTOMGUI_QUICKTAB_USERDATA: i32 = 200_000_281;
pub const CUSTOMGUI_RADIOBUTTONS: i32 = 1_019_603;

/// Link filter that every link accepts implicitly.
pub const TBASELIST2D: i32 = 110_050;

/// Data type of a parameter, taken from the last level of its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Group,
    Color,
    SubContainer,
    Button,
    Separator,
    Long,
    Real,
    Time,
    Vector,
    String,
    Filename,
    BaseListLink,
    Bool,
    Gradient,
    Spline,
    InExcludeList,
    Other(i32),
}

impl DataType {
    #[must_use]
    pub fn raw(self) -> i32 {
        match self {
            DataType::Group => DTYPE_GROUP,
            DataType::Color => DTYPE_COLOR,
            DataType::SubContainer => DTYPE_SUBCONTAINER,
            DataType::Button => DTYPE_BUTTON,
            DataType::Separator => DTYPE_SEPARATOR,
            DataType::Long => DTYPE_LONG,
            DataType::Real => DTYPE_REAL,
            DataType::Time => DTYPE_TIME,
            DataType::Vector => DTYPE_VECTOR,
            DataType::String => DTYPE_STRING,
            DataType::Filename => DTYPE_FILENAME,
            DataType::BaseListLink => DTYPE_BASELISTLINK,
            DataType::Bool => DTYPE_BOOL,
            DataType::Gradient => CUSTOMDATATYPE_GRADIENT,
            DataType::Spline => CUSTOMDATATYPE_SPLINE,
            DataType::InExcludeList => CUSTOMDATATYPE_INEXCLUDE_LIST,
            DataType::Other(raw) => raw,
        }
    }

    /// Resource keyword for leaf parameters, `None` for types the resource
    /// grammar has no rule for.
    ///
    /// Links are reported as `LINK`; the texture box GUI turns them into
    /// `SHADERLINK` at render time.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            DataType::Group => Some("GROUP"),
            DataType::Bool => Some("BOOL"),
            DataType::Long => Some("LONG"),
            DataType::Real => Some("REAL"),
            DataType::Button => Some("BUTTON"),
            DataType::Color => Some("COLOR"),
            DataType::Vector => Some("VECTOR"),
            DataType::Filename => Some("FILENAME"),
            DataType::Gradient => Some("GRADIENT"),
            DataType::InExcludeList => Some("IN_EXCLUDE"),
            DataType::BaseListLink => Some("LINK"),
            DataType::Spline => Some("SPLINE"),
            DataType::String => Some("STRING"),
            DataType::Time => Some("TIME"),
            DataType::Separator => Some("SEPARATOR"),
            DataType::SubContainer | DataType::Other(_) => None,
        }
    }

    #[must_use]
    pub fn is_supported(self) -> bool {
        self.keyword().is_some()
    }
}

impl From<i32> for DataType {
    fn from(raw: i32) -> Self {
        match raw {
            DTYPE_GROUP => DataType::Group,
            DTYPE_COLOR => DataType::Color,
            DTYPE_SUBCONTAINER => DataType::SubContainer,
            DTYPE_BUTTON => DataType::Button,
            DTYPE_SEPARATOR => DataType::Separator,
            DTYPE_LONG => DataType::Long,
            DTYPE_REAL => DataType::Real,
            DTYPE_TIME => DataType::Time,
            DTYPE_VECTOR => DataType::Vector,
            DTYPE_STRING => DataType::String,
            DTYPE_FILENAME => DataType::Filename,
            DTYPE_BASELISTLINK => DataType::BaseListLink,
            DTYPE_BOOL => DataType::Bool,
            CUSTOMDATATYPE_GRADIENT => DataType::Gradient,
            CUSTOMDATATYPE_SPLINE => DataType::Spline,
            CUSTOMDATATYPE_INEXCLUDE_LIST => DataType::InExcludeList,
            other => DataType::Other(other),
        }
    }
}

/// Display unit of a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Percent,
    Degree,
    Meter,
    #[serde(other)]
    Other,
}

impl Unit {
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Unit::Percent => Some("PERCENT"),
            Unit::Degree => Some("DEGREE"),
            Unit::Meter => Some("METER"),
            Unit::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimateMode {
    Off,
    On,
    Mix,
}

/// Custom GUIs with a dedicated clause in the resource grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomGui {
    LongSlider,
    CycleButton,
    RealSlider,
    RealSliderOnly,
    LongLat,
    SubDescription,
    TexBox,
    QuickTab,
    RadioButtons,
    Other(i32),
}

impl CustomGui {
    #[must_use]
    pub fn is_slider(self) -> bool {
        matches!(
            self,
            CustomGui::LongSlider | CustomGui::RealSlider | CustomGui::RealSliderOnly
        )
    }

    /// Grammar keyword of GUIs the resource language names directly.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            CustomGui::LongSlider => Some("LONGSLIDER"),
            CustomGui::CycleButton => Some("CYCLEBUTTON"),
            CustomGui::RealSlider => Some("REALSLIDER"),
            CustomGui::RealSliderOnly => Some("REALSLIDERONLY"),
            CustomGui::LongLat => Some("LONG_LAT"),
            CustomGui::SubDescription => Some("SUBDESCRIPTION"),
            CustomGui::TexBox
            | CustomGui::QuickTab
            | CustomGui::RadioButtons
            | CustomGui::Other(_) => None,
        }
    }

    /// GUIs the grammar cannot express; the plugin stub applies them at
    /// runtime instead.
    #[must_use]
    pub fn is_hardcoded(self) -> bool {
        matches!(self, CustomGui::QuickTab | CustomGui::RadioButtons)
    }
}

impl From<i32> for CustomGui {
    fn from(raw: i32) -> Self {
        match raw {
            CUSTOMGUI_LONGSLIDER => CustomGui::LongSlider,
            CUSTOMGUI_CYCLEBUTTON => CustomGui::CycleButton,
            CUSTOMGUI_REALSLIDER => CustomGui::RealSlider,
            CUSTOMGUI_REALSLIDERONLY => CustomGui::RealSliderOnly,
            CUSTOMGUI_LONG_LAT => CustomGui::LongLat,
            CUSTOMGUI_SUBDESCRIPTION => CustomGui::SubDescription,
            CUSTOMGUI_TEXBOX => CustomGui::TexBox,
            CUSTOMGUI_QUICKTAB_USERDATA => CustomGui::QuickTab,
            CUSTOMGUI_RADIOBUTTONS => CustomGui::RadioButtons,
            other => CustomGui::Other(other),
        }
    }
}

impl From<CustomGui> for i32 {
    fn from(gui: CustomGui) -> Self {
        match gui {
            CustomGui::LongSlider => CUSTOMGUI_LONGSLIDER,
            CustomGui::CycleButton => CUSTOMGUI_CYCLEBUTTON,
            CustomGui::RealSlider => CUSTOMGUI_REALSLIDER,
            CustomGui::RealSliderOnly => CUSTOMGUI_REALSLIDERONLY,
            CustomGui::LongLat => CUSTOMGUI_LONG_LAT,
            CustomGui::SubDescription => CUSTOMGUI_SUBDESCRIPTION,
            CustomGui::TexBox => CUSTOMGUI_TEXBOX,
            CustomGui::QuickTab => CUSTOMGUI_QUICKTAB_USERDATA,
            CustomGui::RadioButtons => CUSTOMGUI_RADIOBUTTONS,
            CustomGui::Other(raw) => raw,
        }
    }
}
