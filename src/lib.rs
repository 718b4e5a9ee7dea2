pub mod configuration;

pub mod holiday {
    pub mod holidayerror;
    pub mod weekdaycorrection;
    pub mod holidayrule;
    pub mod holidaydefinition;
    pub mod holidaytable;
    pub mod resolvedholiday;
    pub mod holidayengine;
}

pub mod locale {
    pub mod language;
    pub mod datelocalizer;
}

pub mod time {
    pub mod utility;
    pub mod dateerror;
    pub mod period;
    pub mod datearithmetic;
    pub mod easter;
    pub mod nthweekday;
}
