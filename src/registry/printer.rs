//! Error codes raised by the printer firmware.
//!
//! Identifiers are published in the user manual and on the support site,
//! so existing entries must keep their values. Add new codes at the end of
//! their category block.

use crate::code::{Category::*, Code};

use super::{DuplicateCodeError, Entry, Registry};

pub const NAME: &str = "Printer Errors";

pub static PRINTER_CODES: &[Entry] = &[
    // ── Mechanical ───────────────────────────────────────────────────────
    Entry::new("TILT_HOME_FAILED", Code::define(Mechanical, 1, Some("Tilt homing failed, check its surroundings and repeat the action."))),
    Entry::new("TOWER_HOME_FAILED", Code::define(Mechanical, 2, Some("Tower homing failed, make sure there is no obstacle in its path and repeat the action."))),
    Entry::new("TOWER_MOVE_FAILED", Code::define(Mechanical, 3, Some("Moving the tower failed. Make sure there is no obstacle in its path and repeat the action."))),
    Entry::new("TILT_MOVE_FAILED", Code::define(Mechanical, 4, Some("Moving the tilt failed. Make sure there is no obstacle in its path and repeat the action."))),
    Entry::new("RESIN_SENSOR_FAILED", Code::define(Mechanical, 5, Some("The resin sensor was not triggered. Check whether the tank and the platform are properly secured."))),
    Entry::new("TOWER_AXIS_CHECK_FAILED", Code::define(Mechanical, 6, Some("Tower axis check failed. The tower position does not match the expected value."))),
    Entry::new("TILT_AXIS_CHECK_FAILED", Code::define(Mechanical, 7, Some("Tilt axis check failed. The tilt position does not match the expected value."))),
    Entry::new("RESIN_TOO_LOW", Code::define(Mechanical, 8, Some("Measured resin volume is too low. The print cannot continue."))),
    Entry::new("RESIN_TOO_HIGH", Code::define(Mechanical, 9, Some("Measured resin volume is too high. Remove some resin from the tank."))),
    Entry::new("TOWER_ENDSTOP", Code::define(Mechanical, 10, None)),

    // ── Temperature ──────────────────────────────────────────────────────
    Entry::new("TEMP_SENSOR_FAILED", Code::define(Temperature, 5, Some("A temperature sensor failed. Check the wiring and connection."))),
    Entry::new("FAN_FAILED", Code::define(Temperature, 6, Some("Incorrect RPM reading of a fan. Check the wiring and connection."))),
    Entry::new("TEMPERATURE_OUT_OF_RANGE", Code::define(Temperature, 7, Some("Measured temperature is out of range. Let the printer cool down or move it to a warmer place."))),
    Entry::new("UVLED_HEAT_SINK_FAILED", Code::define(Temperature, 8, Some("UV LED is overheating."))),
    Entry::new("A64_OVERHEAT", Code::define(Temperature, 9, Some("The main board is overheating."))),

    // ── Electrical ───────────────────────────────────────────────────────
    Entry::new("MOTION_CONTROLLER_WRONG_REVISION", Code::define(Electrical, 1, Some("Wrong revision of the motion controller. Contact support."))),
    Entry::new("MOTION_CONTROLLER_EXCEPTION", Code::define(Electrical, 2, Some("Motion controller exception. Restart the printer and try again."))),
    Entry::new("UVLED_VOLTAGE_DIFFER_TOO_MUCH", Code::define(Electrical, 3, Some("UV LED voltages differ too much. The LED module might be faulty."))),
    Entry::new("DISPLAY_TEST_FAILED", Code::define(Electrical, 4, Some("The exposure display test failed."))),
    Entry::new("UV_LED_METER_NOT_DETECTED", Code::define(Electrical, 5, Some("The UV LED calibrator is not detected. Check the connection and try again."))),
    Entry::new("POWER_SUPPLY_FAILED", Code::define(Electrical, 6, None)),

    // ── Connectivity ─────────────────────────────────────────────────────
    Entry::new("NOT_CONNECTED_TO_NETWORK", Code::define(Connectivity, 1, Some("Failed to connect to the network."))),
    Entry::new("CONNECTION_FAILED", Code::define(Connectivity, 2, Some("Cannot connect to the server. Check the network connection."))),
    Entry::new("DOWNLOAD_FAILED", Code::define(Connectivity, 3, Some("Download failed. Check the connection and try again."))),
    Entry::new("INVALID_API_KEY", Code::define(Connectivity, 4, Some("Check the API key. The key is not valid."))),

    // ── System ───────────────────────────────────────────────────────────
    Entry::new("NONE", Code::define(System, 0, None)),
    Entry::new("UNKNOWN", Code::define(System, 1, Some("An unexpected error has occurred. Restart the printer and contact support."))),
    Entry::new("PRINT_JOB_CORRUPTED", Code::define(System, 2, Some("The print project is corrupted or contains invalid data."))),
    Entry::new("NOT_ENOUGH_INTERNAL_SPACE", Code::define(System, 3, Some("Not enough space on the internal storage. Remove old projects."))),
    Entry::new("ADMIN_NOT_AVAILABLE", Code::define(System, 4, Some("The admin menu is not available."))),
    Entry::new("FILE_NOT_FOUND", Code::define(System, 5, Some("Cannot find the selected file."))),
    Entry::new("UPDATE_FAILED", Code::define(System, 6, Some("The firmware update failed. Try again later."))),
    Entry::new("MISSING_EXAMPLES", Code::define(System, 7, None)),
    Entry::new("SERIAL_NUMBER_INVALID", Code::define(System, 8, Some("The printer serial number is invalid. Contact support."))),
];

/// Validate and return the printer registry.
pub fn registry() -> Result<Registry, DuplicateCodeError> {
    Registry::new(NAME, PRINTER_CODES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printer_registry_is_valid() {
        let r = registry().expect("printer codes must be unique");
        assert_eq!(r.name(), NAME);
        assert_eq!(r.len(), PRINTER_CODES.len());
    }

    #[test]
    fn published_identifiers_are_stable() {
        let r = registry().unwrap();
        assert_eq!(r.get("TILT_HOME_FAILED").unwrap().code.identifier(), 101);
        assert_eq!(r.get("TEMP_SENSOR_FAILED").unwrap().code.identifier(), 205);
        assert_eq!(r.get("NONE").unwrap().code.identifier(), 500);
    }

    #[test]
    fn names_are_enum_identifiers() {
        for entry in PRINTER_CODES {
            assert!(
                entry.name.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
                "{} is not a valid enum member name",
                entry.name
            );
        }
    }

    #[test]
    fn categories_are_grouped() {
        let categories: Vec<u8> = PRINTER_CODES.iter().map(|e| e.code.category().id()).collect();
        assert!(categories.windows(2).all(|w| w[0] <= w[1]));
    }
}
